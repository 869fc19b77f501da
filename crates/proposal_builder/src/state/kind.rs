use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of actions a proposal row can perform.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    SendEth,
    SendErc20,
    SendNft,
    AirdropRandomNft,
    MintBatchDroposal,
    Custom,
}

impl TransactionKind {
    pub const ALL: [TransactionKind; 6] = [
        TransactionKind::SendEth,
        TransactionKind::SendErc20,
        TransactionKind::SendNft,
        TransactionKind::AirdropRandomNft,
        TransactionKind::MintBatchDroposal,
        TransactionKind::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::SendEth => "SEND_ETH",
            TransactionKind::SendErc20 => "SEND_ERC20",
            TransactionKind::SendNft => "SEND_NFT",
            TransactionKind::AirdropRandomNft => "AIRDROP_RANDOM_NFT",
            TransactionKind::MintBatchDroposal => "MINT_BATCH_DROPOSAL",
            TransactionKind::Custom => "CUSTOM",
        }
    }

    /// Heading shown in the kind picker.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::SendEth => "Send ETH",
            TransactionKind::SendErc20 => "Send USDC",
            TransactionKind::SendNft => "Send Gnar",
            TransactionKind::AirdropRandomNft => "Airdrop Random Gnar",
            TransactionKind::MintBatchDroposal => "Droposal Mint",
            TransactionKind::Custom => "Custom Transaction",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TransactionKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown transaction kind `{0}`")]
pub struct UnknownKind(pub String);
