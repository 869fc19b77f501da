use alloy_primitives::Address;
use common::UnitsError;
use thiserror::Error;

use crate::{
    constants::{
        DROPOSAL_FACTORY_ADDRESS, NFT_TOKEN_ADDRESS, TREASURY_ADDRESS, USDC_ADDRESS,
        USDC_DECIMALS,
    },
    state::{EncodedCall, TransactionDescriptor},
};

mod airdrop;
mod custom;
mod droposal;
mod send_erc20;
mod send_eth;
mod send_nft;

pub use airdrop::*;
pub use custom::*;
pub use droposal::*;
pub use send_erc20::*;
pub use send_eth::*;
pub use send_nft::*;

/// ERC-20 token moved by `SEND_ERC20` transactions.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Erc20Token {
    pub address: Address,
    pub decimals: u8,
}

/// On-chain addresses the encoders need besides the user's input.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct EncodeContext {
    pub treasury: Address,
    pub nft_token: Address,
    pub erc20: Erc20Token,
    pub droposal_factory: Address,
}

impl Default for EncodeContext {
    fn default() -> Self {
        Self {
            treasury: TREASURY_ADDRESS,
            nft_token: NFT_TOKEN_ADDRESS,
            erc20: Erc20Token {
                address: USDC_ADDRESS,
                decimals: USDC_DECIMALS,
            },
            droposal_factory: DROPOSAL_FACTORY_ADDRESS,
        }
    }
}

/// Turns a validated descriptor into the call the treasury will execute.
pub fn encode(
    descriptor: &TransactionDescriptor,
    ctx: &EncodeContext,
) -> Result<EncodedCall, EncodingError> {
    match descriptor {
        TransactionDescriptor::SendEth { recipient, amount } => {
            encode_send_eth(*recipient, amount)
        }
        TransactionDescriptor::SendErc20 { recipient, amount } => {
            encode_send_erc20(ctx, *recipient, amount)
        }
        TransactionDescriptor::SendNft {
            recipient,
            token_id,
        } => Ok(encode_send_nft(ctx, *recipient, *token_id)),
        TransactionDescriptor::AirdropRandomNft { recipient_count } => {
            Ok(encode_airdrop(ctx, *recipient_count))
        }
        TransactionDescriptor::MintBatchDroposal(params) => encode_droposal(ctx, params),
        TransactionDescriptor::Custom {
            target,
            value,
            calldata,
        } => encode_custom(*target, value, calldata),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("{field} does not fit in uint{bits}")]
    AmountOutOfRange { field: &'static str, bits: usize },
    #[error("Royalty of {0} BPS exceeds 10000")]
    RoyaltyOutOfRange(u16),
    #[error("Sale ends at {end}, before it starts at {start}")]
    SaleWindow { start: u64, end: u64 },
    #[error("Calldata of {0} bytes is shorter than a function selector")]
    MalformedCalldata(usize),
}

impl EncodingError {
    pub(crate) fn amount(field: &'static str, bits: usize) -> impl Fn(UnitsError) -> Self {
        move |_| EncodingError::AmountOutOfRange { field, bits }
    }
}
