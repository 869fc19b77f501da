use alloy_primitives::Address;
use thiserror::Error;

/// Wallet state handed to whatever needs to act on the user's behalf.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct WalletContext {
    pub address: Option<Address>,
    pub chain_id: Option<u64>,
    pub can_sign: bool,
}

impl WalletContext {
    pub fn disconnected() -> Self {
        Self::default()
    }

    pub fn signer(address: Address, chain_id: u64) -> Self {
        Self {
            address: Some(address),
            chain_id: Some(chain_id),
            can_sign: true,
        }
    }

    /// An address known without a way to sign for it.
    pub fn watch_only(address: Address, chain_id: u64) -> Self {
        Self {
            can_sign: false,
            ..Self::signer(address, chain_id)
        }
    }

    pub fn is_connected(&self) -> bool {
        self.address.is_some()
    }

    /// The address that can sign transactions on `chain_id`.
    pub fn require_signer(&self, chain_id: u64) -> Result<Address, WalletError> {
        let address = self.address.ok_or(WalletError::NotConnected)?;
        if !self.can_sign {
            return Err(WalletError::CannotSign(address));
        }
        match self.chain_id {
            Some(actual) if actual == chain_id => Ok(address),
            actual => Err(WalletError::WrongChain {
                expected: chain_id,
                actual,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WalletError {
    #[error("Connect a wallet first")]
    NotConnected,
    #[error("Wallet {0} can not sign")]
    CannotSign(Address),
    #[error("Wrong network: expected chain {expected}, wallet is on {actual:?}")]
    WrongChain { expected: u64, actual: Option<u64> },
}
