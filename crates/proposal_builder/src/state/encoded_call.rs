use alloy_primitives::{Address, Bytes, U256};
use common::encode_calldata;

/// An on-chain call ready to be bundled into a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EncodedCall {
    pub target: Address,
    /// Native currency in wei.
    pub value: U256,
    pub calldata: Bytes,
}

impl EncodedCall {
    /// A plain value transfer with no calldata.
    pub fn transfer(target: Address, value: U256) -> Self {
        Self {
            target,
            value,
            calldata: Bytes::new(),
        }
    }

    /// A contract call carrying no native value.
    pub fn call(target: Address, calldata: Vec<u8>) -> Self {
        Self {
            target,
            value: U256::ZERO,
            calldata: Bytes::from(calldata),
        }
    }

    pub fn is_plain_transfer(&self) -> bool {
        self.calldata.is_empty()
    }

    /// Decimal wei string, `"0"` when no value is attached.
    pub fn value_string(&self) -> String {
        self.value.to_string()
    }

    /// `0x`-prefixed calldata, exactly `"0x"` for plain transfers.
    pub fn calldata_hex(&self) -> String {
        encode_calldata(&self.calldata)
    }
}
