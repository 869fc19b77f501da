use alloy_primitives::Bytes;
use thiserror::Error;

/// Length of a function selector in bytes.
pub const SELECTOR_LEN: usize = 4;

/// Parses `0x`-prefixed hex calldata. `"0x"` is the empty call.
pub fn parse_calldata(input: &str) -> Result<Bytes, CalldataError> {
    let digits = input
        .strip_prefix("0x")
        .ok_or(CalldataError::MissingPrefix)?;

    if digits.len() % 2 != 0 {
        return Err(CalldataError::OddLength);
    }

    hex::decode(digits)
        .map(Bytes::from)
        .map_err(|_| CalldataError::InvalidHex)
}

/// Normalises calldata as returned by indexers: `"0"` and `""` mean no data
/// and a missing prefix is added.
pub fn normalize_calldata(raw: &str) -> String {
    let raw = raw.trim();
    match raw {
        "" | "0" | "0x" => "0x".to_string(),
        _ if raw.starts_with("0x") => raw.to_string(),
        _ => format!("0x{raw}"),
    }
}

pub fn encode_calldata(data: &[u8]) -> String {
    format!("0x{}", hex::encode(data))
}

pub fn selector(data: &[u8]) -> Option<[u8; SELECTOR_LEN]> {
    data.get(..SELECTOR_LEN)?.try_into().ok()
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalldataError {
    #[error("Calldata must start with 0x")]
    MissingPrefix,
    #[error("Calldata must have an even number of hex digits")]
    OddLength,
    #[error("Calldata contains non-hex characters")]
    InvalidHex,
}
