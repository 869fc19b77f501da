use alloy_primitives::Address;
use thiserror::Error;

/// Number of hex digits in a 20-byte account address.
pub const ADDRESS_HEX_LEN: usize = 40;

/// Parses a `0x`-prefixed 20-byte address.
///
/// All-lowercase and all-uppercase digits are accepted as-is. Mixed case is
/// treated as an EIP-55 checksum and must match it.
pub fn parse_address(input: &str) -> Result<Address, AddressError> {
    let digits = input
        .strip_prefix("0x")
        .ok_or(AddressError::MissingPrefix)?;

    if digits.len() != ADDRESS_HEX_LEN {
        return Err(AddressError::InvalidLength(digits.len()));
    }

    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(AddressError::InvalidHex);
    }

    let has_lower = digits.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = digits.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Address::parse_checksummed(input, None).map_err(|_| AddressError::BadChecksum);
    }

    let mut bytes = [0u8; 20];
    hex::decode_to_slice(digits, &mut bytes).map_err(|_| AddressError::InvalidHex)?;
    Ok(Address::new(bytes))
}

pub fn is_address(input: &str) -> bool {
    parse_address(input).is_ok()
}

/// Short display form, e.g. `0x880f…0c17`.
pub fn shorten_address(address: &Address) -> String {
    let full = address.to_checksum(None);
    format!("{}…{}", &full[..6], &full[full.len() - 4..])
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("Address must start with 0x")]
    MissingPrefix,
    #[error("Address must have 40 hex digits, found {0}")]
    InvalidLength(usize),
    #[error("Address contains non-hex characters")]
    InvalidHex,
    #[error("Address checksum does not match")]
    BadChecksum,
}
