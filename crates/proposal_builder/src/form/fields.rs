use std::collections::BTreeMap;

use alloy_primitives::{Address, Bytes, U256};
use chrono::NaiveDate;
use common::{parse_address, parse_calldata, DecimalAmount};
use thiserror::Error;

use crate::{
    constants::{MAX_ROYALTY_BPS, ROYALTY_PERCENT_DECIMALS},
    state::{EditionSize, RawFields, TransactionKind},
};

/// Field-level errors keyed by field name. Empty means every field is valid.
pub type FieldErrors = BTreeMap<&'static str, ValidationError>;

pub type Validator = fn(&str) -> Result<(), ValidationError>;

/// One input of a transaction form.
#[derive(Debug, Clone, Copy)]
pub struct FieldDef {
    pub name: &'static str,
    pub label: &'static str,
    pub validate: Validator,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field is required.")]
    Required,
    #[error("Invalid Ethereum address.")]
    InvalidAddress,
    #[error("Enter a valid number.")]
    InvalidNumber,
    #[error("Amount must be greater than zero.")]
    ZeroAmount,
    #[error("Enter a whole number.")]
    InvalidInteger,
    #[error("Value is too large.")]
    OutOfRange,
    #[error("Enter a date as yyyy-mm-dd or a unix timestamp.")]
    InvalidDate,
    #[error("Royalty must be a percentage between 0 and 100 with at most two decimals.")]
    InvalidRoyalty,
    #[error("Enter \"open\" or a positive edition size.")]
    InvalidEditionSize,
    #[error("Enter a URI such as ipfs://... or https://...")]
    InvalidUri,
    #[error("Calldata must be 0x-prefixed hex.")]
    InvalidCalldata,
}

const SEND_ETH_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "amount",
        label: "Amount (ETH)",
        validate: validate_positive_amount,
    },
    FieldDef {
        name: "recipient",
        label: "Destination Address",
        validate: validate_address,
    },
];

const SEND_ERC20_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "amount",
        label: "Amount",
        validate: validate_positive_amount,
    },
    FieldDef {
        name: "recipient",
        label: "Destination Address",
        validate: validate_address,
    },
];

const SEND_NFT_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "tokenId",
        label: "Token ID",
        validate: validate_token_id,
    },
    FieldDef {
        name: "recipient",
        label: "Destination Address",
        validate: validate_address,
    },
];

const AIRDROP_FIELDS: &[FieldDef] = &[FieldDef {
    name: "recipientCount",
    label: "Number of Recipients",
    validate: validate_recipient_count,
}];

const DROPOSAL_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "name",
        label: "Name",
        validate: validate_text,
    },
    FieldDef {
        name: "symbol",
        label: "Symbol",
        validate: validate_text,
    },
    FieldDef {
        name: "description",
        label: "Description",
        validate: validate_text,
    },
    FieldDef {
        name: "mediaUri",
        label: "Media URL",
        validate: validate_uri,
    },
    FieldDef {
        name: "price",
        label: "Price (ETH)",
        validate: validate_amount,
    },
    FieldDef {
        name: "editionSize",
        label: "Edition Size",
        validate: validate_edition_size,
    },
    FieldDef {
        name: "saleStart",
        label: "Start Time (yyyy-mm-dd)",
        validate: validate_timestamp,
    },
    FieldDef {
        name: "saleEnd",
        label: "End Time (yyyy-mm-dd)",
        validate: validate_timestamp,
    },
    FieldDef {
        name: "mintLimit",
        label: "Mint Limit Per Address",
        validate: validate_mint_limit,
    },
    FieldDef {
        name: "royalty",
        label: "Royalty (%)",
        validate: validate_royalty,
    },
    FieldDef {
        name: "payoutAddress",
        label: "Payout Address",
        validate: validate_address,
    },
    FieldDef {
        name: "adminAddress",
        label: "Default Admin Address",
        validate: validate_address,
    },
];

const CUSTOM_FIELDS: &[FieldDef] = &[
    FieldDef {
        name: "target",
        label: "Target Contract",
        validate: validate_address,
    },
    FieldDef {
        name: "value",
        label: "Value (ETH)",
        validate: validate_amount,
    },
    FieldDef {
        name: "calldata",
        label: "Calldata",
        validate: validate_calldata,
    },
];

/// Ordered inputs of `kind`.
pub fn fields(kind: TransactionKind) -> &'static [FieldDef] {
    match kind {
        TransactionKind::SendEth => SEND_ETH_FIELDS,
        TransactionKind::SendErc20 => SEND_ERC20_FIELDS,
        TransactionKind::SendNft => SEND_NFT_FIELDS,
        TransactionKind::AirdropRandomNft => AIRDROP_FIELDS,
        TransactionKind::MintBatchDroposal => DROPOSAL_FIELDS,
        TransactionKind::Custom => CUSTOM_FIELDS,
    }
}

/// Like [`fields`] for a wire name; unknown kinds have no fields.
pub fn fields_for_name(kind: &str) -> &'static [FieldDef] {
    kind.parse::<TransactionKind>()
        .map(fields)
        .unwrap_or(&[])
}

pub fn validate_field(def: &FieldDef, raw: Option<&str>) -> Result<(), ValidationError> {
    match raw.map(str::trim) {
        None | Some("") => Err(ValidationError::Required),
        Some(value) => (def.validate)(value),
    }
}

/// Validates each field of `kind` on its own. Fields not belonging to the
/// kind are ignored.
pub fn validate_fields(kind: TransactionKind, values: &RawFields) -> FieldErrors {
    fields(kind)
        .iter()
        .filter_map(|def| {
            validate_field(def, values.get(def.name).map(String::as_str))
                .err()
                .map(|err| (def.name, err))
        })
        .collect()
}

/// Every field present, non-empty and valid.
pub fn is_ready(kind: TransactionKind, values: &RawFields) -> bool {
    validate_fields(kind, values).is_empty()
}

pub fn is_ready_for_name(kind: &str, values: &RawFields) -> bool {
    kind.parse::<TransactionKind>()
        .map(|kind| is_ready(kind, values))
        .unwrap_or(false)
}

// Parsers. Each trims its input; validators are the parsers with the value
// discarded so a validated form always parses.

pub(crate) fn parse_address_field(raw: &str) -> Result<Address, ValidationError> {
    parse_address(raw.trim()).map_err(|_| ValidationError::InvalidAddress)
}

pub(crate) fn parse_amount(raw: &str) -> Result<DecimalAmount, ValidationError> {
    DecimalAmount::parse(raw).map_err(|_| ValidationError::InvalidNumber)
}

pub(crate) fn parse_positive_amount(raw: &str) -> Result<DecimalAmount, ValidationError> {
    let amount = parse_amount(raw)?;
    if amount.is_zero() {
        return Err(ValidationError::ZeroAmount);
    }
    Ok(amount)
}

fn parse_integer(raw: &str) -> Result<U256, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidInteger);
    }
    U256::from_str_radix(raw, 10).map_err(|_| ValidationError::OutOfRange)
}

fn parse_small_integer<T: TryFrom<U256>>(raw: &str) -> Result<T, ValidationError> {
    T::try_from(parse_integer(raw)?).map_err(|_| ValidationError::OutOfRange)
}

pub(crate) fn parse_token_id(raw: &str) -> Result<U256, ValidationError> {
    parse_integer(raw)
}

pub(crate) fn parse_recipient_count(raw: &str) -> Result<u64, ValidationError> {
    match parse_small_integer::<u64>(raw)? {
        0 => Err(ValidationError::ZeroAmount),
        count => Ok(count),
    }
}

pub(crate) fn parse_mint_limit(raw: &str) -> Result<u32, ValidationError> {
    parse_small_integer(raw)
}

pub(crate) fn parse_text(raw: &str) -> Result<String, ValidationError> {
    Ok(raw.trim().to_string())
}

pub(crate) fn parse_uri(raw: &str) -> Result<String, ValidationError> {
    let raw = raw.trim();
    match raw.split_once("://") {
        Some((scheme, rest))
            if !rest.is_empty()
                && !scheme.is_empty()
                && scheme.bytes().all(|b| b.is_ascii_alphanumeric()) =>
        {
            Ok(raw.to_string())
        }
        _ => Err(ValidationError::InvalidUri),
    }
}

pub(crate) fn parse_edition_size(raw: &str) -> Result<EditionSize, ValidationError> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("open") {
        return Ok(EditionSize::Open);
    }
    match parse_small_integer::<u64>(raw) {
        Ok(0) | Err(_) => Err(ValidationError::InvalidEditionSize),
        Ok(size) => Ok(EditionSize::Fixed(size)),
    }
}

/// `yyyy-mm-dd` (midnight UTC) or unix seconds.
pub(crate) fn parse_timestamp(raw: &str) -> Result<u64, ValidationError> {
    let raw = raw.trim();
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        return raw.parse().map_err(|_| ValidationError::OutOfRange);
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| ValidationError::InvalidDate)?;
    let timestamp = date
        .and_hms_opt(0, 0, 0)
        .ok_or(ValidationError::InvalidDate)?
        .and_utc()
        .timestamp();
    u64::try_from(timestamp).map_err(|_| ValidationError::InvalidDate)
}

/// Percentage with at most two decimals, returned in basis points.
pub(crate) fn parse_royalty(raw: &str) -> Result<u16, ValidationError> {
    let percent = DecimalAmount::parse(raw).map_err(|_| ValidationError::InvalidRoyalty)?;
    if percent.scale() > ROYALTY_PERCENT_DECIMALS as usize {
        return Err(ValidationError::InvalidRoyalty);
    }
    let bps = percent
        .to_base_units(ROYALTY_PERCENT_DECIMALS)
        .map_err(|_| ValidationError::InvalidRoyalty)?;
    match u16::try_from(bps) {
        Ok(bps) if bps <= MAX_ROYALTY_BPS => Ok(bps),
        _ => Err(ValidationError::InvalidRoyalty),
    }
}

pub(crate) fn parse_calldata_field(raw: &str) -> Result<Bytes, ValidationError> {
    parse_calldata(raw.trim()).map_err(|_| ValidationError::InvalidCalldata)
}

pub fn validate_address(raw: &str) -> Result<(), ValidationError> {
    parse_address_field(raw).map(drop)
}

pub fn validate_amount(raw: &str) -> Result<(), ValidationError> {
    parse_amount(raw).map(drop)
}

pub fn validate_positive_amount(raw: &str) -> Result<(), ValidationError> {
    parse_positive_amount(raw).map(drop)
}

pub fn validate_token_id(raw: &str) -> Result<(), ValidationError> {
    parse_token_id(raw).map(drop)
}

pub fn validate_recipient_count(raw: &str) -> Result<(), ValidationError> {
    parse_recipient_count(raw).map(drop)
}

pub fn validate_mint_limit(raw: &str) -> Result<(), ValidationError> {
    parse_mint_limit(raw).map(drop)
}

pub fn validate_text(raw: &str) -> Result<(), ValidationError> {
    parse_text(raw).map(drop)
}

pub fn validate_uri(raw: &str) -> Result<(), ValidationError> {
    parse_uri(raw).map(drop)
}

pub fn validate_edition_size(raw: &str) -> Result<(), ValidationError> {
    parse_edition_size(raw).map(drop)
}

pub fn validate_timestamp(raw: &str) -> Result<(), ValidationError> {
    parse_timestamp(raw).map(drop)
}

pub fn validate_royalty(raw: &str) -> Result<(), ValidationError> {
    parse_royalty(raw).map(drop)
}

pub fn validate_calldata(raw: &str) -> Result<(), ValidationError> {
    parse_calldata_field(raw).map(drop)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{raw_fields, valid_fields, RECIPIENT};

    #[test]
    fn test_every_kind_ready_when_all_fields_valid() {
        for kind in TransactionKind::ALL {
            assert!(is_ready(kind, &valid_fields(kind)), "{kind} not ready");
        }
    }

    #[test]
    fn test_removing_any_field_breaks_readiness() {
        for kind in TransactionKind::ALL {
            for def in fields(kind) {
                let mut values = valid_fields(kind);
                values.remove(def.name);
                assert!(!is_ready(kind, &values), "{kind} ready without {}", def.name);
                assert_eq!(
                    validate_fields(kind, &values).get(def.name),
                    Some(&ValidationError::Required)
                );
            }
        }
    }

    const FREE_TEXT: &[&str] = &["name", "symbol", "description"];

    #[test]
    fn test_corrupting_any_validated_field_breaks_readiness() {
        for kind in TransactionKind::ALL {
            for def in fields(kind) {
                // Free text accepts anything non-empty; blank it instead.
                let corrupt = if FREE_TEXT.contains(&def.name) {
                    "   "
                } else {
                    "not valid!"
                };
                let mut values = valid_fields(kind);
                values.insert(def.name.to_string(), corrupt.to_string());
                assert!(!is_ready(kind, &values), "{kind} accepted corrupt {}", def.name);
            }
        }
    }

    #[test]
    fn test_unknown_kind_has_no_fields_and_is_never_ready() {
        assert!(fields_for_name("SEND_DOGE").is_empty());
        assert!(!is_ready_for_name("SEND_DOGE", &RawFields::new()));
        assert_eq!(fields_for_name("SEND_ETH").len(), 2);
        assert!(is_ready_for_name("SEND_ETH", &valid_fields(TransactionKind::SendEth)));
    }

    #[test]
    fn test_address_validation() {
        assert_eq!(validate_address("0x123"), Err(ValidationError::InvalidAddress));
        assert_eq!(validate_address(RECIPIENT), Ok(()));
        assert_eq!(validate_address(&RECIPIENT.to_lowercase()), Ok(()));
    }

    #[test]
    fn test_amount_validation() {
        assert_eq!(validate_positive_amount("1,250.75"), Ok(()));
        assert_eq!(validate_positive_amount("0"), Err(ValidationError::ZeroAmount));
        assert_eq!(validate_positive_amount("1e3"), Err(ValidationError::InvalidNumber));
        assert_eq!(validate_positive_amount("one"), Err(ValidationError::InvalidNumber));
        assert_eq!(validate_amount("0"), Ok(()));
    }

    #[test]
    fn test_errors_are_independent_per_field() {
        let values = raw_fields(&[("amount", "abc"), ("recipient", RECIPIENT)]);
        let errors = validate_fields(TransactionKind::SendErc20, &values);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("amount"), Some(&ValidationError::InvalidNumber));
    }

    #[test]
    fn test_timestamp_formats() {
        assert_eq!(parse_timestamp("2025-01-01"), Ok(1_735_689_600));
        assert_eq!(parse_timestamp("1735689600"), Ok(1_735_689_600));
        assert_eq!(parse_timestamp("01/01/2025"), Err(ValidationError::InvalidDate));
        assert_eq!(parse_timestamp("2025-02-30"), Err(ValidationError::InvalidDate));
    }

    #[test]
    fn test_royalty_to_bps() {
        assert_eq!(parse_royalty("5"), Ok(500));
        assert_eq!(parse_royalty("2.5"), Ok(250));
        assert_eq!(parse_royalty("100"), Ok(10_000));
        assert_eq!(parse_royalty("0.125"), Err(ValidationError::InvalidRoyalty));
        assert_eq!(parse_royalty("101"), Err(ValidationError::InvalidRoyalty));
    }

    #[test]
    fn test_edition_size() {
        assert_eq!(parse_edition_size("OPEN"), Ok(EditionSize::Open));
        assert_eq!(parse_edition_size("250"), Ok(EditionSize::Fixed(250)));
        assert_eq!(parse_edition_size("0"), Err(ValidationError::InvalidEditionSize));
        assert_eq!(parse_edition_size("-1"), Err(ValidationError::InvalidEditionSize));
    }

    #[test]
    fn test_uri() {
        assert!(parse_uri("ipfs://bafybeigdyrzt5").is_ok());
        assert!(parse_uri("https://example.com/a.png").is_ok());
        assert_eq!(parse_uri("example.com/a.png"), Err(ValidationError::InvalidUri));
        assert_eq!(parse_uri("ipfs://"), Err(ValidationError::InvalidUri));
    }

    #[test]
    fn test_mint_limit_and_recipient_count() {
        assert_eq!(parse_mint_limit("0"), Ok(0));
        assert_eq!(parse_mint_limit("4294967296"), Err(ValidationError::OutOfRange));
        assert_eq!(parse_recipient_count("0"), Err(ValidationError::ZeroAmount));
        assert_eq!(parse_recipient_count("12"), Ok(12));
    }
}
