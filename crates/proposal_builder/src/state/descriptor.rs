use std::collections::BTreeMap;

use alloy_primitives::{Address, Bytes, U256};
use common::DecimalAmount;

use crate::{
    form::{
        fields::{
            parse_address_field, parse_amount, parse_calldata_field, parse_edition_size,
            parse_mint_limit, parse_positive_amount, parse_recipient_count, parse_royalty,
            parse_text, parse_timestamp, parse_token_id, parse_uri,
        },
        validate_fields, FieldErrors, ValidationError,
    },
    state::TransactionKind,
};

/// Raw user input of one form, keyed by field name.
pub type RawFields = BTreeMap<String, String>;

/// A validated intended action. One variant per [`TransactionKind`], each
/// holding the parsed values its encoder needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionDescriptor {
    SendEth {
        recipient: Address,
        amount: DecimalAmount,
    },
    SendErc20 {
        recipient: Address,
        amount: DecimalAmount,
    },
    SendNft {
        recipient: Address,
        token_id: U256,
    },
    AirdropRandomNft {
        recipient_count: u64,
    },
    MintBatchDroposal(DroposalParams),
    Custom {
        target: Address,
        value: DecimalAmount,
        calldata: Bytes,
    },
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EditionSize {
    Fixed(u64),
    Open,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroposalParams {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub media_uri: String,
    /// Mint price in ETH.
    pub price: DecimalAmount,
    pub edition_size: EditionSize,
    pub sale_start: u64,
    pub sale_end: u64,
    pub mint_limit: u32,
    pub royalty_bps: u16,
    pub payout_address: Address,
    pub admin_address: Address,
}

impl TransactionDescriptor {
    /// Validates every field of `kind` and builds the matching variant.
    ///
    /// Returns every field error at once when any field is missing or invalid.
    pub fn from_fields(kind: TransactionKind, fields: &RawFields) -> Result<Self, FieldErrors> {
        let errors = validate_fields(kind, fields);
        if !errors.is_empty() {
            return Err(errors);
        }

        let reader = FieldReader { fields };
        let descriptor = match kind {
            TransactionKind::SendEth => TransactionDescriptor::SendEth {
                recipient: reader.read("recipient", parse_address_field)?,
                amount: reader.read("amount", parse_positive_amount)?,
            },
            TransactionKind::SendErc20 => TransactionDescriptor::SendErc20 {
                recipient: reader.read("recipient", parse_address_field)?,
                amount: reader.read("amount", parse_positive_amount)?,
            },
            TransactionKind::SendNft => TransactionDescriptor::SendNft {
                recipient: reader.read("recipient", parse_address_field)?,
                token_id: reader.read("tokenId", parse_token_id)?,
            },
            TransactionKind::AirdropRandomNft => TransactionDescriptor::AirdropRandomNft {
                recipient_count: reader.read("recipientCount", parse_recipient_count)?,
            },
            TransactionKind::MintBatchDroposal => {
                TransactionDescriptor::MintBatchDroposal(DroposalParams {
                    name: reader.read("name", parse_text)?,
                    symbol: reader.read("symbol", parse_text)?,
                    description: reader.read("description", parse_text)?,
                    media_uri: reader.read("mediaUri", parse_uri)?,
                    price: reader.read("price", parse_amount)?,
                    edition_size: reader.read("editionSize", parse_edition_size)?,
                    sale_start: reader.read("saleStart", parse_timestamp)?,
                    sale_end: reader.read("saleEnd", parse_timestamp)?,
                    mint_limit: reader.read("mintLimit", parse_mint_limit)?,
                    royalty_bps: reader.read("royalty", parse_royalty)?,
                    payout_address: reader.read("payoutAddress", parse_address_field)?,
                    admin_address: reader.read("adminAddress", parse_address_field)?,
                })
            }
            TransactionKind::Custom => TransactionDescriptor::Custom {
                target: reader.read("target", parse_address_field)?,
                value: reader.read("value", parse_amount)?,
                calldata: reader.read("calldata", parse_calldata_field)?,
            },
        };

        Ok(descriptor)
    }

    pub fn kind(&self) -> TransactionKind {
        match self {
            TransactionDescriptor::SendEth { .. } => TransactionKind::SendEth,
            TransactionDescriptor::SendErc20 { .. } => TransactionKind::SendErc20,
            TransactionDescriptor::SendNft { .. } => TransactionKind::SendNft,
            TransactionDescriptor::AirdropRandomNft { .. } => TransactionKind::AirdropRandomNft,
            TransactionDescriptor::MintBatchDroposal(_) => TransactionKind::MintBatchDroposal,
            TransactionDescriptor::Custom { .. } => TransactionKind::Custom,
        }
    }
}

struct FieldReader<'a> {
    fields: &'a RawFields,
}

impl FieldReader<'_> {
    fn read<T>(
        &self,
        name: &'static str,
        parse: fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, FieldErrors> {
        let raw = self.fields.get(name).map(String::as_str).unwrap_or_default();
        parse(raw).map_err(|err| FieldErrors::from([(name, err)]))
    }
}
