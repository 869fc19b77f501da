use alloy_primitives::Address;

use crate::{
    internal::{encode, EncodeContext},
    state::{EncodedCall, RawFields, TransactionDescriptor, TransactionKind},
};

pub const RECIPIENT: &str = "0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045";

pub fn recipient() -> Address {
    common::parse_address(RECIPIENT).unwrap()
}

pub fn test_context() -> EncodeContext {
    EncodeContext::default()
}

pub fn raw_fields(pairs: &[(&str, &str)]) -> RawFields {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}

/// A complete, valid form for `kind`.
pub fn valid_fields(kind: TransactionKind) -> RawFields {
    match kind {
        TransactionKind::SendEth => raw_fields(&[("amount", "0.1"), ("recipient", RECIPIENT)]),
        TransactionKind::SendErc20 => raw_fields(&[("amount", "250"), ("recipient", RECIPIENT)]),
        TransactionKind::SendNft => raw_fields(&[("tokenId", "42"), ("recipient", RECIPIENT)]),
        TransactionKind::AirdropRandomNft => raw_fields(&[("recipientCount", "5")]),
        TransactionKind::MintBatchDroposal => raw_fields(&[
            ("name", "Gnars Skate Pass"),
            ("symbol", "GSP"),
            ("description", "One pass per session."),
            ("mediaUri", "ipfs://bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi"),
            ("price", "0.01"),
            ("editionSize", "250"),
            ("saleStart", "2025-01-01"),
            ("saleEnd", "2025-02-01"),
            ("mintLimit", "5"),
            ("royalty", "5"),
            ("payoutAddress", RECIPIENT),
            ("adminAddress", RECIPIENT),
        ]),
        TransactionKind::Custom => raw_fields(&[
            ("target", RECIPIENT),
            ("value", "0"),
            ("calldata", "0xd09de08a"),
        ]),
    }
}

pub fn eth_row(amount: &str, ctx: &EncodeContext) -> (TransactionDescriptor, EncodedCall) {
    let fields = raw_fields(&[("amount", amount), ("recipient", RECIPIENT)]);
    let descriptor = TransactionDescriptor::from_fields(TransactionKind::SendEth, &fields).unwrap();
    let call = encode(&descriptor, ctx).unwrap();
    (descriptor, call)
}
