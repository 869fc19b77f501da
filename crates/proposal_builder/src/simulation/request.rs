use alloy_sol_types::SolCall;
use serde::{Deserialize, Serialize};

use crate::{
    internal::EncodeContext,
    solidity::{IGnarsToken, IZoraNFTCreator, IERC20},
    state::{DraftTransaction, EncodedCall, TransactionDescriptor, TransactionKind},
};

/// Body POSTed to the simulation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub details: SimulationDetails,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationDetails {
    /// Amount in base units, for value and token transfers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_id: Option<String>,
    /// Checksummed sender, always the treasury.
    pub from_address: String,
    pub to_address: String,
    /// Transaction input, identical to `calldata`.
    pub input: String,
    /// Human-readable ABI fragments of the called function.
    pub contract_abi: Vec<String>,
    pub value: String,
    pub calldata: String,
}

impl SimulationRequest {
    /// Simulates `call` as if executed by the treasury.
    pub fn new(descriptor: &TransactionDescriptor, call: &EncodedCall, ctx: &EncodeContext) -> Self {
        let (amount, token_id) = match descriptor {
            TransactionDescriptor::SendEth { .. } => (Some(call.value_string()), None),
            TransactionDescriptor::SendErc20 { amount, .. } => (
                amount
                    .to_base_units(ctx.erc20.decimals)
                    .ok()
                    .map(|amount| amount.to_string()),
                None,
            ),
            TransactionDescriptor::SendNft { token_id, .. } => (None, Some(token_id.to_string())),
            TransactionDescriptor::AirdropRandomNft { .. }
            | TransactionDescriptor::MintBatchDroposal(_)
            | TransactionDescriptor::Custom { .. } => (None, None),
        };

        let calldata = call.calldata_hex();
        Self {
            kind: descriptor.kind(),
            details: SimulationDetails {
                amount,
                token_id,
                from_address: ctx.treasury.to_checksum(None),
                to_address: call.target.to_checksum(None),
                input: calldata.clone(),
                contract_abi: contract_abi(descriptor.kind()),
                value: call.value_string(),
                calldata,
            },
        }
    }

    pub fn for_row(row: &DraftTransaction, ctx: &EncodeContext) -> Self {
        Self::new(&row.descriptor, &row.call, ctx)
    }
}

/// ABI fragments of the function each kind calls; empty when nothing is called
/// or the function is not known ahead of time.
pub fn contract_abi(kind: TransactionKind) -> Vec<String> {
    let signature = match kind {
        TransactionKind::SendEth | TransactionKind::Custom => return Vec::new(),
        TransactionKind::SendErc20 => IERC20::transferCall::SIGNATURE,
        TransactionKind::SendNft => IGnarsToken::safeTransferFromCall::SIGNATURE,
        TransactionKind::AirdropRandomNft => IGnarsToken::airdropCall::SIGNATURE,
        TransactionKind::MintBatchDroposal => IZoraNFTCreator::createEditionCall::SIGNATURE,
    };
    vec![format!("function {signature}")]
}
