use alloy_primitives::{Address, Bytes};
use common::{DecimalAmount, SELECTOR_LEN};

use crate::{constants::ETH_DECIMALS, internal::EncodingError, state::EncodedCall};

/// Passes `calldata` through unchanged. Empty calldata is a plain transfer;
/// anything else must at least hold a function selector.
pub fn encode_custom(
    target: Address,
    value: &DecimalAmount,
    calldata: &Bytes,
) -> Result<EncodedCall, EncodingError> {
    if !calldata.is_empty() && calldata.len() < SELECTOR_LEN {
        return Err(EncodingError::MalformedCalldata(calldata.len()));
    }

    let value = value
        .to_base_units(ETH_DECIMALS)
        .map_err(EncodingError::amount("value", 256))?;

    Ok(EncodedCall {
        target,
        value,
        calldata: calldata.clone(),
    })
}
