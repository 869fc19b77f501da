use alloy_primitives::Address;
use common::DecimalAmount;

use crate::{constants::ETH_DECIMALS, internal::EncodingError, state::EncodedCall};

/// Plain ETH transfer from the treasury; fractions below one wei are dropped.
pub fn encode_send_eth(
    recipient: Address,
    amount: &DecimalAmount,
) -> Result<EncodedCall, EncodingError> {
    let value = amount
        .to_base_units(ETH_DECIMALS)
        .map_err(EncodingError::amount("amount", 256))?;

    Ok(EncodedCall::transfer(recipient, value))
}
