use alloy_primitives::Address;
use alloy_sol_types::SolCall;
use common::DecimalAmount;

use crate::{
    internal::{EncodeContext, EncodingError},
    solidity::IERC20,
    state::EncodedCall,
};

/// `transfer(recipient, amount)` on the configured token, scaled by its decimals.
pub fn encode_send_erc20(
    ctx: &EncodeContext,
    recipient: Address,
    amount: &DecimalAmount,
) -> Result<EncodedCall, EncodingError> {
    let amount = amount
        .to_base_units(ctx.erc20.decimals)
        .map_err(EncodingError::amount("amount", 256))?;

    let calldata = IERC20::transferCall {
        to: recipient,
        amount,
    }
    .abi_encode();

    Ok(EncodedCall::call(ctx.erc20.address, calldata))
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;

    use super::*;
    use crate::test_utils::{recipient, test_context};

    #[test]
    fn test_send_erc20_uses_token_decimals() {
        let ctx = test_context();
        let call = encode_send_erc20(&ctx, recipient(), &"250".parse().unwrap()).unwrap();

        assert_eq!(call.target, ctx.erc20.address);
        assert_eq!(call.value_string(), "0");

        let decoded = IERC20::transferCall::abi_decode(&call.calldata, true).unwrap();
        assert_eq!(decoded.to, recipient());
        assert_eq!(decoded.amount, U256::from(250_000_000u64));
    }

    #[test]
    fn test_send_erc20_fraction_at_six_and_eighteen_decimals() {
        let mut ctx = test_context();
        let amount = "1.5".parse().unwrap();

        let call = encode_send_erc20(&ctx, recipient(), &amount).unwrap();
        let decoded = IERC20::transferCall::abi_decode(&call.calldata, true).unwrap();
        assert_eq!(decoded.amount, U256::from(1_500_000u64));

        ctx.erc20.decimals = 18;
        let call = encode_send_erc20(&ctx, recipient(), &amount).unwrap();
        let decoded = IERC20::transferCall::abi_decode(&call.calldata, true).unwrap();
        assert_eq!(decoded.amount, U256::from(1_500_000_000_000_000_000u128));
    }
}
