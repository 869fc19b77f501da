use alloy_primitives::U256;
use alloy_sol_types::SolCall;

use crate::{internal::EncodeContext, solidity::IGnarsToken, state::EncodedCall};

pub fn encode_airdrop(ctx: &EncodeContext, recipient_count: u64) -> EncodedCall {
    let calldata = IGnarsToken::airdropCall {
        numRecipients: U256::from(recipient_count),
    }
    .abi_encode();

    EncodedCall::call(ctx.nft_token, calldata)
}

/// Read call for how many tokens the reserve can still airdrop.
pub fn remaining_reserve_call(ctx: &EncodeContext) -> EncodedCall {
    EncodedCall::call(
        ctx.nft_token,
        IGnarsToken::remainingTokensInReserveCall {}.abi_encode(),
    )
}

pub fn decode_remaining_reserve(data: &[u8]) -> Result<U256, alloy_sol_types::Error> {
    Ok(IGnarsToken::remainingTokensInReserveCall::abi_decode_returns(data, true)?._0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_context;

    #[test]
    fn test_airdrop_targets_token() {
        let ctx = test_context();
        let call = encode_airdrop(&ctx, 12);

        assert_eq!(call.target, ctx.nft_token);
        assert_eq!(&call.calldata[..4], IGnarsToken::airdropCall::SELECTOR.as_slice());

        let decoded = IGnarsToken::airdropCall::abi_decode(&call.calldata, true).unwrap();
        assert_eq!(decoded.numRecipients, U256::from(12));
    }

    #[test]
    fn test_remaining_reserve() {
        let ctx = test_context();
        let call = remaining_reserve_call(&ctx);
        assert_eq!(call.target, ctx.nft_token);
        assert_eq!(
            call.calldata.as_ref(),
            IGnarsToken::remainingTokensInReserveCall::SELECTOR.as_slice()
        );

        let returned = U256::from(37).to_be_bytes::<32>();
        assert_eq!(decode_remaining_reserve(&returned).unwrap(), U256::from(37));
    }
}
