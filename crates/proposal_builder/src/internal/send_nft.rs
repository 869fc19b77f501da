use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;

use crate::{internal::EncodeContext, solidity::IGnarsToken, state::EncodedCall};

/// Moves a treasury-held token to `recipient`.
pub fn encode_send_nft(ctx: &EncodeContext, recipient: Address, token_id: U256) -> EncodedCall {
    let calldata = IGnarsToken::safeTransferFromCall {
        from: ctx.treasury,
        to: recipient,
        tokenId: token_id,
    }
    .abi_encode();

    EncodedCall::call(ctx.nft_token, calldata)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{recipient, test_context};

    #[test]
    fn test_send_nft_transfers_from_treasury() {
        let ctx = test_context();
        let call = encode_send_nft(&ctx, recipient(), U256::from(42));

        assert_eq!(call.target, ctx.nft_token);
        assert_eq!(call.value, U256::ZERO);

        let decoded = IGnarsToken::safeTransferFromCall::abi_decode(&call.calldata, true).unwrap();
        assert_eq!(decoded.from, ctx.treasury);
        assert_eq!(decoded.to, recipient());
        assert_eq!(decoded.tokenId, U256::from(42));
    }
}
