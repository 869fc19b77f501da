use alloy_primitives::{Uint, B256, U256};
use alloy_sol_types::SolCall;

use crate::{
    constants::{ETH_DECIMALS, MAX_ROYALTY_BPS, OPEN_EDITION_SIZE, VIDEO_EXTENSIONS},
    internal::{EncodeContext, EncodingError},
    solidity::{IZoraNFTCreator, SalesConfig},
    state::{DroposalParams, EditionSize, EncodedCall},
};

/// Width of `SalesConfig.publicSalePrice`.
const PRICE_BITS: usize = 104;

type U104 = Uint<104, 2>;

/// `createEdition` on the droposal factory. Presale is always disabled.
pub fn encode_droposal(
    ctx: &EncodeContext,
    params: &DroposalParams,
) -> Result<EncodedCall, EncodingError> {
    if params.royalty_bps > MAX_ROYALTY_BPS {
        return Err(EncodingError::RoyaltyOutOfRange(params.royalty_bps));
    }
    if params.sale_end < params.sale_start {
        return Err(EncodingError::SaleWindow {
            start: params.sale_start,
            end: params.sale_end,
        });
    }

    let price = params
        .price
        .to_base_units(ETH_DECIMALS)
        .map_err(EncodingError::amount("price", PRICE_BITS))
        .and_then(to_u104)?;

    let (animation_uri, image_uri) = if is_video(&params.media_uri) {
        (params.media_uri.clone(), String::new())
    } else {
        (String::new(), params.media_uri.clone())
    };

    let calldata = IZoraNFTCreator::createEditionCall {
        name: params.name.clone(),
        symbol: params.symbol.clone(),
        editionSize: edition_size(params.edition_size),
        royaltyBPS: params.royalty_bps,
        fundsRecipient: params.payout_address,
        defaultAdmin: params.admin_address,
        saleConfig: SalesConfig {
            publicSalePrice: price,
            maxSalePurchasePerAddress: params.mint_limit,
            publicSaleStart: params.sale_start,
            publicSaleEnd: params.sale_end,
            presaleStart: 0,
            presaleEnd: 0,
            presaleMerkleRoot: B256::ZERO,
        },
        description: params.description.clone(),
        animationURI: animation_uri,
        imageURI: image_uri,
    }
    .abi_encode();

    Ok(EncodedCall::call(ctx.droposal_factory, calldata))
}

pub fn edition_size(size: EditionSize) -> u64 {
    match size {
        EditionSize::Fixed(size) => size,
        EditionSize::Open => OPEN_EDITION_SIZE,
    }
}

/// Whether the URI path ends in a known video extension.
pub fn is_video(uri: &str) -> bool {
    let path = uri.split(['?', '#']).next().unwrap_or_default();
    path.rsplit_once('.')
        .map(|(_, ext)| {
            VIDEO_EXTENSIONS
                .iter()
                .any(|video| video.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

fn to_u104(value: U256) -> Result<U104, EncodingError> {
    if value.bit_len() > PRICE_BITS {
        return Err(EncodingError::AmountOutOfRange {
            field: "price",
            bits: PRICE_BITS,
        });
    }
    let limbs = value.as_limbs();
    Ok(U104::from_limbs([limbs[0], limbs[1]]))
}
