use alloy_primitives::{Address, Bytes, U256};
use alloy_sol_types::SolCall;
use common::format_units;

use crate::{
    constants::{ETH_DECIMALS, OPEN_EDITION_SIZE, ROYALTY_PERCENT_DECIMALS},
    internal::EncodeContext,
    solidity::{IGnarsToken, IZoraNFTCreator, IERC20},
    state::{EditionSize, EncodedCall},
};

/// What a proposal transaction does, as far as the known contracts tell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedTransaction {
    EthTransfer {
        to: Address,
        value: U256,
        /// In ETH.
        formatted: String,
    },
    Erc20Transfer {
        token: Address,
        to: Address,
        amount: U256,
        /// In whole tokens.
        formatted: String,
    },
    NftTransfer {
        from: Address,
        to: Address,
        token_id: U256,
    },
    Airdrop {
        recipients: U256,
    },
    Droposal(DecodedDroposal),
    Generic {
        target: Address,
        value: U256,
        calldata: Bytes,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDroposal {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub edition_size: EditionSize,
    /// e.g. `"5"` or `"2.5"`.
    pub royalty_percent: String,
    /// In ETH.
    pub price: String,
    pub sale_start: u64,
    pub sale_end: u64,
    pub mint_limit: u32,
    pub funds_recipient: Address,
    pub default_admin: Address,
    pub animation_uri: String,
    pub image_uri: String,
}

impl DecodedDroposal {
    /// The media to show, resolved through `gateway` when stored on IPFS.
    pub fn media_url(&self, gateway: &str) -> Option<String> {
        [&self.animation_uri, &self.image_uri]
            .into_iter()
            .find(|uri| !uri.is_empty())
            .map(|uri| gateway_url(uri, gateway))
    }
}

pub fn decode_transaction(call: &EncodedCall, ctx: &EncodeContext) -> DecodedTransaction {
    if call.calldata.is_empty() && !call.value.is_zero() {
        return DecodedTransaction::EthTransfer {
            to: call.target,
            value: call.value,
            formatted: format_units(call.value, ETH_DECIMALS),
        };
    }

    if call.target == ctx.erc20.address {
        if let Ok(transfer) = IERC20::transferCall::abi_decode(&call.calldata, true) {
            return DecodedTransaction::Erc20Transfer {
                token: call.target,
                to: transfer.to,
                amount: transfer.amount,
                formatted: format_units(transfer.amount, ctx.erc20.decimals),
            };
        }
    }

    if call.target == ctx.nft_token {
        if let Ok(transfer) = IGnarsToken::safeTransferFromCall::abi_decode(&call.calldata, true) {
            return DecodedTransaction::NftTransfer {
                from: transfer.from,
                to: transfer.to,
                token_id: transfer.tokenId,
            };
        }
        if let Ok(airdrop) = IGnarsToken::airdropCall::abi_decode(&call.calldata, true) {
            return DecodedTransaction::Airdrop {
                recipients: airdrop.numRecipients,
            };
        }
    }

    if call.target == ctx.droposal_factory {
        if let Ok(edition) = IZoraNFTCreator::createEditionCall::abi_decode(&call.calldata, true) {
            return DecodedTransaction::Droposal(decode_droposal(edition));
        }
    }

    DecodedTransaction::Generic {
        target: call.target,
        value: call.value,
        calldata: call.calldata.clone(),
    }
}

fn decode_droposal(edition: IZoraNFTCreator::createEditionCall) -> DecodedDroposal {
    let edition_size = match edition.editionSize {
        OPEN_EDITION_SIZE => EditionSize::Open,
        size => EditionSize::Fixed(size),
    };
    let limbs = edition.saleConfig.publicSalePrice.into_limbs();
    let price = U256::from_limbs([limbs[0], limbs[1], 0, 0]);

    DecodedDroposal {
        name: edition.name,
        symbol: edition.symbol,
        description: edition.description,
        edition_size,
        royalty_percent: format_units(
            U256::from(edition.royaltyBPS),
            ROYALTY_PERCENT_DECIMALS,
        ),
        price: format_units(price, ETH_DECIMALS),
        sale_start: edition.saleConfig.publicSaleStart,
        sale_end: edition.saleConfig.publicSaleEnd,
        mint_limit: edition.saleConfig.maxSalePurchasePerAddress,
        funds_recipient: edition.fundsRecipient,
        default_admin: edition.defaultAdmin,
        animation_uri: edition.animationURI,
        image_uri: edition.imageURI,
    }
}

/// Rewrites `ipfs://<cid>` to an HTTP gateway URL; other URIs are returned as is.
pub fn gateway_url(uri: &str, gateway: &str) -> String {
    match uri.strip_prefix("ipfs://") {
        Some(path) => format!(
            "{}/{}",
            gateway.trim_end_matches('/'),
            path.trim_start_matches("ipfs/")
        ),
        None => uri.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::IPFS_GATEWAY,
        internal::encode,
        state::{TransactionDescriptor, TransactionKind},
        test_utils::{recipient, test_context, valid_fields},
    };

    fn encoded(kind: TransactionKind) -> EncodedCall {
        let descriptor = TransactionDescriptor::from_fields(kind, &valid_fields(kind)).unwrap();
        encode(&descriptor, &test_context()).unwrap()
    }

    #[test]
    fn test_decodes_what_the_builder_encodes() {
        let ctx = test_context();

        assert_eq!(
            decode_transaction(&encoded(TransactionKind::SendEth), &ctx),
            DecodedTransaction::EthTransfer {
                to: recipient(),
                value: U256::from(100_000_000_000_000_000u64),
                formatted: "0.1".to_string(),
            }
        );
        assert_eq!(
            decode_transaction(&encoded(TransactionKind::SendErc20), &ctx),
            DecodedTransaction::Erc20Transfer {
                token: ctx.erc20.address,
                to: recipient(),
                amount: U256::from(250_000_000u64),
                formatted: "250".to_string(),
            }
        );
        assert_eq!(
            decode_transaction(&encoded(TransactionKind::SendNft), &ctx),
            DecodedTransaction::NftTransfer {
                from: ctx.treasury,
                to: recipient(),
                token_id: U256::from(42),
            }
        );
        assert_eq!(
            decode_transaction(&encoded(TransactionKind::AirdropRandomNft), &ctx),
            DecodedTransaction::Airdrop {
                recipients: U256::from(5),
            }
        );
        assert!(matches!(
            decode_transaction(&encoded(TransactionKind::Custom), &ctx),
            DecodedTransaction::Generic { .. }
        ));
    }

    #[test]
    fn test_decodes_droposal_for_display() {
        let ctx = test_context();
        let DecodedTransaction::Droposal(droposal) =
            decode_transaction(&encoded(TransactionKind::MintBatchDroposal), &ctx)
        else {
            panic!("expected a droposal");
        };

        assert_eq!(droposal.name, "Gnars Skate Pass");
        assert_eq!(droposal.edition_size, EditionSize::Fixed(250));
        assert_eq!(droposal.royalty_percent, "5");
        assert_eq!(droposal.price, "0.01");
        assert_eq!(droposal.sale_start, 1_735_689_600);
        assert_eq!(
            droposal.media_url(IPFS_GATEWAY).as_deref(),
            Some(
                "https://gateway.pinata.cloud/ipfs/bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi"
            )
        );
    }

    #[test]
    fn test_zero_value_empty_call_is_generic() {
        let call = EncodedCall::transfer(recipient(), U256::ZERO);
        assert!(matches!(
            decode_transaction(&call, &test_context()),
            DecodedTransaction::Generic { .. }
        ));
    }

    #[test]
    fn test_gateway_url() {
        assert_eq!(
            gateway_url("ipfs://ipfs/bafy/cover.png", "https://ipfs.io/ipfs/"),
            "https://ipfs.io/ipfs/bafy/cover.png"
        );
        assert_eq!(
            gateway_url("https://example.com/a.png", IPFS_GATEWAY),
            "https://example.com/a.png"
        );
    }
}
