use alloy_primitives::Address;
use hex_literal::hex;

// Network

/// Base mainnet.
pub const CHAIN_ID: u64 = 8453;

pub const ETH_DECIMALS: u8 = 18;

// DAO contracts

pub const NFT_TOKEN_ADDRESS: Address =
    Address::new(hex!("880fb3cf5c6cc2d7dfc13a993e839a9411200c17"));

pub const TREASURY_ADDRESS: Address =
    Address::new(hex!("72ad986ebac0246d2b3c565ab2a1ce3a14ce6f88"));

pub const GOVERNOR_ADDRESS: Address =
    Address::new(hex!("3dd4e53a232b7b715c9ae455f4e732465ed71b4c"));

// Zora edition factory used for droposals.
pub const DROPOSAL_FACTORY_ADDRESS: Address =
    Address::new(hex!("58c3ccb2dcb9384e5ab9111cd1a5dea916b0f33c"));

// Stablecoin paid out by SEND_ERC20

pub const USDC_ADDRESS: Address = Address::new(hex!("833589fcd6edb6e08f4c7c32d4f71b54bda02913"));

pub const USDC_DECIMALS: u8 = 6;

// Droposals

/// Edition size the factory interprets as an open edition.
pub const OPEN_EDITION_SIZE: u64 = u64::MAX;

pub const MAX_ROYALTY_BPS: u16 = 10_000;

/// Royalty is entered as a percentage with at most this many decimals.
pub const ROYALTY_PERCENT_DECIMALS: u8 = 2;

pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "m4v"];

pub const IPFS_GATEWAY: &str = "https://gateway.pinata.cloud/ipfs/";

// Proposals

/// A title must be strictly longer than this many characters.
pub const MIN_TITLE_LENGTH: usize = 5;

/// Separates title and body in the on-chain proposal description.
pub const DESCRIPTION_SEPARATOR: &str = "&&";

// Simulation

pub const DEFAULT_SIMULATION_URL: &str = "http://localhost:3000/api/simulate";

pub const DEFAULT_SIMULATION_TIMEOUT_SECS: u64 = 30;
