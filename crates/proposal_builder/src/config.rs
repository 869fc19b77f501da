use std::{fs, path::Path};

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    constants::{
        CHAIN_ID, DEFAULT_SIMULATION_TIMEOUT_SECS, DEFAULT_SIMULATION_URL,
        DROPOSAL_FACTORY_ADDRESS, GOVERNOR_ADDRESS, IPFS_GATEWAY, NFT_TOKEN_ADDRESS,
        TREASURY_ADDRESS, USDC_ADDRESS, USDC_DECIMALS,
    },
    internal::{EncodeContext, Erc20Token},
};

/// Runtime settings. Keys missing from a loaded file keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct BuilderConfig {
    pub chain_id: u64,
    pub treasury: Address,
    pub nft_token: Address,
    pub governor: Address,
    pub droposal_factory: Address,
    pub erc20: Erc20Config,
    pub simulation_url: String,
    pub simulation_timeout_secs: u64,
    pub ipfs_gateway: String,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Erc20Config {
    pub address: Address,
    pub decimals: u8,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self {
            chain_id: CHAIN_ID,
            treasury: TREASURY_ADDRESS,
            nft_token: NFT_TOKEN_ADDRESS,
            governor: GOVERNOR_ADDRESS,
            droposal_factory: DROPOSAL_FACTORY_ADDRESS,
            erc20: Erc20Config {
                address: USDC_ADDRESS,
                decimals: USDC_DECIMALS,
            },
            simulation_url: DEFAULT_SIMULATION_URL.to_string(),
            simulation_timeout_secs: DEFAULT_SIMULATION_TIMEOUT_SECS,
            ipfs_gateway: IPFS_GATEWAY.to_string(),
        }
    }
}

impl BuilderConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let addresses = [
            ("treasury", self.treasury),
            ("nftToken", self.nft_token),
            ("governor", self.governor),
            ("droposalFactory", self.droposal_factory),
            ("erc20.address", self.erc20.address),
        ];
        if let Some((name, _)) = addresses.iter().find(|(_, address)| address.is_zero()) {
            return Err(ConfigError::Invalid(format!("{name} is the zero address")));
        }

        // 10^78 no longer fits in a uint256.
        if self.erc20.decimals > 77 {
            return Err(ConfigError::Invalid(format!(
                "erc20.decimals {} is too large",
                self.erc20.decimals
            )));
        }
        if self.simulation_timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "simulationTimeoutSecs must be positive".to_string(),
            ));
        }
        if !self.simulation_url.starts_with("http://") && !self.simulation_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "simulationUrl {} is not an http(s) URL",
                self.simulation_url
            )));
        }

        Ok(())
    }

    pub fn encode_context(&self) -> EncodeContext {
        EncodeContext {
            treasury: self.treasury,
            nft_token: self.nft_token,
            erc20: Erc20Token {
                address: self.erc20.address,
                decimals: self.erc20.decimals,
            },
            droposal_factory: self.droposal_factory,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid config: {0}")]
    Invalid(String),
}
