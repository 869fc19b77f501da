//! Dry-runs of single proposal transactions against an external service.
//!
//! Results are advisory: a failed or unreachable simulation never blocks
//! submitting the proposal.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod http;
pub mod request;

pub use http::*;
pub use request::*;

/// Response body of the simulation endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulation_url: Option<String>,
}

pub trait Simulator {
    fn simulate(&self, request: &SimulationRequest) -> Result<SimulationOutcome, SimulationError>;
}

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Simulation request failed: {0}")]
    Transport(#[source] reqwest::Error),
    #[error("Simulation service returned {status}: {detail}")]
    Service {
        status: u16,
        detail: serde_json::Value,
    },
    #[error("Unreadable simulation response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl SimulationError {
    /// Text kept on the row for diagnostics.
    pub fn detail(&self) -> String {
        match self {
            SimulationError::Service { detail, .. } => match detail {
                serde_json::Value::String(text) => text.clone(),
                other => other.to_string(),
            },
            other => other.to_string(),
        }
    }
}
