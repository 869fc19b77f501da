use std::time::Duration;

use reqwest::blocking::Client;
use tracing::{debug, warn};

use crate::{
    config::BuilderConfig,
    simulation::{SimulationError, SimulationOutcome, SimulationRequest, Simulator},
};

/// Posts simulation requests as JSON to a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpSimulator {
    client: Client,
    url: String,
}

impl HttpSimulator {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, SimulationError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SimulationError::Transport)?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn from_config(config: &BuilderConfig) -> Result<Self, SimulationError> {
        Self::new(
            config.simulation_url.clone(),
            Duration::from_secs(config.simulation_timeout_secs),
        )
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Simulator for HttpSimulator {
    fn simulate(&self, request: &SimulationRequest) -> Result<SimulationOutcome, SimulationError> {
        debug!(url = %self.url, kind = %request.kind, "posting simulation");

        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .map_err(SimulationError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().map_err(SimulationError::Transport)?;
            // Keep the raw text when the service did not answer with JSON.
            let detail = serde_json::from_str(&body).unwrap_or(serde_json::Value::String(body));
            warn!(status = status.as_u16(), %detail, "simulation service error");
            return Err(SimulationError::Service {
                status: status.as_u16(),
                detail,
            });
        }

        response
            .json::<SimulationOutcome>()
            .map_err(SimulationError::Decode)
    }
}
