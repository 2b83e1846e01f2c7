use std::{env, fs, num::NonZeroUsize, path::Path, time::Duration};

use comms::ModelParams;
use machine_learning::LinearModel;
use serde::Deserialize;

use super::SimulationSettings;
use crate::{ClientDescriptor, ClientRegistry, OrchestratorError};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    pub id: usize,
    pub url: String,
}

/// The coordinator's startup configuration, as read from its JSON file.
#[derive(Debug, Clone, Deserialize)]
pub struct CoordinatorConfig {
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
    pub rounds: NonZeroUsize,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default)]
    pub round_interval_ms: u64,
    #[serde(default)]
    pub initial_model: ModelParams,
    pub clients: Vec<ClientConfig>,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl CoordinatorConfig {
    /// Reads a `CoordinatorConfig` from a JSON file, then applies the `HOST`
    /// and `PORT` environment overrides.
    ///
    /// # Errors
    /// `OrchestratorError::Io` if the file can't be read,
    /// `OrchestratorError::InvalidConfig` if it isn't a valid config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, OrchestratorError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_json(&content)
            .map_err(|e| OrchestratorError::InvalidConfig(format!("{}: {e}", path.display())))?;

        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }

        if let Ok(port) = env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|e| OrchestratorError::InvalidConfig(format!("PORT={port}: {e}")))?;
        }

        Ok(config)
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// The `host:port` pair the control API listens at.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// # Errors
    /// `OrchestratorError::InvalidConfig` if the timeout is zero.
    pub fn settings(&self) -> Result<SimulationSettings, OrchestratorError> {
        SimulationSettings::new(
            self.rounds,
            Duration::from_millis(self.timeout_ms),
            Duration::from_millis(self.round_interval_ms),
        )
    }

    /// # Errors
    /// `OrchestratorError::InvalidConfig` for an empty client list, repeated
    /// ids or blank urls.
    pub fn registry(&self) -> Result<ClientRegistry, OrchestratorError> {
        let clients = self
            .clients
            .iter()
            .map(|c| ClientDescriptor::new(c.id, c.url.clone()))
            .collect();

        ClientRegistry::new(clients)
    }

    pub fn initial_model(&self) -> LinearModel {
        self.initial_model.into()
    }
}
