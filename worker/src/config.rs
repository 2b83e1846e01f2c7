use std::{env, fs, num::NonZeroUsize, path::Path};

use serde::Deserialize;

use crate::{Result, WorkerErr};

const DEFAULT_HOST: &str = "127.0.0.1";

/// A client's private points as written in its config file.
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Everything a client needs at startup. Nothing here changes while running.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkerConfig {
    pub id: usize,
    #[serde(default = "default_host")]
    pub host: String,
    pub port: u16,
    pub learning_rate: f64,
    pub local_epochs: NonZeroUsize,
    pub dataset: DatasetConfig,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

impl WorkerConfig {
    /// Reads a `WorkerConfig` from a JSON file, then applies the `HOST` and
    /// `PORT` environment overrides.
    ///
    /// # Errors
    /// `WorkerErr::Io` if the file can't be read, `WorkerErr::InvalidConfig`
    /// if it isn't a valid config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let mut config = Self::from_json(&content)
            .map_err(|e| WorkerErr::InvalidConfig(format!("{}: {e}", path.display())))?;

        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }

        if let Ok(port) = env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|e| WorkerErr::InvalidConfig(format!("PORT={port}: {e}")))?;
        }

        Ok(config)
    }

    pub fn from_json(content: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// The `host:port` pair this client listens at.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = WorkerConfig::from_json(
            r#"{
                "id": 2,
                "port": 5002,
                "learning_rate": 0.01,
                "local_epochs": 10,
                "dataset": { "x": [3.0, 4.0], "y": [4.0, 5.0] }
            }"#,
        )
        .unwrap();

        assert_eq!(config.id, 2);
        assert_eq!(config.bind_addr(), "127.0.0.1:5002");
        assert_eq!(config.local_epochs.get(), 10);
        assert_eq!(config.dataset.x, vec![3.0, 4.0]);
    }

    #[test]
    fn zero_epochs_is_rejected() {
        let err = WorkerConfig::from_json(
            r#"{
                "id": 1,
                "port": 5001,
                "learning_rate": 0.01,
                "local_epochs": 0,
                "dataset": { "x": [1.0], "y": [2.0] }
            }"#,
        );

        assert!(err.is_err());
    }
}
