use std::time::Duration;

use async_trait::async_trait;
use comms::{ErrorResponse, TrainRequest, TrainResponse};
use machine_learning::LinearModel;

use crate::{ClientDescriptor, ClientFailure, ClientUpdate, OrchestratorError};

/// How the coordinator reaches a client trainer.
///
/// One call is one training request; implementations must never retry.
#[async_trait]
pub trait ClientTransport: Send + Sync {
    /// Should ask `client` to train starting from `global`.
    ///
    /// # Returns
    /// The client's update, or why it couldn't be obtained.
    async fn train(
        &self,
        client: &ClientDescriptor,
        global: LinearModel,
    ) -> Result<ClientUpdate, ClientFailure>;
}

/// JSON over HTTP, each client endpoint being the full URL of its `/train` route.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
}

impl HttpTransport {
    /// Creates a new `HttpTransport`.
    ///
    /// # Arguments
    /// * `timeout` - Upper bound for every request, connection included.
    pub fn new(timeout: Duration) -> Result<Self, OrchestratorError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OrchestratorError::InvalidConfig(format!("http client: {e}")))?;

        Ok(Self { http })
    }
}

#[async_trait]
impl ClientTransport for HttpTransport {
    async fn train(
        &self,
        client: &ClientDescriptor,
        global: LinearModel,
    ) -> Result<ClientUpdate, ClientFailure> {
        let req = TrainRequest {
            global_model: global.into(),
        };

        let resp = self
            .http
            .post(&client.endpoint)
            .json(&req)
            .send()
            .await
            .map_err(request_failure)?;

        let status = resp.status();
        if !status.is_success() {
            let detail = match resp.json::<ErrorResponse>().await {
                Ok(body) => body.error,
                Err(_) => status.canonical_reason().unwrap_or("unknown").to_string(),
            };

            return Err(ClientFailure::Status {
                code: status.as_u16(),
                detail,
            });
        }

        let body: TrainResponse = resp.json().await.map_err(|e| {
            if e.is_timeout() {
                ClientFailure::Timeout
            } else {
                ClientFailure::InvalidResponse(e.to_string())
            }
        })?;

        ClientUpdate::new(client.id, body.local_model.into(), body.data_size)
            .map_err(|e| ClientFailure::InvalidResponse(e.to_string()))
    }
}

fn request_failure(e: reqwest::Error) -> ClientFailure {
    if e.is_timeout() {
        ClientFailure::Timeout
    } else {
        ClientFailure::Unreachable(e.to_string())
    }
}
