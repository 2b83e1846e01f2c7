pub mod aggregation;
pub mod configs;
mod coordinator;
pub mod error;
mod registry;
pub mod round;
pub mod service;
pub mod transport;

use std::sync::Arc;

use log::info;
use tokio::{net::TcpListener, signal};

pub use aggregation::{ClientUpdate, aggregate, aggregation_weights};
pub use coordinator::Coordinator;
pub use error::{ClientFailure, OrchestratorError};
pub use registry::{ClientDescriptor, ClientRegistry};
pub use round::{RoundOutcome, RoundSummary, SimulationReport};
pub use service::ControlState;
pub use transport::{ClientTransport, HttpTransport};

use crate::configs::CoordinatorConfig;

/// Validates `config` and assembles the coordinator's control state.
///
/// # Errors
/// Returns an `OrchestratorError::InvalidConfig` for any invalid setting. Nothing
/// is contacted yet.
pub fn build(
    config: &CoordinatorConfig,
) -> Result<Arc<ControlState<HttpTransport>>, OrchestratorError> {
    let settings = config.settings()?;
    let registry = config.registry()?;
    let transport = HttpTransport::new(settings.timeout())?;

    info!(
        "coordinating {} client(s) over {} round(s)",
        registry.len(),
        settings.rounds()
    );

    let coordinator = Coordinator::new(transport, registry, settings);
    Ok(Arc::new(ControlState::new(coordinator, config.initial_model())))
}

/// Builds the coordinator and serves its control API until the process is interrupted.
///
/// # Errors
/// Returns an `OrchestratorError` if the configuration is invalid or the address can't be bound.
pub async fn run(config: CoordinatorConfig) -> Result<(), OrchestratorError> {
    let state = build(&config)?;
    let listener = TcpListener::bind(config.bind_addr()).await?;

    tokio::select! {
        ret = service::serve(listener, state) => ret?,
        _ = signal::ctrl_c() => {
            info!("received SIGTERM");
        }
    }

    Ok(())
}
