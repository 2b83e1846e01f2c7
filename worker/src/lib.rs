//! The client side of a federated round: a small HTTP service that trains the
//! coordinator's global model on private data and hands back the result.

pub mod builder;
pub mod config;
pub mod error;
pub mod service;
pub mod worker;

pub use builder::WorkerBuilder;
pub use config::{DatasetConfig, WorkerConfig};
pub use error::{Result, WorkerErr};
pub use service::{router, serve};
pub use worker::Worker;

use log::info;
use tokio::{net::TcpListener, signal};

/// Builds the worker described by `config`, binds its address and serves
/// training requests until the process is interrupted.
///
/// # Errors
/// Returns `WorkerErr` if the configuration is invalid or the address can't be bound.
pub async fn run(config: WorkerConfig) -> Result<()> {
    let addr = config.bind_addr();
    let worker = WorkerBuilder::build(config)?;

    let listener = TcpListener::bind(&addr).await?;

    tokio::select! {
        ret = serve(listener, worker) => ret?,
        _ = signal::ctrl_c() => {
            info!("received SIGTERM");
        }
    }

    Ok(())
}
