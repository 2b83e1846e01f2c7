//! Wire-level messages exchanged between the coordinator and its clients.
//!
//! Every message is plain JSON carried over HTTP. Both sides depend on this
//! crate so the shapes can never drift apart.

pub mod msg;

pub use msg::{
    ErrorResponse, ModelParams, RoundReport, StartResponse, StatusResponse, TrainRequest,
    TrainResponse,
};

/// Path of the client endpoint that runs one local training pass.
pub const TRAIN_PATH: &str = "/train";

/// Path of the coordinator endpoint that runs the whole simulation.
pub const START_PATH: &str = "/start";

/// Path of the coordinator endpoint that reports the current global model.
pub const STATUS_PATH: &str = "/status";
