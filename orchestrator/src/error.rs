use std::fmt;

/// All errors that can occur in the orchestrator.
#[derive(Debug)]
pub enum OrchestratorError {
    /// Invalid configuration, caught before any round runs.
    InvalidConfig(String),
    /// Aggregation was asked to average nothing.
    EmptyUpdates,
    /// A client reported it trained on zero points.
    ZeroDataSize { client_id: usize },
    /// The weighted average overflowed.
    NonFiniteAggregate,
    /// A simulation is already in progress.
    SimulationRunning,
    /// The background simulation task died before reporting.
    SimulationAborted(String),
    /// An underlying I/O error not covered by the above variants.
    Io(std::io::Error),
}

impl fmt::Display for OrchestratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::EmptyUpdates => write!(f, "cannot aggregate an empty set of updates"),
            Self::ZeroDataSize { client_id } => {
                write!(f, "client {client_id} reported a data size of zero")
            }
            Self::NonFiniteAggregate => write!(f, "aggregated model is not finite"),
            Self::SimulationRunning => write!(f, "a simulation is already running"),
            Self::SimulationAborted(msg) => write!(f, "simulation aborted: {msg}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for OrchestratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for OrchestratorError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// Why a single client call didn't produce a usable update.
///
/// Any of these excludes the client from the current round only.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientFailure {
    /// The request never got an answer (connection refused, reset, ...).
    Unreachable(String),
    /// The client answered with a non-success status.
    Status { code: u16, detail: String },
    /// The answer couldn't be understood or broke an invariant.
    InvalidResponse(String),
    /// No answer within the per-call timeout.
    Timeout,
    /// The returned model has NaN or infinite parameters.
    NonFinite,
}

impl fmt::Display for ClientFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreachable(msg) => write!(f, "unreachable: {msg}"),
            Self::Status { code, detail } => write!(f, "status {code}: {detail}"),
            Self::InvalidResponse(msg) => write!(f, "invalid response: {msg}"),
            Self::Timeout => write!(f, "timed out"),
            Self::NonFinite => write!(f, "returned a non-finite model"),
        }
    }
}

impl std::error::Error for ClientFailure {}
