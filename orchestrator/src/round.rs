use comms::RoundReport;
use machine_learning::LinearModel;

use crate::{ClientFailure, ClientUpdate};

/// Everything that happened during one distribute -> collect -> aggregate cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundOutcome {
    pub round: usize,
    /// The snapshot every client received.
    pub distributed: LinearModel,
    /// The global model after the round.
    pub model: LinearModel,
    pub updates: Vec<ClientUpdate>,
    pub failures: Vec<(usize, ClientFailure)>,
    /// Whether `model` replaced `distributed`.
    pub committed: bool,
}

impl RoundOutcome {
    /// The amount of clients whose update took part in the aggregation.
    pub fn successful(&self) -> usize {
        self.updates.len()
    }

    /// A round that left the global model untouched, either because nobody
    /// answered or because the average of the updates wasn't finite.
    pub fn is_noop(&self) -> bool {
        !self.committed
    }
}

/// A compact, owned record of a round kept for the simulation report.
///
/// A round can have `successful > 0` and still not be committed, when the
/// average of its updates wasn't finite.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundSummary {
    pub round: usize,
    pub model: LinearModel,
    pub successful: usize,
    pub failed: Vec<usize>,
    pub committed: bool,
}

impl From<&RoundOutcome> for RoundSummary {
    fn from(outcome: &RoundOutcome) -> Self {
        Self {
            round: outcome.round,
            model: outcome.model,
            successful: outcome.successful(),
            failed: outcome.failures.iter().map(|(id, _)| *id).collect(),
            committed: outcome.committed,
        }
    }
}

impl From<&RoundSummary> for RoundReport {
    fn from(summary: &RoundSummary) -> Self {
        Self {
            round: summary.round,
            model: summary.model.into(),
            successful: summary.successful,
            failed: summary.failed.clone(),
            committed: summary.committed,
        }
    }
}

/// Result of running every configured round.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub final_model: LinearModel,
    pub rounds: Vec<RoundSummary>,
}
