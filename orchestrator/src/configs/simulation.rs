use std::{num::NonZeroUsize, time::Duration};

use crate::OrchestratorError;

/// The knobs of a simulation that stay fixed for the life of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationSettings {
    rounds: NonZeroUsize,
    timeout: Duration,
    round_interval: Duration,
}

impl SimulationSettings {
    /// Creates a new `SimulationSettings`.
    ///
    /// # Arguments
    /// * `rounds` - How many global rounds every simulation runs.
    /// * `timeout` - Upper bound for a single client call.
    /// * `round_interval` - Pause between two consecutive rounds.
    ///
    /// # Errors
    /// `OrchestratorError::InvalidConfig` if `timeout` is zero.
    pub fn new(
        rounds: NonZeroUsize,
        timeout: Duration,
        round_interval: Duration,
    ) -> Result<Self, OrchestratorError> {
        if timeout.is_zero() {
            return Err(OrchestratorError::InvalidConfig(
                "client timeout must be greater than zero".into(),
            ));
        }

        Ok(Self {
            rounds,
            timeout,
            round_interval,
        })
    }

    pub fn rounds(&self) -> NonZeroUsize {
        self.rounds
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn round_interval(&self) -> Duration {
        self.round_interval
    }
}
