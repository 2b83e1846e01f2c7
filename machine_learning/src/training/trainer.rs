use std::num::NonZeroUsize;

use crate::{LinearModel, Result};

/// Outcome of a local training pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainReport {
    pub model: LinearModel,
    pub data_size: NonZeroUsize,
    pub initial_loss: f64,
    pub final_loss: f64,
}

/// Anything able to refine a global model on its own private data.
pub trait Trainer: Send + Sync {
    /// Should train a copy of `global` and return the local result.
    ///
    /// # Arguments
    /// * `global` - The model to start the local optimization from.
    ///
    /// # Returns
    /// The trained model together with the size of the data used.
    fn train(&self, global: LinearModel) -> Result<TrainReport>;

    /// The amount of points this trainer learns from.
    fn data_size(&self) -> NonZeroUsize;
}
