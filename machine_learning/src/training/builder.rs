use std::num::NonZeroUsize;

use super::{ModelTrainer, Trainer};
use crate::{MlErr, Result, dataset::Dataset, loss::Mse, optimization::GradientDescent};

/// Assembles a `Trainer` from its hyperparameters and data.
#[derive(Debug, Default)]
pub struct TrainerBuilder {
    learning_rate: Option<f64>,
    epochs: Option<NonZeroUsize>,
    dataset: Option<Dataset>,
}

impl TrainerBuilder {
    /// Returns a new empty `TrainerBuilder`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn learning_rate(mut self, learning_rate: f64) -> Self {
        self.learning_rate = Some(learning_rate);
        self
    }

    pub fn epochs(mut self, epochs: NonZeroUsize) -> Self {
        self.epochs = Some(epochs);
        self
    }

    pub fn dataset(mut self, dataset: Dataset) -> Self {
        self.dataset = Some(dataset);
        self
    }

    /// Builds a gradient descent trainer over the mean squared error.
    ///
    /// # Errors
    /// `MlErr::MissingComponent` if some part was never set, or
    /// `MlErr::InvalidLearningRate` for a non-positive rate.
    pub fn build(self) -> Result<Box<dyn Trainer>> {
        let learning_rate = self
            .learning_rate
            .ok_or(MlErr::MissingComponent("learning rate"))?;
        let epochs = self.epochs.ok_or(MlErr::MissingComponent("epochs"))?;
        let dataset = self.dataset.ok_or(MlErr::MissingComponent("dataset"))?;

        let optimizer = GradientDescent::new(learning_rate)?;
        let trainer = ModelTrainer::new(optimizer, dataset, Mse::new(), epochs);
        Ok(Box::new(trainer))
    }
}
