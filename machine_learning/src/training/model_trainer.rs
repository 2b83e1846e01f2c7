use std::num::NonZeroUsize;

use log::debug;

use super::{TrainReport, Trainer};
use crate::{
    Gradient, LinearModel, MlErr, Result, dataset::Dataset, loss::Mse,
    optimization::Optimizer,
};

/// A model `Trainer`. Contains the relevant components needed for running full batch
/// gradient descent over a fixed dataset.
pub struct ModelTrainer<O>
where
    O: Optimizer,
{
    optimizer: O,
    dataset: Dataset,
    loss_fn: Mse,
    epochs: NonZeroUsize,
}

impl<O> ModelTrainer<O>
where
    O: Optimizer,
{
    /// Returns a new `ModelTrainer`.
    ///
    /// # Arguments
    /// * `optimizer` - The learning rule applied after every epoch.
    /// * `dataset` - The dataset the model will be trained with.
    /// * `loss_fn` - The loss function used to measure the difference between a model's output and the expected one.
    /// * `epochs` - The amount of full passes over the dataset per `train` call.
    pub fn new(optimizer: O, dataset: Dataset, loss_fn: Mse, epochs: NonZeroUsize) -> Self {
        Self {
            optimizer,
            dataset,
            loss_fn,
            epochs,
        }
    }

    fn gradient(&self, model: &LinearModel) -> Gradient {
        let x = self.dataset.x();
        let y_pred = model.predict(x);
        let delta = self.loss_fn.loss_prime(y_pred.view(), self.dataset.y());

        Gradient {
            slope: x.dot(&delta),
            intercept: delta.sum(),
        }
    }
}

impl<O> Trainer for ModelTrainer<O>
where
    O: Optimizer,
{
    fn train(&self, global: LinearModel) -> Result<TrainReport> {
        let mut model = global;
        let initial_loss = self.loss_fn.evaluate(&model, &self.dataset);

        for epoch in 0..self.epochs.get() {
            let grad = self.gradient(&model);
            self.optimizer.update_params(&mut model, &grad);
            debug!(epoch = epoch; "local step: {model}");
        }

        if !model.is_finite() {
            return Err(MlErr::Diverged {
                slope: model.slope,
                intercept: model.intercept,
            });
        }

        Ok(TrainReport {
            model,
            data_size: self.dataset.size(),
            initial_loss,
            final_loss: self.loss_fn.evaluate(&model, &self.dataset),
        })
    }

    fn data_size(&self) -> NonZeroUsize {
        self.dataset.size()
    }
}
