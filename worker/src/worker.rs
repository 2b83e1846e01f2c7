use std::num::NonZeroUsize;

use comms::{TrainRequest, TrainResponse};
use log::{debug, info};
use machine_learning::{LinearModel, training::Trainer};

use crate::Result;

/// A federated client: its identity and the trainer bound to its private data.
pub struct Worker {
    worker_id: usize,
    trainer: Box<dyn Trainer>,
}

impl std::fmt::Debug for Worker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Worker")
            .field("worker_id", &self.worker_id)
            .finish_non_exhaustive()
    }
}

impl Worker {
    /// Returns a new `Worker`.
    ///
    /// # Args
    /// * `worker_id` - Identifier used for observability.
    /// * `trainer` - The model's trainer, already holding this client's data.
    pub fn new(worker_id: usize, trainer: Box<dyn Trainer>) -> Self {
        Self { worker_id, trainer }
    }

    pub fn id(&self) -> usize {
        self.worker_id
    }

    pub fn data_size(&self) -> NonZeroUsize {
        self.trainer.data_size()
    }

    /// Trains the received global model locally and builds the answer for the coordinator.
    ///
    /// # Errors
    /// Returns `WorkerErr::Ml` if training diverged.
    pub fn handle_train(&self, req: TrainRequest) -> Result<TrainResponse> {
        let global = LinearModel::from(req.global_model);
        info!(
            worker_id = self.worker_id;
            "starting local training with global model: {global}"
        );

        let report = self.trainer.train(global)?;
        debug!(
            worker_id = self.worker_id;
            "loss {:.6} -> {:.6}", report.initial_loss, report.final_loss
        );
        info!(
            worker_id = self.worker_id;
            "finished local training, new local model: {}", report.model
        );

        Ok(TrainResponse {
            local_model: report.model.into(),
            data_size: report.data_size.get() as u64,
        })
    }
}
