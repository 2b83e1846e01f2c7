use log::info;
use machine_learning::{Dataset, training::TrainerBuilder};

use crate::{Result, Worker, WorkerConfig};

pub struct WorkerBuilder;

impl WorkerBuilder {
    /// Builds a `Worker` from a `WorkerConfig`.
    ///
    /// # Args
    /// * `config` - Startup configuration of this client.
    ///
    /// # Returns
    /// A fully initialized `Worker` instance.
    ///
    /// # Errors
    /// Returns `WorkerErr::Ml` for an empty or malformed dataset or an invalid
    /// learning rate. These are fatal, nothing is served.
    pub fn build(config: WorkerConfig) -> Result<Worker> {
        let dataset = Dataset::new(config.dataset.x, config.dataset.y)?;
        let data_size = dataset.size();

        let trainer = TrainerBuilder::new()
            .learning_rate(config.learning_rate)
            .epochs(config.local_epochs)
            .dataset(dataset)
            .build()?;

        info!(
            "client {} ready: n_k={data_size} lr={} epochs={}",
            config.id, config.learning_rate, config.local_epochs
        );
        Ok(Worker::new(config.id, trainer))
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use machine_learning::MlErr;

    use super::*;
    use crate::{DatasetConfig, WorkerErr};

    fn config(x: Vec<f64>, y: Vec<f64>, learning_rate: f64) -> WorkerConfig {
        WorkerConfig {
            id: 1,
            host: "127.0.0.1".into(),
            port: 0,
            learning_rate,
            local_epochs: NonZeroUsize::new(10).unwrap(),
            dataset: DatasetConfig { x, y },
        }
    }

    #[test]
    fn empty_dataset_is_rejected_before_serving() {
        let err = WorkerBuilder::build(config(vec![], vec![], 0.01)).unwrap_err();
        assert!(matches!(err, WorkerErr::Ml(MlErr::EmptyDataset)));
    }

    #[test]
    fn invalid_learning_rate_is_rejected() {
        let err = WorkerBuilder::build(config(vec![1.0], vec![1.0], 0.0)).unwrap_err();
        assert!(matches!(err, WorkerErr::Ml(MlErr::InvalidLearningRate(_))));
    }

    #[test]
    fn builds_with_dataset_size() {
        let worker = WorkerBuilder::build(config(vec![1.0, 2.0], vec![2.0, 3.0], 0.01)).unwrap();
        assert_eq!(worker.id(), 1);
        assert_eq!(worker.data_size().get(), 2);
    }
}
