//! Federated averaging: `w = sum(n_k / N * w_k)`.

use std::num::NonZeroU64;

use log::debug;
use machine_learning::LinearModel;

use crate::OrchestratorError;

/// A client's contribution to one round.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClientUpdate {
    pub client_id: usize,
    pub model: LinearModel,
    pub data_size: NonZeroU64,
}

impl ClientUpdate {
    /// Creates a new `ClientUpdate`.
    ///
    /// # Errors
    /// `OrchestratorError::ZeroDataSize` if `data_size` is zero.
    pub fn new(
        client_id: usize,
        model: LinearModel,
        data_size: u64,
    ) -> Result<Self, OrchestratorError> {
        let data_size =
            NonZeroU64::new(data_size).ok_or(OrchestratorError::ZeroDataSize { client_id })?;

        Ok(Self {
            client_id,
            model,
            data_size,
        })
    }
}

/// Computes every update's share of the total data, `n_k / N`.
///
/// # Errors
/// `OrchestratorError::EmptyUpdates` if `updates` is empty.
pub fn aggregation_weights(updates: &[ClientUpdate]) -> Result<Vec<f64>, OrchestratorError> {
    if updates.is_empty() {
        return Err(OrchestratorError::EmptyUpdates);
    }

    let total: f64 = updates.iter().map(|u| u.data_size.get() as f64).sum();
    Ok(updates
        .iter()
        .map(|u| u.data_size.get() as f64 / total)
        .collect())
}

/// Averages the updates' models weighted by their data size.
///
/// # Errors
/// `OrchestratorError::EmptyUpdates` if `updates` is empty, or
/// `OrchestratorError::NonFiniteAggregate` if the result is not finite.
pub fn aggregate(updates: &[ClientUpdate]) -> Result<LinearModel, OrchestratorError> {
    let weights = aggregation_weights(updates)?;
    let total: f64 = updates.iter().map(|u| u.data_size.get() as f64).sum();
    debug!("aggregating {} update(s), N={total}", updates.len());

    let mut model = LinearModel::default();
    for (update, weight) in updates.iter().zip(weights) {
        debug!(
            client_id = update.client_id;
            "n_k={} weight={weight:.4} local model: {}", update.data_size, update.model
        );

        model.slope += weight * update.model.slope;
        model.intercept += weight * update.model.intercept;
    }

    if !model.is_finite() {
        return Err(OrchestratorError::NonFiniteAggregate);
    }

    Ok(model)
}
