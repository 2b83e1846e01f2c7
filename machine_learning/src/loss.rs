use ndarray::{Array1, ArrayView1};

use crate::{Dataset, LinearModel};

/// Mean squared error loss function.
#[derive(Debug, Default, Clone, Copy)]
pub struct Mse;

impl Mse {
    /// Returns a new `Mse`.
    pub fn new() -> Self {
        Self
    }

    /// `mean((y_pred - y)^2)`.
    pub fn loss(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
        (&y_pred - &y)
            .mapv(|e| e.powi(2))
            .mean()
            .unwrap_or_default()
    }

    /// Derivative of the loss with respect to each prediction, `(2/n) * (y_pred - y)`.
    pub fn loss_prime(&self, y_pred: ArrayView1<f64>, y: ArrayView1<f64>) -> Array1<f64> {
        (&y_pred - &y) * (2.0 / y_pred.len() as f64)
    }

    /// Loss of `model` over the whole `dataset`.
    pub fn evaluate(&self, model: &LinearModel, dataset: &Dataset) -> f64 {
        let y_pred = model.predict(dataset.x());
        self.loss(y_pred.view(), dataset.y())
    }
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn perfect_fit_has_zero_loss() {
        let dataset = Dataset::new(vec![1.0, 2.0], vec![2.0, 3.0]).unwrap();
        let model = LinearModel::new(1.0, 1.0);
        assert_eq!(Mse::new().evaluate(&model, &dataset), 0.0);
    }

    #[test]
    fn loss_prime_scales_residuals() {
        let y_pred = array![1.0, 4.0];
        let y = array![2.0, 2.0];
        let delta = Mse.loss_prime(y_pred.view(), y.view());
        assert_eq!(delta, array![-1.0, 2.0]);
    }
}
