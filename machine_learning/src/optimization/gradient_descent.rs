use super::Optimizer;
use crate::{Gradient, LinearModel, MlErr, Result};

/// Gradient descent optimization algorithm.
#[derive(Debug, Clone, Copy)]
pub struct GradientDescent {
    learning_rate: f64,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update_params`.
    ///
    /// # Errors
    /// `MlErr::InvalidLearningRate` if the rate is not positive and finite.
    pub fn new(learning_rate: f64) -> Result<Self> {
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(MlErr::InvalidLearningRate(learning_rate));
        }

        Ok(Self { learning_rate })
    }
}

impl Optimizer for GradientDescent {
    /// Updates the parameters according to the algorithm's learning rule, that is, making a step in
    /// the opposite direction of the gradient, with a length of `learning_rate`.
    fn update_params(&self, model: &mut LinearModel, grad: &Gradient) {
        let lr = self.learning_rate;

        model.slope -= lr * grad.slope;
        model.intercept -= lr * grad.intercept;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_against_the_gradient() {
        let optimizer = GradientDescent::new(0.5).unwrap();
        let mut model = LinearModel::new(1.0, 1.0);
        let grad = Gradient {
            slope: 2.0,
            intercept: -4.0,
        };

        optimizer.update_params(&mut model, &grad);
        assert_eq!(model, LinearModel::new(0.0, 3.0));
    }

    #[test]
    fn rejects_non_positive_rates() {
        for lr in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            assert!(GradientDescent::new(lr).is_err(), "lr={lr} was accepted");
        }
    }
}
