use std::fmt;

use comms::ModelParams;
use ndarray::{Array1, ArrayView1};

/// A line `y = slope * x + intercept`.
///
/// Models are always moved around by value, whoever holds one owns it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearModel {
    /// Returns a new `LinearModel`.
    ///
    /// # Arguments
    /// * `slope` - The `w` parameter.
    /// * `intercept` - The `b` parameter.
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Evaluates the model on every input.
    ///
    /// # Arguments
    /// * `x` - The inputs.
    ///
    /// # Returns
    /// The predictions, one per input.
    pub fn predict(&self, x: ArrayView1<f64>) -> Array1<f64> {
        x.mapv(|x| self.slope * x + self.intercept)
    }

    /// Whether both parameters are finite real numbers.
    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }
}

impl fmt::Display for LinearModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w={:.4}, b={:.4}", self.slope, self.intercept)
    }
}

impl From<ModelParams> for LinearModel {
    fn from(params: ModelParams) -> Self {
        Self::new(params.w, params.b)
    }
}

impl From<LinearModel> for ModelParams {
    fn from(model: LinearModel) -> Self {
        Self {
            w: model.slope,
            b: model.intercept,
        }
    }
}

/// The partial derivatives of the loss with respect to each parameter.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gradient {
    pub slope: f64,
    pub intercept: f64,
}

#[cfg(test)]
mod tests {
    use ndarray::array;

    use super::*;

    #[test]
    fn predict_applies_line() {
        let model = LinearModel::new(2.0, 1.0);
        let x = array![0.0, 1.0, 3.0];
        assert_eq!(model.predict(x.view()), array![1.0, 3.0, 7.0]);
    }

    #[test]
    fn nan_and_infinity_are_not_finite() {
        assert!(LinearModel::new(1.0, -2.0).is_finite());
        assert!(!LinearModel::new(f64::NAN, 0.0).is_finite());
        assert!(!LinearModel::new(0.0, f64::INFINITY).is_finite());
    }

    #[test]
    fn converts_from_and_into_wire_params() {
        let params = ModelParams { w: 0.5, b: 3.0 };
        let model = LinearModel::from(params);
        assert_eq!(model, LinearModel::new(0.5, 3.0));
        assert_eq!(ModelParams::from(model), params);
    }
}
