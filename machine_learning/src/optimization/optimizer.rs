use crate::{Gradient, LinearModel};

/// A learning rule that moves a model's parameters according to a gradient.
pub trait Optimizer: Send + Sync {
    /// Should update the parameters of `model` using `grad`.
    ///
    /// # Arguments
    /// * `model` - The model whose parameters are going to be modified.
    /// * `grad` - The gradient used for taking the step.
    fn update_params(&self, model: &mut LinearModel, grad: &Gradient);
}
