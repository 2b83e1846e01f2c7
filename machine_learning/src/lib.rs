pub mod dataset;
pub mod error;
pub mod loss;
pub mod model;
pub mod optimization;
pub mod training;

pub use dataset::Dataset;
pub use error::{MlErr, Result};
pub use model::{Gradient, LinearModel};
