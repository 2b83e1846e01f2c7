use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire machine learning module.
pub type Result<T> = std::result::Result<T, MlErr>;

/// The machine learning module's error type.
#[derive(Debug, Clone, PartialEq)]
pub enum MlErr {
    SizeMismatch {
        a: &'static str,
        b: &'static str,
        got: usize,
        expected: usize,
    },
    EmptyDataset,
    NonFiniteData {
        column: &'static str,
        index: usize,
    },
    InvalidLearningRate(f64),
    MissingComponent(&'static str),
    Diverged {
        slope: f64,
        intercept: f64,
    },
}

impl Display for MlErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            MlErr::SizeMismatch {
                a,
                b,
                got,
                expected,
            } => {
                format!(
                    "There's a size mismatch between {a} and {b}, got {got} and expected {expected}"
                )
            }
            MlErr::EmptyDataset => "The dataset must contain at least one point".to_string(),
            MlErr::NonFiniteData { column, index } => {
                format!("The value at {column}[{index}] is not a finite number")
            }
            MlErr::InvalidLearningRate(lr) => {
                format!("The learning rate must be positive and finite, got {lr}")
            }
            MlErr::MissingComponent(name) => {
                format!("Failed to build the trainer, missing {name}")
            }
            MlErr::Diverged { slope, intercept } => format!(
                "Training diverged, resulting model is not finite (w={slope}, b={intercept})"
            ),
        };

        write!(f, "{s}")
    }
}

impl Error for MlErr {}
