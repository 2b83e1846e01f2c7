use std::num::NonZeroUsize;

use ndarray::{Array1, ArrayView1};

use crate::{MlErr, Result};

/// A client's private set of `(x, y)` points.
///
/// Never empty, both columns have the same length and every value is finite.
#[derive(Debug, Clone)]
pub struct Dataset {
    x: Array1<f64>,
    y: Array1<f64>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `x` - The inputs.
    /// * `y` - The expected outputs, one per input.
    ///
    /// # Returns
    /// The dataset or an error if it's empty, the columns differ in length or
    /// some value isn't finite.
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> Result<Self> {
        if x.is_empty() {
            return Err(MlErr::EmptyDataset);
        }

        if x.len() != y.len() {
            return Err(MlErr::SizeMismatch {
                a: "x",
                b: "y",
                got: y.len(),
                expected: x.len(),
            });
        }

        for (column, values) in [("x", &x), ("y", &y)] {
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(MlErr::NonFiniteData { column, index });
            }
        }

        Ok(Self {
            x: Array1::from_vec(x),
            y: Array1::from_vec(y),
        })
    }

    /// The amount of points, `n_k` in FedAvg terms.
    pub fn size(&self) -> NonZeroUsize {
        // Emptiness is rejected in `new`.
        NonZeroUsize::new(self.x.len()).unwrap_or(NonZeroUsize::MIN)
    }

    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }

    pub fn y(&self) -> ArrayView1<'_, f64> {
        self.y.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_dataset_is_rejected() {
        assert_eq!(Dataset::new(vec![], vec![]).unwrap_err(), MlErr::EmptyDataset);
    }

    #[test]
    fn mismatched_columns_are_rejected() {
        let err = Dataset::new(vec![1.0, 2.0], vec![1.0]).unwrap_err();
        assert_eq!(
            err,
            MlErr::SizeMismatch {
                a: "x",
                b: "y",
                got: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn non_finite_values_are_rejected() {
        let err = Dataset::new(vec![1.0, 2.0], vec![1.0, f64::NAN]).unwrap_err();
        assert_eq!(
            err,
            MlErr::NonFiniteData {
                column: "y",
                index: 1
            }
        );
    }

    #[test]
    fn size_counts_points() {
        let dataset = Dataset::new(vec![3.0, 4.0], vec![4.0, 5.0]).unwrap();
        assert_eq!(dataset.size().get(), 2);
        assert_eq!(dataset.x().to_vec(), vec![3.0, 4.0]);
        assert_eq!(dataset.y().to_vec(), vec![4.0, 5.0]);
    }
}
