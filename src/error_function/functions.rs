use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{PerceptError, Result};

/// Trait defining the interface for error (loss) functions used to drive learning.
///
/// Implementations are pure: they never mutate their arguments and carry no
/// state other than parameters fixed at construction, which `check_validity`
/// inspects once before the function is handed to a network.
pub trait ErrorFunction: Send + Sync + fmt::Debug {
    /// Compute the error between a network result and its reference vector.
    fn value(&self, result: ArrayView1<f32>, reference: ArrayView1<f32>) -> Result<f32>;

    /// Partial derivative of [`ErrorFunction::value`] with respect to `result[index]`.
    ///
    /// Callers are expected to have checked the lengths already; an index
    /// outside either vector panics.
    fn derivative(&self, result: ArrayView1<f32>, reference: ArrayView1<f32>, index: usize) -> f32;

    /// Validate the function's parameters.
    fn check_validity(&self) -> Result<()> {
        Ok(())
    }

    /// Closed interval the network outputs must lie in for this function to be
    /// defined. `None` accepts any real output.
    fn output_domain(&self) -> Option<(f32, f32)> {
        None
    }

    /// Selector that rebuilds an equivalent function.
    fn kind(&self) -> ErrorFunctionKind;

    /// Derivative for every output unit.
    fn gradient(&self, result: ArrayView1<f32>, reference: ArrayView1<f32>) -> Result<Array1<f32>> {
        check_lengths(result, reference)?;
        Ok(Array1::from_shape_fn(result.len(), |i| self.derivative(result, reference, i)))
    }
}

fn check_lengths(result: ArrayView1<f32>, reference: ArrayView1<f32>) -> Result<()> {
    PerceptError::check_width("reference vector", result.len(), reference.len())
}

/// Quadratic error: `0.5 * Σ (result[i] - reference[i])²`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuadraticError;

impl ErrorFunction for QuadraticError {
    fn value(&self, result: ArrayView1<f32>, reference: ArrayView1<f32>) -> Result<f32> {
        check_lengths(result, reference)?;
        let accumulator: f32 = result
            .iter()
            .zip(reference.iter())
            .map(|(&r, &t)| (r - t) * (r - t))
            .sum();
        Ok(0.5 * accumulator)
    }

    fn derivative(&self, result: ArrayView1<f32>, reference: ArrayView1<f32>, index: usize) -> f32 {
        result[index] - reference[index]
    }

    fn kind(&self) -> ErrorFunctionKind {
        ErrorFunctionKind::Quadratic
    }
}

/// Binary cross-entropy over outputs in `(0, 1)`.
///
/// `epsilon` keeps the logarithms and the derivative's denominator away from zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrossEntropyError {
    pub epsilon: f32,
}

impl CrossEntropyError {
    pub fn new(epsilon: f32) -> Self {
        CrossEntropyError { epsilon }
    }
}

impl Default for CrossEntropyError {
    fn default() -> Self {
        CrossEntropyError { epsilon: 1e-7 }
    }
}

impl ErrorFunction for CrossEntropyError {
    fn value(&self, result: ArrayView1<f32>, reference: ArrayView1<f32>) -> Result<f32> {
        check_lengths(result, reference)?;
        let eps = self.epsilon;
        Ok(-result
            .iter()
            .zip(reference.iter())
            .map(|(&y, &t)| t * (y + eps).ln() + (1.0 - t) * (1.0 - y + eps).ln())
            .sum::<f32>())
    }

    fn derivative(&self, result: ArrayView1<f32>, reference: ArrayView1<f32>, index: usize) -> f32 {
        let y = result[index];
        let t = reference[index];
        (y - t) / ((y + self.epsilon) * (1.0 - y + self.epsilon))
    }

    fn check_validity(&self) -> Result<()> {
        if !self.epsilon.is_finite() || self.epsilon <= 0.0 || self.epsilon >= 0.5 {
            return Err(PerceptError::configuration(
                "epsilon",
                format!("must lie in (0, 0.5), got {}", self.epsilon),
            ));
        }
        Ok(())
    }

    fn output_domain(&self) -> Option<(f32, f32)> {
        Some((0.0, 1.0))
    }

    fn kind(&self) -> ErrorFunctionKind {
        ErrorFunctionKind::CrossEntropy { epsilon: self.epsilon }
    }
}

/// Serializable choice of error function, used by configuration and snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum ErrorFunctionKind {
    #[default]
    Quadratic,
    CrossEntropy { epsilon: f32 },
}

impl ErrorFunctionKind {
    /// Instantiate and validate the selected error function.
    pub fn build(&self) -> Result<Box<dyn ErrorFunction>> {
        let function: Box<dyn ErrorFunction> = match *self {
            ErrorFunctionKind::Quadratic => Box::new(QuadraticError),
            ErrorFunctionKind::CrossEntropy { epsilon } => {
                Box::new(CrossEntropyError::new(epsilon))
            }
        };
        function.check_validity()?;
        Ok(function)
    }
}

impl fmt::Display for ErrorFunctionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorFunctionKind::Quadratic => write!(f, "QuadraticError"),
            ErrorFunctionKind::CrossEntropy { epsilon } => {
                write!(f, "CrossEntropyError(ε={})", epsilon)
            }
        }
    }
}
