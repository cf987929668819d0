use ndarray::{Array1, Array2};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::initialization::WeightInit;
use crate::activations::Activation;
use crate::error::{PerceptError, Result};

/// A fully connected layer: a `(output_width, input_width)` weight matrix,
/// a bias per output unit and the activation applied to the weighted sums.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Layer {
    pub weights: Array2<f32>,
    pub biases: Array1<f32>,
    pub activation: Activation,
}

impl Layer {
    /// Create a new layer with weights and biases drawn from `init`.
    pub fn new<R: Rng + ?Sized>(
        input_width: usize,
        output_width: usize,
        activation: Activation,
        init: WeightInit,
        rng: &mut R,
    ) -> Result<Self> {
        if input_width == 0 || output_width == 0 {
            return Err(PerceptError::configuration(
                "layer",
                format!("widths must be positive, got {}x{}", output_width, input_width),
            ));
        }
        let weights = init.initialize_weights((output_width, input_width), rng)?;
        let biases = init.initialize_biases(output_width, rng)?;
        Ok(Layer {
            weights,
            biases,
            activation,
        })
    }

    /// Assemble a layer from explicit parameters.
    pub fn from_parts(
        weights: Array2<f32>,
        biases: Array1<f32>,
        activation: Activation,
    ) -> Result<Self> {
        let layer = Layer {
            weights,
            biases,
            activation,
        };
        layer.validate()?;
        Ok(layer)
    }

    pub fn with_weights(mut self, weights: Array2<f32>) -> Result<Self> {
        if weights.dim() != self.weights.dim() {
            return Err(PerceptError::shape_mismatch(
                format!("{:?}", self.weights.dim()),
                format!("{:?}", weights.dim()),
            ));
        }
        self.weights = weights;
        Ok(self)
    }

    pub fn with_biases(mut self, biases: Array1<f32>) -> Result<Self> {
        PerceptError::check_width("bias vector", self.biases.len(), biases.len())?;
        self.biases = biases;
        Ok(self)
    }

    pub fn input_width(&self) -> usize {
        self.weights.ncols()
    }

    pub fn output_width(&self) -> usize {
        self.weights.nrows()
    }

    /// Checks that the layer's own parameters agree with each other.
    pub fn validate(&self) -> Result<()> {
        if self.input_width() == 0 || self.output_width() == 0 {
            return Err(PerceptError::configuration(
                "layer",
                format!("empty weight matrix {:?}", self.weights.dim()),
            ));
        }
        if self.biases.len() != self.output_width() {
            return Err(PerceptError::configuration(
                "layer",
                format!(
                    "{} biases for {} output units",
                    self.biases.len(),
                    self.output_width()
                ),
            ));
        }
        Ok(())
    }
}
