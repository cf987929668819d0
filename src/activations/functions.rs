use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};

/// An enumeration of the activation functions a layer can apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Activation {
    #[default]
    Sigmoid,
    Tanh,
}

impl Activation {
    /// Apply the activation function to a single value.
    #[inline]
    pub fn apply_scalar(&self, v: f32) -> f32 {
        match self {
            Activation::Sigmoid => 1.0 / (1.0 + (-v).exp()),
            Activation::Tanh => v.tanh(),
        }
    }

    /// Derivative expressed through the activation value `a = f(x)`.
    #[inline]
    pub fn derivative_from_output(&self, a: f32) -> f32 {
        match self {
            Activation::Sigmoid => a * (1.0 - a),
            Activation::Tanh => 1.0 - a * a,
        }
    }

    /// Apply the activation function to an input array in-place.
    pub fn apply(&self, input: &mut Array1<f32>) {
        let activation = *self;
        input.mapv_inplace(|v| activation.apply_scalar(v));
    }

    /// Compute the derivative for every unit given the layer's activations.
    pub fn derivative(&self, activations: ArrayView1<f32>) -> Array1<f32> {
        activations.mapv(|a| self.derivative_from_output(a))
    }

    /// Closed interval every output of this activation lies in.
    pub fn range(&self) -> (f32, f32) {
        match self {
            Activation::Sigmoid => (0.0, 1.0),
            Activation::Tanh => (-1.0, 1.0),
        }
    }
}
