use ndarray::{Array1, Array2};
use ndarray_rand::rand_distr::Uniform;
use ndarray_rand::RandomExt;
use rand::Rng;
use rand_distr::Normal;
use serde::{Deserialize, Serialize};

use crate::error::{PerceptError, Result};

/// Weight initialization strategies
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum WeightInit {
    /// Xavier/Glorot uniform initialization
    XavierUniform,

    /// Xavier/Glorot normal initialization
    XavierNormal,

    /// Uniform distribution with custom range
    Uniform { min: f32, max: f32 },

    /// All zeros
    Zeros,
}

impl Default for WeightInit {
    fn default() -> Self {
        WeightInit::Uniform { min: -0.5, max: 0.5 }
    }
}

impl WeightInit {
    pub fn validate(&self) -> Result<()> {
        if let WeightInit::Uniform { min, max } = *self {
            if !min.is_finite() || !max.is_finite() || min >= max {
                return Err(PerceptError::configuration(
                    "init",
                    format!("uniform range [{}, {}) is empty or not finite", min, max),
                ));
            }
        }
        Ok(())
    }

    /// Initialize a `(output_width, input_width)` weight matrix.
    pub fn initialize_weights<R: Rng + ?Sized>(
        &self,
        shape: (usize, usize),
        rng: &mut R,
    ) -> Result<Array2<f32>> {
        self.validate()?;
        let (fan_out, fan_in) = shape;

        let weights = match *self {
            WeightInit::XavierUniform => {
                let limit = (6.0 / (fan_in + fan_out) as f32).sqrt();
                Array2::random_using(shape, Uniform::new(-limit, limit), rng)
            }

            WeightInit::XavierNormal => {
                let std = (2.0 / (fan_in + fan_out) as f32).sqrt();
                let normal = Normal::new(0.0, std)
                    .map_err(|e| PerceptError::configuration("init", e.to_string()))?;
                Array2::random_using(shape, normal, rng)
            }

            WeightInit::Uniform { min, max } => {
                Array2::random_using(shape, Uniform::new(min, max), rng)
            }

            WeightInit::Zeros => Array2::zeros(shape),
        };

        Ok(weights)
    }

    /// Initialize the bias vector of a layer.
    pub fn initialize_biases<R: Rng + ?Sized>(
        &self,
        size: usize,
        rng: &mut R,
    ) -> Result<Array1<f32>> {
        self.validate()?;
        match *self {
            WeightInit::Uniform { min, max } => {
                Ok(Array1::random_using(size, Uniform::new(min, max), rng))
            }
            WeightInit::Zeros | WeightInit::XavierUniform | WeightInit::XavierNormal => {
                Ok(Array1::zeros(size))
            }
        }
    }
}
