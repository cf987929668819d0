use serde::{Deserialize, Serialize};

use crate::error::{PerceptError, Result};

/// Parameters of a training run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of epochs to run unless cancelled first.
    pub epochs: usize,
    /// Fixed gradient descent step size.
    pub learning_rate: f32,
    /// Seed for the per-epoch shuffle. `None` draws one from the OS.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl TrainingConfig {
    pub fn new(epochs: usize, learning_rate: f32) -> Self {
        TrainingConfig {
            epochs,
            learning_rate,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.epochs == 0 {
            return Err(PerceptError::configuration("epochs", "must be positive"));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(PerceptError::configuration(
                "learning_rate",
                format!("must be a positive number, got {}", self.learning_rate),
            ));
        }
        Ok(())
    }
}
