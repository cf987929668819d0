use serde::{Deserialize, Serialize};
use std::fmt;

/// Summary of one completed training epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IterationInfo {
    /// 1-based epoch number.
    pub index: usize,
    /// Largest per-sample error on the evaluation half.
    pub max_error: f32,
    /// Mean per-sample error on the evaluation half.
    pub average_error: f32,
}

impl fmt::Display for IterationInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "epoch {}: max error {:.6}, average error {:.6}",
            self.index, self.max_error, self.average_error
        )
    }
}

/// Running maximum and sum of per-sample errors within one epoch.
#[derive(Debug, Clone, Default)]
pub struct EpochTracker {
    max: f32,
    sum: f32,
    count: usize,
}

impl EpochTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one per-sample error. A NaN poisons both the maximum and the average.
    pub fn record(&mut self, error: f32) {
        if !self.max.is_nan() && (error.is_nan() || error > self.max) {
            self.max = error;
        }
        self.sum += error;
        self.count += 1;
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Close the epoch. The average is 0 when nothing was recorded.
    pub fn finish(self, index: usize) -> IterationInfo {
        let average_error = if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f32
        };
        IterationInfo {
            index,
            max_error: self.max,
            average_error,
        }
    }
}
