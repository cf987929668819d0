use std::fmt;

use crate::error::PerceptError;
use crate::metrics::IterationInfo;

/// Lifecycle of a training loop.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainingStatus {
    Idle,
    Running,
    /// Stopped at an epoch boundary on request.
    Cancelled,
    /// Ran every requested epoch.
    Completed,
    /// Halted by an error; the failing epoch reported nothing.
    Failed(PerceptError),
}

impl TrainingStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            TrainingStatus::Cancelled | TrainingStatus::Completed | TrainingStatus::Failed(_)
        )
    }
}

impl fmt::Display for TrainingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrainingStatus::Idle => write!(f, "idle"),
            TrainingStatus::Running => write!(f, "running"),
            TrainingStatus::Cancelled => write!(f, "cancelled"),
            TrainingStatus::Completed => write!(f, "completed"),
            TrainingStatus::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

/// Message emitted by a training loop, in order.
#[derive(Debug, Clone, PartialEq)]
pub enum TrainingEvent {
    Iteration(IterationInfo),
    /// Always the last event of a run.
    Finished(TrainingStatus),
}

/// Terminal status plus every epoch summary produced before it.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    pub status: TrainingStatus,
    pub iterations: Vec<IterationInfo>,
}

impl TrainingReport {
    pub fn epochs_run(&self) -> usize {
        self.iterations.len()
    }

    pub fn last(&self) -> Option<&IterationInfo> {
        self.iterations.last()
    }
}
