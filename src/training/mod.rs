//! # Training
//!
//! The learn process: epochs of shuffling, learning on one half of the
//! dataset and measuring on the other, with cooperative cancellation.
//!
//! ```rust
//! use percept::builders::NetworkBuilder;
//! use percept::data::{one_hot, LearningPair};
//! use percept::training::{CancellationToken, TrainingConfig, TrainingLoop, TrainingStatus};
//! use ndarray::array;
//!
//! # fn main() -> percept::error::Result<()> {
//! let mut network = NetworkBuilder::new(2, 2).hidden_layer(4).seed(0).build()?;
//! let mut pairs = vec![
//!     LearningPair::new(array![0.0, 1.0], one_hot(0, 2)),
//!     LearningPair::new(array![1.0, 0.0], one_hot(1, 2)),
//!     LearningPair::new(array![0.1, 0.9], one_hot(0, 2)),
//!     LearningPair::new(array![0.9, 0.1], one_hot(1, 2)),
//! ];
//!
//! let mut trainer = TrainingLoop::new(TrainingConfig::new(5, 0.5).with_seed(1))?;
//! let report = trainer.run(&mut network, &mut pairs, &CancellationToken::new(), |_| {})?;
//! assert_eq!(report.status, TrainingStatus::Completed);
//! assert_eq!(report.iterations.len(), 5);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod handle;
pub mod status;
pub mod trainer;

pub use config::TrainingConfig;
pub use handle::{CancellationToken, TrainedModel, TrainingHandle};
pub use status::{TrainingEvent, TrainingReport, TrainingStatus};
pub use trainer::TrainingLoop;
