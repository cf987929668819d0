//! Evaluation metrics reported during training and used to read off a class.

pub mod classification;
pub mod distance;
pub mod tracker;

pub use classification::{classify, ClassificationResult, ScoreRank, HIGHLIGHT_THRESHOLD};
pub use distance::{index_of_max, manhattan_distance};
pub use tracker::{EpochTracker, IterationInfo};
