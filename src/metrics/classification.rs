use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};

use super::distance::index_of_max;
use crate::error::{PerceptError, Result};

/// Scores at or above this value are highlighted.
pub const HIGHLIGHT_THRESHOLD: f32 = 0.5;

/// How a class score compares with the others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreRank {
    /// The winning class.
    Maximal,
    UpperHalf,
    LowerHalf,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub class_name: String,
    pub score: f32,
    pub rank: ScoreRank,
}

/// Pair each output unit of a mapped vector with its class name and rank.
pub fn classify<S: AsRef<str>>(
    output: ArrayView1<f32>,
    class_names: &[S],
) -> Result<Vec<ClassificationResult>> {
    PerceptError::check_width("class name list", output.len(), class_names.len())?;
    let winner = index_of_max(output);

    Ok(output
        .iter()
        .zip(class_names)
        .enumerate()
        .map(|(i, (&score, name))| {
            let rank = if Some(i) == winner {
                ScoreRank::Maximal
            } else if score >= HIGHLIGHT_THRESHOLD {
                ScoreRank::UpperHalf
            } else {
                ScoreRank::LowerHalf
            };
            ClassificationResult {
                class_name: name.as_ref().to_string(),
                score,
                rank,
            }
        })
        .collect())
}
