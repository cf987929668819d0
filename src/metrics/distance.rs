use ndarray::ArrayView1;

use crate::error::{PerceptError, Result};

/// L1 distance between two vectors of equal length.
pub fn manhattan_distance(a: ArrayView1<f32>, b: ArrayView1<f32>) -> Result<f32> {
    PerceptError::check_width("vector", a.len(), b.len())?;
    Ok(a.iter().zip(b.iter()).map(|(&x, &y)| (x - y).abs()).sum())
}

/// Index of the first maximal element, `None` for an empty vector.
pub fn index_of_max(values: ArrayView1<f32>) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &v) in values.iter().enumerate() {
        match best {
            Some((_, max)) if v <= max => {}
            _ => best = Some((i, v)),
        }
    }
    best.map(|(i, _)| i)
}
