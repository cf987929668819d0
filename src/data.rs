use ndarray::{Array1, ArrayView1};
use std::collections::BTreeMap;

use crate::error::{PerceptError, Result};

/// Fewest samples a class may be trained from.
pub const MIN_CLASS_SIZE: usize = 10;

/// One input vector and the reference output it should map to.
#[derive(Clone, Debug, PartialEq)]
pub struct LearningPair {
    input: Array1<f32>,
    reference: Array1<f32>,
}

impl LearningPair {
    pub fn new(input: Array1<f32>, reference: Array1<f32>) -> Self {
        LearningPair { input, reference }
    }

    pub fn input(&self) -> ArrayView1<'_, f32> {
        self.input.view()
    }

    pub fn reference(&self) -> ArrayView1<'_, f32> {
        self.reference.view()
    }
}

/// One-hot vector of length `width` with unit `index` set.
pub fn one_hot(index: usize, width: usize) -> Array1<f32> {
    let mut v = Array1::zeros(width);
    if index < width {
        v[index] = 1.0;
    }
    v
}

/// Named classes of input vectors, ordered by name.
#[derive(Clone, Debug, Default)]
pub struct LabeledSet {
    classes: BTreeMap<String, Vec<Array1<f32>>>,
    input_width: Option<usize>,
}

impl LabeledSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class of samples under a unique name.
    pub fn add_class<S: Into<String>>(&mut self, name: S, inputs: Vec<Array1<f32>>) -> Result<()> {
        let name = name.into();
        if self.classes.contains_key(&name) {
            return Err(PerceptError::configuration(
                "class",
                format!("duplicate class name '{}'", name),
            ));
        }
        if inputs.len() < MIN_CLASS_SIZE {
            return Err(PerceptError::configuration(
                "class",
                format!(
                    "class '{}' has {} samples, at least {} are required",
                    name,
                    inputs.len(),
                    MIN_CLASS_SIZE
                ),
            ));
        }

        let width = self.input_width.unwrap_or(inputs[0].len());
        for input in &inputs {
            PerceptError::check_width("input vector", width, input.len())?;
        }

        self.input_width = Some(width);
        self.classes.insert(name, inputs);
        Ok(())
    }

    pub fn remove_class(&mut self, name: &str) -> bool {
        let removed = self.classes.remove(name).is_some();
        if self.classes.is_empty() {
            self.input_width = None;
        }
        removed
    }

    pub fn class_names(&self) -> Vec<String> {
        self.classes.keys().cloned().collect()
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn input_width(&self) -> Option<usize> {
        self.input_width
    }

    pub fn len(&self) -> usize {
        self.classes.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Every sample paired with the one-hot reference of its class.
    pub fn learning_pairs(&self) -> Vec<LearningPair> {
        let class_count = self.classes.len();
        self.classes
            .values()
            .enumerate()
            .flat_map(|(index, inputs)| {
                let reference = one_hot(index, class_count);
                inputs
                    .iter()
                    .map(move |input| LearningPair::new(input.clone(), reference.clone()))
            })
            .collect()
    }
}
