use ndarray::ArrayView1;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use bincode::{deserialize, serialize};

use crate::error::{PerceptError, Result};
use crate::layers::Layer;

/// The numeric state of a network: an ordered chain of layers.
///
/// Cloning is deep, so a clone is an independent snapshot that can be stored
/// or handed to another [`crate::network::NeuralNetwork`] without aliasing.
/// Deserialization goes through [`NetworkState::new`], so a stored chain with
/// mismatched widths is rejected instead of failing later in a forward pass.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(try_from = "StoredState")]
pub struct NetworkState {
    layers: Vec<Layer>,
}

/// Unchecked wire form of [`NetworkState`].
#[derive(Deserialize)]
struct StoredState {
    layers: Vec<Layer>,
}

impl TryFrom<StoredState> for NetworkState {
    type Error = PerceptError;

    fn try_from(stored: StoredState) -> Result<Self> {
        NetworkState::new(stored.layers)
    }
}

impl NetworkState {
    /// Build a state from layers, checking that adjacent widths agree.
    pub fn new(layers: Vec<Layer>) -> Result<Self> {
        let state = NetworkState { layers };
        state.validate()?;
        Ok(state)
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub(crate) fn layers_mut(&mut self) -> &mut [Layer] {
        &mut self.layers
    }

    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }

    /// Length of the input vectors this state accepts.
    pub fn input_width(&self) -> usize {
        self.layers.first().map_or(0, Layer::input_width)
    }

    /// Length of the output vectors (the class count).
    pub fn output_width(&self) -> usize {
        self.layers.last().map_or(0, Layer::output_width)
    }

    /// Unit counts from the input through every layer's output.
    pub fn widths(&self) -> Vec<usize> {
        let mut widths = Vec::with_capacity(self.layers.len() + 1);
        widths.push(self.input_width());
        widths.extend(self.layers.iter().map(Layer::output_width));
        widths
    }

    /// Total number of weights and biases.
    pub fn parameter_count(&self) -> usize {
        self.layers
            .iter()
            .map(|l| l.weights.len() + l.biases.len())
            .sum()
    }

    pub fn validate(&self) -> Result<()> {
        if self.layers.is_empty() {
            return Err(PerceptError::configuration(
                "layers",
                "network must have at least one layer",
            ));
        }
        for layer in &self.layers {
            layer.validate()?;
        }
        for (i, pair) in self.layers.windows(2).enumerate() {
            if pair[0].output_width() != pair[1].input_width() {
                return Err(PerceptError::configuration(
                    "layers",
                    format!(
                        "layer {} produces {} units but layer {} expects {}",
                        i,
                        pair[0].output_width(),
                        i + 1,
                        pair[1].input_width()
                    ),
                ));
            }
        }
        Ok(())
    }

    pub(crate) fn check_input(&self, input: ArrayView1<f32>) -> Result<()> {
        PerceptError::check_width("input vector", self.input_width(), input.len())
    }

    pub(crate) fn check_reference(&self, reference: ArrayView1<f32>) -> Result<()> {
        PerceptError::check_width("reference vector", self.output_width(), reference.len())
    }

    /// Save the state to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serialize(self)?;
        let mut file = fs::File::create(path.as_ref())?;
        file.write_all(&serialized)?;
        log::trace!("saved network state {:?} to {}", self.widths(), path.as_ref().display());
        Ok(())
    }

    /// Load a state from a file. Shapes are checked while decoding.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = fs::File::open(path.as_ref())?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        Ok(deserialize(&buffer)?)
    }
}
