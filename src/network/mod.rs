//! The neural network facade and the pieces it composes.
//!
//! A [`NeuralNetwork`] owns one [`NetworkState`] and drives it through an
//! [`AnalyticalProcessor`] (forward pass, read-only) and a
//! [`LearningProcessor`] (backpropagation, mutating). There is no internal
//! locking: while a network is being trained on another thread, readers
//! should work from [`NeuralNetwork::network_state_copy`].

pub mod analytical;
pub mod learning;
pub mod state;

pub use analytical::{AnalyticalProcessor, FeedForward, ForwardTrace};
pub use learning::{Backpropagation, LearningProcessor};
pub use state::NetworkState;

use ndarray::{Array1, ArrayView1};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use bincode::{deserialize, serialize};

use crate::error::{PerceptError, Result};
use crate::error_function::{ErrorFunction, ErrorFunctionKind};

/// A multilayer perceptron with a pluggable error function.
#[derive(Debug)]
pub struct NeuralNetwork {
    state: NetworkState,
    analytical: Box<dyn AnalyticalProcessor>,
    learning: Box<dyn LearningProcessor>,
    error_function: Box<dyn ErrorFunction>,
}

impl NeuralNetwork {
    /// Create a network over `state` with the default feed-forward and
    /// backpropagation processors.
    pub fn new(state: NetworkState, error_function: Box<dyn ErrorFunction>) -> Result<Self> {
        Self::with_processors(
            state,
            Box::new(FeedForward),
            Box::new(Backpropagation::new()),
            error_function,
        )
    }

    /// Create a network with explicit processors.
    pub fn with_processors(
        state: NetworkState,
        analytical: Box<dyn AnalyticalProcessor>,
        learning: Box<dyn LearningProcessor>,
        error_function: Box<dyn ErrorFunction>,
    ) -> Result<Self> {
        state.validate()?;
        error_function.check_validity()?;
        check_output_domain(&state, error_function.as_ref())?;
        Ok(NeuralNetwork {
            state,
            analytical,
            learning,
            error_function,
        })
    }

    /// Rebuild a network from a previously captured snapshot.
    pub fn from_state(state: NetworkState, error_function: ErrorFunctionKind) -> Result<Self> {
        Self::new(state, error_function.build()?)
    }

    /// Map an input vector to an output vector. Never touches the weights.
    pub fn map(&self, input: ArrayView1<f32>) -> Result<Array1<f32>> {
        self.analytical.evaluate(&self.state, input)
    }

    /// Apply one online learning step towards `reference`.
    ///
    /// On a shape error the state is left exactly as it was.
    pub fn learn(
        &mut self,
        input: ArrayView1<f32>,
        reference: ArrayView1<f32>,
        learning_rate: f32,
    ) -> Result<()> {
        self.learning.apply_update(
            &mut self.state,
            self.error_function.as_ref(),
            input,
            reference,
            learning_rate,
        )
    }

    /// Error of the current mapping of `input` against `reference`.
    pub fn error(&self, input: ArrayView1<f32>, reference: ArrayView1<f32>) -> Result<f32> {
        let output = self.map(input)?;
        self.error_function.value(output.view(), reference)
    }

    /// Deep copy of the numeric state.
    pub fn network_state_copy(&self) -> NetworkState {
        log::trace!("taking network state snapshot {:?}", self.state.widths());
        self.state.clone()
    }

    pub fn state(&self) -> &NetworkState {
        &self.state
    }

    pub fn error_function(&self) -> &dyn ErrorFunction {
        self.error_function.as_ref()
    }

    pub fn input_width(&self) -> usize {
        self.state.input_width()
    }

    pub fn output_width(&self) -> usize {
        self.state.output_width()
    }

    /// Serializable snapshot of the state together with the error function.
    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot {
            state: self.network_state_copy(),
            error_function: self.error_function.kind(),
        }
    }

    /// Save the network's state and error function to a file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let serialized = serialize(&self.snapshot())?;
        let mut file = fs::File::create(path.as_ref())?;
        file.write_all(&serialized)?;
        log::trace!("saved network to {}", path.as_ref().display());
        Ok(())
    }

    /// Load a network saved with [`NeuralNetwork::save`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = fs::File::open(path.as_ref())?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        let snapshot: NetworkSnapshot = deserialize(&buffer)?;
        snapshot.restore()
    }
}

/// The output activation must stay inside the interval the error function is defined on.
fn check_output_domain(state: &NetworkState, error_function: &dyn ErrorFunction) -> Result<()> {
    let (low, high) = match error_function.output_domain() {
        Some(domain) => domain,
        None => return Ok(()),
    };
    let output = match state.layers().last() {
        Some(layer) => layer,
        None => return Ok(()),
    };
    let (min, max) = output.activation.range();
    if min < low || max > high {
        return Err(PerceptError::configuration(
            "error_function",
            format!(
                "{} needs outputs in [{}, {}], the output layer's {:?} spans [{}, {}]",
                error_function.kind(),
                low,
                high,
                output.activation,
                min,
                max
            ),
        ));
    }
    Ok(())
}

/// A network's state bundled with the error function it was trained with.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct NetworkSnapshot {
    pub state: NetworkState,
    pub error_function: ErrorFunctionKind,
}

impl NetworkSnapshot {
    pub fn restore(self) -> Result<NeuralNetwork> {
        NeuralNetwork::from_state(self.state, self.error_function)
    }
}
