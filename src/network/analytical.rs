use ndarray::{Array1, ArrayView1};
use std::fmt;

use super::state::NetworkState;
use crate::error::Result;

/// Per-layer record of a forward pass.
#[derive(Debug, Clone)]
pub struct ForwardTrace {
    /// `activations[0]` is the input, `activations[l + 1]` the output of layer `l`.
    pub activations: Vec<Array1<f32>>,
    /// Weighted sums of each layer before the activation was applied.
    pub pre_activations: Vec<Array1<f32>>,
}

impl ForwardTrace {
    pub fn output(&self) -> &Array1<f32> {
        // Never empty: the input is always recorded.
        &self.activations[self.activations.len() - 1]
    }

    pub fn into_output(mut self) -> Array1<f32> {
        self.activations.pop().unwrap_or_default()
    }
}

/// Stateless evaluator of a network state.
pub trait AnalyticalProcessor: Send + Sync + fmt::Debug {
    /// Map an input vector to the network's output.
    fn evaluate(&self, state: &NetworkState, input: ArrayView1<f32>) -> Result<Array1<f32>> {
        Ok(self.evaluate_with_trace(state, input)?.into_output())
    }

    /// Forward pass that keeps every layer's activation.
    fn evaluate_with_trace(
        &self,
        state: &NetworkState,
        input: ArrayView1<f32>,
    ) -> Result<ForwardTrace>;
}

/// Plain feed-forward pass: `f(W · a + b)` layer after layer.
#[derive(Debug, Clone, Copy, Default)]
pub struct FeedForward;

impl AnalyticalProcessor for FeedForward {
    fn evaluate(&self, state: &NetworkState, input: ArrayView1<f32>) -> Result<Array1<f32>> {
        state.check_input(input)?;
        let mut current = input.to_owned();
        for layer in state.layers() {
            let mut next = layer.weights.dot(&current) + &layer.biases;
            layer.activation.apply(&mut next);
            current = next;
        }
        Ok(current)
    }

    fn evaluate_with_trace(
        &self,
        state: &NetworkState,
        input: ArrayView1<f32>,
    ) -> Result<ForwardTrace> {
        state.check_input(input)?;
        let mut activations = Vec::with_capacity(state.num_layers() + 1);
        let mut pre_activations = Vec::with_capacity(state.num_layers());
        activations.push(input.to_owned());

        for (i, layer) in state.layers().iter().enumerate() {
            let weighted_sum = layer.weights.dot(&activations[i]) + &layer.biases;
            let mut activated = weighted_sum.clone();
            layer.activation.apply(&mut activated);
            pre_activations.push(weighted_sum);
            activations.push(activated);
        }

        Ok(ForwardTrace {
            activations,
            pre_activations,
        })
    }
}
