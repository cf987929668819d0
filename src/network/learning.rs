use ndarray::{Array1, ArrayView1, Zip};
use std::fmt;

use super::analytical::{AnalyticalProcessor, FeedForward};
use super::state::NetworkState;
use crate::error::Result;
use crate::error_function::ErrorFunction;

/// Algorithm that updates a network state from one learning pair.
pub trait LearningProcessor: Send + Sync + fmt::Debug {
    /// Apply one update to `state`. Shape errors are returned before anything is written.
    fn apply_update(
        &self,
        state: &mut NetworkState,
        error_function: &dyn ErrorFunction,
        input: ArrayView1<f32>,
        reference: ArrayView1<f32>,
        learning_rate: f32,
    ) -> Result<()>;
}

/// Online backpropagation with plain gradient descent.
#[derive(Debug, Clone, Copy, Default)]
pub struct Backpropagation {
    forward: FeedForward,
}

impl Backpropagation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Error signal of every layer, output layer last.
    ///
    /// Computed entirely from the pre-update weights. `activations` must be a
    /// full trace of `state` and `reference` must match its output width.
    pub(crate) fn deltas(
        &self,
        state: &NetworkState,
        error_function: &dyn ErrorFunction,
        activations: &[Array1<f32>],
        reference: ArrayView1<f32>,
    ) -> Vec<Array1<f32>> {
        let layers = state.layers();
        let n = layers.len();
        let mut deltas: Vec<Array1<f32>> = Vec::with_capacity(n);

        let output = activations[n].view();
        let last = &layers[n - 1];
        let output_delta = Array1::from_shape_fn(output.len(), |i| {
            error_function.derivative(output, reference, i)
                * last.activation.derivative_from_output(output[i])
        });
        deltas.push(output_delta);

        for l in (0..n - 1).rev() {
            let next_delta = &deltas[deltas.len() - 1];
            let propagated = layers[l + 1].weights.t().dot(next_delta);
            let derivative = layers[l].activation.derivative(activations[l + 1].view());
            deltas.push(propagated * derivative);
        }

        deltas.reverse();
        deltas
    }
}

impl LearningProcessor for Backpropagation {
    fn apply_update(
        &self,
        state: &mut NetworkState,
        error_function: &dyn ErrorFunction,
        input: ArrayView1<f32>,
        reference: ArrayView1<f32>,
        learning_rate: f32,
    ) -> Result<()> {
        state.check_input(input)?;
        state.check_reference(reference)?;

        let trace = self.forward.evaluate_with_trace(state, input)?;
        let deltas = self.deltas(state, error_function, &trace.activations, reference);

        for ((layer, delta), previous) in state
            .layers_mut()
            .iter_mut()
            .zip(&deltas)
            .zip(&trace.activations)
        {
            Zip::from(layer.weights.rows_mut())
                .and(delta)
                .for_each(|mut row, &d| row.scaled_add(-learning_rate * d, previous));
            layer.biases.scaled_add(-learning_rate, delta);
        }

        Ok(())
    }
}
