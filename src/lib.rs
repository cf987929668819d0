//! # Percept - A Small Multilayer Perceptron Training Engine
//!
//! Percept trains fully connected, sigmoid-family networks by online
//! backpropagation. A network maps fixed-length input vectors onto one score
//! per class; a training loop shuffles a labelled dataset every epoch, learns
//! from one half and reports the error on the other.
//!
//! ## Key Features
//!
//! - **Stateless forward pass**: [`network::FeedForward`] only reads the weights
//! - **Backpropagation**: [`network::Backpropagation`] updates them in place, one pair at a time
//! - **Pluggable error functions**: quadratic and cross-entropy behind
//!   [`error_function::ErrorFunction`]
//! - **Background training**: [`training::TrainingLoop::spawn`] with ordered events
//!   and cancellation
//! - **Snapshots**: deep copies of [`network::NetworkState`], saved with bincode
//!
//! ## Quick Start
//!
//! ```rust
//! use percept::builders::NetworkBuilder;
//! use ndarray::array;
//!
//! # fn main() -> percept::error::Result<()> {
//! let mut network = NetworkBuilder::new(3, 2)
//!     .hidden_layer(5)
//!     .seed(42)
//!     .build()?;
//!
//! let input = array![0.2, 0.4, 0.6];
//! let reference = array![1.0, 0.0];
//!
//! let before = network.error(input.view(), reference.view())?;
//! network.learn(input.view(), reference.view(), 0.1)?;
//! let after = network.error(input.view(), reference.view())?;
//! assert!(after < before);
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`activations`] - Sigmoid and tanh activations
//! - [`builders`] - Network configuration and the fluent builder
//! - [`data`] - Learning pairs and labelled class sets
//! - [`error`] - Error types and result handling
//! - [`error_function`] - Error functions driving learning
//! - [`layers`] - Dense layers and weight initialization
//! - [`metrics`] - Evaluation distance, epoch summaries and classification
//! - [`network`] - Network state, processors and the network facade
//! - [`training`] - The cancellable training loop

pub mod activations;
pub mod builders;
pub mod data;
pub mod error;
pub mod error_function;
pub mod layers;
pub mod metrics;
pub mod network;
pub mod training;

pub use error::{PerceptError, Result};
pub use network::NeuralNetwork;

#[cfg(test)]
mod tests;
