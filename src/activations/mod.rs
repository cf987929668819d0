//! # Activation Functions Module
//!
//! The sigmoid family of activations a layer may apply element-wise to its
//! pre-activation. Both variants have derivatives that can be written in terms
//! of the activation value itself, which is what backpropagation uses.
//!
//! ## Available Activations
//!
//! - **Sigmoid**: `1 / (1 + e^(-x))` - Outputs between 0 and 1
//! - **Tanh**: Hyperbolic tangent - Outputs between -1 and 1
//!
//! ## Usage Example
//!
//! ```rust
//! use percept::activations::Activation;
//! use ndarray::array;
//!
//! let mut data = array![1.0, -0.5, 0.0, 2.0];
//! Activation::Sigmoid.apply(&mut data);
//! assert!(data.iter().all(|&v| v > 0.0 && v < 1.0));
//! ```

pub mod functions;

pub use functions::Activation;
