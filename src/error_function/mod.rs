//! Error functions measuring how far a network result is from its reference.
//!
//! The learning processor only needs the per-unit derivative; the value is
//! used for reporting and tests.

pub mod functions;

pub use functions::{CrossEntropyError, ErrorFunction, ErrorFunctionKind, QuadraticError};
