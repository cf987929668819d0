use std::fmt;

/// Result type for percept operations
pub type Result<T> = std::result::Result<T, PerceptError>;

/// Main error type for the percept library
#[derive(Debug, Clone, PartialEq)]
pub enum PerceptError {
    /// Malformed topology, non-positive widths or an invalid error function.
    /// Raised only while constructing something.
    Configuration {
        name: String,
        reason: String,
    },

    /// A vector whose length disagrees with the configured widths
    ShapeMismatch {
        expected: String,
        actual: String,
    },

    /// Runtime failure inside the training loop
    TrainingFailure(String),

    /// IO errors (file operations)
    Io(String),

    /// Serialization/deserialization errors
    Serialization(String),
}

impl fmt::Display for PerceptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PerceptError::Configuration { name, reason } => {
                write!(f, "Invalid configuration '{}': {}", name, reason)
            }
            PerceptError::ShapeMismatch { expected, actual } => {
                write!(f, "Shape mismatch: expected {}, got {}", expected, actual)
            }
            PerceptError::TrainingFailure(msg) => write!(f, "Training failure: {}", msg),
            PerceptError::Io(msg) => write!(f, "IO error: {}", msg),
            PerceptError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for PerceptError {}

impl From<std::io::Error> for PerceptError {
    fn from(err: std::io::Error) -> Self {
        PerceptError::Io(err.to_string())
    }
}

impl From<bincode::Error> for PerceptError {
    fn from(err: bincode::Error) -> Self {
        PerceptError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for PerceptError {
    fn from(err: serde_json::Error) -> Self {
        PerceptError::Serialization(err.to_string())
    }
}

// Helper functions for common error patterns
impl PerceptError {
    pub fn configuration<S: Into<String>, R: Into<String>>(name: S, reason: R) -> Self {
        PerceptError::Configuration {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn shape_mismatch<E: ToString, A: ToString>(expected: E, actual: A) -> Self {
        PerceptError::ShapeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }

    /// Checks that a vector has the width a layer expects.
    pub fn check_width(what: &str, expected: usize, actual: usize) -> Result<()> {
        if expected == actual {
            Ok(())
        } else {
            Err(PerceptError::ShapeMismatch {
                expected: format!("{} of length {}", what, expected),
                actual: format!("length {}", actual),
            })
        }
    }

    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, PerceptError::ShapeMismatch { .. })
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, PerceptError::Configuration { .. })
    }
}
