//! Error types for Arbol operations.
//!
//! Errors fall into three families: validation of the dataset and
//! configuration (raised before induction starts), incompatibility between
//! an example and a learned tree (raised per classification), and I/O or
//! format failures from the loaders.

use thiserror::Error;

/// Main error type for Arbol operations.
///
/// # Examples
///
/// ```
/// use arbol::error::ArbolError;
///
/// let err = ArbolError::validation("class attribute 'Class' is not declared");
/// assert!(err.to_string().contains("Validation failed"));
/// ```
#[derive(Debug, Error)]
pub enum ArbolError {
    /// Malformed schema, dataset or example.
    #[error("Validation failed: {message}")]
    Validation {
        /// Validation failure message
        message: String,
    },

    /// An example cannot be routed through a learned tree.
    ///
    /// `value` is `None` when the example has no value at all for the
    /// attribute tested by the tree.
    #[error("Example is incompatible with the model: attribute '{attribute}' {}", describe_value(.value))]
    IncompatibleExample {
        /// Attribute tested at the node where traversal stopped
        attribute: String,
        /// Value carried by the example, if any
        value: Option<String>,
    },

    /// Invalid hyperparameter value provided.
    #[error("Invalid hyperparameter: {param} = {value}, expected {constraint}")]
    InvalidHyperparameter {
        /// Parameter name
        param: String,
        /// Provided value
        value: String,
        /// Constraint description
        constraint: String,
    },

    /// An operation received no examples to work on.
    #[error("empty input: {0}")]
    EmptyInput(String),

    /// Malformed input file.
    #[error("Invalid data format at line {line}: {message}")]
    Format {
        /// 1-based line number in the source
        line: usize,
        /// Error description
        message: String,
    },

    /// I/O error (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

fn describe_value(value: &Option<String>) -> String {
    match value {
        Some(v) => format!("has unseen value '{v}'"),
        None => "is missing".to_string(),
    }
}

impl ArbolError {
    /// Create a validation error
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create an incompatible-example error
    #[must_use]
    pub fn incompatible(attribute: &str, value: Option<&str>) -> Self {
        Self::IncompatibleExample {
            attribute: attribute.to_string(),
            value: value.map(str::to_string),
        }
    }

    /// Create an empty input error
    #[must_use]
    pub fn empty_input(context: &str) -> Self {
        Self::EmptyInput(context.to_string())
    }

    /// Create a format error for a given line
    #[must_use]
    pub fn format(line: usize, message: impl Into<String>) -> Self {
        Self::Format {
            line,
            message: message.into(),
        }
    }

    /// Returns `true` for errors that only concern a single example and can
    /// be skipped by a caller evaluating many examples.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::IncompatibleExample { .. })
    }
}

impl From<serde_json::Error> for ArbolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for ArbolError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, ArbolError>;
