//! Error types for layer stacks, transform controls, and backends.

use thiserror::Error;

/// Errors from layer stack authoring and persistence.
///
/// Every mutating operation on a [`crate::LayerStack`] validates its input
/// before touching the stack, so an `Err` always means the stack is unchanged.
#[derive(Debug, Error)]
pub enum StackError {
    /// A persisted stack failed schema, type, or value validation.
    #[error("malformed layer stack: {0}")]
    Malformed(String),

    /// A layer thickness was zero, negative, or not finite.
    #[error("invalid layer thickness {0} mm: must be greater than 0")]
    InvalidThickness(f64),

    /// An edit referenced a layer that does not exist.
    #[error("layer index {index} out of range for stack of {len} layer(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl BackendError for StackError {
    fn code(&self) -> &'static str {
        match self {
            StackError::Malformed(_) => "STACK_001",
            StackError::InvalidThickness(_) => "STACK_002",
            StackError::IndexOutOfRange { .. } => "STACK_003",
            StackError::Json(_) => "STACK_004",
            StackError::Io(_) => "STACK_005",
        }
    }

    fn category(&self) -> &'static str {
        "stack"
    }
}

/// A transform control outside its documented range.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{field} = {value} is out of range ({expected})")]
pub struct ParamsError {
    /// Name of the offending control.
    pub field: &'static str,
    /// The rejected value.
    pub value: f64,
    /// Human-readable description of the accepted range.
    pub expected: &'static str,
}

impl ParamsError {
    /// Creates a new out-of-range error.
    pub fn new(field: &'static str, value: f64, expected: &'static str) -> Self {
        Self {
            field,
            value,
            expected,
        }
    }
}

impl BackendError for ParamsError {
    fn code(&self) -> &'static str {
        "PARAMS_001"
    }

    fn category(&self) -> &'static str {
        "params"
    }
}

/// Common trait for errors surfaced to users.
///
/// Gives every error a stable code and a category so the CLI can report
/// failures uniformly regardless of which crate produced them.
pub trait BackendError: std::error::Error {
    /// Stable error code such as `"STACK_001"` or `"TEXTURE_002"`.
    fn code(&self) -> &'static str;

    /// Human-readable message. Defaults to `Display`.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category such as `"stack"`, `"texture"`, or `"export"`.
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stack_error_codes_are_distinct() {
        let errors = [
            StackError::Malformed("x".into()),
            StackError::InvalidThickness(-1.0),
            StackError::IndexOutOfRange { index: 3, len: 1 },
        ];
        let codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes, vec!["STACK_001", "STACK_002", "STACK_003"]);
        assert!(errors.iter().all(|e| e.category() == "stack"));
    }

    #[test]
    fn test_params_error_message() {
        let err = ParamsError::new("twist_amount", 12.0, "0..=10");
        assert_eq!(err.message(), "twist_amount = 12 is out of range (0..=10)");
        assert_eq!(err.code(), "PARAMS_001");
    }
}
