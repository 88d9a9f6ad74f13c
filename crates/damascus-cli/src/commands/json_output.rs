//! JSON output types for machine-readable CLI output.
//!
//! These back the `--json` flag on `render` and the `stack` subcommands.

use damascus_backend_texture::{ExportError, GenerateError, PngError};
use damascus_spec::{BackendError, ParamsError, StackError};
use serde::Serialize;

/// Error codes for CLI-level failures that no library error covers.
pub mod error_codes {
    /// Unknown pattern name
    pub const UNKNOWN_PATTERN: &str = "CLI_001";
    /// Unknown unit system
    pub const UNKNOWN_UNITS: &str = "CLI_002";
    /// Anything else
    pub const OTHER: &str = "CLI_999";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g. "STACK_001", "CLI_001")
    pub code: String,
    /// Human-readable error message, including context
    pub message: String,
}

impl JsonError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Build from an error chain, taking the code from the first library
    /// error found in it.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        Self::new(error_code(err), format!("{:#}", err))
    }
}

/// Stable code for the first recognised error in `err`'s chain.
pub fn error_code(err: &anyhow::Error) -> String {
    for cause in err.chain() {
        if let Some(e) = cause.downcast_ref::<StackError>() {
            return e.code().to_string();
        }
        if let Some(e) = cause.downcast_ref::<ParamsError>() {
            return e.code().to_string();
        }
        if let Some(e) = cause.downcast_ref::<GenerateError>() {
            return e.code().to_string();
        }
        if let Some(e) = cause.downcast_ref::<ExportError>() {
            return e.code().to_string();
        }
        if let Some(e) = cause.downcast_ref::<PngError>() {
            return e.code().to_string();
        }
        if let Some(e) = cause.downcast_ref::<CliError>() {
            return e.code.to_string();
        }
    }
    error_codes::OTHER.to_string()
}

/// CLI-level error carrying one of [`error_codes`].
#[derive(Debug)]
pub struct CliError {
    pub code: &'static str,
    pub message: String,
}

impl CliError {
    pub fn new(code: &'static str, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

/// Output of `render --json`.
#[derive(Debug, Clone, Serialize)]
pub struct RenderOutput {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RenderResult>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

/// Details of a successful render.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderResult {
    /// Generator name, or "image" for a loaded base
    pub pattern: String,
    pub width: u32,
    pub height: u32,
    pub twist: f64,
    pub grind: f64,
    pub mosaic: u32,
    pub output: String,
    /// "png" or "pdf"
    pub format: String,
    /// BLAKE3 hash of the written PNG
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
}

/// Output of the `stack` subcommands with `--json`.
#[derive(Debug, Clone, Serialize)]
pub struct StackOutput {
    pub success: bool,
    pub file: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<Vec<JsonLayer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<JsonError>,
}

/// One layer in display units.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct JsonLayer {
    pub color: String,
    pub thickness: f64,
}
