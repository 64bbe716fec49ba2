//! Conversion engine for Lingo.
//!
//! Talks to the external translation service over HTTP and drives the
//! conversion lifecycle:
//! - `Converter` trait seam so the shell and tests can swap the transport
//! - `HttpConverter` — the reqwest-backed client
//! - `ConversionController` — the validate → send → resolve state machine
//!   with generation gating for stale completions

pub mod controller;
pub mod http;

use async_trait::async_trait;

pub use controller::{
    ConversionController, ConversionPhase, Resolution, TriggerOutcome, EMPTY_RESULT_FALLBACK,
    FAILURE_FALLBACK, INITIAL_TARGET_TEXT, VALIDATION_ERROR_MESSAGE,
};
pub use http::{ConverterConfig, HttpConverter};

/// The conversion transport. One call per dispatched generation.
#[async_trait]
pub trait Converter: Send + Sync {
    async fn convert(&self, code: &str) -> Result<ConvertedCode, ConvertError>;
}

/// A successful service response. The service may legitimately return no
/// converted text; the controller substitutes a placeholder in that case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertedCode {
    pub javascript: Option<String>,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ConvertError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Service error: HTTP {status}: {body}")]
    Service { status: u16, body: String },
    #[error("Decode error: {0}")]
    Decode(String),
}

impl ConvertError {
    /// The message shown in the shell's error banner. Transport problems
    /// read as connection errors; service failures surface the status code.
    pub fn user_message(&self) -> String {
        match self {
            ConvertError::Network(e) => format!("Connection error: {e}"),
            ConvertError::Service { status, .. } => {
                format!("Conversion failed: HTTP {status}")
            }
            ConvertError::Decode(e) => format!("Conversion failed: {e}"),
        }
    }
}
