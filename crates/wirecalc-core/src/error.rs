// ── Engine error types ──
//
// User-facing errors from wirecalc-core. Inputs are rejected up front;
// a request that passes validation cannot fail during computation, so
// every variant here describes a bad input, never a bad intermediate.

use thiserror::Error;

/// Error type for everything the engine can reject.
#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// A numeric input was missing, non-numeric, zero, or negative.
    ///
    /// One variant covers every field; `field` names the offender
    /// ("file size", "internet speed", "upload speed").
    #[error("invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    /// A streaming profile key that matches no known preset.
    #[error("unknown streaming profile `{name}`")]
    UnknownProfile { name: String },
}

impl EngineError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
