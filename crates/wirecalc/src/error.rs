//! CLI error types with miette diagnostics.
//!
//! Maps `EngineError` variants into user-facing errors with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use wirecalc_core::EngineError;

/// Process exit codes used by `main`.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(wirecalc::validation))]
    Validation { field: String, reason: String },

    #[error("Unknown streaming profile '{name}'")]
    #[diagnostic(
        code(wirecalc::unknown_profile),
        help("Run: wirecalc presets bitrates to see the supported profiles")
    )]
    UnknownProfile { name: String },

    #[error("No {kind} speed to work with")]
    #[diagnostic(
        code(wirecalc::missing_speed),
        help(
            "Give a speed on the command line (--speed or --preset for transfers,\n\
             UPLOAD_MBPS for streaming), or save one with: wirecalc config init"
        )
    )]
    MissingSpeed { kind: &'static str },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Connection '{name}' not found in configuration")]
    #[diagnostic(
        code(wirecalc::connection_not_found),
        help(
            "Available connections: {available}\n\
             Create one with: wirecalc config init"
        )
    )]
    ConnectionNotFound { name: String, available: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(wirecalc::no_config),
        help(
            "Create one with: wirecalc config init\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(wirecalc::config))]
    Config(Box<figment::Error>),

    // ── IO ───────────────────────────────────────────────────────────

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } | Self::UnknownProfile { .. } | Self::MissingSpeed { .. } => {
                exit_code::USAGE
            }
            Self::ConnectionNotFound { .. } => exit_code::NOT_FOUND,
            _ => exit_code::GENERAL,
        }
    }
}

// ── EngineError → CliError mapping ───────────────────────────────────

impl From<EngineError> for CliError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidInput { field, reason } => CliError::Validation {
                field: field.into(),
                reason,
            },

            EngineError::UnknownProfile { name } => CliError::UnknownProfile { name },
        }
    }
}
