//! Error types for aliasing.
//!
//! The demo steps themselves are total: construction, insertion and lookup
//! cannot fail. Errors only come from the surrounding layer (loading a
//! config file, writing output).

use thiserror::Error;

/// Result type alias for aliasing operations.
pub type DemoResult<T> = Result<T, DemoError>;

/// Unified error type for all aliasing operations.
#[derive(Debug, Error)]
pub enum DemoError {
    // ===== Configuration Errors =====
    /// Invalid configuration parameter.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// Demo name not recognized.
    #[error("Unknown demo '{0}'")]
    UnknownDemo(String),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ===== I/O Errors =====
    /// File or stream I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl DemoError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an unknown-demo error.
    #[must_use]
    pub fn unknown_demo(name: impl Into<String>) -> Self {
        Self::UnknownDemo(name.into())
    }

    /// Whether the error came from user-supplied configuration.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config { .. } | Self::YamlParse(_) | Self::Validation(_) | Self::UnknownDemo(_)
        )
    }
}
