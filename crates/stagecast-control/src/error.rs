//! Error types for the telemetry control system
use thiserror::Error;

/// Telemetry control errors
#[derive(Error, Debug)]
pub enum ControlError {
    /// I/O error (socket creation, thread spawn)
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid configuration value
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Malformed or incompatible datagram
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    /// TOML configuration parse error
    #[error("Config parse error: {0}")]
    TomlDeError(#[from] toml::de::Error),

    /// TOML configuration serialization error
    #[error("Config write error: {0}")]
    TomlSerError(#[from] toml::ser::Error),
}

/// Result type for control operations
pub type Result<T> = std::result::Result<T, ControlError>;
