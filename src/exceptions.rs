//! Error types for the ESROCOS tools

use std::fmt;

/// Main error type for ESROCOS tool operations
#[derive(Debug)]
pub enum EsrocosError {
    /// Missing/unreadable configuration file or missing required key
    ConfigError(String),

    /// YAML parsing error
    YamlError(serde_yaml::Error),

    /// IO error
    IoError(std::io::Error),

    /// External command could not be launched or a helper command failed
    CommandError(String),

    /// ROS message lookup or ASN.1 generation error
    GenerationError(String),

    /// Generic error with message
    Generic(String),
}

impl fmt::Display for EsrocosError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EsrocosError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            EsrocosError::YamlError(err) => write!(f, "YAML error: {err}"),
            EsrocosError::IoError(err) => write!(f, "IO error: {err}"),
            EsrocosError::CommandError(msg) => write!(f, "Command error: {msg}"),
            EsrocosError::GenerationError(msg) => write!(f, "Generation error: {msg}"),
            EsrocosError::Generic(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for EsrocosError {}

impl From<std::io::Error> for EsrocosError {
    fn from(err: std::io::Error) -> Self {
        EsrocosError::IoError(err)
    }
}

impl From<serde_yaml::Error> for EsrocosError {
    fn from(err: serde_yaml::Error) -> Self {
        EsrocosError::YamlError(err)
    }
}

impl From<anyhow::Error> for EsrocosError {
    fn from(err: anyhow::Error) -> Self {
        EsrocosError::Generic(err.to_string())
    }
}

/// Result type for ESROCOS tool operations
pub type Result<T> = std::result::Result<T, EsrocosError>;
