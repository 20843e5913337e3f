//! Domain error types

use thiserror::Error;

/// Error when an unknown sound flag is referenced
#[derive(Debug, Clone, Error)]
#[error("Unknown sound flag: \"{input}\". Valid flags are: sound_copy, sound_paste, sound_undo, sound_redo, sound_save")]
pub struct UnknownFlagError {
    pub input: String,
}

/// Error when a one-shot command word is not recognized
#[derive(Debug, Clone, Error)]
#[error("Unknown command: {input} (supported: success, error)")]
pub struct UnknownCommandError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
