//! Keyboard state port for sampling held keys

use thiserror::Error;

use crate::domain::keyboard::KeySnapshot;

/// Errors that can occur while sampling keyboard state
#[derive(Error, Debug, Clone)]
pub enum KeyboardError {
    /// The global key listener could not be started
    #[error("Failed to start key listener: {0}")]
    ListenerStart(String),

    /// The global key listener stopped and no longer reports key state
    #[error("Key listener stopped: {0}")]
    ListenerStopped(String),
}

/// Port trait for reading global keyboard state
pub trait KeyboardState: Send + Sync {
    /// Take a snapshot of the keys currently held.
    ///
    /// An error means key state can no longer be trusted; callers treat it
    /// as fatal.
    fn snapshot(&self) -> Result<KeySnapshot, KeyboardError>;
}
