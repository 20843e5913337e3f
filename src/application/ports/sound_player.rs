//! Sound player port for shortcut cues

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur when starting playback
#[derive(Error, Debug, Clone)]
pub enum SoundError {
    /// The sound file does not exist
    #[error("Sound file not found: {}", .0.display())]
    FileMissing(PathBuf),

    /// The file exists but could not be opened or decoded
    #[error("Playback failed: {0}")]
    PlaybackFailed(String),

    /// No audio output device available
    #[error("Audio device not available: {0}")]
    DeviceNotAvailable(String),
}

impl SoundError {
    /// Whether this is the missing-file case
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::FileMissing(_))
    }
}

/// Port trait for sound playback
pub trait SoundPlayer: Send + Sync {
    /// Start playing the file and return without waiting for it to finish.
    fn play(&self, path: &Path) -> Result<(), SoundError>;

    /// Whether `play` never produces sound (muted runs)
    fn is_silent(&self) -> bool {
        false
    }
}

impl<P: SoundPlayer + ?Sized> SoundPlayer for Box<P> {
    fn play(&self, path: &Path) -> Result<(), SoundError> {
        (**self).play(path)
    }

    fn is_silent(&self) -> bool {
        (**self).is_silent()
    }
}
