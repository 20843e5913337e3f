//! No-op sound player adapter
//!
//! Used when sounds are muted.

use std::path::Path;

use crate::application::ports::{SoundError, SoundPlayer};

/// No-op sound player that does nothing
pub struct NoOpSoundPlayer;

impl NoOpSoundPlayer {
    /// Create a new no-op sound player
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpSoundPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundPlayer for NoOpSoundPlayer {
    fn play(&self, _path: &Path) -> Result<(), SoundError> {
        Ok(())
    }

    fn is_silent(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_returns_ok() {
        let player = NoOpSoundPlayer::new();
        assert!(player.play(Path::new("sounds/copy.mp3")).is_ok());
        assert!(player.play(Path::new("/nonexistent.mp3")).is_ok());
        assert!(player.is_silent());
    }
}
