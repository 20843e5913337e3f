//! Sounds played once from the command line

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::domain::error::UnknownCommandError;

/// All one-shot sounds, in help order
pub const ALL_ONESHOT_SOUNDS: &[OneShotSound] = &[OneShotSound::Success, OneShotSound::Error];

/// Run-result sound triggered by a command word, e.g. `echocode error`
/// after a failed build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OneShotSound {
    Success,
    Error,
}

impl OneShotSound {
    /// Command word selecting this sound
    pub const fn command(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Sound file name inside the sounds directory
    pub const fn file_name(&self) -> &'static str {
        match self {
            Self::Success => "success.mp3",
            Self::Error => "error.mp3",
        }
    }

    /// Full path of the sound under `sounds_dir`
    pub fn path(&self, sounds_dir: &Path) -> PathBuf {
        sounds_dir.join(self.file_name())
    }
}

impl FromStr for OneShotSound {
    type Err = UnknownCommandError;

    /// Command words are matched exactly
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_ONESHOT_SOUNDS
            .iter()
            .find(|sound| sound.command() == s)
            .copied()
            .ok_or_else(|| UnknownCommandError {
                input: s.to_string(),
            })
    }
}

impl fmt::Display for OneShotSound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command())
    }
}
