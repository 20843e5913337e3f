//! Sound flag value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::UnknownFlagError;

/// All known sound flags, in display order
pub const ALL_FLAGS: &[SoundFlag] = &[
    SoundFlag::Copy,
    SoundFlag::Paste,
    SoundFlag::Undo,
    SoundFlag::Redo,
    SoundFlag::Save,
];

/// Configuration flag that gates one shortcut's sound
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SoundFlag {
    Copy,
    Paste,
    Undo,
    Redo,
    Save,
}

impl SoundFlag {
    /// Key used in the settings file
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Copy => "sound_copy",
            Self::Paste => "sound_paste",
            Self::Undo => "sound_undo",
            Self::Redo => "sound_redo",
            Self::Save => "sound_save",
        }
    }

    /// Human-readable label
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Copy => "Sound copy",
            Self::Paste => "Sound paste",
            Self::Undo => "Sound undo",
            Self::Redo => "Sound redo",
            Self::Save => "Sound save",
        }
    }
}

impl FromStr for SoundFlag {
    type Err = UnknownFlagError;

    /// Accepts the settings key (`sound_copy`) or the bare action (`copy`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        let action = lower.strip_prefix("sound_").unwrap_or(&lower);
        match action {
            "copy" => Ok(Self::Copy),
            "paste" => Ok(Self::Paste),
            "undo" => Ok(Self::Undo),
            "redo" => Ok(Self::Redo),
            "save" => Ok(Self::Save),
            _ => Err(UnknownFlagError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SoundFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
