//! Shortcut binding entity

use std::path::{Path, PathBuf};

use crate::domain::config::SoundFlag;
use crate::domain::keyboard::{KeyCode, KeyCombo};

/// Default directory sound files are resolved against
pub const DEFAULT_SOUNDS_DIR: &str = "sounds";

/// Association of a key combination, a sound file and the flag that gates it.
/// Built at startup; never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortcutBinding {
    pub combo: KeyCombo,
    pub sound_file: PathBuf,
    pub flag: SoundFlag,
}

impl ShortcutBinding {
    /// Create a binding
    pub fn new(combo: KeyCombo, sound_file: impl Into<PathBuf>, flag: SoundFlag) -> Self {
        Self {
            combo,
            sound_file: sound_file.into(),
            flag,
        }
    }

    /// The built-in copy/paste/undo/redo/save bindings, with sound files
    /// resolved under `sounds_dir`
    pub fn defaults(sounds_dir: &Path) -> Vec<Self> {
        [
            (KeyCode::C, "copy.mp3", SoundFlag::Copy),
            (KeyCode::V, "paste.mp3", SoundFlag::Paste),
            (KeyCode::Z, "undo.mp3", SoundFlag::Undo),
            (KeyCode::Y, "redo.mp3", SoundFlag::Redo),
            (KeyCode::S, "save.mp3", SoundFlag::Save),
        ]
        .into_iter()
        .map(|(key, file, flag)| Self::new(KeyCombo::ctrl(key), sounds_dir.join(file), flag))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_all_flags() {
        let bindings = ShortcutBinding::defaults(Path::new(DEFAULT_SOUNDS_DIR));
        assert_eq!(bindings.len(), 5);

        let flags: Vec<SoundFlag> = bindings.iter().map(|b| b.flag).collect();
        assert_eq!(flags, crate::domain::config::ALL_FLAGS.to_vec());
    }

    #[test]
    fn defaults_map_combos_to_files() {
        let bindings = ShortcutBinding::defaults(Path::new("/opt/sounds"));
        let copy = &bindings[0];
        assert_eq!(copy.combo.to_string(), "ctrl+c");
        assert_eq!(copy.sound_file, PathBuf::from("/opt/sounds/copy.mp3"));

        let save = &bindings[4];
        assert_eq!(save.combo.to_string(), "ctrl+s");
        assert_eq!(save.sound_file, PathBuf::from("/opt/sounds/save.mp3"));
    }

    #[test]
    fn combos_are_distinct() {
        let bindings = ShortcutBinding::defaults(Path::new(DEFAULT_SOUNDS_DIR));
        for (i, a) in bindings.iter().enumerate() {
            for b in &bindings[i + 1..] {
                assert_ne!(a.combo, b.combo);
            }
        }
    }
}
