//! Sound configuration value object

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::sound_flag::{SoundFlag, ALL_FLAGS};

/// Flag name to enabled mapping, stored as a flat JSON object.
///
/// Keys the file does not mention read as disabled. Keys that are not known
/// flags are kept so that rewriting the file does not drop them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundConfig {
    flags: BTreeMap<String, bool>,
}

impl SoundConfig {
    /// Every known flag enabled
    pub fn defaults() -> Self {
        Self {
            flags: ALL_FLAGS
                .iter()
                .map(|f| (f.as_str().to_string(), true))
                .collect(),
        }
    }

    /// No flags set; everything reads as disabled
    pub fn empty() -> Self {
        Self::default()
    }

    /// Whether the flag's sound should play. Absent means disabled.
    pub fn is_enabled(&self, flag: SoundFlag) -> bool {
        self.get(flag).unwrap_or(false)
    }

    /// Stored value, if any
    pub fn get(&self, flag: SoundFlag) -> Option<bool> {
        self.flags.get(flag.as_str()).copied()
    }

    /// Store a value for the flag
    pub fn set(&mut self, flag: SoundFlag, enabled: bool) {
        self.flags.insert(flag.as_str().to_string(), enabled);
    }

    /// Flip the flag and return its new value. An absent flag becomes enabled.
    pub fn toggle(&mut self, flag: SoundFlag) -> bool {
        let enabled = !self.is_enabled(flag);
        self.set(flag, enabled);
        enabled
    }

    /// Initialize any known flag missing from this config from the defaults.
    /// Values already present are left alone.
    pub fn fill_defaults(mut self) -> Self {
        for (key, value) in Self::defaults().flags {
            self.flags.entry(key).or_insert(value);
        }
        self
    }

    /// Keys that are not known flags
    pub fn unknown_keys(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags
            .iter()
            .filter(|(k, _)| !ALL_FLAGS.iter().any(|f| f.as_str() == k.as_str()))
            .map(|(k, v)| (k.as_str(), *v))
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Whether no keys are stored
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
