//! Shortcut monitor use case
//!
//! Turns level-triggered key state into at most one sound per
//! press-and-hold of each binding.

use std::path::PathBuf;

use crate::domain::config::{SoundConfig, SoundFlag};
use crate::domain::keyboard::{KeyCombo, KeySnapshot};
use crate::domain::shortcut::{ArmState, ShortcutBinding, Transition};

use super::ports::{SoundError, SoundPlayer};

/// What happened to a binding during a poll tick.
/// Only emitted on the press edge; holding and releasing are silent.
#[derive(Debug, Clone)]
pub enum MonitorEvent {
    /// Playback started
    Played { combo: KeyCombo, sound: PathBuf },
    /// The player is silent; the sound would have played
    Muted { combo: KeyCombo, sound: PathBuf },
    /// The binding's flag is disabled
    Suppressed { combo: KeyCombo, flag: SoundFlag },
    /// The sound file does not exist
    SoundMissing { combo: KeyCombo, sound: PathBuf },
    /// The player refused to start for another reason
    PlaybackFailed { combo: KeyCombo, error: SoundError },
}

impl MonitorEvent {
    /// The combination this event is about
    pub fn combo(&self) -> &KeyCombo {
        match self {
            Self::Played { combo, .. }
            | Self::Muted { combo, .. }
            | Self::Suppressed { combo, .. }
            | Self::SoundMissing { combo, .. }
            | Self::PlaybackFailed { combo, .. } => combo,
        }
    }

    /// Whether playback actually started
    pub fn is_played(&self) -> bool {
        matches!(self, Self::Played { .. })
    }
}

/// Shortcut monitor.
///
/// Owns the bindings, their debounce states and the current configuration.
/// It is the only writer of all three.
pub struct ShortcutMonitor<P: SoundPlayer> {
    bindings: Vec<ShortcutBinding>,
    states: Vec<ArmState>,
    config: SoundConfig,
    player: P,
}

impl<P: SoundPlayer> ShortcutMonitor<P> {
    /// Create a monitor with every binding armed
    pub fn new(bindings: Vec<ShortcutBinding>, config: SoundConfig, player: P) -> Self {
        let states = vec![ArmState::Armed; bindings.len()];
        Self {
            bindings,
            states,
            config,
            player,
        }
    }

    /// Run one tick against a keyboard snapshot.
    ///
    /// For each binding: on the not-held to held edge, play its sound if the
    /// flag is enabled; while held, do nothing; when released, re-arm.
    /// Player errors are returned as events and never abort the tick.
    pub fn poll(&mut self, snapshot: &KeySnapshot) -> Vec<MonitorEvent> {
        let mut events = Vec::new();

        for (binding, state) in self.bindings.iter().zip(self.states.iter_mut()) {
            let held = snapshot.is_held(&binding.combo);
            if state.advance(held) != Transition::Pressed {
                continue;
            }

            if !self.config.is_enabled(binding.flag) {
                events.push(MonitorEvent::Suppressed {
                    combo: binding.combo.clone(),
                    flag: binding.flag,
                });
                continue;
            }

            if self.player.is_silent() {
                events.push(MonitorEvent::Muted {
                    combo: binding.combo.clone(),
                    sound: binding.sound_file.clone(),
                });
                continue;
            }

            let event = match self.player.play(&binding.sound_file) {
                Ok(()) => MonitorEvent::Played {
                    combo: binding.combo.clone(),
                    sound: binding.sound_file.clone(),
                },
                Err(SoundError::FileMissing(sound)) => MonitorEvent::SoundMissing {
                    combo: binding.combo.clone(),
                    sound,
                },
                Err(error) => MonitorEvent::PlaybackFailed {
                    combo: binding.combo.clone(),
                    error,
                },
            };
            events.push(event);
        }

        events
    }

    /// Replace the whole configuration. Debounce state is kept, so a
    /// combination held across a reload does not fire again until released.
    pub fn reload(&mut self, config: SoundConfig) {
        self.config = config;
    }

    /// Current configuration
    pub fn config(&self) -> &SoundConfig {
        &self.config
    }

    /// Configured bindings
    pub fn bindings(&self) -> &[ShortcutBinding] {
        &self.bindings
    }

    /// Debounce state of the binding for `combo`
    pub fn state_of(&self, combo: &KeyCombo) -> Option<ArmState> {
        self.bindings
            .iter()
            .position(|b| &b.combo == combo)
            .map(|i| self.states[i])
    }

    /// The sound player
    pub fn player(&self) -> &P {
        &self.player
    }
}
