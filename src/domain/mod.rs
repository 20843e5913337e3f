//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod keyboard;
pub mod shortcut;

// Re-export common types
pub use config::{SoundConfig, SoundFlag};
pub use error::*;
pub use keyboard::{KeyCode, KeyCombo, KeySnapshot};
pub use shortcut::{ArmState, OneShotSound, ShortcutBinding};
