//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod keyboard;
pub mod sound_player;

// Re-export common types
pub use config::ConfigStore;
pub use keyboard::{KeyboardError, KeyboardState};
pub use sound_player::{SoundError, SoundPlayer};
