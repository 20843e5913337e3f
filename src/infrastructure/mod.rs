//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with rdev, rodio, notify and the settings file.

pub mod config;
pub mod keyboard;
pub mod sound;
pub mod watcher;

// Re-export adapters
pub use config::XdgConfigStore;
pub use keyboard::RdevKeyboard;
pub use sound::{create_sound_player, NoOpSoundPlayer, RodioSoundPlayer};
pub use watcher::ConfigWatcher;
