//! EchoCode - sound cues for editing shortcuts
//!
//! This crate watches global keyboard state and plays a short sound when
//! copy, paste, undo, redo or save is pressed, with each sound switchable
//! through a JSON settings file that is reloaded while running.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Keys, combinations, sound flags, debounce state and errors
//! - **Application**: The shortcut monitor and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (rdev, rodio, notify, settings file)
//! - **CLI**: Command-line interface, argument parsing, and signal handling

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
