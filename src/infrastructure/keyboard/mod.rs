//! Keyboard state infrastructure module
//!
//! Samples global key state through an rdev listener thread.

mod key_map;
mod rdev_listener;

pub use key_map::{map_key, Side};
pub use rdev_listener::{KeyTracker, RdevKeyboard};
