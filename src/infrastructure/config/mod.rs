//! Config store adapters

mod xdg;

pub use xdg::{XdgConfigStore, SETTINGS_FILE_NAME};
