//! Keyboard domain module

mod combo;
mod key;
mod snapshot;

pub use combo::KeyCombo;
pub use key::KeyCode;
pub use snapshot::KeySnapshot;
