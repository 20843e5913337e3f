//! Shortcut domain module

mod arm_state;
mod binding;
mod oneshot;

pub use arm_state::{ArmState, Transition};
pub use binding::{ShortcutBinding, DEFAULT_SOUNDS_DIR};
pub use oneshot::{OneShotSound, ALL_ONESHOT_SOUNDS};
