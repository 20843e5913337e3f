//! Sound configuration domain module

mod sound_config;
mod sound_flag;

pub use sound_config::SoundConfig;
pub use sound_flag::{SoundFlag, ALL_FLAGS};
