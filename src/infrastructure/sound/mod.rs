//! Sound player infrastructure adapters
//!
//! Plays shortcut cues from sound files.

mod noop;
mod rodio;

pub use noop::NoOpSoundPlayer;
pub use self::rodio::RodioSoundPlayer;

use crate::application::ports::SoundPlayer;

/// Create a sound player based on whether sounds are muted
pub fn create_sound_player(muted: bool) -> Box<dyn SoundPlayer> {
    if muted {
        Box::new(NoOpSoundPlayer::new())
    } else {
        Box::new(RodioSoundPlayer::new())
    }
}
