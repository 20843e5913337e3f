//! Per-binding debounce state machine

/// Debounce state of one binding.
///
/// State machine:
///   ARMED -> FIRED (press: combination became held)
///   FIRED -> ARMED (release: combination no longer held)
///
/// A held combination in FIRED state stays FIRED, which is what limits a
/// binding to one trigger per press-and-hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArmState {
    #[default]
    Armed,
    Fired,
}

/// What a tick did to a binding's state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Not held before, held now. The binding should act.
    Pressed,
    /// Still held after firing
    Holding,
    /// Let go after firing
    Released,
    /// Not held, not fired
    Idle,
}

impl ArmState {
    /// Advance with the current held status and report what happened
    pub fn advance(&mut self, held: bool) -> Transition {
        match (*self, held) {
            (Self::Armed, true) => {
                *self = Self::Fired;
                Transition::Pressed
            }
            (Self::Fired, true) => Transition::Holding,
            (Self::Fired, false) => {
                *self = Self::Armed;
                Transition::Released
            }
            (Self::Armed, false) => Transition::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_armed() {
        assert_eq!(ArmState::default(), ArmState::Armed);
    }

    #[test]
    fn press_fires_once() {
        let mut state = ArmState::Armed;
        assert_eq!(state.advance(true), Transition::Pressed);
        assert_eq!(state, ArmState::Fired);
        assert_eq!(state.advance(true), Transition::Holding);
        assert_eq!(state.advance(true), Transition::Holding);
        assert_eq!(state, ArmState::Fired);
    }

    #[test]
    fn release_rearms() {
        let mut state = ArmState::Fired;
        assert_eq!(state.advance(false), Transition::Released);
        assert_eq!(state, ArmState::Armed);
        assert_eq!(state.advance(true), Transition::Pressed);
    }

    #[test]
    fn idle_stays_armed() {
        let mut state = ArmState::Armed;
        assert_eq!(state.advance(false), Transition::Idle);
        assert_eq!(state, ArmState::Armed);
    }
}
