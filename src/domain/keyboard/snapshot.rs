//! Point-in-time keyboard state

use std::collections::HashSet;

use super::combo::KeyCombo;
use super::key::KeyCode;

/// The set of keys held at one instant.
///
/// Taken once per poll tick and handed to the monitor; the monitor never
/// reads live keyboard state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySnapshot {
    pressed: HashSet<KeyCode>,
}

impl KeySnapshot {
    /// Snapshot with nothing held
    pub fn empty() -> Self {
        Self::default()
    }

    /// Snapshot of exactly these keys
    pub fn of(keys: impl IntoIterator<Item = KeyCode>) -> Self {
        Self {
            pressed: keys.into_iter().collect(),
        }
    }

    /// Snapshot holding every key of a combo
    pub fn holding(combo: &KeyCombo) -> Self {
        Self::of(combo.keys().copied())
    }

    /// Whether a single key is down
    pub fn is_pressed(&self, key: KeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Whether every key of the combo is down. Extra keys are allowed.
    pub fn is_held(&self, combo: &KeyCombo) -> bool {
        combo.keys().all(|k| self.pressed.contains(k))
    }

    /// Whether nothing is held
    pub fn is_empty(&self) -> bool {
        self.pressed.is_empty()
    }
}

impl FromIterator<KeyCode> for KeySnapshot {
    fn from_iter<I: IntoIterator<Item = KeyCode>>(iter: I) -> Self {
        Self::of(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_holds_nothing() {
        let snapshot = KeySnapshot::empty();
        assert!(snapshot.is_empty());
        assert!(!snapshot.is_held(&KeyCombo::ctrl(KeyCode::C)));
    }

    #[test]
    fn combo_requires_all_keys() {
        let combo = KeyCombo::ctrl(KeyCode::C);
        assert!(!KeySnapshot::of([KeyCode::Ctrl]).is_held(&combo));
        assert!(!KeySnapshot::of([KeyCode::C]).is_held(&combo));
        assert!(KeySnapshot::of([KeyCode::Ctrl, KeyCode::C]).is_held(&combo));
    }

    #[test]
    fn extra_keys_still_hold() {
        let combo = KeyCombo::ctrl(KeyCode::Z);
        let snapshot = KeySnapshot::of([KeyCode::Ctrl, KeyCode::Shift, KeyCode::Z]);
        assert!(snapshot.is_held(&combo));
    }

    #[test]
    fn holding_builds_matching_snapshot() {
        let combo = KeyCombo::ctrl(KeyCode::Delete);
        let snapshot = KeySnapshot::holding(&combo);
        assert!(snapshot.is_held(&combo));
        assert!(snapshot.is_pressed(KeyCode::Ctrl));
        assert!(!snapshot.is_pressed(KeyCode::Alt));
    }
}
