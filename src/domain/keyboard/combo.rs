//! Key combination value object

use std::collections::BTreeSet;
use std::fmt;

use super::key::KeyCode;

/// A set of keys that must all be held together, e.g. `ctrl+c`.
/// Never empty; duplicate keys collapse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyCombo {
    keys: BTreeSet<KeyCode>,
}

impl KeyCombo {
    /// `ctrl` plus a single key
    pub fn ctrl(key: KeyCode) -> Self {
        Self {
            keys: [KeyCode::Ctrl, key].into_iter().collect(),
        }
    }

    /// Keys in canonical order (modifiers first)
    pub fn keys(&self) -> impl Iterator<Item = &KeyCode> {
        self.keys.iter()
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<String> = self.keys.iter().map(KeyCode::name).collect();
        write!(f, "{}", names.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ctrl_combo_holds_two_keys() {
        let combo = KeyCombo::ctrl(KeyCode::C);
        let keys: Vec<KeyCode> = combo.keys().copied().collect();
        assert_eq!(keys, vec![KeyCode::Ctrl, KeyCode::C]);
    }

    #[test]
    fn ctrl_twice_collapses() {
        assert_eq!(KeyCombo::ctrl(KeyCode::Ctrl).keys().count(), 1);
    }

    #[test]
    fn display_is_canonical() {
        assert_eq!(KeyCombo::ctrl(KeyCode::Z).to_string(), "ctrl+z");
        assert_eq!(KeyCombo::ctrl(KeyCode::F5).to_string(), "ctrl+f5");
    }

    #[test]
    fn distinct_keys_are_distinct_combos() {
        assert_ne!(KeyCombo::ctrl(KeyCode::Z), KeyCombo::ctrl(KeyCode::Y));
    }
}
