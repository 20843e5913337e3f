//! Translation from rdev keys to domain key codes

use rdev::Key;

use crate::domain::keyboard::KeyCode;

/// Which physical copy of a key was used. Modifiers exist twice on most
/// keyboards; everything else is `Only`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Only,
    Left,
    Right,
}

/// Map an rdev key to a domain key code and the physical side it came from.
/// Keys the domain has no code for map to `None`.
pub fn map_key(key: Key) -> Option<(KeyCode, Side)> {
    let mapped = match key {
        Key::ControlLeft => (KeyCode::Ctrl, Side::Left),
        Key::ControlRight => (KeyCode::Ctrl, Side::Right),
        Key::Alt => (KeyCode::Alt, Side::Left),
        Key::AltGr => (KeyCode::Alt, Side::Right),
        Key::ShiftLeft => (KeyCode::Shift, Side::Left),
        Key::ShiftRight => (KeyCode::Shift, Side::Right),
        Key::MetaLeft => (KeyCode::Meta, Side::Left),
        Key::MetaRight => (KeyCode::Meta, Side::Right),
        other => (map_plain_key(other)?, Side::Only),
    };
    Some(mapped)
}

fn map_plain_key(key: Key) -> Option<KeyCode> {
    let code = match key {
        Key::KeyA => KeyCode::A,
        Key::KeyB => KeyCode::B,
        Key::KeyC => KeyCode::C,
        Key::KeyD => KeyCode::D,
        Key::KeyE => KeyCode::E,
        Key::KeyF => KeyCode::F,
        Key::KeyG => KeyCode::G,
        Key::KeyH => KeyCode::H,
        Key::KeyI => KeyCode::I,
        Key::KeyJ => KeyCode::J,
        Key::KeyK => KeyCode::K,
        Key::KeyL => KeyCode::L,
        Key::KeyM => KeyCode::M,
        Key::KeyN => KeyCode::N,
        Key::KeyO => KeyCode::O,
        Key::KeyP => KeyCode::P,
        Key::KeyQ => KeyCode::Q,
        Key::KeyR => KeyCode::R,
        Key::KeyS => KeyCode::S,
        Key::KeyT => KeyCode::T,
        Key::KeyU => KeyCode::U,
        Key::KeyV => KeyCode::V,
        Key::KeyW => KeyCode::W,
        Key::KeyX => KeyCode::X,
        Key::KeyY => KeyCode::Y,
        Key::KeyZ => KeyCode::Z,
        Key::Num0 => KeyCode::Num0,
        Key::Num1 => KeyCode::Num1,
        Key::Num2 => KeyCode::Num2,
        Key::Num3 => KeyCode::Num3,
        Key::Num4 => KeyCode::Num4,
        Key::Num5 => KeyCode::Num5,
        Key::Num6 => KeyCode::Num6,
        Key::Num7 => KeyCode::Num7,
        Key::Num8 => KeyCode::Num8,
        Key::Num9 => KeyCode::Num9,
        Key::F1 => KeyCode::F1,
        Key::F2 => KeyCode::F2,
        Key::F3 => KeyCode::F3,
        Key::F4 => KeyCode::F4,
        Key::F5 => KeyCode::F5,
        Key::F6 => KeyCode::F6,
        Key::F7 => KeyCode::F7,
        Key::F8 => KeyCode::F8,
        Key::F9 => KeyCode::F9,
        Key::F10 => KeyCode::F10,
        Key::F11 => KeyCode::F11,
        Key::F12 => KeyCode::F12,
        Key::Escape => KeyCode::Escape,
        Key::Space => KeyCode::Space,
        Key::Return | Key::KpReturn => KeyCode::Enter,
        Key::Tab => KeyCode::Tab,
        Key::Backspace => KeyCode::Backspace,
        Key::Delete | Key::KpDelete => KeyCode::Delete,
        _ => return None,
    };
    Some(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_keep_their_side() {
        assert_eq!(map_key(Key::ControlLeft), Some((KeyCode::Ctrl, Side::Left)));
        assert_eq!(map_key(Key::ControlRight), Some((KeyCode::Ctrl, Side::Right)));
        assert_eq!(map_key(Key::AltGr), Some((KeyCode::Alt, Side::Right)));
        assert_eq!(map_key(Key::MetaLeft), Some((KeyCode::Meta, Side::Left)));
    }

    #[test]
    fn letters_and_digits() {
        assert_eq!(map_key(Key::KeyC), Some((KeyCode::C, Side::Only)));
        assert_eq!(map_key(Key::KeyZ), Some((KeyCode::Z, Side::Only)));
        assert_eq!(map_key(Key::Num0), Some((KeyCode::Num0, Side::Only)));
    }

    #[test]
    fn keypad_enter_is_enter() {
        assert_eq!(map_key(Key::KpReturn), Some((KeyCode::Enter, Side::Only)));
    }

    #[test]
    fn unmapped_keys() {
        assert_eq!(map_key(Key::CapsLock), None);
        assert_eq!(map_key(Key::Unknown(999)), None);
    }
}
