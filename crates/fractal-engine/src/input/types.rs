/// Keyboard key identifier.
///
/// Only keys the viewer reacts to get their own variant. Everything else maps to
/// `Key::Unknown` with the platform key code so logs stay useful.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    W,
    S,

    /// Platform-dependent key not represented here.
    Unknown(u32),
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

/// Platform-agnostic input events emitted by the runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key {
        key: Key,
        state: KeyState,
        /// True when the event is an auto-repeat of a held key.
        repeat: bool,
    },
}

impl InputEvent {
    /// Convenience constructor for a fresh key press.
    pub fn key_pressed(key: Key) -> Self {
        InputEvent::Key { key, state: KeyState::Pressed, repeat: false }
    }

    /// Returns the key for press and repeat events, `None` for everything else.
    pub fn pressed_key(&self) -> Option<Key> {
        match self {
            InputEvent::Key { key, state: KeyState::Pressed, .. } => Some(*key),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_key_accepts_press_and_repeat() {
        assert_eq!(InputEvent::key_pressed(Key::W).pressed_key(), Some(Key::W));
        let repeat = InputEvent::Key { key: Key::S, state: KeyState::Pressed, repeat: true };
        assert_eq!(repeat.pressed_key(), Some(Key::S));
    }

    #[test]
    fn pressed_key_ignores_release() {
        let release = InputEvent::Key { key: Key::W, state: KeyState::Released, repeat: false };
        assert_eq!(release.pressed_key(), None);
    }
}
