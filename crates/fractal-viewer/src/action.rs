//! Key events classified into navigation actions.
//!
//! Bindings are fixed:
//!
//! | key        | action   |
//! |------------|----------|
//! | Escape     | quit     |
//! | arrow keys | pan      |
//! | W          | zoom in  |
//! | S          | zoom out |

use fractal_engine::input::{InputEvent, Key};

use crate::navigation::PanDirection;

/// A classified key event, consumed in the frame it arrives.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum InputAction {
    Pan(PanDirection),
    ZoomIn,
    ZoomOut,
    Quit,
}

impl InputAction {
    pub const PAN_UP: Self = InputAction::Pan(PanDirection::Up);
    pub const PAN_DOWN: Self = InputAction::Pan(PanDirection::Down);
    pub const PAN_LEFT: Self = InputAction::Pan(PanDirection::Left);
    pub const PAN_RIGHT: Self = InputAction::Pan(PanDirection::Right);
}

/// Maps a key to its action. Unbound keys yield `None`.
pub fn classify_key(key: Key) -> Option<InputAction> {
    match key {
        Key::Escape => Some(InputAction::Quit),
        Key::ArrowUp => Some(InputAction::PAN_UP),
        Key::ArrowDown => Some(InputAction::PAN_DOWN),
        Key::ArrowLeft => Some(InputAction::PAN_LEFT),
        Key::ArrowRight => Some(InputAction::PAN_RIGHT),
        Key::W => Some(InputAction::ZoomIn),
        Key::S => Some(InputAction::ZoomOut),
        Key::Unknown(_) => None,
    }
}

/// Classifies press and auto-repeat events; releases and non-key events yield `None`.
pub fn classify_event(event: &InputEvent) -> Option<InputAction> {
    event.pressed_key().and_then(classify_key)
}
