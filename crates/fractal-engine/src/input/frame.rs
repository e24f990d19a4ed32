use super::types::InputEvent;

/// Input events buffered since the last frame, in arrival order.
///
/// The runtime pushes translated events as they arrive and clears the buffer
/// after each frame callback. Consumers that want pull semantics call `drain`.
#[derive(Debug, Default)]
pub struct InputFrame {
    pub events: Vec<InputEvent>,
}

impl InputFrame {
    pub fn clear(&mut self) {
        self.events.clear();
    }

    pub fn push_event(&mut self, ev: InputEvent) {
        self.events.push(ev);
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Takes every buffered event, leaving the frame empty.
    pub fn drain(&mut self) -> std::vec::Drain<'_, InputEvent> {
        self.events.drain(..)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::Key;

    #[test]
    fn drain_preserves_order_and_empties() {
        let mut frame = InputFrame::default();
        frame.push_event(InputEvent::key_pressed(Key::ArrowUp));
        frame.push_event(InputEvent::key_pressed(Key::Escape));

        let keys: Vec<_> = frame.drain().filter_map(|e| e.pressed_key()).collect();
        assert_eq!(keys, vec![Key::ArrowUp, Key::Escape]);
        assert!(frame.is_empty());
    }
}
