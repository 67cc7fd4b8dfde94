//! Host-agnostic raw input events.
//!
//! The host's input system owns event production; this crate only needs the
//! minimal surface the registry dispatches on: keyboard-or-not, press phase,
//! the chord held, and a consumption flag. A consumed event must be
//! suppressed from further host-level processing.

use crate::types::{Chord, KeyCode, Modifiers};

/// Press phase of a key or pointer button
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    Down,
    Up,
}

/// A raw keyboard event as delivered by the host, once per physical
/// key press or release.
#[derive(Debug, Clone)]
pub struct KeyEvent {
    pub phase: Phase,
    pub key: KeyCode,
    pub mods: Modifiers,
    consumed: bool,
}

impl KeyEvent {
    pub fn new(phase: Phase, key: KeyCode, mods: Modifiers) -> Self {
        Self {
            phase,
            key,
            mods,
            consumed: false,
        }
    }

    /// Key-release event (the only phase that participates in matching)
    pub fn up(key: KeyCode, mods: Modifiers) -> Self {
        Self::new(Phase::Up, key, mods)
    }

    /// Key-press event
    pub fn down(key: KeyCode, mods: Modifiers) -> Self {
        Self::new(Phase::Down, key, mods)
    }

    /// The chord this event carries
    pub fn chord(&self) -> Chord {
        Chord::new(self.key, self.mods)
    }

    /// Mark the event as handled; the host must not process it further
    pub fn consume(&mut self) {
        self.consumed = true;
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

/// Pointer button identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// A raw pointer event. Never matches a binding and carries no chord.
#[derive(Debug, Clone)]
pub struct PointerEvent {
    pub button: MouseButton,
    pub phase: Phase,
    consumed: bool,
}

impl PointerEvent {
    pub fn new(button: MouseButton, phase: Phase) -> Self {
        Self {
            button,
            phase,
            consumed: false,
        }
    }

    pub fn consume(&mut self) {
        self.consumed = true;
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed
    }
}

/// Any raw input event the host forwards to the registry
#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(KeyEvent),
    Pointer(PointerEvent),
}

impl InputEvent {
    /// Keyboard key-release event
    pub fn key_up(key: KeyCode, mods: Modifiers) -> Self {
        InputEvent::Key(KeyEvent::up(key, mods))
    }

    /// Keyboard key-press event
    pub fn key_down(key: KeyCode, mods: Modifiers) -> Self {
        InputEvent::Key(KeyEvent::down(key, mods))
    }

    /// Pointer event
    pub fn pointer(button: MouseButton, phase: Phase) -> Self {
        InputEvent::Pointer(PointerEvent::new(button, phase))
    }

    pub fn is_keyboard(&self) -> bool {
        matches!(self, InputEvent::Key(_))
    }

    pub fn consume(&mut self) {
        match self {
            InputEvent::Key(e) => e.consume(),
            InputEvent::Pointer(e) => e.consume(),
        }
    }

    pub fn is_consumed(&self) -> bool {
        match self {
            InputEvent::Key(e) => e.is_consumed(),
            InputEvent::Pointer(e) => e.is_consumed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_chord() {
        let event = KeyEvent::up(KeyCode::char('p'), Modifiers::CTRL);
        assert_eq!(event.chord(), Chord::new(KeyCode::Char('p'), Modifiers::CTRL));
    }

    #[test]
    fn test_consume_marks_event() {
        let mut event = InputEvent::key_up(KeyCode::Enter, Modifiers::NONE);
        assert!(!event.is_consumed());
        event.consume();
        assert!(event.is_consumed());
    }

    #[test]
    fn test_pointer_is_not_keyboard() {
        let event = InputEvent::pointer(MouseButton::Left, Phase::Up);
        assert!(!event.is_keyboard());
    }
}
