//! Core chord types: Modifiers, KeyCode, Chord

use std::fmt;

use crate::error::{Error, Result};
use crate::event::InputEvent;

/// Modifier keys as a bitfield for efficient storage and comparison
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers(u8);

impl Modifiers {
    pub const NONE: Modifiers = Modifiers(0);
    pub const ALT: Modifiers = Modifiers(0b0001);
    pub const CTRL: Modifiers = Modifiers(0b0010);
    pub const CMD: Modifiers = Modifiers(0b0100);
    pub const SHIFT: Modifiers = Modifiers(0b1000);

    /// Create modifiers from individual flags
    pub const fn new(alt: bool, ctrl: bool, cmd: bool, shift: bool) -> Self {
        let mut bits = 0u8;
        if alt {
            bits |= 0b0001;
        }
        if ctrl {
            bits |= 0b0010;
        }
        if cmd {
            bits |= 0b0100;
        }
        if shift {
            bits |= 0b1000;
        }
        Modifiers(bits)
    }

    /// Check if alt/option is held
    #[inline]
    pub const fn alt(self) -> bool {
        self.0 & 0b0001 != 0
    }

    /// Check if ctrl is held
    #[inline]
    pub const fn ctrl(self) -> bool {
        self.0 & 0b0010 != 0
    }

    /// Check if cmd is held
    #[inline]
    pub const fn cmd(self) -> bool {
        self.0 & 0b0100 != 0
    }

    /// Check if shift is held
    #[inline]
    pub const fn shift(self) -> bool {
        self.0 & 0b1000 != 0
    }

    /// Check if no modifiers are held
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two modifier sets
    #[inline]
    pub const fn union(self, other: Modifiers) -> Modifiers {
        Modifiers(self.0 | other.0)
    }

    /// Check if this contains all modifiers in other
    #[inline]
    pub const fn contains(self, other: Modifiers) -> bool {
        (self.0 & other.0) == other.0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Modifiers;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs)
    }
}

impl fmt::Display for Modifiers {
    /// Full modifier names joined with `+`, always Alt, Ctrl, Cmd, Shift order
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if self.alt() {
            parts.push("Alt");
        }
        if self.ctrl() {
            parts.push("Ctrl");
        }
        if self.cmd() {
            parts.push("Cmd");
        }
        if self.shift() {
            parts.push("Shift");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code representing a physical or logical key
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key (normalized to lowercase)
    Char(char),

    // Named keys
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,
    Space,

    // Arrow keys
    Up,
    Down,
    Left,
    Right,

    // Navigation
    Home,
    End,
    PageUp,
    PageDown,
    Insert,

    // Function keys
    F(u8), // F1-F24
}

impl KeyCode {
    /// Create a character key code (normalized to lowercase)
    pub fn char(c: char) -> Self {
        KeyCode::Char(c.to_ascii_lowercase())
    }

    /// Canonical name used by the chord token codec and display labels.
    ///
    /// Contains no whitespace; character keys canonicalize to uppercase.
    pub fn name(&self) -> String {
        match self {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Escape => "Escape".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::Backspace => "Backspace".to_string(),
            KeyCode::Delete => "Delete".to_string(),
            KeyCode::Space => "Space".to_string(),
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
            KeyCode::Left => "Left".to_string(),
            KeyCode::Right => "Right".to_string(),
            KeyCode::Home => "Home".to_string(),
            KeyCode::End => "End".to_string(),
            KeyCode::PageUp => "PageUp".to_string(),
            KeyCode::PageDown => "PageDown".to_string(),
            KeyCode::Insert => "Insert".to_string(),
            KeyCode::F(n) => format!("F{}", n),
        }
    }

    /// Parse a canonical key name back into a key code.
    ///
    /// Inverse of [`KeyCode::name`]; single characters are accepted in either
    /// case and normalized to lowercase.
    pub fn from_name(name: &str) -> Option<KeyCode> {
        let mut chars = name.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Some(KeyCode::Char(c.to_ascii_lowercase()));
        }

        match name {
            "Enter" => Some(KeyCode::Enter),
            "Escape" => Some(KeyCode::Escape),
            "Tab" => Some(KeyCode::Tab),
            "Backspace" => Some(KeyCode::Backspace),
            "Delete" => Some(KeyCode::Delete),
            "Space" => Some(KeyCode::Space),
            "Up" => Some(KeyCode::Up),
            "Down" => Some(KeyCode::Down),
            "Left" => Some(KeyCode::Left),
            "Right" => Some(KeyCode::Right),
            "Home" => Some(KeyCode::Home),
            "End" => Some(KeyCode::End),
            "PageUp" => Some(KeyCode::PageUp),
            "PageDown" => Some(KeyCode::PageDown),
            "Insert" => Some(KeyCode::Insert),
            _ => {
                let n: u8 = name.strip_prefix('F')?.parse().ok()?;
                if (1..=24).contains(&n) {
                    Some(KeyCode::F(n))
                } else {
                    None
                }
            }
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single chord: one key with a modifier set.
///
/// Equality is structural; two chords match iff both the key and the full
/// modifier set are identical.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Chord {
    pub key: KeyCode,
    pub mods: Modifiers,
}

impl Chord {
    /// Create a new chord
    pub const fn new(key: KeyCode, mods: Modifiers) -> Self {
        Self { key, mods }
    }

    /// Create a chord with no modifiers
    pub const fn key(key: KeyCode) -> Self {
        Self {
            key,
            mods: Modifiers::NONE,
        }
    }

    /// Derive the chord held by a raw input event.
    ///
    /// Only keyboard events carry a chord; pointer events fail with
    /// [`Error::InvalidChord`].
    pub fn from_event(event: &InputEvent) -> Result<Chord> {
        match event {
            InputEvent::Key(key_event) => Ok(key_event.chord()),
            InputEvent::Pointer(_) => Err(Error::InvalidChord { found: "pointer" }),
        }
    }
}

impl fmt::Display for Chord {
    /// Human-readable label, e.g. `Ctrl+Shift+A`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.mods, self.key)
        }
    }
}
