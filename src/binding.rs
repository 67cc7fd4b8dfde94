//! Per-action chord binding: listeners, default chord, and config round trip

use std::fmt;
use std::rc::Rc;

use crate::codec;
use crate::error::{Error, Result};
use crate::event::{KeyEvent, Phase};
use crate::store::ConfigStore;
use crate::types::Chord;

/// A listener callback fired when its binding matches a key-release.
///
/// Identity for add/remove is the `Rc` allocation (`Rc::ptr_eq`), so hold on
/// to the handle you registered if you intend to remove it later.
pub type Listener = Rc<dyn Fn()>;

/// Associates one action with zero-or-one chord.
///
/// The default chord is fixed at construction; the current chord changes
/// through [`set_chord`](Binding::set_chord) or config load. The
/// human-readable label is recomputed with every chord assignment and is
/// never stale.
pub struct Binding<A> {
    action: A,
    description: String,
    default_chord: Option<Chord>,
    chord: Option<Chord>,
    label: String,
    listeners: Vec<Listener>,
}

impl<A: fmt::Display> Binding<A> {
    /// Create a binding with its default chord (which may itself be `None`
    /// for an action that ships unbound).
    pub fn new(action: A, description: impl Into<String>, default_chord: Option<Chord>) -> Self {
        Self {
            label: codec::humanize(default_chord.as_ref()),
            action,
            description: description.into(),
            default_chord,
            chord: default_chord,
            listeners: Vec::new(),
        }
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Current chord; `None` means explicitly unbound
    pub fn chord(&self) -> Option<Chord> {
        self.chord
    }

    /// The chord this binding was constructed with
    pub fn default_chord(&self) -> Option<Chord> {
        self.default_chord
    }

    /// Display label for the current chord, e.g. `Ctrl+P` or `<unbound>`
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn is_bound(&self) -> bool {
        self.chord.is_some()
    }

    /// Replace the current chord. The label is updated in the same call;
    /// there is no observable state where the two disagree.
    pub fn set_chord(&mut self, chord: Option<Chord>) {
        self.chord = chord;
        self.label = codec::humanize(self.chord.as_ref());
    }

    /// Register a listener. Adding the same `Rc` handle twice is a no-op.
    pub fn add_listener(&mut self, listener: Listener) {
        if self.listeners.iter().any(|l| Rc::ptr_eq(l, &listener)) {
            return;
        }
        self.listeners.push(listener);
    }

    /// Remove a previously registered listener; no-op if it is not present.
    pub fn remove_listener(&mut self, listener: &Listener) {
        self.listeners.retain(|l| !Rc::ptr_eq(l, listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Fire all listeners if the event is a key-release matching the current
    /// chord. On a match the event is consumed and every listener runs
    /// synchronously in registration order. Listener panics are not caught.
    pub fn match_and_fire(&self, event: &mut KeyEvent) -> bool {
        let Some(chord) = self.chord else {
            return false;
        };
        if event.phase != Phase::Up || event.chord() != chord {
            return false;
        }

        for listener in &self.listeners {
            listener();
        }
        event.consume();
        true
    }

    /// Restore the chord from the store entry keyed by this action.
    ///
    /// No store or no entry means the action was never configured: reset to
    /// the default chord. An empty entry means explicitly unbound. Anything
    /// else must decode as a chord token; a decode failure surfaces as
    /// [`Error::ConfigDecode`] and leaves the current chord untouched.
    pub fn load(&mut self, store: Option<&dyn ConfigStore>) -> Result<()> {
        let key = self.action.to_string();
        let Some(value) = store.and_then(|s| s.get_value(&key)) else {
            self.set_chord(self.default_chord);
            return Ok(());
        };

        if value.is_empty() {
            self.set_chord(None);
            return Ok(());
        }

        match codec::decode(&value) {
            Ok(chord) => {
                self.set_chord(Some(chord));
                Ok(())
            }
            Err(source) => Err(Error::ConfigDecode {
                key,
                value,
                source: Box::new(source),
            }),
        }
    }

    /// Write the current chord to the store under this action's key: the
    /// encoded token when bound, the empty string when unbound.
    pub fn save(&self, store: &mut dyn ConfigStore) {
        let value = match &self.chord {
            Some(chord) => codec::encode(chord),
            None => String::new(),
        };
        store.set_value(&self.action.to_string(), &value);
    }
}

impl<A: fmt::Debug> fmt::Debug for Binding<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("action", &self.action)
            .field("chord", &self.chord)
            .field("label", &self.label)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
