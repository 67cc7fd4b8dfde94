//! Registry: ordered binding collection, event dispatch, and capture mode

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use crate::binding::{Binding, Listener};
use crate::error::{Error, Result};
use crate::event::{InputEvent, KeyEvent, Phase};
use crate::store::ConfigStore;

/// Transient observer receiving every qualifying key-release while capture
/// mode is active. Gets the raw event so a rebind UI can read the chord the
/// user pressed, modifiers included, without the registry pre-interpreting it.
pub type CaptureObserver = Box<dyn FnMut(&KeyEvent)>;

/// Owns the binding collection and routes raw input events.
///
/// Bindings keep their registration order, which is also dispatch precedence:
/// the first binding whose chord matches an event fires and the scan stops.
/// Two bindings sharing a chord is accepted; the earlier one wins until it is
/// rebound.
pub struct Registry<A> {
    bindings: Vec<Binding<A>>,
    by_action: HashMap<A, usize>,
    capture: Option<CaptureObserver>,
}

impl<A: Eq + Hash + Clone + fmt::Display> Registry<A> {
    pub fn new() -> Self {
        Self {
            bindings: Vec::new(),
            by_action: HashMap::new(),
            capture: None,
        }
    }

    /// Append a binding and index it by action id.
    ///
    /// Registering a second binding under an already-used id is a caller
    /// error: both stay in the dispatch sequence but the lookup now resolves
    /// to the newest one.
    pub fn add_binding(&mut self, binding: Binding<A>) {
        let idx = self.bindings.len();
        if self.by_action.insert(binding.action().clone(), idx).is_some() {
            tracing::warn!(
                action = %binding.action(),
                "action registered twice; lookup now resolves to the newest binding"
            );
        }
        self.bindings.push(binding);
    }

    /// Look up a binding by action id
    pub fn get(&self, action: &A) -> Option<&Binding<A>> {
        self.by_action.get(action).map(|&idx| &self.bindings[idx])
    }

    /// Mutable lookup, for rebinding UIs
    pub fn get_mut(&mut self, action: &A) -> Option<&mut Binding<A>> {
        let idx = *self.by_action.get(action)?;
        Some(&mut self.bindings[idx])
    }

    /// All bindings in registration order
    pub fn bindings(&self) -> &[Binding<A>] {
        &self.bindings
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Attach a listener to the named action's binding
    pub fn bind_listener(&mut self, action: &A, listener: Listener) -> Result<()> {
        self.lookup_mut(action)?.add_listener(listener);
        Ok(())
    }

    /// Detach a listener from the named action's binding
    pub fn unbind_listener(&mut self, action: &A, listener: &Listener) -> Result<()> {
        self.lookup_mut(action)?.remove_listener(listener);
        Ok(())
    }

    fn lookup_mut(&mut self, action: &A) -> Result<&mut Binding<A>> {
        let idx = *self.by_action.get(action).ok_or_else(|| Error::UnknownAction {
            action: action.to_string(),
        })?;
        Ok(&mut self.bindings[idx])
    }

    /// Install the capture observer, replacing any previous one. Until
    /// [`clear_capture`](Registry::clear_capture), every qualifying
    /// key-release is routed exclusively to the observer and consumed;
    /// normal binding matching is suppressed entirely.
    pub fn install_capture(&mut self, observer: impl FnMut(&KeyEvent) + 'static) {
        tracing::debug!("capture observer installed; normal dispatch suspended");
        self.capture = Some(Box::new(observer));
    }

    /// Remove the capture observer, restoring per-binding dispatch
    pub fn clear_capture(&mut self) {
        if self.capture.take().is_some() {
            tracing::debug!("capture observer cleared; normal dispatch restored");
        }
    }

    pub fn has_capture(&self) -> bool {
        self.capture.is_some()
    }

    /// Route one raw input event.
    ///
    /// Non-keyboard events and key-presses are ignored. A key-release goes
    /// to the capture observer when one is installed, otherwise to the first
    /// binding whose chord matches; either way the event is consumed and
    /// `true` is returned. At most one binding fires per event.
    pub fn dispatch(&mut self, event: &mut InputEvent) -> bool {
        let InputEvent::Key(key_event) = event else {
            return false;
        };
        if key_event.phase != Phase::Up {
            return false;
        }

        if let Some(observer) = self.capture.as_mut() {
            observer(key_event);
            key_event.consume();
            return true;
        }

        for binding in &self.bindings {
            if binding.match_and_fire(key_event) {
                return true;
            }
        }
        false
    }

    /// Restore every binding from the store, in registration order.
    ///
    /// Stops at the first corrupted entry and surfaces it; bindings earlier
    /// in the order keep their loaded chords.
    pub fn load(&mut self, store: Option<&dyn ConfigStore>) -> Result<()> {
        for binding in &mut self.bindings {
            binding.load(store)?;
        }
        tracing::info!("restored {} bindings from config", self.bindings.len());
        Ok(())
    }

    /// Write every binding to the store, in registration order
    pub fn save(&self, store: &mut dyn ConfigStore) {
        for binding in &self.bindings {
            binding.save(store);
        }
        tracing::info!("saved {} bindings to config", self.bindings.len());
    }
}

impl<A: Eq + Hash + Clone + fmt::Display> Default for Registry<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: fmt::Debug> fmt::Debug for Registry<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("bindings", &self.bindings)
            .field("capture", &self.capture.is_some())
            .finish()
    }
}
