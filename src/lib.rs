//! chordmap - host-agnostic keybinding registry
//!
//! This crate maps abstract named actions to keyboard chord bindings,
//! dispatches raw key events to the matching action's listeners, and
//! persists bindings through a key-value configuration store using a
//! compact token encoding.
//!
//! # Architecture
//!
//! ```text
//! host InputEvent → Registry::dispatch() → Binding::match_and_fire() → listeners
//!                        ↑ capture observer (rebind UI) suppresses matching
//! Binding ↔ ConfigStore entry:  "TogglePanel" ↔ "^P"
//! ```
//!
//! The host owns the window/input system and forwards every raw event;
//! matching happens on key-release only, and a matched event is marked
//! consumed so the host suppresses further processing.
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use chordmap::{Binding, Chord, InputEvent, KeyCode, MemoryStore, Modifiers, Registry};
//!
//! let mut registry = Registry::new();
//! registry.add_binding(Binding::new(
//!     "TogglePanel",
//!     "Show or hide the side panel",
//!     Some(Chord::new(KeyCode::char('p'), Modifiers::CTRL)),
//! ));
//! registry.bind_listener(&"TogglePanel", Rc::new(|| println!("panel toggled"))).unwrap();
//!
//! let mut event = InputEvent::key_up(KeyCode::char('p'), Modifiers::CTRL);
//! registry.dispatch(&mut event);
//! assert!(event.is_consumed());
//!
//! // Persist and restore through any ConfigStore implementation
//! let mut store = MemoryStore::new();
//! registry.save(&mut store);
//! registry.load(Some(&store)).unwrap();
//! ```

pub mod binding;
pub mod codec;
pub mod error;
pub mod event;
pub mod registry;
pub mod store;
pub mod types;

pub use binding::{Binding, Listener};
pub use codec::{decode, encode, humanize, UNBOUND_LABEL};
pub use error::{Error, Result};
pub use event::{InputEvent, KeyEvent, MouseButton, Phase, PointerEvent};
pub use registry::{CaptureObserver, Registry};
pub use store::{default_path, ConfigStore, FileStore, MemoryStore};
pub use types::{Chord, KeyCode, Modifiers};
