//! Error types for chord parsing, persistence, and registry lookup

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A chord was requested from an event that is not a keyboard event.
    #[error("cannot derive a chord from a {found} event")]
    InvalidChord { found: &'static str },

    /// A chord token failed to parse.
    #[error("malformed chord token `{token}`: {reason}")]
    ChordParse { token: String, reason: String },

    /// A stored binding value failed chord-token parsing during load.
    ///
    /// Indicates a corrupted or hand-edited configuration entry. The caller
    /// decides whether to fall back to the default chord or abort.
    #[error("config entry `{key}` holds an unreadable chord token `{value}`")]
    ConfigDecode {
        key: String,
        value: String,
        #[source]
        source: Box<Error>,
    },

    /// Listener bind/unbind referenced an action that was never registered.
    #[error("unknown action `{action}`")]
    UnknownAction { action: String },

    /// Binding store file could not be written.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Binding store file could not be serialized.
    #[error("binding store serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
