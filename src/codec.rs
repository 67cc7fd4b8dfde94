//! Chord token codec: compact persistence tokens and display labels.
//!
//! The persisted form is one marker character per active modifier, in fixed
//! order, followed by the key's canonical name with no separator:
//!
//! ```text
//! token := modifier* keyname
//! modifier := "&" (Alt) | "^" (Ctrl) | "%" (Cmd) | "#" (Shift)
//! ```
//!
//! `{Ctrl} + P` encodes as `^P`; `{Alt, Shift} + F2` as `&#F2`. The empty
//! string is the reserved "unbound" sentinel handled by [`crate::Binding`]
//! before decoding, and is never a valid token.

use crate::error::{Error, Result};
use crate::types::{Chord, KeyCode, Modifiers};

/// Display label for an unbound chord. Never produced by [`encode`] and
/// never accepted by [`decode`].
pub const UNBOUND_LABEL: &str = "<unbound>";

/// Marker characters in canonical order: Alt, Ctrl, Cmd, Shift
const MARKERS: [(char, Modifiers); 4] = [
    ('&', Modifiers::ALT),
    ('^', Modifiers::CTRL),
    ('%', Modifiers::CMD),
    ('#', Modifiers::SHIFT),
];

/// Encode a chord as a round-trippable token
pub fn encode(chord: &Chord) -> String {
    let mut out = String::new();
    for (marker, flag) in MARKERS {
        if chord.mods.contains(flag) {
            out.push(marker);
        }
    }
    out.push_str(&chord.key.name());
    out
}

/// Decode a token produced by [`encode`].
///
/// Markers are accepted at most once each, in canonical order only. A marker
/// character with nothing after it is the key itself (`#` is the `#` key,
/// `##` is Shift+`#`), so every representable chord round-trips.
pub fn decode(token: &str) -> Result<Chord> {
    if token.is_empty() {
        return Err(parse_error(token, "empty token"));
    }

    let mut mods = Modifiers::NONE;
    let mut rest = token;
    for (marker, flag) in MARKERS {
        if let Some(stripped) = rest.strip_prefix(marker) {
            if !stripped.is_empty() {
                mods = mods | flag;
                rest = stripped;
            }
        }
    }

    let key = KeyCode::from_name(rest)
        .ok_or_else(|| parse_error(token, &format!("unknown key name `{}`", rest)))?;

    Ok(Chord::new(key, mods))
}

/// Human-readable label for a chord slot: full modifier names and the key
/// name joined with `+` in canonical order, or [`UNBOUND_LABEL`] for `None`.
pub fn humanize(chord: Option<&Chord>) -> String {
    match chord {
        Some(chord) => chord.to_string(),
        None => UNBOUND_LABEL.to_string(),
    }
}

fn parse_error(token: &str, reason: &str) -> Error {
    Error::ChordParse {
        token: token.to_string(),
        reason: reason.to_string(),
    }
}
