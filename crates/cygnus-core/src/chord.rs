// Cygnus Chord Type
// A key combined with a set of modifiers, sent as one synthetic keystroke

use std::fmt;
use std::str::FromStr;

use crate::key::key_from_name;
use crate::{Key, Mods};

/// A keystroke together with the modifiers held around it.
///
/// An empty modifier set is a plain keystroke (`tap_code`); anything else is
/// what the firmware sends with `tap_code16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Chord {
    mods: Mods,
    key: Key,
}

impl Chord {
    pub const fn new(mods: Mods, key: Key) -> Self {
        Self { mods, key }
    }

    /// A keystroke without modifiers
    pub const fn plain(key: Key) -> Self {
        Self {
            mods: Mods::NONE,
            key,
        }
    }

    /// Left Shift plus `key`, the firmware's spelling of shifted symbols
    pub const fn shifted(key: Key) -> Self {
        Self::new(Mods::LSFT, key)
    }

    /// Left Cmd plus `key`
    pub const fn cmd(key: Key) -> Self {
        Self::new(Mods::LGUI, key)
    }

    pub const fn mods(&self) -> Mods {
        self.mods
    }

    pub const fn key(&self) -> Key {
        self.key
    }

    pub const fn is_plain(&self) -> bool {
        self.mods.is_empty()
    }

    /// Add modifiers to this chord
    pub const fn with_mods(self, mods: Mods) -> Self {
        Self {
            mods: self.mods.union(mods),
            key: self.key,
        }
    }
}

impl From<Key> for Chord {
    fn from(key: Key) -> Self {
        Chord::plain(key)
    }
}

impl fmt::Display for Chord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.mods.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}-{}", self.mods, self.key)
        }
    }
}

/// Errors that can occur during chord parsing
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ChordParseError {
    #[error("chord string cannot be empty")]
    EmptyInput,
    #[error("unknown key name: '{0}'")]
    UnknownKey(String),
    #[error("unknown modifier: '{0}'")]
    UnknownModifier(String),
    #[error("chord string cannot end with hyphen")]
    TrailingHyphen,
}

/// Parse a chord string like "Cmd-Shift-RBRC" into a [`Chord`]
///
/// The last hyphen-separated part is the key, everything before it is a
/// modifier alias. A lone `-` names the minus key.
///
/// # Examples
/// ```
/// use cygnus_core::{parse_chord, Key, Mods};
/// let chord = parse_chord("Cmd-T").unwrap();
/// assert_eq!(chord.mods(), Mods::LGUI);
/// assert_eq!(chord.key(), Key::T);
/// ```
pub fn parse_chord(exp: &str) -> Result<Chord, ChordParseError> {
    let trimmed = exp.trim();
    if trimmed.is_empty() {
        return Err(ChordParseError::EmptyInput);
    }
    if trimmed == "-" {
        return Ok(Chord::plain(Key::MINUS));
    }
    if trimmed.ends_with('-') {
        return Err(ChordParseError::TrailingHyphen);
    }

    let parts: Vec<&str> = trimmed.split('-').collect();
    let (key_str, modifier_strs) = match parts.split_last() {
        Some(split) => split,
        None => return Err(ChordParseError::EmptyInput),
    };

    let key = key_from_name(key_str)
        .ok_or_else(|| ChordParseError::UnknownKey(key_str.to_string()))?;

    let mut mods = Mods::NONE;
    for modifier_str in modifier_strs {
        let modifier = Mods::from_alias(modifier_str)
            .ok_or_else(|| ChordParseError::UnknownModifier(modifier_str.to_string()))?;
        // Repeats are harmless, the register is a set
        mods |= modifier;
    }

    Ok(Chord::new(mods, key))
}

impl FromStr for Chord {
    type Err = ChordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_chord(s)
    }
}
