// Cygnus Key Type
// Basic keycodes as consumed by the firmware's tap_code primitive

use std::fmt;
use std::str::FromStr;

include!(concat!(env!("OUT_DIR"), "/key_codes.rs"));

/// Try to parse a key name to a key code
///
/// Accepts display names (`LEFT_BRACKET`), constant names (`N1`) and the
/// firmware's short aliases (`LBRC`), with or without a `KC_` prefix.
pub fn key_from_name(name: &str) -> Option<Key> {
    let name_upper = name.trim().to_uppercase();
    let bare = name_upper.strip_prefix("KC_").unwrap_or(&name_upper);
    KEY_NAMES
        .iter()
        .find(|(n, _)| *n == bare)
        .map(|(_, code)| Key(*code))
}

/// Shifted US-layout symbols and the basic key that produces them
///
/// The firmware spells these as `KC_EXLM`, `KC_AT`... and emits them as
/// Shift plus the base key.
pub fn shifted_symbol(c: char) -> Option<Key> {
    match c {
        '!' => Some(Key::N1),
        '@' => Some(Key::N2),
        '#' => Some(Key::N3),
        '$' => Some(Key::N4),
        '%' => Some(Key::N5),
        '^' => Some(Key::N6),
        '&' => Some(Key::N7),
        '*' => Some(Key::N8),
        '(' => Some(Key::N9),
        ')' => Some(Key::N0),
        '_' => Some(Key::MINUS),
        '+' => Some(Key::EQUAL),
        '{' => Some(Key::LEFT_BRACKET),
        '}' => Some(Key::RIGHT_BRACKET),
        '|' => Some(Key::BACKSLASH),
        ':' => Some(Key::SEMICOLON),
        '"' => Some(Key::QUOTE),
        '~' => Some(Key::GRAVE),
        '<' => Some(Key::COMMA),
        '>' => Some(Key::DOT),
        '?' => Some(Key::SLASH),
        _ => None,
    }
}
