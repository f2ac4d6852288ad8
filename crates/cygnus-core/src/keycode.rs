// Cygnus Keycodes
// Everything a keymap table slot can hold

use std::fmt;
use std::str::FromStr;

use strum_macros::{Display, EnumIter, EnumString};

use crate::chord::parse_chord;
use crate::custom::CustomKeycode;
use crate::key::{key_from_name, shifted_symbol};
use crate::{Chord, Key, Layer, Mods};

/// Mouse-emulation keys handled by the firmware's mousekey subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum MouseKey {
    #[strum(serialize = "MS_BTN1")]
    Button1,
    #[strum(serialize = "MS_BTN2")]
    Button2,
    #[strum(serialize = "MS_BTN3")]
    Button3,
    #[strum(serialize = "MS_WH_UP")]
    WheelUp,
    #[strum(serialize = "MS_WH_DOWN")]
    WheelDown,
    #[strum(serialize = "MS_LEFT")]
    CursorLeft,
    #[strum(serialize = "MS_DOWN")]
    CursorDown,
    #[strum(serialize = "MS_UP")]
    CursorUp,
    #[strum(serialize = "MS_RIGHT")]
    CursorRight,
}

/// A keymap table entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keycode {
    /// Dead position (`XXXXXXX`)
    No,
    /// Fall through to the next active layer below (`_______`)
    Transparent,
    Basic(Key),
    /// Key with modifiers applied, including shifted symbols like `KC_EXLM`
    Chord(Chord),
    /// Modifier when held, key when tapped (`LCTL_T(KC_TAB)`)
    ModTap { mods: Mods, tap: Key },
    /// Layer when held, key when tapped (`LT(_LOWER, KC_ENT)`)
    LayerTap { layer: Layer, tap: Key },
    /// Layer active while held (`MO`)
    Momentary(Layer),
    /// Layer flipped on each press (`TG`)
    Toggle(Layer),
    Mouse(MouseKey),
    /// Handled by this keymap's dispatcher
    Custom(CustomKeycode),
}

impl Keycode {
    pub const fn is_custom(&self) -> bool {
        matches!(self, Keycode::Custom(_))
    }

    /// The layer this entry switches to, if it is a layer key
    pub const fn target_layer(&self) -> Option<Layer> {
        match self {
            Keycode::LayerTap { layer, .. } | Keycode::Momentary(layer) | Keycode::Toggle(layer) => {
                Some(*layer)
            }
            _ => None,
        }
    }
}

impl From<Key> for Keycode {
    fn from(key: Key) -> Self {
        Keycode::Basic(key)
    }
}

impl From<CustomKeycode> for Keycode {
    fn from(custom: CustomKeycode) -> Self {
        Keycode::Custom(custom)
    }
}

const WRAPPER_NAMES: [(&str, Mods); 8] = [
    ("LCTL", Mods::LCTL),
    ("LSFT", Mods::LSFT),
    ("LALT", Mods::LALT),
    ("LCMD", Mods::LGUI),
    ("RCTL", Mods::RCTL),
    ("RSFT", Mods::RSFT),
    ("RALT", Mods::RALT),
    ("RCMD", Mods::RGUI),
];

/// Wrapper name for a single-bit modifier set (`LCTL`, `LCMD`...)
fn wrapper_name(mods: Mods) -> &'static str {
    WRAPPER_NAMES
        .iter()
        .find(|(_, m)| *m == mods)
        .map(|(name, _)| *name)
        .unwrap_or("MOD")
}

/// Modifier set for a wrapper name; `LGUI`/`RGUI` are accepted too
fn wrapper_mods(name: &str) -> Option<Mods> {
    match name {
        "LGUI" => Some(Mods::LGUI),
        "RGUI" => Some(Mods::RGUI),
        _ => WRAPPER_NAMES
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, m)| *m),
    }
}

impl fmt::Display for Keycode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Keycode::No => write!(f, "XXXXXXX"),
            Keycode::Transparent => write!(f, "_______"),
            Keycode::Basic(key) => write!(f, "{}", key),
            Keycode::Chord(chord) => write!(f, "{}", chord),
            Keycode::ModTap { mods, tap } => write!(f, "{}_T({})", wrapper_name(*mods), tap),
            Keycode::LayerTap { layer, tap } => write!(f, "LT({}, {})", layer, tap),
            Keycode::Momentary(layer) => write!(f, "MO({})", layer),
            Keycode::Toggle(layer) => write!(f, "TG({})", layer),
            Keycode::Mouse(mouse) => write!(f, "{}", mouse),
            Keycode::Custom(custom) => write!(f, "{}", custom),
        }
    }
}

/// Errors from parsing a keycode name
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown keycode: '{0}'")]
pub struct KeycodeParseError(pub String);

impl FromStr for Keycode {
    type Err = KeycodeParseError;

    /// Parses custom keycode names (`SYM_1`), mouse keys (`MS_BTN1`),
    /// `XXXXXXX`/`_______`, `MO(LOWER)`/`TG(FUNCTION)`,
    /// `LT(LOWER, ENTER)`, `LCTL_T(TAB)`, shifted symbols (`!`, `{`), and
    /// anything [`parse_chord`] accepts (`A`, `Cmd-Z`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "XXXXXXX" | "NO" => return Ok(Keycode::No),
            "_______" | "TRNS" => return Ok(Keycode::Transparent),
            _ => {}
        }
        if let Ok(custom) = trimmed.parse::<CustomKeycode>() {
            return Ok(Keycode::Custom(custom));
        }
        if let Ok(mouse) = trimmed.parse::<MouseKey>() {
            return Ok(Keycode::Mouse(mouse));
        }
        if let Some(layer) = layer_argument(trimmed, "MO") {
            return Ok(Keycode::Momentary(layer));
        }
        if let Some(layer) = layer_argument(trimmed, "TG") {
            return Ok(Keycode::Toggle(layer));
        }
        if let Some((layer, tap)) = layer_tap_arguments(trimmed) {
            return Ok(Keycode::LayerTap { layer, tap });
        }
        if let Some((mods, tap)) = mod_tap_arguments(trimmed) {
            return Ok(Keycode::ModTap { mods, tap });
        }
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(key) = shifted_symbol(c) {
                return Ok(Keycode::Chord(Chord::shifted(key)));
            }
        }
        match parse_chord(trimmed) {
            Ok(chord) if chord.is_plain() => Ok(Keycode::Basic(chord.key())),
            Ok(chord) => Ok(Keycode::Chord(chord)),
            Err(_) => Err(KeycodeParseError(trimmed.to_string())),
        }
    }
}

/// Parse `NAME(LAYER)` forms
fn layer_argument(s: &str, wrapper: &str) -> Option<Layer> {
    let inner = s.strip_prefix(wrapper)?.strip_prefix('(')?.strip_suffix(')')?;
    inner.trim().trim_start_matches('_').parse().ok()
}

/// Parse `LT(LAYER, KEY)`
fn layer_tap_arguments(s: &str) -> Option<(Layer, Key)> {
    let inner = s.strip_prefix("LT(")?.strip_suffix(')')?;
    let (layer, key) = inner.split_once(',')?;
    let layer = layer.trim().trim_start_matches('_').parse().ok()?;
    Some((layer, key_from_name(key)?))
}

/// Parse `LCTL_T(KEY)` and the other single-modifier wrappers
fn mod_tap_arguments(s: &str) -> Option<(Mods, Key)> {
    let (wrapper, rest) = s.split_once("_T(")?;
    let key = rest.strip_suffix(')')?;
    Some((wrapper_mods(wrapper)?, key_from_name(key)?))
}

// Table-building shorthands, named after the firmware's keymap macros.

pub const XXXXXXX: Keycode = Keycode::No;
pub const _______: Keycode = Keycode::Transparent;

pub const fn kc(key: Key) -> Keycode {
    Keycode::Basic(key)
}

/// Shifted symbol (`KC_EXLM` is `LSFT(KC_1)`)
pub const fn sft(key: Key) -> Keycode {
    Keycode::Chord(Chord::shifted(key))
}

pub const fn lcmd(key: Key) -> Keycode {
    Keycode::Chord(Chord::cmd(key))
}

pub const fn chord(mods: Mods, key: Key) -> Keycode {
    Keycode::Chord(Chord::new(mods, key))
}

pub const fn mod_tap(mods: Mods, tap: Key) -> Keycode {
    Keycode::ModTap { mods, tap }
}

pub const fn lt(layer: Layer, tap: Key) -> Keycode {
    Keycode::LayerTap { layer, tap }
}

pub const fn mo(layer: Layer) -> Keycode {
    Keycode::Momentary(layer)
}

pub const fn tg(layer: Layer) -> Keycode {
    Keycode::Toggle(layer)
}

pub const fn ms(mouse: MouseKey) -> Keycode {
    Keycode::Mouse(mouse)
}

pub const fn custom(custom: CustomKeycode) -> Keycode {
    Keycode::Custom(custom)
}
