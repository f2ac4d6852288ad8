// Cygnus Modifier Register
// The live modifier state (Shift, Ctrl, Alt, Gui) as an 8-bit mask

use std::fmt;
use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use crate::Key;

/// A set of modifiers using the firmware's register layout.
///
/// Low nibble holds the left-hand modifiers, high nibble the right-hand ones,
/// in the order Ctrl, Shift, Alt, Gui.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Mods(u8);

impl Mods {
    pub const NONE: Mods = Mods(0);
    pub const LCTL: Mods = Mods(0x01);
    pub const LSFT: Mods = Mods(0x02);
    pub const LALT: Mods = Mods(0x04);
    pub const LGUI: Mods = Mods(0x08);
    pub const RCTL: Mods = Mods(0x10);
    pub const RSFT: Mods = Mods(0x20);
    pub const RALT: Mods = Mods(0x40);
    pub const RGUI: Mods = Mods(0x80);

    /// Either Ctrl
    pub const CTRL: Mods = Mods(0x11);
    /// Either Shift
    pub const SHIFT: Mods = Mods(0x22);
    /// Either Alt
    pub const ALT: Mods = Mods(0x44);
    /// Either Gui (Cmd on macOS)
    pub const GUI: Mods = Mods(0x88);

    pub const fn from_bits(bits: u8) -> Self {
        Mods(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub const fn union(self, other: Mods) -> Mods {
        Mods(self.0 | other.0)
    }

    /// True if any bit of `mask` is set (the firmware's `get_mods() & MASK`)
    pub const fn intersects(self, mask: Mods) -> bool {
        self.0 & mask.0 != 0
    }

    pub const fn contains(self, other: Mods) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn difference(self, other: Mods) -> Mods {
        Mods(self.0 & !other.0)
    }

    /// The modifier key codes for every set bit, left-hand keys first
    pub fn keys(self) -> impl Iterator<Item = Key> {
        (0..8u8)
            .filter(move |bit| self.0 & (1 << bit) != 0)
            .map(|bit| Key(0xE0 + bit))
    }

    /// The single-bit set for a modifier key
    pub fn from_key(key: Key) -> Option<Mods> {
        if key.is_modifier() {
            Some(Mods(1 << (key.code() - 0xE0)))
        } else {
            None
        }
    }

    /// Look up a modifier by one of its aliases
    ///
    /// Generic names resolve to the left-hand modifier, which is what the
    /// firmware's `LCTL()`, `LSFT()`, `LALT()` and `LCMD()` wrappers emit.
    pub fn from_alias(alias: &str) -> Option<Mods> {
        let found = match alias {
            "Ctrl" | "Control" | "C" | "LCtrl" | "LC" => Mods::LCTL,
            "RCtrl" | "RC" => Mods::RCTL,
            "Shift" | "S" | "LShift" => Mods::LSFT,
            "RShift" => Mods::RSFT,
            "Alt" | "A" | "Opt" | "Option" | "LAlt" | "LOpt" => Mods::LALT,
            "RAlt" | "ROpt" => Mods::RALT,
            "Cmd" | "Command" | "Gui" | "Super" | "Win" | "Meta" | "LCmd" | "LGui" => Mods::LGUI,
            "RCmd" | "RGui" => Mods::RGUI,
            _ => return None,
        };
        Some(found)
    }

    /// Display names for each set bit, Cmd first as chords are usually written
    fn bit_names(self) -> impl Iterator<Item = &'static str> {
        const ORDER: [(u8, &str); 8] = [
            (3, "Cmd"),
            (0, "Ctrl"),
            (2, "Alt"),
            (1, "Shift"),
            (7, "RCmd"),
            (4, "RCtrl"),
            (6, "RAlt"),
            (5, "RShift"),
        ];
        ORDER
            .into_iter()
            .filter(move |(bit, _)| self.0 & (1 << bit) != 0)
            .map(|(_, name)| name)
    }
}

impl BitOr for Mods {
    type Output = Mods;

    fn bitor(self, rhs: Mods) -> Mods {
        self.union(rhs)
    }
}

impl BitOrAssign for Mods {
    fn bitor_assign(&mut self, rhs: Mods) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Mods {
    type Output = Mods;

    fn bitand(self, rhs: Mods) -> Mods {
        Mods(self.0 & rhs.0)
    }
}

impl Not for Mods {
    type Output = Mods;

    fn not(self) -> Mods {
        Mods(!self.0)
    }
}

impl fmt::Display for Mods {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let parts: Vec<&str> = self.bit_names().collect();
        write!(f, "{}", parts.join("-"))
    }
}
