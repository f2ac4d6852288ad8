// Cygnus Combos
// Two-key chords pressed within the combo term

use crate::keycode::{kc, Keycode};
use crate::Key;

/// Keys pressed together that emit a single keycode instead
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Combo {
    pub name: &'static str,
    pub keys: &'static [Keycode],
    pub output: Keycode,
}

impl Combo {
    /// Whether `pressed` is exactly this combo's key set, in any order
    pub fn matches(&self, pressed: &[Keycode]) -> bool {
        pressed.len() == self.keys.len()
            && self.keys.iter().all(|key| pressed.contains(key))
            && pressed.iter().all(|key| self.keys.contains(key))
    }
}

pub static COMBOS: [Combo; 3] = [
    Combo {
        name: "esc",
        keys: &[kc(Key::Q), kc(Key::W)],
        output: kc(Key::ESCAPE),
    },
    Combo {
        name: "tab",
        keys: &[kc(Key::A), kc(Key::S)],
        output: kc(Key::TAB),
    },
    Combo {
        name: "enter",
        keys: &[kc(Key::L), kc(Key::SEMICOLON)],
        output: kc(Key::ENTER),
    },
];

pub fn find_combo(pressed: &[Keycode]) -> Option<&'static Combo> {
    COMBOS.iter().find(|combo| combo.matches(pressed))
}
