// Cygnus Output Layer
// HID expansion of emitted keystrokes

mod sequence;

pub use sequence::{expand_tap, HidEvent, HidEvents, TapSequence};
