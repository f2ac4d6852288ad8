// Cygnus Core Library
// Keymap, custom keycodes and layer logic for the Cygnus V1 split keyboard

pub mod chord;
pub mod config;
pub mod custom;
pub mod dispatch;
pub mod event;
pub mod host;
pub mod key;
pub mod keycode;
pub mod keymap;
pub mod layer;
pub mod modifier;
pub mod output;
pub mod script;

pub use chord::{parse_chord, Chord, ChordParseError};
pub use config::{default_config_content, BuildConfig, ConfigError, FeatureFlags, MousekeyConfig};
pub use custom::{CustomBehavior, CustomKeycode};
pub use dispatch::{Dispatcher, TAPPING_TERM};
pub use event::{KeyEvent, KeyPos, KeyRecord};
pub use host::{Host, ModsGuard, Report, SimulatedHost};
pub use key::Key;
pub use keycode::{Keycode, KeycodeParseError, MouseKey};
pub use keymap::{
    encoder_action, find_combo, Combo, EncoderAction, EncoderDirection, Keymap, LayerTable,
    Variant, COLS, COMBOS, ROWS,
};
pub use layer::{layer_state_set_user, update_tri_layer_state, Layer, LayerState, LAYER_SLOTS};
pub use modifier::Mods;
pub use output::{expand_tap, HidEvent, TapSequence};
pub use script::{parse_script, Script, ScriptError, Simulator, Step, StepOutcome};
