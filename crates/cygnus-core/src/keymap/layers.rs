// Cygnus Layer Tables
// Split 3x6+3 layout: three rows of twelve plus six thumb keys

use crate::custom::CustomKeycode::*;
use crate::keycode::{
    chord, custom, kc, lcmd, lt, mo, mod_tap, ms, sft, tg, Keycode, MouseKey, XXXXXXX, _______,
};
use crate::layer::LAYER_SLOTS;
use crate::{Key, Layer, Mods};

pub const ROWS: usize = 4;
pub const COLS: usize = 12;

/// Row of the six thumb keys
pub const THUMB_ROW: usize = 3;
/// First column used by the thumb keys
pub const THUMB_COL: usize = 3;

pub type LayerTable = [[Keycode; COLS]; ROWS];

/// Thumb row with the six thumb keys placed in the middle columns
const fn thumbs(keys: [Keycode; 6]) -> [Keycode; COLS] {
    let [a, b, c, d, e, f] = keys;
    [XXXXXXX, XXXXXXX, XXXXXXX, a, b, c, d, e, f, XXXXXXX, XXXXXXX, XXXXXXX]
}

const LALT_SLSH: Keycode = mod_tap(Mods::LALT, Key::SLASH);
const LCTL_TAB: Keycode = mod_tap(Mods::LCTL, Key::TAB);

// QWERTY; P doubles as Spotlight when held
#[rustfmt::skip]
const BASE: LayerTable = [
    [XXXXXXX, kc(Key::Q), kc(Key::W), kc(Key::E), kc(Key::R), kc(Key::T), kc(Key::Y), kc(Key::U), kc(Key::I), kc(Key::O), custom(PSpotlight), XXXXXXX],
    [XXXXXXX, kc(Key::A), kc(Key::S), kc(Key::D), kc(Key::F), kc(Key::G), kc(Key::H), kc(Key::J), kc(Key::K), kc(Key::L), kc(Key::SEMICOLON), XXXXXXX],
    [XXXXXXX, kc(Key::Z), kc(Key::X), kc(Key::C), kc(Key::V), kc(Key::B), kc(Key::N), kc(Key::M), kc(Key::COMMA), kc(Key::DOT), LALT_SLSH, XXXXXXX],
    thumbs([LCTL_TAB, kc(Key::LEFT_SHIFT), lt(Layer::Lower, Key::ENTER), lt(Layer::Raise, Key::SPACE), kc(Key::BACKSPACE), mod_tap(Mods::LGUI, Key::ESCAPE)]),
];

// Numbers, mouse and navigation
#[rustfmt::skip]
const LOWER: LayerTable = [
    [XXXXXXX, kc(Key::N1), kc(Key::N2), kc(Key::N3), kc(Key::N4), kc(Key::N5), ms(MouseKey::Button1), ms(MouseKey::WheelUp), ms(MouseKey::Button2), kc(Key::DELETE), kc(Key::INSERT), XXXXXXX],
    [XXXXXXX, kc(Key::N6), kc(Key::N7), kc(Key::N8), kc(Key::N9), kc(Key::N0), ms(MouseKey::CursorLeft), ms(MouseKey::CursorDown), ms(MouseKey::CursorUp), ms(MouseKey::CursorRight), kc(Key::PAGE_UP), XXXXXXX],
    [XXXXXXX, lcmd(Key::Z), lcmd(Key::X), lcmd(Key::C), lcmd(Key::V), lcmd(Key::B), ms(MouseKey::Button3), ms(MouseKey::WheelDown), kc(Key::HOME), kc(Key::END), kc(Key::PAGE_DOWN), XXXXXXX],
    thumbs([kc(Key::LEFT_CTRL), kc(Key::LEFT_SHIFT), _______, _______, kc(Key::BACKSPACE), kc(Key::LEFT_GUI)]),
];

// Programming symbols; digits on shift, arrows on Ctrl+HJKL
#[rustfmt::skip]
const fn raise(top: Layer) -> LayerTable {
    [
        [XXXXXXX, custom(Sym1), custom(Sym2), custom(Sym3), custom(Sym4), custom(Sym5), custom(Sym6), custom(Sym7), custom(Sym8), custom(Sym9), custom(Sym0), XXXXXXX],
        [XXXXXXX, kc(Key::EQUAL), kc(Key::LEFT_BRACKET), kc(Key::RIGHT_BRACKET), sft(Key::N9), sft(Key::N0), custom(CtrlH), custom(CtrlJ), custom(CtrlK), custom(CtrlL), kc(Key::SEMICOLON), XXXXXXX],
        [XXXXXXX, kc(Key::GRAVE), kc(Key::BACKSLASH), sft(Key::BACKSLASH), sft(Key::GRAVE), sft(Key::QUOTE), sft(Key::EQUAL), kc(Key::COMMA), kc(Key::QUOTE), kc(Key::DOT), LALT_SLSH, XXXXXXX],
        thumbs([LCTL_TAB, kc(Key::LEFT_SHIFT), mo(top), _______, kc(Key::BACKSPACE), kc(Key::LEFT_GUI)]),
    ]
}

// F-keys, media and screenshots
#[rustfmt::skip]
const FUNCTION: LayerTable = [
    [XXXXXXX, kc(Key::F1), kc(Key::F2), kc(Key::F3), kc(Key::F4), kc(Key::F5), kc(Key::F6), kc(Key::F7), kc(Key::F8), kc(Key::F9), kc(Key::F10), XXXXXXX],
    [XXXXXXX, kc(Key::F11), kc(Key::F12), kc(Key::BRIGHTNESS_DOWN), kc(Key::BRIGHTNESS_UP), kc(Key::AUDIO_MUTE), kc(Key::AUDIO_VOL_DOWN), kc(Key::AUDIO_VOL_UP), kc(Key::MEDIA_PREV_TRACK), kc(Key::MEDIA_PLAY_PAUSE), kc(Key::MEDIA_NEXT_TRACK), XXXXXXX],
    [XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, chord(CMD_SHIFT, Key::N3), chord(CMD_SHIFT, Key::N4), chord(CMD_SHIFT, Key::N5), XXXXXXX],
    thumbs([kc(Key::LEFT_CTRL), XXXXXXX, XXXXXXX, kc(Key::SPACE), kc(Key::BACKSPACE), kc(Key::LEFT_GUI)]),
];

const CMD_SHIFT: Mods = Mods::LGUI.union(Mods::LSFT);

const TOP_THUMBS: [Keycode; COLS] = thumbs([
    tg(Layer::Function),
    _______,
    XXXXXXX,
    kc(Key::SPACE),
    kc(Key::BACKSPACE),
    kc(Key::RIGHT_SHIFT),
]);

// System controls
#[rustfmt::skip]
const ADJUST: LayerTable = [
    [XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, kc(Key::SYSTEM_SLEEP), XXXXXXX],
    [XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, XXXXXXX, chord(Mods::LCTL.union(Mods::LSFT), Key::KB_POWER), XXXXXXX],
    [XXXXXXX; COLS],
    TOP_THUMBS,
];

// Terminal tabs, panes and zoom
#[rustfmt::skip]
const TERMINAL: LayerTable = [
    [XXXXXXX, custom(TermTab1), custom(TermTab2), custom(TermTab3), custom(TermTab4), custom(TermTab5), custom(TermZoomOut), custom(TermZoomReset), custom(TermZoomIn), custom(TermFind), custom(TermClear), XXXXXXX],
    [XXXXXXX, custom(TermNewTab), custom(TermCloseTab), custom(TermPrevTab), custom(TermNextTab), custom(TermNewWindow), custom(TermPaneLeft), custom(TermPaneDown), custom(TermPaneUp), custom(TermPaneRight), custom(TermMaximizePane), XXXXXXX],
    [XXXXXXX, custom(TermSelectAll), custom(TermCopy), custom(TermPaste), custom(TermSplitVertical), custom(TermSplitHorizontal), custom(TermPrevPane), custom(TermNextPane), custom(TermFullscreen), XXXXXXX, XXXXXXX, XXXXXXX],
    TOP_THUMBS,
];

pub(crate) static STANDARD_LAYERS: [LayerTable; LAYER_SLOTS] =
    [BASE, LOWER, raise(Layer::Adjust), FUNCTION, ADJUST];

pub(crate) static TERMINAL_LAYERS: [LayerTable; LAYER_SLOTS] =
    [BASE, LOWER, raise(Layer::Terminal), FUNCTION, TERMINAL];
