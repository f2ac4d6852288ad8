// Cygnus Custom Keycodes
// The keymap's own actions and the data each one carries

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{Chord, Key, Mods};

/// Keycodes recognised only by this keymap's dispatcher
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum CustomKeycode {
    /// P on tap, Spotlight (Cmd-Space) on hold
    #[strum(serialize = "P_SPOTLIGHT")]
    PSpotlight,

    // Arrow keys while Ctrl is held, programming punctuation otherwise
    #[strum(serialize = "CTRL_H")]
    CtrlH,
    #[strum(serialize = "CTRL_J")]
    CtrlJ,
    #[strum(serialize = "CTRL_K")]
    CtrlK,
    #[strum(serialize = "CTRL_L")]
    CtrlL,

    // Symbols by default, digits when shifted
    #[strum(serialize = "SYM_1")]
    Sym1,
    #[strum(serialize = "SYM_2")]
    Sym2,
    #[strum(serialize = "SYM_3")]
    Sym3,
    #[strum(serialize = "SYM_4")]
    Sym4,
    #[strum(serialize = "SYM_5")]
    Sym5,
    #[strum(serialize = "SYM_6")]
    Sym6,
    #[strum(serialize = "SYM_7")]
    Sym7,
    #[strum(serialize = "SYM_8")]
    Sym8,
    #[strum(serialize = "SYM_9")]
    Sym9,
    #[strum(serialize = "SYM_0")]
    Sym0,

    // Terminal control, iTerm2 default key bindings
    #[strum(serialize = "TERM_NEW_TAB")]
    TermNewTab,
    #[strum(serialize = "TERM_CLOSE_TAB")]
    TermCloseTab,
    #[strum(serialize = "TERM_NEXT_TAB")]
    TermNextTab,
    #[strum(serialize = "TERM_PREV_TAB")]
    TermPrevTab,
    #[strum(serialize = "TERM_NEW_WINDOW")]
    TermNewWindow,
    #[strum(serialize = "TERM_SPLIT_VERT")]
    TermSplitVertical,
    #[strum(serialize = "TERM_SPLIT_HORZ")]
    TermSplitHorizontal,
    #[strum(serialize = "TERM_NEXT_PANE")]
    TermNextPane,
    #[strum(serialize = "TERM_PREV_PANE")]
    TermPrevPane,
    #[strum(serialize = "TERM_PANE_LEFT")]
    TermPaneLeft,
    #[strum(serialize = "TERM_PANE_DOWN")]
    TermPaneDown,
    #[strum(serialize = "TERM_PANE_UP")]
    TermPaneUp,
    #[strum(serialize = "TERM_PANE_RIGHT")]
    TermPaneRight,
    #[strum(serialize = "TERM_MAX_PANE")]
    TermMaximizePane,
    #[strum(serialize = "TERM_FULLSCREEN")]
    TermFullscreen,
    #[strum(serialize = "TERM_CLEAR")]
    TermClear,
    #[strum(serialize = "TERM_FIND")]
    TermFind,
    #[strum(serialize = "TERM_COPY")]
    TermCopy,
    #[strum(serialize = "TERM_PASTE")]
    TermPaste,
    #[strum(serialize = "TERM_SELECT_ALL")]
    TermSelectAll,
    #[strum(serialize = "TERM_ZOOM_IN")]
    TermZoomIn,
    #[strum(serialize = "TERM_ZOOM_OUT")]
    TermZoomOut,
    #[strum(serialize = "TERM_ZOOM_RESET")]
    TermZoomReset,
    #[strum(serialize = "TERM_TAB_1")]
    TermTab1,
    #[strum(serialize = "TERM_TAB_2")]
    TermTab2,
    #[strum(serialize = "TERM_TAB_3")]
    TermTab3,
    #[strum(serialize = "TERM_TAB_4")]
    TermTab4,
    #[strum(serialize = "TERM_TAB_5")]
    TermTab5,
}

/// What a custom keycode does, as data
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomBehavior {
    /// `tap` if released before the tapping term, `hold` otherwise
    TapHold { tap: Chord, hold: Chord },
    /// `shifted` while Shift is held, `plain` otherwise
    ShiftSensitive { shifted: Chord, plain: Chord },
    /// Bare `arrow` while Ctrl is held, `plain` otherwise
    CtrlArrow { arrow: Key, plain: Chord },
    /// One fixed chord on press
    Chord(Chord),
}

const CMD_SHIFT: Mods = Mods::LGUI.union(Mods::LSFT);
const CMD_ALT: Mods = Mods::LGUI.union(Mods::LALT);

impl CustomKeycode {
    pub const fn behavior(self) -> CustomBehavior {
        use CustomBehavior as B;
        use CustomKeycode::*;

        match self {
            PSpotlight => B::TapHold {
                tap: Chord::plain(Key::P),
                hold: Chord::cmd(Key::SPACE),
            },

            CtrlH => B::CtrlArrow {
                arrow: Key::LEFT,
                plain: Chord::plain(Key::MINUS),
            },
            CtrlJ => B::CtrlArrow {
                arrow: Key::DOWN,
                plain: Chord::shifted(Key::MINUS),
            },
            CtrlK => B::CtrlArrow {
                arrow: Key::UP,
                plain: Chord::shifted(Key::LEFT_BRACKET),
            },
            CtrlL => B::CtrlArrow {
                arrow: Key::RIGHT,
                plain: Chord::shifted(Key::RIGHT_BRACKET),
            },

            Sym1 => shift_sensitive(Key::N1),
            Sym2 => shift_sensitive(Key::N2),
            Sym3 => shift_sensitive(Key::N3),
            Sym4 => shift_sensitive(Key::N4),
            Sym5 => shift_sensitive(Key::N5),
            Sym6 => shift_sensitive(Key::N6),
            Sym7 => shift_sensitive(Key::N7),
            Sym8 => shift_sensitive(Key::N8),
            Sym9 => shift_sensitive(Key::N9),
            Sym0 => shift_sensitive(Key::N0),

            TermNewTab => B::Chord(Chord::cmd(Key::T)),
            TermCloseTab => B::Chord(Chord::cmd(Key::W)),
            TermNextTab => B::Chord(Chord::new(CMD_SHIFT, Key::RIGHT_BRACKET)),
            TermPrevTab => B::Chord(Chord::new(CMD_SHIFT, Key::LEFT_BRACKET)),
            TermNewWindow => B::Chord(Chord::cmd(Key::N)),
            TermSplitVertical => B::Chord(Chord::cmd(Key::D)),
            TermSplitHorizontal => B::Chord(Chord::new(CMD_SHIFT, Key::D)),
            TermNextPane => B::Chord(Chord::cmd(Key::RIGHT_BRACKET)),
            TermPrevPane => B::Chord(Chord::cmd(Key::LEFT_BRACKET)),
            TermPaneLeft => B::Chord(Chord::new(CMD_ALT, Key::LEFT)),
            TermPaneDown => B::Chord(Chord::new(CMD_ALT, Key::DOWN)),
            TermPaneUp => B::Chord(Chord::new(CMD_ALT, Key::UP)),
            TermPaneRight => B::Chord(Chord::new(CMD_ALT, Key::RIGHT)),
            TermMaximizePane => B::Chord(Chord::new(CMD_SHIFT, Key::ENTER)),
            TermFullscreen => B::Chord(Chord::cmd(Key::ENTER)),
            TermClear => B::Chord(Chord::cmd(Key::K)),
            TermFind => B::Chord(Chord::cmd(Key::F)),
            TermCopy => B::Chord(Chord::cmd(Key::C)),
            TermPaste => B::Chord(Chord::cmd(Key::V)),
            TermSelectAll => B::Chord(Chord::cmd(Key::A)),
            TermZoomIn => B::Chord(Chord::cmd(Key::EQUAL)),
            TermZoomOut => B::Chord(Chord::cmd(Key::MINUS)),
            TermZoomReset => B::Chord(Chord::cmd(Key::N0)),
            TermTab1 => B::Chord(Chord::cmd(Key::N1)),
            TermTab2 => B::Chord(Chord::cmd(Key::N2)),
            TermTab3 => B::Chord(Chord::cmd(Key::N3)),
            TermTab4 => B::Chord(Chord::cmd(Key::N4)),
            TermTab5 => B::Chord(Chord::cmd(Key::N5)),
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self.behavior(), CustomBehavior::Chord(_))
    }

    /// Name as it appears in keymap tables and scripts
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// Digit on shift, the digit's shifted symbol otherwise
const fn shift_sensitive(digit: Key) -> CustomBehavior {
    CustomBehavior::ShiftSensitive {
        shifted: Chord::plain(digit),
        plain: Chord::shifted(digit),
    }
}
