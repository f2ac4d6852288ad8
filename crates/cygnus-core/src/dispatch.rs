// Cygnus Custom Key Dispatcher
// process_record_user: decides what each custom keycode sends

use crate::custom::{CustomBehavior, CustomKeycode};
use crate::host::{Host, ModsGuard};
use crate::{Chord, Key, KeyRecord, Keycode, Mods};

/// Default tap/hold threshold in milliseconds
pub const TAPPING_TERM: u16 = 200;

/// Per-keyboard state for the custom keycodes.
///
/// The only state is the press timestamp of the tap/hold key. It is written
/// on press and read on the next release; a release without a matching press
/// reads whatever the last press left behind.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    tapping_term: u16,
    tap_hold_timer: u16,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::with_tapping_term(TAPPING_TERM)
    }

    pub fn with_tapping_term(tapping_term: u16) -> Self {
        Self {
            tapping_term,
            tap_hold_timer: 0,
        }
    }

    pub fn tapping_term(&self) -> u16 {
        self.tapping_term
    }

    /// Handle one key event.
    ///
    /// Returns `false` when the event was consumed here and `true` when the
    /// firmware should apply its default handling (any non-custom keycode).
    pub fn process_record_user<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        keycode: Keycode,
        record: &KeyRecord,
    ) -> bool {
        let Keycode::Custom(custom) = keycode else {
            return true;
        };
        log::trace!("custom key {} {}", custom, record);

        match custom.behavior() {
            CustomBehavior::TapHold { tap, hold } => {
                self.tap_hold(host, custom, tap, hold, record);
            }
            CustomBehavior::ShiftSensitive { shifted, plain } => {
                if record.is_pressed() {
                    let chord = if host.get_mods().intersects(Mods::SHIFT) {
                        shifted
                    } else {
                        plain
                    };
                    host.send(chord);
                }
            }
            CustomBehavior::CtrlArrow { arrow, plain } => {
                if record.is_pressed() {
                    ctrl_arrow(host, arrow, plain);
                }
            }
            CustomBehavior::Chord(chord) => {
                if record.is_pressed() {
                    host.send(chord);
                }
            }
        }
        false
    }

    fn tap_hold<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        custom: CustomKeycode,
        tap: Chord,
        hold: Chord,
        record: &KeyRecord,
    ) {
        if record.is_pressed() {
            self.tap_hold_timer = host.timer_read();
            return;
        }

        let elapsed = host.timer_elapsed(self.tap_hold_timer);
        if elapsed < self.tapping_term {
            log::debug!("{} tapped after {}ms: {}", custom, elapsed, tap);
            host.send(tap);
        } else {
            log::debug!("{} held for {}ms: {}", custom, elapsed, hold);
            host.send(hold);
        }
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Bare arrow while Ctrl is held, `plain` otherwise
fn ctrl_arrow<H: Host + ?Sized>(host: &mut H, arrow: Key, plain: Chord) {
    if host.get_mods().intersects(Mods::CTRL) {
        let mut cleared = ModsGuard::clear(host);
        cleared.tap_code(arrow);
    } else {
        host.send(plain);
    }
}
