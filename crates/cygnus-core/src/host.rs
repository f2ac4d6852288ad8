// Cygnus Host Interface
// The firmware primitives the dispatcher calls into, and an in-memory host

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::output::{expand_tap, HidEvent};
use crate::{Chord, Key, Mods};

/// Firmware services available to keymap callbacks.
///
/// The live modifier register and the millisecond timer belong to the host;
/// callbacks receive them through this trait instead of reaching for globals.
pub trait Host {
    /// Send one keystroke without touching modifiers
    fn tap_code(&mut self, key: Key);

    /// Send one keystroke with the chord's modifiers registered around it
    fn tap_code16(&mut self, chord: Chord);

    fn get_mods(&self) -> Mods;

    fn set_mods(&mut self, mods: Mods);

    fn clear_mods(&mut self) {
        self.set_mods(Mods::NONE);
    }

    /// 16-bit millisecond clock, wraps every ~65 seconds
    fn timer_read(&self) -> u16;

    fn timer_elapsed(&self, last: u16) -> u16 {
        self.timer_read().wrapping_sub(last)
    }

    /// Send a chord through whichever primitive fits it
    fn send(&mut self, chord: Chord) {
        if chord.is_plain() {
            self.tap_code(chord.key());
        } else {
            self.tap_code16(chord);
        }
    }
}

/// Clears the live modifiers and puts them back when dropped.
///
/// Restoration happens on every exit path, so a held Ctrl can never be left
/// looking released.
pub struct ModsGuard<'a, H: Host + ?Sized> {
    host: &'a mut H,
    saved: Mods,
}

impl<'a, H: Host + ?Sized> ModsGuard<'a, H> {
    pub fn clear(host: &'a mut H) -> Self {
        let saved = host.get_mods();
        host.clear_mods();
        Self { host, saved }
    }

    /// The register contents that will be restored
    pub fn saved(&self) -> Mods {
        self.saved
    }
}

impl<H: Host + ?Sized> Deref for ModsGuard<'_, H> {
    type Target = H;

    fn deref(&self) -> &H {
        &*self.host
    }
}

impl<H: Host + ?Sized> DerefMut for ModsGuard<'_, H> {
    fn deref_mut(&mut self) -> &mut H {
        &mut *self.host
    }
}

impl<H: Host + ?Sized> Drop for ModsGuard<'_, H> {
    fn drop(&mut self) {
        self.host.set_mods(self.saved);
    }
}

/// One keystroke as seen by the computer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    /// What the callback asked for
    pub chord: Chord,
    /// Live modifier register at the moment of sending
    pub live_mods: Mods,
}

impl Report {
    /// The chord the computer receives: requested modifiers plus held ones
    pub fn effective(&self) -> Chord {
        self.chord.with_mods(self.live_mods)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.effective())
    }
}

/// In-memory host with a settable clock and modifier register.
///
/// Records every emitted keystroke and its HID expansion.
#[derive(Debug, Clone, Default)]
pub struct SimulatedHost {
    mods: Mods,
    now: u16,
    reports: Vec<Report>,
    hid: Vec<HidEvent>,
}

impl SimulatedHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_time(&mut self, now: u16) {
        self.now = now;
    }

    pub fn advance(&mut self, ms: u16) {
        self.now = self.now.wrapping_add(ms);
    }

    /// Physically hold modifiers
    pub fn hold(&mut self, mods: Mods) {
        self.mods |= mods;
    }

    /// Physically let go of modifiers
    pub fn lift(&mut self, mods: Mods) {
        self.mods = self.mods.difference(mods);
    }

    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Drain the recorded keystrokes
    pub fn take_reports(&mut self) -> Vec<Report> {
        self.hid.clear();
        std::mem::take(&mut self.reports)
    }

    /// Keys the computer received, requested modifiers only
    pub fn sent_chords(&self) -> Vec<Chord> {
        self.reports.iter().map(|r| r.chord).collect()
    }

    pub fn hid_events(&self) -> &[HidEvent] {
        &self.hid
    }

    fn record(&mut self, chord: Chord) {
        let report = Report {
            chord,
            live_mods: self.mods,
        };
        log::trace!("host: send {}", report);
        self.hid.extend(expand_tap(chord, self.mods).events());
        self.reports.push(report);
    }
}

impl Host for SimulatedHost {
    fn tap_code(&mut self, key: Key) {
        self.record(Chord::plain(key));
    }

    fn tap_code16(&mut self, chord: Chord) {
        self.record(chord);
    }

    fn get_mods(&self) -> Mods {
        self.mods
    }

    fn set_mods(&mut self, mods: Mods) {
        self.mods = mods;
    }

    fn timer_read(&self) -> u16 {
        self.now
    }
}
