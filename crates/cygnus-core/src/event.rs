// Cygnus Key Events
// One record per physical press or release, as delivered by the firmware

use std::fmt;

/// Matrix position of a key in the logical layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KeyPos {
    pub row: u8,
    pub col: u8,
}

impl KeyPos {
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for KeyPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A single physical transition.
///
/// `time` is the firmware's 16-bit millisecond timer at scan time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: KeyPos,
    pub pressed: bool,
    pub time: u16,
}

impl KeyEvent {
    pub const fn press(key: KeyPos, time: u16) -> Self {
        Self {
            key,
            pressed: true,
            time,
        }
    }

    pub const fn release(key: KeyPos, time: u16) -> Self {
        Self {
            key,
            pressed: false,
            time,
        }
    }
}

/// What the firmware hands to `process_record_user`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRecord {
    pub event: KeyEvent,
}

impl KeyRecord {
    pub const fn new(event: KeyEvent) -> Self {
        Self { event }
    }

    /// Record for a press at an unspecified position
    pub const fn pressed(time: u16) -> Self {
        Self::new(KeyEvent::press(KeyPos::new(0, 0), time))
    }

    /// Record for a release at an unspecified position
    pub const fn released(time: u16) -> Self {
        Self::new(KeyEvent::release(KeyPos::new(0, 0), time))
    }

    pub const fn is_pressed(&self) -> bool {
        self.event.pressed
    }
}

impl fmt::Display for KeyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let action = if self.event.pressed { "press" } else { "release" };
        write!(f, "{} {} @{}ms", action, self.event.key, self.event.time)
    }
}
