// Cygnus Tap Expansion
// Turns one emitted chord into HID press/release events

use smallvec::SmallVec;

use crate::{Chord, Key, Mods};

/// A single HID-level transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HidEvent {
    Press(Key),
    Release(Key),
}

/// Events for one tap, in the order the firmware sends them
pub type HidEvents = SmallVec<[HidEvent; 8]>;

/// Sequence of actions to send for one chord tap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapSequence {
    /// Modifier keys to press before the main key
    pub modifiers_to_press: Vec<Key>,
    /// The main key of the chord
    pub main_key: Key,
    /// Modifier keys to release after the main key (reverse press order)
    pub modifiers_to_release: Vec<Key>,
}

impl TapSequence {
    /// Check if this sequence requires any modifier changes
    pub fn needs_modifier_changes(&self) -> bool {
        !self.modifiers_to_press.is_empty() || !self.modifiers_to_release.is_empty()
    }

    /// Get the total number of HID events in this sequence
    pub fn total_actions(&self) -> usize {
        self.modifiers_to_press.len() + 2 + self.modifiers_to_release.len()
    }

    pub fn events(&self) -> HidEvents {
        let mut events = HidEvents::new();
        events.extend(self.modifiers_to_press.iter().copied().map(HidEvent::Press));
        events.push(HidEvent::Press(self.main_key));
        events.push(HidEvent::Release(self.main_key));
        events.extend(self.modifiers_to_release.iter().copied().map(HidEvent::Release));
        events
    }
}

/// Calculate the HID events needed to tap `chord` on top of `live` modifiers
///
/// Modifiers already held in the live register are reused rather than
/// pressed again. Modifiers the chord adds are registered around the main key
/// and unregistered right after it, so the live register is unchanged once
/// the sequence has been sent. Held modifiers the chord does not name stay
/// held; the firmware does not lift them.
pub fn expand_tap(chord: Chord, live: Mods) -> TapSequence {
    let added = chord.mods().difference(live);
    let modifiers_to_press: Vec<Key> = added.keys().collect();
    let modifiers_to_release = modifiers_to_press.iter().rev().copied().collect();

    TapSequence {
        modifiers_to_press,
        main_key: chord.key(),
        modifiers_to_release,
    }
}
