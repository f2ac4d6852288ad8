// Cygnus Keymap
// Static layer tables, combos, encoder map and the lookups over them

mod combos;
mod encoder;
mod layers;

use serde::Deserialize;
use strum_macros::{Display, EnumIter, EnumString};

use crate::event::KeyPos;
use crate::keycode::Keycode;
use crate::layer::{Layer, LayerState, LAYER_SLOTS};

pub use combos::{find_combo, Combo, COMBOS};
pub use encoder::{encoder_action, EncoderAction, EncoderDirection};
pub use layers::{LayerTable, COLS, ROWS, THUMB_COL, THUMB_ROW};

/// Which layer sits on top of Lower + Raise
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Variant {
    /// System controls on the top layer
    #[default]
    Standard,
    /// Terminal tab/pane/zoom shortcuts on the top layer
    Terminal,
}

impl Variant {
    pub const fn top_layer(self) -> Layer {
        match self {
            Variant::Standard => Layer::Adjust,
            Variant::Terminal => Layer::Terminal,
        }
    }

    /// Layers present in this variant, lowest slot first
    pub fn layers(self) -> [Layer; LAYER_SLOTS] {
        [
            Layer::Base,
            Layer::Lower,
            Layer::Raise,
            Layer::Function,
            self.top_layer(),
        ]
    }

    /// Whether `layer` exists in this variant
    pub fn has_layer(self, layer: Layer) -> bool {
        match layer {
            Layer::Adjust | Layer::Terminal => layer == self.top_layer(),
            _ => true,
        }
    }
}

/// A compiled keymap: five layer tables selected by variant
#[derive(Debug, Clone, Copy)]
pub struct Keymap {
    variant: Variant,
    layers: &'static [LayerTable; LAYER_SLOTS],
}

impl Keymap {
    pub fn new(variant: Variant) -> Self {
        let layers = match variant {
            Variant::Standard => &layers::STANDARD_LAYERS,
            Variant::Terminal => &layers::TERMINAL_LAYERS,
        };
        Self { variant, layers }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// The table for `layer`, or `None` when the layer is not part of this variant
    pub fn table(&self, layer: Layer) -> Option<&'static LayerTable> {
        if !self.variant.has_layer(layer) {
            return None;
        }
        let layers: &'static [LayerTable; LAYER_SLOTS] = self.layers;
        Some(&layers[layer.index() as usize])
    }

    /// Raw entry at `pos` on `layer`, transparency not resolved
    pub fn keycode_at(&self, layer: Layer, pos: KeyPos) -> Option<Keycode> {
        let table = self.table(layer)?;
        table
            .get(pos.row as usize)
            .and_then(|row| row.get(pos.col as usize))
            .copied()
    }

    /// Effective keycode at `pos`: the highest active layer whose entry is
    /// not transparent. Falls back to `No` off the grid.
    pub fn resolve(&self, state: LayerState, pos: KeyPos) -> Keycode {
        state
            .layers(self.variant)
            .into_iter()
            .rev()
            .filter_map(|layer| self.keycode_at(layer, pos))
            .find(|keycode| *keycode != Keycode::Transparent)
            .unwrap_or(Keycode::No)
    }

    /// Every position holding `keycode`, lowest layer first
    pub fn positions_of(&self, keycode: Keycode) -> Vec<(Layer, KeyPos)> {
        let mut found = Vec::new();
        for layer in self.variant.layers() {
            let Some(table) = self.table(layer) else {
                continue;
            };
            for (row, entries) in table.iter().enumerate() {
                for (col, entry) in entries.iter().enumerate() {
                    if *entry == keycode {
                        found.push((layer, KeyPos::new(row as u8, col as u8)));
                    }
                }
            }
        }
        found
    }

    /// Encoder keycode for the highest active layer
    pub fn encoder_keycode(&self, state: LayerState, direction: EncoderDirection) -> Keycode {
        let layer = state
            .layers(self.variant)
            .last()
            .copied()
            .unwrap_or(Layer::Base);
        encoder_action(layer).keycode(direction)
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new(Variant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::custom::CustomKeycode;
    use crate::keycode::{kc, mo};
    use crate::Key;

    fn pos(row: u8, col: u8) -> KeyPos {
        KeyPos::new(row, col)
    }

    #[test]
    fn test_variant_top_layer() {
        assert_eq!(Variant::Standard.top_layer(), Layer::Adjust);
        assert_eq!(Variant::Terminal.top_layer(), Layer::Terminal);
        assert!(Variant::Standard.has_layer(Layer::Adjust));
        assert!(!Variant::Standard.has_layer(Layer::Terminal));
        assert!(Variant::Terminal.has_layer(Layer::Raise));
    }

    #[test]
    fn test_variant_from_str() {
        assert_eq!("terminal".parse::<Variant>().unwrap(), Variant::Terminal);
        assert_eq!("Standard".parse::<Variant>().unwrap(), Variant::Standard);
        assert_eq!(Variant::Terminal.to_string(), "terminal");
    }

    #[test]
    fn test_base_layer_positions() {
        let keymap = Keymap::new(Variant::Standard);
        assert_eq!(keymap.keycode_at(Layer::Base, pos(0, 1)), Some(kc(Key::Q)));
        assert_eq!(
            keymap.keycode_at(Layer::Base, pos(0, 10)),
            Some(Keycode::Custom(CustomKeycode::PSpotlight))
        );
        assert_eq!(keymap.keycode_at(Layer::Base, pos(0, 0)), Some(Keycode::No));
        assert_eq!(keymap.keycode_at(Layer::Base, pos(4, 0)), None);
        assert_eq!(keymap.keycode_at(Layer::Base, pos(0, 12)), None);
    }

    #[test]
    fn test_top_layer_depends_on_variant() {
        let standard = Keymap::new(Variant::Standard);
        let terminal = Keymap::new(Variant::Terminal);
        assert!(standard.table(Layer::Terminal).is_none());
        assert!(terminal.table(Layer::Adjust).is_none());

        let raise_thumb = pos(THUMB_ROW as u8, THUMB_COL as u8 + 2);
        assert_eq!(
            standard.keycode_at(Layer::Raise, raise_thumb),
            Some(mo(Layer::Adjust))
        );
        assert_eq!(
            terminal.keycode_at(Layer::Raise, raise_thumb),
            Some(mo(Layer::Terminal))
        );
    }

    #[test]
    fn test_resolve_falls_through_transparent() {
        let keymap = Keymap::new(Variant::Standard);
        let state = LayerState::with(&[Layer::Lower]);
        // Lower leaves its two inner thumbs transparent
        let enter_thumb = pos(3, 5);
        assert_eq!(keymap.keycode_at(Layer::Lower, enter_thumb), Some(Keycode::Transparent));
        assert_eq!(
            keymap.resolve(state, enter_thumb),
            keymap.keycode_at(Layer::Base, enter_thumb).unwrap()
        );
        assert_eq!(keymap.resolve(state, pos(0, 1)), kc(Key::N1));
    }

    #[test]
    fn test_resolve_highest_layer_wins() {
        let keymap = Keymap::new(Variant::Standard);
        let state = LayerState::with(&[Layer::Lower, Layer::Raise]);
        assert_eq!(
            keymap.resolve(state, pos(0, 1)),
            Keycode::Custom(CustomKeycode::Sym1)
        );
        let state = state.activate(Layer::Adjust);
        assert_eq!(keymap.resolve(state, pos(0, 10)), kc(Key::SYSTEM_SLEEP));
        // No is opaque
        assert_eq!(keymap.resolve(state, pos(0, 1)), Keycode::No);
    }

    #[test]
    fn test_resolve_off_grid() {
        let keymap = Keymap::default();
        assert_eq!(keymap.resolve(LayerState::new(), pos(9, 9)), Keycode::No);
    }

    #[test]
    fn test_positions_of() {
        let keymap = Keymap::new(Variant::Standard);
        let semicolons = keymap.positions_of(kc(Key::SEMICOLON));
        assert_eq!(
            semicolons,
            vec![(Layer::Base, pos(1, 10)), (Layer::Raise, pos(1, 10))]
        );
        assert!(keymap
            .positions_of(Keycode::Custom(CustomKeycode::TermCopy))
            .is_empty());
        let terminal = Keymap::new(Variant::Terminal);
        assert_eq!(
            terminal.positions_of(Keycode::Custom(CustomKeycode::TermCopy)),
            vec![(Layer::Terminal, pos(2, 2))]
        );
    }

    #[test]
    fn test_encoder_follows_highest_layer() {
        let keymap = Keymap::new(Variant::Standard);
        assert_eq!(
            keymap.encoder_keycode(LayerState::new(), EncoderDirection::Clockwise),
            kc(Key::AUDIO_VOL_UP)
        );
        let lower = LayerState::with(&[Layer::Lower]);
        assert_eq!(
            keymap.encoder_keycode(lower, EncoderDirection::CounterClockwise),
            kc(Key::PAGE_UP)
        );
    }
}
