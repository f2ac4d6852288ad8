// Cygnus Layers
// Named layers, the active-layer bitmask and the tri-layer reducer

use std::fmt;

use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::keymap::Variant;

/// Number of layer slots a single keymap variant occupies
pub const LAYER_SLOTS: usize = 5;

/// A named layer.
///
/// `Adjust` and `Terminal` share slot 4: the standard keymap puts the adjust
/// layer there, the terminal keymap puts the terminal-control layer there.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Layer {
    Base,
    Lower,
    Raise,
    Function,
    Adjust,
    Terminal,
}

impl Layer {
    /// Slot index in the keymap table and bit index in [`LayerState`]
    pub const fn index(self) -> u8 {
        match self {
            Layer::Base => 0,
            Layer::Lower => 1,
            Layer::Raise => 2,
            Layer::Function => 3,
            Layer::Adjust | Layer::Terminal => 4,
        }
    }

    pub const fn mask(self) -> u32 {
        1 << self.index()
    }

    /// The layer occupying `index` in the given keymap variant
    pub fn from_index(index: u8, variant: Variant) -> Option<Layer> {
        match index {
            0 => Some(Layer::Base),
            1 => Some(Layer::Lower),
            2 => Some(Layer::Raise),
            3 => Some(Layer::Function),
            4 => Some(variant.top_layer()),
            _ => None,
        }
    }
}

/// The set of active layers as a bitmask.
///
/// The base layer is always a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayerState(u32);

impl LayerState {
    /// Only the base layer active
    pub const fn new() -> Self {
        Self(Layer::Base.mask())
    }

    pub const fn from_bits(bits: u32) -> Self {
        Self(bits | Layer::Base.mask())
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_on(self, layer: Layer) -> bool {
        self.0 & layer.mask() != 0
    }

    /// Build a state from a list of layers (base is added implicitly)
    pub fn with(layers: &[Layer]) -> Self {
        layers
            .iter()
            .fold(Self::new(), |state, layer| state.activate(*layer))
    }

    pub const fn activate(self, layer: Layer) -> Self {
        Self(self.0 | layer.mask())
    }

    pub const fn deactivate(self, layer: Layer) -> Self {
        Self::from_bits(self.0 & !layer.mask())
    }

    pub const fn toggle(self, layer: Layer) -> Self {
        Self::from_bits(self.0 ^ layer.mask())
    }

    /// Highest active slot, the one whose entries take precedence
    pub const fn highest(self) -> u8 {
        31 - self.0.leading_zeros() as u8
    }

    /// Active layers, lowest slot first
    pub fn layers(self, variant: Variant) -> Vec<Layer> {
        (0..LAYER_SLOTS as u8)
            .filter(|index| self.0 & (1 << index) != 0)
            .filter_map(|index| Layer::from_index(index, variant))
            .collect()
    }
}

impl Default for LayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#07b}", self.0)
    }
}

/// Force `layer3` on while both `layer1` and `layer2` are active, off otherwise.
///
/// Any other layer passes through unchanged.
pub fn update_tri_layer_state(
    state: LayerState,
    layer1: Layer,
    layer2: Layer,
    layer3: Layer,
) -> LayerState {
    let mask12 = layer1.mask() | layer2.mask();
    let mask3 = layer3.mask();
    if state.bits() & mask12 == mask12 {
        LayerState::from_bits(state.bits() | mask3)
    } else {
        LayerState::from_bits(state.bits() & !mask3)
    }
}

/// Layer-state hook: Lower + Raise reaches the variant's top layer
pub fn layer_state_set_user(state: LayerState, variant: Variant) -> LayerState {
    let next = update_tri_layer_state(state, Layer::Lower, Layer::Raise, variant.top_layer());
    if next != state {
        log::debug!("tri-layer: {} -> {}", state, next);
    }
    next
}
