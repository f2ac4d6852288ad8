// Cygnus Encoder Map
// Rotary encoder keycodes per layer

use crate::keycode::{kc, Keycode};
use crate::{Key, Layer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderDirection {
    CounterClockwise,
    Clockwise,
}

/// Keycodes sent for one detent in each direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncoderAction {
    pub ccw: Keycode,
    pub cw: Keycode,
}

impl EncoderAction {
    const fn new(ccw: Key, cw: Key) -> Self {
        Self {
            ccw: kc(ccw),
            cw: kc(cw),
        }
    }

    pub fn keycode(&self, direction: EncoderDirection) -> Keycode {
        match direction {
            EncoderDirection::CounterClockwise => self.ccw,
            EncoderDirection::Clockwise => self.cw,
        }
    }
}

pub const fn encoder_action(layer: Layer) -> EncoderAction {
    match layer {
        Layer::Base | Layer::Adjust | Layer::Terminal => {
            EncoderAction::new(Key::AUDIO_VOL_DOWN, Key::AUDIO_VOL_UP)
        }
        Layer::Lower => EncoderAction::new(Key::PAGE_UP, Key::PAGE_DOWN),
        Layer::Raise => EncoderAction::new(Key::BRIGHTNESS_DOWN, Key::BRIGHTNESS_UP),
        Layer::Function => EncoderAction::new(Key::MEDIA_PREV_TRACK, Key::MEDIA_NEXT_TRACK),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoder_per_layer() {
        let raise = encoder_action(Layer::Raise);
        assert_eq!(raise.keycode(EncoderDirection::Clockwise), kc(Key::BRIGHTNESS_UP));
        assert_eq!(
            encoder_action(Layer::Function).keycode(EncoderDirection::CounterClockwise),
            kc(Key::MEDIA_PREV_TRACK)
        );
        assert_eq!(encoder_action(Layer::Terminal), encoder_action(Layer::Base));
    }
}
