// Cygnus Keymap Table Tests
//
// Layout-wide checks over the compiled layer tables, combos and encoder map.

use cygnus_core::{
    find_combo, Chord, CustomKeycode, EncoderDirection, Key, KeyPos, Keycode, Keymap, Layer,
    LayerState, Mods, MouseKey, Variant, COLS, COMBOS, ROWS,
};
use strum::IntoEnumIterator;

fn all_entries(keymap: &Keymap) -> Vec<(Layer, KeyPos, Keycode)> {
    let mut entries = Vec::new();
    for layer in keymap.variant().layers() {
        for row in 0..ROWS as u8 {
            for col in 0..COLS as u8 {
                let pos = KeyPos::new(row, col);
                if let Some(keycode) = keymap.keycode_at(layer, pos) {
                    entries.push((layer, pos, keycode));
                }
            }
        }
    }
    entries
}

#[test]
fn test_outer_columns_are_dead() {
    for variant in Variant::iter() {
        let keymap = Keymap::new(variant);
        for (layer, pos, keycode) in all_entries(&keymap) {
            let outer = pos.col == 0 || pos.col == COLS as u8 - 1;
            let off_thumb = pos.row == 3 && !(3..9).contains(&pos.col);
            if outer || off_thumb {
                assert_eq!(keycode, Keycode::No, "{} {} should be dead", layer, pos);
            }
        }
    }
}

#[test]
fn test_every_custom_key_is_placed() {
    let standard = Keymap::new(Variant::Standard);
    let terminal = Keymap::new(Variant::Terminal);

    for custom in CustomKeycode::iter() {
        let keycode = Keycode::Custom(custom);
        let placed = if custom.is_terminal() {
            terminal.positions_of(keycode)
        } else {
            standard.positions_of(keycode)
        };
        assert_eq!(placed.len(), 1, "{} placed {} times", custom, placed.len());
    }
}

#[test]
fn test_terminal_keys_only_on_terminal_layer() {
    let keymap = Keymap::new(Variant::Terminal);
    for (layer, _, keycode) in all_entries(&keymap) {
        if let Keycode::Custom(custom) = keycode {
            assert_eq!(custom.is_terminal(), layer == Layer::Terminal, "{}", custom);
        }
    }
}

#[test]
fn test_variants_differ_only_on_top_layer_and_its_key() {
    let standard = all_entries(&Keymap::new(Variant::Standard));
    let terminal = all_entries(&Keymap::new(Variant::Terminal));
    assert_eq!(standard.len(), terminal.len());

    let differing: Vec<_> = standard
        .iter()
        .zip(terminal.iter())
        .filter(|(s, t)| s.2 != t.2)
        .map(|(s, _)| (s.0, s.1))
        .collect();
    assert!(differing
        .iter()
        .all(|(layer, pos)| *layer == Layer::Adjust || (*layer == Layer::Raise && *pos == KeyPos::new(3, 5))));
}

#[test]
fn test_base_thumb_cluster() {
    let keymap = Keymap::default();
    let thumbs: Vec<String> = (3..9)
        .map(|col| {
            keymap
                .keycode_at(Layer::Base, KeyPos::new(3, col))
                .map(|k| k.to_string())
                .unwrap_or_default()
        })
        .collect();
    assert_eq!(
        thumbs,
        vec![
            "LCTL_T(TAB)",
            "LEFT_SHIFT",
            "LT(LOWER, ENTER)",
            "LT(RAISE, SPACE)",
            "BACKSPACE",
            "LCMD_T(ESCAPE)"
        ]
    );
}

#[test]
fn test_lower_mouse_and_shortcuts() {
    let keymap = Keymap::default();
    assert_eq!(
        keymap.keycode_at(Layer::Lower, KeyPos::new(1, 6)),
        Some(Keycode::Mouse(MouseKey::CursorLeft))
    );
    assert_eq!(
        keymap.keycode_at(Layer::Lower, KeyPos::new(2, 1)),
        Some(Keycode::Chord(Chord::cmd(Key::Z)))
    );
}

#[test]
fn test_function_screenshots() {
    let keymap = Keymap::default();
    let shots: Vec<Keycode> = (8..11)
        .filter_map(|col| keymap.keycode_at(Layer::Function, KeyPos::new(2, col)))
        .collect();
    let cmd_shift = Mods::LGUI | Mods::LSFT;
    assert_eq!(
        shots,
        vec![
            Keycode::Chord(Chord::new(cmd_shift, Key::N3)),
            Keycode::Chord(Chord::new(cmd_shift, Key::N4)),
            Keycode::Chord(Chord::new(cmd_shift, Key::N5)),
        ]
    );
}

#[test]
fn test_adjust_reaches_function_layer() {
    let keymap = Keymap::new(Variant::Standard);
    let toggles = keymap.positions_of(Keycode::Toggle(Layer::Function));
    assert_eq!(toggles, vec![(Layer::Adjust, KeyPos::new(3, 3))]);

    let terminal = Keymap::new(Variant::Terminal);
    assert_eq!(
        terminal.positions_of(Keycode::Toggle(Layer::Function)),
        vec![(Layer::Terminal, KeyPos::new(3, 3))]
    );
}

#[test]
fn test_combos_use_base_keys() {
    let keymap = Keymap::default();
    assert_eq!(COMBOS.len(), 3);
    for combo in COMBOS.iter() {
        for key in combo.keys {
            assert!(
                keymap
                    .positions_of(*key)
                    .iter()
                    .any(|(layer, _)| *layer == Layer::Base),
                "{} not on base",
                key
            );
        }
        assert_eq!(find_combo(combo.keys), Some(combo));
    }
}

#[test]
fn test_encoder_in_tri_layer() {
    let keymap = Keymap::new(Variant::Terminal);
    let state = LayerState::with(&[Layer::Lower, Layer::Raise, Layer::Terminal]);
    assert_eq!(
        keymap.encoder_keycode(state, EncoderDirection::Clockwise),
        Keycode::Basic(Key::AUDIO_VOL_UP)
    );
    let raise = LayerState::with(&[Layer::Raise]);
    assert_eq!(
        keymap.encoder_keycode(raise, EncoderDirection::CounterClockwise),
        Keycode::Basic(Key::BRIGHTNESS_DOWN)
    );
}

#[test]
fn test_every_entry_parses_back_from_its_name() {
    for variant in Variant::iter() {
        let keymap = Keymap::new(variant);
        for (layer, pos, keycode) in all_entries(&keymap) {
            let name = keycode.to_string();
            assert_eq!(
                name.parse::<Keycode>(),
                Ok(keycode),
                "{} {} {} does not parse back",
                layer,
                pos,
                name
            );
        }
    }
}
