// Cygnus End-to-End Test Scenarios
//
// Typing sessions driven through the dispatcher, the layer reducer and the
// simulated host, checked against what the computer would receive.
//
// Run with: cargo test -p cygnus-core --test e2e_scenarios

use cygnus_core::{
    layer_state_set_user, parse_script, BuildConfig, Chord, CustomKeycode, Dispatcher, HidEvent,
    Host, Key, KeyRecord, Keycode, Layer, LayerState, Mods, SimulatedHost, Simulator, Variant,
};
use strum::IntoEnumIterator;

// =========================================================================
// Test Helpers
// =========================================================================

/// Press at `at`, release at `until`
fn tap_at(
    dispatcher: &mut Dispatcher,
    host: &mut SimulatedHost,
    custom: CustomKeycode,
    at: u16,
    until: u16,
) {
    host.set_time(at);
    let handled = dispatcher.process_record_user(host, Keycode::Custom(custom), &KeyRecord::pressed(at));
    assert!(!handled);
    host.set_time(until);
    let handled =
        dispatcher.process_record_user(host, Keycode::Custom(custom), &KeyRecord::released(until));
    assert!(!handled);
}

fn effective(host: &SimulatedHost) -> Vec<Chord> {
    host.reports().iter().map(|r| r.effective()).collect()
}

// =========================================================================
// Tap / hold
// =========================================================================

#[test]
fn test_spotlight_quick_tap_types_p() {
    let mut dispatcher = Dispatcher::new();
    let mut host = SimulatedHost::new();

    tap_at(&mut dispatcher, &mut host, CustomKeycode::PSpotlight, 100, 150);

    assert_eq!(effective(&host), vec![Chord::plain(Key::P)]);
    assert_eq!(
        host.hid_events(),
        &[HidEvent::Press(Key::P), HidEvent::Release(Key::P)]
    );
}

#[test]
fn test_spotlight_long_hold_opens_spotlight() {
    let mut dispatcher = Dispatcher::new();
    let mut host = SimulatedHost::new();

    tap_at(&mut dispatcher, &mut host, CustomKeycode::PSpotlight, 100, 400);

    assert_eq!(effective(&host), vec![Chord::cmd(Key::SPACE)]);
    assert_eq!(
        host.hid_events(),
        &[
            HidEvent::Press(Key::LEFT_GUI),
            HidEvent::Press(Key::SPACE),
            HidEvent::Release(Key::SPACE),
            HidEvent::Release(Key::LEFT_GUI),
        ]
    );
}

#[test]
fn test_spotlight_tapping_term_boundary() {
    let mut dispatcher = Dispatcher::new();
    let mut host = SimulatedHost::new();

    tap_at(&mut dispatcher, &mut host, CustomKeycode::PSpotlight, 0, 199);
    tap_at(&mut dispatcher, &mut host, CustomKeycode::PSpotlight, 1000, 1200);

    assert_eq!(
        host.sent_chords(),
        vec![Chord::plain(Key::P), Chord::cmd(Key::SPACE)]
    );
}

#[test]
fn test_spotlight_across_timer_wrap() {
    let mut dispatcher = Dispatcher::new();
    let mut host = SimulatedHost::new();

    tap_at(&mut dispatcher, &mut host, CustomKeycode::PSpotlight, 65_500, 60);

    assert_eq!(host.sent_chords(), vec![Chord::plain(Key::P)]);
}

#[test]
fn test_tap_ignores_held_modifiers() {
    let mut dispatcher = Dispatcher::new();
    let mut host = SimulatedHost::new();
    host.hold(Mods::LSFT);

    tap_at(&mut dispatcher, &mut host, CustomKeycode::PSpotlight, 0, 20);

    // Shift stays live, so the computer sees a capital P
    assert_eq!(effective(&host), vec![Chord::shifted(Key::P)]);
    assert_eq!(host.get_mods(), Mods::LSFT);
}

// =========================================================================
// Shift-sensitive and Ctrl-arrow keys
// =========================================================================

#[test]
fn test_symbol_row_types_symbols_then_digits() {
    let mut dispatcher = Dispatcher::new();
    let mut host = SimulatedHost::new();
    let symbols: Vec<CustomKeycode> = CustomKeycode::iter()
        .filter(|c| c.to_string().starts_with("SYM_"))
        .collect();
    assert_eq!(symbols.len(), 10);

    for sym in &symbols {
        tap_at(&mut dispatcher, &mut host, *sym, 0, 10);
    }
    let unshifted = host.take_reports();
    assert!(unshifted
        .iter()
        .all(|r| r.effective().mods() == Mods::LSFT && r.live_mods.is_empty()));

    host.hold(Mods::RSFT);
    for sym in &symbols {
        tap_at(&mut dispatcher, &mut host, *sym, 0, 10);
    }
    let shifted = host.take_reports();
    assert!(shifted
        .iter()
        .all(|r| r.chord.is_plain() && r.live_mods == Mods::RSFT));

    let digits: Vec<Key> = shifted.iter().map(|r| r.chord.key()).collect();
    assert_eq!(
        digits,
        vec![
            Key::N1,
            Key::N2,
            Key::N3,
            Key::N4,
            Key::N5,
            Key::N6,
            Key::N7,
            Key::N8,
            Key::N9,
            Key::N0
        ]
    );
}

#[test]
fn test_vim_arrows_with_ctrl_and_restore() {
    let mut dispatcher = Dispatcher::new();
    let mut host = SimulatedHost::new();
    host.hold(Mods::LCTL | Mods::LSFT);

    for key in [
        CustomKeycode::CtrlH,
        CustomKeycode::CtrlJ,
        CustomKeycode::CtrlK,
        CustomKeycode::CtrlL,
    ] {
        tap_at(&mut dispatcher, &mut host, key, 0, 5);
        assert_eq!(host.get_mods(), Mods::LCTL | Mods::LSFT);
    }

    assert_eq!(
        effective(&host),
        vec![
            Chord::plain(Key::LEFT),
            Chord::plain(Key::DOWN),
            Chord::plain(Key::UP),
            Chord::plain(Key::RIGHT)
        ]
    );
}

#[test]
fn test_vim_keys_without_ctrl_type_punctuation() {
    let mut dispatcher = Dispatcher::new();
    let mut host = SimulatedHost::new();

    for key in [
        CustomKeycode::CtrlH,
        CustomKeycode::CtrlJ,
        CustomKeycode::CtrlK,
        CustomKeycode::CtrlL,
    ] {
        tap_at(&mut dispatcher, &mut host, key, 0, 5);
    }

    assert_eq!(
        effective(&host),
        vec![
            Chord::plain(Key::MINUS),
            Chord::shifted(Key::MINUS),
            Chord::shifted(Key::LEFT_BRACKET),
            Chord::shifted(Key::RIGHT_BRACKET)
        ]
    );
}

// =========================================================================
// Tri-layer
// =========================================================================

#[test]
fn test_tri_layer_per_variant() {
    for variant in [Variant::Standard, Variant::Terminal] {
        let both = LayerState::with(&[Layer::Lower, Layer::Raise]);
        let next = layer_state_set_user(both, variant);
        assert!(next.is_on(variant.top_layer()));

        let lower_only = layer_state_set_user(LayerState::with(&[Layer::Lower]), variant);
        assert!(!lower_only.is_on(variant.top_layer()));
    }
}

#[test]
fn test_tri_layer_clears_top_when_one_released() {
    let state = LayerState::with(&[Layer::Lower, Layer::Raise, Layer::Adjust]);
    let released = layer_state_set_user(state.deactivate(Layer::Lower), Variant::Standard);
    assert_eq!(released, LayerState::with(&[Layer::Raise]));
}

#[test]
fn test_tri_layer_keeps_function_toggle() {
    let state = LayerState::with(&[Layer::Function, Layer::Lower]);
    let next = layer_state_set_user(state, Variant::Standard);
    assert!(next.is_on(Layer::Function));
    assert!(!next.is_on(Layer::Adjust));
}

// =========================================================================
// Terminal keys
// =========================================================================

#[test]
fn test_terminal_keys_send_cmd_shortcuts() {
    let mut dispatcher = Dispatcher::new();
    let mut host = SimulatedHost::new();

    let terminal: Vec<CustomKeycode> = CustomKeycode::iter().filter(|c| c.is_terminal()).collect();
    assert_eq!(terminal.len(), 28);

    for key in &terminal {
        tap_at(&mut dispatcher, &mut host, *key, 0, 10);
    }

    let reports = host.reports();
    assert_eq!(reports.len(), 28);
    assert!(reports.iter().all(|r| r.chord.mods().contains(Mods::LGUI)));
}

#[test]
fn test_terminal_pane_navigation() {
    let mut dispatcher = Dispatcher::new();
    let mut host = SimulatedHost::new();

    tap_at(&mut dispatcher, &mut host, CustomKeycode::TermPaneLeft, 0, 10);
    tap_at(&mut dispatcher, &mut host, CustomKeycode::TermNextTab, 20, 30);

    assert_eq!(
        host.sent_chords(),
        vec![
            Chord::new(Mods::LGUI | Mods::LALT, Key::LEFT),
            Chord::new(Mods::LGUI | Mods::LSFT, Key::RIGHT_BRACKET)
        ]
    );
}

// =========================================================================
// Scripted sessions
// =========================================================================

#[test]
fn test_script_session_standard() {
    let script = parse_script(
        r#"
# type "p", then open spotlight
at 0 press P_SPOTLIGHT
at 90 release P_SPOTLIGHT
at 500 press P_SPOTLIGHT
at 900 release P_SPOTLIGHT

# raise: symbols, then Ctrl+J for down
layer on raise
at 1000 press SYM_3
mods LCtrl
at 1010 press CTRL_J
mods none
layer off raise
"#,
    )
    .unwrap();

    let mut simulator = Simulator::new(&BuildConfig::default());
    let outcomes = simulator.run(&script);
    let sent: Vec<Chord> = outcomes
        .iter()
        .flat_map(|o| o.reports.iter().map(|r| r.effective()))
        .collect();

    assert_eq!(
        sent,
        vec![
            Chord::plain(Key::P),
            Chord::cmd(Key::SPACE),
            Chord::shifted(Key::N3),
            Chord::plain(Key::DOWN)
        ]
    );
    assert_eq!(simulator.layers(), LayerState::new());
    assert_eq!(simulator.host().get_mods(), Mods::NONE);
}

#[test]
fn test_script_session_terminal_variant() {
    let config = BuildConfig::from_toml(r#"variant = "terminal""#).unwrap();
    let script = parse_script(
        "at 0 press (3, 5)\n\
         at 10 press (3, 6)\n\
         at 20 press TERM_SPLIT_VERT\n\
         at 30 press (0, 1)\n\
         at 40 release (3, 6)\n\
         at 50 release (3, 5)\n",
    )
    .unwrap();

    let mut simulator = Simulator::new(&config);
    let outcomes = simulator.run(&script);

    assert!(outcomes[1].layers.is_on(Layer::Terminal));
    assert_eq!(
        outcomes[2].reports[0].effective(),
        Chord::cmd(Key::D)
    );
    assert_eq!(
        outcomes[3].keycode,
        Some(Keycode::Custom(CustomKeycode::TermTab1))
    );
    assert_eq!(outcomes[3].reports[0].effective(), Chord::cmd(Key::N1));
    assert_eq!(outcomes[5].layers, LayerState::new());
}
