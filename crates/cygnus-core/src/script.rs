// Cygnus Event Scripts
// Replays a typed-out key sequence through the dispatcher and layer reducer

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::config::BuildConfig;
use crate::dispatch::Dispatcher;
use crate::event::{KeyEvent, KeyPos, KeyRecord};
use crate::host::{Host, Report, SimulatedHost};
use crate::keycode::{KeycodeParseError, Keycode};
use crate::keymap::Keymap;
use crate::layer::{layer_state_set_user, Layer, LayerState};
use crate::Mods;

/// Errors from parsing an event script; every variant carries its line number
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("line {line}: invalid time '{value}'")]
    InvalidTime { line: usize, value: String },

    #[error("line {line}: {source}")]
    UnknownKeycode {
        line: usize,
        #[source]
        source: KeycodeParseError,
    },

    #[error("line {line}: invalid key position '{value}'")]
    InvalidPosition { line: usize, value: String },

    #[error("line {line}: unknown layer '{name}'")]
    UnknownLayer { line: usize, name: String },

    #[error("line {line}: unknown modifier '{name}'")]
    UnknownModifier { line: usize, name: String },
}

/// The key a script line presses: a keycode by name or a matrix position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyTarget {
    Keycode(Keycode),
    Position(KeyPos),
}

impl fmt::Display for KeyTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyTarget::Keycode(keycode) => write!(f, "{}", keycode),
            KeyTarget::Position(pos) => write!(f, "{}", pos),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `at <ms> press|release <KEYCODE | (row, col)>`
    Key {
        time: u16,
        pressed: bool,
        target: KeyTarget,
    },
    /// `mods <Ctrl-Shift | none>`: set the live modifier register
    Mods(Mods),
    /// `layer on|off <NAME>`
    Layer { layer: Layer, on: bool },
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Key {
                time,
                pressed,
                target,
            } => {
                let action = if *pressed { "press" } else { "release" };
                write!(f, "at {}ms {} {}", time, action, target)
            }
            Step::Mods(mods) => write!(f, "mods {}", mods),
            Step::Layer { layer, on } => {
                write!(f, "layer {} {}", if *on { "on" } else { "off" }, layer)
            }
        }
    }
}

/// A parsed script: steps paired with their source line numbers
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    steps: Vec<(usize, Step)>,
}

impl Script {
    pub fn steps(&self) -> &[(usize, Step)] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromStr for Script {
    type Err = ScriptError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_script(s)
    }
}

/// Parse a script, one step per line. Blank lines and `#` comments are skipped.
pub fn parse_script(source: &str) -> Result<Script, ScriptError> {
    let mut steps = Vec::new();
    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let text = match raw.find('#') {
            Some(start) => &raw[..start],
            None => raw,
        }
        .trim();
        if text.is_empty() {
            continue;
        }
        steps.push((line, parse_step(line, text)?));
    }
    Ok(Script { steps })
}

fn parse_step(line: usize, text: &str) -> Result<Step, ScriptError> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let syntax = |message: &str| ScriptError::Syntax {
        line,
        message: message.to_string(),
    };

    match words.as_slice() {
        ["at", time, action, target @ ..] if !target.is_empty() => {
            let time = time.parse::<u16>().map_err(|_| ScriptError::InvalidTime {
                line,
                value: time.to_string(),
            })?;
            let pressed = match *action {
                "press" => true,
                "release" => false,
                _ => return Err(syntax("expected 'press' or 'release'")),
            };
            let target = parse_target(line, &target.join(" "))?;
            Ok(Step::Key {
                time,
                pressed,
                target,
            })
        }
        ["mods", spec] => parse_mods(line, spec).map(Step::Mods),
        ["layer", state, name] => {
            let on = match *state {
                "on" => true,
                "off" => false,
                _ => return Err(syntax("expected 'on' or 'off'")),
            };
            let layer = name.parse::<Layer>().map_err(|_| ScriptError::UnknownLayer {
                line,
                name: name.to_string(),
            })?;
            Ok(Step::Layer { layer, on })
        }
        ["at", ..] => Err(syntax("expected 'at <ms> press|release <KEY>'")),
        ["mods", ..] => Err(syntax("expected 'mods <MODS|none>'")),
        ["layer", ..] => Err(syntax("expected 'layer on|off <NAME>'")),
        _ => Err(syntax(&format!("unknown step '{}'", text))),
    }
}

fn parse_target(line: usize, text: &str) -> Result<KeyTarget, ScriptError> {
    if let Some(inner) = text.strip_prefix('(').and_then(|t| t.strip_suffix(')')) {
        let invalid = || ScriptError::InvalidPosition {
            line,
            value: text.to_string(),
        };
        let (row, col) = inner.split_once(',').ok_or_else(invalid)?;
        let row = row.trim().parse::<u8>().map_err(|_| invalid())?;
        let col = col.trim().parse::<u8>().map_err(|_| invalid())?;
        return Ok(KeyTarget::Position(KeyPos::new(row, col)));
    }
    text.parse::<Keycode>()
        .map(KeyTarget::Keycode)
        .map_err(|source| ScriptError::UnknownKeycode { line, source })
}

fn parse_mods(line: usize, spec: &str) -> Result<Mods, ScriptError> {
    if spec.eq_ignore_ascii_case("none") {
        return Ok(Mods::NONE);
    }
    spec.split('-').try_fold(Mods::NONE, |mods, name| {
        Mods::from_alias(name)
            .map(|m| mods | m)
            .ok_or_else(|| ScriptError::UnknownModifier {
                line,
                name: name.to_string(),
            })
    })
}

/// What one script step produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub line: usize,
    pub step: Step,
    /// The keycode the step acted on, after layer resolution
    pub keycode: Option<Keycode>,
    pub reports: Vec<Report>,
    /// Layer state after the step
    pub layers: LayerState,
}

impl fmt::Display for StepOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>4}: {}", self.line, self.step)?;
        if let Some(keycode) = self.keycode {
            if !matches!(self.step, Step::Key { target: KeyTarget::Keycode(k), .. } if k == keycode)
            {
                write!(f, " [{}]", keycode)?;
            }
        }
        if !self.reports.is_empty() {
            let sent: Vec<String> = self.reports.iter().map(|r| r.to_string()).collect();
            write!(f, " -> {}", sent.join(", "))?;
        }
        write!(f, " (layers {})", self.layers)
    }
}

/// Runs script steps against a simulated keyboard.
///
/// Custom keycodes go through [`Dispatcher::process_record_user`]. Everything
/// it passes back gets a minimal stand-in for the firmware's own handling:
/// plain keys and chords send on press, modifiers are held, layer keys
/// switch layers, and mod-tap/layer-tap keys send their tap key when
/// released within the tapping term with no other key pressed meanwhile.
#[derive(Debug, Clone)]
pub struct Simulator {
    host: SimulatedHost,
    dispatcher: Dispatcher,
    keymap: Keymap,
    layers: LayerState,
    /// Keycode each held position resolved to when pressed
    held: HashMap<KeyPos, Keycode>,
    /// Dual-role key that may still turn out to be a tap
    pending_tap: Option<(KeyPos, u16)>,
}

impl Simulator {
    pub fn new(config: &BuildConfig) -> Self {
        Self {
            host: SimulatedHost::new(),
            dispatcher: config.dispatcher(),
            keymap: config.keymap(),
            layers: LayerState::new(),
            held: HashMap::new(),
            pending_tap: None,
        }
    }

    pub fn layers(&self) -> LayerState {
        self.layers
    }

    pub fn host(&self) -> &SimulatedHost {
        &self.host
    }

    pub fn run(&mut self, script: &Script) -> Vec<StepOutcome> {
        script
            .steps()
            .iter()
            .map(|(line, step)| self.step(*line, *step))
            .collect()
    }

    pub fn step(&mut self, line: usize, step: Step) -> StepOutcome {
        let keycode = match step {
            Step::Key {
                time,
                pressed,
                target,
            } => {
                self.host.set_time(time);
                Some(self.key(time, pressed, target))
            }
            Step::Mods(mods) => {
                self.host.set_mods(mods);
                None
            }
            Step::Layer { layer, on } => {
                let next = if on {
                    self.layers.activate(layer)
                } else {
                    self.layers.deactivate(layer)
                };
                self.set_layers(next);
                None
            }
        };
        StepOutcome {
            line,
            step,
            keycode,
            reports: self.host.take_reports(),
            layers: self.layers,
        }
    }

    fn key(&mut self, time: u16, pressed: bool, target: KeyTarget) -> Keycode {
        let pos = match target {
            KeyTarget::Position(pos) => pos,
            KeyTarget::Keycode(keycode) => self
                .keymap
                .positions_of(keycode)
                .first()
                .map(|(_, pos)| *pos)
                .unwrap_or(KeyPos::new(0, 0)),
        };
        let keycode = match (target, pressed) {
            (KeyTarget::Keycode(keycode), _) => keycode,
            (KeyTarget::Position(pos), true) => self.keymap.resolve(self.layers, pos),
            (KeyTarget::Position(pos), false) => match self.held.get(&pos) {
                Some(keycode) => *keycode,
                None => self.keymap.resolve(self.layers, pos),
            },
        };
        if pressed {
            self.held.insert(pos, keycode);
            if self.pending_tap.is_some_and(|(held, _)| held != pos) {
                self.pending_tap = None;
            }
        } else {
            self.held.remove(&pos);
        }

        let event = if pressed {
            KeyEvent::press(pos, time)
        } else {
            KeyEvent::release(pos, time)
        };
        let record = KeyRecord::new(event);
        if self
            .dispatcher
            .process_record_user(&mut self.host, keycode, &record)
        {
            self.default_action(keycode, &record);
        }
        keycode
    }

    fn default_action(&mut self, keycode: Keycode, record: &KeyRecord) {
        let pos = record.event.key;
        let pressed = record.is_pressed();
        match keycode {
            Keycode::Basic(key) => match Mods::from_key(key) {
                Some(mods) if pressed => self.host.hold(mods),
                Some(mods) => self.host.lift(mods),
                None if pressed => self.host.tap_code(key),
                None => {}
            },
            Keycode::Chord(chord) => {
                if pressed {
                    self.host.tap_code16(chord);
                }
            }
            Keycode::ModTap { mods, tap } => {
                if pressed {
                    self.host.hold(mods);
                    self.pending_tap = Some((pos, record.event.time));
                } else {
                    self.host.lift(mods);
                    if self.take_tap(pos) {
                        self.host.tap_code(tap);
                    }
                }
            }
            Keycode::LayerTap { layer, tap } => {
                if pressed {
                    self.set_layers(self.layers.activate(layer));
                    self.pending_tap = Some((pos, record.event.time));
                } else {
                    self.set_layers(self.layers.deactivate(layer));
                    if self.take_tap(pos) {
                        self.host.tap_code(tap);
                    }
                }
            }
            Keycode::Momentary(layer) => {
                let next = if pressed {
                    self.layers.activate(layer)
                } else {
                    self.layers.deactivate(layer)
                };
                self.set_layers(next);
            }
            Keycode::Toggle(layer) => {
                if pressed {
                    self.set_layers(self.layers.toggle(layer));
                }
            }
            Keycode::Mouse(mouse) => {
                if pressed {
                    log::debug!("mouse key {}", mouse);
                }
            }
            Keycode::No | Keycode::Transparent | Keycode::Custom(_) => {}
        }
    }

    /// Whether the dual-role key at `pos` is released as a tap
    fn take_tap(&mut self, pos: KeyPos) -> bool {
        match self.pending_tap.take() {
            Some((held, start)) if held == pos => {
                self.host.timer_elapsed(start) < self.dispatcher.tapping_term()
            }
            other => {
                self.pending_tap = other;
                false
            }
        }
    }

    fn set_layers(&mut self, state: LayerState) {
        let next = layer_state_set_user(state, self.keymap.variant());
        if next != self.layers {
            log::debug!("layers: {} -> {}", self.layers, next);
        }
        self.layers = next;
    }
}
