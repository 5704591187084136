//! Input state management
//!
//! The window layer feeds raw key, pointer and scroll events in; the
//! simulation reads them back as named actions. Bindings are plain data so
//! they can be overridden from the config file.

use blockyard_core::{BlockyardError, Vec2};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fmt;
use std::str::FromStr;

/// Action names understood by the sandbox
pub mod actions {
    pub const MOVE_LEFT: &str = "move_left";
    pub const MOVE_RIGHT: &str = "move_right";
    pub const JUMP: &str = "jump";
    pub const QUIT: &str = "quit";
    pub const TOGGLE_GRID: &str = "toggle_grid";
    pub const SAVE: &str = "save";
    pub const LOAD: &str = "load";

    /// Hotbar slot actions, `hotbar_1` through `hotbar_9`
    pub const HOTBAR_SLOTS: [&str; 9] = [
        "hotbar_1", "hotbar_2", "hotbar_3", "hotbar_4", "hotbar_5", "hotbar_6", "hotbar_7",
        "hotbar_8", "hotbar_9",
    ];
}

/// Physical keys the sandbox can bind
#[rustfmt::skip]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,
    Left, Right, Up, Down,
    Space, Enter, Tab, Escape,
    ShiftLeft, ShiftRight, ControlLeft, ControlRight,
}

#[rustfmt::skip]
const LETTERS: [Key; 26] = [
    Key::A, Key::B, Key::C, Key::D, Key::E, Key::F, Key::G, Key::H, Key::I,
    Key::J, Key::K, Key::L, Key::M, Key::N, Key::O, Key::P, Key::Q, Key::R,
    Key::S, Key::T, Key::U, Key::V, Key::W, Key::X, Key::Y, Key::Z,
];

#[rustfmt::skip]
const DIGITS: [Key; 10] = [
    Key::Digit0, Key::Digit1, Key::Digit2, Key::Digit3, Key::Digit4,
    Key::Digit5, Key::Digit6, Key::Digit7, Key::Digit8, Key::Digit9,
];

impl Key {
    /// The digit key for `n` (0..=9)
    pub fn digit(n: u8) -> Option<Key> {
        DIGITS.get(n as usize).copied()
    }

    pub fn is_control(self) -> bool {
        matches!(self, Key::ControlLeft | Key::ControlRight)
    }

    fn name(self) -> String {
        let special = match self {
            Key::Left => Some("left"),
            Key::Right => Some("right"),
            Key::Up => Some("up"),
            Key::Down => Some("down"),
            Key::Space => Some("space"),
            Key::Enter => Some("enter"),
            Key::Tab => Some("tab"),
            Key::Escape => Some("escape"),
            Key::ShiftLeft => Some("lshift"),
            Key::ShiftRight => Some("rshift"),
            Key::ControlLeft => Some("lctrl"),
            Key::ControlRight => Some("rctrl"),
            _ => None,
        };
        if let Some(name) = special {
            return name.to_string();
        }
        if let Some(i) = LETTERS.iter().position(|&k| k == self) {
            return ((b'a' + i as u8) as char).to_string();
        }
        DIGITS
            .iter()
            .position(|&k| k == self)
            .map(|i| i.to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for Key {
    type Err = BlockyardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let bytes = lower.as_bytes();
        if bytes.len() == 1 {
            let c = bytes[0];
            if c.is_ascii_lowercase() {
                return Ok(LETTERS[(c - b'a') as usize]);
            }
            if c.is_ascii_digit() {
                return Ok(DIGITS[(c - b'0') as usize]);
            }
        }
        let key = match lower.as_str() {
            "left" | "arrowleft" => Key::Left,
            "right" | "arrowright" => Key::Right,
            "up" | "arrowup" => Key::Up,
            "down" | "arrowdown" => Key::Down,
            "space" => Key::Space,
            "enter" | "return" => Key::Enter,
            "tab" => Key::Tab,
            "escape" | "esc" => Key::Escape,
            "lshift" | "shift" => Key::ShiftLeft,
            "rshift" => Key::ShiftRight,
            "lctrl" | "ctrl" | "control" => Key::ControlLeft,
            "rctrl" => Key::ControlRight,
            _ => return Err(BlockyardError::InvalidBinding(s.to_string())),
        };
        Ok(key)
    }
}

/// A key, optionally combined with Ctrl. Written as `"s"` or `"ctrl+s"`.
///
/// A binding without the Ctrl flag matches whatever modifiers are held.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Binding {
    pub key: Key,
    pub ctrl: bool,
}

impl Binding {
    pub const fn key(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub const fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            write!(f, "ctrl+{}", self.key)
        } else {
            write!(f, "{}", self.key)
        }
    }
}

impl FromStr for Binding {
    type Err = BlockyardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().split_once('+') {
            Some((modifier, key)) => {
                if !matches!(modifier.trim().to_ascii_lowercase().as_str(), "ctrl" | "control") {
                    return Err(BlockyardError::InvalidBinding(s.to_string()));
                }
                Ok(Binding::ctrl(key.parse()?))
            }
            None => Ok(Binding::key(s.parse()?)),
        }
    }
}

impl TryFrom<String> for Binding {
    type Error = BlockyardError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Binding> for String {
    fn from(binding: Binding) -> String {
        binding.to_string()
    }
}

/// Pointer (mouse) buttons
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Left button: place
    Primary,
    /// Right button: remove
    Secondary,
    Middle,
}

/// Action name → bindings. Actions missing from a config file keep their
/// default bindings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InputConfig {
    pub actions: BTreeMap<String, Vec<Binding>>,
}

impl Default for InputConfig {
    fn default() -> Self {
        let mut map = BTreeMap::new();
        map.insert(
            actions::MOVE_LEFT.to_string(),
            vec![Binding::key(Key::A), Binding::key(Key::Left)],
        );
        map.insert(
            actions::MOVE_RIGHT.to_string(),
            vec![Binding::key(Key::D), Binding::key(Key::Right)],
        );
        map.insert(
            actions::JUMP.to_string(),
            vec![
                Binding::key(Key::W),
                Binding::key(Key::Up),
                Binding::key(Key::Space),
            ],
        );
        map.insert(actions::QUIT.to_string(), vec![Binding::key(Key::Escape)]);
        map.insert(actions::TOGGLE_GRID.to_string(), vec![Binding::key(Key::G)]);
        map.insert(actions::SAVE.to_string(), vec![Binding::ctrl(Key::S)]);
        map.insert(actions::LOAD.to_string(), vec![Binding::ctrl(Key::L)]);
        for (i, action) in actions::HOTBAR_SLOTS.iter().enumerate() {
            if let Some(key) = Key::digit(i as u8 + 1) {
                map.insert(action.to_string(), vec![Binding::key(key)]);
            }
        }
        Self { actions: map }
    }
}

impl InputConfig {
    /// Defaults overlaid with the actions present in `self`
    pub fn merged_with_defaults(&self) -> Self {
        let mut merged = Self::default();
        for (action, bindings) in &self.actions {
            merged.actions.insert(action.clone(), bindings.clone());
        }
        merged
    }

    pub fn bindings(&self, action: &str) -> &[Binding] {
        self.actions.get(action).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Tracks keyboard, pointer and scroll input between two simulation ticks
pub struct InputState {
    keys_down: HashSet<Key>,
    keys_just_pressed: HashSet<Key>,
    pointer_buttons_down: HashSet<PointerButton>,
    pointer_buttons_just_pressed: HashSet<PointerButton>,
    /// Current pointer position in window pixels
    pointer_position: Vec2,
    /// Net scroll since the last tick: negative is up, positive is down
    scroll_steps: i32,
    quit_signal: bool,
    config: InputConfig,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        Self::with_config(InputConfig::default())
    }

    pub fn with_config(config: InputConfig) -> Self {
        Self {
            keys_down: HashSet::new(),
            keys_just_pressed: HashSet::new(),
            pointer_buttons_down: HashSet::new(),
            pointer_buttons_just_pressed: HashSet::new(),
            pointer_position: Vec2::ZERO,
            scroll_steps: 0,
            quit_signal: false,
            config: config.merged_with_defaults(),
        }
    }

    pub fn config(&self) -> &InputConfig {
        &self.config
    }

    pub fn process_key_down(&mut self, key: Key) {
        if !self.keys_down.contains(&key) {
            self.keys_just_pressed.insert(key);
        }
        self.keys_down.insert(key);
    }

    pub fn process_key_up(&mut self, key: Key) {
        self.keys_down.remove(&key);
    }

    pub fn process_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer_position = Vec2::new(x, y);
    }

    pub fn process_pointer_down(&mut self, button: PointerButton) {
        if !self.pointer_buttons_down.contains(&button) {
            self.pointer_buttons_just_pressed.insert(button);
        }
        self.pointer_buttons_down.insert(button);
    }

    pub fn process_pointer_up(&mut self, button: PointerButton) {
        self.pointer_buttons_down.remove(&button);
    }

    /// Record scroll wheel movement: negative steps scroll up, positive down
    pub fn process_scroll(&mut self, steps: i32) {
        self.scroll_steps += steps;
    }

    /// The window was asked to close
    pub fn process_quit_signal(&mut self) {
        self.quit_signal = true;
    }

    /// Call after each simulation tick to clear edge-triggered state
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
        self.pointer_buttons_just_pressed.clear();
        self.scroll_steps = 0;
    }

    // --- Query methods ---

    pub fn is_key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }

    pub fn is_key_just_pressed(&self, key: Key) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    pub fn ctrl_held(&self) -> bool {
        self.keys_down.iter().any(|k| k.is_control())
    }

    /// Is any binding of `action` currently held?
    pub fn is_action_pressed(&self, action: &str) -> bool {
        self.config
            .bindings(action)
            .iter()
            .any(|b| self.binding_matches(b, self.is_key_down(b.key)))
    }

    /// Was any binding of `action` pressed since the last tick?
    pub fn is_action_just_pressed(&self, action: &str) -> bool {
        self.config
            .bindings(action)
            .iter()
            .any(|b| self.binding_matches(b, self.is_key_just_pressed(b.key)))
    }

    pub fn is_pointer_down(&self, button: PointerButton) -> bool {
        self.pointer_buttons_down.contains(&button)
    }

    pub fn is_pointer_just_pressed(&self, button: PointerButton) -> bool {
        self.pointer_buttons_just_pressed.contains(&button)
    }

    pub fn pointer_position(&self) -> Vec2 {
        self.pointer_position
    }

    pub fn scroll_steps(&self) -> i32 {
        self.scroll_steps
    }

    pub fn quit_signal(&self) -> bool {
        self.quit_signal
    }

    fn binding_matches(&self, binding: &Binding, key_active: bool) -> bool {
        key_active && (!binding.ctrl || self.ctrl_held())
    }
}
