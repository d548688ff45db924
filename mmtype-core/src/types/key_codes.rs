use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Physical key position, named after the W3C `KeyboardEvent.code` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
    // Number row
    Backquote,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,
    Digit0,
    Minus,
    Equal,

    // Top letter row
    KeyQ,
    KeyW,
    KeyE,
    KeyR,
    KeyT,
    KeyY,
    KeyU,
    KeyI,
    KeyO,
    KeyP,
    BracketLeft,
    BracketRight,
    Backslash,

    // Home row
    KeyA,
    KeyS,
    KeyD,
    KeyF,
    KeyG,
    KeyH,
    KeyJ,
    KeyK,
    KeyL,
    Semicolon,
    Quote,

    // Bottom row
    KeyZ,
    KeyX,
    KeyC,
    KeyV,
    KeyB,
    KeyN,
    KeyM,
    Comma,
    Period,
    Slash,

    // Control keys
    Space,
    Backspace,
    Tab,
    Enter,
    Escape,
    CapsLock,

    // Modifiers (left/right variants)
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,
}

impl KeyCode {
    pub const ALL: [KeyCode; 59] = [
        KeyCode::Backquote,
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
        KeyCode::Digit0,
        KeyCode::Minus,
        KeyCode::Equal,
        KeyCode::KeyQ,
        KeyCode::KeyW,
        KeyCode::KeyE,
        KeyCode::KeyR,
        KeyCode::KeyT,
        KeyCode::KeyY,
        KeyCode::KeyU,
        KeyCode::KeyI,
        KeyCode::KeyO,
        KeyCode::KeyP,
        KeyCode::BracketLeft,
        KeyCode::BracketRight,
        KeyCode::Backslash,
        KeyCode::KeyA,
        KeyCode::KeyS,
        KeyCode::KeyD,
        KeyCode::KeyF,
        KeyCode::KeyG,
        KeyCode::KeyH,
        KeyCode::KeyJ,
        KeyCode::KeyK,
        KeyCode::KeyL,
        KeyCode::Semicolon,
        KeyCode::Quote,
        KeyCode::KeyZ,
        KeyCode::KeyX,
        KeyCode::KeyC,
        KeyCode::KeyV,
        KeyCode::KeyB,
        KeyCode::KeyN,
        KeyCode::KeyM,
        KeyCode::Comma,
        KeyCode::Period,
        KeyCode::Slash,
        KeyCode::Space,
        KeyCode::Backspace,
        KeyCode::Tab,
        KeyCode::Enter,
        KeyCode::Escape,
        KeyCode::CapsLock,
        KeyCode::ShiftLeft,
        KeyCode::ShiftRight,
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
        KeyCode::AltLeft,
        KeyCode::AltRight,
    ];

    /// The W3C code string, e.g. `"KeyA"` or `"BracketLeft"`.
    pub fn as_str(self) -> &'static str {
        match self {
            KeyCode::Backquote => "Backquote",
            KeyCode::Digit1 => "Digit1",
            KeyCode::Digit2 => "Digit2",
            KeyCode::Digit3 => "Digit3",
            KeyCode::Digit4 => "Digit4",
            KeyCode::Digit5 => "Digit5",
            KeyCode::Digit6 => "Digit6",
            KeyCode::Digit7 => "Digit7",
            KeyCode::Digit8 => "Digit8",
            KeyCode::Digit9 => "Digit9",
            KeyCode::Digit0 => "Digit0",
            KeyCode::Minus => "Minus",
            KeyCode::Equal => "Equal",
            KeyCode::KeyQ => "KeyQ",
            KeyCode::KeyW => "KeyW",
            KeyCode::KeyE => "KeyE",
            KeyCode::KeyR => "KeyR",
            KeyCode::KeyT => "KeyT",
            KeyCode::KeyY => "KeyY",
            KeyCode::KeyU => "KeyU",
            KeyCode::KeyI => "KeyI",
            KeyCode::KeyO => "KeyO",
            KeyCode::KeyP => "KeyP",
            KeyCode::BracketLeft => "BracketLeft",
            KeyCode::BracketRight => "BracketRight",
            KeyCode::Backslash => "Backslash",
            KeyCode::KeyA => "KeyA",
            KeyCode::KeyS => "KeyS",
            KeyCode::KeyD => "KeyD",
            KeyCode::KeyF => "KeyF",
            KeyCode::KeyG => "KeyG",
            KeyCode::KeyH => "KeyH",
            KeyCode::KeyJ => "KeyJ",
            KeyCode::KeyK => "KeyK",
            KeyCode::KeyL => "KeyL",
            KeyCode::Semicolon => "Semicolon",
            KeyCode::Quote => "Quote",
            KeyCode::KeyZ => "KeyZ",
            KeyCode::KeyX => "KeyX",
            KeyCode::KeyC => "KeyC",
            KeyCode::KeyV => "KeyV",
            KeyCode::KeyB => "KeyB",
            KeyCode::KeyN => "KeyN",
            KeyCode::KeyM => "KeyM",
            KeyCode::Comma => "Comma",
            KeyCode::Period => "Period",
            KeyCode::Slash => "Slash",
            KeyCode::Space => "Space",
            KeyCode::Backspace => "Backspace",
            KeyCode::Tab => "Tab",
            KeyCode::Enter => "Enter",
            KeyCode::Escape => "Escape",
            KeyCode::CapsLock => "CapsLock",
            KeyCode::ShiftLeft => "ShiftLeft",
            KeyCode::ShiftRight => "ShiftRight",
            KeyCode::ControlLeft => "ControlLeft",
            KeyCode::ControlRight => "ControlRight",
            KeyCode::AltLeft => "AltLeft",
            KeyCode::AltRight => "AltRight",
        }
    }

    pub fn is_shift(self) -> bool {
        matches!(self, KeyCode::ShiftLeft | KeyCode::ShiftRight)
    }

    pub fn is_control(self) -> bool {
        matches!(self, KeyCode::ControlLeft | KeyCode::ControlRight)
    }

    pub fn is_alt(self) -> bool {
        matches!(self, KeyCode::AltLeft | KeyCode::AltRight)
    }

    /// Checks if this is one of the modifier keys
    pub fn is_modifier(self) -> bool {
        self.is_shift() || self.is_control() || self.is_alt() || self == KeyCode::CapsLock
    }

    /// Maps a character of the US QWERTY layout to the physical key that
    /// produces it, and whether Shift is needed for it.
    ///
    /// Terminals report characters rather than key positions, so this is how
    /// keyboard input is turned back into key codes.
    pub fn from_us_char(ch: char) -> Option<(KeyCode, bool)> {
        let key = match ch.to_ascii_lowercase() {
            'a' => KeyCode::KeyA,
            'b' => KeyCode::KeyB,
            'c' => KeyCode::KeyC,
            'd' => KeyCode::KeyD,
            'e' => KeyCode::KeyE,
            'f' => KeyCode::KeyF,
            'g' => KeyCode::KeyG,
            'h' => KeyCode::KeyH,
            'i' => KeyCode::KeyI,
            'j' => KeyCode::KeyJ,
            'k' => KeyCode::KeyK,
            'l' => KeyCode::KeyL,
            'm' => KeyCode::KeyM,
            'n' => KeyCode::KeyN,
            'o' => KeyCode::KeyO,
            'p' => KeyCode::KeyP,
            'q' => KeyCode::KeyQ,
            'r' => KeyCode::KeyR,
            's' => KeyCode::KeyS,
            't' => KeyCode::KeyT,
            'u' => KeyCode::KeyU,
            'v' => KeyCode::KeyV,
            'w' => KeyCode::KeyW,
            'x' => KeyCode::KeyX,
            'y' => KeyCode::KeyY,
            'z' => KeyCode::KeyZ,
            _ => return Self::from_us_symbol(ch),
        };
        Some((key, ch.is_ascii_uppercase()))
    }

    fn from_us_symbol(ch: char) -> Option<(KeyCode, bool)> {
        let mapped = match ch {
            '`' => (KeyCode::Backquote, false),
            '~' => (KeyCode::Backquote, true),
            '1' => (KeyCode::Digit1, false),
            '!' => (KeyCode::Digit1, true),
            '2' => (KeyCode::Digit2, false),
            '@' => (KeyCode::Digit2, true),
            '3' => (KeyCode::Digit3, false),
            '#' => (KeyCode::Digit3, true),
            '4' => (KeyCode::Digit4, false),
            '$' => (KeyCode::Digit4, true),
            '5' => (KeyCode::Digit5, false),
            '%' => (KeyCode::Digit5, true),
            '6' => (KeyCode::Digit6, false),
            '^' => (KeyCode::Digit6, true),
            '7' => (KeyCode::Digit7, false),
            '&' => (KeyCode::Digit7, true),
            '8' => (KeyCode::Digit8, false),
            '*' => (KeyCode::Digit8, true),
            '9' => (KeyCode::Digit9, false),
            '(' => (KeyCode::Digit9, true),
            '0' => (KeyCode::Digit0, false),
            ')' => (KeyCode::Digit0, true),
            '-' => (KeyCode::Minus, false),
            '_' => (KeyCode::Minus, true),
            '=' => (KeyCode::Equal, false),
            '+' => (KeyCode::Equal, true),
            '[' => (KeyCode::BracketLeft, false),
            '{' => (KeyCode::BracketLeft, true),
            ']' => (KeyCode::BracketRight, false),
            '}' => (KeyCode::BracketRight, true),
            '\\' => (KeyCode::Backslash, false),
            '|' => (KeyCode::Backslash, true),
            ';' => (KeyCode::Semicolon, false),
            ':' => (KeyCode::Semicolon, true),
            '\'' => (KeyCode::Quote, false),
            '"' => (KeyCode::Quote, true),
            ',' => (KeyCode::Comma, false),
            '<' => (KeyCode::Comma, true),
            '.' => (KeyCode::Period, false),
            '>' => (KeyCode::Period, true),
            '/' => (KeyCode::Slash, false),
            '?' => (KeyCode::Slash, true),
            ' ' => (KeyCode::Space, false),
            _ => return None,
        };
        Some(mapped)
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyCode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        code_map()
            .get(s)
            .copied()
            .ok_or_else(|| Error::ParseError(format!("Unknown key code: {}", s)))
    }
}

/// Lookup table from W3C code strings to key codes.
pub fn create_code_map() -> HashMap<&'static str, KeyCode> {
    let mut map = HashMap::new();
    for key in KeyCode::ALL {
        map.insert(key.as_str(), key);
    }
    map
}

fn code_map() -> &'static HashMap<&'static str, KeyCode> {
    static MAP: std::sync::OnceLock<HashMap<&'static str, KeyCode>> = std::sync::OnceLock::new();
    MAP.get_or_init(create_code_map)
}
