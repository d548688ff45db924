//! Keystroke chord parsing and representation

use crate::engine::{KeyInput, ModifierState};
use crate::error::{Error, Result};
use crate::types::KeyCode;

/// A key together with the modifiers held while pressing it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyStroke {
    /// The main key
    pub key: KeyCode,
    /// Shift modifier
    pub shift: bool,
    /// Ctrl/Control modifier
    pub ctrl: bool,
    /// Alt/Option modifier
    pub alt: bool,
}

impl KeyStroke {
    /// Parse a chord like "Shift+KeyU", "shift u" or "U".
    ///
    /// The key is either a W3C code name or a single character of the US
    /// layout; an upper-case letter or a shifted symbol implies Shift.
    ///
    /// # Examples
    /// ```
    /// use mmtype_core::keystroke::KeyStroke;
    /// use mmtype_core::KeyCode;
    ///
    /// let stroke = KeyStroke::parse("Shift+KeyU").unwrap();
    /// assert_eq!(stroke.shift, true);
    /// assert_eq!(stroke.key, KeyCode::KeyU);
    /// ```
    pub fn parse(chord: &str) -> Result<Self> {
        if chord.trim().is_empty() {
            return Err(Error::ParseError("Empty keystroke".to_string()));
        }

        // "+" on its own is the Equal key, not a separator
        let parts: Vec<&str> = if chord.trim() == "+" {
            vec!["+"]
        } else {
            chord
                .split(|c| c == '+' || c == ' ')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .collect()
        };

        if parts.is_empty() {
            return Err(Error::ParseError("No valid components in keystroke".to_string()));
        }

        let mut shift = false;
        let mut ctrl = false;
        let mut alt = false;
        let mut key: Option<KeyCode> = None;

        for part in parts {
            match part.to_uppercase().as_str() {
                "SHIFT" => shift = true,
                "CTRL" | "CONTROL" => ctrl = true,
                "ALT" | "OPTION" => alt = true,
                _ => {
                    if key.is_some() {
                        return Err(Error::ParseError(format!("Multiple keys specified: {:?}", part)));
                    }
                    let (code, implied_shift) = parse_key(part)?;
                    shift |= implied_shift;
                    key = Some(code);
                }
            }
        }

        match key {
            Some(key) => Ok(KeyStroke { key, shift, ctrl, alt }),
            None => Err(Error::ParseError("No key specified in keystroke".to_string())),
        }
    }

    pub fn modifiers(&self) -> ModifierState {
        ModifierState::new(self.shift, self.ctrl, self.alt)
    }

    pub fn to_input(&self) -> KeyInput {
        KeyInput::new(self.key, self.modifiers())
    }
}

/// Parse a key name to a key code and whether it implies Shift
fn parse_key(part: &str) -> Result<(KeyCode, bool)> {
    let mut chars = part.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        return KeyCode::from_us_char(ch)
            .ok_or_else(|| Error::ParseError(format!("Unknown key: {}", part)));
    }

    match part.to_uppercase().as_str() {
        "SPACE" => Ok((KeyCode::Space, false)),
        "BACKSPACE" | "BACK" => Ok((KeyCode::Backspace, false)),
        "ENTER" | "RETURN" => Ok((KeyCode::Enter, false)),
        "TAB" => Ok((KeyCode::Tab, false)),
        "ESC" | "ESCAPE" => Ok((KeyCode::Escape, false)),
        _ => part.parse::<KeyCode>().map(|code| (code, false)),
    }
}
