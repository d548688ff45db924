//! Input representation for the typing session

use crate::types::KeyCode;

/// A key press, from a physical keyboard or the on-screen one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    /// Physical key position
    pub code: KeyCode,
    /// Modifier keys state
    pub modifiers: ModifierState,
}

impl KeyInput {
    /// Creates a new key input
    pub fn new(code: KeyCode, modifiers: ModifierState) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key input without modifiers
    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, ModifierState::default())
    }

    /// Creates a key input with Shift held
    pub fn shifted(code: KeyCode) -> Self {
        Self::new(code, ModifierState::new(true, false, false))
    }
}

/// State of modifier keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModifierState {
    pub shift: bool,
    /// Accepted but does not change what a key produces
    pub ctrl: bool,
    pub alt: bool,
}

impl ModifierState {
    /// Creates a new modifier state
    pub fn new(shift: bool, ctrl: bool, alt: bool) -> Self {
        Self { shift, ctrl, alt }
    }
}
