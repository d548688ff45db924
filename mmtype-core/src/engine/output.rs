//! Output representation for the typing session

use crate::types::KeyCode;
use super::state::Phase;

/// Feedback after a key press or buffer change
#[derive(Debug, Clone, PartialEq)]
pub struct EngineOutput {
    /// What the session did with the event
    pub action: ActionType,
    /// Character expected next, for highlighting
    pub next_char: Option<char>,
    /// Keys to light up on the on-screen keyboard
    pub highlight: Vec<KeyCode>,
    /// Leading input characters that are correct
    pub correct_prefix: usize,
    /// Characters in the current target
    pub total: usize,
    /// The last typed text went against the expected character
    pub mismatch: bool,
    /// Attempt state after the event
    pub phase: Phase,
}

/// Types of actions the session can report
#[derive(Debug, Clone, PartialEq)]
pub enum ActionType {
    /// Nothing changed (unmapped key, modifier, completed target)
    None,
    /// Text appended to the input buffer
    Insert(String),
    /// One character removed from the input buffer
    Backspace,
    /// Input buffer replaced wholesale
    Replace(String),
    /// An on-screen modifier was latched or released
    ModifierToggled(KeyCode),
}

impl EngineOutput {
    /// Whether the current target has been typed completely
    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// Fraction of the target typed correctly, in `0.0..=1.0`
    pub fn progress(&self) -> f32 {
        if self.total == 0 {
            0.0
        } else {
            self.correct_prefix as f32 / self.total as f32
        }
    }
}
