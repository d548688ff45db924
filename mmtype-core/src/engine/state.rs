use super::matcher::{correct_prefix_in, next_char_in};
use super::order::TypingOrder;

/// Where an attempt at one target stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Nothing typed yet
    #[default]
    Idle,
    Typing,
    /// Input matches the target; further keys are ignored
    Completed,
}

/// Colouring of one target character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharMark {
    Pending,
    Correct,
    Wrong,
}

/// One attempt at typing a target: the target and the input buffer
#[derive(Debug, Clone)]
pub struct AttemptState {
    target_text: String,
    target: Vec<char>,
    order: TypingOrder,
    /// Target in key press order
    sequence: Vec<char>,
    input: Vec<char>,
    phase: Phase,
}

impl Default for AttemptState {
    fn default() -> Self {
        Self::new("")
    }
}

impl AttemptState {
    pub fn new(target: &str) -> Self {
        let chars: Vec<char> = target.chars().collect();
        let order = TypingOrder::detect(&chars);
        Self {
            target_text: target.to_string(),
            sequence: order.typing_sequence(&chars),
            target: chars,
            order,
            input: Vec::new(),
            phase: Phase::Idle,
        }
    }

    pub fn target(&self) -> &str {
        &self.target_text
    }

    pub fn target_chars(&self) -> &[char] {
        &self.target
    }

    pub fn input(&self) -> &[char] {
        &self.input
    }

    pub fn input_text(&self) -> String {
        self.input.iter().collect()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn next_char(&self) -> Option<char> {
        next_char_in(&self.target, &self.input)
    }

    /// Leading input characters matching the target, in key press order or
    /// in stored order, whichever matches further.
    pub fn correct_prefix(&self) -> usize {
        self.matched().0
    }

    /// Correct prefix and whether it was counted in key press order
    fn matched(&self) -> (usize, bool) {
        let typed = correct_prefix_in(self.sequence.iter().copied(), self.input.iter().copied());
        let stored = correct_prefix_in(self.target.iter().copied(), self.input.iter().copied());
        if stored > typed {
            (stored, false)
        } else {
            (typed, true)
        }
    }

    /// Append typed text; returns whether it went against the expected character.
    pub fn append(&mut self, text: &str) -> bool {
        let Some(first) = text.chars().next() else {
            return false;
        };
        let mismatch = self.next_char() != Some(first);

        self.input.extend(text.chars());
        self.phase = Phase::Typing;
        self.update_completion();
        mismatch
    }

    /// Remove the last typed character; returns whether anything was removed.
    pub fn backspace(&mut self) -> bool {
        if self.input.pop().is_none() {
            return false;
        }
        self.phase = Phase::Typing;
        self.update_completion();
        true
    }

    /// Replace the whole input buffer
    pub fn replace(&mut self, text: &str) {
        self.input = text.chars().collect();
        self.phase = if self.input.is_empty() { Phase::Idle } else { Phase::Typing };
        self.update_completion();
    }

    /// Clear the input and go back to idle
    pub fn reset(&mut self) {
        self.input.clear();
        self.phase = Phase::Idle;
    }

    fn update_completion(&mut self) {
        if !self.target.is_empty() && (self.input == self.target || self.input == self.sequence) {
            self.phase = Phase::Completed;
        }
    }

    /// Per-character marks of the target, in display order
    pub fn marks(&self) -> Vec<CharMark> {
        let mut marks = vec![CharMark::Pending; self.target.len()];
        let (correct, key_order) = self.matched();
        let slot = |pos: usize| if key_order { self.order.visual_index(pos) } else { pos };

        for pos in 0..correct {
            marks[slot(pos)] = CharMark::Correct;
        }
        if correct < self.input.len() && correct < self.target.len() {
            marks[slot(correct)] = CharMark::Wrong;
        }
        marks
    }
}
