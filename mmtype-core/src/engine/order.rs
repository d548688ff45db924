//! Typing order versus visual order

use crate::layout::E_VOWEL;

/// How the key presses for a target line up with its stored characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypingOrder {
    /// Keys are pressed in the order the characters are stored.
    Visual,
    /// The target starts with consonant + E vowel; the vowel is pressed
    /// first, so typing slots 0 and 1 are swapped. Everything after slot 1
    /// maps one to one.
    VowelFirst,
}

impl TypingOrder {
    /// Detects the ordering for a target.
    pub fn detect(target: &[char]) -> Self {
        if is_e_pattern(target) {
            TypingOrder::VowelFirst
        } else {
            TypingOrder::Visual
        }
    }

    pub fn is_reordered(self) -> bool {
        self == TypingOrder::VowelFirst
    }

    /// Index into the target of the character typed at `typing_pos`.
    pub fn visual_index(self, typing_pos: usize) -> usize {
        match (self, typing_pos) {
            (TypingOrder::VowelFirst, 0) => 1,
            (TypingOrder::VowelFirst, 1) => 0,
            (_, pos) => pos,
        }
    }

    /// The target rearranged into key press order.
    pub fn typing_sequence(self, target: &[char]) -> Vec<char> {
        (0..target.len()).map(|pos| target[self.visual_index(pos)]).collect()
    }
}

/// Consonant followed by the E vowel at the start of the target.
pub fn is_e_pattern(target: &[char]) -> bool {
    target.len() >= 2 && target[1] == E_VOWEL && target[0] != ' ' && target[0] != E_VOWEL
}
