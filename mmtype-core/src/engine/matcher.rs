//! Matching of typed input against the target text

use super::order::TypingOrder;

/// The character the user has to type next, or `None` when nothing is
/// expected.
///
/// `input` is in key press order. For targets starting with consonant + E
/// vowel the vowel is expected first. If the first key of such a target was
/// wrong there is no suggestion until it is corrected.
pub fn next_char(target: &str, input: &str) -> Option<char> {
    let target: Vec<char> = target.chars().collect();
    let input: Vec<char> = input.chars().collect();
    next_char_in(&target, &input)
}

pub(crate) fn next_char_in(target: &[char], input: &[char]) -> Option<char> {
    if target.is_empty() {
        return None;
    }

    let order = TypingOrder::detect(target);
    let pos = input.len();

    // The second slot of a reordered pair is only meaningful once the first
    // slot holds the right character.
    if order.is_reordered() && pos == 1 && input[0] != target[order.visual_index(0)] {
        return None;
    }

    if pos >= target.len() {
        return None;
    }
    Some(target[order.visual_index(pos)])
}

/// Number of leading characters of `input` equal to `target`, stopping at the
/// first difference.
pub fn correct_prefix_length(target: &str, input: &str) -> usize {
    correct_prefix_in(target.chars(), input.chars())
}

pub(crate) fn correct_prefix_in<T, I>(target: T, input: I) -> usize
where
    T: IntoIterator<Item = char>,
    I: IntoIterator<Item = char>,
{
    input
        .into_iter()
        .zip(target)
        .take_while(|(typed, expected)| typed == expected)
        .count()
}

/// Whether appending `typed` to `input` goes against what was expected next.
pub fn is_mismatch(target: &str, input: &str, typed: &str) -> bool {
    match typed.chars().next() {
        Some(ch) => next_char(target, input) != Some(ch),
        None => false,
    }
}
