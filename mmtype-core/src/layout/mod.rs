//! Keyboard layouts and the key resolution table

pub mod pyidaungsu;
mod table;

pub use table::{select_output, KeyTable};

/// MYANMAR VOWEL SIGN E, typed before its consonant but rendered after it.
pub const E_VOWEL: char = '\u{1031}';
pub const E_VOWEL_STR: &str = "\u{1031}";

/// Invisible characters that input methods place in front of a lone E vowel
/// (ZWNJ, ZWSP and the hair space filler some layouts emit).
pub const E_FILLERS: [char; 3] = ['\u{200C}', '\u{200B}', '\u{200A}'];

/// Whether `text` is some representation of the E vowel.
pub fn is_e_vowel_text(text: &str) -> bool {
    text.contains(E_VOWEL)
}

/// Removes fillers that directly precede an E vowel.
pub fn strip_e_fillers(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending = String::new();

    for ch in text.chars() {
        if E_FILLERS.contains(&ch) {
            pending.push(ch);
            continue;
        }
        if ch != E_VOWEL {
            out.push_str(&pending);
        }
        pending.clear();
        out.push(ch);
    }
    out.push_str(&pending);
    out
}
