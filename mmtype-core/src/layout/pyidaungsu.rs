//! The Pyidaungsu Myanmar Unicode layout

use crate::types::{KeyCode, KeyDescriptor};
use super::E_VOWEL_STR;

const fn key(code: KeyCode, base: &'static str, shift: &'static str, label: &'static str) -> KeyDescriptor {
    KeyDescriptor::new(code, base, shift, label)
}

pub const KEYS: &[KeyDescriptor] = &[
    key(KeyCode::Backquote, "ၐ", "ဎ", "`"),
    key(KeyCode::Digit1, "၁", "ဍ", "1"),
    key(KeyCode::Digit2, "၂", "ၒ", "2"),
    key(KeyCode::Digit3, "၃", "ဋ", "3"),
    key(KeyCode::Digit4, "၄", "ၓ", "4"),
    key(KeyCode::Digit5, "၅", "ၔ", "5"),
    key(KeyCode::Digit6, "၆", "ၕ", "6"),
    key(KeyCode::Digit7, "၇", "ရ", "7"),
    key(KeyCode::Digit8, "၈", "*", "8"),
    key(KeyCode::Digit9, "၉", "(", "9"),
    key(KeyCode::Digit0, "၀", ")", "0"),
    key(KeyCode::Minus, "-", "_", "-"),
    key(KeyCode::Equal, "=", "+", "="),

    key(KeyCode::KeyQ, "ဆ", "ဈ", "Q"),
    key(KeyCode::KeyW, "တ", "ဝ", "W"),
    key(KeyCode::KeyE, "န", "ဣ", "E"),
    key(KeyCode::KeyR, "မ", "၎င်း", "R"),
    key(KeyCode::KeyT, "အ", "ဤ", "T"),
    key(KeyCode::KeyY, "ပ", "၌", "Y"),
    key(KeyCode::KeyU, "က", "ဥ", "U"),
    key(KeyCode::KeyI, "င", "၍", "I"),
    key(KeyCode::KeyO, "သ", "ဿ", "O"),
    key(KeyCode::KeyP, "စ", "ဏ", "P"),
    key(KeyCode::BracketLeft, "ဟ", "ဧ", "["),
    key(KeyCode::BracketRight, "ဩ", "ဪ", "]"),

    key(KeyCode::KeyA, E_VOWEL_STR, "ဗ", "A"),
    key(KeyCode::KeyS, "ျ", "ှ", "S"),
    key(KeyCode::KeyD, "ိ", "ီ", "D"),
    key(KeyCode::KeyF, "်", "္", "F"),
    key(KeyCode::KeyG, "ါ", "ွ", "G"),
    key(KeyCode::KeyH, "့", "ံ", "H"),
    key(KeyCode::KeyJ, "ြ", "ဲ", "J"),
    key(KeyCode::KeyK, "ု", "ဒ", "K"),
    key(KeyCode::KeyL, "ူ", "ဓ", "L"),
    key(KeyCode::Semicolon, "း", "ဂ", ";"),
    key(KeyCode::Quote, "'", "\"", "'"),

    key(KeyCode::KeyZ, "ဖ", "ဇ", "Z"),
    key(KeyCode::KeyX, "ထ", "ဌ", "X"),
    key(KeyCode::KeyC, "ခ", "ဃ", "C"),
    key(KeyCode::KeyV, "လ", "ဠ", "V"),
    key(KeyCode::KeyB, "ဘ", "ယ", "B"),
    key(KeyCode::KeyN, "ည", "ဉ", "N"),
    key(KeyCode::KeyM, "ာ", "ဦ", "M"),
    key(KeyCode::Comma, ",", "၊", ","),
    key(KeyCode::Period, ".", "။", "."),
    key(KeyCode::Slash, "/", "?", "/"),

    key(KeyCode::Space, " ", " ", "Space"),
    key(KeyCode::ShiftLeft, "", "", "Shift"),
    key(KeyCode::ShiftRight, "", "", "Shift"),
    key(KeyCode::ControlLeft, "", "", "Ctrl"),
    key(KeyCode::ControlRight, "", "", "Ctrl"),
];

/// On-screen keyboard rows, top to bottom.
pub const ROWS: &[&[KeyCode]] = &[
    &[
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
    ],
    &[
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
    ],
    &[
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
    ],
    &[
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
    ],
    &[KeyCode::ShiftLeft, KeyCode::ControlLeft, KeyCode::Space],
];
