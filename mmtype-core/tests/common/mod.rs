#![allow(dead_code)]

use mmtype_core::engine::{EngineOutput, KeyInput, TypingSession};
use mmtype_core::{KeyCode, KeyStroke, KeyTable};

pub const E: char = '\u{1031}';

/// Creates a session over the Pyidaungsu table with the given targets
pub fn session_with(targets: &[&str]) -> TypingSession<'static> {
    TypingSession::with_targets(
        KeyTable::pyidaungsu(),
        targets.iter().map(|t| t.to_string()).collect(),
    )
}

/// Helper to press a key without modifiers
pub fn press(session: &mut TypingSession<'_>, code: KeyCode) -> EngineOutput {
    session.process_key(KeyInput::plain(code))
}

/// Helper to press a key with Shift held
pub fn press_shifted(session: &mut TypingSession<'_>, code: KeyCode) -> EngineOutput {
    session.process_key(KeyInput::shifted(code))
}

/// Press a sequence of chords like `["KeyA", "Shift+KeyU"]`, returning every output
pub fn press_all(session: &mut TypingSession<'_>, chords: &[&str]) -> Vec<EngineOutput> {
    chords
        .iter()
        .map(|chord| {
            let stroke = KeyStroke::parse(chord).expect("valid chord in test");
            session.process_key(stroke.to_input())
        })
        .collect()
}

pub fn input_text(session: &TypingSession<'_>) -> String {
    session.attempt().input_text()
}
