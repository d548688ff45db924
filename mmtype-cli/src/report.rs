//! Plain-text output of the non-interactive subcommands

use mmtype_core::engine::{AttemptState, CharMark, EngineOutput, TypingSession};
use mmtype_core::lesson::normalize_target;
use mmtype_core::{KeyBinding, KeyCode, KeyStroke, KeyTable, Lessons, Result};

/// Chord that produces a binding, e.g. "Shift+KeyR"
pub fn chord_name(binding: &KeyBinding) -> String {
    let mut name = String::new();
    if binding.shift {
        name.push_str("Shift+");
    }
    if binding.alt {
        name.push_str("Alt+");
    }
    name.push_str(binding.code.as_str());
    name
}

/// One line per code point of `text` with the chord that types it
pub fn describe_keys(table: &KeyTable, text: &str) -> Vec<String> {
    normalize_target(text)
        .chars()
        .map(|ch| {
            let chord = table
                .binding_for_char(ch)
                .map(|binding| chord_name(&binding))
                .unwrap_or_else(|| "-".to_string());
            format!("U+{:04X} {:?} {}", ch as u32, ch, chord)
        })
        .collect()
}

fn key_cell(table: &KeyTable, code: KeyCode, shift: bool) -> String {
    let Some(key) = table.descriptor(code) else {
        return code.as_str().to_string();
    };
    if key.base.is_empty() || code == KeyCode::Space {
        return key.label.to_string();
    }
    match (shift, key.shift_text()) {
        (true, Some(text)) => text.to_string(),
        _ => key.base.to_string(),
    }
}

/// The on-screen keyboard, one line per row.
///
/// Highlighted keys are drawn as `<x>`, the others as `[x]`.
pub fn render_layout(table: &KeyTable, shift: bool, highlight: &[KeyCode]) -> Vec<String> {
    table
        .rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|&code| {
                    let cell = key_cell(table, code, shift);
                    if highlight.contains(&code) {
                        format!("<{}>", cell)
                    } else {
                        format!("[{}]", cell)
                    }
                })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Target marks as text: `+` correct, `x` wrong, `.` not typed yet
pub fn mark_string(attempt: &AttemptState) -> String {
    attempt
        .marks()
        .into_iter()
        .map(|mark| match mark {
            CharMark::Correct => '+',
            CharMark::Wrong => 'x',
            CharMark::Pending => '.',
        })
        .collect()
}

fn feedback_line(chord: &str, session: &TypingSession<'_>, output: &EngineOutput) -> String {
    let next = match output.next_char {
        Some(ch) => {
            let chord = session
                .table()
                .binding_for_char(ch)
                .map(|binding| chord_name(&binding))
                .unwrap_or_else(|| "-".to_string());
            format!("{:?} ({})", ch, chord)
        }
        None => "none".to_string(),
    };

    format!(
        "{:<14} input={:?} marks={} correct={}/{} next={}{} {:?}",
        chord,
        session.attempt().input_text(),
        mark_string(session.attempt()),
        output.correct_prefix,
        output.total,
        next,
        if output.mismatch { " MISMATCH" } else { "" },
        output.phase,
    )
}

/// Type `strokes` against `target` and describe the feedback after each one.
///
/// Fails on the first chord that does not parse.
pub fn replay(table: &KeyTable, target: &str, strokes: &[String]) -> Result<Vec<String>> {
    let mut session = TypingSession::with_targets(table, vec![normalize_target(target)]);
    let mut lines = Vec::with_capacity(strokes.len());

    for chord in strokes {
        let stroke = KeyStroke::parse(chord)?;
        let output = session.process_key(stroke.to_input());
        lines.push(feedback_line(chord, &session, &output));
    }
    Ok(lines)
}

/// Levels with their lessons in practice order and the number of items
pub fn lesson_summary(lessons: &Lessons) -> Vec<String> {
    let mut lines = Vec::new();
    for level in lessons.levels() {
        lines.push(level.to_string());
        for lesson in lessons.sorted_lessons(level) {
            lines.push(format!("  {:<12} {} items", lesson, lessons.targets(level, lesson).len()));
        }
    }
    lines
}
