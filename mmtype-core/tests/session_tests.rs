mod common;

use common::*;
use mmtype_core::engine::{ActionType, Advance, KeyInput, ModifierState, Phase, TypingSession};
use mmtype_core::{KeyCode, KeyTable};
use pretty_assertions::assert_eq;

#[test]
fn test_idle_until_first_key() {
    let mut session = session_with(&["မာ"]);
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.feedback().next_char, Some('မ'));
    assert_eq!(session.feedback().total, 2);

    let out = press(&mut session, KeyCode::KeyR);
    assert_eq!(out.action, ActionType::Insert("မ".to_string()));
    assert_eq!(out.phase, Phase::Typing);
    assert_eq!(session.last_typed(), "မ");
}

#[test]
fn test_shift_selects_upper_character() {
    let mut session = session_with(&["ဗ"]);
    let out = press_shifted(&mut session, KeyCode::KeyA);
    assert_eq!(out.action, ActionType::Insert("ဗ".to_string()));
    assert!(out.is_completed());
}

#[test]
fn test_control_does_not_change_resolution() {
    let mut session = session_with(&["က"]);
    let out = session.process_key(KeyInput::new(KeyCode::KeyU, ModifierState::new(false, true, false)));
    assert_eq!(out.action, ActionType::Insert("က".to_string()));
}

#[test]
fn test_modifier_and_unmapped_keys_produce_nothing() {
    let mut session = session_with(&["က"]);

    let out = press(&mut session, KeyCode::ShiftLeft);
    assert_eq!(out.action, ActionType::None);
    let out = press(&mut session, KeyCode::Tab);
    assert_eq!(out.action, ActionType::None);

    assert_eq!(input_text(&session), "");
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn test_space_appends_space() {
    let mut session = session_with(&["က ခ"]);
    press_all(&mut session, &["KeyU", "Space"]);
    assert_eq!(input_text(&session), "က ");

    let out = press(&mut session, KeyCode::KeyC);
    assert!(out.is_completed());
}

#[test]
fn test_mismatch_blocks_progress_until_backspace() {
    let mut session = session_with(&["ကခ"]);

    press(&mut session, KeyCode::KeyU);
    let out = press(&mut session, KeyCode::KeyQ);
    assert!(out.mismatch);
    assert_eq!(out.correct_prefix, 1);

    // A correct character after the error does not count
    let out = press(&mut session, KeyCode::KeyC);
    assert!(out.mismatch);
    assert_eq!(out.correct_prefix, 1);

    press(&mut session, KeyCode::Backspace);
    let out = press(&mut session, KeyCode::Backspace);
    assert_eq!(out.action, ActionType::Backspace);
    assert_eq!(out.correct_prefix, 1);
    assert_eq!(out.next_char, Some('ခ'));

    let out = press(&mut session, KeyCode::KeyC);
    assert!(!out.mismatch);
    assert!(out.is_completed());
}

#[test]
fn test_backspace_on_empty_input() {
    let mut session = session_with(&["က"]);
    let out = session.backspace();
    assert_eq!(out.action, ActionType::None);
    assert_eq!(out.phase, Phase::Idle);
}

#[test]
fn test_completed_target_ignores_keys() {
    let mut session = session_with(&["က", "ခ"]);
    press(&mut session, KeyCode::KeyU);
    assert_eq!(session.phase(), Phase::Completed);

    let out = press(&mut session, KeyCode::KeyU);
    assert_eq!(out.action, ActionType::None);
    let out = press(&mut session, KeyCode::Backspace);
    assert_eq!(out.action, ActionType::None);
    assert_eq!(input_text(&session), "က");
}

#[test]
fn test_advance_through_lesson() {
    let mut session = session_with(&["က", "ခ"]);
    assert_eq!(session.position(), (0, 2));

    press(&mut session, KeyCode::KeyU);
    assert_eq!(session.advance(), Advance::Next(1));
    assert_eq!(session.position(), (1, 2));
    assert_eq!(session.current_target(), "ခ");
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(input_text(&session), "");

    press(&mut session, KeyCode::KeyC);
    assert_eq!(session.advance(), Advance::Finished);

    session.retry();
    assert_eq!(session.position(), (0, 2));
    assert_eq!(session.current_target(), "က");
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn test_load_targets_discards_input() {
    let mut session = session_with(&["ကခ"]);
    press(&mut session, KeyCode::KeyU);

    session.load_targets(vec!["ဂ".to_string()]);
    assert_eq!(session.current_target(), "ဂ");
    assert_eq!(input_text(&session), "");
    assert_eq!(session.phase(), Phase::Idle);
}

#[test]
fn test_restart_target() {
    let mut session = session_with(&["ကခ"]);
    press(&mut session, KeyCode::KeyU);
    session.restart_target();
    assert_eq!(input_text(&session), "");
    assert_eq!(session.feedback().next_char, Some('က'));
}

#[test]
fn test_empty_lesson_never_completes() {
    let mut session = TypingSession::new(KeyTable::pyidaungsu());
    assert_eq!(session.current_target(), "");
    assert_eq!(session.feedback().next_char, None);

    let out = press(&mut session, KeyCode::KeyU);
    assert!(out.mismatch);
    assert_eq!(out.phase, Phase::Typing);
    assert_eq!(out.total, 0);
    assert_eq!(session.advance(), Advance::Finished);
}

#[test]
fn test_multi_character_key_output() {
    let mut session = session_with(&["၎င်း"]);

    let out = session.feedback();
    assert_eq!(out.highlight, vec![KeyCode::KeyR, KeyCode::ShiftLeft, KeyCode::ShiftRight]);

    let out = press_shifted(&mut session, KeyCode::KeyR);
    assert_eq!(out.correct_prefix, 4);
    assert_eq!(out.total, 4);
    assert!(out.is_completed());
}

#[test]
fn test_virtual_shift_latches() {
    let mut session = session_with(&["ဗဗ"]);

    let out = session.process_virtual_key(KeyCode::ShiftLeft);
    assert_eq!(out.action, ActionType::ModifierToggled(KeyCode::ShiftLeft));
    assert!(session.latched_modifiers().shift);

    session.process_virtual_key(KeyCode::KeyA);
    session.process_virtual_key(KeyCode::KeyA);
    assert!(session.phase() == Phase::Completed);

    session.process_virtual_key(KeyCode::ShiftRight);
    assert!(!session.latched_modifiers().shift);
}

#[test]
fn test_virtual_control_toggles_without_effect() {
    let mut session = session_with(&["က"]);

    session.process_virtual_key(KeyCode::ControlLeft);
    assert!(session.latched_modifiers().ctrl);

    let out = session.process_virtual_key(KeyCode::KeyU);
    assert_eq!(out.action, ActionType::Insert("က".to_string()));
    assert!(out.is_completed());
}

#[test]
fn test_virtual_space() {
    let mut session = session_with(&[" "]);
    let out = session.process_virtual_key(KeyCode::Space);
    assert!(out.is_completed());
}

#[test]
fn test_process_text_replaces_buffer() {
    let mut session = session_with(&["ကခ"]);

    let out = session.process_text("ကဂ");
    assert_eq!(out.action, ActionType::Replace("ကဂ".to_string()));
    assert!(out.mismatch);
    assert_eq!(out.correct_prefix, 1);
    assert_eq!(session.last_typed(), "ဂ");

    let out = session.process_text("");
    assert_eq!(out.phase, Phase::Idle);
    assert!(!out.mismatch);
}

#[test]
fn test_progress_fraction() {
    let mut session = session_with(&["ကခဂဃ"]);
    press_all(&mut session, &["KeyU", "KeyC"]);
    assert_eq!(session.feedback().progress(), 0.5);
}
