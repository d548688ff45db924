use mmtype_core::layout::{select_output, KeyTable};
use mmtype_core::types::{KeyBinding, KeyCode, KeyDescriptor};
use mmtype_core::Error;
use pretty_assertions::assert_eq;

fn custom_keys() -> Vec<KeyDescriptor> {
    vec![
        KeyDescriptor::new(KeyCode::KeyA, "\u{1031}", "ဗ", "A"),
        KeyDescriptor::new(KeyCode::KeyQ, "q", "Q", "Q").with_alt("\u{200C}\u{1031}"),
        KeyDescriptor::new(KeyCode::KeyW, "w", "", "W").with_alt("ω"),
        KeyDescriptor::new(KeyCode::KeyE, "e", "w", "E"),
        KeyDescriptor::new(KeyCode::ShiftLeft, "", "", "Shift"),
    ]
}

fn custom_table() -> KeyTable {
    KeyTable::new(&custom_keys(), &[&[KeyCode::KeyQ, KeyCode::KeyW, KeyCode::KeyE]]).unwrap()
}

#[test]
fn test_modifier_precedence() {
    let table = custom_table();

    assert_eq!(table.resolve_char(KeyCode::KeyQ, false, false), "q");
    assert_eq!(table.resolve_char(KeyCode::KeyQ, true, false), "Q");
    assert_eq!(table.resolve_char(KeyCode::KeyQ, false, true), "\u{200C}\u{1031}");
    assert_eq!(table.resolve_char(KeyCode::KeyQ, true, true), "\u{200C}\u{1031}");
}

#[test]
fn test_unbound_modifier_falls_through() {
    let table = custom_table();

    // No shift binding on W
    assert_eq!(table.resolve_char(KeyCode::KeyW, true, false), "w");
    // No alt binding on E: shift is next in line
    assert_eq!(table.resolve_char(KeyCode::KeyE, true, true), "w");
    assert_eq!(table.resolve_char(KeyCode::KeyE, false, true), "e");
}

#[test]
fn test_select_output_directly() {
    let key = KeyDescriptor::new(KeyCode::KeyZ, "z", "Z", "Z").with_alt("ž");
    assert_eq!(select_output(&key, false, false), "z");
    assert_eq!(select_output(&key, true, false), "Z");
    assert_eq!(select_output(&key, true, true), "ž");
}

#[test]
fn test_unmapped_and_modifier_keys_resolve_empty() {
    let table = KeyTable::pyidaungsu();

    assert_eq!(table.resolve_char(KeyCode::Tab, false, false), "");
    assert_eq!(table.resolve_char(KeyCode::ShiftLeft, true, false), "");
    assert_eq!(table.resolve_char(KeyCode::ControlLeft, false, false), "");
    assert_eq!(table.resolve_code_str("NoSuchKey", false, false), "");
}

#[test]
fn test_pyidaungsu_resolution() {
    let table = KeyTable::pyidaungsu();

    assert_eq!(table.resolve_char(KeyCode::KeyU, false, false), "က");
    assert_eq!(table.resolve_char(KeyCode::KeyU, true, false), "ဥ");
    assert_eq!(table.resolve_char(KeyCode::KeyA, false, false), "\u{1031}");
    assert_eq!(table.resolve_char(KeyCode::KeyR, true, false), "၎င်း");
    assert_eq!(table.resolve_code_str("Semicolon", false, false), "း");
    assert_eq!(table.resolve_code_str("Digit7", true, false), "ရ");
    // Pyidaungsu has no alt layer
    assert_eq!(table.resolve_char(KeyCode::KeyU, false, true), "က");
}

#[test]
fn test_pyidaungsu_has_unique_codes() {
    let keys = KeyTable::pyidaungsu().keys().to_vec();
    assert!(KeyTable::new(&keys, &[]).is_ok());
}

#[test]
fn test_duplicate_code_rejected() {
    let mut keys = custom_keys();
    keys.push(KeyDescriptor::new(KeyCode::KeyQ, "x", "X", "Q"));

    match KeyTable::new(&keys, &[]) {
        Err(Error::DuplicateKeyCode(code)) => assert_eq!(code, KeyCode::KeyQ),
        other => panic!("expected duplicate key error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_reverse_lookup_round_trip() {
    let table = KeyTable::pyidaungsu();

    for key in table.keys() {
        if !key.base.is_empty() {
            let bindings = table.resolve_keys_for_char(key.base);
            assert!(bindings.contains(&KeyBinding::base(key.code)), "base of {}", key.code);
        }
        if let Some(shift) = key.shift_text() {
            let bindings = table.resolve_keys_for_char(shift);
            assert!(bindings.contains(&KeyBinding::shifted(key.code)), "shift of {}", key.code);
        }
        if let Some(alt) = key.alt_text() {
            let bindings = table.resolve_keys_for_char(alt);
            assert!(bindings.contains(&KeyBinding::alted(key.code)), "alt of {}", key.code);
        }
    }
}

#[test]
fn test_reverse_order_prefers_base() {
    let table = custom_table();

    // "w" is W's base and E's shift; base entries come first
    assert_eq!(
        table.resolve_keys_for_char("w"),
        vec![KeyBinding::base(KeyCode::KeyW), KeyBinding::shifted(KeyCode::KeyE)]
    );

    let space = KeyTable::pyidaungsu().resolve_keys_for_char(" ");
    assert_eq!(space, vec![KeyBinding::base(KeyCode::Space), KeyBinding::shifted(KeyCode::Space)]);
}

#[test]
fn test_reverse_order_groups_across_keys() {
    // Shift binding declared on an earlier key than the base binding
    let keys = [
        KeyDescriptor::new(KeyCode::KeyZ, "z", "x", "Z"),
        KeyDescriptor::new(KeyCode::KeyX, "x", "X", "X"),
    ];
    let table = KeyTable::new(&keys, &[]).unwrap();

    assert_eq!(
        table.resolve_keys_for_char("x"),
        vec![KeyBinding::base(KeyCode::KeyX), KeyBinding::shifted(KeyCode::KeyZ)]
    );
    assert_eq!(table.binding_for_char('x'), Some(KeyBinding::base(KeyCode::KeyX)));
}

#[test]
fn test_unmapped_char_has_no_keys() {
    assert!(KeyTable::pyidaungsu().resolve_keys_for_char("x").is_empty());
    assert!(KeyTable::pyidaungsu().resolve_keys_for_char("").is_empty());
}

#[test]
fn test_e_vowel_resolves_to_base_key_only() {
    let table = custom_table();
    let expected = vec![KeyBinding::base(KeyCode::KeyA)];

    assert_eq!(table.e_vowel_key(), Some(KeyCode::KeyA));
    assert_eq!(table.resolve_keys_for_char("\u{1031}"), expected);
    // Q's alt slot produces the ZWNJ form, but the base key still wins
    assert_eq!(table.resolve_keys_for_char("\u{200C}\u{1031}"), expected);
    assert_eq!(table.resolve_keys_for_char("\u{200A}\u{1031}"), expected);

    let table = KeyTable::pyidaungsu();
    assert_eq!(table.resolve_keys_for_char("\u{200C}\u{1031}"), expected);
}

#[test]
fn test_highlight_keys() {
    let table = KeyTable::pyidaungsu();

    assert!(table.highlight_keys(None).is_empty());
    assert_eq!(table.highlight_keys(Some('က')), vec![KeyCode::KeyU]);
    assert_eq!(table.highlight_keys(Some('\u{1031}')), vec![KeyCode::KeyA]);
    assert_eq!(
        table.highlight_keys(Some('ဗ')),
        vec![KeyCode::KeyA, KeyCode::ShiftLeft, KeyCode::ShiftRight]
    );
    assert!(table.highlight_keys(Some('x')).is_empty());
}

#[test]
fn test_highlight_leading_char_of_ligature() {
    let table = KeyTable::pyidaungsu();
    assert_eq!(
        table.highlight_keys(Some('၎')),
        vec![KeyCode::KeyR, KeyCode::ShiftLeft, KeyCode::ShiftRight]
    );
}

#[test]
fn test_highlight_alt_binding() {
    let table = custom_table();
    assert_eq!(
        table.highlight_keys(Some('ω')),
        vec![KeyCode::KeyW, KeyCode::AltLeft, KeyCode::AltRight]
    );
}

#[test]
fn test_rows() {
    let rows = KeyTable::pyidaungsu().rows();
    assert_eq!(rows.len(), 5);
    assert_eq!(rows[2][0], KeyCode::KeyA);
    assert_eq!(rows[4], vec![KeyCode::ShiftLeft, KeyCode::ControlLeft, KeyCode::Space]);
}

#[test]
fn test_code_strings_round_trip() {
    for code in KeyCode::ALL {
        assert_eq!(code.as_str().parse::<KeyCode>().unwrap(), code);
    }
    assert!("keya".parse::<KeyCode>().is_err());
}

#[test]
fn test_us_char_mapping() {
    assert_eq!(KeyCode::from_us_char('a'), Some((KeyCode::KeyA, false)));
    assert_eq!(KeyCode::from_us_char('A'), Some((KeyCode::KeyA, true)));
    assert_eq!(KeyCode::from_us_char(':'), Some((KeyCode::Semicolon, true)));
    assert_eq!(KeyCode::from_us_char(' '), Some((KeyCode::Space, false)));
    assert_eq!(KeyCode::from_us_char('က'), None);
}
