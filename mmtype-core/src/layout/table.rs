use std::collections::HashMap;
use std::sync::OnceLock;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::types::{KeyBinding, KeyCode, KeyDescriptor};
use super::{is_e_vowel_text, pyidaungsu, E_VOWEL_STR};

/// Picks the text a key produces under the given modifiers.
///
/// Alt wins over Shift, Shift wins over the base text. A modifier whose slot
/// is unbound falls through to the next one.
pub fn select_output(key: &KeyDescriptor, shift_active: bool, alt_active: bool) -> &'static str {
    if alt_active {
        if let Some(alt) = key.alt_text() {
            return alt;
        }
    }
    if shift_active {
        if let Some(shift) = key.shift_text() {
            return shift;
        }
    }
    key.base
}

/// Produced text -> keys able to produce it.
#[derive(Debug, Clone, Default)]
pub(crate) struct ReverseKeyIndex {
    map: HashMap<&'static str, Vec<KeyBinding>>,
}

impl ReverseKeyIndex {
    /// All base bindings come first, then all shift bindings, then all alt
    /// bindings, each group in declaration order. This is not a per-key walk:
    /// a text bound as Shift on an early key and as base on a later key lists
    /// the base binding first.
    pub fn build(keys: &[KeyDescriptor]) -> Self {
        let mut index = Self::default();

        for key in keys {
            index.insert(key.base, KeyBinding::base(key.code));
        }
        for key in keys {
            if let Some(shift) = key.shift_text() {
                index.insert(shift, KeyBinding::shifted(key.code));
            }
        }
        for key in keys {
            if let Some(alt) = key.alt_text() {
                index.insert(alt, KeyBinding::alted(key.code));
            }
        }

        index
    }

    fn insert(&mut self, text: &'static str, binding: KeyBinding) {
        if text.is_empty() {
            return;
        }
        let bindings = self.map.entry(text).or_default();
        if !bindings.contains(&binding) {
            bindings.push(binding);
        }
    }

    pub fn get(&self, text: &str) -> &[KeyBinding] {
        self.map.get(text).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }
}

/// A keyboard layout with its reverse lookup, immutable once built.
#[derive(Debug, Clone)]
pub struct KeyTable {
    keys: Vec<KeyDescriptor>,
    by_code: HashMap<KeyCode, usize>,
    reverse: ReverseKeyIndex,
    e_vowel_key: Option<KeyCode>,
    rows: Vec<Vec<KeyCode>>,
}

impl KeyTable {
    /// Build a table, rejecting layouts that bind the same key code twice.
    pub fn new(keys: &[KeyDescriptor], rows: &[&[KeyCode]]) -> Result<Self> {
        let mut seen = HashMap::new();
        for (i, key) in keys.iter().enumerate() {
            if seen.insert(key.code, i).is_some() {
                return Err(Error::DuplicateKeyCode(key.code));
            }
        }
        Ok(Self::build(keys, rows))
    }

    fn build(keys: &[KeyDescriptor], rows: &[&[KeyCode]]) -> Self {
        let by_code = keys.iter().enumerate().map(|(i, k)| (k.code, i)).collect();
        let e_vowel_key = keys.iter().find(|k| k.base == E_VOWEL_STR).map(|k| k.code);
        let reverse = ReverseKeyIndex::build(keys);

        debug!(
            "Built key table: {} keys, {} distinct outputs, E vowel on {:?}",
            keys.len(),
            reverse.len(),
            e_vowel_key
        );

        Self {
            keys: keys.to_vec(),
            by_code,
            reverse,
            e_vowel_key,
            rows: rows.iter().map(|row| row.to_vec()).collect(),
        }
    }

    /// The process-wide Pyidaungsu table, built on first use.
    pub fn pyidaungsu() -> &'static KeyTable {
        static TABLE: OnceLock<KeyTable> = OnceLock::new();
        TABLE.get_or_init(|| Self::build(pyidaungsu::KEYS, pyidaungsu::ROWS))
    }

    pub fn keys(&self) -> &[KeyDescriptor] {
        &self.keys
    }

    pub fn rows(&self) -> &[Vec<KeyCode>] {
        &self.rows
    }

    /// Key bound to the E vowel in its base slot
    pub fn e_vowel_key(&self) -> Option<KeyCode> {
        self.e_vowel_key
    }

    pub fn descriptor(&self, code: KeyCode) -> Option<&KeyDescriptor> {
        self.by_code.get(&code).map(|&i| &self.keys[i])
    }

    /// Text produced by `code` under the given modifiers; empty when the key
    /// is not part of the layout or only acts as a modifier.
    pub fn resolve_char(&self, code: KeyCode, shift_active: bool, alt_active: bool) -> &'static str {
        match self.descriptor(code) {
            Some(key) => select_output(key, shift_active, alt_active),
            None => {
                trace!("No binding for {}", code);
                ""
            }
        }
    }

    /// Like [`resolve_char`](Self::resolve_char) for a raw W3C code string.
    pub fn resolve_code_str(&self, code: &str, shift_active: bool, alt_active: bool) -> &'static str {
        match code.parse::<KeyCode>() {
            Ok(code) => self.resolve_char(code, shift_active, alt_active),
            Err(_) => {
                debug!("Unknown key code string {:?}", code);
                ""
            }
        }
    }

    /// Every key able to produce `text`; the first entry is the preferred one.
    ///
    /// The E vowel always resolves to the single key holding it in its base
    /// slot, whatever filler or composed form is asked for.
    pub fn resolve_keys_for_char(&self, text: &str) -> Vec<KeyBinding> {
        if is_e_vowel_text(text) {
            if let Some(code) = self.e_vowel_key {
                return vec![KeyBinding::base(code)];
            }
        }
        self.reverse.get(text).to_vec()
    }

    /// The preferred binding for a single character.
    ///
    /// Falls back to the first key whose output begins with `ch`, which is how
    /// the leading character of a multi-character output (Shift+R) is reached.
    pub fn binding_for_char(&self, ch: char) -> Option<KeyBinding> {
        let mut buf = [0u8; 4];
        let text: &str = ch.encode_utf8(&mut buf);

        if let Some(binding) = self.resolve_keys_for_char(text).first() {
            return Some(*binding);
        }

        self.keys.iter().find_map(|key| {
            if key.base.len() > text.len() && key.base.starts_with(text) {
                Some(KeyBinding::base(key.code))
            } else if key.shift_text().is_some_and(|s| s.len() > text.len() && s.starts_with(text)) {
                Some(KeyBinding::shifted(key.code))
            } else if key.alt_text().is_some_and(|s| s.len() > text.len() && s.starts_with(text)) {
                Some(KeyBinding::alted(key.code))
            } else {
                None
            }
        })
    }

    /// Keys to light up on the on-screen keyboard for the next character.
    pub fn highlight_keys(&self, next: Option<char>) -> Vec<KeyCode> {
        let Some(binding) = next.and_then(|ch| self.binding_for_char(ch)) else {
            return Vec::new();
        };

        let mut keys = vec![binding.code];
        if binding.shift {
            keys.extend([KeyCode::ShiftLeft, KeyCode::ShiftRight]);
        }
        if binding.alt {
            keys.extend([KeyCode::AltLeft, KeyCode::AltRight]);
        }
        keys
    }
}
