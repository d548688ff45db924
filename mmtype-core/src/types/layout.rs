use super::key_codes::KeyCode;

/// One physical key of a layout and the text it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyDescriptor {
    pub code: KeyCode,
    pub base: &'static str,     // may be empty for modifier keys
    pub shift: Option<&'static str>,
    pub alt: Option<&'static str>,
    pub label: &'static str,    // key cap, cosmetic only
}

impl KeyDescriptor {
    pub const fn new(code: KeyCode, base: &'static str, shift: &'static str, label: &'static str) -> Self {
        Self {
            code,
            base,
            shift: if shift.is_empty() { None } else { Some(shift) },
            alt: None,
            label,
        }
    }

    pub const fn with_alt(mut self, alt: &'static str) -> Self {
        self.alt = Some(alt);
        self
    }

    /// Shift text, ignoring empty bindings
    pub fn shift_text(&self) -> Option<&'static str> {
        self.shift.filter(|s| !s.is_empty())
    }

    /// Alt text, ignoring empty bindings
    pub fn alt_text(&self) -> Option<&'static str> {
        self.alt.filter(|s| !s.is_empty())
    }
}

/// A key able to produce some text, with the modifiers it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub code: KeyCode,
    pub shift: bool,
    pub alt: bool,
}

impl KeyBinding {
    pub fn base(code: KeyCode) -> Self {
        Self { code, shift: false, alt: false }
    }

    pub fn shifted(code: KeyCode) -> Self {
        Self { code, shift: true, alt: false }
    }

    pub fn alted(code: KeyCode) -> Self {
        Self { code, shift: false, alt: true }
    }
}
