use log::{debug, info, trace};

use crate::layout::{strip_e_fillers, KeyTable};
use crate::types::KeyCode;
use super::{ActionType, AttemptState, EngineOutput, KeyInput, ModifierState, Phase};

/// Result of moving past a completed target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Moved on to the target at this index
    Next(usize),
    /// There are no more targets in the lesson
    Finished,
}

/// Input controller for one lesson: owns the input buffer and walks through
/// the lesson's targets.
pub struct TypingSession<'a> {
    table: &'a KeyTable,
    targets: Vec<String>,
    index: usize,
    attempt: AttemptState,
    /// Modifiers toggled from the on-screen keyboard
    latched: ModifierState,
    last_typed: String,
}

impl<'a> TypingSession<'a> {
    /// Create a session with no targets
    pub fn new(table: &'a KeyTable) -> Self {
        Self {
            table,
            targets: Vec::new(),
            index: 0,
            attempt: AttemptState::default(),
            latched: ModifierState::default(),
            last_typed: String::new(),
        }
    }

    pub fn with_targets(table: &'a KeyTable, targets: Vec<String>) -> Self {
        let mut session = Self::new(table);
        session.load_targets(targets);
        session
    }

    /// Replace the lesson; whatever was typed so far is dropped.
    pub fn load_targets(&mut self, targets: Vec<String>) {
        info!("Loading {} targets", targets.len());
        self.targets = targets;
        self.index = 0;
        self.start_attempt();
    }

    fn start_attempt(&mut self) {
        let target = self.targets.get(self.index).map(String::as_str).unwrap_or("");
        debug!("Starting attempt {} of {}: {:?}", self.index + 1, self.targets.len(), target);
        self.attempt = AttemptState::new(target);
        self.last_typed.clear();
    }

    pub fn table(&self) -> &'a KeyTable {
        self.table
    }

    pub fn attempt(&self) -> &AttemptState {
        &self.attempt
    }

    pub fn current_target(&self) -> &str {
        self.attempt.target()
    }

    /// Index of the current target and the number of targets
    pub fn position(&self) -> (usize, usize) {
        (self.index, self.targets.len())
    }

    pub fn phase(&self) -> Phase {
        self.attempt.phase()
    }

    pub fn latched_modifiers(&self) -> ModifierState {
        self.latched
    }

    /// Text produced by the most recent key, empty after a backspace
    pub fn last_typed(&self) -> &str {
        &self.last_typed
    }

    /// Current feedback without changing anything
    pub fn feedback(&self) -> EngineOutput {
        self.output(ActionType::None, false)
    }

    /// Process a physical key event
    pub fn process_key(&mut self, input: KeyInput) -> EngineOutput {
        if self.attempt.phase() == Phase::Completed {
            return self.feedback();
        }

        match input.code {
            KeyCode::Backspace => self.backspace(),
            KeyCode::Space => self.insert(" "),
            code if code.is_modifier() => self.feedback(),
            code => {
                let text = self.table.resolve_char(code, input.modifiers.shift, input.modifiers.alt);
                if text.is_empty() {
                    trace!("{} produced nothing", code);
                    self.feedback()
                } else {
                    self.insert(text)
                }
            }
        }
    }

    /// Process a click on the on-screen keyboard.
    ///
    /// Shift and Control keys toggle a latched modifier; other keys use the
    /// latched Shift and never Alt.
    pub fn process_virtual_key(&mut self, code: KeyCode) -> EngineOutput {
        if code.is_control() {
            self.latched.ctrl = !self.latched.ctrl;
            return self.output(ActionType::ModifierToggled(code), false);
        }
        if code.is_shift() {
            self.latched.shift = !self.latched.shift;
            return self.output(ActionType::ModifierToggled(code), false);
        }

        let modifiers = ModifierState::new(self.latched.shift, self.latched.ctrl, false);
        self.process_key(KeyInput::new(code, modifiers))
    }

    /// Replace the whole input buffer, as a text field edit would.
    pub fn process_text(&mut self, raw: &str) -> EngineOutput {
        if self.attempt.phase() == Phase::Completed {
            return self.feedback();
        }

        let text = strip_e_fillers(raw);
        self.attempt.replace(&text);
        self.last_typed = text.chars().last().map(String::from).unwrap_or_default();

        let mismatch = self.attempt.correct_prefix() < self.attempt.input().len();
        self.output(ActionType::Replace(text), mismatch)
    }

    /// Remove the last typed character
    pub fn backspace(&mut self) -> EngineOutput {
        if self.attempt.phase() == Phase::Completed || !self.attempt.backspace() {
            return self.feedback();
        }
        self.last_typed.clear();
        self.output(ActionType::Backspace, false)
    }

    fn insert(&mut self, text: &str) -> EngineOutput {
        let mismatch = self.attempt.append(text);
        self.last_typed = text.to_string();

        if mismatch {
            debug!("Mismatch: typed {:?}, expected {:?}", text, self.attempt.next_char());
        }
        if self.attempt.phase() == Phase::Completed {
            info!("Completed target {:?}", self.attempt.target());
        }
        self.output(ActionType::Insert(text.to_string()), mismatch)
    }

    /// Move to the next target, or report that the lesson is done.
    pub fn advance(&mut self) -> Advance {
        if self.index + 1 < self.targets.len() {
            self.index += 1;
            self.start_attempt();
            Advance::Next(self.index)
        } else {
            info!("Lesson finished");
            Advance::Finished
        }
    }

    /// Restart the lesson from its first target
    pub fn retry(&mut self) {
        self.index = 0;
        self.start_attempt();
    }

    /// Start the current target over
    pub fn restart_target(&mut self) {
        self.attempt.reset();
        self.last_typed.clear();
    }

    fn output(&self, action: ActionType, mismatch: bool) -> EngineOutput {
        let next_char = self.attempt.next_char();
        EngineOutput {
            action,
            next_char,
            highlight: self.table.highlight_keys(next_char),
            correct_prefix: self.attempt.correct_prefix(),
            total: self.attempt.target_chars().len(),
            mismatch,
            phase: self.attempt.phase(),
        }
    }
}
