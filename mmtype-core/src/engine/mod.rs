//! Typing match engine
//!
//! Pure matching of typed input against a target, and the session that
//! drives a lesson on top of it.

mod input;
mod matcher;
mod order;
mod output;
mod session;
mod state;

pub use input::{KeyInput, ModifierState};
pub use matcher::{correct_prefix_length, is_mismatch, next_char};
pub use order::{is_e_pattern, TypingOrder};
pub use output::{ActionType, EngineOutput};
pub use session::{Advance, TypingSession};
pub use state::{AttemptState, CharMark, Phase};
