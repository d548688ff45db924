//! Terminal front end of the Pyidaungsu typing tutor

pub mod logging;
pub mod practice;
pub mod report;

pub use practice::{map_key_event, Flow, Practice, PracticeCommand};
pub use report::{chord_name, describe_keys, lesson_summary, mark_string, render_layout, replay};
