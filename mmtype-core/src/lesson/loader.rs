use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use super::error::{LessonError, Result};
use crate::layout::strip_e_fillers;

/// All lessons, keyed by level name and then lesson name.
///
/// Stored as loaded from JSON:
/// `{ "basic": { "lesson1": ["က", "ကေ"], "lesson2": [...] } }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lessons {
    levels: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl Lessons {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut lessons: Lessons = serde_json::from_str(json)?;
        lessons.normalize();
        debug!("Parsed {} levels", lessons.levels.len());
        Ok(lessons)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        info!("Loading lessons from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// NFC-normalise targets and drop fillers in front of the E vowel, so
    /// they compare equal to what the keyboard produces.
    fn normalize(&mut self) {
        for target in self.levels.values_mut().flat_map(|l| l.values_mut()).flatten() {
            *target = normalize_target(target);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn levels(&self) -> impl Iterator<Item = &str> {
        self.levels.keys().map(String::as_str)
    }

    pub fn has_level(&self, level: &str) -> bool {
        self.levels.contains_key(level)
    }

    /// Lesson names of a level in numeric order (`lesson2` before `lesson10`).
    pub fn sorted_lessons(&self, level: &str) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .levels
            .get(level)
            .map(|lessons| lessons.keys().map(String::as_str).collect())
            .unwrap_or_default();
        names.sort_by(|a, b| compare_lessons(a, b));
        names
    }

    pub fn first_lesson(&self, level: &str) -> Option<&str> {
        self.sorted_lessons(level).into_iter().next()
    }

    pub fn next_lesson(&self, level: &str, lesson: &str) -> Option<&str> {
        let sorted = self.sorted_lessons(level);
        let pos = sorted.iter().position(|name| *name == lesson)?;
        sorted.get(pos + 1).copied()
    }

    /// Targets of a lesson; empty when the level or lesson does not exist.
    pub fn targets(&self, level: &str, lesson: &str) -> &[String] {
        self.levels
            .get(level)
            .and_then(|lessons| lessons.get(lesson))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Targets of a lesson, failing when it does not exist.
    pub fn require_targets(&self, level: &str, lesson: &str) -> Result<&[String]> {
        let lessons = self
            .levels
            .get(level)
            .ok_or_else(|| LessonError::UnknownLevel(level.to_string()))?;
        lessons
            .get(lesson)
            .map(Vec::as_slice)
            .ok_or_else(|| LessonError::UnknownLesson {
                level: level.to_string(),
                lesson: lesson.to_string(),
            })
    }
}

/// NFC form of `text` without fillers in front of the E vowel
pub fn normalize_target(text: &str) -> String {
    let normalized: String = text.nfc().collect();
    strip_e_fillers(&normalized)
}

/// Number following the `lesson` prefix, if any.
pub fn lesson_number(name: &str) -> Option<u32> {
    name.strip_prefix("lesson").unwrap_or(name).parse().ok()
}

fn compare_lessons(a: &str, b: &str) -> Ordering {
    match (lesson_number(a), lesson_number(b)) {
        (Some(x), Some(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
