//! Interactive practice screen

use std::io::{self, Write};
use std::time::{Duration, Instant};

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyCode as TermKey, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::{Print, PrintStyledContent, Stylize};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue};
use log::{debug, info};

use mmtype_core::engine::{ActionType, Advance, CharMark, EngineOutput, KeyInput, ModifierState, Phase};
use mmtype_core::{KeyCode, KeyTable, Lessons, TypingSession};

use crate::report::{chord_name, render_layout};

/// What a terminal key means to the practice screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PracticeCommand {
    Type(KeyInput),
    /// Tab: skip to the next lesson
    Skip,
    /// Enter
    Confirm,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Typing,
    /// Lesson done, waiting for retry or next
    Finished(Duration),
}

/// Translate a terminal key event.
///
/// Terminals report characters rather than physical keys, so characters
/// are mapped back through the US layout.
pub fn map_key_event(event: &KeyEvent) -> Option<PracticeCommand> {
    if event.kind == KeyEventKind::Release {
        return None;
    }

    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);

    match event.code {
        TermKey::Esc => Some(PracticeCommand::Quit),
        TermKey::Char('c') if ctrl => Some(PracticeCommand::Quit),
        TermKey::Tab => Some(PracticeCommand::Skip),
        TermKey::Enter => Some(PracticeCommand::Confirm),
        TermKey::Backspace => Some(PracticeCommand::Type(KeyInput::plain(KeyCode::Backspace))),
        TermKey::Char(ch) => {
            let (code, shift) = KeyCode::from_us_char(ch)?;
            Some(PracticeCommand::Type(KeyInput::new(code, ModifierState::new(shift, ctrl, alt))))
        }
        _ => None,
    }
}

/// State of the practice screen: the lesson being typed and its timers
pub struct Practice<'a> {
    lessons: &'a Lessons,
    level: String,
    lesson: String,
    session: TypingSession<'static>,
    last: EngineOutput,
    /// Started by the first accepted keystroke of a target
    started: Option<Instant>,
    /// Time spent on completed targets of this lesson
    lesson_time: Duration,
    screen: Screen,
}

impl<'a> Practice<'a> {
    pub fn new(lessons: &'a Lessons, level: &str, lesson: Option<&str>) -> Result<Self> {
        if !lessons.has_level(level) {
            bail!("No level named {:?} in the lesson file", level);
        }
        let lesson = match lesson {
            Some(name) => {
                lessons.require_targets(level, name)?;
                name.to_string()
            }
            None => lessons
                .first_lesson(level)
                .with_context(|| format!("Level {:?} has no lessons", level))?
                .to_string(),
        };

        let session = TypingSession::new(KeyTable::pyidaungsu());
        let mut practice = Self {
            lessons,
            level: level.to_string(),
            last: session.feedback(),
            session,
            lesson: String::new(),
            started: None,
            lesson_time: Duration::ZERO,
            screen: Screen::Typing,
        };
        practice.open_lesson(&lesson);
        Ok(practice)
    }

    fn open_lesson(&mut self, lesson: &str) {
        info!("Opening {}/{}", self.level, lesson);
        self.lesson = lesson.to_string();
        self.session.load_targets(self.lessons.targets(&self.level, lesson).to_vec());
        self.restart_timers();
    }

    fn restart_timers(&mut self) {
        self.started = None;
        self.lesson_time = Duration::ZERO;
        self.screen = Screen::Typing;
        self.last = self.session.feedback();
    }

    pub fn lesson(&self) -> &str {
        &self.lesson
    }

    pub fn session(&self) -> &TypingSession<'static> {
        &self.session
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.screen, Screen::Finished(_))
    }

    pub fn elapsed(&self) -> Duration {
        self.started.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Move to the next lesson of the level; quits after the last one.
    fn next_lesson(&mut self) -> Flow {
        match self.lessons.next_lesson(&self.level, &self.lesson).map(str::to_string) {
            Some(next) => {
                self.open_lesson(&next);
                Flow::Continue
            }
            None => {
                info!("No lessons left in {}", self.level);
                Flow::Quit
            }
        }
    }

    pub fn handle(&mut self, command: PracticeCommand) -> Flow {
        match (self.screen, command) {
            (_, PracticeCommand::Quit) => Flow::Quit,
            (_, PracticeCommand::Skip) => self.next_lesson(),
            (Screen::Finished(_), PracticeCommand::Confirm) => self.next_lesson(),
            (Screen::Finished(_), PracticeCommand::Type(input)) => {
                if input.code == KeyCode::KeyR {
                    self.session.retry();
                    self.restart_timers();
                }
                Flow::Continue
            }
            (Screen::Typing, PracticeCommand::Confirm) => Flow::Continue,
            (Screen::Typing, PracticeCommand::Type(input)) => {
                self.type_key(input);
                Flow::Continue
            }
        }
    }

    fn type_key(&mut self, input: KeyInput) {
        let output = self.session.process_key(input);
        if output.action != ActionType::None && self.started.is_none() {
            self.started = Some(Instant::now());
        }

        if output.phase == Phase::Completed {
            self.lesson_time += self.elapsed();
            self.started = None;
            match self.session.advance() {
                Advance::Next(index) => debug!("Next target {}", index),
                Advance::Finished => self.screen = Screen::Finished(self.lesson_time),
            }
            self.last = self.session.feedback();
        } else {
            self.last = output;
        }
    }

    /// Draw the whole screen
    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        queue!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        let (index, total) = self.session.position();
        let header = format!(
            "{} / {}   item {} of {}   {}",
            self.level,
            self.lesson,
            (index + 1).min(total),
            total,
            format_duration(self.elapsed()),
        );
        queue!(out, Print(header))?;

        if let Screen::Finished(time) = self.screen {
            queue!(
                out,
                cursor::MoveTo(0, 2),
                Print(format!("Lesson finished in {}", format_duration(time))),
                cursor::MoveTo(0, 4),
                Print("Enter: next lesson   R: retry   Esc: quit"),
            )?;
            return Ok(());
        }

        let attempt = self.session.attempt();
        queue!(out, cursor::MoveTo(0, 2))?;
        for (ch, mark) in attempt.target_chars().iter().zip(attempt.marks()) {
            let text = ch.to_string();
            match mark {
                CharMark::Correct => queue!(out, PrintStyledContent(text.green()))?,
                CharMark::Wrong => queue!(out, PrintStyledContent(text.red().underlined()))?,
                CharMark::Pending => queue!(out, Print(text))?,
            }
        }

        let input = attempt.input_text();
        if self.last.mismatch {
            queue!(out, cursor::MoveTo(0, 3), PrintStyledContent(input.red()))?;
        } else {
            queue!(out, cursor::MoveTo(0, 3), Print(input))?;
        }

        let last = self.session.last_typed();
        if !last.is_empty() {
            queue!(out, cursor::MoveTo(0, 4), Print(format!("last: {}", last)))?;
        }

        let hint = match self.last.next_char {
            Some(ch) => {
                let chord = self
                    .session
                    .table()
                    .binding_for_char(ch)
                    .map(|binding| chord_name(&binding))
                    .unwrap_or_default();
                format!("next: {}  {}", ch, chord)
            }
            None if self.last.mismatch || attempt.correct_prefix() < attempt.input().len() => {
                "Backspace to fix the mistake".to_string()
            }
            None => String::new(),
        };
        queue!(out, cursor::MoveTo(0, 5), Print(hint))?;

        let shift = self.last.highlight.contains(&KeyCode::ShiftLeft);
        for (row, line) in render_layout(self.session.table(), shift, &self.last.highlight).into_iter().enumerate() {
            queue!(out, cursor::MoveTo(0, 7 + row as u16), Print(line))?;
        }

        let footer_row = 8 + self.session.table().rows().len() as u16;
        queue!(out, cursor::MoveTo(0, footer_row), Print("Esc: quit   Tab: next lesson"))?;
        Ok(())
    }
}

fn format_duration(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Raw mode and the alternate screen, restored on drop
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stdout = io::stdout();
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)
            .context("Failed to enter alternate screen")?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Run the practice screen until the user quits or the level runs out.
pub fn run(practice: &mut Practice<'_>) -> Result<()> {
    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout();

    loop {
        practice.draw(&mut stdout)?;
        stdout.flush()?;

        // Redraw at least twice a second to keep the clock moving
        if !event::poll(Duration::from_millis(500))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            let Some(command) = map_key_event(&key) else {
                continue;
            };
            if practice.handle(command) == Flow::Quit {
                break;
            }
        }
    }
    Ok(())
}
