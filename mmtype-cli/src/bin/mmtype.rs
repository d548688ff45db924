use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;

use mmtype_cli::practice::{self, Practice};
use mmtype_cli::{describe_keys, lesson_summary, logging, render_layout, replay};
use mmtype_core::{KeyTable, Lessons};

#[derive(Parser, Debug)]
#[command(author, version, about = "Typing tutor for the Pyidaungsu Myanmar keyboard", long_about = None)]
struct Cli {
    /// Write log records to this file
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Practice a lesson interactively
    Practice {
        /// Lesson JSON file
        #[arg(long)]
        lessons: PathBuf,

        #[arg(long, default_value = "basic")]
        level: String,

        /// Lesson to start with (defaults to the first one of the level)
        #[arg(long)]
        lesson: Option<String>,
    },
    /// Type keystroke chords against a target and print the feedback
    Replay {
        #[arg(long)]
        target: String,

        /// Chords such as KeyA, Shift+KeyR or ";"
        #[arg(required = true)]
        strokes: Vec<String>,
    },
    /// Show which key types each character of a text
    Keys { text: String },
    /// Print the keyboard layout
    Layout {
        /// Show the shifted layer
        #[arg(long)]
        shift: bool,
    },
    /// List the levels and lessons of a lesson file
    Lessons {
        #[arg(long)]
        lessons: PathBuf,
    },
}

fn load_lessons(path: &Path) -> Result<Lessons> {
    Lessons::from_file(path).with_context(|| format!("Failed to load lessons from {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let interactive = matches!(cli.command, Command::Practice { .. });
    logging::init_logging(cli.log_file.as_deref(), cli.verbose, interactive)?;

    let table = KeyTable::pyidaungsu();

    match cli.command {
        Command::Practice { lessons, level, lesson } => {
            let lessons = load_lessons(&lessons)?;
            let mut practice = Practice::new(&lessons, &level, lesson.as_deref())?;
            practice::run(&mut practice)?;
            info!("Practice ended at {}/{}", level, practice.lesson());
        }
        Command::Replay { target, strokes } => {
            for line in replay(table, &target, &strokes).context("Invalid keystroke")? {
                println!("{}", line);
            }
        }
        Command::Keys { text } => {
            for line in describe_keys(table, &text) {
                println!("{}", line);
            }
        }
        Command::Layout { shift } => {
            for line in render_layout(table, shift, &[]) {
                println!("{}", line);
            }
        }
        Command::Lessons { lessons } => {
            for line in lesson_summary(&load_lessons(&lessons)?) {
                println!("{}", line);
            }
        }
    }

    Ok(())
}
