use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Level for a `-v` count
pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Set up env_logger. `RUST_LOG` wins over `-v`.
///
/// With a log file every record goes there. Without one, records go to
/// stderr unless the terminal is owned by the practice screen, in which
/// case logging stays off.
pub fn init_logging(log_file: Option<&Path>, verbose: u8, interactive: bool) -> Result<()> {
    let default_level = if log_file.is_none() && interactive {
        LevelFilter::Off
    } else {
        level_for(verbose)
    };

    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level.to_string()));

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        builder
            .format(|buf, record| {
                writeln!(
                    buf,
                    "{} [{}] {} - {}",
                    buf.timestamp_millis(),
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .target(Target::Pipe(Box::new(file)));
    }

    builder.try_init().context("Failed to initialise logging")?;
    Ok(())
}
