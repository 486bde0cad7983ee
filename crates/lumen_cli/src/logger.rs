use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Env, Target};
use log::LevelFilter;

/// Initialize the logger.
///
/// `RUST_LOG` applies when no level is given, with `info` as the fallback.
/// With a log file, records are appended to it instead of going to stderr.
pub fn init_logger(level: Option<LevelFilter>, log_file: Option<&Path>) -> Result<()> {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));

    if let Some(level) = level {
        builder.filter_level(level);
    }

    if let Some(path) = log_file {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
