use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::Accelerator;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "Offline Monte Carlo path tracer")]
pub struct Args {
    /// Scene description file
    #[arg(long, conflicts_with = "demo")]
    pub scene: Option<PathBuf>,

    /// Camera settings file (defaults apply when omitted)
    #[arg(long)]
    pub camera: Option<PathBuf>,

    /// Output image; `-` for stdout, a `.png` path for PNG, anything else is PPM
    #[arg(short, long, default_value = "-")]
    pub output: String,

    /// Render rows in parallel bands
    #[arg(long)]
    pub parallel: bool,

    /// Worker threads for --parallel (defaults to one per core)
    #[arg(long, requires = "parallel")]
    pub threads: Option<usize>,

    /// Accelerate intersection with a BVH (default)
    #[arg(long, conflicts_with = "no_bvh")]
    pub bvh: bool,

    /// Test every primitive for every ray
    #[arg(long = "no-bvh")]
    pub no_bvh: bool,

    /// Render seed; overrides the camera file
    #[arg(long)]
    pub seed: Option<u64>,

    /// Render the built-in random-spheres scene (used when no scene is given)
    #[arg(long)]
    pub demo: bool,

    /// Logging level; overrides RUST_LOG
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,

    /// Append log output to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn accelerator(&self) -> Accelerator {
        if self.no_bvh {
            Accelerator::List
        } else {
            Accelerator::Bvh
        }
    }

    /// True when the image goes to stdout.
    pub fn writes_stdout(&self) -> bool {
        self.output == "-"
    }
}
