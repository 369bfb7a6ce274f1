//! File logging for the `log` facade, backed by `tracing-subscriber`.
//!
//! The UI owns the terminal, so records never go to stdout/stderr while it
//! runs. Without `--log-file` no subscriber is installed and records are
//! dropped.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;

/// Map `-v` occurrences to a level filter.
pub fn level_for_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// Open (or create) `path` in append mode.
pub fn open_log_file(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install a global subscriber writing plain-text records to `path`.
///
/// `log::` records are bridged into the subscriber, so the whole crate
/// logs through it.
pub fn init(path: &Path, level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    let file = open_log_file(path)?;
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(level)
        .try_init()?;
    Ok(())
}
