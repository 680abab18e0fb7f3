use crate::error::Result;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the global tracing subscriber: a compact stderr layer, plus a
/// plain-text file layer when `log_file` is given.
///
/// Logs go to stderr so that stdout stays reserved for the record report and
/// JSON output.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .compact();

    let registry = tracing_subscriber::registry()
        .with(level_filter(verbosity, quiet))
        .with(stderr_layer);

    match log_file {
        Some(path) => {
            let file_layer = fmt::layer()
                .with_writer(File::create(path)?)
                .with_ansi(false);
            registry.with(file_layer).init();
        }
        None => registry.init(),
    }

    Ok(())
}
