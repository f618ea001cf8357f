//! Log file setup.
//!
//! stdout carries the program's messages, so logs only ever go to a file.
//! If no candidate file can be opened the subscriber has no output layer.

use std::{
    fs::{self, File, OpenOptions},
    io,
    path::{Path, PathBuf},
    sync::Mutex,
};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "lazyload.log";

/// A log file that was opened, plus the candidates that failed before it.
#[derive(Debug)]
pub struct LogSink {
    pub opened: Option<(PathBuf, File)>,
    pub skipped: Vec<String>,
}

pub fn init(config_path: Option<&Path>) {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let sink = open_first(candidates(config_path));
    let Some((path, file)) = sink.opened else {
        tracing_subscriber::registry().with(env_filter).init();
        return;
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .with(env_filter)
        .init();

    tracing::info!(path = %path.display(), "Logging initialized");
    for reason in sink.skipped {
        tracing::warn!("{reason}");
    }
}

/// Log file locations in priority order: next to the config file, then
/// under the working directory.
pub fn candidates(config_path: Option<&Path>) -> Vec<PathBuf> {
    let beside_config = config_path
        .and_then(Path::parent)
        .map(|dir| dir.join(LOG_DIR).join(LOG_FILE));
    let local = Path::new(".lazyload").join(LOG_DIR).join(LOG_FILE);

    beside_config.into_iter().chain([local]).collect()
}

/// Open the first candidate that works, creating parent directories.
pub fn open_first(candidates: Vec<PathBuf>) -> LogSink {
    let mut skipped = Vec::new();
    for candidate in candidates {
        match open_append(&candidate) {
            Ok(file) => {
                return LogSink {
                    opened: Some((candidate, file)),
                    skipped,
                };
            }
            Err(e) => skipped.push(format!(
                "Failed to open log file {}: {e}",
                candidate.display()
            )),
        }
    }
    LogSink {
        opened: None,
        skipped,
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
