//! Output sink for the run's user-facing lines.
//!
//! Logging goes through `tracing`; this is only for the messages the program
//! is meant to print.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use tokio::time::Instant;

pub trait Console: Send + Sync {
    fn line(&self, text: &str);
}

/// Prints each line to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn line(&self, text: &str) {
        println!("{text}");
    }
}

/// A captured line and when it was written, relative to console creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleLine {
    pub text: String,
    pub at: Duration,
}

/// Records lines in memory.
///
/// Timestamps come from `tokio::time`, so a paused test clock gives exact
/// offsets.
#[derive(Debug)]
pub struct MemoryConsole {
    started: Instant,
    lines: Mutex<Vec<ConsoleLine>>,
}

impl MemoryConsole {
    #[must_use]
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            lines: Mutex::new(Vec::new()),
        }
    }

    #[must_use]
    pub fn lines(&self) -> Vec<ConsoleLine> {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<String> {
        self.lines().into_iter().map(|l| l.text).collect()
    }

    #[must_use]
    pub fn count(&self, text: &str) -> usize {
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|l| l.text == text)
            .count()
    }
}

impl Default for MemoryConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for MemoryConsole {
    fn line(&self, text: &str) {
        let at = self.started.elapsed();
        self.lines
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ConsoleLine {
                text: text.to_string(),
                at,
            });
    }
}
