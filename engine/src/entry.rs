//! The entry script: start message, one roll, then load-and-greet or skip.

use std::sync::Arc;
use std::time::Duration;

use lazyload_types::{Branch, Message, Threshold};
use thiserror::Error;

use crate::config::LazyloadConfig;
use crate::console::Console;
use crate::loader::{Deferred, LoadError, ModuleLoader};
use crate::module::ModuleError;
use crate::roll_source::RollSource;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(1000);

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to load lazy module")]
    Load(#[from] LoadError),
    #[error("lazy module greet failed")]
    Greet(#[from] ModuleError),
}

/// Tunables for a run. Defaults are threshold 0.5 and a one second delay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntrySettings {
    pub threshold: Threshold,
    pub delay: Duration,
}

impl Default for EntrySettings {
    fn default() -> Self {
        Self {
            threshold: Threshold::DEFAULT,
            delay: DEFAULT_DELAY,
        }
    }
}

impl EntrySettings {
    /// Apply the `[entry]` section over the defaults.
    ///
    /// An invalid threshold is logged and ignored; `LazyloadConfig::load`
    /// already rejects it, so this only matters for hand-built configs.
    #[must_use]
    pub fn from_config(config: Option<&LazyloadConfig>) -> Self {
        let mut settings = Self::default();
        let Some(entry) = config.and_then(|c| c.entry.as_ref()) else {
            return settings;
        };

        match entry.threshold() {
            Ok(Some(threshold)) => settings.threshold = threshold,
            Ok(None) => {}
            Err(err) => tracing::warn!(%err, "Ignoring configured threshold"),
        }
        if let Some(delay) = entry.delay() {
            settings.delay = delay;
        }
        settings
    }
}

pub struct EntryScript {
    settings: EntrySettings,
    rolls: Box<dyn RollSource>,
    module: Deferred,
    console: Arc<dyn Console>,
}

impl EntryScript {
    #[must_use]
    pub fn new(
        settings: EntrySettings,
        rolls: Box<dyn RollSource>,
        loader: Box<dyn ModuleLoader>,
        console: Arc<dyn Console>,
    ) -> Self {
        Self {
            settings,
            rolls,
            module: Deferred::new(loader),
            console,
        }
    }

    #[must_use]
    pub fn settings(&self) -> EntrySettings {
        self.settings
    }

    /// The deferred module handle. Stays unloaded after a skip.
    #[must_use]
    pub fn module(&self) -> &Deferred {
        &self.module
    }

    /// Execute one run and report which branch was taken.
    ///
    /// Load and greet failures propagate; nothing is retried.
    pub async fn run(&mut self) -> Result<Branch, RunError> {
        self.console.line(Message::Start.text());

        let roll = self.rolls.roll();
        let branch = Branch::decide(roll, self.settings.threshold);
        tracing::info!(
            %roll,
            threshold = self.settings.threshold.value(),
            %branch,
            "Branch selected"
        );

        match branch {
            Branch::LoadAndGreet => {
                let module = self.module.get().await?;
                tracing::debug!(
                    module = module.name(),
                    delay_ms = self.settings.delay.as_millis() as u64,
                    "Waiting before greet"
                );
                module.delay(self.settings.delay).await;
                module.greet(self.console.as_ref())?;
            }
            Branch::Skip => self.console.line(Message::Skip.text()),
        }

        Ok(branch)
    }
}
