use anyhow::{Context, Result};
use std::{env, time::Duration};

use lazyload_engine::{EntrySettings, Roll};

const LAZYLOAD_ROLL: &str = "LAZYLOAD_ROLL";
const LAZYLOAD_DELAY_MS: &str = "LAZYLOAD_DELAY_MS";

/// Environment overrides. These win over the config file.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Overrides {
    pub roll: Option<Roll>,
    pub delay: Option<Duration>,
}

impl Overrides {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let roll = non_empty(lookup(LAZYLOAD_ROLL))
            .map(|raw| {
                Roll::parse(&raw).with_context(|| format!("invalid {LAZYLOAD_ROLL}={raw:?}"))
            })
            .transpose()?;

        let delay = non_empty(lookup(LAZYLOAD_DELAY_MS))
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map(Duration::from_millis)
                    .with_context(|| format!("invalid {LAZYLOAD_DELAY_MS}={raw:?}"))
            })
            .transpose()?;

        Ok(Self { roll, delay })
    }

    pub fn apply(self, mut settings: EntrySettings) -> EntrySettings {
        if let Some(delay) = self.delay {
            tracing::debug!(
                env_var = LAZYLOAD_DELAY_MS,
                delay_ms = delay.as_millis() as u64,
                "Delay overridden by environment"
            );
            settings.delay = delay;
        }
        settings
    }
}

fn non_empty(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}
