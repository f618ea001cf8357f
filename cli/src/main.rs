//! lazyload CLI - binary entry point.
//!
//! ```text
//! main() -> logging::init() -> LazyloadConfig::load() -> Overrides::from_env()
//!        -> EntryScript::run() -> Branch::LoadAndGreet | Branch::Skip
//! ```
//!
//! Program output goes to stdout. Logs go to `~/.lazyload/logs/lazyload.log`
//! so they never interleave with it.

mod logging;
mod overrides;

use anyhow::{Context, Result};
use std::sync::Arc;

use lazyload_engine::{
    BuiltinLoader, EntryScript, EntrySettings, FixedRoll, LazyloadConfig, RandomRoll, RollSource,
    StdoutConsole,
};
use overrides::Overrides;

fn load_config() -> Option<LazyloadConfig> {
    match LazyloadConfig::load() {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(path = %err.path().display(), "Ignoring config: {err}");
            None
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init(LazyloadConfig::path().as_deref());

    let config = load_config();
    let overrides = Overrides::from_env()?;
    let settings = overrides.apply(EntrySettings::from_config(config.as_ref()));

    let rolls: Box<dyn RollSource> = match overrides.roll {
        Some(roll) => {
            tracing::info!(%roll, "Roll forced by environment");
            Box::new(FixedRoll(roll))
        }
        None => Box::new(RandomRoll),
    };

    let mut entry = EntryScript::new(
        settings,
        rolls,
        Box::new(BuiltinLoader),
        Arc::new(StdoutConsole),
    );

    let branch = entry.run().await.context("lazy load run failed")?;
    tracing::info!(%branch, "Run complete");

    Ok(())
}
