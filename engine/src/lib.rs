//! Core engine for lazyload - the entry script and the lazily loaded module it drives.
//!
//! ```text
//! EntryScript::run()
//!     |-- console: START_MESSAGE
//!     |-- RollSource::roll() -> Branch::decide(roll, threshold)
//!     |
//!     +-- LoadAndGreet: Deferred::get() -> LazyModule::delay() -> LazyModule::greet()
//!     +-- Skip:         console: SKIP_MESSAGE
//! ```
//!
//! The module is only constructed on the load branch; the skip branch never
//! touches the loader.

mod config;
mod console;
mod entry;
mod loader;
mod module;
mod roll_source;

pub use lazyload_types::{
    Branch, GREETING, Message, Roll, RollError, SKIP_MESSAGE, START_MESSAGE, Threshold,
    ThresholdError,
};

pub use config::{ConfigError, ContentError, EntryConfig, LazyloadConfig, config_path};
pub use console::{Console, ConsoleLine, MemoryConsole, StdoutConsole};
pub use entry::{DEFAULT_DELAY, EntryScript, EntrySettings, RunError};
pub use loader::{BuiltinLoader, Deferred, LoadError, LoadFut, ModuleLoader};
pub use module::{Greeter, LazyModule, ModuleError, ModuleFut};
pub use roll_source::{FixedRoll, RandomRoll, RollSource};
