//! The lazily loaded module and its contract.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use lazyload_types::Message;
use thiserror::Error;
use tokio::time::sleep;

use crate::console::Console;

/// Boxed future returned by [`LazyModule`] operations.
pub type ModuleFut<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

#[derive(Debug, Error)]
pub enum ModuleError {
    #[error("module '{module}' failed to greet: {message}")]
    Greet {
        module: &'static str,
        message: String,
    },
}

/// What the entry script needs from the module it loads.
pub trait LazyModule: Send + Sync {
    fn name(&self) -> &'static str;

    /// Resolve after `duration` has elapsed.
    fn delay(&self, duration: Duration) -> ModuleFut<'_, ()>;

    /// Write the greeting to `console`.
    fn greet(&self, console: &dyn Console) -> Result<(), ModuleError>;
}

/// The built-in module: a timer-backed delay and a fixed greeting.
#[derive(Debug, Default, Clone, Copy)]
pub struct Greeter;

impl LazyModule for Greeter {
    fn name(&self) -> &'static str {
        "greeter"
    }

    fn delay(&self, duration: Duration) -> ModuleFut<'_, ()> {
        Box::pin(sleep(duration))
    }

    fn greet(&self, console: &dyn Console) -> Result<(), ModuleError> {
        console.line(Message::Greeting.text());
        Ok(())
    }
}
