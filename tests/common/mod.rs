//! Shared test utilities and fixtures
//!
//! Loaders and modules that count how they are used, so tests can assert the
//! lazy module is touched exactly as often as expected.

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use lazyload_engine::{
    Console, EntryScript, EntrySettings, FixedRoll, Greeter, LazyModule, LoadError, LoadFut,
    MemoryConsole, Message, ModuleError, ModuleFut, ModuleLoader, Roll,
};

/// Call counters shared between a test and its spy loader/module.
#[derive(Debug, Default)]
pub struct Calls {
    pub loads: AtomicUsize,
    pub delays: AtomicUsize,
    pub greets: AtomicUsize,
}

impl Calls {
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    pub fn delays(&self) -> usize {
        self.delays.load(Ordering::SeqCst)
    }

    pub fn greets(&self) -> usize {
        self.greets.load(Ordering::SeqCst)
    }
}

/// How the spy behaves when asked to load or greet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpyMode {
    Ok,
    LoadFails,
    GreetFails,
}

/// Wraps [`Greeter`] and records every call.
pub struct SpyModule {
    calls: Arc<Calls>,
    mode: SpyMode,
}

impl LazyModule for SpyModule {
    fn name(&self) -> &'static str {
        "spy"
    }

    fn delay(&self, duration: Duration) -> ModuleFut<'_, ()> {
        self.calls.delays.fetch_add(1, Ordering::SeqCst);
        Greeter.delay(duration)
    }

    fn greet(&self, console: &dyn Console) -> Result<(), ModuleError> {
        self.calls.greets.fetch_add(1, Ordering::SeqCst);
        if self.mode == SpyMode::GreetFails {
            return Err(ModuleError::Greet {
                module: "spy",
                message: "greeting unavailable".to_string(),
            });
        }
        Greeter.greet(console)
    }
}

pub struct SpyLoader {
    calls: Arc<Calls>,
    mode: SpyMode,
}

impl ModuleLoader for SpyLoader {
    fn module_name(&self) -> &'static str {
        "spy"
    }

    fn load(&self) -> LoadFut<'_> {
        self.calls.loads.fetch_add(1, Ordering::SeqCst);
        Box::pin(async move {
            if self.mode == SpyMode::LoadFails {
                return Err(LoadError::NotFound {
                    name: "spy".to_string(),
                });
            }
            let module: Arc<dyn LazyModule> = Arc::new(SpyModule {
                calls: Arc::clone(&self.calls),
                mode: self.mode,
            });
            Ok(module)
        })
    }
}

/// Everything a test needs to drive and observe one run.
pub struct Harness {
    pub entry: EntryScript,
    pub console: Arc<MemoryConsole>,
    pub calls: Arc<Calls>,
}

pub fn harness(roll: f64, mode: SpyMode) -> Harness {
    harness_with(roll, mode, EntrySettings::default())
}

pub fn harness_with(roll: f64, mode: SpyMode, settings: EntrySettings) -> Harness {
    let console = Arc::new(MemoryConsole::new());
    let calls = Arc::new(Calls::default());
    let loader = SpyLoader {
        calls: Arc::clone(&calls),
        mode,
    };
    let entry = EntryScript::new(
        settings,
        Box::new(FixedRoll(Roll::new(roll).expect("test roll in range"))),
        Box::new(loader),
        Arc::clone(&console) as Arc<dyn Console>,
    );
    Harness {
        entry,
        console,
        calls,
    }
}

/// Captured output decoded back into messages. Unknown lines fail the test.
pub fn messages(console: &MemoryConsole) -> Vec<Message> {
    console
        .texts()
        .iter()
        .map(|text| {
            Message::from_text(text).unwrap_or_else(|| panic!("unexpected console line {text:?}"))
        })
        .collect()
}
