//! Deferred module loading.
//!
//! A [`ModuleLoader`] knows how to produce a [`LazyModule`]; [`Deferred`] holds
//! one and resolves it on first use, at most once.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;

use crate::module::{Greeter, LazyModule};

/// Future returned by [`ModuleLoader::load`].
pub type LoadFut<'a> =
    Pin<Box<dyn Future<Output = Result<Arc<dyn LazyModule>, LoadError>> + Send + 'a>>;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("module '{name}' not found")]
    NotFound { name: String },
    #[error("module '{name}' failed to initialize: {message}")]
    Init { name: String, message: String },
}

pub trait ModuleLoader: Send + Sync {
    /// Name of the module this loader resolves, for logs and errors.
    fn module_name(&self) -> &'static str;

    fn load(&self) -> LoadFut<'_>;
}

/// Loads the built-in [`Greeter`].
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinLoader;

impl ModuleLoader for BuiltinLoader {
    fn module_name(&self) -> &'static str {
        "greeter"
    }

    fn load(&self) -> LoadFut<'_> {
        Box::pin(async {
            let module: Arc<dyn LazyModule> = Arc::new(Greeter);
            Ok(module)
        })
    }
}

/// A module that is only loaded when first asked for.
pub struct Deferred {
    loader: Box<dyn ModuleLoader>,
    cell: OnceCell<Arc<dyn LazyModule>>,
}

impl Deferred {
    #[must_use]
    pub fn new(loader: Box<dyn ModuleLoader>) -> Self {
        Self {
            loader,
            cell: OnceCell::new(),
        }
    }

    /// Resolve the module, loading it on the first call.
    ///
    /// A failed load leaves the cell empty, so a later call tries again.
    pub async fn get(&self) -> Result<Arc<dyn LazyModule>, LoadError> {
        let name = self.loader.module_name();
        let module = self
            .cell
            .get_or_try_init(|| async {
                tracing::debug!(module = name, "Loading deferred module");
                let result = self.loader.load().await;
                match &result {
                    Ok(_) => tracing::info!(module = name, "Deferred module loaded"),
                    Err(e) => {
                        tracing::warn!(module = name, error = %e, "Deferred module failed to load");
                    }
                }
                result
            })
            .await?;
        Ok(Arc::clone(module))
    }

    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.cell.initialized()
    }

    #[must_use]
    pub fn module_name(&self) -> &'static str {
        self.loader.module_name()
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred")
            .field("module", &self.loader.module_name())
            .field("loaded", &self.is_loaded())
            .finish()
    }
}
