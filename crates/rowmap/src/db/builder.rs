use super::{Db, Shared};
use crate::{Adapter, Result};

use rowmap_core::{adapter::Registry, driver::Driver, stmt::Type};

use std::sync::Arc;

/// Configures the adapter registry before connecting.
///
/// Building moves the configured registry into the new `Db` and leaves the
/// builder with the standard adapters.
#[derive(Debug)]
pub struct Builder {
    registry: Registry,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            registry: Registry::standard(),
        }
    }
}

impl Builder {
    /// Replaces the adapter used for values of type `ty`.
    pub fn adapter(&mut self, ty: Type, adapter: impl Adapter) -> &mut Self {
        self.registry.register(ty, adapter);
        self
    }

    /// Replaces the whole registry.
    pub fn registry(&mut self, registry: Registry) -> &mut Self {
        self.registry = registry;
        self
    }

    pub async fn connect(&mut self, url: &str) -> Result<Db> {
        self.build_boxed(super::driver_for_url(url)?).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Db> {
        self.build_boxed(Box::new(driver)).await
    }

    async fn build_boxed(&mut self, driver: Box<dyn Driver>) -> Result<Db> {
        tracing::debug!(url = %driver.url(), "rowmap database configured");

        Ok(Db {
            shared: Arc::new(Shared {
                driver,
                registry: std::mem::replace(&mut self.registry, Registry::standard()),
            }),
        })
    }
}
