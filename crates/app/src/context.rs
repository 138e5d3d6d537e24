//! App Context

use std::{path::PathBuf, sync::Arc};

use avaria::fixtures::SeedData;
use thiserror::Error;
use tracing::debug;

use crate::{
    auth::{AuthService, Credentials, StaticAuthService},
    clock::{Clock, SystemClock},
    domain::{
        products::{ProductsService, StoreProductsService},
        reports::{ReportsService, StoreReportsService},
        settings::{SettingsService, StoreSettingsService},
    },
    store::{FileStore, KeyValueStore, MemoryStore, RecordStore, StoreError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to open data directory")]
    Store(#[source] StoreError),
}

#[derive(Clone)]
pub struct AppContext {
    pub reports: Arc<dyn ReportsService>,
    pub products: Arc<dyn ProductsService>,
    pub settings: Arc<dyn SettingsService>,
    pub auth: Arc<dyn AuthService>,
}

impl AppContext {
    /// Wire every service to one key-value backend.
    #[must_use]
    pub fn new(
        backend: Arc<dyn KeyValueStore>,
        seed: SeedData,
        clock: Arc<dyn Clock>,
        credentials: Credentials,
    ) -> Self {
        let store = RecordStore::new(backend, seed);
        let settings: Arc<dyn SettingsService> = Arc::new(StoreSettingsService::new(store.clone()));

        Self {
            reports: Arc::new(StoreReportsService::new(
                store.clone(),
                clock,
                Arc::clone(&settings),
            )),
            products: Arc::new(StoreProductsService::new(store)),
            settings,
            auth: Arc::new(StaticAuthService::new(credentials)),
        }
    }

    /// Build application context persisting under `dir`.
    ///
    /// # Errors
    ///
    /// Returns an error when the data directory cannot be created.
    pub fn from_store_dir(
        dir: impl Into<PathBuf>,
        seed: SeedData,
        credentials: Credentials,
    ) -> Result<Self, AppInitError> {
        let store = FileStore::open(dir).map_err(AppInitError::Store)?;

        debug!(dir = %store.dir().display(), "opened file store");

        Ok(Self::new(
            Arc::new(store),
            seed,
            Arc::new(SystemClock),
            credentials,
        ))
    }

    /// Build application context that keeps everything in memory.
    #[must_use]
    pub fn in_memory(seed: SeedData, clock: Arc<dyn Clock>, credentials: Credentials) -> Self {
        Self::new(Arc::new(MemoryStore::new()), seed, clock, credentials)
    }
}
