//! Typed collections over a key-value store.

use std::{fmt, sync::Arc};

use avaria::{fixtures::SeedData, products::Product, reports::DamageReport};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info};

use crate::store::{Collection, KeyValueStore, StoreError};

/// A type stored as a JSON array under a collection key.
pub trait Record: Serialize + DeserializeOwned + Clone {
    /// Collection the records live in.
    const COLLECTION: Collection;

    /// Records a fresh store starts with.
    fn seed(seed: &SeedData) -> &[Self];
}

impl Record for DamageReport {
    const COLLECTION: Collection = Collection::Reports;

    fn seed(seed: &SeedData) -> &[Self] {
        &seed.reports
    }
}

impl Record for Product {
    const COLLECTION: Collection = Collection::Products;

    fn seed(seed: &SeedData) -> &[Self] {
        &seed.products
    }
}

/// Record collections and documents persisted in a [`KeyValueStore`].
#[derive(Clone)]
pub struct RecordStore {
    backend: Arc<dyn KeyValueStore>,
    seed: Arc<SeedData>,
}

impl fmt::Debug for RecordStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordStore")
            .field("seed_products", &self.seed.products.len())
            .field("seed_reports", &self.seed.reports.len())
            .finish_non_exhaustive()
    }
}

impl RecordStore {
    #[must_use]
    pub fn new(backend: Arc<dyn KeyValueStore>, seed: SeedData) -> Self {
        Self {
            backend,
            seed: Arc::new(seed),
        }
    }

    /// Every record of the collection.
    ///
    /// A collection that was never written is seeded first, so repeated calls on a fresh store
    /// return the same records and write the seed only once.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the stored value is not a valid collection.
    pub fn get_all<T: Record>(&self) -> Result<Vec<T>, StoreError> {
        let key = T::COLLECTION.key();

        if let Some(raw) = self.backend.get(key)? {
            return Ok(serde_json::from_str(&raw)?);
        }

        let seeded = T::seed(&self.seed).to_vec();

        self.replace_all(&seeded)?;

        info!(collection = key, records = seeded.len(), "seeded collection");

        Ok(seeded)
    }

    /// Overwrite the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the backend write fails.
    pub fn replace_all<T: Record>(&self, records: &[T]) -> Result<(), StoreError> {
        let key = T::COLLECTION.key();

        self.backend.set(key, &serde_json::to_string(records)?)?;

        debug!(collection = key, records = records.len(), "replaced collection");

        Ok(())
    }

    /// Put `record` at the front of the collection and return the updated collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be read or written.
    pub fn append<T: Record>(&self, record: T) -> Result<Vec<T>, StoreError> {
        let mut records = self.get_all::<T>()?;

        records.insert(0, record);

        self.replace_all(&records)?;

        Ok(records)
    }

    /// A single document stored under `collection`, if one was written.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend fails or the document cannot be decoded.
    pub fn get_document<T: DeserializeOwned>(
        &self,
        collection: Collection,
    ) -> Result<Option<T>, StoreError> {
        self.backend
            .get(collection.key())?
            .map(|raw| serde_json::from_str(&raw))
            .transpose()
            .map_err(StoreError::from)
    }

    /// Store a single document under `collection`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the backend write fails.
    pub fn set_document<T: Serialize>(
        &self,
        collection: Collection,
        document: &T,
    ) -> Result<(), StoreError> {
        self.backend
            .set(collection.key(), &serde_json::to_string(document)?)
    }
}
