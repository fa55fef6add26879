use std::sync::Arc;

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::storage::KeyValueStorage;

/// One collection of homogeneous records, persisted as a single JSON array
/// under a fixed store name.
pub struct RecordStore<T> {
    name: &'static str,
    storage: Arc<dyn KeyValueStorage>,
    seed: Vec<T>,
}

impl<T> RecordStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    pub fn new(name: &'static str, storage: Arc<dyn KeyValueStorage>, seed: Vec<T>) -> Self {
        Self { name, storage, seed }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the persisted collection, or the seed fixture when nothing has
    /// been saved yet. The seed itself is not written.
    pub async fn load(&self) -> Result<Vec<T>> {
        match self.storage.get_item(self.name).await? {
            Some(raw) => serde_json::from_str(&raw)
                .with_context(|| format!("malformed persisted collection '{}'", self.name)),
            None => {
                debug!("No persisted '{}' collection, using seed data", self.name);
                Ok(self.seed.clone())
            }
        }
    }

    /// Replaces the persisted collection wholesale.
    pub async fn save(&self, records: &[T]) -> Result<()> {
        let raw = serde_json::to_string(records)
            .with_context(|| format!("serializing collection '{}'", self.name))?;
        self.storage.set_item(self.name, raw).await
    }

    /// Highest identifier ever handed out for this collection, if recorded.
    pub async fn load_last_id(&self) -> Result<Option<i64>> {
        match self.storage.get_item(&self.last_id_key()).await? {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map(Some)
                .with_context(|| format!("malformed last id for '{}'", self.name)),
            None => Ok(None),
        }
    }

    pub async fn save_last_id(&self, id: i64) -> Result<()> {
        self.storage.set_item(&self.last_id_key(), id.to_string()).await
    }

    fn last_id_key(&self) -> String {
        format!("{}.lastId", self.name)
    }
}
