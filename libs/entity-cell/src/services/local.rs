use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use shared_database::{KeyValueStorage, RecordStore};

use crate::models::{assemble, merge, Entity, ServiceError};
use crate::services::EntityService;

/// Artificial round-trip delays standing in for a network boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatencyProfile {
    pub get_all: Duration,
    pub get_by_id: Duration,
    pub create: Duration,
    pub update: Duration,
    pub delete: Duration,
}

impl Default for LatencyProfile {
    fn default() -> Self {
        Self {
            get_all: Duration::from_millis(300),
            get_by_id: Duration::from_millis(200),
            create: Duration::from_millis(400),
            update: Duration::from_millis(350),
            delete: Duration::from_millis(300),
        }
    }
}

/// Entity service over a local record store.
///
/// Every operation loads the full collection and every mutation rewrites it.
/// Mutations are serialized so two concurrent callers cannot overwrite each
/// other's changes.
pub struct LocalEntityService<E: Entity> {
    store: RecordStore<E>,
    latency: Option<LatencyProfile>,
    write_lock: Mutex<()>,
}

impl<E: Entity> LocalEntityService<E> {
    pub fn new(storage: Arc<dyn KeyValueStorage>, latency: Option<LatencyProfile>) -> Self {
        Self::with_store(RecordStore::new(E::STORE_NAME, storage, E::seed()), latency)
    }

    pub fn with_store(store: RecordStore<E>, latency: Option<LatencyProfile>) -> Self {
        Self {
            store,
            latency,
            write_lock: Mutex::new(()),
        }
    }

    async fn pause(&self, pick: fn(&LatencyProfile) -> Duration) {
        if let Some(profile) = &self.latency {
            tokio::time::sleep(pick(profile)).await;
        }
    }

    /// Next identifier: one past the highest ever assigned, so ids freed by a
    /// delete are not handed out again.
    async fn next_id(&self, records: &[E]) -> Result<i64, ServiceError> {
        let current_max = records.iter().map(E::id).max().unwrap_or(0);
        let last_assigned = self.store.load_last_id().await?.unwrap_or(0);
        Ok(current_max.max(last_assigned) + 1)
    }
}

#[async_trait]
impl<E: Entity> EntityService<E> for LocalEntityService<E> {
    async fn get_all(&self) -> Result<Vec<E>, ServiceError> {
        self.pause(|p| p.get_all).await;
        debug!("Loading all {} records", E::STORE_NAME);
        Ok(self.store.load().await?)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<E>, ServiceError> {
        self.pause(|p| p.get_by_id).await;
        debug!("Fetching {} {}", E::LABEL, id);
        let records = self.store.load().await?;
        Ok(records.into_iter().find(|record| record.id() == id))
    }

    async fn create(&self, draft: E::Draft) -> Result<E, ServiceError> {
        self.pause(|p| p.create).await;
        let _guard = self.write_lock.lock().await;

        let mut records = self.store.load().await?;
        let id = self.next_id(&records).await?;
        let record = assemble::<E>(id, &draft)?;

        records.push(record.clone());
        self.store.save_last_id(id).await?;
        self.store.save(&records).await?;

        debug!("Created {} {}", E::LABEL, id);
        Ok(record)
    }

    async fn update(&self, id: i64, patch: E::Patch) -> Result<E, ServiceError> {
        self.pause(|p| p.update).await;
        let _guard = self.write_lock.lock().await;

        let mut records = self.store.load().await?;
        let index = records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| ServiceError::not_found::<E>(id))?;

        let updated = merge::<E>(&records[index], &patch)?;
        records[index] = updated.clone();
        self.store.save(&records).await?;

        debug!("Updated {} {}", E::LABEL, id);
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.pause(|p| p.delete).await;
        let _guard = self.write_lock.lock().await;

        let records = self.store.load().await?;
        let before = records.len();
        let high_water = self.next_id(&records).await? - 1;
        let remaining: Vec<E> = records.into_iter().filter(|record| record.id() != id).collect();

        if remaining.len() == before {
            return Err(ServiceError::not_found::<E>(id));
        }

        // Remember the ceiling before the highest record can disappear.
        self.store.save_last_id(high_water).await?;
        self.store.save(&remaining).await?;
        debug!("Deleted {} {}", E::LABEL, id);
        Ok(())
    }
}
