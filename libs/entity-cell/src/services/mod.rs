pub mod local;
pub mod remote;
pub mod wire;

use std::sync::Arc;
use async_trait::async_trait;
use tracing::info;

use shared_config::{AppConfig, DataBackend};
use shared_database::KeyValueStorage;

use crate::models::{Entity, ServiceError};

pub use local::{LatencyProfile, LocalEntityService};
pub use remote::RemoteEntityService;

/// CRUD contract shared by every record kind, independent of where the
/// collection actually lives.
#[async_trait]
pub trait EntityService<E: Entity>: Send + Sync {
    /// Whole collection in storage order.
    async fn get_all(&self) -> Result<Vec<E>, ServiceError>;

    /// `Ok(None)` when no record carries `id`.
    async fn get_by_id(&self, id: i64) -> Result<Option<E>, ServiceError>;

    async fn create(&self, draft: E::Draft) -> Result<E, ServiceError>;

    /// Fails with `NotFound` when `id` is absent.
    async fn update(&self, id: i64, patch: E::Patch) -> Result<E, ServiceError>;

    /// Fails with `NotFound` when `id` is absent.
    async fn delete(&self, id: i64) -> Result<(), ServiceError>;
}

pub type SharedService<E> = Arc<dyn EntityService<E>>;

/// Picks the service implementation for `E` from the configured backend.
pub fn build_service<E: Entity>(
    config: &AppConfig,
    storage: Arc<dyn KeyValueStorage>,
) -> SharedService<E> {
    match config.data_backend {
        DataBackend::Local => {
            let latency = config.simulated_latency.then(LatencyProfile::default);
            info!("{} service backed by local '{}' collection", E::LABEL, E::STORE_NAME);
            Arc::new(LocalEntityService::<E>::new(storage, latency))
        }
        DataBackend::Supabase => {
            info!("{} service backed by Supabase table '{}'", E::LABEL, E::STORE_NAME);
            Arc::new(RemoteEntityService::<E>::new(config))
        }
    }
}
