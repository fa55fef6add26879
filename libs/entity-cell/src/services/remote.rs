use std::marker::PhantomData;

use async_trait::async_trait;
use tracing::{debug, error};

use shared_config::AppConfig;
use shared_database::{SupabaseClient, TableResponse};

use crate::models::{Entity, ServiceError};
use crate::services::wire::{from_wire, select_clause, to_wire};
use crate::services::EntityService;

/// Entity service over the hosted Supabase REST API. Identifier assignment
/// is left to the table's identity column.
pub struct RemoteEntityService<E: Entity> {
    supabase: SupabaseClient,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity> RemoteEntityService<E> {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            supabase: SupabaseClient::new(config),
            _entity: PhantomData,
        }
    }

    fn rows(&self, response: TableResponse, action: &str) -> Result<Vec<E>, ServiceError> {
        if !response.success {
            let message = response
                .message
                .unwrap_or_else(|| format!("Failed to {} {}", action, E::STORE_NAME));
            error!("Failed to {} {}: {}", action, E::STORE_NAME, message);
            return Err(ServiceError::Backend(message));
        }

        response.data.into_iter().map(from_wire::<E>).collect()
    }
}

#[async_trait]
impl<E: Entity> EntityService<E> for RemoteEntityService<E> {
    async fn get_all(&self) -> Result<Vec<E>, ServiceError> {
        debug!("Fetching all {} from backend", E::STORE_NAME);
        let query = format!("select={}&order=id.asc", select_clause::<E>());
        let response = self.supabase.fetch_records(E::STORE_NAME, &query).await;
        self.rows(response, "fetch")
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<E>, ServiceError> {
        debug!("Fetching {} {} from backend", E::LABEL, id);
        let query = format!("id=eq.{}&select={}", id, select_clause::<E>());
        let response = self.supabase.fetch_records(E::STORE_NAME, &query).await;
        Ok(self.rows(response, "fetch")?.into_iter().next())
    }

    async fn create(&self, draft: E::Draft) -> Result<E, ServiceError> {
        let row = to_wire::<E, _>(&draft)?;
        let query = format!("select={}", select_clause::<E>());
        let response = self.supabase.create_record(E::STORE_NAME, &query, row).await;

        let created = self.rows(response, "create")?.into_iter().next().ok_or_else(|| {
            ServiceError::Backend(format!("Backend returned no {} after create", E::LABEL))
        })?;

        debug!("Created {} {} on backend", E::LABEL, created.id());
        Ok(created)
    }

    async fn update(&self, id: i64, patch: E::Patch) -> Result<E, ServiceError> {
        let changes = to_wire::<E, _>(&patch)?;
        let query = format!("id=eq.{}&select={}", id, select_clause::<E>());
        let response = self.supabase.update_records(E::STORE_NAME, &query, changes).await;

        self.rows(response, "update")?
            .into_iter()
            .next()
            .ok_or_else(|| ServiceError::not_found::<E>(id))
    }

    async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        let query = format!("id=eq.{}", id);
        let response = self.supabase.delete_records(E::STORE_NAME, &query).await;

        if !response.success {
            let message = response.message.unwrap_or_default();
            error!("Failed to delete {} {}: {}", E::LABEL, id, message);
            return Err(ServiceError::Backend(message));
        }
        if response.data.is_empty() {
            return Err(ServiceError::not_found::<E>(id));
        }

        debug!("Deleted {} {} on backend", E::LABEL, id);
        Ok(())
    }
}
