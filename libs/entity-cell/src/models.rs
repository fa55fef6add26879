use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};
use thiserror::Error;

use shared_models::error::AppError;

/// Key under which every record carries its identifier.
pub const ID_KEY: &str = "Id";

// ==============================================================================
// ENTITY CONTRACT
// ==============================================================================

/// A reference from one record kind into another, e.g. an appointment's
/// `patientId`. Only used for translating to and from the backend's schema;
/// references are never validated against the target collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ForeignKey {
    /// Field name on the record (`patientId`).
    pub field: &'static str,
    /// Bare column written to the backend (`patient_id`).
    pub column: &'static str,
    /// Name of the embedded object the backend returns on reads (`patient`).
    pub embed: &'static str,
    /// Table the embed resolves against (`patients`).
    pub table: &'static str,
}

/// A flat record kind with a numeric identifier unique within its own
/// collection.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Create payload: every field of the record except the identifier.
    type Draft: Serialize + DeserializeOwned + Send + Sync + 'static;
    /// Update payload. Fields left out of the serialized form are preserved
    /// on the stored record.
    type Patch: Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Storage key of the local collection and table name on the backend.
    const STORE_NAME: &'static str;
    /// Human readable kind, used in messages ("Patient not found").
    const LABEL: &'static str;
    const FOREIGN_KEYS: &'static [ForeignKey] = &[];

    fn id(&self) -> i64;

    /// Fixture returned until the first mutation is persisted.
    fn seed() -> Vec<Self>;

    fn validate_draft(_draft: &Self::Draft) -> Result<(), String> {
        Ok(())
    }

    fn validate_patch(_patch: &Self::Patch) -> Result<(), String> {
        Ok(())
    }
}

/// Builds a record from its create payload and a freshly assigned identifier.
pub fn assemble<E: Entity>(id: i64, draft: &E::Draft) -> Result<E, ServiceError> {
    let mut fields = to_object(draft)?;
    fields.insert(ID_KEY.to_string(), json!(id));
    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// Shallow merge: top-level keys present in `patch` overwrite the record's,
/// including explicit nulls. The identifier is never overwritten.
pub fn merge<E: Entity>(record: &E, patch: &E::Patch) -> Result<E, ServiceError> {
    let mut fields = to_object(record)?;
    for (key, value) in to_object(patch)? {
        if key != ID_KEY {
            fields.insert(key, value);
        }
    }
    Ok(serde_json::from_value(Value::Object(fields))?)
}

/// `deserialize_with` for nullable patch fields typed `Option<Option<T>>`:
/// an absent key stays `None` (through `#[serde(default)]`), an explicit
/// `null` becomes `Some(None)` and clears the stored value on merge.
pub fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

pub(crate) fn to_object<T: Serialize>(value: &T) -> Result<Map<String, Value>, ServiceError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(ServiceError::Storage(format!(
            "expected an object payload, got {}",
            other
        ))),
    }
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} not found (id {id})")]
    NotFound { entity: &'static str, id: i64 },

    #[error("Backend request failed: {0}")]
    Backend(String),

    #[error("Storage failure: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ServiceError {
    pub fn not_found<E: Entity>(id: i64) -> Self {
        ServiceError::NotFound { entity: E::LABEL, id }
    }
}

impl From<anyhow::Error> for ServiceError {
    fn from(e: anyhow::Error) -> Self {
        ServiceError::Storage(format!("{:#}", e))
    }
}

impl From<ServiceError> for AppError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::NotFound { .. } => AppError::NotFound(e.to_string()),
            ServiceError::Backend(msg) => AppError::ExternalService(msg),
            ServiceError::Storage(msg) => AppError::Storage(msg),
            ServiceError::Serialization(err) => AppError::Internal(err.to_string()),
        }
    }
}
