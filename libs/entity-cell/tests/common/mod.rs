#![allow(dead_code)]

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use entity_cell::{Entity, ForeignKey, LocalEntityService};
use shared_database::{KeyValueStorage, MemoryStorage, RecordStore};

/// Minimal record kind used to exercise the generic services.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Referral {
    #[serde(rename = "Id")]
    pub id: i64,
    pub patient_id: i64,
    pub specialist_name: String,
    pub urgent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReferral {
    pub patient_id: i64,
    pub specialist_name: String,
    pub urgent: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferralPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patient_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialist_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgent: Option<bool>,
    #[serde(
        default,
        deserialize_with = "entity_cell::nullable",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
}

impl Entity for Referral {
    type Draft = NewReferral;
    type Patch = ReferralPatch;

    const STORE_NAME: &'static str = "referrals";
    const LABEL: &'static str = "Referral";
    const FOREIGN_KEYS: &'static [ForeignKey] = &[ForeignKey {
        field: "patientId",
        column: "patient_id",
        embed: "patient",
        table: "patients",
    }];

    fn id(&self) -> i64 {
        self.id
    }

    fn seed() -> Vec<Self> {
        vec![
            Referral {
                id: 1,
                patient_id: 1,
                specialist_name: "Dr. Amara Osei".to_string(),
                urgent: false,
                notes: None,
            },
            Referral {
                id: 2,
                patient_id: 3,
                specialist_name: "Dr. Lena Fischer".to_string(),
                urgent: true,
                notes: Some("Suspected arrhythmia".to_string()),
            },
        ]
    }

    fn validate_draft(draft: &NewReferral) -> Result<(), String> {
        if draft.specialist_name.trim().is_empty() {
            return Err("specialist name is required".to_string());
        }
        Ok(())
    }
}

pub fn draft(patient_id: i64, specialist: &str) -> NewReferral {
    NewReferral {
        patient_id,
        specialist_name: specialist.to_string(),
        urgent: false,
        notes: None,
    }
}

/// Service over an empty collection (no seed) in fresh memory storage.
pub fn empty_service() -> (LocalEntityService<Referral>, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let store = RecordStore::new(Referral::STORE_NAME, storage.clone() as Arc<dyn KeyValueStorage>, Vec::new());
    (LocalEntityService::with_store(store, None), storage)
}

/// Service over the seed fixture in fresh memory storage.
pub fn seeded_service() -> (LocalEntityService<Referral>, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    (LocalEntityService::new(storage.clone(), None), storage)
}
