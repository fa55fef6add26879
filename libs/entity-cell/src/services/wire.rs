//! Translation between record shape (camelCase keys, `Id`, bare foreign-key
//! ids) and the backend's row shape (snake_case columns, `id`, foreign keys
//! embedded as nested objects on reads).

use serde::Serialize;
use serde_json::{Map, Value};

use shared_utils::case::{rename_keys, to_camel_case, to_snake_case};

use crate::models::{to_object, Entity, ServiceError, ID_KEY};

const WIRE_ID: &str = "id";

/// PostgREST `select` clause embedding each foreign key as `{ id }`.
pub fn select_clause<E: Entity>() -> String {
    let mut clause = String::from("*");
    for fk in E::FOREIGN_KEYS {
        clause.push_str(&format!(",{}:{}(id)", fk.embed, fk.table));
    }
    clause
}

/// Converts a create or update payload into backend columns. The identifier
/// is never written; the backend owns it.
pub fn to_wire<E: Entity, T: Serialize>(payload: &T) -> Result<Value, ServiceError> {
    let mut row = Map::new();

    for (key, value) in to_object(payload)? {
        if key == ID_KEY {
            continue;
        }
        match E::FOREIGN_KEYS.iter().find(|fk| fk.field == key) {
            Some(fk) => {
                row.insert(fk.column.to_string(), value);
            }
            None => {
                row.insert(to_snake_case(&key), rename_keys(value, &to_snake_case));
            }
        }
    }

    Ok(Value::Object(row))
}

/// Converts a backend row into a record of kind `E`.
pub fn from_wire<E: Entity>(row: Value) -> Result<E, ServiceError> {
    let columns = match row {
        Value::Object(columns) => columns,
        other => {
            return Err(ServiceError::Backend(format!(
                "expected a {} row object, got {}",
                E::LABEL,
                other
            )))
        }
    };

    let mut fields = Map::new();
    let mut bare_keys = Vec::new();

    for (key, value) in columns {
        if key == WIRE_ID {
            fields.insert(ID_KEY.to_string(), value);
        } else if let Some(fk) = E::FOREIGN_KEYS.iter().find(|fk| fk.embed == key) {
            // Embedded object wins over the bare column.
            let id = match value {
                Value::Object(mut embedded) => embedded.remove(WIRE_ID).unwrap_or(Value::Null),
                other => other,
            };
            fields.insert(fk.field.to_string(), id);
        } else if let Some(fk) = E::FOREIGN_KEYS.iter().find(|fk| fk.column == key) {
            bare_keys.push((fk.field, value));
        } else {
            fields.insert(to_camel_case(&key), rename_keys(value, &to_camel_case));
        }
    }

    for (field, value) in bare_keys {
        fields.entry(field.to_string()).or_insert(value);
    }

    Ok(serde_json::from_value(Value::Object(fields))?)
}
