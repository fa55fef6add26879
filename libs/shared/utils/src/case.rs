//! Field-name translation between the backend's snake_case columns and the
//! camelCase keys used by records on the UI side.

use serde_json::{Map, Value};

pub fn to_snake_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, ch) in name.chars().enumerate() {
        if ch.is_ascii_uppercase() {
            if i > 0 {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

pub fn to_camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '_' {
            upper_next = !out.is_empty();
        } else if upper_next {
            out.push(ch.to_ascii_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

/// Rewrites every object key in `value`, recursing through nested objects
/// and arrays. Scalars are returned untouched.
pub fn rename_keys(value: Value, rename: &dyn Fn(&str) -> String) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(k, v)| (rename(&k), rename_keys(v, rename)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(
            items.into_iter().map(|v| rename_keys(v, rename)).collect(),
        ),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn converts_between_cases() {
        assert_eq!(to_snake_case("dateOfBirth"), "date_of_birth");
        assert_eq!(to_snake_case("refills"), "refills");
        assert_eq!(to_camel_case("video_room_url"), "videoRoomUrl");
        assert_eq!(to_camel_case("name"), "name");
        assert_eq!(to_camel_case("_private"), "private");
    }

    #[test]
    fn camel_and_snake_are_inverse_for_record_fields() {
        for field in ["scheduledTime", "policyNumber", "prescribedDate", "upcomingAppointments"] {
            assert_eq!(to_camel_case(&to_snake_case(field)), field);
        }
    }

    #[test]
    fn renames_nested_keys() {
        let wire = json!({
            "date_of_birth": "1990-01-01",
            "insurance": { "policy_number": "P-1", "group_number": "G-1" },
            "medical_history": [{ "type": "Visit", "attachment_count": 2 }]
        });

        let ui = rename_keys(wire, &to_camel_case);

        assert_eq!(ui, json!({
            "dateOfBirth": "1990-01-01",
            "insurance": { "policyNumber": "P-1", "groupNumber": "G-1" },
            "medicalHistory": [{ "type": "Visit", "attachmentCount": 2 }]
        }));
    }
}
