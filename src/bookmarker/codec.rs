//! # Collection Codec
//!
//! The wire format shared by the persisted collection and the export file:
//! a JSON array of `{id, url, title, reminderText, saveDate}` objects.
//!
//! Decoding never trusts the parsed shape. Each record is checked field by
//! field before it is built, and the first violation rejects the whole
//! collection. Nothing is coerced: a missing `saveDate` is not "now", a
//! numeric `id` is not stringified.

use crate::error::{BookmarkerError, Result};
use crate::model::SavedPage;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::HashSet;
use uuid::Uuid;

pub fn encode_collection(records: &[SavedPage]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(BookmarkerError::Serialization)
}

pub fn decode_collection(raw: &str) -> Result<Vec<SavedPage>> {
    let value: Value = serde_json::from_str(raw)
        .map_err(|e| BookmarkerError::Format(format!("not valid JSON: {}", e)))?;

    let items = value
        .as_array()
        .ok_or_else(|| BookmarkerError::Format("expected an array of pages".to_string()))?;

    let mut seen = HashSet::with_capacity(items.len());
    let mut records = Vec::with_capacity(items.len());

    for (position, item) in items.iter().enumerate() {
        let record = decode_record(item).map_err(|reason| {
            BookmarkerError::Format(format!("page #{}: {}", position, reason))
        })?;
        if !seen.insert(record.id) {
            return Err(BookmarkerError::Format(format!(
                "page #{}: duplicate id {}",
                position, record.id
            )));
        }
        records.push(record);
    }

    Ok(records)
}

fn decode_record(item: &Value) -> std::result::Result<SavedPage, String> {
    let obj = item.as_object().ok_or("expected an object")?;

    let id_raw = text_field(obj, "id")?;
    let id = Uuid::parse_str(id_raw).map_err(|_| format!("`id` is not a UUID: {}", id_raw))?;

    let date_raw = text_field(obj, "saveDate")?;
    let save_date = DateTime::parse_from_rfc3339(date_raw)
        .map(|d| d.with_timezone(&Utc))
        .map_err(|_| format!("`saveDate` is not a timestamp: {}", date_raw))?;

    let record = SavedPage {
        id,
        url: text_field(obj, "url")?.to_string(),
        title: text_field(obj, "title")?.to_string(),
        reminder_text: text_field(obj, "reminderText")?.to_string(),
        save_date,
    };

    match record.missing_field() {
        Some(field) => Err(format!("`{}` is empty", field)),
        None => Ok(record),
    }
}

fn text_field<'a>(obj: &'a Map<String, Value>, name: &str) -> std::result::Result<&'a str, String> {
    match obj.get(name) {
        None | Some(Value::Null) => Err(format!("`{}` is missing", name)),
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(_) => Err(format!("`{}` must be a string", name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(n: usize) -> Vec<SavedPage> {
        (0..n)
            .map(|i| {
                SavedPage::new(
                    format!("https://example.com/{}", i),
                    format!("Title {}", i),
                    format!("Reminder {}", i),
                )
            })
            .collect()
    }

    #[test]
    fn decodes_what_it_encodes() {
        let records = sample(3);
        let raw = encode_collection(&records).unwrap();
        assert_eq!(decode_collection(&raw).unwrap(), records);
    }

    #[test]
    fn empty_array_is_an_empty_collection() {
        assert!(decode_collection("[]").unwrap().is_empty());
    }

    #[test]
    fn accepts_browser_style_dates() {
        let raw = r#"[{
            "id": "3f2b8c1e-9a4d-4e7b-8c2a-1d5e6f7a8b9c",
            "url": "https://example.com",
            "title": "Example",
            "reminderText": "check pricing",
            "saveDate": "2024-03-05T10:15:30.123Z"
        }]"#;
        let records = decode_collection(raw).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].reminder_text, "check pricing");
    }

    #[test]
    fn rejects_non_array() {
        let err = decode_collection(r#"{"pages": []}"#).unwrap_err();
        assert!(matches!(err, BookmarkerError::Format(_)));
    }

    #[test]
    fn rejects_invalid_json() {
        assert!(matches!(
            decode_collection("not json").unwrap_err(),
            BookmarkerError::Format(_)
        ));
    }

    #[test]
    fn reports_position_and_field_of_first_violation() {
        let mut value = serde_json::to_value(sample(3)).unwrap();
        value[1].as_object_mut().unwrap().remove("title");
        value[2]["url"] = Value::String(String::new());

        let err = decode_collection(&value.to_string()).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("page #1"), "{}", msg);
        assert!(msg.contains("`title` is missing"), "{}", msg);
    }

    #[test]
    fn rejects_blank_text_fields() {
        let mut value = serde_json::to_value(sample(1)).unwrap();
        value[0]["reminderText"] = Value::String("  ".into());
        let msg = decode_collection(&value.to_string()).unwrap_err().to_string();
        assert!(msg.contains("`reminderText` is empty"), "{}", msg);
    }

    #[test]
    fn rejects_wrong_types_without_coercion() {
        let mut value = serde_json::to_value(sample(1)).unwrap();
        value[0]["title"] = Value::from(42);
        let msg = decode_collection(&value.to_string()).unwrap_err().to_string();
        assert!(msg.contains("`title` must be a string"), "{}", msg);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let records = sample(2);
        let dup = vec![records[0].clone(), records[1].clone(), records[0].clone()];
        let raw = encode_collection(&dup).unwrap();
        let msg = decode_collection(&raw).unwrap_err().to_string();
        assert!(msg.contains("duplicate id"), "{}", msg);
    }
}
