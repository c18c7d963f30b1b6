use crate::error::{BookmarkerError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A page the user saved together with a note reminding them why.
///
/// Only `reminder_text` changes after creation; the other fields are
/// write-once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPage {
    pub id: Uuid,
    pub url: String,
    pub title: String,
    pub reminder_text: String,
    pub save_date: DateTime<Utc>,
}

impl SavedPage {
    pub fn new(url: String, title: String, reminder_text: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            url,
            title,
            reminder_text,
            save_date: Utc::now(),
        }
    }

    /// Checks that every field is present and non-blank.
    pub fn validate(&self) -> Result<()> {
        if let Some(field) = self.missing_field() {
            return Err(BookmarkerError::Validation(format!(
                "field `{}` must not be empty",
                field
            )));
        }
        Ok(())
    }

    pub(crate) fn missing_field(&self) -> Option<&'static str> {
        if self.id.is_nil() {
            return Some("id");
        }
        [
            ("url", &self.url),
            ("title", &self.title),
            ("reminderText", &self.reminder_text),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }

    /// True if `needle` (already lowercased) occurs in any searchable field.
    pub fn contains_lowercase(&self, needle: &str) -> bool {
        [&self.reminder_text, &self.title, &self.url]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

/// User preferences, persisted as a single object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Remove a saved page right after its link is opened.
    pub auto_delete: bool,
}

impl Settings {
    pub const KEYS: &'static [&'static str] = &["auto-delete"];

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "auto-delete" => Some(self.auto_delete.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "auto-delete" => {
                self.auto_delete = parse_flag(value)?;
                Ok(())
            }
            _ => Err(format!("Unknown config key: {}", key)),
        }
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

fn parse_flag(value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(format!("Expected on/off, got: {}", other)),
    }
}
