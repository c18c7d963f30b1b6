//! # Command Layer
//!
//! One module per user operation. Commands drive the managers and turn
//! their outcomes into a [`CmdResult`]: the pages involved plus
//! notifications for the user.
//!
//! Domain failures (a malformed import, an empty reminder, an unknown page)
//! never escape a command as `Err`; they become error or warning messages.
//! Only environmental failures such as an unwritable data directory are
//! returned as errors.

use crate::error::Result;
use crate::index::DisplayRecord;
use crate::model::{SavedPage, Settings};
use std::path::PathBuf;

pub mod capture;
pub mod clear;
pub mod config;
pub mod delete;
pub mod edit;
pub mod export;
pub mod helpers;
pub mod import;
pub mod list;
pub mod open;
pub mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_records: Vec<SavedPage>,
    pub listed_records: Vec<DisplayRecord>,
    pub settings: Option<Settings>,
    pub exported_to: Option<PathBuf>,
    pub opened_urls: Vec<String>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_records(mut self, records: Vec<DisplayRecord>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|m| m.level == MessageLevel::Error)
    }

    /// Passes `Ok` values through. Domain errors are recorded as an error
    /// message prefixed with `context` and yield `Ok(None)`; anything else is
    /// returned.
    pub(crate) fn recover<T>(&mut self, context: &str, result: Result<T>) -> Result<Option<T>> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.is_soft() => {
                self.add_message(CmdMessage::error(format!("{}: {}", context, e)));
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}
