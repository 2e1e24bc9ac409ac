//! # Command Layer
//!
//! This module contains the **core business logic** of roster. Each command lives in
//! its own submodule as plain functions over the [`RecordStore`] (and, for bulk
//! actions, the [`Selection`]).
//!
//! ## Role and Responsibilities
//!
//! Commands:
//! - Perform exactly one operation against the in-memory state
//! - Return a structured [`CmdResult`]: affected records, listed records or a
//!   page, the [`ChangeEvent`]s the operation produced, and messages
//! - Are completely UI-agnostic
//!
//! ## What Commands Do NOT Do
//!
//! - **Any I/O**: No persistence, no stdout. A command *describes* its side
//!   effects through `events`; the API facade delivers them to listeners
//!   (persistence first) after the command returns.
//! - **Argument parsing**: That's the CLI layer's job
//! - **Exit codes**: Return `Result`, let the caller decide
//!
//! ## Unknown Keys
//!
//! Editing or deleting a key that does not exist is not an error. The store
//! treats it as a silent no-op; the command attaches a warning or info
//! message so a UI can surface it, and still returns `Ok`.
//!
//! ## Command Modules
//!
//! - [`create`]: Add a record
//! - [`update`]: Edit a record in place
//! - [`delete`]: Remove one record or a set of records
//! - [`list`]: Build the sorted, paginated view
//! - [`view`]: Fetch records by key
//! - [`select`]: Selection edits and selection-driven bulk delete
//!
//! [`RecordStore`]: crate::store::record_store::RecordStore
//! [`Selection`]: crate::selection::Selection
//! [`ChangeEvent`]: crate::store::events::ChangeEvent

use crate::model::Person;
use crate::store::events::ChangeEvent;
use crate::view::PageView;
use serde::Serialize;

pub mod create;
pub mod delete;
pub mod list;
pub mod select;
pub mod update;
pub mod view;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
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
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Records created, edited or removed by the command.
    pub affected_records: Vec<Person>,
    /// Records fetched for display.
    pub listed_records: Vec<Person>,
    /// The derived page, for `list`.
    pub page: Option<PageView>,
    /// Store changes, in the order they happened.
    pub events: Vec<ChangeEvent>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn add_event(&mut self, event: ChangeEvent) {
        self.events.push(event);
    }

    pub fn with_affected_records(mut self, records: Vec<Person>) -> Self {
        self.affected_records = records;
        self
    }

    pub fn with_listed_records(mut self, records: Vec<Person>) -> Self {
        self.listed_records = records;
        self
    }

    pub fn with_page(mut self, page: PageView) -> Self {
        self.page = Some(page);
        self
    }
}
