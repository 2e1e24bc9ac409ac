//! # Roster
//!
//! Roster maintains a small list of person records: create, edit and delete
//! them, view them sorted and paginated, and select many at once for bulk
//! deletion. The list survives restarts through a snapshot kept in a
//! key-value store.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  UI client (the `roster` CLI, or anything else)             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns store, selection, sort/page, listeners              │
//! │  - Delivers change events (persistence first)               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*)                                 │
//! │  - Pure operations over RecordStore / Selection             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Store (store/*), View (view.rs), Selection (selection.rs)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything in this crate is UI agnostic and does no terminal I/O.

pub mod api;
pub mod citizen_id;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod selection;
pub mod store;
pub mod view;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
