//! # Storage Layer
//!
//! This module owns roster's data: the canonical record collection and the
//! machinery that makes it survive restarts.
//!
//! ## Pieces
//!
//! - [`record_store::RecordStore`]: The in-memory, ordered list of records. The
//!   only place records are created, edited or removed. No I/O.
//! - [`backend::StorageBackend`]: The host's key-value port (`get`/`set`), with
//!   [`fs_backend::FsBackend`] for production and [`mem_backend::MemBackend`]
//!   for tests.
//! - [`persistence::Persistence`]: Hydrates the store from, and writes full
//!   snapshots to, a backend under one fixed key.
//! - [`events`]: The change events every mutation yields, and the
//!   [`events::ChangeListener`] trait consumers implement.
//!
//! ## Snapshot Lifecycle
//!
//! 1. **Startup**: `Persistence::hydrate` reads `roster-state`. Absent or
//!    corrupt data yields an empty store; nothing is raised.
//! 2. **Mutation**: The store changes, then returns a `ChangeEvent`.
//! 3. **Publish**: The API delivers the event to listeners in registration
//!    order. `Persistence` is always first and overwrites the snapshot with
//!    the full record list.
//!
//! A failed write is logged and ignored: the in-memory store stays
//! authoritative for the rest of the session.
//!
//! ## Headless Contexts
//!
//! A backend that reports `available() == false` (e.g. no data directory
//! could be determined) is never touched. Roster then works in memory only.
//!
//! ## Storage Layout (FsBackend)
//!
//! ```text
//! <data_dir>/
//! └── roster-state.json   # {"persons": [...]}
//! ```

pub mod backend;
pub mod events;
pub mod fs_backend;
pub mod mem_backend;
pub mod persistence;
pub mod record_store;
