//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for all roster operations, regardless of the UI being used.
//!
//! ## Role and Responsibilities
//!
//! [`RosterApi`] is the application's state object. The entry point constructs it
//! once, handing it the storage backend; nothing in roster is global. It owns:
//!
//! - the [`RecordStore`] (hydrated at construction),
//! - the [`Selection`],
//! - the current sort and page,
//! - the ordered list of [`ChangeListener`]s.
//!
//! For every operation it:
//!
//! 1. **Dispatches** to the command function, which only touches in-memory state
//! 2. **Delivers** the command's change events to listeners in registration
//!    order, after the mutation has completed. [`Persistence`] is registered
//!    first, so the snapshot is written before any other listener runs.
//! 3. **Reconciles** derived state: deleted keys leave the selection and the
//!    current page is clamped to the pages that still exist
//! 4. **Returns** the structured [`CmdResult`]
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs`
//! - **Terminal I/O**: Returns data structures, not strings
//!
//! ## Testing Strategy
//!
//! API tests run against [`MemBackend`](crate::store::mem_backend::MemBackend) and
//! verify the wiring: persistence happens, listeners run in order, selection and
//! paging stay consistent. Command logic is tested in the command modules.

use crate::commands::{self, CmdResult};
use crate::error::Result;
use crate::model::{Person, PersonFields, PersonPatch};
use crate::selection::Selection;
use crate::store::backend::StorageBackend;
use crate::store::events::{ChangeKind, ChangeListener};
use crate::store::persistence::Persistence;
use crate::store::record_store::RecordStore;
use crate::view::{build_view, PageView, SortSpec};
use log::debug;

pub struct RosterApi {
    store: RecordStore,
    selection: Selection,
    sort: Option<SortSpec>,
    page: usize,
    page_size: usize,
    listeners: Vec<Box<dyn ChangeListener>>,
}

impl RosterApi {
    /// Hydrates the store from `backend` and registers it as the first listener.
    pub fn open<B: StorageBackend + 'static>(backend: B, page_size: usize) -> Self {
        let persistence = Persistence::new(backend);
        let store = RecordStore::from_records(persistence.hydrate());
        debug!(
            "event=api_open module=api status=ok records={} page_size={}",
            store.len(),
            page_size
        );
        let mut api = Self {
            store,
            selection: Selection::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
            listeners: Vec::new(),
        };
        api.subscribe(Box::new(persistence));
        api
    }

    /// Registers a listener after those already registered.
    pub fn subscribe(&mut self, listener: Box<dyn ChangeListener>) {
        self.listeners.push(listener);
    }

    // --- Record commands ---

    pub fn create(&mut self, fields: PersonFields) -> Result<CmdResult> {
        let result = commands::create::run(&mut self.store, fields)?;
        Ok(self.dispatch(result))
    }

    pub fn update(&mut self, key: &str, patch: &PersonPatch) -> Result<CmdResult> {
        let result = commands::update::run(&mut self.store, key, patch)?;
        Ok(self.dispatch(result))
    }

    pub fn delete(&mut self, key: &str) -> Result<CmdResult> {
        let result = commands::delete::run(&mut self.store, key);
        Ok(self.dispatch(result))
    }

    pub fn delete_many<K: AsRef<str>>(&mut self, keys: &[K]) -> Result<CmdResult> {
        let result = commands::delete::run_many(&mut self.store, keys);
        Ok(self.dispatch(result))
    }

    pub fn view<K: AsRef<str>>(&self, keys: &[K]) -> Result<CmdResult> {
        Ok(commands::view::run(&self.store, keys))
    }

    pub fn get(&self, key: &str) -> Option<&Person> {
        self.store.get(key)
    }

    /// All records in store order.
    pub fn records(&self) -> &[Person] {
        self.store.list()
    }

    // --- View commands ---

    /// The current page under the current sort.
    pub fn list(&self) -> Result<CmdResult> {
        Ok(commands::list::run(
            &self.store,
            self.sort,
            self.page,
            self.page_size,
        ))
    }

    pub fn set_sort(&mut self, sort: Option<SortSpec>) -> Result<CmdResult> {
        self.sort = sort;
        self.list()
    }

    /// Moves to `page`, clamped to the pages that exist.
    pub fn set_page(&mut self, page: usize) -> Result<CmdResult> {
        self.page = page;
        self.clamp_page();
        self.list()
    }

    pub fn current_view(&self) -> PageView {
        build_view(self.store.list(), self.sort, self.page, self.page_size)
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    // --- Selection commands ---

    pub fn select<K: AsRef<str>>(&mut self, keys: &[K]) -> Result<CmdResult> {
        Ok(commands::select::select(
            &mut self.selection,
            &self.store,
            keys,
        ))
    }

    pub fn deselect<K: AsRef<str>>(&mut self, keys: &[K]) -> Result<CmdResult> {
        Ok(commands::select::deselect(&mut self.selection, keys))
    }

    pub fn select_all(&mut self) -> Result<CmdResult> {
        Ok(commands::select::select_all(&mut self.selection, &self.store))
    }

    pub fn clear_selection(&mut self) -> Result<CmdResult> {
        Ok(commands::select::clear(&mut self.selection))
    }

    pub fn bulk_delete(&mut self) -> Result<CmdResult> {
        let result = commands::select::bulk_delete(&mut self.selection, &mut self.store);
        Ok(self.dispatch(result))
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    // --- Driver ---

    fn dispatch(&mut self, result: CmdResult) -> CmdResult {
        for event in &result.events {
            if event.kind == ChangeKind::Deleted {
                self.selection.forget(&event.keys);
            }
            for listener in self.listeners.iter_mut() {
                listener.on_change(event, self.store.list());
            }
        }
        self.clamp_page();
        result
    }

    fn clamp_page(&mut self) {
        let last = crate::view::page_count(self.store.len(), self.page_size).max(1);
        self.page = self.page.clamp(1, last);
    }
}

pub use crate::commands::{CmdMessage, MessageLevel};
pub use crate::view::{SortDirection, SortField};
