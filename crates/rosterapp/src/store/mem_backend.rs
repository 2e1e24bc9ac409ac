use super::backend::StorageBackend;
use crate::error::{Result, RosterError};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Default)]
struct MemState {
    entries: HashMap<String, String>,
    simulate_write_error: bool,
    unavailable: bool,
    writes: usize,
}

/// In-memory storage backend for testing.
///
/// Uses `Rc<RefCell<_>>` since roster is single-threaded. Clones share the
/// same entries, so a test can hand one clone to the API and keep another to
/// inspect what was persisted.
#[derive(Clone, Default)]
pub struct MemBackend {
    state: Rc<RefCell<MemState>>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend for a context without persistent storage.
    pub fn headless() -> Self {
        let backend = Self::default();
        backend.state.borrow_mut().unavailable = true;
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        self.state.borrow_mut().simulate_write_error = simulate;
    }

    /// Number of successful `set` calls so far.
    pub fn write_count(&self) -> usize {
        self.state.borrow().writes
    }

    /// Test helper to seed a raw value, bypassing the write counter.
    pub fn insert_raw(&self, key: &str, value: &str) {
        self.state
            .borrow_mut()
            .entries
            .insert(key.to_string(), value.to_string());
    }
}

impl StorageBackend for MemBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.state.borrow().entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut state = self.state.borrow_mut();
        if state.simulate_write_error {
            return Err(RosterError::Store("Simulated write error".to_string()));
        }
        state.entries.insert(key.to_string(), value.to_string());
        state.writes += 1;
        Ok(())
    }

    fn available(&self) -> bool {
        !self.state.borrow().unavailable
    }
}
