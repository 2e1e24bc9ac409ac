use crate::error::Result;

/// Abstract interface for the host's persistent key-value store.
///
/// This trait handles the "how" of persistence (filesystem vs memory),
/// while [`Persistence`](super::persistence::Persistence) handles the
/// "what" (snapshot shape, failure policy).
///
/// Methods take `&self`; backends that need to mutate internal state use
/// interior mutability, since roster is single-threaded.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing is stored there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Overwrite the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Whether this context has a persistent store at all.
    /// Headless contexts return false and are never read or written.
    fn available(&self) -> bool;
}
