use crate::model::Person;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
}

/// Published after a store mutation has completed.
///
/// `keys` lists the records the mutation actually touched, in store order.
/// It is empty when the mutation matched nothing (e.g. deleting an unknown
/// key); such events are still published.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    pub keys: Vec<String>,
}

impl ChangeEvent {
    pub fn new(kind: ChangeKind, keys: Vec<String>) -> Self {
        Self { kind, keys }
    }

    /// True when the mutation left the store unchanged.
    pub fn is_noop(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Receives change events together with the store contents they produced.
///
/// Listeners are registered on [`RosterApi`](crate::api::RosterApi) and run
/// in registration order.
pub trait ChangeListener {
    fn on_change(&mut self, event: &ChangeEvent, records: &[Person]);
}
