use super::events::{ChangeEvent, ChangeKind};
use crate::error::Result;
use crate::model::{Person, PersonFields, PersonPatch};
use log::warn;
use std::collections::HashSet;
use uuid::Uuid;

/// The canonical, ordered collection of records.
///
/// Records keep insertion order; sorting only ever happens in derived views.
/// Every mutation returns the [`ChangeEvent`] it produced once the mutation
/// is complete. The store itself does no I/O.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    records: Vec<Person>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store from hydrated records.
    ///
    /// Records that fail validation, or whose key repeats an earlier one, are
    /// dropped. Every kept record is valid and keys stay unique even when the
    /// snapshot was edited by hand.
    pub fn from_records(records: Vec<Person>) -> Self {
        let mut seen = HashSet::new();
        let mut kept = Vec::with_capacity(records.len());
        for person in records {
            if let Err(err) = person.validate() {
                warn!(
                    "event=hydrate_invalid_record module=store status=dropped key={} error={}",
                    person.key, err
                );
                continue;
            }
            if seen.insert(person.key.clone()) {
                kept.push(person);
            } else {
                warn!(
                    "event=hydrate_duplicate_key module=store status=dropped key={}",
                    person.key
                );
            }
        }
        Self { records: kept }
    }

    pub fn list(&self) -> &[Person] {
        &self.records
    }

    pub fn get(&self, key: &str) -> Option<&Person> {
        self.records.iter().find(|p| p.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    pub fn keys(&self) -> Vec<String> {
        self.records.iter().map(|p| p.key.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a new record under a freshly generated key.
    pub fn create(&mut self, fields: PersonFields) -> Result<(Person, ChangeEvent)> {
        fields.validate()?;
        let key = self.next_key();
        let person = Person::from_fields(key.clone(), fields);
        self.records.push(person.clone());
        Ok((person, ChangeEvent::new(ChangeKind::Created, vec![key])))
    }

    /// Applies `patch` to the record with `key`, keeping its position.
    ///
    /// An unknown key is a silent no-op: `Ok((None, event))` with an empty
    /// event. A patch that would produce an invalid record is rejected and
    /// the record is left untouched.
    pub fn update(
        &mut self,
        key: &str,
        patch: &PersonPatch,
    ) -> Result<(Option<Person>, ChangeEvent)> {
        let Some(idx) = self.position(key) else {
            return Ok((None, ChangeEvent::new(ChangeKind::Updated, Vec::new())));
        };

        let mut updated = self.records[idx].clone();
        updated.apply(patch);
        updated.validate()?;
        self.records[idx] = updated.clone();

        Ok((
            Some(updated),
            ChangeEvent::new(ChangeKind::Updated, vec![key.to_string()]),
        ))
    }

    /// Removes the record with `key`. Absent keys are a no-op.
    pub fn delete(&mut self, key: &str) -> ChangeEvent {
        let removed = match self.position(key) {
            Some(idx) => vec![self.records.remove(idx).key],
            None => Vec::new(),
        };
        ChangeEvent::new(ChangeKind::Deleted, removed)
    }

    /// Removes every record whose key is in `keys`; survivors keep their
    /// relative order and unknown keys are ignored.
    pub fn delete_many<I, K>(&mut self, keys: I) -> ChangeEvent
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        let targets: HashSet<String> = keys.into_iter().map(|k| k.as_ref().to_string()).collect();
        let mut removed = Vec::new();
        self.records.retain(|p| {
            if targets.contains(&p.key) {
                removed.push(p.key.clone());
                false
            } else {
                true
            }
        });
        ChangeEvent::new(ChangeKind::Deleted, removed)
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.records.iter().position(|p| p.key == key)
    }

    fn next_key(&self) -> String {
        loop {
            let key = Uuid::new_v4().to_string();
            if !self.contains(&key) {
                return key;
            }
        }
    }
}
