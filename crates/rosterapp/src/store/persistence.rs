use super::backend::StorageBackend;
use super::events::{ChangeEvent, ChangeListener};
use crate::model::Person;
use log::{debug, error, warn};
use serde::{Deserialize, Serialize};

/// The single key the snapshot lives under.
pub const SNAPSHOT_KEY: &str = "roster-state";

/// The persisted artifact: the full record list under a fixed identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub persons: Vec<Person>,
}

/// Reads and writes full snapshots through a [`StorageBackend`].
///
/// Neither direction ever fails: a missing or unreadable snapshot hydrates
/// as an empty list and a failed write leaves the in-memory store as the
/// source of truth. Both are logged.
pub struct Persistence<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> Persistence<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn hydrate(&self) -> Vec<Person> {
        if !self.backend.available() {
            debug!("event=hydrate module=persistence status=skipped reason=headless");
            return Vec::new();
        }

        let raw = match self.backend.get(SNAPSHOT_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("event=hydrate module=persistence status=empty reason=absent");
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=hydrate module=persistence status=empty reason=read_failed error={}",
                    err
                );
                return Vec::new();
            }
        };

        match serde_json::from_str::<Snapshot>(&raw) {
            Ok(snapshot) => {
                debug!(
                    "event=hydrate module=persistence status=ok records={}",
                    snapshot.persons.len()
                );
                snapshot.persons
            }
            Err(err) => {
                error!(
                    "event=hydrate module=persistence status=empty reason=parse_failed error={}",
                    err
                );
                Vec::new()
            }
        }
    }

    /// Overwrites the stored snapshot with `records`.
    ///
    /// Returns whether the write reached the backend.
    pub fn persist(&self, records: &[Person]) -> bool {
        if !self.backend.available() {
            return false;
        }

        let snapshot = SnapshotRef { persons: records };
        let serialized = match serde_json::to_string(&snapshot) {
            Ok(s) => s,
            Err(err) => {
                error!(
                    "event=persist module=persistence status=failed reason=serialize error={}",
                    err
                );
                return false;
            }
        };

        match self.backend.set(SNAPSHOT_KEY, &serialized) {
            Ok(()) => {
                debug!(
                    "event=persist module=persistence status=ok records={}",
                    records.len()
                );
                true
            }
            Err(err) => {
                error!(
                    "event=persist module=persistence status=failed reason=write error={}",
                    err
                );
                false
            }
        }
    }
}

impl<B: StorageBackend> ChangeListener for Persistence<B> {
    fn on_change(&mut self, _event: &ChangeEvent, records: &[Person]) {
        self.persist(records);
    }
}

// Borrowing twin of `Snapshot` so persisting does not clone the records.
#[derive(Serialize)]
struct SnapshotRef<'a> {
    persons: &'a [Person],
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::events::ChangeKind;
    use crate::store::mem_backend::MemBackend;
    use crate::test_utils::{person_with_key, sample_fields};

    fn roster() -> Vec<Person> {
        let mut with_passport = person_with_key("2", "Bea");
        with_passport.passport_no = Some("P123".to_string());
        with_passport.citizen_id = None;
        vec![
            person_with_key("1", "Ann"),
            with_passport,
            person_with_key("3", "Cid"),
        ]
    }

    #[test]
    fn test_round_trip_preserves_records_and_order() {
        let persistence = Persistence::new(MemBackend::new());
        let records = roster();

        assert!(persistence.persist(&records));
        assert_eq!(persistence.hydrate(), records);
    }

    #[test]
    fn test_round_trip_fractional_salary() {
        let persistence = Persistence::new(MemBackend::new());
        let mut person = person_with_key("1", "Ann");
        person.expected_salary = 12345.67;

        persistence.persist(std::slice::from_ref(&person));
        assert_eq!(persistence.hydrate(), vec![person]);
    }

    #[test]
    fn test_round_trip_full_precision_salaries() {
        let mut state: u64 = 0x9E37_79B9_7F4A_7C15;
        let mut records = Vec::new();
        for i in 0..2000 {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            let unit = (state >> 11) as f64 / (1u64 << 53) as f64;
            let mut person = person_with_key(&i.to_string(), "Ann");
            person.expected_salary = unit * 1_000_000.0;
            records.push(person);
        }
        let mut known = person_with_key("known", "Ann");
        known.expected_salary = 394301.33835633675;
        records.push(known);

        let persistence = Persistence::new(MemBackend::new());
        assert!(persistence.persist(&records));
        let hydrated = persistence.hydrate();

        assert_eq!(hydrated.len(), records.len());
        for (before, after) in records.iter().zip(&hydrated) {
            assert_eq!(
                before.expected_salary.to_bits(),
                after.expected_salary.to_bits(),
                "salary of {} changed",
                before.key
            );
        }
    }

    #[test]
    fn test_snapshot_shape() {
        let backend = MemBackend::new();
        let persistence = Persistence::new(backend.clone());
        persistence.persist(&[person_with_key("k", "Ann")]);

        let raw = backend.get(SNAPSHOT_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["persons"][0]["key"], "k");
        assert_eq!(value["persons"][0]["citizenId"], "1234567890123");
    }

    #[test]
    fn test_persist_overwrites_previous_snapshot() {
        let persistence = Persistence::new(MemBackend::new());
        persistence.persist(&roster());
        persistence.persist(&[person_with_key("9", "Solo")]);

        let hydrated = persistence.hydrate();
        assert_eq!(hydrated.len(), 1);
        assert_eq!(hydrated[0].key, "9");
    }

    #[test]
    fn test_hydrate_absent_key_is_empty() {
        let persistence = Persistence::new(MemBackend::new());
        assert!(persistence.hydrate().is_empty());
    }

    #[test]
    fn test_hydrate_unparsable_data_is_empty() {
        let backend = MemBackend::new();
        backend.insert_raw(SNAPSHOT_KEY, "{not json at all");
        let persistence = Persistence::new(backend);
        assert!(persistence.hydrate().is_empty());
    }

    #[test]
    fn test_hydrate_wrong_shape_is_empty() {
        let backend = MemBackend::new();
        backend.insert_raw(SNAPSHOT_KEY, r#"{"persons": [{"key": 5}]}"#);
        let persistence = Persistence::new(backend);
        assert!(persistence.hydrate().is_empty());
    }

    #[test]
    fn test_headless_is_noop_both_ways() {
        let backend = MemBackend::headless();
        backend.insert_raw(SNAPSHOT_KEY, r#"{"persons": []}"#);
        let persistence = Persistence::new(backend.clone());

        assert!(!persistence.persist(&roster()));
        assert_eq!(backend.write_count(), 0);
        assert!(persistence.hydrate().is_empty());
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let backend = MemBackend::new();
        backend.set_simulate_write_error(true);
        let persistence = Persistence::new(backend);
        assert!(!persistence.persist(&roster()));
    }

    #[test]
    fn test_listener_persists_current_records() {
        let backend = MemBackend::new();
        let mut persistence = Persistence::new(backend.clone());
        let records = vec![Person::from_fields("x".to_string(), sample_fields("Xan"))];
        let event = ChangeEvent::new(ChangeKind::Created, vec!["x".into()]);

        persistence.on_change(&event, &records);

        assert_eq!(backend.write_count(), 1);
        assert_eq!(persistence.hydrate(), records);
    }
}
