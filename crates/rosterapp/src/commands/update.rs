use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PersonPatch;
use crate::store::record_store::RecordStore;

/// Edits the record with `key`.
///
/// An unknown key is not an error: the store is left alone, a no-op event is
/// still reported, and a warning message flags the stale edit.
pub fn run(store: &mut RecordStore, key: &str, patch: &PersonPatch) -> Result<CmdResult> {
    let (updated, event) = store.update(key, patch)?;

    let mut result = CmdResult::default();
    result.add_event(event);
    match updated {
        Some(person) => {
            result.add_message(CmdMessage::success(format!(
                "Record updated ({}): {}",
                person.key,
                person.full_name()
            )));
            result.affected_records.push(person);
        }
        None => {
            result.add_message(CmdMessage::warning(format!(
                "No record with key {}; nothing updated",
                key
            )));
        }
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{create, MessageLevel};
    use crate::test_utils::sample_fields;

    #[test]
    fn updates_record_fields() {
        let mut store = RecordStore::new();
        let created = create::run(&mut store, sample_fields("Old")).unwrap();
        let key = created.affected_records[0].key.clone();

        let patch = PersonPatch {
            firstname: Some("New".into()),
            nationality: Some("French".into()),
            ..Default::default()
        };
        let result = run(&mut store, &key, &patch).unwrap();

        let person = store.get(&key).unwrap();
        assert_eq!(person.firstname, "New");
        assert_eq!(person.nationality, "French");
        assert_eq!(person.mobile_phone, "0812345678");
        assert_eq!(result.affected_records[0], *person);
        assert_eq!(result.events[0].keys, vec![key]);
    }

    #[test]
    fn unknown_key_warns_without_error() {
        let mut store = RecordStore::new();
        create::run(&mut store, sample_fields("Keep")).unwrap();

        let result = run(&mut store, "stale", &PersonPatch::from(sample_fields("X"))).unwrap();

        assert!(result.affected_records.is_empty());
        assert!(result.events[0].is_noop());
        assert_eq!(result.messages[0].level, MessageLevel::Warning);
        assert_eq!(store.list()[0].firstname, "Keep");
    }
}
