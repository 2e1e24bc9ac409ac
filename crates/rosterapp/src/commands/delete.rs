use crate::commands::{CmdMessage, CmdResult};
use crate::model::Person;
use crate::store::events::ChangeEvent;
use crate::store::record_store::RecordStore;
use std::collections::HashSet;

/// Removes one record. Deleting an absent key only adds an info message.
pub fn run(store: &mut RecordStore, key: &str) -> CmdResult {
    let removed = store.get(key).cloned();
    let event = store.delete(key);

    let mut result = CmdResult::default();
    result.add_event(event);
    match removed {
        Some(person) => {
            result.add_message(CmdMessage::success(format!(
                "Record deleted ({}): {}",
                person.key,
                person.full_name()
            )));
            result.affected_records.push(person);
        }
        None => result.add_message(CmdMessage::info(format!(
            "No record with key {}; nothing deleted",
            key
        ))),
    }
    result
}

/// Removes every record whose key is in `keys`.
pub fn run_many<K: AsRef<str>>(store: &mut RecordStore, keys: &[K]) -> CmdResult {
    let targets: HashSet<&str> = keys.iter().map(|k| k.as_ref()).collect();
    let removed: Vec<Person> = store
        .list()
        .iter()
        .filter(|p| targets.contains(p.key.as_str()))
        .cloned()
        .collect();
    let event = store.delete_many(keys.iter().map(|k| k.as_ref()));

    summarize(event, removed)
}

pub(crate) fn summarize(event: ChangeEvent, removed: Vec<Person>) -> CmdResult {
    let mut result = CmdResult::default();
    let message = match removed.len() {
        0 => CmdMessage::info("No matching records; nothing deleted"),
        1 => CmdMessage::success("1 record deleted"),
        n => CmdMessage::success(format!("{} records deleted", n)),
    };
    result.add_event(event);
    result.add_message(message);
    result.with_affected_records(removed)
}
