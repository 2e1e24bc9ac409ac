use crate::commands::{CmdMessage, CmdResult};
use crate::model::Person;
use crate::selection::Selection;
use crate::store::record_store::RecordStore;

/// Adds `keys` to the selection. Keys with no record are skipped with a warning.
pub fn select<K: AsRef<str>>(
    selection: &mut Selection,
    store: &RecordStore,
    keys: &[K],
) -> CmdResult {
    let mut result = CmdResult::default();
    for key in keys {
        let key = key.as_ref();
        if store.contains(key) {
            selection.select(key);
        } else {
            result.add_message(CmdMessage::warning(format!(
                "No record with key {}; not selected",
                key
            )));
        }
    }
    result
}

pub fn deselect<K: AsRef<str>>(selection: &mut Selection, keys: &[K]) -> CmdResult {
    for key in keys {
        selection.deselect(key.as_ref());
    }
    CmdResult::default()
}

/// Selects every record in the store, regardless of sort or page.
pub fn select_all(selection: &mut Selection, store: &RecordStore) -> CmdResult {
    selection.select_all(store.list());
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!("{} records selected", selection.len())));
    result
}

pub fn clear(selection: &mut Selection) -> CmdResult {
    selection.clear();
    CmdResult::default()
}

/// Deletes the selected records and clears the selection.
pub fn bulk_delete(selection: &mut Selection, store: &mut RecordStore) -> CmdResult {
    let removed: Vec<Person> = store
        .list()
        .iter()
        .filter(|p| selection.contains(&p.key))
        .cloned()
        .collect();
    let event = selection.bulk_delete(store);
    super::delete::summarize(event, removed)
}
