use crate::commands::{CmdMessage, CmdResult};
use crate::store::record_store::RecordStore;

/// Fetches records by key, in the order asked. Missing keys are reported as
/// warnings.
pub fn run<K: AsRef<str>>(store: &RecordStore, keys: &[K]) -> CmdResult {
    let mut found = Vec::with_capacity(keys.len());
    let mut missing = Vec::new();
    for key in keys {
        let key = key.as_ref();
        match store.get(key) {
            Some(person) => found.push(person.clone()),
            None => missing.push(CmdMessage::warning(format!("No record with key {}", key))),
        }
    }
    let mut result = CmdResult::default().with_listed_records(found);
    for message in missing {
        result.add_message(message);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::person_with_key;

    #[test]
    fn fetches_in_requested_order() {
        let store = RecordStore::from_records(vec![
            person_with_key("1", "A"),
            person_with_key("2", "B"),
        ]);
        let result = run(&store, &["2", "x", "1"]);

        let keys: Vec<_> = result.listed_records.iter().map(|p| p.key.as_str()).collect();
        assert_eq!(keys, vec!["2", "1"]);
        assert_eq!(result.messages.len(), 1);
        assert!(result.messages[0].content.contains("x"));
    }
}
