use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::PersonFields;
use crate::store::record_store::RecordStore;

pub fn run(store: &mut RecordStore, fields: PersonFields) -> Result<CmdResult> {
    let (person, event) = store.create(fields)?;

    let mut result = CmdResult::default();
    result.add_event(event);
    result.add_message(CmdMessage::success(format!(
        "Record created ({}): {}",
        person.key,
        person.full_name()
    )));
    result.affected_records.push(person);
    Ok(result)
}
