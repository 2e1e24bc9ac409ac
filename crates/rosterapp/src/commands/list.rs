use crate::commands::CmdResult;
use crate::store::record_store::RecordStore;
use crate::view::{build_view, SortSpec};

pub fn run(store: &RecordStore, sort: Option<SortSpec>, page: usize, page_size: usize) -> CmdResult {
    let view = build_view(store.list(), sort, page, page_size);
    CmdResult::default().with_page(view)
}
