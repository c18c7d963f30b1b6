use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RecordSelector;
use crate::manager::RecordManager;
use crate::store::StorageBackend;

use super::helpers::{missing_message, resolve_selectors};

/// Deletes the selected pages. Selectors are resolved against the listing
/// as it was before the first deletion, so `delete 1 2` removes the two
/// newest pages.
pub fn run<B: StorageBackend>(
    manager: &mut RecordManager<B>,
    selectors: &[RecordSelector],
) -> Result<CmdResult> {
    let (found, missing) = resolve_selectors(manager, selectors)?;
    let mut result = CmdResult::default();

    for dr in found {
        if let Some(removed) = manager.delete(&dr.record.id)? {
            result.add_message(CmdMessage::success(format!(
                "Page deleted successfully ({}): {}",
                dr.index, removed.title
            )));
            result.affected_records.push(removed);
        }
    }

    for selector in &missing {
        result.add_message(CmdMessage::warning(missing_message(selector)));
    }

    Ok(result)
}
