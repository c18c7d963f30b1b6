use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RecordSelector;
use crate::manager::RecordManager;
use crate::opener::LinkOpener;
use crate::store::StorageBackend;

use super::helpers::{missing_message, resolve_selectors};

/// Opens the selected pages. A page is removed once opened when
/// `auto_delete` is on or `delete_after` is requested for this call; such
/// removals are reported as info, distinct from a manual delete. A page
/// whose link fails to open is kept.
pub fn run<B: StorageBackend, O: LinkOpener + ?Sized>(
    manager: &mut RecordManager<B>,
    opener: &O,
    selectors: &[RecordSelector],
    auto_delete: bool,
    delete_after: bool,
) -> Result<CmdResult> {
    let (found, missing) = resolve_selectors(manager, selectors)?;
    let mut result = CmdResult::default();

    for dr in found {
        let page = dr.record;
        if let Err(e) = opener.open(&page.url) {
            result.add_message(CmdMessage::error(format!(
                "Could not open {}: {}",
                page.url, e
            )));
            continue;
        }
        result.opened_urls.push(page.url.clone());

        if auto_delete || delete_after {
            if let Some(removed) = manager.delete(&page.id)? {
                result.add_message(CmdMessage::info(format!(
                    "Removed after opening: {}",
                    removed.title
                )));
                result.affected_records.push(removed);
            }
        }
    }

    for selector in &missing {
        result.add_message(CmdMessage::warning(missing_message(selector)));
    }

    Ok(result)
}
