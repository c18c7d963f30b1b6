use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RecordSelector;
use crate::manager::{RecordManager, ReminderOutcome};
use crate::store::StorageBackend;

use super::helpers::{missing_message, resolve_selectors};

/// Replaces the reminder text of one page.
pub fn run<B: StorageBackend>(
    manager: &mut RecordManager<B>,
    selector: &RecordSelector,
    reminder_text: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let (found, _) = resolve_selectors(manager, std::slice::from_ref(selector))?;
    let Some(target) = found.into_iter().next() else {
        result.add_message(CmdMessage::error(missing_message(selector)));
        return Ok(result);
    };

    let outcome = result.recover(
        "Reminder text not updated",
        manager.update_reminder(&target.record.id, reminder_text.trim()),
    )?;

    match outcome {
        Some(ReminderOutcome::Updated(page)) => {
            result.add_message(CmdMessage::success("Reminder text updated successfully"));
            result.affected_records.push(page);
        }
        Some(ReminderOutcome::Unchanged) => {
            result.add_message(CmdMessage::error("Reminder text not changed"));
        }
        None => {}
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::ManagerFixture;

    fn first() -> RecordSelector {
        RecordSelector::Index(DisplayIndex(1))
    }

    #[test]
    fn updates_reminder_in_place() {
        let mut fx = ManagerFixture::new().with_pages(&["A", "B"]);
        let result = run(&mut fx.manager, &first(), "call back on Monday").unwrap();

        assert_eq!(result.messages[0].content, "Reminder text updated successfully");
        let pages = fx.manager.display_order().unwrap();
        assert_eq!(pages[0].title, "B");
        assert_eq!(pages[0].reminder_text, "call back on Monday");
    }

    #[test]
    fn same_text_is_reported_and_not_saved() {
        let mut fx = ManagerFixture::new().with_pages(&["A"]);
        let writes = fx.backend.write_count();
        let result = run(&mut fx.manager, &first(), "Reminder for A").unwrap();

        assert_eq!(result.messages[0].content, "Reminder text not changed");
        assert_eq!(fx.backend.write_count(), writes);
    }

    #[test]
    fn empty_text_is_rejected() {
        let mut fx = ManagerFixture::new().with_pages(&["A"]);
        let result = run(&mut fx.manager, &first(), "  ").unwrap();
        assert!(result.has_errors());
        assert_eq!(fx.manager.display_order().unwrap()[0].reminder_text, "Reminder for A");
    }

    #[test]
    fn unknown_page_is_reported() {
        let mut fx = ManagerFixture::new();
        let result = run(&mut fx.manager, &first(), "text").unwrap();
        assert!(result.has_errors());
    }
}
