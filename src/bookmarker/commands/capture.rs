use crate::capture::CaptureSource;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::manager::{RecordManager, UpsertOutcome};
use crate::model::SavedPage;
use crate::store::StorageBackend;

const NOT_SAVED: &str = "Page could not be saved";

pub fn run<B: StorageBackend, C: CaptureSource + ?Sized>(
    manager: &mut RecordManager<B>,
    source: &C,
    reminder_text: &str,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let reminder_text = reminder_text.trim();
    if reminder_text.is_empty() {
        result.add_message(CmdMessage::error(format!(
            "{}: You must enter a text as reminder first.",
            NOT_SAVED
        )));
        return Ok(result);
    }

    let Some(tab) = source.active_tab() else {
        result.add_message(CmdMessage::error(format!(
            "{}: there is no active page to capture (pass --url)",
            NOT_SAVED
        )));
        return Ok(result);
    };

    let page = SavedPage::new(tab.url, tab.title, reminder_text.to_string());
    let Some(outcome) = result.recover(NOT_SAVED, manager.add_or_update(page.clone()))? else {
        return Ok(result);
    };

    match outcome {
        UpsertOutcome::Added { total } => result.add_message(CmdMessage::success(format!(
            "New page added: there are {} saved pages in total",
            total
        ))),
        UpsertOutcome::Updated => {
            result.add_message(CmdMessage::success(format!("Page updated: {}", page.title)))
        }
    }
    result.affected_records.push(page);
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capture::{ActiveTab, GivenTab};
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::ManagerFixture;

    struct NoTab;

    impl CaptureSource for NoTab {
        fn active_tab(&self) -> Option<ActiveTab> {
            None
        }
    }

    fn tab() -> GivenTab {
        GivenTab::new(
            Some("https://rust-lang.org".into()),
            Some("Rust Programming Language".into()),
        )
    }

    #[test]
    fn captures_active_tab_with_reminder() {
        let mut fx = ManagerFixture::new().with_pages(&["Existing"]);
        let result = run(&mut fx.manager, &tab(), "  learn traits  ").unwrap();

        assert_eq!(result.affected_records.len(), 1);
        let saved = &result.affected_records[0];
        assert_eq!(saved.url, "https://rust-lang.org");
        assert_eq!(saved.reminder_text, "learn traits");
        assert_eq!(
            result.messages[0].content,
            "New page added: there are 2 saved pages in total"
        );
        assert_eq!(fx.titles()[0], "Rust Programming Language");
    }

    #[test]
    fn empty_reminder_saves_nothing() {
        let mut fx = ManagerFixture::new();
        let result = run(&mut fx.manager, &tab(), "   ").unwrap();

        assert!(result.affected_records.is_empty());
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(result.messages[0].content.contains("You must enter a text"));
        assert_eq!(fx.backend.write_count(), 0);
    }

    #[test]
    fn unavailable_tab_saves_nothing() {
        let mut fx = ManagerFixture::new();
        let result = run(&mut fx.manager, &NoTab, "note").unwrap();

        assert!(result.has_errors());
        assert!(fx.manager.is_empty().unwrap());
    }
}
