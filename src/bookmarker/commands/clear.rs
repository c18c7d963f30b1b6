use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::manager::RecordManager;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(manager: &mut RecordManager<B>) -> Result<CmdResult> {
    let removed = manager.delete_all()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "All pages are deleted successfully ({} removed)",
        removed
    )));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::ManagerFixture;
    use crate::store::SAVED_PAGES_KEY;

    #[test]
    fn clears_and_writes_empty_marker() {
        let mut fx = ManagerFixture::new().with_pages(&["A", "B", "C", "D", "E"]);
        let result = run(&mut fx.manager).unwrap();

        assert!(result.messages[0].content.contains("5 removed"));
        assert!(fx.manager.is_empty().unwrap());
        assert_eq!(fx.backend.raw(SAVED_PAGES_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn clearing_empty_collection_still_persists() {
        let mut fx = ManagerFixture::new();
        run(&mut fx.manager).unwrap();
        assert_eq!(fx.backend.write_count(), 1);
    }
}
