use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::RecordSelector;
use crate::manager::RecordManager;
use crate::store::StorageBackend;

use super::helpers::{missing_message, resolve_selectors};

pub fn run<B: StorageBackend>(
    manager: &mut RecordManager<B>,
    selectors: &[RecordSelector],
) -> Result<CmdResult> {
    let (found, missing) = resolve_selectors(manager, selectors)?;
    let mut result = CmdResult::default().with_listed_records(found);
    for selector in &missing {
        result.add_message(CmdMessage::warning(missing_message(selector)));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::ManagerFixture;

    #[test]
    fn views_by_index_and_id() {
        let mut fx = ManagerFixture::new().with_pages(&["A", "B"]);
        let id_of_a = fx.manager.records().unwrap()[0].id;

        let result = run(
            &mut fx.manager,
            &[
                RecordSelector::Index(DisplayIndex(1)),
                RecordSelector::Id(id_of_a),
            ],
        )
        .unwrap();

        let titles: Vec<_> = result
            .listed_records
            .iter()
            .map(|dr| dr.record.title.as_str())
            .collect();
        assert_eq!(titles, vec!["B", "A"]);
        assert!(result.messages.is_empty());
    }

    #[test]
    fn warns_about_unknown_selectors() {
        let mut fx = ManagerFixture::new().with_pages(&["A"]);
        let result = run(&mut fx.manager, &[RecordSelector::Index(DisplayIndex(9))]).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].content, "No saved page matches 9");
    }
}
