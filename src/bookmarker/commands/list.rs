use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::manager::{RecordManager, SearchMode};
use crate::store::StorageBackend;
use std::collections::HashSet;

use super::helpers::indexed_records;

#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub query: Option<String>,
    pub mode: SearchMode,
}

impl RecordFilter {
    pub fn search(query: impl Into<String>, mode: SearchMode) -> Self {
        Self {
            query: Some(query.into()),
            mode,
        }
    }
}

/// Lists pages in display order. With a query, only the matching pages are
/// listed, each keeping its canonical index.
pub fn run<B: StorageBackend>(
    manager: &mut RecordManager<B>,
    filter: RecordFilter,
) -> Result<CmdResult> {
    let indexed = indexed_records(manager)?;
    let mut result = CmdResult::default();

    if indexed.is_empty() {
        result.add_message(CmdMessage::info("There are no saved pages yet"));
        return Ok(result);
    }

    if filter.query.is_none() {
        return Ok(result.with_listed_records(indexed));
    }

    let matched = result.recover(
        "Search failed",
        manager.search(filter.query.as_deref(), filter.mode),
    )?;
    let Some(matched) = matched else {
        return Ok(result);
    };

    let ids: HashSet<_> = matched.iter().map(|p| p.id).collect();
    let listed = indexed
        .into_iter()
        .filter(|dr| ids.contains(&dr.record.id))
        .collect();
    Ok(result.with_listed_records(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::DisplayIndex;
    use crate::store::memory::fixtures::ManagerFixture;

    #[test]
    fn lists_newest_first_with_indexes() {
        let mut fx = ManagerFixture::new().with_pages(&["A", "B", "C"]);
        let result = run(&mut fx.manager, RecordFilter::default()).unwrap();

        let listed: Vec<_> = result
            .listed_records
            .iter()
            .map(|dr| (dr.index, dr.record.title.as_str()))
            .collect();
        assert_eq!(
            listed,
            vec![
                (DisplayIndex(1), "C"),
                (DisplayIndex(2), "B"),
                (DisplayIndex(3), "A"),
            ]
        );
    }

    #[test]
    fn search_keeps_canonical_indexes() {
        let mut fx = ManagerFixture::new().with_pages(&["Cat blog", "Dog blog", "Fish tank"]);
        let result = run(
            &mut fx.manager,
            RecordFilter::search("dog", SearchMode::Substring),
        )
        .unwrap();

        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].record.title, "Dog blog");
        assert_eq!(result.listed_records[0].index, DisplayIndex(2));
    }

    #[test]
    fn short_query_lists_everything() {
        let mut fx = ManagerFixture::new().with_pages(&["Cat blog", "Dog blog"]);
        let result = run(&mut fx.manager, RecordFilter::search("x", SearchMode::Substring)).unwrap();
        assert_eq!(result.listed_records.len(), 2);
    }

    #[test]
    fn empty_collection_says_so() {
        let mut fx = ManagerFixture::new();
        let result = run(&mut fx.manager, RecordFilter::default()).unwrap();
        assert!(result.listed_records.is_empty());
        assert_eq!(result.messages[0].content, "There are no saved pages yet");
    }

    #[test]
    fn bad_pattern_is_reported_not_raised() {
        let mut fx = ManagerFixture::new().with_pages(&["Cat blog"]);
        let result = run(&mut fx.manager, RecordFilter::search("[abc", SearchMode::Regex)).unwrap();
        assert!(result.listed_records.is_empty());
        assert!(result.has_errors());
    }
}
