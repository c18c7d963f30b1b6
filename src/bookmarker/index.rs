//! # Display Indexes
//!
//! Record ids are UUIDs, which nobody wants to type. Every listing assigns
//! each page a 1-based index in display order (most recently added first),
//! and commands accept those indexes as selectors.
//!
//! Indexes are canonical: they are computed over the whole collection, so a
//! page keeps the same index whether it shows up in a full listing or in
//! search results. `1` is always the newest page.
//!
//! Selectors may also be a range (`2-4`) or a full record id.

use crate::model::SavedPage;
use std::str::FromStr;
use uuid::Uuid;

/// Widest range a single selector may expand to.
pub const MAX_RANGE_LEN: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(0) => Err("Indexes start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

/// What the user typed to pick a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordSelector {
    Index(DisplayIndex),
    Id(Uuid),
}

impl std::fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordSelector::Index(idx) => write!(f, "{}", idx),
            RecordSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub record: SavedPage,
    pub index: DisplayIndex,
}

/// Assigns indexes to records that are already in display order.
pub fn index_records(display_order: Vec<SavedPage>) -> Vec<DisplayRecord> {
    display_order
        .into_iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            record,
            index: DisplayIndex(i + 1),
        })
        .collect()
}

/// Parses one selector argument into one or more selectors.
///
/// Supports:
/// - Single index: "3"
/// - Range: "3-5" (expands to 3, 4, 5); start must be <= end and the range
///   may span at most `MAX_RANGE_LEN` indexes
/// - Record id: a full UUID
pub fn parse_selector(s: &str) -> Result<Vec<RecordSelector>, String> {
    let s = s.trim();

    if let Ok(id) = Uuid::parse_str(s) {
        return Ok(vec![RecordSelector::Id(id)]);
    }

    if let Some((start, end)) = s.split_once('-') {
        if !start.is_empty() {
            let start = DisplayIndex::from_str(start)?;
            let end = DisplayIndex::from_str(end)?;
            if start > end {
                return Err(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    start, end
                ));
            }
            if end.0 - start.0 >= MAX_RANGE_LEN {
                return Err(format!(
                    "Range too large: {}-{} (at most {} pages at once)",
                    start, end, MAX_RANGE_LEN
                ));
            }
            return Ok((start.0..=end.0)
                .map(|n| RecordSelector::Index(DisplayIndex(n)))
                .collect());
        }
    }

    DisplayIndex::from_str(s).map(|idx| vec![RecordSelector::Index(idx)])
}

/// Parses every argument, keeping the first occurrence of duplicates.
pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<RecordSelector>, String> {
    let mut selectors: Vec<RecordSelector> = Vec::new();
    for input in inputs {
        for selector in parse_selector(input.as_ref())? {
            if !selectors.contains(&selector) {
                selectors.push(selector);
            }
        }
    }
    Ok(selectors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(title: &str) -> SavedPage {
        SavedPage::new("https://example.com".into(), title.into(), "note".into())
    }

    #[test]
    fn indexes_follow_given_order_from_one() {
        let indexed = index_records(vec![page("newest"), page("older"), page("oldest")]);
        assert_eq!(indexed[0].index, DisplayIndex(1));
        assert_eq!(indexed[0].record.title, "newest");
        assert_eq!(indexed[2].index, DisplayIndex(3));
    }

    #[test]
    fn parses_single_index() {
        assert_eq!(
            parse_selector("2"),
            Ok(vec![RecordSelector::Index(DisplayIndex(2))])
        );
        assert!(parse_selector("0").is_err());
        assert!(parse_selector("abc").is_err());
    }

    #[test]
    fn parses_range() {
        let parsed = parse_selector("2-4").unwrap();
        assert_eq!(
            parsed,
            vec![
                RecordSelector::Index(DisplayIndex(2)),
                RecordSelector::Index(DisplayIndex(3)),
                RecordSelector::Index(DisplayIndex(4)),
            ]
        );
        assert!(parse_selector("4-2").is_err());
        assert!(parse_selector("-2").is_err());
    }

    #[test]
    fn rejects_oversized_range() {
        assert!(parse_selector("1-18446744073709551615").is_err());
        assert!(parse_selector("1-999999999999").is_err());
        let widest = parse_selector(&format!("1-{}", MAX_RANGE_LEN)).unwrap();
        assert_eq!(widest.len(), MAX_RANGE_LEN);
        assert!(parse_selector(&format!("1-{}", MAX_RANGE_LEN + 1)).is_err());
    }

    #[test]
    fn parses_uuid() {
        let id = Uuid::new_v4();
        assert_eq!(
            parse_selector(&id.to_string()),
            Ok(vec![RecordSelector::Id(id)])
        );
    }

    #[test]
    fn deduplicates_across_arguments() {
        let parsed = parse_selectors(&["1-2", "2", "3"]).unwrap();
        assert_eq!(parsed.len(), 3);
    }
}
