use crate::error::Result;
use crate::index::{index_records, DisplayRecord, RecordSelector};
use crate::manager::RecordManager;
use crate::store::StorageBackend;

pub fn indexed_records<B: StorageBackend>(
    manager: &mut RecordManager<B>,
) -> Result<Vec<DisplayRecord>> {
    Ok(index_records(manager.display_order()?))
}

/// Matches selectors against the current listing. Returns the pages found,
/// in selector order, and the selectors that matched nothing.
pub fn resolve_selectors<B: StorageBackend>(
    manager: &mut RecordManager<B>,
    selectors: &[RecordSelector],
) -> Result<(Vec<DisplayRecord>, Vec<RecordSelector>)> {
    let indexed = indexed_records(manager)?;
    let mut found = Vec::with_capacity(selectors.len());
    let mut missing = Vec::new();

    for selector in selectors {
        let hit = indexed.iter().find(|dr| match selector {
            RecordSelector::Index(idx) => &dr.index == idx,
            RecordSelector::Id(id) => &dr.record.id == id,
        });
        match hit {
            Some(dr) if !found.contains(dr) => found.push(dr.clone()),
            Some(_) => {}
            None => missing.push(selector.clone()),
        }
    }

    Ok((found, missing))
}

pub fn missing_message(selector: &RecordSelector) -> String {
    format!("No saved page matches {}", selector)
}
