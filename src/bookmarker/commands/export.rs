use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookmarkerError, Result};
use crate::manager::RecordManager;
use crate::store::StorageBackend;
use std::fs;
use std::path::{Path, PathBuf};

pub const EXPORT_FILENAME: &str = "bookmarker-saved-pages.json";

/// Writes every saved page to `output` as pretty JSON. `output` may be a
/// file path or an existing directory; by default the file is written to
/// the current directory.
pub fn run<B: StorageBackend>(
    manager: &mut RecordManager<B>,
    output: Option<&Path>,
) -> Result<CmdResult> {
    let bytes = manager.export_all()?;
    let count = manager.len()?;
    let target = export_path(output);

    fs::write(&target, bytes).map_err(BookmarkerError::Io)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Data exported successfully: {} pages written to {}",
        count,
        target.display()
    )));
    result.exported_to = Some(target);
    Ok(result)
}

fn export_path(output: Option<&Path>) -> PathBuf {
    match output {
        Some(path) if path.is_dir() => path.join(EXPORT_FILENAME),
        Some(path) => path.to_path_buf(),
        None => PathBuf::from(EXPORT_FILENAME),
    }
}
