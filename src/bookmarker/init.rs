use crate::api::BookmarkerApi;
use crate::error::{BookmarkerError, Result};
use crate::store::fs::FileBackend;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const HOME_ENV: &str = "BOOKMARKER_HOME";

pub struct BookmarkerContext {
    pub api: BookmarkerApi<FileBackend>,
    pub data_dir: PathBuf,
}

/// Picks the data directory: an explicit path wins, then `BOOKMARKER_HOME`,
/// then the platform data directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "bookmarker", "bookmarker")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| BookmarkerError::Api("Could not determine data directory".to_string()))
}

pub fn initialize(explicit_dir: Option<&Path>) -> Result<BookmarkerContext> {
    let data_dir = resolve_data_dir(explicit_dir)?;
    debug!(data_dir = %data_dir.display(), "using data directory");

    let api = BookmarkerApi::new(FileBackend::new(data_dir.clone()))?;
    Ok(BookmarkerContext { api, data_dir })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn explicit_dir_wins() {
        let temp = TempDir::new().unwrap();
        assert_eq!(resolve_data_dir(Some(temp.path())).unwrap(), temp.path());
    }

    #[test]
    fn initialize_over_empty_dir() {
        let temp = TempDir::new().unwrap();
        let mut ctx = initialize(Some(temp.path())).unwrap();

        assert_eq!(ctx.data_dir, temp.path());
        assert!(ctx.api.records().is_empty().unwrap());
        assert!(!ctx.api.settings().auto_delete);
    }
}
