use crate::commands::{CmdMessage, CmdResult};
use crate::error::{BookmarkerError, Result};
use crate::manager::RecordManager;
use crate::store::StorageBackend;
use std::fs;
use std::path::Path;

pub const JSON_MIME: &str = "application/json";

/// Guesses a media type from the file extension; only JSON is known.
pub fn mime_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "json" => Some(JSON_MIME),
        _ => None,
    }
}

/// Replaces the whole collection with the pages in the JSON file at `path`.
///
/// The file is read while an import slot is held, so a second import cannot
/// interleave with this one. Any malformed page rejects the whole file.
pub fn run<B: StorageBackend>(manager: &mut RecordManager<B>, path: &Path) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    if mime_for_path(path) != Some(JSON_MIME) {
        result.add_message(CmdMessage::error(format!(
            "Data import failed: {} is in wrong format (expected a .json file)",
            path.display()
        )));
        return Ok(result);
    }

    let Some(ticket) = result.recover("Data import failed", manager.begin_import())? else {
        return Ok(result);
    };

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) => {
            manager.abandon_import(ticket);
            if e.kind() == std::io::ErrorKind::NotFound {
                result.add_message(CmdMessage::error(format!(
                    "Data import failed: {} does not exist",
                    path.display()
                )));
                return Ok(result);
            }
            return Err(BookmarkerError::Io(e));
        }
    };

    let imported = manager.complete_import(ticket, &bytes);
    if let Some(count) = result.recover("Data import failed", imported)? {
        result.add_message(CmdMessage::success(format!(
            "Data imported successfully: {} pages",
            count
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::ManagerFixture;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn mime_detection() {
        assert_eq!(mime_for_path(Path::new("pages.JSON")), Some(JSON_MIME));
        assert_eq!(mime_for_path(Path::new("pages.txt")), None);
        assert_eq!(mime_for_path(Path::new("pages")), None);
    }

    #[test]
    fn imports_exported_file() {
        let dir = TempDir::new().unwrap();
        let mut source = ManagerFixture::new().with_pages(&["A", "B", "C"]);
        let path = write(&dir, "pages.json", &source.manager.export_all().unwrap());

        let mut fx = ManagerFixture::new().with_pages(&["Old"]);
        let result = run(&mut fx.manager, &path).unwrap();

        assert!(!result.has_errors());
        assert_eq!(result.messages[0].content, "Data imported successfully: 3 pages");
        assert_eq!(fx.titles(), vec!["C", "B", "A"]);
    }

    #[test]
    fn rejects_wrong_type_before_reading() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "pages.txt", b"[]");
        let mut fx = ManagerFixture::new().with_pages(&["Keep"]);

        let result = run(&mut fx.manager, &path).unwrap();
        assert!(result.has_errors());
        assert_eq!(fx.titles(), vec!["Keep"]);
    }

    #[test]
    fn malformed_file_leaves_collection_intact() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "pages.json",
            br#"[{"id": "not-a-uuid", "url": "u", "title": "t", "reminderText": "r", "saveDate": "2024-01-01T00:00:00Z"}]"#,
        );
        let mut fx = ManagerFixture::new().with_pages(&["Keep"]);

        let result = run(&mut fx.manager, &path).unwrap();
        assert!(result.has_errors());
        assert!(result.messages[0].content.starts_with("Data import failed"));
        assert_eq!(fx.titles(), vec!["Keep"]);
    }

    #[test]
    fn missing_file_is_reported_and_releases_slot() {
        let dir = TempDir::new().unwrap();
        let mut fx = ManagerFixture::new();

        let result = run(&mut fx.manager, &dir.path().join("nope.json")).unwrap();
        assert!(result.has_errors());
        assert!(fx.manager.begin_import().is_ok());
    }

    #[test]
    fn refuses_while_another_import_is_pending() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "pages.json", b"[]");
        let mut fx = ManagerFixture::new().with_pages(&["Keep"]);

        let pending = fx.manager.begin_import().unwrap();
        let result = run(&mut fx.manager, &path).unwrap();
        assert!(result.has_errors());
        assert_eq!(fx.titles(), vec!["Keep"]);
        fx.manager.abandon_import(pending);
    }
}
