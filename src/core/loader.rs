// UserSleuth - core/loader.rs
//
// Backing store loading: one whole-file read per query, parsed as a JSON
// array of user objects. No caching — every query sees the file as it is
// on disk at that moment.

use crate::core::model::UserRecord;
use crate::util::constants;
use crate::util::error::StoreError;
use std::fs;
use std::io;
use std::path::Path;

/// Load the entire backing store into an ordered record collection.
///
/// Record order in the returned Vec matches the order in the file; filters
/// preserve it, so display order is always store order.
pub fn load(path: &Path) -> Result<Vec<UserRecord>, StoreError> {
    let metadata = fs::metadata(path).map_err(|e| io_to_store_error(path, e))?;
    if metadata.len() > constants::MAX_STORE_FILE_SIZE {
        return Err(StoreError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size: constants::MAX_STORE_FILE_SIZE,
        });
    }

    let content = fs::read_to_string(path).map_err(|e| io_to_store_error(path, e))?;

    let records: Vec<UserRecord> =
        serde_json::from_str(&content).map_err(|e| StoreError::Format {
            path: path.to_path_buf(),
            source: e,
        })?;

    tracing::debug!(
        store = %path.display(),
        records = records.len(),
        "User store loaded"
    );

    Ok(records)
}

/// Map a filesystem error to the store taxonomy, keeping NotFound distinct.
fn io_to_store_error(path: &Path, source: io::Error) -> StoreError {
    if source.kind() == io::ErrorKind::NotFound {
        StoreError::NotFound {
            path: path.to_path_buf(),
        }
    } else {
        StoreError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn store_with(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        (dir, path)
    }

    #[test]
    fn test_load_preserves_store_order() {
        let (_dir, path) = store_with(r#"[{"name":"Ann"},{"name":"Bo"},{"name":"Cy"}]"#);
        let records = load(&path).unwrap();
        let names: Vec<_> = records.iter().map(|r| r.name().unwrap()).collect();
        assert_eq!(names, vec!["Ann", "Bo", "Cy"]);
    }

    #[test]
    fn test_load_empty_store() {
        let (_dir, path) = store_with("[]");
        assert!(load(&path).unwrap().is_empty());
    }

    #[test]
    fn test_load_missing_store_returns_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        let result = load(&path);
        assert!(
            matches!(result, Err(StoreError::NotFound { .. })),
            "expected NotFound, got {result:?}"
        );
    }

    #[test]
    fn test_load_invalid_json_returns_format_error() {
        let (_dir, path) = store_with("{not json");
        let result = load(&path);
        assert!(
            matches!(result, Err(StoreError::Format { .. })),
            "expected Format, got {result:?}"
        );
    }

    #[test]
    fn test_load_non_array_returns_format_error() {
        let (_dir, path) = store_with(r#"{"name":"Ann"}"#);
        let result = load(&path);
        assert!(
            matches!(result, Err(StoreError::Format { .. })),
            "expected Format, got {result:?}"
        );
    }
}
