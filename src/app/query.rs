// UserSleuth - app/query.rs
//
// Query orchestration: load the store fresh, apply the filter, and absorb
// every domain error at this boundary. The caller only ever sees a record
// sequence (possibly empty) or a sink write failure.

use crate::core::model::{FilterKind, UserRecord};
use crate::core::{filter, loader};
use std::io::Write;
use std::path::Path;

/// Run one filter query against the backing store at `store`.
///
/// The store is reloaded on every call; there is no cache to invalidate.
/// Store and query errors are handled here: each is logged, printed to
/// `out` as a human-readable `Error:` line, and replaced by an empty
/// result. Only failures writing to `out` itself propagate. The exit
/// status therefore never distinguishes a handled failure from a query
/// that simply matched nothing.
pub fn run_query<W: Write>(
    store: &Path,
    kind: FilterKind,
    query: &str,
    mut out: W,
) -> std::io::Result<Vec<UserRecord>> {
    let records = match loader::load(store) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(store = %store.display(), error = %e, "Failed to load user store");
            writeln!(out, "Error: {e}")?;
            return Ok(Vec::new());
        }
    };

    match filter::apply_filter(&records, kind, query) {
        Ok(matches) => {
            tracing::debug!(
                kind = %kind,
                matched = matches.len(),
                total = records.len(),
                "Filter applied"
            );
            Ok(matches)
        }
        Err(e) => {
            tracing::warn!(kind = %kind, error = %e, "Invalid filter query");
            writeln!(out, "Error: {e}")?;
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store_with(content: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn test_successful_query_emits_no_diagnostics() {
        let (_dir, path) = store_with(r#"[{"name":"Ann","age":30}]"#);
        let mut buf = Vec::new();
        let result = run_query(&path, FilterKind::Name, "ann", &mut buf).unwrap();
        assert_eq!(result.len(), 1);
        assert!(buf.is_empty(), "no diagnostics expected on success");
    }

    #[test]
    fn test_missing_store_yields_empty_result_and_diagnostic() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("users.json");
        for kind in FilterKind::all() {
            let mut buf = Vec::new();
            let result = run_query(&path, *kind, "x", &mut buf).unwrap();
            assert!(result.is_empty());
            let output = String::from_utf8(buf).unwrap();
            assert!(
                output.starts_with("Error:") && output.contains("not found"),
                "unexpected diagnostic for {kind}: {output}"
            );
        }
    }

    #[test]
    fn test_invalid_age_query_yields_empty_result_and_diagnostic() {
        let (_dir, path) = store_with(r#"[{"name":"Bo","age":40}]"#);
        let mut buf = Vec::new();
        let result = run_query(&path, FilterKind::Age, "abc", &mut buf).unwrap();
        assert!(result.is_empty());
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("valid age"), "unexpected diagnostic: {output}");
    }
}
