// UserSleuth - core/present.rs
//
// Rendering of query results. Core layer: writes to any Write trait
// object, so tests and alternative front-ends can capture output.

use crate::core::model::UserRecord;
use std::io::Write;

/// Notice printed when a query matches nothing.
pub const NO_USERS_NOTICE: &str = "No users found matching the criteria.";

/// Render the result sequence to `out`, one record per line in sequence
/// order. An empty sequence produces the single no-users notice instead.
pub fn present<W: Write>(records: &[UserRecord], mut out: W) -> std::io::Result<()> {
    if records.is_empty() {
        writeln!(out, "{NO_USERS_NOTICE}")?;
        return Ok(());
    }

    for record in records {
        writeln!(out, "{record}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(value: serde_json::Value) -> Vec<UserRecord> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_empty_sequence_prints_notice() {
        let mut buf = Vec::new();
        present(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), format!("{NO_USERS_NOTICE}\n"));
    }

    #[test]
    fn test_one_line_per_record_in_order() {
        let users = records(json!([{"name": "Ann", "age": 30}, {"name": "Bo"}]));
        let mut buf = Vec::new();
        present(&users, &mut buf).unwrap();

        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Ann"));
        assert!(lines[1].contains("Bo"));
    }
}
