// UserSleuth - core/filter.rs
//
// Filter engine for user records. One predicate per filter kind, applied
// as a single linear scan. Core layer: pure logic, no I/O.

use crate::core::model::{FilterKind, UserRecord};
use crate::util::error::QueryError;

/// Apply the predicate for `kind` to every record, returning the matches
/// in store order. No deduplication.
///
/// Only the age kind can fail, and only on the query value itself: a
/// non-integer query is a `QueryError::InvalidAge` before any record is
/// examined.
pub fn apply_filter(
    records: &[UserRecord],
    kind: FilterKind,
    query: &str,
) -> Result<Vec<UserRecord>, QueryError> {
    match kind {
        FilterKind::Name => Ok(filter_by_text(records, query, UserRecord::name)),
        FilterKind::Email => Ok(filter_by_text(records, query, UserRecord::email)),
        FilterKind::Age => filter_by_age(records, query),
    }
}

/// Case-insensitive exact match over a string field.
///
/// A missing (or non-string) field reads as the empty string, so it never
/// matches a non-empty query but does match an empty one.
fn filter_by_text(
    records: &[UserRecord],
    query: &str,
    field: fn(&UserRecord) -> Option<&str>,
) -> Vec<UserRecord> {
    let query_lower = query.to_lowercase();
    records
        .iter()
        .filter(|r| field(r).unwrap_or("").to_lowercase() == query_lower)
        .cloned()
        .collect()
}

/// Integer equality over the `age` field.
///
/// Records without an integer age never match any query.
fn filter_by_age(records: &[UserRecord], query: &str) -> Result<Vec<UserRecord>, QueryError> {
    let age: i64 = query
        .trim()
        .parse()
        .map_err(|_| QueryError::InvalidAge {
            input: query.to_string(),
        })?;

    Ok(records
        .iter()
        .filter(|r| r.age() == Some(age))
        .cloned()
        .collect())
}
