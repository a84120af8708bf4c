//! Name filter: case-folded substring matching over the source collection.
//!
//! The filtered collection is always rebuilt from scratch by [`recompute`];
//! nothing here keeps state between calls.

use crate::types::UserRecord;

/// Case-fold raw input the way both search boxes store it.
pub fn normalize_input(raw: &str) -> String {
    raw.to_lowercase()
}

/// True if `record`'s lower-cased name contains `search`.
///
/// `search` is expected to be normalized already. A record without a textual
/// name is matched as if its name were empty, so it only survives the empty search.
pub fn matches(record: &UserRecord, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    match record.name() {
        Some(name) => name.to_lowercase().contains(search),
        None => false,
    }
}

/// Derive the filtered collection from `(source, search)`, preserving source order.
pub fn recompute(source: &[UserRecord], search: &str) -> Vec<UserRecord> {
    source.iter().filter(|r| matches(r, search)).cloned().collect()
}
