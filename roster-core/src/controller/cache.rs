//! Identifier-based cache reconciliation.
//!
//! Records are always matched by [`Record::id`], never by position.

use roster_model::{Record, RecordId};

/// Append a freshly created record.
pub fn append<R: Record>(cache: &mut Vec<R>, created: R) {
    cache.push(created);
}

/// Replace the entry carrying `id` with the server's post-update record.
///
/// Returns `false` when no entry matched; the cache is then left untouched.
pub fn replace<R: Record>(cache: &mut [R], id: &RecordId, updated: R) -> bool {
    match cache.iter_mut().find(|record| record.id() == id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Drop every entry carrying `id`; other entries keep their relative order.
pub fn remove<R: Record>(cache: &mut Vec<R>, id: &RecordId) -> usize {
    let before = cache.len();
    cache.retain(|record| record.id() != id);
    before - cache.len()
}

pub fn find<'a, R: Record>(cache: &'a [R], id: &RecordId) -> Option<&'a R> {
    cache.iter().find(|record| record.id() == id)
}
