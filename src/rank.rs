//! Ordering of collected records.

use crate::record::FileRecord;
use std::cmp::Reverse;

/// Sorts records in place, largest first.
pub fn rank(records: &mut [FileRecord]) {
    records.sort_by_key(|record| Reverse(record.size));
}

/// The first `n` records, clamped to `0..=records.len()`. A negative `n`
/// selects nothing.
pub fn top(records: &[FileRecord], n: i64) -> &[FileRecord] {
    let wanted = usize::try_from(n).unwrap_or(0);

    if wanted > records.len() {
        log::debug!(
            "Requested top {} but only {} files were found",
            n,
            records.len()
        );
    }

    &records[..wanted.min(records.len())]
}
