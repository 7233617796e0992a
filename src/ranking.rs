use crate::types::{AllocationResult, RankedEntry, RankedList};
use std::cmp::Ordering;

/// All regions sorted by final allocation, highest first.
///
/// The sort is stable: regions with equal final values keep their source
/// order. `-0.0` and `0.0` compare equal.
pub fn rank(result: &AllocationResult) -> RankedList {
    let mut ranked: RankedList = result
        .iter()
        .map(|(code, values)| RankedEntry {
            region_code: code.to_string(),
            values: values.clone(),
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.values
            .final_mhz()
            .partial_cmp(&a.values.final_mhz())
            .unwrap_or(Ordering::Equal)
    });
    ranked
}

/// The first `n` entries of [`rank`], or all of them when `n` exceeds the
/// region count.
pub fn top_n(result: &AllocationResult, n: usize) -> RankedList {
    let mut ranked = rank(result);
    ranked.truncate(n);
    ranked
}
