use crate::ranking::rank;
use crate::types::{AllocationResult, RegionValue, Statistics};
use crate::util::average;

/// Global aggregates over the final allocations.
///
/// `highest` and `lowest` are the first and last entries of the stable
/// descending ranking, so among equal maxima the earliest source region
/// wins and among equal minima the latest one does.
pub fn compute_statistics(result: &AllocationResult) -> Statistics {
    let ranked = rank(result);
    let extreme = |i: usize| {
        ranked.get(i).map(|e| RegionValue {
            region: e.region_code.clone(),
            value: e.values.final_mhz(),
        })
    };
    Statistics {
        count: result.len(),
        average: average(&result.final_values()),
        highest: extreme(0),
        lowest: ranked.len().checked_sub(1).and_then(extreme),
    }
}
