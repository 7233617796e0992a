//! Percentile buckets for the choropleth legend and the allocation table.
//!
//! A value's percentile is `index / len * 100`, where `index` is the
//! position of the first occurrence of the value in the ascending sort of
//! all values. Duplicates therefore share a percentile and a bucket, which
//! keeps the assignment deterministic regardless of source order.
//!
//! A value that does not occur in the collection has no index and lands
//! below every threshold (`VeryLow`). An empty collection yields
//! percentile 0.

use crate::types::{AllocationResult, Bucket, CategoryAssignment, PercentileRank};

/// Bucket lower bounds, evaluated from the top down.
const THRESHOLDS: [(f64, Bucket); 4] = [
    (80.0, Bucket::VeryHigh),
    (60.0, Bucket::High),
    (40.0, Bucket::Medium),
    (20.0, Bucket::Low),
];

pub fn bucket_for(percentile: f64) -> Bucket {
    THRESHOLDS
        .iter()
        .find(|(min, _)| percentile >= *min)
        .map(|(_, bucket)| *bucket)
        .unwrap_or(Bucket::VeryLow)
}

/// Sorted view of a value collection, built once and queried per region.
#[derive(Debug, Clone)]
pub struct PercentileIndex {
    sorted: Vec<f64>,
}

impl PercentileIndex {
    pub fn new(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));
        Self { sorted }
    }

    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn percentile(&self, value: f64) -> f64 {
        if self.sorted.is_empty() {
            return 0.0;
        }
        // Count of strictly smaller values is the index of the first match.
        let first = self.sorted.partition_point(|v| *v < value);
        let found = self.sorted.get(first).is_some_and(|v| *v == value);
        if !found {
            return -100.0 / self.sorted.len() as f64;
        }
        (first as f64 / self.sorted.len() as f64) * 100.0
    }

    pub fn rank(&self, value: f64) -> PercentileRank {
        let percentile = self.percentile(value);
        PercentileRank {
            percentile,
            bucket: bucket_for(percentile),
        }
    }
}

/// Percentile and bucket of `value` among `all_values`.
///
/// Sorts on every call; use [`PercentileIndex`] or [`categorize_all`] when
/// ranking many regions against the same collection.
pub fn categorize(value: f64, all_values: &[f64]) -> PercentileRank {
    PercentileIndex::new(all_values).rank(value)
}

/// Bucket assignment for every region, in source order, using a single
/// sort of the final allocations.
pub fn categorize_all(result: &AllocationResult) -> Vec<CategoryAssignment> {
    let index = PercentileIndex::new(&result.final_values());
    result
        .iter()
        .map(|(code, values)| {
            let PercentileRank { percentile, bucket } = index.rank(values.final_mhz());
            CategoryAssignment {
                region_code: code.to_string(),
                percentile,
                bucket,
            }
        })
        .collect()
}
