//! Derived analytics for a per-region spectrum allocation result.
//!
//! The allocation service hands back one value bundle per region. This
//! crate turns that snapshot into the aggregates, rankings, percentile
//! buckets, utilization figures and choropleth arrays a dashboard shows.
//! Every analytics function is pure and rebuilds its output from the input
//! alone, so results can be computed concurrently for different snapshots.
pub mod config;
pub mod error;
pub mod geo;
pub mod loader;
pub mod output;
pub mod percentile;
pub mod ranking;
pub mod regions;
pub mod reports;
pub mod stats;
pub mod types;
pub mod util;
pub mod utilization;

pub use config::{Config, GeoKeys};
pub use error::{ReportError, Result};
pub use geo::to_geo_dataset;
pub use loader::{load_allocation, parse_allocation, LoadReport};
pub use percentile::{categorize, categorize_all, PercentileIndex};
pub use ranking::{rank, top_n};
pub use stats::compute_statistics;
pub use types::{
    AllocationResult, Bucket, CategoryAssignment, GeoDataset, PolicyStatus, RankedEntry,
    RankedList, RegionValues, Statistics, UtilizationBreakdown,
};
pub use utilization::{utilization, DEFAULT_TOTAL_CAPACITY};
