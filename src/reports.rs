use crate::config::Config;
use crate::geo::to_geo_dataset;
use crate::percentile::{categorize_all, PercentileIndex};
use crate::ranking::{rank, top_n};
use crate::regions::display_name;
use crate::stats::compute_statistics;
use crate::types::{
    AllocationResult, AllocationTableRow, DashboardSnapshot, PolicyRow, PolicyStatus,
    PolicySummary, RegionShareRow,
};
use crate::util::{format_number, format_signed, percent_of, round_to, sum};
use crate::utilization::utilization;
use tracing::debug;

/// Detailed allocation table in rank order, with each region's change and
/// percentile bucket.
pub fn generate_allocation_table(result: &AllocationResult) -> Vec<AllocationTableRow> {
    let index = PercentileIndex::new(&result.final_values());
    rank(result)
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let v = &entry.values;
            let change_pct = if v.initial_mhz() != 0.0 {
                round_to(percent_of(v.change_mhz(), v.initial_mhz()), 1)
            } else {
                0.0
            };
            AllocationTableRow {
                rank: idx + 1,
                name: display_name(&entry.region_code).to_string(),
                initial: format!("{:.2}", v.initial_mhz()),
                final_value: format!("{:.2}", v.final_mhz()),
                change: format_signed(v.change_mhz(), 2),
                change_pct: format!("{}%", format_signed(change_pct, 1)),
                category: index.rank(v.final_mhz()).bucket.label().to_string(),
                code: entry.region_code,
            }
        })
        .collect()
}

/// Top `n` regions with their share of everything allocated.
pub fn generate_share_table(result: &AllocationResult, n: usize) -> Vec<RegionShareRow> {
    let total = sum(&result.final_values());
    top_n(result, n)
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| {
            let final_mhz = entry.values.final_mhz();
            RegionShareRow {
                rank: idx + 1,
                region: entry.region_code,
                final_value: format!("{:.2}", final_mhz),
                share_pct: format!("{:.1}%", round_to(percent_of(final_mhz, total), 1)),
            }
        })
        .collect()
}

/// Policy compliance table in source order. Absent policy fields render as
/// empty cells; unrecognized status tags are shown as sent.
pub fn generate_policy_table(result: &AllocationResult) -> Vec<PolicyRow> {
    result
        .iter()
        .map(|(code, v)| PolicyRow {
            region: code.to_string(),
            final_value: format!("{:.2}", v.final_mhz()),
            policy_cap: v.policy_cap.map(|c| format!("{:.2}", c)).unwrap_or_default(),
            status: v
                .policy_status
                .as_ref()
                .map(|s| s.as_str().to_string())
                .unwrap_or_default(),
            allocation_reason: v.allocation_reason.clone().unwrap_or_default(),
            policy_reason: v.policy_reason.clone().unwrap_or_default(),
        })
        .collect()
}

pub fn policy_summary(result: &AllocationResult) -> PolicySummary {
    let mut summary = PolicySummary::default();
    for (_, values) in result.iter() {
        match &values.policy_status {
            Some(PolicyStatus::Capped) => summary.capped += 1,
            Some(PolicyStatus::Compliant) => summary.compliant += 1,
            Some(PolicyStatus::Unrecognized(_)) | None => summary.unknown += 1,
        }
    }
    summary.compliance_percent = round_to(
        percent_of(summary.compliant as f64, result.len() as f64),
        1,
    );
    summary
}

/// Every derived structure for one allocation result, rebuilt from scratch.
pub fn build_snapshot(result: &AllocationResult, config: &Config) -> DashboardSnapshot {
    let geo_keys = config.geo_keys;
    let snapshot = DashboardSnapshot {
        generated_at: chrono::Utc::now(),
        total_capacity: config.total_capacity,
        statistics: compute_statistics(result),
        utilization: utilization(result, config.total_capacity),
        top_regions: top_n(result, config.top_n),
        categories: categorize_all(result),
        geo: to_geo_dataset(result).with_location_keys(|c| geo_keys.key(c)),
        policy: policy_summary(result),
    };
    debug!(
        regions = snapshot.statistics.count,
        allocated = snapshot.utilization.allocated,
        "built dashboard snapshot"
    );
    snapshot
}

/// One-line console summary of the utilization figures.
pub fn utilization_line(snapshot: &DashboardSnapshot) -> String {
    let u = &snapshot.utilization;
    format!(
        "Allocated {} MHz ({:.1}%), available {} MHz ({:.1}%) of {} MHz",
        format_number(u.allocated, 1),
        u.allocated_percent,
        format_number(u.available, 1),
        u.available_percent,
        format_number(snapshot.total_capacity, 0)
    )
}
