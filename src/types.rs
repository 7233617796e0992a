use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tabled::Tabled;

/// Compliance tag attached to a region by the allocation service.
///
/// Travels as a bare string on the wire. Tags this crate does not know
/// about are kept verbatim so they can still be displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyStatus {
    Capped,
    Compliant,
    Unrecognized(String),
}

impl PolicyStatus {
    pub fn as_str(&self) -> &str {
        match self {
            PolicyStatus::Capped => "CAPPED",
            PolicyStatus::Compliant => "COMPLIANT",
            PolicyStatus::Unrecognized(tag) => tag,
        }
    }
}

impl From<String> for PolicyStatus {
    fn from(tag: String) -> Self {
        match tag.as_str() {
            "CAPPED" => PolicyStatus::Capped,
            "COMPLIANT" => PolicyStatus::Compliant,
            _ => PolicyStatus::Unrecognized(tag),
        }
    }
}

impl Serialize for PolicyStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PolicyStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer).map(PolicyStatus::from)
    }
}

/// One region's value bundle as produced by the allocation service.
///
/// Every field is optional on the wire. `null` and an absent key are
/// indistinguishable here; numeric fields read through the `*_mhz`
/// accessors default to 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegionValues {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<f64>,
    #[serde(rename = "final", skip_serializing_if = "Option::is_none")]
    pub final_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_cap: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_status: Option<PolicyStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allocation_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_reason: Option<String>,
}

impl RegionValues {
    /// Shorthand for a bundle that only carries a final allocation.
    pub fn with_final(final_value: f64) -> Self {
        Self {
            final_value: Some(final_value),
            ..Default::default()
        }
    }

    pub fn initial_mhz(&self) -> f64 {
        self.initial.unwrap_or(0.0)
    }

    pub fn final_mhz(&self) -> f64 {
        self.final_value.unwrap_or(0.0)
    }

    pub fn change_mhz(&self) -> f64 {
        self.change.unwrap_or(0.0)
    }

    /// Number of numeric fields that will be read as the silent 0 default.
    pub fn missing_numeric_fields(&self) -> usize {
        [self.initial, self.final_value, self.change]
            .iter()
            .filter(|v| v.is_none())
            .count()
    }

    /// Number of policy/display fields that will render as empty.
    pub fn missing_policy_fields(&self) -> usize {
        let mut missing = 0;
        if self.policy_cap.is_none() {
            missing += 1;
        }
        if self.policy_status.is_none() {
            missing += 1;
        }
        if self.allocation_reason.is_none() {
            missing += 1;
        }
        if self.policy_reason.is_none() {
            missing += 1;
        }
        missing
    }
}

/// Raw allocation snapshot: region code -> value bundle, in source order.
///
/// Keys are unique. Iteration order is the order the source emitted them
/// and is the default (unsorted) table order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AllocationResult {
    regions: Vec<(String, RegionValues)>,
}

impl AllocationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            regions: Vec::with_capacity(capacity),
        }
    }

    /// Insert a region. A code that is already present keeps its position
    /// and has its values replaced.
    pub fn insert(&mut self, code: impl Into<String>, values: RegionValues) {
        let code = code.into();
        match self.regions.iter_mut().find(|(c, _)| *c == code) {
            Some((_, existing)) => *existing = values,
            None => self.regions.push((code, values)),
        }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, code: &str) -> Option<&RegionValues> {
        self.regions
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RegionValues)> + '_ {
        self.regions.iter().map(|(c, v)| (c.as_str(), v))
    }

    /// Final allocations in source order, missing values read as 0.
    pub fn final_values(&self) -> Vec<f64> {
        self.regions.iter().map(|(_, v)| v.final_mhz()).collect()
    }
}

impl<K: Into<String>> FromIterator<(K, RegionValues)> for AllocationResult {
    fn from_iter<I: IntoIterator<Item = (K, RegionValues)>>(iter: I) -> Self {
        let mut result = AllocationResult::new();
        for (code, values) in iter {
            result.insert(code, values);
        }
        result
    }
}

impl Serialize for AllocationResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.regions.len()))?;
        for (code, values) in &self.regions {
            map.serialize_entry(code, values)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for AllocationResult {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ResultVisitor;

        impl<'de> Visitor<'de> for ResultVisitor {
            type Value = AllocationResult;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object keyed by region code")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut result = AllocationResult::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((code, values)) = map.next_entry::<String, RegionValues>()? {
                    result.insert(code, values);
                }
                Ok(result)
            }
        }

        deserializer.deserialize_map(ResultVisitor)
    }
}

/// A region paired with one of its values.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionValue {
    pub region: String,
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Statistics {
    pub count: usize,
    pub average: f64,
    /// `None` only when the result is empty.
    pub highest: Option<RegionValue>,
    pub lowest: Option<RegionValue>,
}

/// Percentile bucket, ordered from lowest to highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Bucket {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl Bucket {
    /// Every bucket, highest first, in legend order.
    pub const LEGEND: [Bucket; 5] = [
        Bucket::VeryHigh,
        Bucket::High,
        Bucket::Medium,
        Bucket::Low,
        Bucket::VeryLow,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::VeryLow => "Very Low",
            Bucket::Low => "Low",
            Bucket::Medium => "Medium",
            Bucket::High => "High",
            Bucket::VeryHigh => "Very High",
        }
    }

    /// Legend range shown next to the bucket on the map.
    pub fn range_label(&self) -> &'static str {
        match self {
            Bucket::VeryLow => "0-20%",
            Bucket::Low => "20-40%",
            Bucket::Medium => "40-60%",
            Bucket::High => "60-80%",
            Bucket::VeryHigh => "80-100%",
        }
    }
}

/// Percentile and bucket for a single value, without the region attached.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PercentileRank {
    pub percentile: f64,
    pub bucket: Bucket,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAssignment {
    pub region_code: String,
    pub percentile: f64,
    pub bucket: Bucket,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub region_code: String,
    pub values: RegionValues,
}

/// Regions sorted descending by final allocation.
pub type RankedList = Vec<RankedEntry>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UtilizationBreakdown {
    pub allocated: f64,
    /// Negative when the regions are over-allocated.
    pub available: f64,
    pub allocated_percent: f64,
    pub available_percent: f64,
}

/// Index-aligned choropleth input: position `i` of each array is one region.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoDataset {
    pub locations: Vec<String>,
    pub values: Vec<f64>,
    pub hover_text: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySummary {
    pub capped: usize,
    pub compliant: usize,
    pub unknown: usize,
    pub compliance_percent: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub total_capacity: f64,
    pub statistics: Statistics,
    pub utilization: UtilizationBreakdown,
    pub top_regions: RankedList,
    pub categories: Vec<CategoryAssignment>,
    pub geo: GeoDataset,
    pub policy: PolicySummary,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct AllocationTableRow {
    #[serde(rename = "Rank")]
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Code")]
    #[tabled(rename = "Code")]
    pub code: String,
    #[serde(rename = "Name")]
    #[tabled(rename = "Name")]
    pub name: String,
    #[serde(rename = "InitialMHz")]
    #[tabled(rename = "InitialMHz")]
    pub initial: String,
    #[serde(rename = "FinalMHz")]
    #[tabled(rename = "FinalMHz")]
    pub final_value: String,
    #[serde(rename = "ChangeMHz")]
    #[tabled(rename = "ChangeMHz")]
    pub change: String,
    #[serde(rename = "ChangePct")]
    #[tabled(rename = "ChangePct")]
    pub change_pct: String,
    #[serde(rename = "Category")]
    #[tabled(rename = "Category")]
    pub category: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct RegionShareRow {
    #[serde(rename = "Rank")]
    #[tabled(rename = "Rank")]
    pub rank: usize,
    #[serde(rename = "Region")]
    #[tabled(rename = "Region")]
    pub region: String,
    #[serde(rename = "FinalMHz")]
    #[tabled(rename = "FinalMHz")]
    pub final_value: String,
    #[serde(rename = "SharePct")]
    #[tabled(rename = "SharePct")]
    pub share_pct: String,
}

#[derive(Debug, Serialize, Tabled, Clone)]
pub struct PolicyRow {
    #[serde(rename = "Region")]
    #[tabled(rename = "Region")]
    pub region: String,
    #[serde(rename = "FinalMHz")]
    #[tabled(rename = "FinalMHz")]
    pub final_value: String,
    #[serde(rename = "PolicyCap")]
    #[tabled(rename = "PolicyCap")]
    pub policy_cap: String,
    #[serde(rename = "Status")]
    #[tabled(rename = "Status")]
    pub status: String,
    #[serde(rename = "AllocationReason")]
    #[tabled(rename = "AllocationReason")]
    pub allocation_reason: String,
    #[serde(rename = "PolicyReason")]
    #[tabled(rename = "PolicyReason")]
    pub policy_reason: String,
}
