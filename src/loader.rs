use crate::error::{ReportError, Result};
use crate::types::AllocationResult;
use std::path::Path;
use tracing::{debug, info, warn};

/// What the loader had to paper over while reading a result.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub regions: usize,
    /// `initial`/`final`/`change` fields that were null or absent and will
    /// read as 0.
    pub missing_numeric_fields: usize,
    /// Policy cap, status or reason fields that will render as empty.
    pub missing_policy_fields: usize,
}

impl LoadReport {
    fn for_result(result: &AllocationResult) -> Self {
        let mut report = LoadReport {
            regions: result.len(),
            ..Default::default()
        };
        for (_, values) in result.iter() {
            report.missing_numeric_fields += values.missing_numeric_fields();
            report.missing_policy_fields += values.missing_policy_fields();
        }
        report
    }
}

/// Parse an allocation service response held in memory.
///
/// Missing fields are accepted and only counted; a region whose value is
/// not an object fails the whole document.
pub fn parse_allocation(json: &str) -> Result<(AllocationResult, LoadReport)> {
    let result: AllocationResult = serde_json::from_str(json)?;
    let report = LoadReport::for_result(&result);
    if report.missing_numeric_fields > 0 {
        warn!(
            missing = report.missing_numeric_fields,
            "numeric fields absent from allocation result, reading them as 0"
        );
    }
    debug!(
        regions = report.regions,
        missing_policy = report.missing_policy_fields,
        "parsed allocation result"
    );
    Ok((result, report))
}

pub fn load_allocation(path: impl AsRef<Path>) -> Result<(AllocationResult, LoadReport)> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|e| ReportError::io(path, e))?;
    let loaded = parse_allocation(&json)?;
    info!(path = %path.display(), regions = loaded.1.regions, "loaded allocation result");
    Ok(loaded)
}
