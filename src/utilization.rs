use crate::types::{AllocationResult, UtilizationBreakdown};
use crate::util::{percent_of, round_to, sum};

/// Capacity of the reference deployment, in MHz.
pub const DEFAULT_TOTAL_CAPACITY: f64 = 1200.0;

/// Allocated and available spectrum against `total_capacity`.
///
/// `available` is not clamped: a negative value means the regions were
/// allocated more than the band holds. Percentages are rounded to one
/// decimal and are 0 when the capacity is 0.
pub fn utilization(result: &AllocationResult, total_capacity: f64) -> UtilizationBreakdown {
    let allocated = sum(&result.final_values());
    let available = total_capacity - allocated;
    UtilizationBreakdown {
        allocated,
        available,
        allocated_percent: round_to(percent_of(allocated, total_capacity), 1),
        available_percent: round_to(percent_of(available, total_capacity), 1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RegionValues;

    fn sample(values: &[(&str, f64)]) -> AllocationResult {
        values
            .iter()
            .map(|(c, v)| (*c, RegionValues::with_final(*v)))
            .collect()
    }

    #[test]
    fn over_allocation_is_preserved() {
        let u = utilization(&sample(&[("A", 500.0), ("B", 800.0)]), 1200.0);
        assert_eq!(u.allocated, 1300.0);
        assert_eq!(u.available, -100.0);
        assert_eq!(u.allocated_percent, 108.3);
        assert_eq!(u.available_percent, -8.3);
    }

    #[test]
    fn partial_allocation() {
        let u = utilization(&sample(&[("A", 300.0)]), DEFAULT_TOTAL_CAPACITY);
        assert_eq!(u.available, 900.0);
        assert_eq!(u.allocated_percent, 25.0);
        assert_eq!(u.available_percent, 75.0);
    }

    #[test]
    fn zero_capacity_yields_zero_percent() {
        let u = utilization(&sample(&[("A", 10.0)]), 0.0);
        assert_eq!(u.allocated, 10.0);
        assert_eq!(u.available, -10.0);
        assert_eq!(u.allocated_percent, 0.0);
        assert_eq!(u.available_percent, 0.0);
    }

    #[test]
    fn empty_result_is_fully_available() {
        let u = utilization(&AllocationResult::new(), 1200.0);
        assert_eq!(u.allocated, 0.0);
        assert_eq!(u.available, 1200.0);
        assert_eq!(u.available_percent, 100.0);
    }
}
