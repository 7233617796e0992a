use approx::assert_abs_diff_eq;
use proptest::prelude::*;
use spectrum_report::{
    categorize, categorize_all, compute_statistics, parse_allocation, rank, to_geo_dataset,
    top_n, utilization, AllocationResult, Bucket, RegionValues,
};

fn finals(values: &[(&str, f64)]) -> AllocationResult {
    values
        .iter()
        .map(|(c, v)| (*c, RegionValues::with_final(*v)))
        .collect()
}

fn seven_regions() -> AllocationResult {
    finals(&[
        ("AP", 90.0),
        ("BR", 45.5),
        ("DL", 40.0),
        ("GJ", 110.0),
        ("KA", 90.0),
        ("MH", 120.0),
        ("WB", 12.25),
    ])
}

#[test]
fn empty_result_statistics() {
    let stats = compute_statistics(&AllocationResult::new());
    assert_eq!(stats.count, 0);
    assert_eq!(stats.average, 0.0);
    assert!(stats.highest.is_none());
    assert!(stats.lowest.is_none());
}

#[test]
fn top_five_of_seven_is_prefix_of_rank() {
    let result = seven_regions();
    let ranked = rank(&result);
    let top = top_n(&result, 5);
    assert_eq!(top.len(), 5);
    assert_eq!(top, ranked[..5].to_vec());
    let codes: Vec<&str> = top.iter().map(|e| e.region_code.as_str()).collect();
    assert_eq!(codes, vec!["MH", "GJ", "AP", "KA", "BR"]);
}

#[test]
fn single_value_is_very_low() {
    assert_eq!(categorize(0.0, &[0.0]).bucket, Bucket::VeryLow);
    assert_eq!(categorize(1e6, &[1e6]).bucket, Bucket::VeryLow);
}

#[test]
fn over_allocation_breakdown() {
    let u = utilization(&finals(&[("A", 500.0), ("B", 800.0)]), 1200.0);
    assert_eq!(u.allocated, 1300.0);
    assert_eq!(u.available, -100.0);
    assert_eq!(u.allocated_percent, 108.3);
}

#[test]
fn geo_dataset_keeps_insertion_order() {
    let geo = to_geo_dataset(&finals(&[("DL", 40.0), ("MH", 120.0)]));
    assert_eq!(geo.locations, vec!["DL", "MH"]);
    assert_eq!(geo.values, vec![40.0, 120.0]);
}

#[test]
fn average_round_trips_through_allocated() {
    let result = seven_regions();
    let stats = compute_statistics(&result);
    let u = utilization(&result, 1200.0);
    assert_abs_diff_eq!(u.allocated / stats.count as f64, stats.average, epsilon = 1e-9);
}

#[test]
fn wire_document_end_to_end() {
    let json = r#"{
        "UP": {"initial": 80.0, "final": 96.5, "change": 16.5, "policy_cap": 100.0,
               "policy_status": "COMPLIANT", "allocation_reason": "high demand",
               "policy_reason": "within regional cap"},
        "SK": {"initial": 20.0, "change": -20.0, "policy_status": "CAPPED"},
        "TN": {"initial": 60.0, "final": 72.0, "change": 12.0}
    }"#;
    let (result, report) = parse_allocation(json).unwrap();
    assert_eq!(report.regions, 3);
    assert_eq!(report.missing_numeric_fields, 1);

    let stats = compute_statistics(&result);
    assert_eq!(stats.highest.as_ref().unwrap().region, "UP");
    assert_eq!(stats.lowest.as_ref().unwrap().region, "SK");
    assert_abs_diff_eq!(stats.average, (96.5 + 72.0) / 3.0, epsilon = 1e-9);

    let geo = to_geo_dataset(&result);
    assert_eq!(geo.locations, vec!["UP", "SK", "TN"]);
    assert_eq!(geo.values, vec![96.5, 0.0, 72.0]);
    assert!(geo.hover_text[1].contains("Final: 0.00 MHz"));

    let buckets: Vec<Bucket> = categorize_all(&result).into_iter().map(|c| c.bucket).collect();
    assert_eq!(buckets, vec![Bucket::High, Bucket::VeryLow, Bucket::Low]);
}

fn arb_result() -> impl Strategy<Value = AllocationResult> {
    prop::collection::vec(prop::option::of(0.0..2000.0f64), 0..40).prop_map(|finals| {
        finals
            .into_iter()
            .enumerate()
            .map(|(i, f)| {
                (
                    format!("R{}", i),
                    RegionValues {
                        final_value: f,
                        ..Default::default()
                    },
                )
            })
            .collect::<AllocationResult>()
    })
}

proptest! {
    #[test]
    fn prop_rank_is_a_non_increasing_permutation(result in arb_result()) {
        let ranked = rank(&result);
        prop_assert_eq!(ranked.len(), result.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].values.final_mhz() >= pair[1].values.final_mhz());
        }
    }

    #[test]
    fn prop_top_n_is_prefix(result in arb_result(), n in 0usize..50) {
        let ranked = rank(&result);
        let top = top_n(&result, n);
        prop_assert_eq!(top.len(), n.min(result.len()));
        prop_assert_eq!(&top[..], &ranked[..top.len()]);
    }

    #[test]
    fn prop_buckets_are_monotonic_in_value(result in arb_result()) {
        let assignments = categorize_all(&result);
        let values = result.final_values();
        for (i, a) in assignments.iter().enumerate() {
            for (j, b) in assignments.iter().enumerate() {
                if values[i] < values[j] {
                    prop_assert!(a.bucket <= b.bucket);
                    prop_assert!(a.percentile < b.percentile);
                }
                if values[i] == values[j] {
                    prop_assert_eq!(a.bucket, b.bucket);
                }
            }
        }
    }

    #[test]
    fn prop_utilization_is_consistent(result in arb_result(), capacity in 1.0..5000.0f64) {
        let u = utilization(&result, capacity);
        prop_assert!((u.allocated + u.available - capacity).abs() < 1e-6);
        prop_assert!(u.allocated_percent.is_finite());
        prop_assert!(u.available_percent.is_finite());
    }

    #[test]
    fn prop_geo_arrays_are_aligned(result in arb_result()) {
        let geo = to_geo_dataset(&result);
        prop_assert_eq!(geo.locations.len(), result.len());
        prop_assert_eq!(geo.values.len(), result.len());
        prop_assert_eq!(geo.hover_text.len(), result.len());
        for (i, (code, values)) in result.iter().enumerate() {
            prop_assert_eq!(geo.locations[i].as_str(), code);
            prop_assert_eq!(geo.values[i], values.final_mhz());
            prop_assert!(geo.hover_text[i].starts_with(code));
        }
    }
}
