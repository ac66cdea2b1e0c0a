use crate::analysis::{percentile, round2};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn median_of_even_sample_interpolates() {
    let samples = [10.0, 20.0, 30.0, 40.0];

    let result = percentile(&samples, 50.0);

    assert_eq!(result, Some(25.0));
}

#[test]
fn exact_rank_returns_sample() {
    let samples = [1.0, 2.0, 3.0, 4.0, 5.0];

    assert_eq!(percentile(&samples, 50.0), Some(3.0));
    assert_eq!(percentile(&samples, 25.0), Some(2.0));
}

#[test]
fn high_percentiles_interpolate_between_bracketing_samples() {
    let samples = [10.0, 20.0, 30.0, 40.0];

    // k = 3 * 0.95 = 2.85
    assert_close(percentile(&samples, 95.0).unwrap(), 38.5);
    // k = 3 * 0.99 = 2.97
    assert_close(percentile(&samples, 99.0).unwrap(), 39.7);
}

#[test]
fn bounds_return_min_and_max() {
    let samples = [3.0, 7.0, 9.0];

    assert_eq!(percentile(&samples, 0.0), Some(3.0));
    assert_eq!(percentile(&samples, 100.0), Some(9.0));
}

#[test]
fn out_of_range_percentile_is_clamped() {
    let samples = [3.0, 7.0, 9.0];

    assert_eq!(percentile(&samples, -5.0), Some(3.0));
    assert_eq!(percentile(&samples, 250.0), Some(9.0));
}

#[test]
fn single_sample_is_every_percentile() {
    let samples = [42.0];

    for pct in [0.0, 50.0, 95.0, 99.0, 100.0] {
        assert_eq!(percentile(&samples, pct), Some(42.0));
    }
}

#[test]
fn empty_samples_have_no_percentile() {
    assert_eq!(percentile(&[], 50.0), None);
}

#[test]
fn duplicates_do_not_disturb_interpolation() {
    let samples = [5.0, 5.0, 5.0, 10.0];

    // k = 1.5 between two equal samples
    assert_eq!(percentile(&samples, 50.0), Some(5.0));
}

#[test]
fn round2_rounds_to_two_decimals() {
    assert_eq!(round2(33.333333), 33.33);
    assert_eq!(round2(66.666666), 66.67);
    assert_eq!(round2(12.0), 12.0);
    assert_eq!(round2(0.0), 0.0);
}

#[test]
fn round2_breaks_exact_ties_to_even() {
    assert_eq!(round2(0.125), 0.12);
    assert_eq!(round2(0.375), 0.38);
    assert_eq!(round2(-0.125), -0.12);
}

#[test]
fn round2_leaves_values_too_large_to_scale() {
    assert_eq!(round2(1e308), 1e308);
    assert_eq!(round2(f64::MAX), f64::MAX);
}
