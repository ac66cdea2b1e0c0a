use super::test_helpers::{entry, failed, timed};
use crate::analysis::{DEFAULT_PAGE_SIZE, analyze, render_report};

#[test]
fn renders_totals_and_status_classes() {
    let entries = vec![
        timed("/a", 200, 12.0),
        timed("/a", 301, 4.0),
        failed("/b", 404, Some("missing")),
        failed("/b", 503, None),
    ];
    let report = analyze(&entries, 5, DEFAULT_PAGE_SIZE).unwrap();

    let out = render_report(&report, false);

    assert!(out.contains("requests: 5 | processed: 4 | dropped: 1 | error rate: 40.00%"));
    assert!(out.contains("Status: 2xx=1 3xx=1 4xx=1 5xx=1"));
    assert!(out.contains("Methods: GET=4"));
    assert!(out.contains("/a"));
    assert!(out.contains("missing"));
    assert!(out.contains("p50 8.00ms"));
}

#[test]
fn renders_missing_latency() {
    let report = analyze(&[entry("/a", "GET", 200)], 1, DEFAULT_PAGE_SIZE).unwrap();

    let out = render_report(&report, false);

    assert!(out.contains("Latency: <no samples>"));
}

#[test]
fn plain_output_has_no_escape_codes() {
    let report = analyze(&[], 0, DEFAULT_PAGE_SIZE).unwrap();

    let out = render_report(&report, false);

    assert!(!out.contains('\x1b'));
}
