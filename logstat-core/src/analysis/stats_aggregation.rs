use crate::analysis::constants::{LATENCY_BUCKETS_MS, NO_ERROR_MESSAGE, TOP_ENDPOINTS, TOP_ERRORS};
use crate::analysis::error::AnalysisError;
use crate::analysis::histogram::Histogram;
use crate::analysis::percentile::{percentile, round2};
use crate::analysis::report::{AnalysisReport, EndpointSummary, ErrorSummary, ResponseTimeStats};
use crate::analysis::types::ValidatedLogEntry;
use ahash::RandomState;
use indexmap::IndexMap;
use std::collections::BTreeMap;

/// Folds validated entries page by page and computes the final report.
///
/// `total_raw_count` is the number of records the caller received before
/// validation; it is the denominator of the error rate. Page boundaries do not
/// influence the result.
pub fn analyze(
    entries: &[ValidatedLogEntry],
    total_raw_count: usize,
    page_size: usize,
) -> Result<AnalysisReport, AnalysisError> {
    ensure_page_size(page_size)?;

    let mut state = AggregationState::default();

    for (page, chunk) in entries.chunks(page_size).enumerate() {
        tracing::debug!(page, entries = chunk.len(), "folding page");
        state.push_page(chunk);
    }

    Ok(state.finalize(total_raw_count))
}

pub(crate) fn ensure_page_size(page_size: usize) -> Result<(), AnalysisError> {
    if page_size == 0 {
        return Err(AnalysisError::invalid_configuration(
            "page_size must be a positive integer",
        ));
    }
    Ok(())
}

/// Keys in first-seen order, so top-N selection can break ties by arrival.
type FirstSeen<V> = IndexMap<String, V, RandomState>;

fn counter_for<'a, V: Default>(map: &'a mut FirstSeen<V>, key: &str) -> &'a mut V {
    match map.get_index_of(key) {
        Some(slot) => &mut map[slot],
        None => map.entry(key.to_string()).or_default(),
    }
}

/// Highest `n` by `count`, descending. The sort is stable over first-seen
/// order.
fn top<V>(map: &FirstSeen<V>, n: usize, count: impl Fn(&V) -> u64) -> Vec<(&String, &V)> {
    let mut ranked: Vec<_> = map.iter().collect();
    ranked.sort_by(|a, b| count(b.1).cmp(&count(a.1)));
    ranked.truncate(n);
    ranked
}

#[derive(Default)]
struct EndpointCounter {
    count: u64,
    methods: BTreeMap<String, u64>,
}

/// Running aggregate owned by a single `analyze` call.
#[derive(Default)]
pub(crate) struct AggregationState {
    processed: u64,
    error_count: u64,
    status_codes: BTreeMap<i64, u64>,
    methods: BTreeMap<String, u64>,
    endpoints: FirstSeen<EndpointCounter>,
    error_messages: FirstSeen<u64>,
    response_times: Vec<f64>,
}

impl AggregationState {
    pub(crate) fn push_page(&mut self, page: &[ValidatedLogEntry]) {
        for entry in page {
            self.push(entry);
        }
    }

    pub(crate) fn push(&mut self, entry: &ValidatedLogEntry) {
        self.processed += 1;

        *self.status_codes.entry(entry.status).or_insert(0) += 1;
        *self.methods.entry(entry.method.clone()).or_insert(0) += 1;

        if entry.is_error() {
            self.error_count += 1;
            let message = entry.message.as_deref().unwrap_or(NO_ERROR_MESSAGE);
            *counter_for(&mut self.error_messages, message) += 1;
        }

        let endpoint = counter_for(&mut self.endpoints, &entry.path);
        endpoint.count += 1;
        *endpoint.methods.entry(entry.method.clone()).or_insert(0) += 1;

        if let Some(ms) = entry.response_time {
            self.response_times.push(ms);
        }
    }

    pub(crate) fn finalize(self, total_raw_count: usize) -> AnalysisReport {
        let total = total_raw_count as u64;

        let error_rate_percentage = if total > 0 {
            round2(self.error_count as f64 / total as f64 * 100.0)
        } else {
            0.0
        };

        let top_endpoints = top(&self.endpoints, TOP_ENDPOINTS, |e| e.count)
            .into_iter()
            .map(|(path, e)| EndpointSummary {
                path: path.clone(),
                count: e.count,
                methods: e.methods.clone(),
            })
            .collect();

        let top_errors = top(&self.error_messages, TOP_ERRORS, |c| *c)
            .into_iter()
            .map(|(message, count)| ErrorSummary {
                message: message.clone(),
                count: *count,
            })
            .collect();

        AnalysisReport {
            total_requests: total,
            processed_requests: self.processed,
            dropped_requests: total.saturating_sub(self.processed),
            error_rate_percentage,
            status_code_distribution: self.status_codes,
            method_distribution: self.methods,
            top_endpoints,
            response_time_stats: response_time_stats(&self.response_times),
            top_errors,
        }
    }
}

fn response_time_stats(samples: &[f64]) -> ResponseTimeStats {
    if samples.is_empty() {
        return ResponseTimeStats::unavailable();
    }

    // divide first so sums of samples near f64::MAX stay finite
    let n = samples.len() as f64;
    let mean: f64 = samples.iter().map(|s| s / n).sum();

    let mut sorted = samples.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut histogram = Histogram::new(LATENCY_BUCKETS_MS);
    for ms in &sorted {
        histogram.record(*ms);
    }

    let at = |pct: f64| percentile(&sorted, pct).map(round2).unwrap_or(0.0);

    ResponseTimeStats {
        available: true,
        sample_count: sorted.len() as u64,
        mean_ms: round2(mean),
        p50_ms: at(50.0),
        p95_ms: at(95.0),
        p99_ms: at(99.0),
        min_ms: round2(sorted[0]),
        max_ms: round2(sorted[sorted.len() - 1]),
        histogram: histogram.snapshot(),
    }
}
