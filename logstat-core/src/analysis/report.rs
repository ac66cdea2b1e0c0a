use serde::Serialize;
use std::collections::BTreeMap;

/// Final output of one analysis run. Serializes to a plain nested mapping.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    /// Raw records received, including the ones dropped by validation.
    pub total_requests: u64,
    pub processed_requests: u64,
    pub dropped_requests: u64,
    /// Errors over `total_requests`, in percent.
    pub error_rate_percentage: f64,
    pub status_code_distribution: BTreeMap<i64, u64>,
    pub method_distribution: BTreeMap<String, u64>,
    pub top_endpoints: Vec<EndpointSummary>,
    pub response_time_stats: ResponseTimeStats,
    pub top_errors: Vec<ErrorSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EndpointSummary {
    pub path: String,
    pub count: u64,
    pub methods: BTreeMap<String, u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorSummary {
    pub message: String,
    pub count: u64,
}

/// All values in milliseconds, rounded to two decimals. When `available` is
/// false every figure is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseTimeStats {
    pub available: bool,
    pub sample_count: u64,
    pub mean_ms: f64,
    pub p50_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub histogram: Vec<LatencyBucket>,
}

impl ResponseTimeStats {
    pub fn unavailable() -> Self {
        Self {
            available: false,
            sample_count: 0,
            mean_ms: 0.0,
            p50_ms: 0.0,
            p95_ms: 0.0,
            p99_ms: 0.0,
            min_ms: 0.0,
            max_ms: 0.0,
            histogram: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatencyBucket {
    pub label: String,
    pub count: u64,
}
