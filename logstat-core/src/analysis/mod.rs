//! Access Log Analysis
//!
//! This module turns a batch of HTTP access-log records into a summary report.
//!
//! Records arrive as loosely typed JSON. Before any counting happens, each one
//! goes through the validator, which fills in defaults and coerces numbers
//! that came in as strings. A record that can't be coerced is dropped with a
//! warning; the rest of the batch carries on.
//!
//! The surviving entries are then folded page by page into one running
//! aggregate: status codes, methods, endpoints (with a method breakdown), error
//! messages and response-time samples. Paging only bounds how much is touched
//! at once; the report is the same whatever the page size.
//!
//! Finally the aggregate is turned into an [`AnalysisReport`]: error rate
//! against the raw record count, top endpoints and errors, and response-time
//! statistics with interpolated percentiles.
//!
//! The overall data processing architecture is:
//!
//! raw records (JSON array)
//! validate
//! ValidatedLogEntry
//! AggregationState (paginated fold)
//! AnalysisReport
//! render_report / serde_json
//!

mod constants;
mod error;
mod histogram;
mod parse;
mod percentile;
mod render;
mod report;
mod stats_aggregation;
mod types;

#[cfg(test)]
mod tests;

pub use constants::DEFAULT_PAGE_SIZE;
pub use error::AnalysisError;
pub use parse::{parse_record, validate};
pub use percentile::{percentile, round2};
pub use render::render_report;
pub use report::*;
pub use stats_aggregation::analyze;
pub use types::*;

use serde_json::Value;

/// Validates a raw batch and analyzes the survivors in one call.
pub fn analyze_batch(raw_records: &Value, page_size: usize) -> Result<AnalysisReport, AnalysisError> {
    stats_aggregation::ensure_page_size(page_size)?;

    let entries = validate(raw_records)?;
    let total_raw_count = raw_records.as_array().map_or(0, Vec::len);

    let report = analyze(&entries, total_raw_count, page_size)?;

    tracing::info!(
        total = report.total_requests,
        processed = report.processed_requests,
        dropped = report.dropped_requests,
        "log batch analyzed"
    );

    Ok(report)
}
