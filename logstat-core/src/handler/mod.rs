//! Invocation wrapper.
//!
//! Takes one event document, runs the analysis on the batch it carries and
//! wraps the outcome in a `{statusCode, headers, body}` envelope. Fatal
//! analysis errors become a 400; a completed analysis is always a 200, however
//! many records were dropped along the way.

mod sample;


pub use sample::sample_logs;

use crate::analysis::{AnalysisError, AnalysisReport, analyze_batch};
use crate::config::AnalyzerConfig;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;
use std::borrow::Cow;
use std::collections::BTreeMap;

pub const STATUS_OK: u16 = 200;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// JSON document, already encoded.
    pub body: String,
}

#[derive(Serialize)]
struct SuccessBody<'a> {
    analysis: &'a AnalysisReport,
    environment: &'a str,
    timestamp: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    timestamp: String,
}

pub fn handle_event(event: &Value, config: &AnalyzerConfig) -> Response {
    handle_event_at(event, config, Utc::now())
}

/// [`handle_event`] with a fixed clock.
pub fn handle_event_at(event: &Value, config: &AnalyzerConfig, now: DateTime<Utc>) -> Response {
    let timestamp = now.to_rfc3339_opts(SecondsFormat::Millis, true);

    match analyze_event(event, config) {
        Ok(report) => json_response(
            STATUS_OK,
            &SuccessBody {
                analysis: &report,
                environment: &config.environment,
                timestamp,
            },
        ),
        Err(err) => {
            tracing::warn!(error = %err, "log analysis rejected");
            json_response(
                STATUS_BAD_REQUEST,
                &ErrorBody {
                    error: err.to_string(),
                    timestamp,
                },
            )
        }
    }
}

fn analyze_event(event: &Value, config: &AnalyzerConfig) -> Result<AnalysisReport, AnalysisError> {
    let payload = resolve_payload(event)?;
    let page_size = page_size(&payload, config.page_size)?;

    match records(&payload) {
        Some(records) => analyze_batch(records, page_size),
        None => {
            tracing::info!("no logs supplied; analyzing bundled sample batch");
            analyze_batch(&sample_logs(), page_size)
        }
    }
}

/// Gateway-style events carry the payload as a JSON string in `body`.
fn resolve_payload(event: &Value) -> Result<Cow<'_, Value>, AnalysisError> {
    match event.get("body") {
        Some(Value::String(body)) => serde_json::from_str(body)
            .map(Cow::Owned)
            .map_err(|e| AnalysisError::invalid_payload(format!("body is not valid JSON: {e}"))),
        _ => Ok(Cow::Borrowed(event)),
    }
}

/// A bare array is the batch itself; otherwise the batch sits under `logs`.
fn records(payload: &Value) -> Option<&Value> {
    if payload.is_array() {
        return Some(payload);
    }

    payload.get("logs").filter(|logs| !logs.is_null())
}

fn page_size(payload: &Value, default: usize) -> Result<usize, AnalysisError> {
    match payload.get("page_size") {
        None | Some(Value::Null) => Ok(default),
        Some(value) => value
            .as_i64()
            .filter(|n| *n > 0)
            .and_then(|n| usize::try_from(n).ok())
            .ok_or_else(|| {
                AnalysisError::invalid_configuration(format!(
                    "page_size must be a positive integer, got {value}"
                ))
            }),
    }
}

fn json_response(status_code: u16, body: &impl Serialize) -> Response {
    let headers = BTreeMap::from([("Content-Type".to_string(), "application/json".to_string())]);

    match serde_json::to_string(body) {
        Ok(body) => Response {
            status_code,
            headers,
            body,
        },
        Err(err) => {
            tracing::error!(error = %err, "failed to encode response body");
            Response {
                status_code: STATUS_INTERNAL_ERROR,
                headers,
                body: r#"{"error":"failed to encode response body"}"#.to_string(),
            }
        }
    }
}
