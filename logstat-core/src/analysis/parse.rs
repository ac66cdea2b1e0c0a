use crate::analysis::constants::{DEFAULT_METHOD, DEFAULT_PATH, DEFAULT_STATUS};
use crate::analysis::error::{AnalysisError, json_kind};
use crate::analysis::types::{RejectReason, ValidatedLogEntry};
use serde_json::Value;

/// Turns a batch of raw records into validated entries.
///
/// The batch itself must be a JSON array. Individual records that fail
/// validation are dropped with a warning and never abort the batch; the
/// survivors keep their input order.
pub fn validate(raw_records: &Value) -> Result<Vec<ValidatedLogEntry>, AnalysisError> {
    let Value::Array(records) = raw_records else {
        return Err(AnalysisError::InvalidInputShape {
            found: json_kind(raw_records),
        });
    };

    let mut entries = Vec::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        // positions are 1-indexed in diagnostics
        let position = index + 1;

        match parse_record(record) {
            Ok(entry) => entries.push(entry),
            Err(reason) => {
                tracing::warn!(position, reason = %reason, "dropping malformed log record");
            }
        }
    }

    Ok(entries)
}

pub fn parse_record(record: &Value) -> Result<ValidatedLogEntry, RejectReason> {
    let Value::Object(fields) = record else {
        return Err(RejectReason::NotAnObject);
    };

    let status = match fields.get("status") {
        Some(value) => coerce_integer("status", value)?,
        None => DEFAULT_STATUS,
    };

    // only coerced when the key is present at all
    let response_time = fields
        .get("response_time")
        .map(|value| coerce_float("response_time", value))
        .transpose()?;

    Ok(ValidatedLogEntry {
        timestamp: coerce_string("timestamp", fields.get("timestamp"))?.unwrap_or_default(),
        path: coerce_string("path", fields.get("path"))?
            .unwrap_or_else(|| DEFAULT_PATH.to_string()),
        status,
        method: coerce_string("method", fields.get("method"))?
            .map(|m| m.to_uppercase())
            .unwrap_or_else(|| DEFAULT_METHOD.to_string()),
        response_time,
        message: coerce_string("message", fields.get("message"))?,
    })
}

fn coerce_integer(field: &'static str, value: &Value) -> Result<i64, RejectReason> {
    let parsed = match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite())
                .map(f64::trunc)
                .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed.ok_or_else(|| RejectReason::InvalidInteger {
        field,
        value: value.to_string(),
    })
}

fn coerce_float(field: &'static str, value: &Value) -> Result<f64, RejectReason> {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };

    parsed
        .filter(|f| f.is_finite())
        .ok_or_else(|| RejectReason::InvalidFloat {
            field,
            value: value.to_string(),
        })
}

/// Null and missing both mean "absent". Scalars are kept as their JSON text.
fn coerce_string(field: &'static str, value: Option<&Value>) -> Result<Option<String>, RejectReason> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(v.to_string())),
        Some(Value::Array(_) | Value::Object(_)) => Err(RejectReason::InvalidString { field }),
    }
}
