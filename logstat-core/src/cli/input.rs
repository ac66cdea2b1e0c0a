use serde_json::Value;
use std::io::{self, Read};

pub fn read_batch(mut reader: impl Read) -> io::Result<Value> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(parse_batch(&contents)?)
}

/// Accepts either a single JSON array or newline-delimited JSON records.
///
/// Input starting with `[` must be one well-formed array; a syntax error there
/// is returned rather than retried line by line. In line mode a line that is
/// not JSON is kept as a string record; the validator drops it, so it still
/// counts toward the raw total.
pub fn parse_batch(contents: &str) -> serde_json::Result<Value> {
    if contents.trim_start().starts_with('[') {
        return serde_json::from_str(contents);
    }

    let records = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            serde_json::from_str::<Value>(line).unwrap_or_else(|_| Value::String(line.to_string()))
        })
        .collect();

    Ok(Value::Array(records))
}
