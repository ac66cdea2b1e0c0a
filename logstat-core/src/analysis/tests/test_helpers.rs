use crate::analysis::ValidatedLogEntry;

/// Helper: entry with only the fields aggregation cares about
pub fn entry(path: &str, method: &str, status: i64) -> ValidatedLogEntry {
    ValidatedLogEntry {
        timestamp: "2024-01-01T00:00:00Z".to_string(),
        path: path.to_string(),
        status,
        method: method.to_string(),
        response_time: None,
        message: None,
    }
}

/// Helper: entry carrying a response time
pub fn timed(path: &str, status: i64, ms: f64) -> ValidatedLogEntry {
    ValidatedLogEntry {
        response_time: Some(ms),
        ..entry(path, "GET", status)
    }
}

/// Helper: error entry with an optional message
pub fn failed(path: &str, status: i64, message: Option<&str>) -> ValidatedLogEntry {
    ValidatedLogEntry {
        message: message.map(str::to_string),
        ..entry(path, "GET", status)
    }
}

/// Helper: a mixed batch large enough to span several pages
pub fn mixed_batch(n: usize) -> Vec<ValidatedLogEntry> {
    let paths = ["/", "/api/users", "/api/orders", "/login", "/health", "/static/app.js"];
    let methods = ["GET", "POST", "PUT", "DELETE"];
    let statuses = [200, 201, 304, 400, 404, 500, 503];
    let messages = [None, Some("timeout"), Some("not found"), Some("bad gateway")];

    (0..n)
        .map(|i| ValidatedLogEntry {
            timestamp: format!("2024-01-01T00:00:{:02}Z", i % 60),
            path: paths[i % paths.len()].to_string(),
            status: statuses[(i * 7) % statuses.len()],
            method: methods[(i * 3) % methods.len()].to_string(),
            response_time: (i % 3 != 0).then(|| (i as f64 * 13.7) % 1500.0),
            message: messages[i % messages.len()].map(str::to_string),
        })
        .collect()
}
