pub const DEFAULT_PAGE_SIZE: usize = 1000;

pub const TOP_ENDPOINTS: usize = 5;
pub const TOP_ERRORS: usize = 3;

pub const DEFAULT_PATH: &str = "unknown";
pub const DEFAULT_METHOD: &str = "UNKNOWN";
pub const DEFAULT_STATUS: i64 = 200;
pub const NO_ERROR_MESSAGE: &str = "No error message";

/// Upper bounds (inclusive) of the latency histogram, in milliseconds.
pub const LATENCY_BUCKETS_MS: &[f64] = &[1.0, 5.0, 10.0, 25.0, 50.0, 100.0, 250.0, 500.0, 1000.0];
