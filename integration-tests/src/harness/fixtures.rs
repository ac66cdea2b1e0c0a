use serde_json::Value;
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

pub fn load_fixture(file: &str) -> String {
    let path = fixture_path(file);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

pub fn load_json_fixture(file: &str) -> Value {
    serde_json::from_str(&load_fixture(file))
        .unwrap_or_else(|e| panic!("fixture {file} is not JSON: {e}"))
}
