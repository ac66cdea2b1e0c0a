use crate::analysis::{DEFAULT_PAGE_SIZE, analyze_batch};
use crate::cli::invoke::parse_event;
use crate::cli::{parse_batch, read_batch, write_report};
use crate::logging::OutputMode;
use serde_json::{Value, json};

#[test]
fn json_array_input_is_used_as_is() {
    let batch = parse_batch(r#"[{"path": "/a"}, {"path": "/b"}]"#).unwrap();

    assert_eq!(batch, json!([{"path": "/a"}, {"path": "/b"}]));
}

#[test]
fn pretty_printed_array_is_one_document() {
    let batch = parse_batch("[\n  {\"path\": \"/a\"},\n  {\"path\": \"/b\"}\n]\n").unwrap();

    assert_eq!(batch.as_array().map(Vec::len), Some(2));
}

#[test]
fn ndjson_input_becomes_one_record_per_line() {
    let input = "{\"path\": \"/a\", \"status\": 200}\n\n{\"path\": \"/b\", \"status\": 404}\n";

    let batch = parse_batch(input).unwrap();

    assert_eq!(
        batch,
        json!([{"path": "/a", "status": 200}, {"path": "/b", "status": 404}])
    );
}

#[test]
fn unparseable_lines_are_kept_and_later_dropped() {
    // Arrange
    let input = "{\"path\": \"/a\"}\nGET /index.html 200\n";

    // Act
    let batch = parse_batch(input).unwrap();
    let report = analyze_batch(&batch, DEFAULT_PAGE_SIZE).unwrap();

    // Assert
    assert_eq!(batch[1], Value::String("GET /index.html 200".to_string()));
    assert_eq!(report.total_requests, 2);
    assert_eq!(report.processed_requests, 1);
}

#[test]
fn malformed_array_is_an_error() {
    // Arrange
    let input = "[\n  {\"path\": \"/a\", \"status\": 500},\n  {\"path\": \"/b\"},\n]\n";

    // Act
    let result = parse_batch(input);

    // Assert
    assert!(result.is_err());
}

#[test]
fn malformed_array_fails_the_read() {
    let err = read_batch("  [{\"path\": \"/a\"},]".as_bytes()).unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn single_object_line_is_a_one_record_batch() {
    let batch = parse_batch("{\"path\": \"/a\"}\n").unwrap();

    assert_eq!(batch, json!([{"path": "/a"}]));
}

#[test]
fn empty_input_is_an_empty_batch() {
    let batch = read_batch("   \n".as_bytes()).unwrap();

    assert_eq!(batch, json!([]));
}

#[test]
fn json_output_is_the_serialized_report() {
    let report = analyze_batch(&json!([{"path": "/a"}]), DEFAULT_PAGE_SIZE).unwrap();
    let mut out = Vec::new();

    write_report(&report, OutputMode::Json, false, &mut out).unwrap();

    let parsed: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed, serde_json::to_value(&report).unwrap());
}

#[test]
fn pretty_output_is_the_text_summary() {
    let report = analyze_batch(&json!([{"path": "/a"}]), DEFAULT_PAGE_SIZE).unwrap();
    let mut out = Vec::new();

    write_report(&report, OutputMode::Pretty, false, &mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.starts_with("Access Log Report"));
}

#[test]
fn empty_event_is_an_empty_object() {
    assert_eq!(parse_event("\n").unwrap(), json!({}));
}

#[test]
fn malformed_event_is_an_error() {
    let err = parse_event("{oops").unwrap_err();

    assert_eq!(err.to_string(), "event is not valid JSON");
}
