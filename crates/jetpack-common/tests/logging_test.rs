//! Logger installation writes to a process-wide subscriber, so it lives in
//! its own test binary.

use jetpack_common::{init_logging, LoggingConfig};

#[test]
fn test_json_format_writes_json_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("jetpack.log");

    init_logging(LoggingConfig {
        level: "info".to_string(),
        json_format: true,
        pretty_format: false,
        file_path: Some(path.to_string_lossy().into_owned()),
        ..LoggingConfig::default()
    })
    .unwrap();

    tracing::info!(axis = "x", "styled axes");

    let content = std::fs::read_to_string(&path).unwrap();
    let line = content.lines().next().expect("one log line");
    let event: serde_json::Value = serde_json::from_str(line).unwrap();
    assert_eq!(event["level"], "INFO");
    assert_eq!(event["fields"]["message"], "styled axes");
    assert_eq!(event["fields"]["axis"], "x");

    // a second logger cannot replace the first
    assert!(init_logging(LoggingConfig::default()).is_err());
}
