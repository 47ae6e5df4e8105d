use std::path::Path;

use sch_core::errors::{ErrorInfo, SchError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("axes", "2")
        .with_context("reason", "example")
}

#[test]
fn config_error_surface() {
    let err = SchError::Config(sample_info("basis_preset", "unknown preset"));
    assert_eq!(err.info().code, "basis_preset");
    assert!(err.info().context.contains_key("axes"));
    assert!(err.to_string().starts_with("invalid configuration:"));
}

#[test]
fn state_error_surface() {
    let err = SchError::State(sample_info("basis_coords", "ambiguous axis"));
    assert_eq!(err.info().code, "basis_coords");
    assert!(err.to_string().starts_with("invalid state:"));
}

#[test]
fn io_error_carries_path() {
    let err = SchError::io("sink_open", Path::new("out/potential.dat"), "denied");
    assert_eq!(err.info().code, "sink_open");
    assert_eq!(
        err.info().context.get("path").map(String::as_str),
        Some("out/potential.dat")
    );
}

#[test]
fn display_includes_context_and_hint() {
    let info = ErrorInfo::new("S001", "schema mismatch")
        .with_context("id", "1")
        .with_hint("regenerate the snapshot");
    let rendered = info.to_string();
    assert_eq!(
        rendered,
        "schema mismatch (code: S001) | context: [id=1] | hint: regenerate the snapshot"
    );
}

#[test]
fn errors_round_trip_json() {
    let err = SchError::Serde(sample_info("S001", "schema mismatch").with_hint("retry"));
    let json = serde_json::to_string(&err).expect("serialize");
    assert!(json.contains("\"family\":\"Serde\""));
    let decoded: SchError = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, err);
}
