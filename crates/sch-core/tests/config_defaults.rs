use std::path::PathBuf;

use sch_core::{SchError, SessionConfig};

#[test]
fn empty_document_yields_defaults() {
    let config = SessionConfig::from_yaml_str("{}").expect("parse");
    assert_eq!(config, SessionConfig::default());
    assert_eq!(config.output.potential_path(), PathBuf::from("./potential.dat"));
    assert_eq!(config.output.basis_path(), PathBuf::from("./base.dat"));
    assert!(config.output.persist_potential);
    assert!(!config.wavefunction_dump.enabled);
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn partial_document_overrides_fields() {
    let raw = r#"
output:
  directory: run
  potential_file: v.dat
wavefunction_dump:
  enabled: true
logging:
  level: debug
"#;
    let config = SessionConfig::from_yaml_str(raw).expect("parse");
    assert_eq!(config.output.potential_path(), PathBuf::from("run/v.dat"));
    assert_eq!(
        config.output.wavefunction_path(),
        PathBuf::from("run/wavefunction.dat")
    );
    assert!(config.wavefunction_dump.enabled);
    assert_eq!(config.wavefunction_dump.directory, PathBuf::from("wavefunctions"));
    assert_eq!(config.logging.level, "debug");
}

#[test]
fn yaml_round_trip() {
    let mut config = SessionConfig::default();
    config.output.persist_potential = false;
    let yaml = config.to_yaml_string().expect("serialize");
    let decoded = SessionConfig::from_yaml_str(&yaml).expect("parse");
    assert_eq!(decoded, config);
}

#[test]
fn malformed_document_is_config_error() {
    let err = SessionConfig::from_yaml_str("output: [1, 2").unwrap_err();
    assert!(matches!(err, SchError::Config(_)));
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = SessionConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert!(matches!(err, SchError::Io(_)));
    assert_eq!(err.info().code, "config_read");
}
