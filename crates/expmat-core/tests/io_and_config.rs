//! CSV loader and configuration tests.

use std::fs;

use expmat_core::config::{EvalConfig, PlotConfig};
use expmat_core::fixtures::DEFAULT_SCALE;
use expmat_core::io::{read_matrix_csv, read_series_csv};
use tempfile::tempdir;

// ---------------------------------------------------------------------------
// Matrix reader
// ---------------------------------------------------------------------------

#[test]
fn read_matrix_from_csv() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("m.csv");
    fs::write(&path, "1.0,2.0,3.0\n4.0,5.0,6.0\n").unwrap();

    let m = read_matrix_csv(&path).unwrap();
    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m[(0, 0)], 1.0);
    assert_eq!(m[(1, 2)], 6.0);
}

#[test]
fn read_matrix_trims_whitespace() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("m.csv");
    fs::write(&path, " 1.0 , 2.0\n3.0, 4.0\n").unwrap();

    let m = read_matrix_csv(&path).unwrap();
    assert_eq!(m.to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn read_matrix_rejects_ragged_rows() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("m.csv");
    fs::write(&path, "1.0,2.0\n3.0\n").unwrap();

    let err = read_matrix_csv(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("Ragged"));
}

#[test]
fn read_matrix_rejects_non_numeric_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("m.csv");
    fs::write(&path, "1.0,abc\n").unwrap();

    assert!(read_matrix_csv(&path).is_err());
}

#[test]
fn read_matrix_rejects_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("m.csv");
    fs::write(&path, "").unwrap();

    assert!(read_matrix_csv(&path).is_err());
}

#[test]
fn read_matrix_missing_file_errors() {
    assert!(read_matrix_csv("/nonexistent/matrix.csv").is_err());
}

// ---------------------------------------------------------------------------
// Series reader
// ---------------------------------------------------------------------------

#[test]
fn read_series_from_column() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("s.csv");
    fs::write(&path, "10.0\n1.0\n0.1\n-1e-13\n").unwrap();

    let values = read_series_csv(&path).unwrap();
    assert_eq!(values, vec![10.0, 1.0, 0.1, -1e-13]);
}

#[test]
fn read_series_from_single_record() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("s.csv");
    fs::write(&path, "10.0,1.0,0.1\n").unwrap();

    let values = read_series_csv(&path).unwrap();
    assert_eq!(values, vec![10.0, 1.0, 0.1]);
}

#[test]
fn read_series_rejects_grid_input() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("s.csv");
    fs::write(&path, "1.0,2.0\n3.0,4.0\n").unwrap();

    assert!(read_series_csv(&path).is_err());
}

#[test]
fn read_series_rejects_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("s.csv");
    fs::write(&path, "").unwrap();

    assert!(read_series_csv(&path).is_err());
}

// ---------------------------------------------------------------------------
// Configurations
// ---------------------------------------------------------------------------

#[test]
fn eval_config_defaults() {
    let config = EvalConfig::default();
    assert_eq!(config.scale, DEFAULT_SCALE);
    assert!(config.input.is_none());
}

#[test]
fn eval_config_partial_json_fills_defaults() {
    let config: EvalConfig = serde_json::from_str(r#"{"scale": 2.5}"#).unwrap();
    assert_eq!(config.scale, 2.5);
    assert!(config.input.is_none());

    let config: EvalConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.scale, DEFAULT_SCALE);
}

#[test]
fn plot_config_defaults() {
    let config = PlotConfig::default();
    assert_eq!(config.title, "Error decay by run");
    assert_eq!(config.output.to_str().unwrap(), "convergence.html");
    assert!(config.inputs.is_empty());
}

#[test]
fn plot_config_roundtrips_through_json() {
    let mut config = PlotConfig::default();
    config.title = "Custom".to_string();
    config.inputs = vec!["a.csv".into(), "b.csv".into()];

    let json = serde_json::to_string(&config).unwrap();
    let back: PlotConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back.title, "Custom");
    assert_eq!(back.inputs.len(), 2);
}
