//! Tests for the error-series policy and the convergence chart.

use expmat_core::fixtures;
use expmat_core::report::plot_convergence;
use expmat_core::series::ErrorSeries;
use serde_json::Value;

// ---------------------------------------------------------------------------
// Non-positive filtering policy
// ---------------------------------------------------------------------------

#[test]
fn positive_points_keep_original_indices() {
    let series = ErrorSeries::new("1", vec![10.0, -1.0, 0.1, 0.0, 0.01]);
    let (xs, ys) = series.positive_points();
    assert_eq!(xs, vec![0.0, 2.0, 4.0]);
    assert_eq!(ys, vec![10.0, 0.1, 0.01]);
    assert_eq!(series.positive_len(), 3);
}

#[test]
fn leading_non_positive_sample_is_dropped() {
    let series = ErrorSeries::new("1", vec![-5.0, 1.0, 0.5]);
    let (xs, ys) = series.positive_points();
    assert_eq!(xs, vec![1.0, 2.0]);
    assert_eq!(ys, vec![1.0, 0.5]);
}

#[test]
fn entirely_non_positive_series_is_empty_not_an_error() {
    let series = ErrorSeries::new("1", vec![-1.0, 0.0, -2.0]);
    let (xs, ys) = series.positive_points();
    assert!(xs.is_empty());
    assert!(ys.is_empty());
    assert_eq!(series.positive_len(), 0);
}

#[test]
fn zero_counts_as_non_positive() {
    let series = ErrorSeries::new("1", vec![0.0]);
    assert_eq!(series.positive_len(), 0);
}

#[test]
fn demo_series_shapes() {
    let runs = fixtures::demo_error_series();
    assert_eq!(runs.len(), 5);
    let labels: Vec<&str> = runs.iter().map(|r| r.label()).collect();
    assert_eq!(labels, vec!["1", "2", "3", "4", "5"]);
    for run in &runs {
        assert_eq!(run.len(), 146);
    }
    // noise tails dip below zero in runs 1, 2 and 4
    let kept: Vec<usize> = runs.iter().map(|r| r.positive_len()).collect();
    assert_eq!(kept, vec![64, 69, 146, 112, 146]);
}

// ---------------------------------------------------------------------------
// Chart construction
// ---------------------------------------------------------------------------

fn chart_json(series: &[ErrorSeries]) -> Value {
    let plot = plot_convergence(series, "Error decay by run", "Iteration", "Error");
    serde_json::from_str(&plot.to_json()).expect("plot serializes to JSON")
}

#[test]
fn chart_has_one_labeled_curve_per_series() {
    let runs = fixtures::demo_error_series();
    let json = chart_json(&runs);
    let traces = json["data"].as_array().expect("data array");
    assert_eq!(traces.len(), 5);
    for (idx, trace) in traces.iter().enumerate() {
        assert_eq!(trace["name"], (idx + 1).to_string());
    }
}

#[test]
fn chart_point_counts_follow_the_policy() {
    let runs = fixtures::demo_error_series();
    let json = chart_json(&runs);
    let traces = json["data"].as_array().expect("data array");
    for (run, trace) in runs.iter().zip(traces) {
        let ys = trace["y"].as_array().expect("y array");
        assert_eq!(ys.len(), run.positive_len());
        assert!(ys
            .iter()
            .all(|v| v.as_f64().expect("numeric sample") > 0.0));
    }
}

#[test]
fn chart_vertical_axis_is_logarithmic() {
    let runs = fixtures::demo_error_series();
    let json = chart_json(&runs);
    assert_eq!(json["layout"]["yaxis"]["type"], "log");
}

#[test]
fn chart_construction_is_idempotent() {
    let runs = fixtures::demo_error_series();
    let first = plot_convergence(&runs, "t", "x", "y").to_json();
    let second = plot_convergence(&runs, "t", "x", "y").to_json();
    assert_eq!(first, second);
}

#[test]
fn chart_accepts_an_entirely_non_positive_series() {
    let series = vec![
        ErrorSeries::new("1", vec![-1.0, -2.0]),
        ErrorSeries::new("2", vec![1.0, 0.5]),
    ];
    let json = chart_json(&series);
    let traces = json["data"].as_array().expect("data array");
    assert_eq!(traces.len(), 2);
    assert_eq!(traces[0]["y"].as_array().expect("y array").len(), 0);
    assert_eq!(traces[1]["y"].as_array().expect("y array").len(), 2);
}
