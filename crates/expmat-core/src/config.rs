use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::fixtures::DEFAULT_SCALE;

/// Parameters for the exponential evaluator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Scalar applied to the matrix before exponentiation.
    pub scale: f64,
    /// Optional CSV matrix to evaluate instead of the embedded fixture.
    pub input: Option<PathBuf>,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            input: None,
        }
    }
}

/// Parameters for the comparative plotter.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    /// Output HTML path.
    pub output: PathBuf,
    /// Optional CSV series to plot instead of the embedded fixtures,
    /// labeled "1", "2", ... by position.
    pub inputs: Vec<PathBuf>,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            title: "Error decay by run".to_string(),
            x_title: "Iteration".to_string(),
            y_title: "Error".to_string(),
            output: PathBuf::from("convergence.html"),
            inputs: Vec::new(),
        }
    }
}
