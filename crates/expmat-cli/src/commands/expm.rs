//! The exponential evaluator: print a matrix and its scaled exponential.
use std::path::Path;

use anyhow::{Context, Result};

use expmat_core::config::EvalConfig;
use expmat_core::fixtures;
use expmat_core::io::read_matrix_csv;
use expmat_core::linalg::expm;

/// Load an evaluator configuration from a JSON file.
pub fn load_eval_config<P: AsRef<Path>>(path: P) -> Result<EvalConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: EvalConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Evaluate exp(scale * M) and write both grids to standard output.
pub fn run_expm(config: &EvalConfig) -> Result<()> {
    let matrix = match &config.input {
        Some(path) => read_matrix_csv(path)?,
        None => fixtures::demo_matrix(),
    };
    log::info!(
        "[expmat::expm] Evaluating exp({} * M) for a {}x{} matrix",
        config.scale,
        matrix.nrows(),
        matrix.ncols()
    );

    let exponential = expm(&matrix, config.scale)?;

    println!("{}", matrix);
    println!();
    println!("{}", exponential);
    Ok(())
}
