//! Chart construction and HTML output.
pub mod plots;

use std::path::Path;

use anyhow::{Context, Result};
use plotly::Plot;

pub use plots::plot_convergence;

/// Write a plot as a self-contained HTML document.
pub fn write_html<P: AsRef<Path>>(plot: &Plot, path: P) -> Result<()> {
    std::fs::write(&path, plot.to_html())
        .with_context(|| format!("Failed to write plot: {}", path.as_ref().display()))?;
    Ok(())
}
