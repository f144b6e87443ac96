//! The comparative plotter: render error-decay runs on a semi-log chart.
use std::path::Path;

use anyhow::{Context, Result};

use expmat_core::config::PlotConfig;
use expmat_core::fixtures;
use expmat_core::io::read_series_csv;
use expmat_core::report;
use expmat_core::series::ErrorSeries;

/// Load a plotter configuration from a JSON file.
pub fn load_plot_config<P: AsRef<Path>>(path: P) -> Result<PlotConfig> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config: {}", path.as_ref().display()))?;
    let config: PlotConfig = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config: {}", path.as_ref().display()))?;
    Ok(config)
}

/// Build the convergence chart and write it as HTML.
pub fn run_plot(config: &PlotConfig) -> Result<()> {
    let series = if config.inputs.is_empty() {
        fixtures::demo_error_series()
    } else {
        let mut loaded = Vec::with_capacity(config.inputs.len());
        for (idx, path) in config.inputs.iter().enumerate() {
            let values = read_series_csv(path)?;
            loaded.push(ErrorSeries::new((idx + 1).to_string(), values));
        }
        loaded
    };

    for run in &series {
        log::debug!(
            "[expmat::plot] series {}: {} samples, {} on the log axis",
            run.label(),
            run.len(),
            run.positive_len()
        );
    }

    let plot = report::plot_convergence(&series, &config.title, &config.x_title, &config.y_title);
    report::write_html(&plot, &config.output)?;
    log::info!("[expmat::plot] Wrote {}", config.output.display());
    Ok(())
}
