//! CSV loaders for matrices and error series.
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use crate::math::Matrix;

/// Read a headerless CSV file as a dense matrix.
///
/// Every record must have the same width and every field must parse as a
/// real number; ragged input is rejected as a shape error.
pub fn read_matrix_csv<P: AsRef<Path>>(path: P) -> Result<Matrix<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(&path)
        .with_context(|| format!("Failed to open matrix file: {}", path.as_ref().display()))?;

    let mut rows: Vec<Vec<f64>> = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read record {}", line + 1))?;
        let row = parse_record(&record, line)?;
        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(anyhow!(
                    "Ragged matrix input: record {} has {} fields, expected {}",
                    line + 1,
                    row.len(),
                    first.len()
                ));
            }
        }
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(anyhow!(
            "Empty matrix file: {}",
            path.as_ref().display()
        ));
    }

    Matrix::from_rows(rows).map_err(|e| anyhow!("Invalid matrix shape: {}", e))
}

/// Read an error series from CSV: either a single column (one value per
/// record) or a single record of values.
pub fn read_series_csv<P: AsRef<Path>>(path: P) -> Result<Vec<f64>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(&path)
        .with_context(|| format!("Failed to open series file: {}", path.as_ref().display()))?;

    let mut records: Vec<Vec<f64>> = Vec::new();
    for (line, record) in reader.records().enumerate() {
        let record = record.with_context(|| format!("Failed to read record {}", line + 1))?;
        records.push(parse_record(&record, line)?);
    }

    if records.is_empty() {
        return Err(anyhow!("Empty series file: {}", path.as_ref().display()));
    }
    if records.len() == 1 {
        return Ok(records.remove(0));
    }
    if records.iter().all(|r| r.len() == 1) {
        return Ok(records.into_iter().map(|mut r| r.remove(0)).collect());
    }
    Err(anyhow!(
        "Series input must be a single column or a single record: {}",
        path.as_ref().display()
    ))
}

fn parse_record(record: &csv::StringRecord, line: usize) -> Result<Vec<f64>> {
    record
        .iter()
        .map(|field| {
            field.parse::<f64>().map_err(|_| {
                anyhow!("Invalid number '{}' in record {}", field, line + 1)
            })
        })
        .collect()
}
