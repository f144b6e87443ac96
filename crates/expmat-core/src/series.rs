//! Error-decay series and the semi-log filtering policy.
//!
//! A series records successive error magnitudes of a convergence run.
//! Tail values may dip below zero from floating-point noise; such samples
//! cannot sit on a logarithmic axis, so plotting drops them while keeping
//! the surviving samples at their original indices. A series that is
//! entirely non-positive simply plots as an empty curve.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorSeries {
    label: String,
    values: Vec<f64>,
}

impl ErrorSeries {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Samples that survive the log-axis policy, as parallel (index, value)
    /// coordinate vectors. Indices refer to the original sequence.
    pub fn positive_points(&self) -> (Vec<f64>, Vec<f64>) {
        let mut xs = Vec::with_capacity(self.values.len());
        let mut ys = Vec::with_capacity(self.values.len());
        for (idx, &value) in self.values.iter().enumerate() {
            if value > 0.0 {
                xs.push(idx as f64);
                ys.push(value);
            }
        }
        (xs, ys)
    }

    /// Number of samples the log-axis policy keeps.
    pub fn positive_len(&self) -> usize {
        self.values.iter().filter(|&&v| v > 0.0).count()
    }
}
