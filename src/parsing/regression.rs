//! JSON loading for precomputed regression curves.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::models::{Activity, Measure};

/// One predicted point on a fitted curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub timestamp: qtty::Seconds,
    pub value: f64,
}

/// A fitted curve for one (activity, measure) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegressionCurve {
    pub activity: Activity,
    pub measure: Measure,
    pub points: Vec<CurvePoint>,
}

/// All fitted curves shipped alongside a dataset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegressionSet {
    pub curves: Vec<RegressionCurve>,
}

impl RegressionSet {
    /// Looks up the curve for one (activity, measure) pair.
    pub fn curve(&self, activity: Activity, measure: Measure) -> Option<&RegressionCurve> {
        self.curves
            .iter()
            .find(|c| c.activity == activity && c.measure == measure)
    }

    pub fn is_empty(&self) -> bool {
        self.curves.is_empty()
    }
}

/// Wrapper shape: `{"curves": [...]}`.
#[derive(Debug, Deserialize)]
struct RegressionFile {
    curves: Vec<RegressionCurve>,
}

/// Parses regression curves from a JSON string.
///
/// Accepts either a `{"curves": [...]}` wrapper or a bare array of curves.
/// Each curve's points are sorted by timestamp so callers can draw them
/// directly.
pub fn parse_regression_json_str(json_str: &str) -> Result<RegressionSet> {
    let curves = if let Ok(wrapper) = serde_json::from_str::<RegressionFile>(json_str) {
        wrapper.curves
    } else {
        serde_json::from_str::<Vec<RegressionCurve>>(json_str)
            .context("Failed to parse regression JSON as wrapper or bare array")?
    };

    let mut set = RegressionSet { curves };
    for curve in &mut set.curves {
        curve
            .points
            .sort_by(|a, b| a.timestamp.value().total_cmp(&b.timestamp.value()));
    }
    Ok(set)
}

/// Loads regression curves from a JSON file.
pub fn load_regression(path: &Path) -> Result<RegressionSet> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read regression file '{}'", path.display()))?;
    parse_regression_json_str(&contents)
}
