//! Parsers for sampled physiological data formats.
//!
//! # Parsers
//!
//! - [`samples_csv`]: Parse per-activity sampled CSV files into a [`crate::models::Dataset`]
//! - [`regression`]: Parse precomputed regression curves from JSON

pub mod regression;
pub mod samples_csv;

pub use regression::{
    load_regression, parse_regression_json_str, CurvePoint, RegressionCurve, RegressionSet,
};
pub use samples_csv::{load_dataset, parse_samples_csv, parse_samples_csv_str, CsvLoad};
