//! CSV loading for sampled physiological data.
//!
//! Each activity ships as its own `sampled_<Activity>.csv` file with
//! `timestamp,activity,heart_rate,breathing_rate` columns. Malformed rows
//! are dropped with a warning; only missing files fail the load.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::{compute_dataset_checksum, expand_row, Activity, Dataset, RawRow, Sample};

/// Outcome of parsing one CSV source.
#[derive(Debug, Default)]
pub struct CsvLoad {
    pub samples: Vec<Sample>,
    pub rows: usize,
    pub dropped: usize,
}

/// File name convention for one activity's sampled data.
pub fn activity_file_name(activity: Activity) -> String {
    format!("sampled_{}.csv", activity.label())
}

/// Parses sampled rows from CSV text.
///
/// Rows that fail to deserialize, carry an unknown activity label, or
/// contain non-finite numbers are dropped and counted, not propagated.
pub fn parse_samples_csv_str(contents: &str, source: &str) -> CsvLoad {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let mut load = CsvLoad::default();
    for (line, record) in reader.deserialize::<RawRow>().enumerate() {
        load.rows += 1;
        let row = match record {
            Ok(row) => row,
            Err(e) => {
                log::warn!("Dropping row {} of {}: {}", line + 1, source, e);
                load.dropped += 1;
                continue;
            }
        };
        match expand_row(&row) {
            Ok(samples) => load.samples.extend(samples),
            Err(e) => {
                log::warn!("Dropping row {} of {}: {}", line + 1, source, e);
                load.dropped += 1;
            }
        }
    }
    load
}

/// Parses one sampled CSV file.
pub fn parse_samples_csv(path: &Path) -> Result<CsvLoad> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read sampled CSV '{}'", path.display()))?;
    Ok(parse_samples_csv_str(&contents, &path.display().to_string()))
}

/// Loads the sampled files for the given activities from one directory.
///
/// The dataset checksum covers the concatenated file bytes in load order.
pub fn load_dataset(dir: &Path, activities: &[Activity]) -> Result<Dataset> {
    let mut samples = Vec::new();
    let mut rows = 0;
    let mut dropped = 0;
    let mut source_bytes = Vec::new();

    for activity in activities {
        let path = dir.join(activity_file_name(*activity));
        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read sampled CSV '{}'", path.display()))?;
        source_bytes.extend_from_slice(contents.as_bytes());

        let load = parse_samples_csv_str(&contents, &path.display().to_string());
        rows += load.rows;
        dropped += load.dropped;
        samples.extend(load.samples);
    }

    if dropped > 0 {
        log::warn!("Dropped {} of {} rows while loading {}", dropped, rows, dir.display());
    }

    let checksum = compute_dataset_checksum(&source_bytes);
    Ok(Dataset::with_provenance(samples, rows, dropped, checksum))
}
