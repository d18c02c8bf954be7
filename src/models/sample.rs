//! Core observation types: activities, measures, and plotted samples.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DataError;

/// Activity condition under which physiological samples were recorded.
///
/// The label strings match the `activity` column of the sampled CSV files,
/// so serde round-trips preserve the on-disk vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Activity {
    #[serde(rename = "2-Back")]
    TwoBack,
    Rest,
    Running,
}

impl Activity {
    /// All known activities, in canonical display order.
    pub const ALL: [Activity; 3] = [Activity::TwoBack, Activity::Rest, Activity::Running];

    /// Returns the label used in data files and UI legends.
    pub fn label(&self) -> &'static str {
        match self {
            Activity::TwoBack => "2-Back",
            Activity::Rest => "Rest",
            Activity::Running => "Running",
        }
    }

    /// Parses a data-file label into an activity.
    pub fn from_label(label: &str) -> Result<Self, DataError> {
        match label {
            "2-Back" => Ok(Activity::TwoBack),
            "Rest" => Ok(Activity::Rest),
            "Running" => Ok(Activity::Running),
            other => Err(DataError::UnknownActivity(other.to_string())),
        }
    }

    /// Categorical chart color for this activity.
    pub fn color(&self) -> &'static str {
        match self {
            Activity::TwoBack => "#4daf4a",
            Activity::Rest => "#377eb8",
            Activity::Running => "#e41a1c",
        }
    }
}

impl fmt::Display for Activity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Physiological measure carried by a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Measure {
    HeartRate,
    BreathingRate,
}

impl Measure {
    /// All known measures, in canonical display order.
    pub const ALL: [Measure; 2] = [Measure::HeartRate, Measure::BreathingRate];

    /// Returns the label used in data-file columns and UI legends.
    pub fn label(&self) -> &'static str {
        match self {
            Measure::HeartRate => "heart_rate",
            Measure::BreathingRate => "breathing_rate",
        }
    }

    /// Parses a column label into a measure.
    pub fn from_label(label: &str) -> Result<Self, DataError> {
        match label {
            "heart_rate" => Ok(Measure::HeartRate),
            "breathing_rate" => Ok(Measure::BreathingRate),
            other => Err(DataError::UnknownMeasure(other.to_string())),
        }
    }

    /// Unit suffix shown in tooltips.
    pub fn unit(&self) -> &'static str {
        match self {
            Measure::HeartRate => "bpm",
            Measure::BreathingRate => "breaths/min",
        }
    }

    /// Marker shape distinguishing this measure on the chart.
    pub fn symbol(&self) -> PointSymbol {
        match self {
            Measure::HeartRate => PointSymbol::Circle,
            Measure::BreathingRate => PointSymbol::Square,
        }
    }

    /// Categorical chart color for this measure.
    pub fn color(&self) -> &'static str {
        match self {
            Measure::HeartRate => "#d95f02",
            Measure::BreathingRate => "#7570b3",
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Marker shape drawn for a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointSymbol {
    Circle,
    Square,
}

/// One row of a sampled CSV file, before expansion into per-measure samples.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRow {
    pub timestamp: f64,
    pub activity: String,
    pub heart_rate: f64,
    pub breathing_rate: f64,
}

/// One plotted observation: a single measure value at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Seconds since the start of the recording.
    pub timestamp: qtty::Seconds,
    pub activity: Activity,
    pub measure: Measure,
    pub value: f64,
}

impl Sample {
    pub fn new(timestamp: qtty::Seconds, activity: Activity, measure: Measure, value: f64) -> Self {
        Sample {
            timestamp,
            activity,
            measure,
            value,
        }
    }

    /// Tooltip line for this observation.
    pub fn tooltip_text(&self) -> String {
        format!(
            "{} | {} {} at {:.0} s",
            self.activity,
            self.value,
            self.measure.unit(),
            self.timestamp.value()
        )
    }
}

/// Stable identity of a sample within its activity's expansion order.
///
/// The index counts expanded samples (two per raw row), not raw rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId {
    pub activity: Activity,
    pub index: usize,
}

impl PointId {
    pub fn new(activity: Activity, index: usize) -> Self {
        PointId { activity, index }
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.activity, self.index)
    }
}

/// Expands a raw CSV row into one sample per measure.
///
/// Rejects rows whose activity label is unknown or whose numeric fields
/// are not finite, so callers can drop them with a warning.
pub fn expand_row(row: &RawRow) -> Result<[Sample; 2], DataError> {
    let activity = Activity::from_label(&row.activity)?;
    if !row.timestamp.is_finite() {
        return Err(DataError::NonFiniteValue("timestamp".to_string()));
    }
    if !row.heart_rate.is_finite() {
        return Err(DataError::NonFiniteValue("heart_rate".to_string()));
    }
    if !row.breathing_rate.is_finite() {
        return Err(DataError::NonFiniteValue("breathing_rate".to_string()));
    }
    let timestamp = qtty::Seconds::new(row.timestamp);
    Ok([
        Sample::new(timestamp, activity, Measure::HeartRate, row.heart_rate),
        Sample::new(timestamp, activity, Measure::BreathingRate, row.breathing_rate),
    ])
}
