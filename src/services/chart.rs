//! Chart-ready summary of a dataset: axis extents, legends, counts.

use serde::{Deserialize, Serialize};

use crate::models::{Activity, Dataset, Measure, PointSymbol};
use crate::visual::DEFAULT_SYMBOL_AREA;

/// Padding added above and below the raw value extent.
pub const VALUE_PAD: f64 = 5.0;

/// Legend entry for one activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegendEntry {
    pub activity: Activity,
    pub color: String,
    pub count: usize,
}

/// Legend entry for one measure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeasureSummary {
    pub measure: Measure,
    pub symbol: PointSymbol,
    pub color: String,
    pub count: usize,
}

/// Everything a renderer needs to lay out axes and legends.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartData {
    pub time_min: qtty::Seconds,
    pub time_max: qtty::Seconds,
    /// Value extent, already padded by [`VALUE_PAD`].
    pub value_min: f64,
    pub value_max: f64,
    pub total_points: usize,
    pub legend: Vec<LegendEntry>,
    pub measures: Vec<MeasureSummary>,
    pub symbol_area: f64,
}

/// Computes axis extents and legend metadata for a dataset.
///
/// The value axis is padded by [`VALUE_PAD`] on both ends so extreme points
/// do not sit on the chart border. The time axis uses the raw extent.
pub fn compute_chart_data(dataset: &Dataset) -> ChartData {
    if dataset.is_empty() {
        return ChartData {
            time_min: qtty::Seconds::new(0.0),
            time_max: qtty::Seconds::new(0.0),
            value_min: 0.0,
            value_max: 10.0,
            total_points: 0,
            legend: vec![],
            measures: vec![],
            symbol_area: DEFAULT_SYMBOL_AREA,
        };
    }

    let mut time_min = f64::MAX;
    let mut time_max = f64::MIN;
    let mut value_min = f64::MAX;
    let mut value_max = f64::MIN;

    for group in dataset.groups() {
        for sample in &group.samples {
            let t = sample.timestamp.value();
            time_min = time_min.min(t);
            time_max = time_max.max(t);
            value_min = value_min.min(sample.value);
            value_max = value_max.max(sample.value);
        }
    }

    let legend = dataset
        .groups()
        .iter()
        .map(|group| LegendEntry {
            activity: group.activity,
            color: group.activity.color().to_string(),
            count: group.samples.len(),
        })
        .collect();

    let measures = Measure::ALL
        .iter()
        .map(|&measure| MeasureSummary {
            measure,
            symbol: measure.symbol(),
            color: measure.color().to_string(),
            count: dataset
                .groups()
                .iter()
                .flat_map(|g| g.samples.iter())
                .filter(|s| s.measure == measure)
                .count(),
        })
        .collect();

    ChartData {
        time_min: qtty::Seconds::new(time_min),
        time_max: qtty::Seconds::new(time_max),
        value_min: value_min - VALUE_PAD,
        value_max: value_max + VALUE_PAD,
        total_points: dataset.len(),
        legend,
        measures,
        symbol_area: DEFAULT_SYMBOL_AREA,
    }
}
