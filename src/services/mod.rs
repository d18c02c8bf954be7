//! Service layer: the three state machines and the session that wires
//! them to a renderer.

pub mod chart;

pub mod estimator;

pub mod feed;

pub mod narrative;

pub mod session;

pub use chart::{compute_chart_data, ChartData, LegendEntry, MeasureSummary};
pub use estimator::{ClickTimingEstimator, EstimateAnnotation, EstimatorEvent, EstimatorSettings};
pub use feed::{FeedBatch, PointFeed};
pub use narrative::{default_script, NarrativeSequencer, NarrativeStep, StepOutcome};
pub use session::{
    Directive, FilterState, FilterToggle, InputEvent, Phase, SessionSettings, VizSession,
};
