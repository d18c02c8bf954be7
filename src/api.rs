//! Public API surface for the visualization core.
//!
//! This file consolidates the types a host application needs: domain
//! models, the state machines, the session, and the renderer seam.

pub use crate::config::VizConfig;
pub use crate::error::DataError;
pub use crate::error::DataResult;
pub use crate::models::Activity;
pub use crate::models::ActivityGroup;
pub use crate::models::Dataset;
pub use crate::models::Measure;
pub use crate::models::PointId;
pub use crate::models::PointSymbol;
pub use crate::models::RawRow;
pub use crate::models::Sample;
pub use crate::parsing::load_dataset;
pub use crate::parsing::load_regression;
pub use crate::parsing::CurvePoint;
pub use crate::parsing::RegressionCurve;
pub use crate::parsing::RegressionSet;
pub use crate::render::apply;
pub use crate::render::RecordingRenderer;
pub use crate::render::RenderedPoint;
pub use crate::render::Renderer;
pub use crate::services::compute_chart_data;
pub use crate::services::default_script;
pub use crate::services::ChartData;
pub use crate::services::ClickTimingEstimator;
pub use crate::services::Directive;
pub use crate::services::EstimateAnnotation;
pub use crate::services::EstimatorSettings;
pub use crate::services::FeedBatch;
pub use crate::services::FilterState;
pub use crate::services::FilterToggle;
pub use crate::services::InputEvent;
pub use crate::services::LegendEntry;
pub use crate::services::MeasureSummary;
pub use crate::services::NarrativeSequencer;
pub use crate::services::NarrativeStep;
pub use crate::services::Phase;
pub use crate::services::PointFeed;
pub use crate::services::SessionSettings;
pub use crate::services::StepOutcome;
pub use crate::services::VizSession;
pub use crate::visual::style_for;
pub use crate::visual::FillChoice;
pub use crate::visual::PointStyle;
pub use crate::visual::StyleRule;
