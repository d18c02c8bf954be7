//! Visual styling: point styles and the declarative rule tables that
//! narrative steps and legend filters are expressed in.

use serde::{Deserialize, Serialize};

use crate::models::{Activity, Measure};

/// Neutral fill used before the story assigns colors.
pub const BASE_FILL: &str = "gray";
/// Default point opacity.
pub const BASE_OPACITY: f64 = 0.8;
/// Default symbol area in square pixels.
pub const DEFAULT_SYMBOL_AREA: f64 = 64.0;

/// How a rule resolves the fill color of a matching point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FillChoice {
    /// The neutral gray used outside the story's focus.
    Gray,
    /// The categorical color of the point's activity.
    ByActivity,
    /// The categorical color of the point's measure.
    ByMeasure,
    /// A literal color string.
    Fixed(String),
}

impl FillChoice {
    /// Resolves this choice against a concrete point.
    pub fn resolve(&self, activity: Activity, measure: Measure) -> String {
        match self {
            FillChoice::Gray => BASE_FILL.to_string(),
            FillChoice::ByActivity => activity.color().to_string(),
            FillChoice::ByMeasure => measure.color().to_string(),
            FillChoice::Fixed(color) => color.clone(),
        }
    }
}

/// Resolved visual state of one on-screen point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    pub fill: String,
    pub opacity: f64,
    pub visible: bool,
}

impl PointStyle {
    /// The style every point enters the chart with.
    pub fn base() -> Self {
        PointStyle {
            fill: BASE_FILL.to_string(),
            opacity: BASE_OPACITY,
            visible: true,
        }
    }
}

/// One row of a style rule table.
///
/// `None` selectors match every point; the first matching rule in a table
/// wins. A table that matches nothing falls back to [`PointStyle::base`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleRule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity: Option<Activity>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measure: Option<Measure>,
    pub fill: FillChoice,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_opacity() -> f64 {
    BASE_OPACITY
}

fn default_visible() -> bool {
    true
}

impl Default for StyleRule {
    fn default() -> Self {
        StyleRule {
            activity: None,
            measure: None,
            fill: FillChoice::Gray,
            opacity: BASE_OPACITY,
            visible: true,
        }
    }
}

impl StyleRule {
    pub fn matches(&self, activity: Activity, measure: Measure) -> bool {
        self.activity.map_or(true, |a| a == activity)
            && self.measure.map_or(true, |m| m == measure)
    }
}

/// Evaluates a rule table for one point, first match wins.
pub fn style_for(rules: &[StyleRule], activity: Activity, measure: Measure) -> PointStyle {
    for rule in rules {
        if rule.matches(activity, measure) {
            return PointStyle {
                fill: rule.fill.resolve(activity, measure),
                opacity: rule.opacity,
                visible: rule.visible,
            };
        }
    }
    PointStyle::base()
}
