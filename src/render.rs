//! Renderer seam. The session emits [`Directive`]s; implementations draw
//! them. [`RecordingRenderer`] keeps the resulting scene in memory and is
//! both the test double and the demo player's surface.

use std::collections::BTreeMap;

use crate::models::{Activity, Measure, PointId, PointSymbol};
use crate::parsing::CurvePoint;
use crate::services::estimator::EstimateAnnotation;
use crate::services::session::Directive;
use crate::visual::PointStyle;

/// Drawing surface the session talks to, one method per directive.
pub trait Renderer {
    fn enter_point(
        &mut self,
        id: PointId,
        timestamp: qtty::Seconds,
        value: f64,
        symbol: PointSymbol,
        style: &PointStyle,
    );
    fn remove_point(&mut self, id: PointId);
    fn restyle_point(&mut self, id: PointId, style: &PointStyle);
    fn set_caption(&mut self, text: &str);
    fn set_countdown(&mut self, activity: Activity, remaining: u32);
    fn set_tally(&mut self, activity: Activity, tally: u32);
    fn clear_countdown(&mut self);
    fn show_annotation(&mut self, annotation: &EstimateAnnotation);
    fn show_curve(&mut self, activity: Activity, measure: Measure, points: &[CurvePoint]);
    fn hide_curve(&mut self, activity: Activity, measure: Measure);
    fn show_tooltip(&mut self, id: PointId, text: &str);
    fn hide_tooltip(&mut self);
    fn set_trigger_enabled(&mut self, enabled: bool);
    fn hide_skip(&mut self);
    fn enable_zoom_pan(&mut self);
    fn show_legend(&mut self);
    fn show_controls(&mut self);
}

/// Replays a directive batch onto a renderer, in order.
pub fn apply(renderer: &mut dyn Renderer, directives: &[Directive]) {
    for directive in directives {
        match directive {
            Directive::EnterPoint {
                id,
                timestamp,
                value,
                symbol,
                style,
            } => renderer.enter_point(*id, *timestamp, *value, *symbol, style),
            Directive::RemovePoint { id } => renderer.remove_point(*id),
            Directive::RestylePoint { id, style } => renderer.restyle_point(*id, style),
            Directive::SetCaption(text) => renderer.set_caption(text),
            Directive::SetCountdown {
                activity,
                remaining,
            } => renderer.set_countdown(*activity, *remaining),
            Directive::SetTally { activity, tally } => renderer.set_tally(*activity, *tally),
            Directive::ClearCountdown => renderer.clear_countdown(),
            Directive::ShowAnnotation(annotation) => renderer.show_annotation(annotation),
            Directive::ShowCurve {
                activity,
                measure,
                points,
            } => renderer.show_curve(*activity, *measure, points),
            Directive::HideCurve { activity, measure } => {
                renderer.hide_curve(*activity, *measure)
            }
            Directive::ShowTooltip { id, text } => renderer.show_tooltip(*id, text),
            Directive::HideTooltip => renderer.hide_tooltip(),
            Directive::SetTriggerEnabled(enabled) => renderer.set_trigger_enabled(*enabled),
            Directive::HideSkip => renderer.hide_skip(),
            Directive::EnableZoomPan => renderer.enable_zoom_pan(),
            Directive::ShowLegend => renderer.show_legend(),
            Directive::ShowControls => renderer.show_controls(),
        }
    }
}

/// One point as currently drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPoint {
    pub timestamp: qtty::Seconds,
    pub value: f64,
    pub symbol: PointSymbol,
    pub style: PointStyle,
}

/// Headless scene graph.
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    pub points: BTreeMap<PointId, RenderedPoint>,
    pub caption: String,
    pub countdown: Option<(Activity, u32)>,
    pub tally: Option<(Activity, u32)>,
    pub annotations: Vec<EstimateAnnotation>,
    pub curves: BTreeMap<(Activity, Measure), Vec<CurvePoint>>,
    pub tooltip: Option<(PointId, String)>,
    pub trigger_enabled: bool,
    pub skip_visible: bool,
    pub zoom_pan_enabled: bool,
    pub legend_visible: bool,
    pub controls_visible: bool,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        RecordingRenderer {
            points: BTreeMap::new(),
            caption: String::new(),
            countdown: None,
            tally: None,
            annotations: Vec::new(),
            curves: BTreeMap::new(),
            tooltip: None,
            trigger_enabled: true,
            skip_visible: true,
            zoom_pan_enabled: false,
            legend_visible: false,
            controls_visible: false,
        }
    }

    /// Points currently drawn and visible.
    pub fn visible_points(&self) -> usize {
        self.points.values().filter(|p| p.style.visible).count()
    }
}

impl Default for RecordingRenderer {
    fn default() -> Self {
        RecordingRenderer::new()
    }
}

impl Renderer for RecordingRenderer {
    fn enter_point(
        &mut self,
        id: PointId,
        timestamp: qtty::Seconds,
        value: f64,
        symbol: PointSymbol,
        style: &PointStyle,
    ) {
        self.points.insert(
            id,
            RenderedPoint {
                timestamp,
                value,
                symbol,
                style: style.clone(),
            },
        );
    }

    fn remove_point(&mut self, id: PointId) {
        self.points.remove(&id);
    }

    fn restyle_point(&mut self, id: PointId, style: &PointStyle) {
        if let Some(point) = self.points.get_mut(&id) {
            point.style = style.clone();
        }
    }

    fn set_caption(&mut self, text: &str) {
        self.caption = text.to_string();
    }

    fn set_countdown(&mut self, activity: Activity, remaining: u32) {
        self.countdown = Some((activity, remaining));
    }

    fn set_tally(&mut self, activity: Activity, tally: u32) {
        self.tally = Some((activity, tally));
    }

    fn clear_countdown(&mut self) {
        self.countdown = None;
        self.tally = None;
    }

    fn show_annotation(&mut self, annotation: &EstimateAnnotation) {
        self.annotations.push(annotation.clone());
    }

    fn show_curve(&mut self, activity: Activity, measure: Measure, points: &[CurvePoint]) {
        self.curves.insert((activity, measure), points.to_vec());
    }

    fn hide_curve(&mut self, activity: Activity, measure: Measure) {
        self.curves.remove(&(activity, measure));
    }

    fn show_tooltip(&mut self, id: PointId, text: &str) {
        self.tooltip = Some((id, text.to_string()));
    }

    fn hide_tooltip(&mut self) {
        self.tooltip = None;
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.trigger_enabled = enabled;
    }

    fn hide_skip(&mut self) {
        self.skip_visible = false;
    }

    fn enable_zoom_pan(&mut self) {
        self.zoom_pan_enabled = true;
    }

    fn show_legend(&mut self) {
        self.legend_visible = true;
    }

    fn show_controls(&mut self) {
        self.controls_visible = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::visual::{PointStyle, BASE_FILL};

    fn enter(id: PointId) -> Directive {
        Directive::EnterPoint {
            id,
            timestamp: qtty::Seconds::new(0.0),
            value: 70.0,
            symbol: PointSymbol::Circle,
            style: PointStyle::base(),
        }
    }

    #[test]
    fn test_apply_enter_restyle_remove() {
        let mut renderer = RecordingRenderer::new();
        let id = PointId::new(Activity::Rest, 0);
        let other = PointId::new(Activity::Rest, 1);

        apply(&mut renderer, &[enter(id), enter(other)]);
        assert_eq!(renderer.points.len(), 2);
        assert_eq!(renderer.points[&id].style.fill, BASE_FILL);

        let restyled = PointStyle {
            fill: "#e41a1c".to_string(),
            opacity: 0.9,
            visible: true,
        };
        apply(
            &mut renderer,
            &[
                Directive::RestylePoint {
                    id,
                    style: restyled.clone(),
                },
                Directive::RemovePoint { id: other },
            ],
        );
        assert_eq!(renderer.points.len(), 1);
        assert_eq!(renderer.points[&id].style, restyled);
    }

    #[test]
    fn test_apply_chrome_directives() {
        let mut renderer = RecordingRenderer::new();
        assert!(renderer.skip_visible);
        assert!(!renderer.legend_visible);

        apply(
            &mut renderer,
            &[
                Directive::SetCaption("hello".to_string()),
                Directive::HideSkip,
                Directive::ShowLegend,
                Directive::ShowControls,
                Directive::EnableZoomPan,
                Directive::SetTriggerEnabled(false),
            ],
        );

        assert_eq!(renderer.caption, "hello");
        assert!(!renderer.skip_visible);
        assert!(renderer.legend_visible);
        assert!(renderer.controls_visible);
        assert!(renderer.zoom_pan_enabled);
        assert!(!renderer.trigger_enabled);
    }

    #[test]
    fn test_countdown_lifecycle() {
        let mut renderer = RecordingRenderer::new();
        apply(
            &mut renderer,
            &[
                Directive::SetCountdown {
                    activity: Activity::Running,
                    remaining: 5,
                },
                Directive::SetTally {
                    activity: Activity::Running,
                    tally: 3,
                },
            ],
        );
        assert_eq!(renderer.countdown, Some((Activity::Running, 5)));
        assert_eq!(renderer.tally, Some((Activity::Running, 3)));

        apply(&mut renderer, &[Directive::ClearCountdown]);
        assert!(renderer.countdown.is_none());
        assert!(renderer.tally.is_none());
    }

    #[test]
    fn test_invisible_points_are_not_counted() {
        let mut renderer = RecordingRenderer::new();
        let id = PointId::new(Activity::Rest, 0);
        apply(&mut renderer, &[enter(id)]);
        assert_eq!(renderer.visible_points(), 1);

        let hidden = PointStyle {
            visible: false,
            ..PointStyle::base()
        };
        apply(&mut renderer, &[Directive::RestylePoint { id, style: hidden }]);
        assert_eq!(renderer.visible_points(), 0);
        assert_eq!(renderer.points.len(), 1);
    }
}
