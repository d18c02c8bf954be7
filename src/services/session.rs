//! Session orchestration: routes UI intents to the estimator, the
//! narrative sequencer, and the point feed, and emits render directives.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{Activity, Dataset, Measure, PointId, PointSymbol};
use crate::parsing::{CurvePoint, RegressionSet};
use crate::services::chart::{compute_chart_data, ChartData};
use crate::services::estimator::{ClickTimingEstimator, EstimateAnnotation, EstimatorEvent};
use crate::services::feed::{FeedBatch, PointFeed};
use crate::services::narrative::{NarrativeSequencer, StepOutcome};
use crate::visual::{style_for, PointStyle, StyleRule, BASE_FILL};

/// Which machine currently owns the primary trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Estimating,
    Narrating,
    Interactive,
}

/// Legend switches, all enabled by default.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    disabled_activities: BTreeSet<Activity>,
    disabled_measures: BTreeSet<Measure>,
    regression: bool,
}

impl FilterState {
    pub fn activity_enabled(&self, activity: Activity) -> bool {
        !self.disabled_activities.contains(&activity)
    }

    pub fn measure_enabled(&self, measure: Measure) -> bool {
        !self.disabled_measures.contains(&measure)
    }

    pub fn regression_enabled(&self) -> bool {
        self.regression
    }

    fn set_activity(&mut self, activity: Activity, enabled: bool) {
        if enabled {
            self.disabled_activities.remove(&activity);
        } else {
            self.disabled_activities.insert(activity);
        }
    }

    fn set_measure(&mut self, measure: Measure, enabled: bool) {
        if enabled {
            self.disabled_measures.remove(&measure);
        } else {
            self.disabled_measures.insert(measure);
        }
    }
}

/// One legend switch flipping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterToggle {
    Activity(Activity, bool),
    Measure(Measure, bool),
    Regression(bool),
}

/// Intents arriving from the UI collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// The primary button.
    TriggerPressed,
    /// The skip affordance.
    SkipPressed,
    /// New per-press reveal amount from the quantity slider.
    SliderChanged(i64),
    FilterChanged(FilterToggle),
    HoverStart(PointId),
    HoverEnd,
}

/// Rendering instructions emitted by the session.
///
/// The session never touches a drawing surface itself; a renderer replays
/// these in order.
#[derive(Debug, Clone, PartialEq)]
pub enum Directive {
    EnterPoint {
        id: PointId,
        timestamp: qtty::Seconds,
        value: f64,
        symbol: PointSymbol,
        style: PointStyle,
    },
    RemovePoint { id: PointId },
    RestylePoint { id: PointId, style: PointStyle },
    SetCaption(String),
    SetCountdown { activity: Activity, remaining: u32 },
    SetTally { activity: Activity, tally: u32 },
    ClearCountdown,
    ShowAnnotation(EstimateAnnotation),
    ShowCurve {
        activity: Activity,
        measure: Measure,
        points: Vec<CurvePoint>,
    },
    HideCurve { activity: Activity, measure: Measure },
    ShowTooltip { id: PointId, text: String },
    HideTooltip,
    SetTriggerEnabled(bool),
    HideSkip,
    EnableZoomPan,
    ShowLegend,
    ShowControls,
}

/// Session tunables, filled in from configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionSettings {
    /// Points revealed per activity when the narrative opens.
    pub initial_reveal: usize,
    /// Per-press reveal amount until the slider changes it.
    pub default_reveal_step: i64,
    /// Quiet period after each visual transition.
    pub settle_secs: f64,
    /// Pause between the last estimate and the narrative opening.
    pub handoff_delay_secs: f64,
    pub intro_caption: String,
    /// Prefix composed with the active condition's label.
    pub estimator_prompt: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        SessionSettings {
            initial_reveal: 30,
            default_reveal_step: 10,
            settle_secs: 0.75,
            handoff_delay_secs: 1.5,
            intro_caption: "Heart and breathing rates, sampled across three activities."
                .to_string(),
            estimator_prompt: "Tap the button along with the pulse you would expect during"
                .to_string(),
        }
    }
}

/// Owns the three state machines and the loaded data for one viewing.
#[derive(Debug)]
pub struct VizSession {
    dataset: Dataset,
    chart: ChartData,
    feed: PointFeed,
    narrative: NarrativeSequencer,
    estimator: Option<ClickTimingEstimator>,
    regression: RegressionSet,
    filters: FilterState,
    settings: SessionSettings,
    phase: Phase,
    active_rules: Vec<StyleRule>,
    reveal_step: i64,
    settle_until: Option<f64>,
    handoff_at: Option<f64>,
    shown_curves: BTreeSet<(Activity, Measure)>,
    started: bool,
    initial_revealed: bool,
}

impl VizSession {
    pub fn new(
        dataset: Dataset,
        narrative: NarrativeSequencer,
        estimator: Option<ClickTimingEstimator>,
        regression: RegressionSet,
        settings: SessionSettings,
    ) -> Self {
        let chart = compute_chart_data(&dataset);
        let feed = PointFeed::new(&dataset);
        let phase = match &estimator {
            Some(est) if !est.is_finished() => Phase::Estimating,
            _ => Phase::Narrating,
        };
        let reveal_step = settings.default_reveal_step;
        VizSession {
            dataset,
            chart,
            feed,
            narrative,
            estimator,
            regression,
            filters: FilterState::default(),
            settings,
            phase,
            active_rules: Vec::new(),
            reveal_step,
            settle_until: None,
            handoff_at: None,
            shown_curves: BTreeSet::new(),
            started: false,
            initial_revealed: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn chart(&self) -> &ChartData {
        &self.chart
    }

    pub fn feed(&self) -> &PointFeed {
        &self.feed
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn reveal_step(&self) -> i64 {
        self.reveal_step
    }

    pub fn annotations(&self) -> &[EstimateAnnotation] {
        self.estimator.as_ref().map_or(&[], |e| e.annotations())
    }

    /// Steps applied so far, for a "step k of n" indicator.
    pub fn narrative_step(&self) -> usize {
        self.narrative.current_step()
    }

    pub fn total_steps(&self) -> usize {
        self.narrative.total_steps()
    }

    /// Opens the session. Idempotent; the first call decides between the
    /// estimator stage and the narrative.
    pub fn start(&mut self, _now: qtty::Seconds) -> Vec<Directive> {
        if self.started {
            return vec![];
        }
        self.started = true;
        match self.phase {
            Phase::Estimating => {
                let mut directives = vec![Directive::SetTriggerEnabled(true)];
                if let Some(activity) = self.estimator.as_ref().and_then(|e| e.active_condition())
                {
                    directives.push(Directive::SetCaption(self.condition_prompt(activity)));
                }
                directives
            }
            _ => self.begin_narrative(),
        }
    }

    /// Routes one UI intent.
    pub fn handle(&mut self, event: InputEvent, now: qtty::Seconds) -> Vec<Directive> {
        match event {
            InputEvent::TriggerPressed => self.on_trigger(now),
            InputEvent::SkipPressed => self.on_skip(now),
            InputEvent::SliderChanged(step) => {
                self.reveal_step = step;
                vec![]
            }
            InputEvent::FilterChanged(toggle) => self.on_filter(toggle),
            InputEvent::HoverStart(id) => self.on_hover(id),
            InputEvent::HoverEnd => vec![Directive::HideTooltip],
        }
    }

    /// Advances clocks: countdown, handoff pause, and settle window.
    pub fn tick(&mut self, now: qtty::Seconds) -> Vec<Directive> {
        let mut directives = Vec::new();

        if self.phase == Phase::Estimating {
            let events = match self.estimator.as_mut() {
                Some(est) => est.tick(now),
                None => vec![],
            };
            directives.extend(self.apply_estimator_events(events, now));

            if let Some(at) = self.handoff_at {
                if now.value() >= at {
                    self.handoff_at = None;
                    directives.extend(self.begin_narrative());
                }
            }
        }

        if let Some(until) = self.settle_until {
            if now.value() >= until {
                self.settle_until = None;
                directives.push(Directive::SetTriggerEnabled(true));
            }
        }

        directives
    }

    // ---- trigger routing ----

    fn on_trigger(&mut self, now: qtty::Seconds) -> Vec<Directive> {
        if self.phase == Phase::Estimating {
            let events = match self.estimator.as_mut() {
                Some(est) => est.trigger(now),
                None => vec![],
            };
            return self.apply_estimator_events(events, now);
        }

        // Presses inside the settle window are dropped, not queued.
        if self.is_settling(now) {
            return vec![];
        }

        match self.phase {
            Phase::Narrating => {
                let outcome = self.narrative.advance();
                self.apply_step_outcome(outcome, now)
            }
            Phase::Interactive => {
                let step = self.reveal_step;
                let mut directives = Vec::new();
                let activities: Vec<Activity> = self.dataset.activities().collect();
                for activity in activities {
                    if !self.filters.activity_enabled(activity) {
                        continue;
                    }
                    let batch = self.feed.reveal(activity, step);
                    directives.extend(self.batch_directives(&batch));
                }
                if !directives.is_empty() {
                    directives.extend(self.begin_settle(now));
                }
                directives
            }
            Phase::Estimating => vec![],
        }
    }

    fn on_skip(&mut self, now: qtty::Seconds) -> Vec<Directive> {
        let mut directives = Vec::new();

        if self.phase == Phase::Estimating {
            if let Some(est) = self.estimator.as_mut() {
                est.cancel();
            }
            self.handoff_at = None;
            directives.push(Directive::ClearCountdown);
            directives.extend(self.reveal_initial());
            self.phase = Phase::Narrating;
        }

        let outcome = self.narrative.skip();
        directives.extend(self.apply_step_outcome(outcome, now));
        directives
    }

    fn apply_step_outcome(&mut self, outcome: StepOutcome, now: qtty::Seconds) -> Vec<Directive> {
        match outcome {
            StepOutcome::Applied {
                caption,
                rules,
                entered_interactive,
                ..
            } => {
                self.active_rules = rules;
                let mut directives = vec![Directive::SetCaption(caption)];
                directives.extend(self.restyle_all());
                directives.extend(self.begin_settle(now));
                if entered_interactive {
                    directives.extend(self.handoff_directives());
                }
                directives
            }
            StepOutcome::Inactive => vec![],
        }
    }

    fn apply_estimator_events(
        &mut self,
        events: Vec<EstimatorEvent>,
        now: qtty::Seconds,
    ) -> Vec<Directive> {
        let mut directives = Vec::new();
        for event in events {
            match event {
                EstimatorEvent::WindowStarted {
                    activity,
                    remaining,
                } => {
                    directives.push(Directive::SetCountdown {
                        activity,
                        remaining,
                    });
                    directives.push(Directive::SetTally { activity, tally: 0 });
                }
                EstimatorEvent::TallyChanged { activity, tally } => {
                    directives.push(Directive::SetTally { activity, tally });
                }
                EstimatorEvent::CountdownTick {
                    activity,
                    remaining,
                } => {
                    directives.push(Directive::SetCountdown {
                        activity,
                        remaining,
                    });
                }
                EstimatorEvent::WindowClosed { annotation, next } => {
                    directives.push(Directive::ClearCountdown);
                    directives.push(Directive::ShowAnnotation(annotation));
                    match next {
                        Some(activity) => {
                            directives
                                .push(Directive::SetCaption(self.condition_prompt(activity)));
                        }
                        None => {
                            self.handoff_at =
                                Some(now.value() + self.settings.handoff_delay_secs);
                        }
                    }
                }
            }
        }
        directives
    }

    // ---- narrative opening and styling ----

    fn begin_narrative(&mut self) -> Vec<Directive> {
        self.phase = Phase::Narrating;
        let mut directives = self.reveal_initial();
        directives.push(Directive::SetCaption(self.settings.intro_caption.clone()));
        if self.narrative.is_interactive() {
            // Degenerate scripts hand over immediately.
            directives.extend(self.handoff_directives());
        }
        directives
    }

    fn reveal_initial(&mut self) -> Vec<Directive> {
        if self.initial_revealed {
            return vec![];
        }
        self.initial_revealed = true;
        let count = self.settings.initial_reveal as i64;
        let mut directives = Vec::new();
        let activities: Vec<Activity> = self.dataset.activities().collect();
        for activity in activities {
            let batch = self.feed.reveal(activity, count);
            directives.extend(self.batch_directives(&batch));
        }
        directives
    }

    fn handoff_directives(&mut self) -> Vec<Directive> {
        if !self.narrative.take_handoff() {
            return vec![];
        }
        self.phase = Phase::Interactive;
        let mut directives = vec![
            Directive::HideSkip,
            Directive::ShowLegend,
            Directive::ShowControls,
            Directive::EnableZoomPan,
        ];
        directives.extend(self.sync_curves());
        directives
    }

    /// Style of one point under the active rules and legend filters.
    fn effective_style(&self, activity: Activity, measure: Measure) -> PointStyle {
        let mut style = style_for(&self.active_rules, activity, measure);
        if !self.filters.activity_enabled(activity) {
            style.fill = BASE_FILL.to_string();
        }
        if !self.filters.measure_enabled(measure) {
            style.visible = false;
        }
        style
    }

    fn batch_directives(&self, batch: &FeedBatch) -> Vec<Directive> {
        let mut directives = Vec::new();
        for &id in &batch.revealed {
            if let Some(sample) = self.dataset.sample(id) {
                directives.push(Directive::EnterPoint {
                    id,
                    timestamp: sample.timestamp,
                    value: sample.value,
                    symbol: sample.measure.symbol(),
                    style: self.effective_style(sample.activity, sample.measure),
                });
            }
        }
        for &id in &batch.retracted {
            directives.push(Directive::RemovePoint { id });
        }
        directives
    }

    fn restyle_all(&self) -> Vec<Directive> {
        self.feed
            .on_screen_ids()
            .into_iter()
            .filter_map(|id| {
                self.dataset.sample(id).map(|sample| Directive::RestylePoint {
                    id,
                    style: self.effective_style(sample.activity, sample.measure),
                })
            })
            .collect()
    }

    // ---- filters, curves, tooltips ----

    fn on_filter(&mut self, toggle: FilterToggle) -> Vec<Directive> {
        match toggle {
            FilterToggle::Activity(activity, enabled) => {
                self.filters.set_activity(activity, enabled);
            }
            FilterToggle::Measure(measure, enabled) => {
                self.filters.set_measure(measure, enabled);
            }
            FilterToggle::Regression(enabled) => {
                self.filters.regression = enabled;
            }
        }
        // Legend controls only exist in the interactive chart; earlier
        // toggles just update state.
        if self.phase != Phase::Interactive {
            return vec![];
        }
        let mut directives = match toggle {
            FilterToggle::Regression(_) => vec![],
            _ => self.restyle_all(),
        };
        directives.extend(self.sync_curves());
        directives
    }

    /// Reconciles shown curves against the filter state.
    fn sync_curves(&mut self) -> Vec<Directive> {
        let mut desired: BTreeSet<(Activity, Measure)> = BTreeSet::new();
        if self.filters.regression_enabled() {
            for curve in &self.regression.curves {
                if self.filters.activity_enabled(curve.activity)
                    && self.filters.measure_enabled(curve.measure)
                {
                    desired.insert((curve.activity, curve.measure));
                }
            }
        }

        let mut directives = Vec::new();
        for &(activity, measure) in self.shown_curves.difference(&desired) {
            directives.push(Directive::HideCurve { activity, measure });
        }
        for &(activity, measure) in desired.difference(&self.shown_curves) {
            if let Some(curve) = self.regression.curve(activity, measure) {
                directives.push(Directive::ShowCurve {
                    activity,
                    measure,
                    points: curve.points.clone(),
                });
            }
        }
        self.shown_curves = desired;
        directives
    }

    fn on_hover(&self, id: PointId) -> Vec<Directive> {
        if !self.feed.is_on_screen(id) {
            return vec![];
        }
        match self.dataset.sample(id) {
            Some(sample) => vec![Directive::ShowTooltip {
                id,
                text: sample.tooltip_text(),
            }],
            None => vec![],
        }
    }

    // ---- settle window ----

    fn is_settling(&self, now: qtty::Seconds) -> bool {
        self.settle_until.map_or(false, |until| now.value() < until)
    }

    fn begin_settle(&mut self, now: qtty::Seconds) -> Vec<Directive> {
        self.settle_until = Some(now.value() + self.settings.settle_secs);
        vec![Directive::SetTriggerEnabled(false)]
    }

    fn condition_prompt(&self, activity: Activity) -> String {
        format!("{} {}", self.settings.estimator_prompt, activity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sample;
    use crate::services::estimator::EstimatorSettings;
    use crate::services::narrative::default_script;

    fn create_test_dataset(per_activity: usize) -> Dataset {
        let mut samples = Vec::new();
        for activity in Activity::ALL {
            for i in 0..per_activity {
                let measure = if i % 2 == 0 {
                    Measure::HeartRate
                } else {
                    Measure::BreathingRate
                };
                samples.push(Sample::new(
                    qtty::Seconds::new(i as f64 * 5.0),
                    activity,
                    measure,
                    70.0 + i as f64,
                ));
            }
        }
        Dataset::from_samples(samples)
    }

    fn narrating_session(per_activity: usize) -> VizSession {
        VizSession::new(
            create_test_dataset(per_activity),
            NarrativeSequencer::new(default_script()),
            None,
            RegressionSet::default(),
            SessionSettings::default(),
        )
    }

    fn secs(v: f64) -> qtty::Seconds {
        qtty::Seconds::new(v)
    }

    fn count_enters(directives: &[Directive]) -> usize {
        directives
            .iter()
            .filter(|d| matches!(d, Directive::EnterPoint { .. }))
            .count()
    }

    #[test]
    fn test_start_reveals_initial_points() {
        let mut session = narrating_session(40);
        let directives = session.start(secs(0.0));

        // 30 per activity, plus the intro caption.
        assert_eq!(count_enters(&directives), 90);
        assert!(directives
            .iter()
            .any(|d| matches!(d, Directive::SetCaption(_))));
        assert_eq!(session.phase(), Phase::Narrating);
        assert_eq!(session.feed().total_on_screen(), 90);
    }

    #[test]
    fn test_start_is_idempotent() {
        let mut session = narrating_session(10);
        session.start(secs(0.0));
        assert!(session.start(secs(1.0)).is_empty());
    }

    #[test]
    fn test_triggers_walk_story_then_hand_off() {
        let mut session = narrating_session(40);
        session.start(secs(0.0));

        let mut now = 10.0;
        for _ in 0..4 {
            let directives = session.handle(InputEvent::TriggerPressed, secs(now));
            assert!(directives
                .iter()
                .any(|d| matches!(d, Directive::SetCaption(_))));
            assert_eq!(session.phase(), Phase::Narrating);
            now += 5.0;
        }

        let directives = session.handle(InputEvent::TriggerPressed, secs(now));
        assert_eq!(session.phase(), Phase::Interactive);
        assert!(directives.contains(&Directive::ShowLegend));
        assert!(directives.contains(&Directive::ShowControls));
        assert!(directives.contains(&Directive::EnableZoomPan));
        assert!(directives.contains(&Directive::HideSkip));
    }

    #[test]
    fn test_settle_window_drops_rapid_triggers() {
        let mut session = narrating_session(40);
        session.start(secs(0.0));

        let first = session.handle(InputEvent::TriggerPressed, secs(10.0));
        assert!(!first.is_empty());
        assert_eq!(session.narrative_step(), 1);

        // 0.2 s later: inside the 0.75 s settle window.
        let second = session.handle(InputEvent::TriggerPressed, secs(10.2));
        assert!(second.is_empty());
        assert_eq!(session.narrative_step(), 1);

        // After the window a trigger lands again.
        let third = session.handle(InputEvent::TriggerPressed, secs(11.0));
        assert!(!third.is_empty());
        assert_eq!(session.narrative_step(), 2);
    }

    #[test]
    fn test_tick_re_enables_trigger_after_settle() {
        let mut session = narrating_session(40);
        session.start(secs(0.0));
        let directives = session.handle(InputEvent::TriggerPressed, secs(10.0));
        assert!(directives.contains(&Directive::SetTriggerEnabled(false)));

        assert!(session.tick(secs(10.3)).is_empty());
        let after = session.tick(secs(11.0));
        assert_eq!(after, vec![Directive::SetTriggerEnabled(true)]);
    }

    #[test]
    fn test_interactive_trigger_reveals_more_points() {
        let mut session = narrating_session(40);
        session.start(secs(0.0));
        let mut now = 10.0;
        for _ in 0..5 {
            session.handle(InputEvent::TriggerPressed, secs(now));
            now += 5.0;
        }
        assert_eq!(session.phase(), Phase::Interactive);

        let before = session.feed().total_on_screen();
        let directives = session.handle(InputEvent::TriggerPressed, secs(now));
        // Default step of 10 across three activities.
        assert_eq!(count_enters(&directives), 30);
        assert_eq!(session.feed().total_on_screen(), before + 30);
    }

    #[test]
    fn test_slider_controls_reveal_and_retract() {
        let mut session = narrating_session(40);
        session.start(secs(0.0));
        session.handle(InputEvent::SkipPressed, secs(1.0));
        assert_eq!(session.phase(), Phase::Interactive);

        session.handle(InputEvent::SliderChanged(-5), secs(2.0));
        let directives = session.handle(InputEvent::TriggerPressed, secs(3.0));
        let removes = directives
            .iter()
            .filter(|d| matches!(d, Directive::RemovePoint { .. }))
            .count();
        assert_eq!(removes, 15);
        assert_eq!(session.feed().total_on_screen(), 90 - 15);
    }

    #[test]
    fn test_skip_from_estimating_cancels_and_hands_off() {
        let estimator = ClickTimingEstimator::new(EstimatorSettings::default());
        let mut session = VizSession::new(
            create_test_dataset(40),
            NarrativeSequencer::new(default_script()),
            Some(estimator),
            RegressionSet::default(),
            SessionSettings::default(),
        );
        session.start(secs(0.0));
        assert_eq!(session.phase(), Phase::Estimating);

        let directives = session.handle(InputEvent::SkipPressed, secs(1.0));
        assert_eq!(session.phase(), Phase::Interactive);
        assert!(directives.contains(&Directive::ClearCountdown));
        assert!(directives.contains(&Directive::ShowLegend));
        assert!(count_enters(&directives) > 0);

        // Release the settle window, then confirm the cancelled estimator
        // stays quiet forever.
        session.tick(secs(2.0));
        assert!(session.tick(secs(100.0)).is_empty());
        assert!(session.annotations().is_empty());
    }

    #[test]
    fn test_measure_filter_hides_points() {
        let mut session = narrating_session(40);
        session.start(secs(0.0));
        session.handle(InputEvent::SkipPressed, secs(1.0));

        let directives = session.handle(
            InputEvent::FilterChanged(FilterToggle::Measure(Measure::BreathingRate, false)),
            secs(2.0),
        );
        let hidden = directives
            .iter()
            .filter(|d| matches!(d, Directive::RestylePoint { style, .. } if !style.visible))
            .count();
        assert_eq!(hidden, 45);
    }

    #[test]
    fn test_filter_before_interactive_emits_nothing() {
        let mut session = narrating_session(40);
        session.start(secs(0.0));
        let directives = session.handle(
            InputEvent::FilterChanged(FilterToggle::Activity(Activity::Rest, false)),
            secs(1.0),
        );
        assert!(directives.is_empty());
        assert!(!session.filters().activity_enabled(Activity::Rest));
    }

    #[test]
    fn test_hover_shows_tooltips_for_on_screen_points() {
        let mut session = narrating_session(40);
        session.start(secs(0.0));

        let on_screen = PointId::new(Activity::Rest, 0);
        let directives = session.handle(InputEvent::HoverStart(on_screen), secs(1.0));
        assert!(matches!(
            directives.as_slice(),
            [Directive::ShowTooltip { id, .. }] if *id == on_screen
        ));

        let hidden = PointId::new(Activity::Rest, 35);
        assert!(session
            .handle(InputEvent::HoverStart(hidden), secs(1.0))
            .is_empty());

        assert_eq!(
            session.handle(InputEvent::HoverEnd, secs(1.0)),
            vec![Directive::HideTooltip]
        );
    }
}
