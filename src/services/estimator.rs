//! Click-timing estimator: tap-along windows that turn a tally into a
//! rough beats-per-minute estimate, one condition at a time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::Activity;

/// Length of one tap window.
pub const DEFAULT_WINDOW_SECS: f64 = 5.0;
/// Taps in a 5 s window scale to beats per minute.
pub const DEFAULT_BEAT_MULTIPLIER: f64 = 12.0;
/// Ceiling applied to estimates.
pub const DEFAULT_ESTIMATE_CAP: f64 = 200.0;

/// Tunables for the estimator stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimatorSettings {
    pub window_secs: f64,
    pub beat_multiplier: f64,
    pub estimate_cap: f64,
    /// Conditions measured, in order.
    pub conditions: Vec<Activity>,
}

impl Default for EstimatorSettings {
    fn default() -> Self {
        EstimatorSettings {
            window_secs: DEFAULT_WINDOW_SECS,
            beat_multiplier: DEFAULT_BEAT_MULTIPLIER,
            estimate_cap: DEFAULT_ESTIMATE_CAP,
            conditions: Activity::ALL.to_vec(),
        }
    }
}

/// Persistent record of one closed window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateAnnotation {
    pub activity: Activity,
    pub tally: u32,
    /// `min(tally * beat_multiplier, estimate_cap)` in beats per minute.
    pub estimate: f64,
    pub created_at: DateTime<Utc>,
}

/// State change emitted by a trigger or tick.
#[derive(Debug, Clone, PartialEq)]
pub enum EstimatorEvent {
    WindowStarted { activity: Activity, remaining: u32 },
    TallyChanged { activity: Activity, tally: u32 },
    CountdownTick { activity: Activity, remaining: u32 },
    WindowClosed {
        annotation: EstimateAnnotation,
        next: Option<Activity>,
    },
}

/// Runs one tap window per condition.
///
/// Time is an explicit parameter: the countdown is deadline state inspected
/// by [`tick`](ClickTimingEstimator::tick), never a timer of its own. A
/// cancelled estimator stays silent forever, so a stale window can never
/// close after the host has moved on.
#[derive(Debug, Clone)]
pub struct ClickTimingEstimator {
    settings: EstimatorSettings,
    condition_index: usize,
    window_start: Option<f64>,
    tally: u32,
    last_remaining: u32,
    annotations: Vec<EstimateAnnotation>,
    cancelled: bool,
}

impl ClickTimingEstimator {
    pub fn new(settings: EstimatorSettings) -> Self {
        ClickTimingEstimator {
            settings,
            condition_index: 0,
            window_start: None,
            tally: 0,
            last_remaining: 0,
            annotations: Vec::new(),
            cancelled: false,
        }
    }

    /// The condition currently being measured, if any remain.
    pub fn active_condition(&self) -> Option<Activity> {
        if self.cancelled {
            return None;
        }
        self.settings.conditions.get(self.condition_index).copied()
    }

    /// True once every condition has closed, or after a cancel.
    pub fn is_finished(&self) -> bool {
        self.active_condition().is_none()
    }

    /// Whether a tap window is currently counting down.
    pub fn window_open(&self) -> bool {
        self.window_start.is_some()
    }

    pub fn annotations(&self) -> &[EstimateAnnotation] {
        &self.annotations
    }

    /// Registers one tap. The first tap of a condition opens its window and
    /// counts toward the tally.
    pub fn trigger(&mut self, now: qtty::Seconds) -> Vec<EstimatorEvent> {
        // A press arriving after the deadline closes the window instead of
        // counting into it.
        let mut events = self.tick(now);
        let activity = match self.active_condition() {
            Some(activity) => activity,
            None => return events,
        };

        if self.window_start.is_none() {
            self.window_start = Some(now.value());
            self.tally = 0;
            self.last_remaining = self.settings.window_secs.ceil() as u32;
            events.push(EstimatorEvent::WindowStarted {
                activity,
                remaining: self.last_remaining,
            });
        }
        self.tally += 1;
        events.push(EstimatorEvent::TallyChanged {
            activity,
            tally: self.tally,
        });
        events
    }

    /// Advances the countdown, closing the window once its deadline passes.
    pub fn tick(&mut self, now: qtty::Seconds) -> Vec<EstimatorEvent> {
        let activity = match self.active_condition() {
            Some(activity) => activity,
            None => return vec![],
        };
        let start = match self.window_start {
            Some(start) => start,
            None => return vec![],
        };

        let elapsed = now.value() - start;
        if elapsed < self.settings.window_secs {
            let remaining = (self.settings.window_secs - elapsed).ceil() as u32;
            if remaining != self.last_remaining {
                self.last_remaining = remaining;
                return vec![EstimatorEvent::CountdownTick {
                    activity,
                    remaining,
                }];
            }
            return vec![];
        }

        let estimate = (self.tally as f64 * self.settings.beat_multiplier)
            .min(self.settings.estimate_cap);
        let annotation = EstimateAnnotation {
            activity,
            tally: self.tally,
            estimate,
            created_at: Utc::now(),
        };
        self.annotations.push(annotation.clone());
        self.window_start = None;
        self.tally = 0;
        self.condition_index += 1;
        vec![EstimatorEvent::WindowClosed {
            annotation,
            next: self.active_condition(),
        }]
    }

    /// Abandons the stage. No further windows open or close.
    pub fn cancel(&mut self) {
        self.cancelled = true;
        self.window_start = None;
    }
}
