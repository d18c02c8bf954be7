//! Scripted narrative sequencer: numbered steps, then interactive handoff.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::models::Measure;
use crate::visual::{FillChoice, StyleRule};

/// One stage of the scripted story: a caption and the rule table that
/// restyles every on-screen point while the stage is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeStep {
    pub caption: String,
    pub rules: Vec<StyleRule>,
}

/// Result of one trigger routed to the sequencer.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// A numbered step was applied. `index` is the 1-based step number;
    /// `entered_interactive` is true exactly when this step was the last.
    Applied {
        index: usize,
        caption: String,
        rules: Vec<StyleRule>,
        entered_interactive: bool,
    },
    /// The story is already over; triggers belong to the feed now.
    Inactive,
}

static DEFAULT_SCRIPT: Lazy<Vec<NarrativeStep>> = Lazy::new(|| {
    vec![
        NarrativeStep {
            caption: "Every observation starts as one gray point.".to_string(),
            rules: vec![StyleRule::default()],
        },
        NarrativeStep {
            caption: "Circles are heart rate, squares are breathing rate.".to_string(),
            rules: vec![
                StyleRule {
                    fill: FillChoice::ByMeasure,
                    opacity: 0.85,
                    ..StyleRule::default()
                },
            ],
        },
        NarrativeStep {
            caption: "Follow the heart: everything else fades back.".to_string(),
            rules: vec![
                StyleRule {
                    measure: Some(Measure::HeartRate),
                    fill: FillChoice::ByMeasure,
                    opacity: 0.9,
                    ..StyleRule::default()
                },
                StyleRule {
                    fill: FillChoice::Gray,
                    opacity: 0.08,
                    ..StyleRule::default()
                },
            ],
        },
        NarrativeStep {
            caption: "Each activity drives the heart differently.".to_string(),
            rules: vec![
                StyleRule {
                    measure: Some(Measure::HeartRate),
                    fill: FillChoice::ByActivity,
                    opacity: 0.9,
                    ..StyleRule::default()
                },
                StyleRule {
                    fill: FillChoice::Gray,
                    opacity: 0.08,
                    ..StyleRule::default()
                },
            ],
        },
        NarrativeStep {
            caption: "Now explore: every point colored by its activity.".to_string(),
            rules: vec![StyleRule {
                fill: FillChoice::ByActivity,
                ..StyleRule::default()
            }],
        },
    ]
});

/// The built-in five-step story.
pub fn default_script() -> Vec<NarrativeStep> {
    DEFAULT_SCRIPT.clone()
}

/// Walks a fixed list of steps, one per trigger, then hands the chart over
/// to interactive mode.
///
/// The handoff side effects (legend, controls, zoom) must run exactly once,
/// so they are claimed through [`take_handoff`](NarrativeSequencer::take_handoff)
/// rather than replayed on every call.
#[derive(Debug, Clone)]
pub struct NarrativeSequencer {
    steps: Vec<NarrativeStep>,
    applied: usize,
    interactive: bool,
    handoff_taken: bool,
    skip_spent: bool,
}

impl NarrativeSequencer {
    pub fn new(steps: Vec<NarrativeStep>) -> Self {
        let interactive = steps.is_empty();
        NarrativeSequencer {
            steps,
            applied: 0,
            interactive,
            handoff_taken: false,
            skip_spent: false,
        }
    }

    /// Number of steps applied so far.
    pub fn current_step(&self) -> usize {
        self.applied
    }

    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    /// Applies the next step, if any.
    pub fn advance(&mut self) -> StepOutcome {
        if self.interactive || self.applied >= self.steps.len() {
            return StepOutcome::Inactive;
        }
        let step = self.steps[self.applied].clone();
        self.applied += 1;
        if self.applied == self.steps.len() {
            self.interactive = true;
        }
        StepOutcome::Applied {
            index: self.applied,
            caption: step.caption,
            rules: step.rules,
            entered_interactive: self.interactive,
        }
    }

    /// Jumps straight to the terminal step, consuming the one skip allowance.
    ///
    /// Returns the terminal step as if it had been reached by triggers, or
    /// [`StepOutcome::Inactive`] when the story is already over or the skip
    /// was already used.
    pub fn skip(&mut self) -> StepOutcome {
        if self.interactive || self.skip_spent || self.steps.is_empty() {
            return StepOutcome::Inactive;
        }
        self.skip_spent = true;
        self.applied = self.steps.len();
        self.interactive = true;
        let last = self.steps[self.steps.len() - 1].clone();
        StepOutcome::Applied {
            index: self.applied,
            caption: last.caption,
            rules: last.rules,
            entered_interactive: true,
        }
    }

    /// Claims the one-time interactive handoff. True exactly once, and only
    /// after the story has ended.
    pub fn take_handoff(&mut self) -> bool {
        if self.interactive && !self.handoff_taken {
            self.handoff_taken = true;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(caption: &str) -> NarrativeStep {
        NarrativeStep {
            caption: caption.to_string(),
            rules: vec![StyleRule::default()],
        }
    }

    #[test]
    fn test_advance_walks_steps_in_order() {
        let mut seq = NarrativeSequencer::new(vec![step("one"), step("two"), step("three")]);
        assert_eq!(seq.total_steps(), 3);

        for expected in 1..=3 {
            match seq.advance() {
                StepOutcome::Applied {
                    index,
                    entered_interactive,
                    ..
                } => {
                    assert_eq!(index, expected);
                    assert_eq!(entered_interactive, expected == 3);
                }
                StepOutcome::Inactive => panic!("expected step {}", expected),
            }
        }
        assert!(seq.is_interactive());
        assert_eq!(seq.current_step(), 3);
    }

    #[test]
    fn test_advance_after_terminal_is_inactive() {
        let mut seq = NarrativeSequencer::new(vec![step("only")]);
        assert!(matches!(seq.advance(), StepOutcome::Applied { .. }));
        assert_eq!(seq.advance(), StepOutcome::Inactive);
        assert_eq!(seq.advance(), StepOutcome::Inactive);
    }

    #[test]
    fn test_skip_jumps_to_terminal_step() {
        let mut seq = NarrativeSequencer::new(vec![step("one"), step("two"), step("last")]);
        seq.advance();

        match seq.skip() {
            StepOutcome::Applied {
                index,
                caption,
                entered_interactive,
                ..
            } => {
                assert_eq!(index, 3);
                assert_eq!(caption, "last");
                assert!(entered_interactive);
            }
            StepOutcome::Inactive => panic!("skip should land on the terminal step"),
        }
        assert!(seq.is_interactive());
    }

    #[test]
    fn test_skip_is_single_use() {
        let mut seq = NarrativeSequencer::new(vec![step("one"), step("two")]);
        assert!(matches!(seq.skip(), StepOutcome::Applied { .. }));
        assert_eq!(seq.skip(), StepOutcome::Inactive);
    }

    #[test]
    fn test_skip_after_natural_finish_is_inactive() {
        let mut seq = NarrativeSequencer::new(vec![step("one")]);
        seq.advance();
        assert_eq!(seq.skip(), StepOutcome::Inactive);
    }

    #[test]
    fn test_handoff_fires_exactly_once() {
        let mut seq = NarrativeSequencer::new(vec![step("one")]);
        assert!(!seq.take_handoff());
        seq.advance();
        assert!(seq.take_handoff());
        assert!(!seq.take_handoff());
    }

    #[test]
    fn test_handoff_fires_once_after_skip() {
        let mut seq = NarrativeSequencer::new(vec![step("one"), step("two")]);
        seq.skip();
        assert!(seq.take_handoff());
        assert!(!seq.take_handoff());
    }

    #[test]
    fn test_empty_script_is_immediately_interactive() {
        let mut seq = NarrativeSequencer::new(vec![]);
        assert!(seq.is_interactive());
        assert_eq!(seq.advance(), StepOutcome::Inactive);
        assert_eq!(seq.skip(), StepOutcome::Inactive);
        assert!(seq.take_handoff());
    }

    #[test]
    fn test_default_script_shape() {
        let script = default_script();
        assert_eq!(script.len(), 5);
        assert!(script.iter().all(|s| !s.caption.is_empty()));
        assert!(script.iter().all(|s| !s.rules.is_empty()));
        // The terminal step colors everything by activity.
        let last = &script[script.len() - 1];
        assert_eq!(last.rules[0].fill, FillChoice::ByActivity);
        assert!(last.rules[0].activity.is_none());
        assert!(last.rules[0].measure.is_none());
    }
}
