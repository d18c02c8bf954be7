//! Incremental point feed: per-activity reveal cursors and on-screen sets.

use std::collections::BTreeMap;

use crate::models::{Activity, Dataset, PointId};

/// Reveal state for one activity's sample sequence.
#[derive(Debug, Clone)]
struct ActivityCursor {
    /// Samples 0..cursor have been revealed at least once.
    cursor: usize,
    /// Indices currently on screen, in reveal order.
    on_screen: Vec<usize>,
    /// Total samples available for this activity.
    len: usize,
}

/// Result of one reveal or retract call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeedBatch {
    pub revealed: Vec<PointId>,
    pub retracted: Vec<PointId>,
}

impl FeedBatch {
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty() && self.retracted.is_empty()
    }
}

/// Tracks which samples each activity has put on screen.
///
/// The cursor only ever advances: a retracted sample stays consumed, so a
/// later positive reveal continues with samples the chart has never shown.
#[derive(Debug, Clone)]
pub struct PointFeed {
    cursors: BTreeMap<Activity, ActivityCursor>,
}

impl PointFeed {
    /// Builds a feed over the activities present in a dataset.
    pub fn new(dataset: &Dataset) -> Self {
        let cursors = dataset
            .groups()
            .iter()
            .map(|group| {
                (
                    group.activity,
                    ActivityCursor {
                        cursor: 0,
                        on_screen: Vec::new(),
                        len: group.samples.len(),
                    },
                )
            })
            .collect();
        PointFeed { cursors }
    }

    /// Reveals (`count > 0`) or retracts (`count < 0`) points for one activity.
    ///
    /// Positive counts clamp to the unrevealed remainder; negative counts
    /// clamp to the on-screen set and remove the most recently revealed
    /// points first. Activities absent from the dataset are a no-op.
    pub fn reveal(&mut self, activity: Activity, count: i64) -> FeedBatch {
        let mut batch = FeedBatch::default();
        let state = match self.cursors.get_mut(&activity) {
            Some(state) => state,
            None => return batch,
        };

        if count > 0 {
            let take = (count as usize).min(state.len - state.cursor);
            for index in state.cursor..state.cursor + take {
                state.on_screen.push(index);
                batch.revealed.push(PointId::new(activity, index));
            }
            state.cursor += take;
        } else if count < 0 {
            let drop = (count.unsigned_abs() as usize).min(state.on_screen.len());
            for _ in 0..drop {
                if let Some(index) = state.on_screen.pop() {
                    batch.retracted.push(PointId::new(activity, index));
                }
            }
        }
        batch
    }

    /// Number of samples ever revealed for an activity.
    pub fn revealed_count(&self, activity: Activity) -> usize {
        self.cursors.get(&activity).map_or(0, |s| s.cursor)
    }

    /// Number of samples currently on screen for an activity.
    pub fn on_screen_count(&self, activity: Activity) -> usize {
        self.cursors.get(&activity).map_or(0, |s| s.on_screen.len())
    }

    /// Samples not yet revealed for an activity.
    pub fn remaining(&self, activity: Activity) -> usize {
        self.cursors.get(&activity).map_or(0, |s| s.len - s.cursor)
    }

    /// True once every sample of the activity has been revealed.
    pub fn is_exhausted(&self, activity: Activity) -> bool {
        self.remaining(activity) == 0
    }

    /// Whether a specific point is currently on screen.
    pub fn is_on_screen(&self, id: PointId) -> bool {
        self.cursors
            .get(&id.activity)
            .map_or(false, |s| s.on_screen.contains(&id.index))
    }

    /// All on-screen points, grouped by activity in canonical order.
    pub fn on_screen_ids(&self) -> Vec<PointId> {
        self.cursors
            .iter()
            .flat_map(|(activity, state)| {
                state
                    .on_screen
                    .iter()
                    .map(move |&index| PointId::new(*activity, index))
            })
            .collect()
    }

    /// Total points currently on screen across all activities.
    pub fn total_on_screen(&self) -> usize {
        self.cursors.values().map(|s| s.on_screen.len()).sum()
    }
}
