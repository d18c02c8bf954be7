//! Loaded sample collections, partitioned by activity.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::models::sample::{Activity, PointId, Sample};

/// All samples recorded under one activity, in file order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActivityGroup {
    pub activity: Activity,
    pub samples: Vec<Sample>,
}

impl ActivityGroup {
    pub fn new(activity: Activity) -> Self {
        ActivityGroup {
            activity,
            samples: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// A loaded dataset plus its provenance.
///
/// Groups are kept in [`Activity::ALL`] order regardless of input order, so
/// iteration and reveal batches are deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    groups: Vec<ActivityGroup>,
    /// Raw CSV rows seen across all source files.
    pub source_rows: usize,
    /// Rows dropped as malformed during loading.
    pub dropped_rows: usize,
    /// SHA-256 over the source bytes, empty for in-memory datasets.
    pub checksum: String,
}

impl Dataset {
    /// Builds a dataset from already-expanded samples.
    ///
    /// Intended for tests and synthetic data; loader code goes through
    /// [`with_provenance`](Dataset::with_provenance) instead.
    pub fn from_samples(samples: Vec<Sample>) -> Self {
        Dataset::with_provenance(samples, 0, 0, String::new())
    }

    /// Builds a dataset and records where it came from.
    pub fn with_provenance(
        samples: Vec<Sample>,
        source_rows: usize,
        dropped_rows: usize,
        checksum: String,
    ) -> Self {
        let mut groups = Vec::new();
        for activity in Activity::ALL {
            let group_samples: Vec<Sample> = samples
                .iter()
                .filter(|s| s.activity == activity)
                .cloned()
                .collect();
            if !group_samples.is_empty() {
                groups.push(ActivityGroup {
                    activity,
                    samples: group_samples,
                });
            }
        }
        Dataset {
            groups,
            source_rows,
            dropped_rows,
            checksum,
        }
    }

    /// Activities present in this dataset, in canonical order.
    pub fn activities(&self) -> impl Iterator<Item = Activity> + '_ {
        self.groups.iter().map(|g| g.activity)
    }

    pub fn groups(&self) -> &[ActivityGroup] {
        &self.groups
    }

    /// Samples for one activity, empty if the activity is absent.
    pub fn samples(&self, activity: Activity) -> &[Sample] {
        self.groups
            .iter()
            .find(|g| g.activity == activity)
            .map(|g| g.samples.as_slice())
            .unwrap_or(&[])
    }

    /// Number of expanded samples for one activity.
    pub fn activity_len(&self, activity: Activity) -> usize {
        self.samples(activity).len()
    }

    /// Looks up a sample by its stable point identity.
    pub fn sample(&self, id: PointId) -> Option<&Sample> {
        self.samples(id.activity).get(id.index)
    }

    /// Total expanded samples across all activities.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.samples.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Computes the SHA-256 checksum of raw source bytes as a hex string.
pub fn compute_dataset_checksum(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::sample::Measure;

    fn sample(activity: Activity, index: usize) -> Sample {
        Sample::new(
            qtty::Seconds::new(index as f64),
            activity,
            Measure::HeartRate,
            60.0 + index as f64,
        )
    }

    #[test]
    fn test_groups_follow_canonical_order() {
        let samples = vec![
            sample(Activity::Running, 0),
            sample(Activity::TwoBack, 0),
            sample(Activity::Running, 1),
            sample(Activity::Rest, 0),
        ];
        let dataset = Dataset::from_samples(samples);
        let order: Vec<Activity> = dataset.activities().collect();
        assert_eq!(
            order,
            vec![Activity::TwoBack, Activity::Rest, Activity::Running]
        );
        assert_eq!(dataset.activity_len(Activity::Running), 2);
        assert_eq!(dataset.len(), 4);
    }

    #[test]
    fn test_absent_activity_is_empty() {
        let dataset = Dataset::from_samples(vec![sample(Activity::Rest, 0)]);
        assert!(dataset.samples(Activity::Running).is_empty());
        assert_eq!(dataset.activity_len(Activity::Running), 0);
        let order: Vec<Activity> = dataset.activities().collect();
        assert_eq!(order, vec![Activity::Rest]);
    }

    #[test]
    fn test_sample_lookup_by_point_id() {
        let dataset = Dataset::from_samples(vec![
            sample(Activity::Rest, 0),
            sample(Activity::Rest, 1),
        ]);
        let found = dataset.sample(PointId::new(Activity::Rest, 1)).unwrap();
        assert_eq!(found.value, 61.0);
        assert!(dataset.sample(PointId::new(Activity::Rest, 2)).is_none());
    }

    #[test]
    fn test_checksum_is_stable() {
        let a = compute_dataset_checksum(b"timestamp,activity\n0,Rest\n");
        let b = compute_dataset_checksum(b"timestamp,activity\n0,Rest\n");
        let c = compute_dataset_checksum(b"timestamp,activity\n0,Running\n");
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(a.len(), 64);
    }
}
