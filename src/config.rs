//! Visualization configuration file support.
//!
//! Reads session tunables, the narrative script, and data locations from
//! TOML configuration files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::DataError;
use crate::models::{Activity, Dataset};
use crate::parsing::RegressionSet;
use crate::services::estimator::{ClickTimingEstimator, EstimatorSettings};
use crate::services::narrative::{default_script, NarrativeSequencer, NarrativeStep};
use crate::services::session::{SessionSettings, VizSession};

/// Visualization configuration from file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VizConfig {
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub feed: FeedSettings,
    #[serde(default)]
    pub animation: AnimationSettings,
    #[serde(default)]
    pub estimator: EstimatorConfig,
    #[serde(default)]
    pub narrative: NarrativeConfig,
}

/// Data file locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataSettings {
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    /// Activity labels to load, matching `sampled_<label>.csv` files.
    #[serde(default = "default_activity_labels")]
    pub activities: Vec<String>,
    #[serde(default)]
    pub regression_file: Option<PathBuf>,
}

impl Default for DataSettings {
    fn default() -> Self {
        DataSettings {
            dir: default_data_dir(),
            activities: default_activity_labels(),
            regression_file: None,
        }
    }
}

/// Point feed tunables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedSettings {
    #[serde(default = "default_initial_reveal")]
    pub initial_reveal: usize,
    #[serde(default = "default_reveal_step")]
    pub reveal_step: i64,
}

impl Default for FeedSettings {
    fn default() -> Self {
        FeedSettings {
            initial_reveal: default_initial_reveal(),
            reveal_step: default_reveal_step(),
        }
    }
}

/// Timing of visual transitions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSettings {
    /// Duration renderers should animate enters and restyles over.
    #[serde(default = "default_transition_secs")]
    pub transition_secs: f64,
    /// Quiet period after each transition during which triggers are dropped.
    #[serde(default = "default_settle_secs")]
    pub settle_secs: f64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        AnimationSettings {
            transition_secs: default_transition_secs(),
            settle_secs: default_settle_secs(),
        }
    }
}

/// Click-timing estimator stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_window_secs")]
    pub window_secs: f64,
    #[serde(default = "default_beat_multiplier")]
    pub beat_multiplier: f64,
    #[serde(default = "default_estimate_cap")]
    pub estimate_cap: f64,
    #[serde(default = "default_handoff_delay_secs")]
    pub handoff_delay_secs: f64,
    #[serde(default = "default_estimator_prompt")]
    pub prompt: String,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            enabled: true,
            window_secs: default_window_secs(),
            beat_multiplier: default_beat_multiplier(),
            estimate_cap: default_estimate_cap(),
            handoff_delay_secs: default_handoff_delay_secs(),
            prompt: default_estimator_prompt(),
        }
    }
}

/// Narrative script and captions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeConfig {
    #[serde(default = "default_intro_caption")]
    pub intro_caption: String,
    #[serde(default = "default_script")]
    pub steps: Vec<NarrativeStep>,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        NarrativeConfig {
            intro_caption: default_intro_caption(),
            steps: default_script(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_activity_labels() -> Vec<String> {
    Activity::ALL.iter().map(|a| a.label().to_string()).collect()
}

fn default_initial_reveal() -> usize {
    30
}

fn default_reveal_step() -> i64 {
    10
}

fn default_transition_secs() -> f64 {
    0.6
}

fn default_settle_secs() -> f64 {
    0.75
}

fn default_true() -> bool {
    true
}

fn default_window_secs() -> f64 {
    5.0
}

fn default_beat_multiplier() -> f64 {
    12.0
}

fn default_estimate_cap() -> f64 {
    200.0
}

fn default_handoff_delay_secs() -> f64 {
    1.5
}

fn default_estimator_prompt() -> String {
    "Tap the button along with the pulse you would expect during".to_string()
}

fn default_intro_caption() -> String {
    "Heart and breathing rates, sampled across three activities.".to_string()
}

impl VizConfig {
    /// Load visualization configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DataError> {
        let content = fs::read_to_string(path.as_ref()).map_err(|e| {
            DataError::ConfigurationError(format!("Failed to read config file: {}", e))
        })?;

        let config: VizConfig = toml::from_str(&content).map_err(|e| {
            DataError::ConfigurationError(format!("Failed to parse config file: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load visualization configuration from the default location.
    ///
    /// Searches for `pulseplot.toml` in:
    /// 1. Current directory
    /// 2. `config/` directory
    /// 3. Parent directory
    pub fn from_default_location() -> Result<Self, DataError> {
        let search_paths = vec![
            PathBuf::from("pulseplot.toml"),
            PathBuf::from("config/pulseplot.toml"),
            PathBuf::from("../pulseplot.toml"),
        ];

        for path in search_paths {
            if path.exists() {
                return Self::from_file(&path);
            }
        }

        Err(DataError::ConfigurationError(
            "No pulseplot.toml found in standard locations".to_string(),
        ))
    }

    /// Checks cross-field constraints a TOML parse cannot express.
    pub fn validate(&self) -> Result<(), DataError> {
        if self.estimator.window_secs <= 0.0 {
            return Err(DataError::ConfigurationError(
                "estimator.window_secs must be positive".to_string(),
            ));
        }
        if self.estimator.beat_multiplier <= 0.0 || self.estimator.estimate_cap <= 0.0 {
            return Err(DataError::ConfigurationError(
                "estimator.beat_multiplier and estimator.estimate_cap must be positive"
                    .to_string(),
            ));
        }
        if self.animation.transition_secs < 0.0 {
            return Err(DataError::ConfigurationError(
                "animation.transition_secs must not be negative".to_string(),
            ));
        }
        if self.animation.settle_secs <= self.animation.transition_secs {
            return Err(DataError::ConfigurationError(
                "animation.settle_secs must exceed animation.transition_secs".to_string(),
            ));
        }
        if self.narrative.steps.is_empty() {
            return Err(DataError::ConfigurationError(
                "narrative.steps must contain at least one step".to_string(),
            ));
        }
        self.activities()?;
        Ok(())
    }

    /// Parses the configured activity labels.
    pub fn activities(&self) -> Result<Vec<Activity>, DataError> {
        self.data
            .activities
            .iter()
            .map(|label| Activity::from_label(label))
            .collect()
    }

    /// Session tunables derived from this configuration.
    pub fn session_settings(&self) -> SessionSettings {
        SessionSettings {
            initial_reveal: self.feed.initial_reveal,
            default_reveal_step: self.feed.reveal_step,
            settle_secs: self.animation.settle_secs,
            handoff_delay_secs: self.estimator.handoff_delay_secs,
            intro_caption: self.narrative.intro_caption.clone(),
            estimator_prompt: self.estimator.prompt.clone(),
        }
    }

    /// Estimator stage, if enabled and at least one condition is configured.
    pub fn build_estimator(&self) -> Result<Option<ClickTimingEstimator>, DataError> {
        if !self.estimator.enabled {
            return Ok(None);
        }
        let conditions = self.activities()?;
        if conditions.is_empty() {
            log::warn!("Estimator enabled but no activities configured; skipping the stage");
            return Ok(None);
        }
        Ok(Some(ClickTimingEstimator::new(EstimatorSettings {
            window_secs: self.estimator.window_secs,
            beat_multiplier: self.estimator.beat_multiplier,
            estimate_cap: self.estimator.estimate_cap,
            conditions,
        })))
    }

    /// Composes a session from this configuration and loaded data.
    pub fn build_session(
        &self,
        dataset: Dataset,
        regression: RegressionSet,
    ) -> Result<VizSession, DataError> {
        let narrative = NarrativeSequencer::new(self.narrative.steps.clone());
        let estimator = self.build_estimator()?;
        Ok(VizSession::new(
            dataset,
            narrative,
            estimator,
            regression,
            self.session_settings(),
        ))
    }
}
