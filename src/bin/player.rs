//! Headless demo player.
//!
//! Loads the sampled dataset, builds a session from configuration, and
//! drives one full viewing end to end: the tap-along estimator stage, the
//! scripted narrative, and a short interactive exploration. The scene is
//! accumulated in a [`RecordingRenderer`] and summarized at the end.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin pulseplot-player
//! ```
//!
//! # Environment Variables
//!
//! - `PULSEPLOT_CONFIG`: Path to a pulseplot.toml (default: standard locations)
//! - `PULSEPLOT_TIME_SCALE`: Simulated seconds per real second (default: 20)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::time::Duration;

use anyhow::Context;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use pulseplot::api::{
    apply, load_dataset, load_regression, Activity, FilterToggle, InputEvent, Measure, Phase,
    RecordingRenderer, RegressionSet, VizConfig, VizSession,
};

struct Player {
    session: VizSession,
    renderer: RecordingRenderer,
    clock: f64,
    time_scale: f64,
}

impl Player {
    fn now(&self) -> qtty::Seconds {
        qtty::Seconds::new(self.clock)
    }

    fn start(&mut self) {
        let directives = self.session.start(self.now());
        apply(&mut self.renderer, &directives);
    }

    fn send(&mut self, event: InputEvent) {
        let directives = self.session.handle(event, self.now());
        apply(&mut self.renderer, &directives);
    }

    /// Advances the simulated clock by `dt` seconds, sleeping the scaled
    /// real-time equivalent so the countdown feels like a countdown.
    async fn step(&mut self, dt: f64) {
        self.clock += dt;
        if self.time_scale > 0.0 {
            tokio::time::sleep(Duration::from_secs_f64(dt / self.time_scale)).await;
        }
        let directives = self.session.tick(self.now());
        apply(&mut self.renderer, &directives);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(false)
        .init();

    info!("Starting pulseplot player");

    let config = match env::var("PULSEPLOT_CONFIG") {
        Ok(path) => VizConfig::from_file(path)?,
        Err(_) => VizConfig::from_default_location().unwrap_or_else(|e| {
            warn!("{}; using built-in defaults", e);
            VizConfig::default()
        }),
    };
    config.validate().context("Invalid configuration")?;

    let activities = config.activities()?;
    let data_dir = config.data.dir.clone();
    let dataset =
        tokio::task::spawn_blocking(move || load_dataset(&data_dir, &activities)).await??;
    info!(
        "Loaded {} samples from {} rows ({} dropped), checksum {}",
        dataset.len(),
        dataset.source_rows,
        dataset.dropped_rows,
        &dataset.checksum[..12]
    );

    let regression = match &config.data.regression_file {
        Some(path) => match load_regression(path) {
            Ok(set) => {
                info!("Loaded {} regression curves", set.curves.len());
                set
            }
            Err(e) => {
                warn!("Failed to load regression curves: {:#}; continuing without", e);
                RegressionSet::default()
            }
        },
        None => RegressionSet::default(),
    };

    let time_scale: f64 = env::var("PULSEPLOT_TIME_SCALE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(20.0);

    let session = config.build_session(dataset, regression)?;
    let mut player = Player {
        session,
        renderer: RecordingRenderer::new(),
        clock: 0.0,
        time_scale,
    };
    player.start();

    // Stage 1: tap along with each condition until the estimator hands off.
    if player.session.phase() == Phase::Estimating {
        info!("Estimator stage: {}", player.renderer.caption);
        while player.session.phase() == Phase::Estimating {
            player.send(InputEvent::TriggerPressed);
            player.step(0.4).await;
        }
        for annotation in player.session.annotations() {
            info!(
                "Estimated {:.0} bpm for {} from {} taps",
                annotation.estimate, annotation.activity, annotation.tally
            );
        }
    }

    // Stage 2: walk the narrative one trigger at a time.
    info!("Narrative: {}", player.renderer.caption);
    while player.session.phase() == Phase::Narrating {
        player.send(InputEvent::TriggerPressed);
        info!(
            "Step {}/{}: {}",
            player.session.narrative_step(),
            player.session.total_steps(),
            player.renderer.caption
        );
        player.step(1.0).await;
    }

    // Stage 3: interactive exploration.
    info!("Interactive: revealing more of the recording");
    player.send(InputEvent::SliderChanged(15));
    player.send(InputEvent::TriggerPressed);
    player.step(1.0).await;

    player.send(InputEvent::SliderChanged(-10));
    player.send(InputEvent::TriggerPressed);
    player.step(1.0).await;

    player.send(InputEvent::FilterChanged(FilterToggle::Measure(
        Measure::BreathingRate,
        false,
    )));
    player.send(InputEvent::FilterChanged(FilterToggle::Activity(
        Activity::TwoBack,
        false,
    )));
    player.send(InputEvent::FilterChanged(FilterToggle::Regression(true)));
    player.step(0.5).await;

    if let Some(id) = player.session.feed().on_screen_ids().first().copied() {
        player.send(InputEvent::HoverStart(id));
        if let Some((_, text)) = &player.renderer.tooltip {
            info!("Tooltip: {}", text);
        }
        player.send(InputEvent::HoverEnd);
    }

    info!("Final caption: {}", player.renderer.caption);
    info!(
        "Scene: {} points drawn, {} visible, {} curves, legend {}",
        player.renderer.points.len(),
        player.renderer.visible_points(),
        player.renderer.curves.len(),
        if player.renderer.legend_visible {
            "shown"
        } else {
            "hidden"
        }
    );

    Ok(())
}
