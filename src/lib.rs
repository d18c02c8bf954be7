//! # pulseplot
//!
//! Narrated scatter-plot engine for physiological recordings.
//!
//! This crate drives a staged visualization of heart-rate and breathing-rate
//! samples recorded under different activities. Points stream onto the chart
//! in increments, a scripted narrative restyles them step by step, and an
//! opening tap-along stage lets viewers estimate their own pulse before the
//! data appears. Rendering stays behind a seam: the session emits
//! [`Directive`](services::session::Directive)s and any [`render::Renderer`]
//! can replay them.
//!
//! ## Features
//!
//! - **Data Loading**: Parse per-activity sampled CSV files and regression JSON
//! - **Point Feed**: Per-activity reveal cursors with retraction that never replays
//! - **Narrative**: Declarative step scripts restyling the chart one trigger at a time
//! - **Estimator**: Countdown tap windows producing beats-per-minute annotations
//! - **Session**: Single-threaded orchestration with explicit time, no timers
//!
//! ## Architecture
//!
//! - [`api`]: Consolidated public surface
//! - [`models`]: Activities, measures, samples, datasets
//! - [`parsing`]: CSV and JSON loaders
//! - [`services`]: The three state machines and the session
//! - [`render`]: Renderer seam and the in-memory recording renderer
//! - [`config`]: TOML configuration
//!

pub mod api;

pub mod config;
pub mod error;
pub mod models;

pub mod parsing;

pub mod render;
pub mod services;

pub mod visual;
