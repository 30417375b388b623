//! Per-event feature derivation for play-by-play tables.
//!
//! This crate turns the raw event table into the feature table the
//! expected-goals model and the strength aggregator read:
//!
//! - **geometry**: row-level distance, angle, score and zone formulas
//! - **steps**: one column executor per derived feature
//! - **pipeline**: ordered [`FeatureStep`]s with order validation
//!
//! Every step returns a new frame; the caller's table is never touched.

pub mod geometry;
pub mod pipeline;
pub mod steps;

use pbp_model::{FeatureConfig, Result};
use polars::prelude::DataFrame;

pub use geometry::{clamp_score_diff, classify_zone, shot_angle, shot_distance};
pub use pipeline::{FeaturePipeline, FeatureStep, PipelineStats};

/// Run the standard feature pipeline over an event table.
pub fn enrich(events: &DataFrame, config: &FeatureConfig) -> Result<DataFrame> {
    FeaturePipeline::standard().execute(events, config)
}
