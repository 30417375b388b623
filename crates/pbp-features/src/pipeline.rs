//! Ordered feature derivation.
//!
//! A [`FeaturePipeline`] is a validated sequence of [`FeatureStep`]s. Steps
//! that read a derived column must come after the step producing it, and
//! the BLOCK actor swap, when present, runs before anything else.
//!
//! # Example
//!
//! ```ignore
//! use pbp_features::{FeaturePipeline, FeatureStep};
//!
//! let pipeline = FeaturePipeline::standard();
//! let enriched = pipeline.execute(&events, &FeatureConfig::default())?;
//! ```

use std::collections::BTreeSet;
use std::time::Instant;

use pbp_model::columns::{
    ANGLE, DISTANCE, IS_CORSI, IS_FENWICK, IS_GOAL, IS_HOME, IS_REBOUND, IS_RUSH, IS_SHOT,
    P1_ID, P1_NAME, P2_ID, P2_NAME, REBOUND_ANGLE, SCORE_DIFF, SHOOTER_STRENGTH, TIME_DIFF, ZONE,
};
use pbp_model::{FeatureConfig, PbpError, Result};
use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::steps;

/// One derived-feature operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FeatureStep {
    /// Swap `p1`/`p2` on BLOCK rows so `p1` is always the shooter.
    SwapBlockActors,
    /// Distance to the goal.
    Distance,
    /// Shooting angle in degrees.
    Angle,
    /// Seconds since the previous event.
    TimeDiff,
    /// Shot on goal right after a same-team shot.
    Rebound,
    /// Shot attempt right after a neutral-zone event.
    Rush,
    /// Skater advantage of the event team.
    ShooterStrength,
    /// Sum of the rebound shot's angle and the previous shot's angle.
    ReboundAngle,
    /// Goal indicator.
    Goal,
    /// Zone from the description.
    Zone,
    /// Corsi, fenwick and shot-on-goal indicators.
    ShotClasses,
    /// Event belongs to the home team.
    Home,
    /// Capped score differential.
    ScoreDiff,
}

impl FeatureStep {
    /// Canonical execution order.
    pub const STANDARD: [FeatureStep; 13] = [
        FeatureStep::SwapBlockActors,
        FeatureStep::Distance,
        FeatureStep::Angle,
        FeatureStep::TimeDiff,
        FeatureStep::Rebound,
        FeatureStep::Rush,
        FeatureStep::ShooterStrength,
        FeatureStep::ReboundAngle,
        FeatureStep::Goal,
        FeatureStep::Zone,
        FeatureStep::ShotClasses,
        FeatureStep::Home,
        FeatureStep::ScoreDiff,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::SwapBlockActors => "Block Actor Swap",
            Self::Distance => "Distance",
            Self::Angle => "Angle",
            Self::TimeDiff => "Time Since Previous",
            Self::Rebound => "Rebound",
            Self::Rush => "Rush",
            Self::ShooterStrength => "Shooter Strength",
            Self::ReboundAngle => "Rebound Angle",
            Self::Goal => "Goal",
            Self::Zone => "Zone",
            Self::ShotClasses => "Shot Classes",
            Self::Home => "Home",
            Self::ScoreDiff => "Score Differential",
        }
    }

    /// Columns this step writes.
    pub fn output_columns(&self) -> &'static [&'static str] {
        match self {
            Self::SwapBlockActors => &[P1_ID, P1_NAME, P2_ID, P2_NAME],
            Self::Distance => &[DISTANCE],
            Self::Angle => &[ANGLE],
            Self::TimeDiff => &[TIME_DIFF],
            Self::Rebound => &[IS_REBOUND],
            Self::Rush => &[IS_RUSH],
            Self::ShooterStrength => &[SHOOTER_STRENGTH],
            Self::ReboundAngle => &[REBOUND_ANGLE],
            Self::Goal => &[IS_GOAL],
            Self::Zone => &[ZONE],
            Self::ShotClasses => &[IS_CORSI, IS_FENWICK, IS_SHOT],
            Self::Home => &[IS_HOME],
            Self::ScoreDiff => &[SCORE_DIFF],
        }
    }

    /// Derived columns this step reads.
    pub fn requires(&self) -> &'static [&'static str] {
        match self {
            Self::Rebound | Self::Rush => &[TIME_DIFF],
            Self::ReboundAngle => &[IS_REBOUND, ANGLE],
            Self::Zone => &[DISTANCE],
            _ => &[],
        }
    }

    fn apply(&self, df: &DataFrame, config: &FeatureConfig) -> Result<DataFrame> {
        match self {
            Self::SwapBlockActors => steps::swap_block_actors(df),
            Self::Distance => steps::add_distance(df, config),
            Self::Angle => steps::add_angle(df, config),
            Self::TimeDiff => steps::add_time_diff(df, config),
            Self::Rebound => steps::add_rebound(df, config),
            Self::Rush => steps::add_rush(df, config),
            Self::ShooterStrength => steps::add_shooter_strength(df),
            Self::ReboundAngle => steps::add_rebound_angle(df),
            Self::Goal => steps::add_goal_flag(df),
            Self::Zone => steps::add_zone(df, config),
            Self::ShotClasses => steps::add_shot_classes(df),
            Self::Home => steps::add_home_flag(df),
            Self::ScoreDiff => steps::add_score_diff(df, config),
        }
    }
}

/// Validated, ordered list of feature steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturePipeline {
    steps: Vec<FeatureStep>,
}

impl FeaturePipeline {
    /// Build a pipeline, rejecting steps that run before their inputs exist.
    pub fn new(steps: Vec<FeatureStep>) -> Result<Self> {
        if let Some(position) = steps
            .iter()
            .position(|step| *step == FeatureStep::SwapBlockActors)
            && position != 0
        {
            return Err(PbpError::StepOrder {
                step: FeatureStep::SwapBlockActors.display_name().to_string(),
                requires: "the first position".to_string(),
            });
        }

        let mut produced: BTreeSet<&'static str> = BTreeSet::new();
        for step in &steps {
            if let Some(missing) = step.requires().iter().find(|c| !produced.contains(*c)) {
                return Err(PbpError::StepOrder {
                    step: step.display_name().to_string(),
                    requires: (*missing).to_string(),
                });
            }
            produced.extend(step.output_columns().iter().copied());
        }
        Ok(Self { steps })
    }

    /// Every step in canonical order, block swap first.
    pub fn standard() -> Self {
        Self {
            steps: FeatureStep::STANDARD.to_vec(),
        }
    }

    /// Every step except the block swap.
    ///
    /// For re-deriving features on a table that is already enriched: the
    /// swap is its own inverse and would undo itself.
    pub fn recompute() -> Self {
        Self {
            steps: FeatureStep::STANDARD[1..].to_vec(),
        }
    }

    pub fn steps(&self) -> &[FeatureStep] {
        &self.steps
    }

    /// Run each step over a fresh copy of `events`.
    pub fn execute(&self, events: &DataFrame, config: &FeatureConfig) -> Result<DataFrame> {
        config.validate()?;
        let span = info_span!("enrich", rows = events.height(), steps = self.steps.len());
        let _guard = span.enter();
        let start = Instant::now();

        let mut frame = events.clone();
        for step in &self.steps {
            frame = step.apply(&frame, config)?;
            debug!(step = step.display_name(), "feature step applied");
        }

        info!(
            rows = frame.height(),
            columns = frame.width(),
            duration_ms = start.elapsed().as_millis(),
            "enrichment complete"
        );
        Ok(frame)
    }

    pub fn stats(&self) -> PipelineStats {
        let derived: BTreeSet<&str> = self
            .steps
            .iter()
            .filter(|step| **step != FeatureStep::SwapBlockActors)
            .flat_map(|step| step.output_columns().iter().copied())
            .collect();
        PipelineStats {
            total_steps: self.steps.len(),
            derived_columns: derived.len(),
            swaps_block_actors: self.steps.first() == Some(&FeatureStep::SwapBlockActors),
        }
    }
}

/// Statistics about a pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub total_steps: usize,
    pub derived_columns: usize,
    pub swaps_block_actors: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_order_is_valid() {
        let pipeline = FeaturePipeline::new(FeatureStep::STANDARD.to_vec()).unwrap();
        assert_eq!(pipeline, FeaturePipeline::standard());
    }

    #[test]
    fn rejects_rebound_before_time_diff() {
        let err = FeaturePipeline::new(vec![FeatureStep::Rebound, FeatureStep::TimeDiff])
            .unwrap_err();
        assert!(matches!(
            err,
            PbpError::StepOrder { ref requires, .. } if requires == TIME_DIFF
        ));
    }

    #[test]
    fn rejects_late_block_swap() {
        let result = FeaturePipeline::new(vec![FeatureStep::Goal, FeatureStep::SwapBlockActors]);
        assert!(matches!(result, Err(PbpError::StepOrder { .. })));
    }

    #[test]
    fn standard_stats() {
        let stats = FeaturePipeline::standard().stats();
        assert_eq!(stats.total_steps, 13);
        assert_eq!(stats.derived_columns, 14);
        assert!(stats.swaps_block_actors);
        assert!(!FeaturePipeline::recompute().stats().swaps_block_actors);
    }
}
