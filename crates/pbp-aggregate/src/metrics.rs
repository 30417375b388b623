//! Orchestration of every category into one player-game table.

use std::fmt;
use std::time::Instant;

use pbp_model::columns::{GAME_ID, PLAYER_ID, SEASON};
use pbp_model::{PbpError, Result, StrengthState};
use polars::prelude::*;
use tracing::{debug, info, info_span};

use crate::category::{RuleCategory, StatCategory};
use crate::merge::{finalize_measures, outer_merge};
use crate::points::{GoalCreditCalculator, PointsCategory};

/// The seven categories of individual counting statistics.
pub struct IndividualMetrics {
    categories: Vec<Box<dyn StatCategory>>,
}

impl IndividualMetrics {
    /// Shots, points, penalties, hits, giveaways/takeaways, faceoffs and
    /// blocks, in that output order.
    pub fn standard() -> Self {
        Self {
            categories: vec![
                Box::new(RuleCategory::shots()),
                Box::new(PointsCategory::new(GoalCreditCalculator)),
                Box::new(RuleCategory::penalties()),
                Box::new(RuleCategory::hits()),
                Box::new(RuleCategory::giveaways_takeaways()),
                Box::new(RuleCategory::faceoffs()),
                Box::new(RuleCategory::blocks()),
            ],
        }
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(|c| c.name()).collect()
    }

    /// All measure columns, in output order.
    pub fn measures(&self) -> Vec<&'static str> {
        self.categories.iter().flat_map(|c| c.measures()).collect()
    }

    /// Replace the category that has the same name as `category`.
    pub fn with_category(mut self, category: impl StatCategory + 'static) -> Result<Self> {
        let slot = self
            .categories
            .iter_mut()
            .find(|existing| existing.name() == category.name())
            .ok_or_else(|| PbpError::UnknownCategory(category.name().to_string()))?;
        *slot = Box::new(category);
        Ok(self)
    }

    /// Run every category at `strength` and merge the results.
    ///
    /// Players appear once per game if they registered anything in any
    /// category; every measure is an `Int64`, zero where absent.
    pub fn compute(&self, events: &DataFrame, strength: StrengthState) -> Result<DataFrame> {
        let span = info_span!("aggregate", strength = %strength, rows = events.height());
        let _guard = span.enter();
        let start = Instant::now();

        let mut tables = Vec::with_capacity(self.categories.len());
        for category in &self.categories {
            let table = category.compute(events, strength)?;
            debug!(category = category.name(), players = table.height(), "category merged");
            tables.push(table);
        }

        let merged = outer_merge(tables)?;
        let out = finalize_measures(&merged, &self.measures())?
            .sort([SEASON, GAME_ID, PLAYER_ID], SortMultipleOptions::default())?;

        info!(
            players = out.height(),
            duration_ms = start.elapsed().as_millis(),
            "aggregation complete"
        );
        Ok(out)
    }
}

impl Default for IndividualMetrics {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Debug for IndividualMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IndividualMetrics")
            .field("categories", &self.category_names())
            .finish()
    }
}

/// Individual metrics for every player at `strength` with the standard
/// categories.
///
/// `events` should be the enriched table: the shots category sums the
/// corsi, fenwick and shot flags.
pub fn ppespk_ind_metrics(events: &DataFrame, strength: StrengthState) -> Result<DataFrame> {
    IndividualMetrics::standard().compute(events, strength)
}
