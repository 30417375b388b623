//! Goals and assists.
//!
//! Points are not roster-checked like the other categories. Each strength
//! partition is narrowed to events owned by the for-team and handed to a
//! [`PointsCalculator`], which decides who gets credit for each goal.

use pbp_common::{coerce_id_columns, event_is, require_columns};
use pbp_model::columns::{
    DATE, EV_TEAM, EVENT, GAME_ID, GOALS, PLAYER_ID, PRIMARY_ASSISTS, SEASON, SECONDARY_ASSISTS,
};
use pbp_model::{Actor, EventType, Perspective, Result, StrengthState};
use polars::prelude::*;
use tracing::debug;

use crate::category::StatCategory;
use crate::credit::player_game_keys;
use crate::merge::{finalize_measures, outer_merge};
use crate::partition::partition_expr;

/// Individual points for a set of events.
///
/// Implementations receive rows already filtered to one team at one
/// strength and return the player-game key plus `g`, `a1` and `a2`.
pub trait PointsCalculator: Send + Sync {
    fn calculate(&self, events: &DataFrame) -> Result<DataFrame>;
}

/// Credits each GOAL row: the goal to `p1`, the primary assist to `p2` and
/// the secondary assist to `p3`. Null actors earn nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct GoalCreditCalculator;

impl GoalCreditCalculator {
    const CREDITS: [(&'static str, Actor); 3] = [
        (GOALS, Actor::Primary),
        (PRIMARY_ASSISTS, Actor::Secondary),
        (SECONDARY_ASSISTS, Actor::Tertiary),
    ];
}

impl PointsCalculator for GoalCreditCalculator {
    fn calculate(&self, events: &DataFrame) -> Result<DataFrame> {
        let mut required = vec![SEASON, GAME_ID, DATE, EVENT];
        for (_, actor) in Self::CREDITS {
            required.extend([actor.id_column(), actor.name_column()]);
        }
        require_columns(events, &required, "points")?;

        let tables = Self::CREDITS
            .into_iter()
            .map(|(measure, actor)| {
                events
                    .clone()
                    .lazy()
                    .filter(
                        event_is(&EventType::Goal).and(col(actor.id_column()).is_not_null()),
                    )
                    .group_by(player_game_keys(actor))
                    .agg([len().alias(measure)])
                    .with_column(col(PLAYER_ID).cast(DataType::Int64))
                    .collect()
            })
            .collect::<PolarsResult<Vec<_>>>()?;
        let merged = outer_merge(tables)?;
        finalize_measures(&merged, &[GOALS, PRIMARY_ASSISTS, SECONDARY_ASSISTS])
    }
}

/// The points category, delegating per-goal credit to `C`.
#[derive(Debug, Clone, Default)]
pub struct PointsCategory<C: PointsCalculator = GoalCreditCalculator> {
    calculator: C,
}

impl<C: PointsCalculator> PointsCategory<C> {
    pub fn new(calculator: C) -> Self {
        Self { calculator }
    }
}

impl<C: PointsCalculator> StatCategory for PointsCategory<C> {
    fn name(&self) -> &str {
        "points"
    }

    fn measures(&self) -> Vec<&'static str> {
        vec![GOALS, PRIMARY_ASSISTS, SECONDARY_ASSISTS]
    }

    fn compute(&self, events: &DataFrame, strength: StrengthState) -> Result<DataFrame> {
        require_columns(events, &[EV_TEAM], "points")?;
        let events = coerce_id_columns(events)?;
        let mut parts = Vec::with_capacity(Perspective::BOTH.len());
        for perspective in Perspective::BOTH {
            require_columns(
                &events,
                &[
                    perspective.team_column(),
                    perspective.skaters_column(),
                    perspective.opposing_skaters_column(),
                    perspective.goalie_column(),
                ],
                "points",
            )?;
            let owned = events
                .clone()
                .lazy()
                .filter(
                    partition_expr(perspective, strength)
                        .and(col(EV_TEAM).eq(col(perspective.team_column()))),
                )
                .collect()?;
            let credited = self.calculator.calculate(&owned)?;
            debug!(
                perspective = perspective.as_str(),
                players = credited.height(),
                "points credited"
            );
            parts.push(credited.lazy());
        }
        let stacked = concat(parts, UnionArgs::default())?.collect()?;
        finalize_measures(&stacked, &self.measures())
    }
}
