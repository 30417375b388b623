//! Crediting roster-relative events to players.
//!
//! Every rule-driven statistic is the same operation: take the for-team's
//! partition, keep the rule's event types, keep rows whose chosen actor is
//! on the for-team's roster, and count (or sum an indicator) per player-game.

use pbp_common::{event_in, require_columns};
use pbp_model::columns::{DATE, EVENT, GAME_ID, PLAYER_ID, PLAYER_NAME, SEASON};
use pbp_model::{Actor, EventType, Perspective, Result, StrengthState};
use polars::prelude::*;
use tracing::debug;

use crate::partition::partition_expr;

/// How qualifying rows are tallied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tally {
    /// One per row.
    Count,
    /// Sum of a 0/1 indicator column.
    Sum(&'static str),
}

impl Tally {
    fn expr(&self) -> Expr {
        match self {
            Self::Count => len(),
            Self::Sum(column) => col(*column).sum(),
        }
    }
}

/// One measure: which events count, who gets the credit, and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreditRule {
    pub measure: &'static str,
    pub events: Vec<EventType>,
    pub actor: Actor,
    pub tally: Tally,
}

impl CreditRule {
    pub fn count(measure: &'static str, events: &[EventType], actor: Actor) -> Self {
        Self {
            measure,
            events: events.to_vec(),
            actor,
            tally: Tally::Count,
        }
    }

    pub fn sum(
        measure: &'static str,
        events: &[EventType],
        actor: Actor,
        indicator: &'static str,
    ) -> Self {
        Self {
            measure,
            events: events.to_vec(),
            actor,
            tally: Tally::Sum(indicator),
        }
    }

    fn required_columns(&self, perspective: Perspective) -> Vec<&'static str> {
        let mut required = vec![
            SEASON,
            GAME_ID,
            DATE,
            EVENT,
            self.actor.id_column(),
            self.actor.name_column(),
        ];
        required.extend(perspective.roster_columns());
        if let Tally::Sum(column) = self.tally {
            required.push(column);
        }
        required
    }
}

/// The actor's id equals one of the team's six roster slots.
fn on_roster(actor: Actor, perspective: Perspective) -> Expr {
    perspective
        .roster_columns()
        .into_iter()
        .map(|slot| col(actor.id_column()).eq(col(slot)))
        .reduce(|acc, next| acc.or(next))
        .unwrap_or(lit(false))
}

/// Group key expressions with the actor renamed to `player_id`/`player_name`.
pub(crate) fn player_game_keys(actor: Actor) -> [Expr; 5] {
    [
        col(SEASON),
        col(GAME_ID),
        col(DATE),
        col(actor.id_column()).alias(PLAYER_ID),
        col(actor.name_column()).alias(PLAYER_NAME),
    ]
}

/// Credit `rule` to players of `perspective`'s team at `strength`.
///
/// Returns the player-game key plus one `Int64` column named after the
/// rule's measure. `events` must already have integer id columns.
pub fn credit(
    events: &DataFrame,
    perspective: Perspective,
    strength: StrengthState,
    rule: &CreditRule,
) -> Result<DataFrame> {
    require_columns(events, &rule.required_columns(perspective), rule.measure)?;
    let credited = events
        .clone()
        .lazy()
        .filter(
            partition_expr(perspective, strength)
                .and(event_in(&rule.events))
                .and(on_roster(rule.actor, perspective)),
        )
        .group_by(player_game_keys(rule.actor))
        .agg([rule.tally.expr().alias(rule.measure)])
        .with_columns([
            col(PLAYER_ID).cast(DataType::Int64),
            col(rule.measure).cast(DataType::Int64),
        ])
        .collect()?;
    debug!(
        measure = rule.measure,
        perspective = perspective.as_str(),
        players = credited.height(),
        "credited"
    );
    Ok(credited)
}

/// [`credit`] for the home and the away for-team, stacked.
pub fn credit_both(
    events: &DataFrame,
    strength: StrengthState,
    rule: &CreditRule,
) -> Result<DataFrame> {
    let parts = Perspective::BOTH
        .into_iter()
        .map(|perspective| credit(events, perspective, strength, rule).map(|df| df.lazy()))
        .collect::<Result<Vec<_>>>()?;
    Ok(concat(parts, UnionArgs::default())?.collect()?)
}
