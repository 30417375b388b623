//! Strength partitions.

use pbp_common::{require_columns, require_numeric};
use pbp_model::{Perspective, Result, StrengthState};
use polars::prelude::*;

/// Rows where `perspective`'s team has `strength.skaters_for` players, its
/// opponent `strength.skaters_against`, and its own goalie is in net.
pub fn partition_expr(perspective: Perspective, strength: StrengthState) -> Expr {
    col(perspective.skaters_column())
        .eq(lit(strength.skaters_for))
        .and(col(perspective.opposing_skaters_column()).eq(lit(strength.skaters_against)))
        .and(col(perspective.goalie_column()).is_not_null())
}

/// Filter `events` to the partition of `perspective` at `strength`.
pub fn partition(
    events: &DataFrame,
    perspective: Perspective,
    strength: StrengthState,
) -> Result<DataFrame> {
    let skaters = [
        perspective.skaters_column(),
        perspective.opposing_skaters_column(),
    ];
    require_columns(events, &skaters, "strength partition")?;
    require_columns(events, &[perspective.goalie_column()], "strength partition")?;
    require_numeric(events, &skaters)?;
    Ok(events
        .clone()
        .lazy()
        .filter(partition_expr(perspective, strength))
        .collect()?)
}
