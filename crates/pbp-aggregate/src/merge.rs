//! Combining per-measure tables on the player-game key.

use pbp_common::require_columns;
use pbp_model::Result;
use pbp_model::columns::{PLAYER_GAME_KEY, PLAYER_ID};
use polars::prelude::*;

fn key_exprs() -> Vec<Expr> {
    PLAYER_GAME_KEY.iter().map(|name| col(*name)).collect()
}

fn key_join_args() -> JoinArgs {
    let mut args = JoinArgs::new(JoinType::Full).with_coalesce(JoinCoalesce::CoalesceColumns);
    args.nulls_equal = true;
    args
}

/// Full outer join of `tables` on the player-game key, left to right.
///
/// Key columns are coalesced, so every player appearing in any table gets
/// one row; measures they did not register are null until
/// [`finalize_measures`] fills them. A null date or name matches another
/// null, the same way `group_by` buckets it.
pub fn outer_merge(tables: Vec<DataFrame>) -> Result<DataFrame> {
    let mut tables = tables.into_iter();
    let Some(first) = tables.next() else {
        return Ok(DataFrame::empty());
    };
    let keys = key_exprs();
    let merged = tables.fold(first.lazy(), |acc, next| {
        acc.join(next.lazy(), keys.clone(), keys.clone(), key_join_args())
    });
    Ok(merged.collect()?)
}

/// Zero-fill `measures`, cast them and `player_id` to `Int64`, and select
/// the key followed by the measures.
pub fn finalize_measures(df: &DataFrame, measures: &[&str]) -> Result<DataFrame> {
    require_columns(df, &PLAYER_GAME_KEY, "player-game output")?;
    require_columns(df, measures, "player-game output")?;
    let mut exprs = key_exprs();
    exprs[3] = col(PLAYER_ID).cast(DataType::Int64);
    exprs.extend(
        measures
            .iter()
            .map(|name| col(*name).fill_null(lit(0)).cast(DataType::Int64)),
    );
    Ok(df.clone().lazy().select(exprs).collect()?)
}
