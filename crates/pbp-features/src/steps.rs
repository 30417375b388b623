//! Column executors for each derived feature.
//!
//! Every function validates the columns it reads, then returns a copy of
//! the input frame with its output column(s) added or overwritten. Steps
//! that look at the previous event use table order, so callers must hand
//! in a table sorted by season, game and elapsed time.

use pbp_common::{event_in, event_is, float_column, indicator, require_columns, require_numeric};
use pbp_model::columns::{
    ANGLE, AWAY_GOALIE, AWAY_PLAYERS, AWAY_SCORE, AWAY_TEAM, DESCRIPTION, DISTANCE, EV_TEAM,
    EVENT, HOME_GOALIE, HOME_PLAYERS, HOME_SCORE, HOME_TEAM, IS_CORSI, IS_FENWICK, IS_GOAL,
    IS_HOME, IS_REBOUND, IS_RUSH, IS_SHOT, P1_ID, P1_NAME, P2_ID, P2_NAME, REBOUND_ANGLE,
    SCORE_DIFF, SECONDS_ELAPSED, SHOOTER_STRENGTH, TIME_DIFF, X_COORD, Y_COORD, ZONE,
};
use pbp_model::event::{CORSI_EVENTS, FENWICK_EVENTS, SHOT_EVENTS};
use pbp_model::{EventType, FeatureConfig, Result, Zone};
use polars::prelude::*;
use tracing::warn;

use crate::geometry::{clamp_score_diff, classify_zone, shot_angle, shot_distance};

fn with_exprs(df: &DataFrame, exprs: Vec<Expr>) -> Result<DataFrame> {
    Ok(df.clone().lazy().with_columns(exprs).collect()?)
}

fn previous(name: &str) -> Expr {
    col(name).shift(lit(1))
}

/// Exchange primary and secondary actors on BLOCK rows.
///
/// The scraper records the blocker as `p1` and the shooter as `p2`; after
/// this step `p1` is the shooter on every shot attempt.
pub fn swap_block_actors(df: &DataFrame) -> Result<DataFrame> {
    require_columns(df, &[EVENT, P1_ID, P1_NAME, P2_ID, P2_NAME], "block actor swap")?;
    let is_block = event_is(&EventType::Block);
    let swap = |own: &str, other: &str| {
        when(is_block.clone())
            .then(col(other))
            .otherwise(col(own))
            .alias(own)
    };
    with_exprs(
        df,
        vec![
            swap(P1_ID, P2_ID),
            swap(P1_NAME, P2_NAME),
            swap(P2_ID, P1_ID),
            swap(P2_NAME, P1_NAME),
        ],
    )
}

/// Add `distance` from the event location to the goal.
///
/// Rows without coordinates get a null distance.
pub fn add_distance(df: &DataFrame, config: &FeatureConfig) -> Result<DataFrame> {
    require_columns(df, &[X_COORD, Y_COORD], "distance")?;
    require_numeric(df, &[X_COORD, Y_COORD])?;
    let values = map_coordinates(df, |x, y| shot_distance(x, y, config))?;
    let mut out = df.clone();
    out.with_column(values.with_name(DISTANCE.into()).into_series())?;
    warn_missing_coordinates(&out)?;
    Ok(out)
}

/// Add `angle` in degrees, wrapping past 90 behind the goal line.
pub fn add_angle(df: &DataFrame, config: &FeatureConfig) -> Result<DataFrame> {
    require_columns(df, &[X_COORD, Y_COORD], "angle")?;
    require_numeric(df, &[X_COORD, Y_COORD])?;
    let values = map_coordinates(df, |x, y| shot_angle(x, y, config))?;
    let mut out = df.clone();
    out.with_column(values.with_name(ANGLE.into()).into_series())?;
    Ok(out)
}

fn map_coordinates(df: &DataFrame, f: impl Fn(f64, f64) -> f64) -> Result<Float64Chunked> {
    let xs = float_column(df, X_COORD)?;
    let ys = float_column(df, Y_COORD)?;
    Ok((&xs)
        .into_iter()
        .zip(&ys)
        .map(|(x, y)| Some(f(x?, y?)))
        .collect())
}

fn warn_missing_coordinates(df: &DataFrame) -> Result<()> {
    if df.column(EVENT).is_err() {
        return Ok(());
    }
    let missing = df
        .clone()
        .lazy()
        .filter(event_in(&CORSI_EVENTS).and(col(DISTANCE).is_null()))
        .collect()?
        .height();
    if missing > 0 {
        warn!(rows = missing, "shot attempts without coordinates keep null distance and angle");
    }
    Ok(())
}

/// Add `time_diff`, the seconds since the previous row.
///
/// A delta of exactly the period reset is a period boundary and becomes 0.
/// Any other negative delta is left as it is.
pub fn add_time_diff(df: &DataFrame, config: &FeatureConfig) -> Result<DataFrame> {
    require_columns(df, &[SECONDS_ELAPSED], "time since previous event")?;
    require_numeric(df, &[SECONDS_ELAPSED])?;
    let elapsed = col(SECONDS_ELAPSED).cast(DataType::Float64);
    let delta = elapsed.clone() - elapsed.shift(lit(1));
    let expr = when(delta.clone().eq(lit(config.period_reset_seconds)))
        .then(lit(0.0))
        .otherwise(delta)
        .alias(TIME_DIFF);
    let out = with_exprs(df, vec![expr])?;

    let negative = out
        .column(TIME_DIFF)?
        .f64()?
        .into_iter()
        .filter(|delta| delta.is_some_and(|d| d < 0.0))
        .count();
    if negative > 0 {
        warn!(
            rows = negative,
            "negative time deltas other than a period reset were kept unclamped"
        );
    }
    Ok(out)
}

/// Add `is_rebound`: a shot on goal within the window after a shot by the same team.
pub fn add_rebound(df: &DataFrame, config: &FeatureConfig) -> Result<DataFrame> {
    require_columns(df, &[TIME_DIFF, EVENT, EV_TEAM], "rebound flag")?;
    let condition = col(TIME_DIFF)
        .lt(lit(config.sequence_window_seconds))
        .and(event_in(&SHOT_EVENTS))
        .and(previous(EVENT).eq(lit(EventType::Shot.as_str())))
        .and(col(EV_TEAM).eq(previous(EV_TEAM)));
    with_exprs(df, vec![indicator(condition).alias(IS_REBOUND)])
}

/// Add `is_rush`: a shot attempt within the window after a neutral-zone event.
pub fn add_rush(df: &DataFrame, config: &FeatureConfig) -> Result<DataFrame> {
    require_columns(df, &[TIME_DIFF, EVENT, X_COORD], "rush flag")?;
    require_numeric(df, &[X_COORD])?;
    let prev_x = previous(X_COORD);
    let condition = col(TIME_DIFF)
        .lt(lit(config.sequence_window_seconds))
        .and(event_in(&CORSI_EVENTS))
        .and(prev_x.clone().lt(lit(config.neutral_zone_x)))
        .and(prev_x.gt(lit(-config.neutral_zone_x)));
    with_exprs(df, vec![indicator(condition).alias(IS_RUSH)])
}

/// Add `shooter_strength`: own minus opposing skaters for the event team,
/// plus one when that team's net is empty.
pub fn add_shooter_strength(df: &DataFrame) -> Result<DataFrame> {
    require_columns(
        df,
        &[
            EV_TEAM,
            HOME_TEAM,
            AWAY_TEAM,
            HOME_PLAYERS,
            AWAY_PLAYERS,
            HOME_GOALIE,
            AWAY_GOALIE,
        ],
        "shooter strength",
    )?;
    require_numeric(df, &[HOME_PLAYERS, AWAY_PLAYERS])?;
    let home_owned = col(EV_TEAM).eq(col(HOME_TEAM));
    let away_owned = col(EV_TEAM).eq(col(AWAY_TEAM));
    let base = when(home_owned.clone())
        .then(col(HOME_PLAYERS) - col(AWAY_PLAYERS))
        .otherwise(col(AWAY_PLAYERS) - col(HOME_PLAYERS));
    let home_empty_net = indicator(home_owned.and(col(HOME_GOALIE).is_null()));
    let away_empty_net = indicator(away_owned.and(col(AWAY_GOALIE).is_null()));
    let expr = (base + home_empty_net + away_empty_net)
        .cast(DataType::Int64)
        .alias(SHOOTER_STRENGTH);
    with_exprs(df, vec![expr])
}

/// Add `rebound_angle`: this angle plus the previous row's angle on rebounds.
pub fn add_rebound_angle(df: &DataFrame) -> Result<DataFrame> {
    require_columns(df, &[IS_REBOUND, ANGLE], "rebound angle")?;
    let expr = when(col(IS_REBOUND).eq(lit(1)))
        .then(col(ANGLE) + previous(ANGLE))
        .otherwise(lit(0.0))
        .alias(REBOUND_ANGLE);
    with_exprs(df, vec![expr])
}

/// Add `is_goal`.
pub fn add_goal_flag(df: &DataFrame) -> Result<DataFrame> {
    require_columns(df, &[EVENT], "goal flag")?;
    with_exprs(df, vec![indicator(event_is(&EventType::Goal)).alias(IS_GOAL)])
}

/// Add `zone` (`neu`, `off`, `def` or null).
pub fn add_zone(df: &DataFrame, config: &FeatureConfig) -> Result<DataFrame> {
    require_columns(df, &[DESCRIPTION, EVENT, DISTANCE], "zone")?;
    let descriptions = df.column(DESCRIPTION)?.cast(&DataType::String)?;
    let descriptions = descriptions.str()?;
    let events = df.column(EVENT)?.str()?;
    let distances = float_column(df, DISTANCE)?;

    let zones: StringChunked = descriptions
        .into_iter()
        .zip(events)
        .zip(&distances)
        .map(|((description, event), distance)| {
            let event = event.map(EventType::from_code);
            classify_zone(description, event.as_ref(), distance, config).map(Zone::code)
        })
        .collect();

    let mut out = df.clone();
    out.with_column(zones.with_name(ZONE.into()).into_series())?;
    Ok(out)
}

/// Add `is_corsi`, `is_fenwick` and `is_shot`.
pub fn add_shot_classes(df: &DataFrame) -> Result<DataFrame> {
    require_columns(df, &[EVENT], "shot classes")?;
    with_exprs(
        df,
        vec![
            indicator(event_in(&CORSI_EVENTS)).alias(IS_CORSI),
            indicator(event_in(&FENWICK_EVENTS)).alias(IS_FENWICK),
            indicator(event_in(&SHOT_EVENTS)).alias(IS_SHOT),
        ],
    )
}

/// Add `is_home`: the event belongs to the home team.
pub fn add_home_flag(df: &DataFrame) -> Result<DataFrame> {
    require_columns(df, &[EV_TEAM, HOME_TEAM], "home flag")?;
    with_exprs(
        df,
        vec![indicator(col(EV_TEAM).eq(col(HOME_TEAM))).alias(IS_HOME)],
    )
}

/// Add `score_diff`: home minus away, capped at `±score_diff_cap`.
pub fn add_score_diff(df: &DataFrame, config: &FeatureConfig) -> Result<DataFrame> {
    require_columns(df, &[HOME_SCORE, AWAY_SCORE], "score differential")?;
    require_numeric(df, &[HOME_SCORE, AWAY_SCORE])?;
    let home = df.column(HOME_SCORE)?.cast(&DataType::Int64)?;
    let away = df.column(AWAY_SCORE)?.cast(&DataType::Int64)?;
    let diffs: Int64Chunked = home
        .i64()?
        .into_iter()
        .zip(away.i64()?)
        .map(|(home, away)| Some(clamp_score_diff(home?, away?, config.score_diff_cap)))
        .collect();
    let mut out = df.clone();
    out.with_column(diffs.with_name(SCORE_DIFF.into()).into_series())?;
    Ok(out)
}
