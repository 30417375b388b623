//! Expression builders over the `Event` column.

use pbp_model::EventType;
use pbp_model::columns::EVENT;
use polars::prelude::*;

/// `Event == event`.
pub fn event_is(event: &EventType) -> Expr {
    col(EVENT).eq(lit(event.as_str().to_string()))
}

/// `Event` is one of `events`. An empty set matches nothing.
pub fn event_in(events: &[EventType]) -> Expr {
    events
        .iter()
        .map(event_is)
        .reduce(|acc, next| acc.or(next))
        .unwrap_or(lit(false))
}

/// 1 where `condition` holds, 0 otherwise (null conditions count as false).
pub fn indicator(condition: Expr) -> Expr {
    when(condition).then(lit(1i32)).otherwise(lit(0i32))
}
