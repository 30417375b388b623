//! Strength-filtered aggregation of play-by-play events into player-game rows.
//!
//! - **partition**: rows where one team is the for-team at a given strength
//! - **credit**: the roster-relative credit operation every category uses
//! - **category**: the [`StatCategory`] seam and the rule-driven categories
//! - **points**: goals and assists through a [`PointsCalculator`]
//! - **merge**: full outer join of category tables on the player-game key
//! - **metrics**: the orchestrator and [`ppespk_ind_metrics`]
//!
//! Strength pairs use the scraper's goalie-inclusive counts; see
//! [`StrengthState::from_label`](pbp_model::StrengthState::from_label).

pub mod category;
pub mod credit;
pub mod merge;
pub mod metrics;
pub mod partition;
pub mod points;

pub use category::{RuleCategory, StatCategory};
pub use credit::{CreditRule, Tally, credit, credit_both};
pub use merge::{finalize_measures, outer_merge};
pub use metrics::{IndividualMetrics, ppespk_ind_metrics};
pub use partition::{partition, partition_expr};
pub use points::{GoalCreditCalculator, PointsCalculator, PointsCategory};
