//! Statistic categories.
//!
//! A category turns the event table into player-game rows for a fixed set
//! of measures. The orchestrator only relies on [`StatCategory`], so any
//! category can be swapped for another implementation with the same
//! output columns.

use pbp_common::coerce_id_columns;
use pbp_model::columns::{
    BLK, FOL, FOW, IGA, IHA, IHF, IPEND, IPENT, ICF, IFF, ISF, ITA, IS_CORSI, IS_FENWICK, IS_SHOT,
};
use pbp_model::event::{CORSI_EVENTS, FENWICK_EVENTS};
use pbp_model::{Actor, EventType, Result, StrengthState};
use polars::prelude::DataFrame;
use tracing::debug;

use crate::credit::{CreditRule, credit_both};
use crate::merge::{finalize_measures, outer_merge};

/// A group of measures computed together.
pub trait StatCategory: Send + Sync {
    /// Unique name used to replace the category in an orchestrator.
    fn name(&self) -> &str;

    /// Measure columns of the output, in output order.
    fn measures(&self) -> Vec<&'static str>;

    /// Player-game rows for `strength`: the key columns plus every measure,
    /// zero-filled and `Int64`.
    fn compute(&self, events: &DataFrame, strength: StrengthState) -> Result<DataFrame>;
}

/// A category defined entirely by [`CreditRule`]s.
#[derive(Debug, Clone)]
pub struct RuleCategory {
    name: &'static str,
    rules: Vec<CreditRule>,
}

impl RuleCategory {
    pub fn new(name: &'static str, rules: Vec<CreditRule>) -> Self {
        Self { name, rules }
    }

    pub fn rules(&self) -> &[CreditRule] {
        &self.rules
    }

    /// iCF, iFF and iSF for the shooter.
    pub fn shots() -> Self {
        Self::new(
            "shots",
            vec![
                CreditRule::sum(ICF, &CORSI_EVENTS, Actor::Primary, IS_CORSI),
                CreditRule::sum(IFF, &FENWICK_EVENTS, Actor::Primary, IS_FENWICK),
                CreditRule::sum(ISF, &CORSI_EVENTS, Actor::Primary, IS_SHOT),
            ],
        )
    }

    /// Hits given (iHF) and taken (iHA).
    pub fn hits() -> Self {
        Self::new(
            "hits",
            vec![
                CreditRule::count(IHF, &[EventType::Hit], Actor::Primary),
                CreditRule::count(IHA, &[EventType::Hit], Actor::Secondary),
            ],
        )
    }

    pub fn giveaways_takeaways() -> Self {
        Self::new(
            "gata",
            vec![
                CreditRule::count(IGA, &[EventType::Give], Actor::Primary),
                CreditRule::count(ITA, &[EventType::Take], Actor::Primary),
            ],
        )
    }

    /// Shots blocked, credited to the blocker. After the actor swap the
    /// blocker is the secondary actor.
    pub fn blocks() -> Self {
        Self::new(
            "blocks",
            vec![CreditRule::count(BLK, &[EventType::Block], Actor::Secondary)],
        )
    }

    pub fn faceoffs() -> Self {
        Self::new(
            "faceoffs",
            vec![
                CreditRule::count(FOW, &[EventType::Faceoff], Actor::Primary),
                CreditRule::count(FOL, &[EventType::Faceoff], Actor::Secondary),
            ],
        )
    }

    /// Penalties taken (iPENT) and drawn (iPEND).
    pub fn penalties() -> Self {
        Self::new(
            "penalties",
            vec![
                CreditRule::count(IPENT, &[EventType::Penalty], Actor::Primary),
                CreditRule::count(IPEND, &[EventType::Penalty], Actor::Secondary),
            ],
        )
    }
}

impl StatCategory for RuleCategory {
    fn name(&self) -> &str {
        self.name
    }

    fn measures(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.measure).collect()
    }

    fn compute(&self, events: &DataFrame, strength: StrengthState) -> Result<DataFrame> {
        let events = coerce_id_columns(events)?;
        let tables = self
            .rules
            .iter()
            .map(|rule| credit_both(&events, strength, rule))
            .collect::<Result<Vec<_>>>()?;
        let merged = outer_merge(tables)?;
        let out = finalize_measures(&merged, &self.measures())?;
        debug!(category = self.name, players = out.height(), "category computed");
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_categories_cover_their_measures() {
        let measures: Vec<&str> = [
            RuleCategory::shots(),
            RuleCategory::penalties(),
            RuleCategory::hits(),
            RuleCategory::giveaways_takeaways(),
            RuleCategory::faceoffs(),
            RuleCategory::blocks(),
        ]
        .iter()
        .flat_map(|category| category.measures())
        .collect();
        assert_eq!(
            measures,
            vec![
                "iCF", "iFF", "iSF", "iPENT", "iPEND", "iHF", "iHA", "iGA", "iTA", "FOW", "FOL",
                "BLK"
            ]
        );
    }

    #[test]
    fn blocks_go_to_the_secondary_actor() {
        let blocks = RuleCategory::blocks();
        assert_eq!(blocks.rules()[0].actor, Actor::Secondary);
    }
}
