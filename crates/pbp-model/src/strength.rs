//! Team-strength states and the home/away perspective of a partition.
//!
//! Skater counts follow the scraper convention where the goalie is counted
//! with the skaters: a 5-on-4 power play is recorded as 6 and 5.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::columns;
use crate::error::{PbpError, Result};

/// On-ice labels accepted by [`StrengthState::from_label`].
pub const SUPPORTED_LABELS: [&str; 9] = [
    "5v5", "5v4", "4v5", "5v3", "3v5", "4v4", "4v3", "3v4", "3v3",
];

/// A (skaters-for, skaters-against) pair in scraper convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StrengthState {
    /// Recorded player count of the team being credited.
    pub skaters_for: i64,
    /// Recorded player count of its opponent.
    pub skaters_against: i64,
}

impl StrengthState {
    /// Build from raw scraper counts (e.g. `6, 5` for a 5-on-4).
    pub fn new(skaters_for: i64, skaters_against: i64) -> Self {
        Self {
            skaters_for,
            skaters_against,
        }
    }

    /// Translate an on-ice label such as `"5v4"` into scraper counts.
    pub fn from_label(label: &str) -> Result<Self> {
        let invalid = || PbpError::InvalidStrength(label.to_string());
        let (own, opp) = label
            .trim()
            .to_ascii_lowercase()
            .split_once('v')
            .map(|(a, b)| (a.trim().to_string(), b.trim().to_string()))
            .ok_or_else(invalid)?;
        let own: i64 = own.parse().map_err(|_| invalid())?;
        let opp: i64 = opp.parse().map_err(|_| invalid())?;
        if !(3..=5).contains(&own) || !(3..=5).contains(&opp) {
            return Err(invalid());
        }
        Ok(Self::new(own + 1, opp + 1))
    }

    /// On-ice label for this state (`6, 5` -> `"5v4"`).
    pub fn label(&self) -> String {
        format!("{}v{}", self.skaters_for - 1, self.skaters_against - 1)
    }

    /// The same state seen from the other bench.
    pub fn flipped(&self) -> Self {
        Self::new(self.skaters_against, self.skaters_for)
    }
}

impl fmt::Display for StrengthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Which team of an event row is treated as the "for" team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Perspective {
    Home,
    Away,
}

impl Perspective {
    pub const BOTH: [Perspective; 2] = [Perspective::Home, Perspective::Away];

    pub fn opposite(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }

    pub fn skaters_column(self) -> &'static str {
        match self {
            Self::Home => columns::HOME_PLAYERS,
            Self::Away => columns::AWAY_PLAYERS,
        }
    }

    pub fn opposing_skaters_column(self) -> &'static str {
        self.opposite().skaters_column()
    }

    pub fn goalie_column(self) -> &'static str {
        match self {
            Self::Home => columns::HOME_GOALIE,
            Self::Away => columns::AWAY_GOALIE,
        }
    }

    pub fn team_column(self) -> &'static str {
        match self {
            Self::Home => columns::HOME_TEAM,
            Self::Away => columns::AWAY_TEAM,
        }
    }

    pub fn roster_columns(self) -> [&'static str; columns::ROSTER_SLOTS] {
        match self {
            Self::Home => columns::HOME_ROSTER,
            Self::Away => columns::AWAY_ROSTER,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Away => "away",
        }
    }
}

/// Event participant slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Actor {
    /// `p1`: shooter, hitter, faceoff winner, penalized player.
    Primary,
    /// `p2`: player hit, faceoff loser, player drawing the penalty.
    Secondary,
    /// `p3`: secondary assist on goals.
    Tertiary,
}

impl Actor {
    pub fn id_column(self) -> &'static str {
        match self {
            Self::Primary => columns::P1_ID,
            Self::Secondary => columns::P2_ID,
            Self::Tertiary => columns::P3_ID,
        }
    }

    pub fn name_column(self) -> &'static str {
        match self {
            Self::Primary => columns::P1_NAME,
            Self::Secondary => columns::P2_NAME,
            Self::Tertiary => columns::P3_NAME,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_translates_to_scraper_counts() {
        let pp = StrengthState::from_label("5v4").unwrap();
        assert_eq!(pp, StrengthState::new(6, 5));
        assert_eq!(pp.label(), "5v4");
        assert_eq!(pp.flipped().label(), "4v5");
        assert_eq!(StrengthState::from_label(" 3V3 ").unwrap(), StrengthState::new(4, 4));
    }

    #[test]
    fn rejects_malformed_labels() {
        for label in ["", "5", "5-4", "6v5", "2v3", "fivevfour"] {
            assert!(
                matches!(StrengthState::from_label(label), Err(PbpError::InvalidStrength(_))),
                "{label} should be rejected"
            );
        }
    }

    #[test]
    fn every_supported_label_parses() {
        for label in SUPPORTED_LABELS {
            let state = StrengthState::from_label(label).unwrap();
            assert_eq!(state.label(), label);
        }
    }

    #[test]
    fn perspectives_mirror_each_other() {
        assert_eq!(Perspective::Home.opposite(), Perspective::Away);
        assert_eq!(Perspective::Away.goalie_column(), columns::AWAY_GOALIE);
        assert_eq!(Perspective::Away.roster_columns()[0], "awayPlayer1_id");
        assert_eq!(Actor::Secondary.name_column(), columns::P2_NAME);
    }
}
