//! Play-by-play event codes and the shot-attempt classes built on them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Event code as recorded in the `Event` column.
///
/// Unknown codes are kept verbatim in [`EventType::Other`] so that an
/// unfamiliar scrape never aborts enrichment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Shot,
    Miss,
    Block,
    Goal,
    Hit,
    Give,
    Take,
    Faceoff,
    Penalty,
    Stop,
    PeriodStart,
    PeriodEnd,
    GameEnd,
    GameOff,
    EarlyIntermissionStart,
    EarlyIntermissionEnd,
    ShootoutComplete,
    Challenge,
    DelayedPenalty,
    Other(String),
}

/// Shot attempts of any kind: on goal, missed or blocked.
pub const CORSI_EVENTS: [EventType; 4] = [
    EventType::Shot,
    EventType::Block,
    EventType::Miss,
    EventType::Goal,
];

/// Unblocked shot attempts.
pub const FENWICK_EVENTS: [EventType; 3] = [EventType::Shot, EventType::Miss, EventType::Goal];

/// Shots on goal.
pub const SHOT_EVENTS: [EventType; 2] = [EventType::Shot, EventType::Goal];

impl EventType {
    /// Parse a scraper code; unknown codes become [`EventType::Other`].
    ///
    /// Codes are matched exactly, as the `Event` column filters match them.
    pub fn from_code(code: &str) -> Self {
        match code {
            "SHOT" => Self::Shot,
            "MISS" => Self::Miss,
            "BLOCK" => Self::Block,
            "GOAL" => Self::Goal,
            "HIT" => Self::Hit,
            "GIVE" => Self::Give,
            "TAKE" => Self::Take,
            "FAC" => Self::Faceoff,
            "PENL" => Self::Penalty,
            "STOP" => Self::Stop,
            "PSTR" => Self::PeriodStart,
            "PEND" => Self::PeriodEnd,
            "GEND" => Self::GameEnd,
            "GOFF" => Self::GameOff,
            "EISTR" => Self::EarlyIntermissionStart,
            "EIEND" => Self::EarlyIntermissionEnd,
            "SOC" => Self::ShootoutComplete,
            "CHL" => Self::Challenge,
            "DELPEN" => Self::DelayedPenalty,
            other => Self::Other(other.to_string()),
        }
    }

    /// Scraper code for this event.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Shot => "SHOT",
            Self::Miss => "MISS",
            Self::Block => "BLOCK",
            Self::Goal => "GOAL",
            Self::Hit => "HIT",
            Self::Give => "GIVE",
            Self::Take => "TAKE",
            Self::Faceoff => "FAC",
            Self::Penalty => "PENL",
            Self::Stop => "STOP",
            Self::PeriodStart => "PSTR",
            Self::PeriodEnd => "PEND",
            Self::GameEnd => "GEND",
            Self::GameOff => "GOFF",
            Self::EarlyIntermissionStart => "EISTR",
            Self::EarlyIntermissionEnd => "EIEND",
            Self::ShootoutComplete => "SOC",
            Self::Challenge => "CHL",
            Self::DelayedPenalty => "DELPEN",
            Self::Other(code) => code.as_str(),
        }
    }

    pub fn is_corsi(&self) -> bool {
        CORSI_EVENTS.contains(self)
    }

    pub fn is_fenwick(&self) -> bool {
        FENWICK_EVENTS.contains(self)
    }

    pub fn is_shot(&self) -> bool {
        SHOT_EVENTS.contains(self)
    }
}

impl FromStr for EventType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_code(s))
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rink zone of an event, read from the free-text description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    Neutral,
    Offensive,
    Defensive,
}

impl Zone {
    /// Value written to the `zone` column.
    pub fn code(self) -> &'static str {
        match self {
            Self::Neutral => "neu",
            Self::Offensive => "off",
            Self::Defensive => "def",
        }
    }

    /// Zone named in an event description, if any.
    ///
    /// Markers are checked neutral, offensive, defensive; a later marker
    /// wins when a description carries more than one.
    pub fn from_description(description: &str) -> Option<Self> {
        let lowered = description.to_ascii_lowercase();
        let mut zone = None;
        if lowered.contains("neu. zone") {
            zone = Some(Self::Neutral);
        }
        if lowered.contains("off. zone") {
            zone = Some(Self::Offensive);
        }
        if lowered.contains("def. zone") {
            zone = Some(Self::Defensive);
        }
        zone
    }
}
