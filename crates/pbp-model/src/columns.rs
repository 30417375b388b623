//! Column names of the play-by-play table and of the derived outputs.
//!
//! Source names follow the scraper export the pipeline is fed with. Derived
//! and output names are what downstream consumers read.

// Identifiers
pub const SEASON: &str = "season";
pub const GAME_ID: &str = "Game_Id";
pub const DATE: &str = "Date";

// Teams
pub const HOME_TEAM: &str = "Home_Team";
pub const AWAY_TEAM: &str = "Away_Team";
pub const EV_TEAM: &str = "Ev_Team";

// On-ice context
pub const HOME_PLAYERS: &str = "Home_Players";
pub const AWAY_PLAYERS: &str = "Away_Players";
pub const HOME_GOALIE: &str = "Home_Goalie";
pub const AWAY_GOALIE: &str = "Away_Goalie";

// Event descriptors
pub const EVENT: &str = "Event";
pub const DESCRIPTION: &str = "Description";
pub const X_COORD: &str = "xC";
pub const Y_COORD: &str = "yC";
pub const SECONDS_ELAPSED: &str = "Seconds_Elapsed";
pub const P1_ID: &str = "p1_ID";
pub const P1_NAME: &str = "p1_name";
pub const P2_ID: &str = "p2_ID";
pub const P2_NAME: &str = "p2_name";
pub const P3_ID: &str = "p3_ID";
pub const P3_NAME: &str = "p3_name";
pub const HOME_SCORE: &str = "Home_Score";
pub const AWAY_SCORE: &str = "Away_Score";

/// Number of roster slots recorded per team.
pub const ROSTER_SLOTS: usize = 6;

/// `homePlayer1_id` .. `homePlayer6_id`.
pub const HOME_ROSTER: [&str; ROSTER_SLOTS] = [
    "homePlayer1_id",
    "homePlayer2_id",
    "homePlayer3_id",
    "homePlayer4_id",
    "homePlayer5_id",
    "homePlayer6_id",
];

/// `awayPlayer1_id` .. `awayPlayer6_id`.
pub const AWAY_ROSTER: [&str; ROSTER_SLOTS] = [
    "awayPlayer1_id",
    "awayPlayer2_id",
    "awayPlayer3_id",
    "awayPlayer4_id",
    "awayPlayer5_id",
    "awayPlayer6_id",
];

// Derived per-event features
pub const DISTANCE: &str = "distance";
pub const ANGLE: &str = "angle";
pub const TIME_DIFF: &str = "time_diff";
pub const IS_REBOUND: &str = "is_rebound";
pub const IS_RUSH: &str = "is_rush";
pub const SHOOTER_STRENGTH: &str = "shooter_strength";
pub const REBOUND_ANGLE: &str = "rebound_angle";
pub const IS_GOAL: &str = "is_goal";
pub const ZONE: &str = "zone";
pub const IS_CORSI: &str = "is_corsi";
pub const IS_FENWICK: &str = "is_fenwick";
pub const IS_SHOT: &str = "is_shot";
pub const IS_HOME: &str = "is_home";
pub const SCORE_DIFF: &str = "score_diff";

// Player-game output
pub const PLAYER_ID: &str = "player_id";
pub const PLAYER_NAME: &str = "player_name";

/// Key shared by every player-game table.
pub const PLAYER_GAME_KEY: [&str; 5] = [SEASON, GAME_ID, DATE, PLAYER_ID, PLAYER_NAME];

pub const ICF: &str = "iCF";
pub const IFF: &str = "iFF";
pub const ISF: &str = "iSF";
pub const GOALS: &str = "g";
pub const PRIMARY_ASSISTS: &str = "a1";
pub const SECONDARY_ASSISTS: &str = "a2";
pub const IPENT: &str = "iPENT";
pub const IPEND: &str = "iPEND";
pub const IHF: &str = "iHF";
pub const IHA: &str = "iHA";
pub const IGA: &str = "iGA";
pub const ITA: &str = "iTA";
pub const FOW: &str = "FOW";
pub const FOL: &str = "FOL";
pub const BLK: &str = "BLK";

/// Measure columns of the merged player-game table, in output order.
pub const MEASURES: [&str; 15] = [
    ICF,
    IFF,
    ISF,
    GOALS,
    PRIMARY_ASSISTS,
    SECONDARY_ASSISTS,
    IPENT,
    IPEND,
    IHF,
    IHA,
    IGA,
    ITA,
    FOW,
    FOL,
    BLK,
];

/// Source columns holding player ids (roster slots and event actors).
pub fn id_columns() -> impl Iterator<Item = &'static str> {
    HOME_ROSTER
        .into_iter()
        .chain(AWAY_ROSTER)
        .chain([P1_ID, P2_ID, P3_ID])
}
