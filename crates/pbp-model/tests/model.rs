//! Tests for the play-by-play model types.

use pbp_model::columns::{self, MEASURES, PLAYER_GAME_KEY};
use pbp_model::event::{CORSI_EVENTS, FENWICK_EVENTS, SHOT_EVENTS};
use pbp_model::{EventType, FeatureConfig, Perspective, StrengthState};

#[test]
fn partial_config_json_falls_back_to_defaults() {
    let config: FeatureConfig =
        serde_json::from_str(r#"{ "sequence_window_seconds": 3.0 }"#).unwrap();
    assert_eq!(config.sequence_window_seconds, 3.0);
    assert_eq!(config.goal_line_x, 87.95);
    assert_eq!(config.score_diff_cap, 3);
}

#[test]
fn fenwick_and_shot_sets_are_subsets() {
    for event in FENWICK_EVENTS {
        assert!(CORSI_EVENTS.contains(&event));
    }
    for event in SHOT_EVENTS {
        assert!(FENWICK_EVENTS.contains(&event));
    }
}

#[test]
fn event_codes_round_trip_through_display() {
    for code in ["SHOT", "MISS", "BLOCK", "GOAL", "HIT", "GIVE", "TAKE", "FAC", "PENL"] {
        let event: EventType = code.parse().unwrap();
        assert_eq!(event.to_string(), code);
        assert!(!matches!(event, EventType::Other(_)));
    }
}

#[test]
fn output_contract_has_fifteen_measures_and_five_keys() {
    assert_eq!(MEASURES.len(), 15);
    assert_eq!(PLAYER_GAME_KEY.len(), 5);
    assert_eq!(columns::id_columns().count(), 15);
}

#[test]
fn strength_pairs_flip_between_perspectives() {
    let state = StrengthState::new(6, 5);
    assert_eq!(state.to_string(), "5v4");
    assert_eq!(state.flipped(), StrengthState::new(5, 6));
    for perspective in Perspective::BOTH {
        assert_ne!(
            perspective.skaters_column(),
            perspective.opposing_skaters_column()
        );
    }
}
