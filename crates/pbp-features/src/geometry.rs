//! Row-level feature formulas.
//!
//! Coordinates are in feet with center ice at the origin. Absolute `x` is
//! used throughout so both attacking directions map onto the same net.

use pbp_model::{EventType, FeatureConfig, Zone};

/// Straight-line distance from `(x, y)` to the center of the goal.
pub fn shot_distance(x: f64, y: f64, config: &FeatureConfig) -> f64 {
    let dx = config.goal_line_x - x.abs();
    (dx * dx + y * y).sqrt()
}

/// Angle in degrees between the shooter and the goal's center line.
///
/// Locations behind the goal line wrap past 90 degrees. A shot taken from
/// the exact center of the goal has no defined angle and yields NaN.
pub fn shot_angle(x: f64, y: f64, config: &FeatureConfig) -> f64 {
    let distance = shot_distance(x, y, config);
    let angle = (y.abs() / distance).asin().to_degrees();
    if x.abs() > config.behind_net_x {
        90.0 + (180.0 - (90.0 + angle))
    } else {
        angle
    }
}

/// Home-minus-away score differential capped at `±cap`.
pub fn clamp_score_diff(home_score: i64, away_score: i64, cap: i64) -> i64 {
    (home_score - away_score).clamp(-cap, cap)
}

/// Zone of an event from its description, with the two corrections applied.
///
/// Defensive-zone blocks belong to the shooter's offensive zone once the
/// actors are swapped, and defensive-zone shot attempts within
/// `zone_correction_distance` of the net are description errors.
pub fn classify_zone(
    description: Option<&str>,
    event: Option<&EventType>,
    distance: Option<f64>,
    config: &FeatureConfig,
) -> Option<Zone> {
    let zone = description.and_then(Zone::from_description)?;
    if zone != Zone::Defensive {
        return Some(zone);
    }
    let Some(event) = event else {
        return Some(zone);
    };
    if *event == EventType::Block {
        return Some(Zone::Offensive);
    }
    let near_net = distance.is_some_and(|d| d <= config.zone_correction_distance);
    if event.is_corsi() && near_net {
        return Some(Zone::Offensive);
    }
    Some(zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FeatureConfig {
        FeatureConfig::default()
    }

    #[test]
    fn distance_uses_absolute_x() {
        let cfg = config();
        let left = shot_distance(-57.95, 40.0, &cfg);
        let right = shot_distance(57.95, 40.0, &cfg);
        assert_eq!(left, right);
        assert!((right - 50.0).abs() < 1e-9);
    }

    #[test]
    fn angle_straight_on_is_zero() {
        assert_eq!(shot_angle(60.0, 0.0, &config()), 0.0);
    }

    #[test]
    fn angle_wraps_behind_the_net() {
        let cfg = config();
        // 5 ft behind the goal line, 5 ft wide: 45 degrees in front becomes 135.
        let angle = shot_angle(92.95, 5.0, &cfg);
        assert!((angle - 135.0).abs() < 1e-9, "got {angle}");
        let front = shot_angle(82.95, 5.0, &cfg);
        assert!((front - 45.0).abs() < 1e-9, "got {front}");
    }

    #[test]
    fn angle_at_goal_center_is_undefined() {
        assert!(shot_angle(87.95, 0.0, &config()).is_nan());
    }

    #[test]
    fn score_diff_is_capped() {
        assert_eq!(clamp_score_diff(0, 5, 3), -3);
        assert_eq!(clamp_score_diff(7, 0, 3), 3);
        assert_eq!(clamp_score_diff(4, 2, 3), 2);
    }

    #[test]
    fn defensive_block_becomes_offensive() {
        let zone = classify_zone(
            Some("BOS #44 BLOCKED BY TOR, Def. Zone"),
            Some(&EventType::Block),
            Some(80.0),
            &config(),
        );
        assert_eq!(zone, Some(Zone::Offensive));
    }

    #[test]
    fn close_defensive_shot_becomes_offensive() {
        let cfg = config();
        let near = classify_zone(Some("Def. Zone"), Some(&EventType::Shot), Some(64.0), &cfg);
        let far = classify_zone(Some("Def. Zone"), Some(&EventType::Shot), Some(64.5), &cfg);
        let hit = classify_zone(Some("Def. Zone"), Some(&EventType::Hit), Some(10.0), &cfg);
        assert_eq!(near, Some(Zone::Offensive));
        assert_eq!(far, Some(Zone::Defensive));
        assert_eq!(hit, Some(Zone::Defensive));
    }

    #[test]
    fn unknown_distance_keeps_defensive_zone() {
        let zone = classify_zone(Some("Def. Zone"), Some(&EventType::Miss), None, &config());
        assert_eq!(zone, Some(Zone::Defensive));
    }
}
