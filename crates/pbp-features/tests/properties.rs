//! Property checks of the row-level formulas and the shot-class flags.

use pbp_features::steps::{add_score_diff, add_shot_classes};
use pbp_features::{clamp_score_diff, shot_angle, shot_distance};
use pbp_model::FeatureConfig;
use polars::prelude::*;
use proptest::prelude::*;

const CODES: [&str; 12] = [
    "SHOT", "MISS", "BLOCK", "GOAL", "HIT", "GIVE", "TAKE", "FAC", "PENL", "STOP", "PSTR",
    "CHL",
];

fn flags(df: &DataFrame, name: &str) -> Vec<i32> {
    df.column(name)
        .unwrap()
        .i32()
        .unwrap()
        .into_iter()
        .map(|v| v.unwrap())
        .collect()
}

proptest! {
    #[test]
    fn shot_classes_nest(codes in prop::collection::vec(prop::sample::select(CODES.to_vec()), 1..40)) {
        let df = df!("Event" => codes).unwrap();
        let out = add_shot_classes(&df).unwrap();
        let corsi = flags(&out, "is_corsi");
        let fenwick = flags(&out, "is_fenwick");
        let shot = flags(&out, "is_shot");
        for i in 0..out.height() {
            prop_assert!(corsi[i] >= fenwick[i]);
            prop_assert!(fenwick[i] >= shot[i]);
        }
    }

    #[test]
    fn score_diff_stays_within_cap(
        scores in prop::collection::vec((0i64..15, 0i64..15), 1..30),
        cap in 0i64..6,
    ) {
        let config = FeatureConfig { score_diff_cap: cap, ..FeatureConfig::default() };
        let df = df!(
            "Home_Score" => scores.iter().map(|(home, _)| *home).collect::<Vec<_>>(),
            "Away_Score" => scores.iter().map(|(_, away)| *away).collect::<Vec<_>>()
        )
        .unwrap();
        let out = add_score_diff(&df, &config).unwrap();
        let diffs = out.column("score_diff").unwrap().i64().unwrap();
        for ((home, away), diff) in scores.iter().zip(diffs) {
            let diff = diff.unwrap();
            prop_assert!((-cap..=cap).contains(&diff));
            prop_assert_eq!(diff, clamp_score_diff(*home, *away, cap));
            if (home - away).abs() <= cap {
                prop_assert_eq!(diff, home - away);
            }
        }
    }

    #[test]
    fn distance_is_non_negative_and_mirrored(x in -100.0..100.0f64, y in -42.5..42.5f64) {
        let config = FeatureConfig::default();
        let distance = shot_distance(x, y, &config);
        prop_assert!(distance >= 0.0);
        prop_assert_eq!(distance, shot_distance(-x, -y, &config));
    }

    #[test]
    fn angle_stays_in_half_turn(x in -100.0..100.0f64, y in -42.5..42.5f64) {
        let config = FeatureConfig::default();
        prop_assume!(shot_distance(x, y, &config) > 1e-3);
        let angle = shot_angle(x, y, &config);
        prop_assert!((0.0..=180.0).contains(&angle));
        if x.abs() > config.behind_net_x {
            prop_assert!(angle >= 90.0);
        } else {
            prop_assert!(angle <= 90.0);
        }
    }
}
