//! CSV in, CSV out.

use std::fs;

use pbp_cli::workflow::{aggregate_file, enrich_file};
use pbp_ingest::read_events_csv;
use pbp_model::{FeatureConfig, StrengthState};
use polars::prelude::*;
use tempfile::TempDir;

const HEADER: &str = "season,Game_Id,Date,Home_Team,Away_Team,Ev_Team,Home_Players,Away_Players,\
Home_Goalie,Away_Goalie,Event,Description,xC,yC,Seconds_Elapsed,p1_ID,p1_name,p2_ID,p2_name,\
p3_ID,p3_name,Home_Score,Away_Score,homePlayer1_id,homePlayer2_id,homePlayer3_id,homePlayer4_id,\
homePlayer5_id,homePlayer6_id,awayPlayer1_id,awayPlayer2_id,awayPlayer3_id,awayPlayer4_id,\
awayPlayer5_id,awayPlayer6_id";

const ROWS: [&str; 4] = [
    "20182019,20001,2018-10-03,TOR,MTL,TOR,6,5,ANDERSEN,PRICE,FAC,TOR won Neu. Zone,0,0,0,11,PLAYER 11,21,PLAYER 21,,,0,0,11,12,13,14,15,10,21,22,23,24,30,",
    "20182019,20001,2018-10-03,TOR,MTL,TOR,6,5,ANDERSEN,PRICE,SHOT,TOR Wrist Off. Zone,60,5,10,12,PLAYER 12,30,PLAYER 30,,,0,0,11,12,13,14,15,10,21,22,23,24,30,",
    "20182019,20001,2018-10-03,TOR,MTL,TOR,6,5,ANDERSEN,PRICE,GOAL,TOR Snap Off. Zone,80,-2,12,12,PLAYER 12,11,PLAYER 11,13,PLAYER 13,1,0,11,12,13,14,15,10,21,22,23,24,30,",
    "20182019,20001,2018-10-03,TOR,MTL,MTL,6,5,ANDERSEN,PRICE,PENL,MTL Hooking Def. Zone,-70,20,40,22,PLAYER 22,13,PLAYER 13,,,1,0,11,12,13,14,15,10,21,22,23,24,30,",
];

fn write_events(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("events.csv");
    let mut body = String::from(HEADER);
    for row in ROWS {
        body.push('\n');
        body.push_str(row);
    }
    body.push('\n');
    fs::write(&path, body).unwrap();
    path
}

fn measure(df: &DataFrame, player: i64, name: &str) -> Option<i64> {
    let ids = df.column("player_id").unwrap().cast(&DataType::Int64).unwrap();
    let values = df.column(name).unwrap().cast(&DataType::Int64).unwrap();
    ids.i64()
        .unwrap()
        .into_iter()
        .zip(values.i64().unwrap())
        .find(|(id, _)| *id == Some(player))
        .and_then(|(_, value)| value)
}

#[test]
fn enrich_writes_derived_columns() {
    let dir = TempDir::new().unwrap();
    let input = write_events(&dir);
    let output = dir.path().join("enriched.csv");

    let outcome = enrich_file(&input, &output, &FeatureConfig::default()).unwrap();

    assert_eq!(outcome.rows, 4);
    assert_eq!(outcome.derived_columns, 14);
    let back = read_events_csv(&output).unwrap();
    assert_eq!(back.height(), 4);
    for column in ["distance", "angle", "is_rebound", "zone", "score_diff"] {
        assert!(back.column(column).is_ok(), "{column}");
    }
}

#[test]
fn aggregate_with_enrichment_credits_power_play_players() {
    let dir = TempDir::new().unwrap();
    let input = write_events(&dir);
    let output = dir.path().join("metrics").join("pp.csv");
    let strength = StrengthState::from_label("5v4").unwrap();

    let outcome =
        aggregate_file(&input, &output, strength, Some(&FeatureConfig::default())).unwrap();

    assert_eq!(outcome.events, 4);
    let metrics = &outcome.metrics;
    assert_eq!(metrics.height(), 3);
    assert_eq!(measure(metrics, 11, "FOW"), Some(1));
    assert_eq!(measure(metrics, 11, "a1"), Some(1));
    assert_eq!(measure(metrics, 12, "iCF"), Some(2));
    assert_eq!(measure(metrics, 12, "iSF"), Some(2));
    assert_eq!(measure(metrics, 12, "g"), Some(1));
    assert_eq!(measure(metrics, 13, "a2"), Some(1));
    assert_eq!(measure(metrics, 13, "iPEND"), Some(1));

    let written = read_events_csv(&output).unwrap();
    assert_eq!(written.height(), 3);
    assert_eq!(measure(&written, 13, "iPEND"), Some(1));
}

#[test]
fn aggregate_without_enrichment_reports_missing_flags() {
    let dir = TempDir::new().unwrap();
    let input = write_events(&dir);
    let output = dir.path().join("pp.csv");

    let err = aggregate_file(&input, &output, StrengthState::new(6, 5), None).unwrap_err();

    assert!(format!("{err:#}").contains("is_corsi"));
    assert!(!output.exists());
}
