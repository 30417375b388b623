use std::io::Write;

use pbp_ingest::{IngestError, read_events_csv, read_feature_config, write_csv};
use pbp_model::FeatureConfig;
use polars::prelude::*;
use tempfile::{NamedTempFile, TempDir};

const EVENTS: &str = "\
season,Game_Id,Event,xC,yC,homePlayer6_id,p1_ID
20182019,20001,FAC,0,0,,8478483
20182019,20001,SHOT,-60,12,,8478483
20182019,20001,GOAL,70,-3,8475883,8471214.0
";

#[test]
fn sparse_roster_slot_is_typed_from_the_whole_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(EVENTS.as_bytes()).unwrap();

    let df = read_events_csv(file.path()).unwrap();

    assert_eq!(df.height(), 3);
    assert_eq!(df.column("homePlayer6_id").unwrap().dtype(), &DataType::Int64);
    assert_eq!(df.column("homePlayer6_id").unwrap().null_count(), 2);
    assert_eq!(df.column("p1_ID").unwrap().dtype(), &DataType::Float64);
}

#[test]
fn written_table_reads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("metrics.csv");
    let mut df = df!(
        "player_id" => [8478483i64, 8471214],
        "player_name" => ["AUSTON.MATTHEWS", "JOHN.TAVARES"],
        "iCF" => [5i64, 0]
    )
    .unwrap();

    write_csv(&mut df, &path).unwrap();
    let back = read_events_csv(&path).unwrap();

    assert!(df.equals(&back));
}

#[test]
fn partial_config_keeps_defaults() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"score_diff_cap": 2}}"#).unwrap();

    let config = read_feature_config(file.path()).unwrap();

    assert_eq!(config.score_diff_cap, 2);
    assert_eq!(config.goal_line_x, FeatureConfig::default().goal_line_x);
}

#[test]
fn invalid_config_names_the_file() {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, r#"{{"neutral_zone_x": -1.0}}"#).unwrap();

    let err = read_feature_config(file.path()).unwrap_err();

    assert!(matches!(err, IngestError::Config { .. }));
    assert!(err.to_string().contains("neutral_zone_x"));
}
