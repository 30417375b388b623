use anyhow::{Context, Result};
use pbp_cli::summary::{print_aggregate_summary, print_enrich_summary, strength_rows, strength_table};
use pbp_cli::workflow::{aggregate_file, enrich_file};
use pbp_ingest::read_feature_config;
use pbp_model::FeatureConfig;
use tracing::debug;

use crate::cli::{AggregateArgs, EnrichArgs};

/// Player rows shown after an aggregation.
const PREVIEW_ROWS: usize = 10;

fn load_config(path: Option<&std::path::Path>) -> Result<FeatureConfig> {
    match path {
        Some(path) => {
            let config = read_feature_config(path)
                .with_context(|| format!("load feature config {}", path.display()))?;
            debug!(?config, "loaded feature config");
            Ok(config)
        }
        None => Ok(FeatureConfig::default()),
    }
}

pub fn run_enrich(args: &EnrichArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let outcome = enrich_file(&args.input, &args.output, &config)?;
    print_enrich_summary(&outcome);
    Ok(())
}

pub fn run_aggregate(args: &AggregateArgs) -> Result<()> {
    let strength = args.strength_state()?;
    let config = if args.enrich {
        Some(load_config(args.config.as_deref())?)
    } else {
        None
    };
    let outcome = aggregate_file(&args.input, &args.output, strength, config.as_ref())?;
    print_aggregate_summary(&outcome, PREVIEW_ROWS);
    Ok(())
}

pub fn run_strengths() -> Result<()> {
    println!("{}", strength_table(&strength_rows()));
    Ok(())
}
