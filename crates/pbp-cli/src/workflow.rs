//! File-to-file runs of the enricher and the aggregator.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use pbp_aggregate::ppespk_ind_metrics;
use pbp_features::{FeaturePipeline, enrich};
use pbp_ingest::{read_events_csv, write_csv};
use pbp_model::{FeatureConfig, StrengthState};
use polars::prelude::DataFrame;
use tracing::{info, info_span};

/// Result of an `enrich` run.
#[derive(Debug)]
pub struct EnrichOutcome {
    pub rows: usize,
    pub derived_columns: usize,
    pub output: PathBuf,
}

/// Result of an `aggregate` run.
#[derive(Debug)]
pub struct AggregateOutcome {
    pub strength: StrengthState,
    pub events: usize,
    pub metrics: DataFrame,
    pub output: PathBuf,
}

pub fn enrich_file(input: &Path, output: &Path, config: &FeatureConfig) -> Result<EnrichOutcome> {
    let span = info_span!("enrich_file", input = %input.display());
    let _guard = span.enter();

    let events = read_events_csv(input).context("read events")?;
    let mut enriched = enrich(&events, config).context("derive features")?;
    write_csv(&mut enriched, output).context("write enriched events")?;

    Ok(EnrichOutcome {
        rows: enriched.height(),
        derived_columns: FeaturePipeline::standard().stats().derived_columns,
        output: output.to_path_buf(),
    })
}

/// Aggregate `input` at `strength`, enriching it first when `enrich_with`
/// carries a configuration.
pub fn aggregate_file(
    input: &Path,
    output: &Path,
    strength: StrengthState,
    enrich_with: Option<&FeatureConfig>,
) -> Result<AggregateOutcome> {
    let span = info_span!("aggregate_file", input = %input.display(), strength = %strength);
    let _guard = span.enter();
    let start = Instant::now();

    let mut events = read_events_csv(input).context("read events")?;
    if let Some(config) = enrich_with {
        events = enrich(&events, config).context("derive features")?;
    }
    let mut metrics = ppespk_ind_metrics(&events, strength)
        .with_context(|| format!("aggregate {strength} metrics"))?;
    write_csv(&mut metrics, output).context("write player metrics")?;

    info!(
        players = metrics.height(),
        duration_ms = start.elapsed().as_millis(),
        "wrote player metrics"
    );
    Ok(AggregateOutcome {
        strength,
        events: events.height(),
        metrics,
        output: output.to_path_buf(),
    })
}
