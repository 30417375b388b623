//! File I/O around the play-by-play core.
//!
//! - **csv**: event tables in, enriched and aggregated tables out
//! - **config**: JSON overrides for [`FeatureConfig`](pbp_model::FeatureConfig)

pub mod config;
pub mod csv;
pub mod error;

pub use config::read_feature_config;
pub use csv::{read_events_csv, write_csv};
pub use error::{IngestError, Result};
