//! Domain vocabulary shared by the play-by-play feature and aggregation crates.
//!
//! Nothing in here touches a DataFrame. Column names, event codes, strength
//! states and tuning constants are defined once so the enricher and the
//! aggregator agree on the same table contract.

pub mod columns;
pub mod config;
pub mod error;
pub mod event;
pub mod strength;

pub use config::FeatureConfig;
pub use error::{PbpError, Result};
pub use event::{EventType, Zone};
pub use strength::{Actor, Perspective, StrengthState};
