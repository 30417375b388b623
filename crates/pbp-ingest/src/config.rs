use std::fs;
use std::path::Path;

use pbp_model::FeatureConfig;

use crate::error::{IngestError, Result};

/// Load a [`FeatureConfig`] from JSON; absent fields keep their defaults.
pub fn read_feature_config(path: &Path) -> Result<FeatureConfig> {
    let config_error = |message: String| IngestError::Config {
        path: path.to_path_buf(),
        message,
    };
    let text = fs::read_to_string(path)?;
    let config: FeatureConfig =
        serde_json::from_str(&text).map_err(|e| config_error(e.to_string()))?;
    config.validate().map_err(|e| config_error(e.to_string()))?;
    Ok(config)
}
