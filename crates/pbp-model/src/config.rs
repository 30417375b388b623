//! Tunable constants of the feature formulas.

use serde::{Deserialize, Serialize};

use crate::error::{PbpError, Result};

/// Thresholds and offsets used by the enricher.
///
/// Defaults reproduce the published feature definitions; a JSON file with
/// any subset of the fields can override them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureConfig {
    /// Distance from center ice to the goal line, in feet.
    pub goal_line_x: f64,
    /// `|x|` beyond which a location is behind the net.
    pub behind_net_x: f64,
    /// Time delta produced by a period rollover (20 minutes in seconds, negated).
    pub period_reset_seconds: f64,
    /// Window (exclusive) in which a prior event makes a rebound or rush.
    pub sequence_window_seconds: f64,
    /// `|x|` below which the prior event counts as neutral zone.
    pub neutral_zone_x: f64,
    /// Cap on the absolute home-minus-away score differential.
    pub score_diff_cap: i64,
    /// Defensive-zone shot attempts this close to the net are relabelled offensive.
    pub zone_correction_distance: f64,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        Self {
            goal_line_x: 87.95,
            behind_net_x: 88.0,
            period_reset_seconds: -1200.0,
            sequence_window_seconds: 4.0,
            neutral_zone_x: 26.0,
            score_diff_cap: 3,
            zone_correction_distance: 64.0,
        }
    }
}

impl FeatureConfig {
    /// Check that every threshold is usable.
    pub fn validate(&self) -> Result<()> {
        let positive = [
            ("goal_line_x", self.goal_line_x),
            ("behind_net_x", self.behind_net_x),
            ("sequence_window_seconds", self.sequence_window_seconds),
            ("neutral_zone_x", self.neutral_zone_x),
            ("zone_correction_distance", self.zone_correction_distance),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(PbpError::InvalidConfig(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        if !self.period_reset_seconds.is_finite() || self.period_reset_seconds >= 0.0 {
            return Err(PbpError::InvalidConfig(format!(
                "period_reset_seconds must be negative, got {}",
                self.period_reset_seconds
            )));
        }
        if self.score_diff_cap < 0 {
            return Err(PbpError::InvalidConfig(format!(
                "score_diff_cap must not be negative, got {}",
                self.score_diff_cap
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(FeatureConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_thresholds() {
        let config = FeatureConfig {
            sequence_window_seconds: 0.0,
            ..FeatureConfig::default()
        };
        assert!(matches!(config.validate(), Err(PbpError::InvalidConfig(_))));

        let config = FeatureConfig {
            period_reset_seconds: 1200.0,
            ..FeatureConfig::default()
        };
        assert!(config.validate().is_err());

        let config = FeatureConfig {
            goal_line_x: f64::NAN,
            ..FeatureConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
