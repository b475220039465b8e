//! Numeric constants of the standings model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::application::model::{ModelTuning, DEFAULT_BIG_M, DEFAULT_MIN_MARGIN};

/// The `[tuning]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuningConfig {
    /// Smallest win-percentage difference that counts as a lead
    /// (default: 0.00001). Must stay below `1 / season_length²`.
    #[serde(default = "default_min_margin")]
    pub min_margin: Decimal,
    /// Relaxation constant for conditional constraints (default: 10000).
    /// Must exceed the season length.
    #[serde(default = "default_big_m")]
    pub big_m: Decimal,
}

fn default_min_margin() -> Decimal {
    DEFAULT_MIN_MARGIN
}

fn default_big_m() -> Decimal {
    DEFAULT_BIG_M
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            min_margin: default_min_margin(),
            big_m: default_big_m(),
        }
    }
}

impl From<&TuningConfig> for ModelTuning {
    fn from(config: &TuningConfig) -> Self {
        Self {
            min_margin: config.min_margin,
            big_m: config.big_m,
        }
    }
}
