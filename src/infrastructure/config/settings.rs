//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all settings. Every
//! table is optional; an empty file describes the standard six-team league.
//!
//! # Example
//!
//! ```no_run
//! use pennant::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("pennant.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::league::LeagueConfig;
use super::logging::LoggingConfig;
use super::solver::SolverConfig;
use super::tuning::TuningConfig;
use crate::application::model::{ModelOptions, ModelTuning};
use crate::domain::error::DomainError;
use crate::domain::League;
use crate::error::{ConfigError, Result};
use crate::port::SolveBudget;

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// League shape and ranking policies.
    #[serde(default)]
    pub league: LeagueConfig,

    /// Time and solution budget for each solve.
    #[serde(default)]
    pub solver: SolverConfig,

    /// Numeric constants of the model.
    ///
    /// The defaults suit any league with fewer than a hundred games per
    /// team; longer seasons need a smaller `min_margin`.
    #[serde(default)]
    pub tuning: TuningConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML content is malformed
    /// - Validation fails (e.g., a big-M that does not cover the season)
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Render the effective configuration as TOML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| {
            ConfigError::InvalidValue {
                field: "config",
                reason: e.to_string(),
            }
            .into()
        })
    }

    /// Validate configuration values.
    ///
    /// Checks that the league is playable, the solver budget is usable, and
    /// the tuning constants are safe for the league's season length.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<()> {
        let league = self.league()?;

        if !self.league.names.is_empty() {
            if self.league.names.len() != league.teams() {
                return Err(ConfigError::InvalidValue {
                    field: "names",
                    reason: format!(
                        "expected {} names, got {}",
                        league.teams(),
                        self.league.names.len()
                    ),
                }
                .into());
            }
            let mut seen = HashSet::new();
            for name in &self.league.names {
                let key = name.trim().to_ascii_lowercase();
                if key.is_empty() || key.parse::<usize>().is_ok() {
                    return Err(ConfigError::InvalidValue {
                        field: "names",
                        reason: format!("'{name}' is not a usable team name"),
                    }
                    .into());
                }
                if !seen.insert(key) {
                    return Err(ConfigError::InvalidValue {
                        field: "names",
                        reason: format!("'{name}' is listed twice"),
                    }
                    .into());
                }
            }
        }

        if self.solver.time_limit_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "time_limit_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.solver.solution_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "solution_limit",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.solver.threads == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "threads",
                reason: "must be greater than 0 when set".to_string(),
            }
            .into());
        }

        ModelTuning::from(&self.tuning)
            .validate(&league)
            .map_err(|e| match e {
                DomainError::UnsafeTuning { parameter, reason } => ConfigError::InvalidValue {
                    field: parameter,
                    reason,
                },
                other => ConfigError::InvalidValue {
                    field: "tuning",
                    reason: other.to_string(),
                },
            })?;

        Ok(())
    }

    /// The validated league described by the `[league]` table.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if the schedule is unplayable.
    pub fn league(&self) -> Result<League> {
        self.league.league().map_err(|e| {
            ConfigError::InvalidValue {
                field: "league",
                reason: e.to_string(),
            }
            .into()
        })
    }

    #[must_use]
    pub fn model_options(&self) -> ModelOptions {
        ModelOptions {
            tie_break: self.league.tie_break,
            closure: self.league.ranking_closure,
            tuning: ModelTuning::from(&self.tuning),
        }
    }

    #[must_use]
    pub fn solve_budget(&self) -> SolveBudget {
        SolveBudget::from(&self.solver)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
