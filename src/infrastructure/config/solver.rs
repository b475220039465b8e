//! Solver budget configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::port::SolveBudget;

/// The `[solver]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Wall-clock limit for one solve in seconds (default: 10).
    #[serde(default = "default_time_limit_secs")]
    pub time_limit_secs: u64,
    /// Feasible points to find before stopping (default: 1).
    #[serde(default = "default_solution_limit")]
    pub solution_limit: u32,
    /// Solver threads; unset leaves the choice to the backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threads: Option<u32>,
}

const fn default_time_limit_secs() -> u64 {
    10
}

const fn default_solution_limit() -> u32 {
    1
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: default_time_limit_secs(),
            solution_limit: default_solution_limit(),
            threads: None,
        }
    }
}

impl From<&SolverConfig> for SolveBudget {
    fn from(config: &SolverConfig) -> Self {
        Self {
            time_limit: Duration::from_secs(config.time_limit_secs),
            solution_limit: config.solution_limit,
            threads: config.threads,
        }
    }
}
