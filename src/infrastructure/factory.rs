//! Component factory functions.
//!
//! Wires configuration to the concrete adapters the application runs with.

use std::sync::Arc;

use crate::adapter::solver::HighsSolver;
use crate::application::FeasibilityService;
use crate::error::Result;
use crate::infrastructure::config::Config;
use crate::port::MilpSolver;

/// Build the default MILP solver (HiGHS).
pub fn build_solver() -> Arc<dyn MilpSolver> {
    Arc::new(HighsSolver::new())
}

/// Build a feasibility service for the configured league on `solver`.
///
/// # Errors
///
/// Returns an error if the configured league is invalid.
pub fn build_feasibility_service(
    config: &Config,
    solver: Arc<dyn MilpSolver>,
) -> Result<FeasibilityService> {
    Ok(FeasibilityService::new(
        solver,
        config.league()?,
        config.model_options(),
        config.solve_budget(),
    ))
}
