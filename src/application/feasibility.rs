//! Feasibility check use case.
//!
//! Validates the request, builds a fresh [`StandingsModel`], hands it to the
//! configured [`MilpSolver`] and turns the solver's answer into an
//! [`Outcome`]. A completion is only reported after it passes the exact
//! re-check in [`verify_completion`].

use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use tracing::{info, warn};

use super::model::{ModelOptions, StandingsModel};
use super::verify::verify_completion;
use crate::domain::{DesiredRanking, League, Ledger};
use crate::error::Result;
use crate::port::{MilpOutcome, MilpSolver, SolveBudget};

/// Answer to "can the season still end in this ranking?".
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", content = "completion", rename_all = "lowercase")]
pub enum Outcome {
    /// The ranking is reachable; one completed season realizing it.
    Feasible(Ledger),
    /// No completion of the season produces the ranking.
    Infeasible,
    /// The solver budget ran out before a conclusion.
    Unknown,
}

impl Outcome {
    #[must_use]
    pub const fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible(_))
    }

    /// The completed season, if one was found.
    #[must_use]
    pub const fn completion(&self) -> Option<&Ledger> {
        match self {
            Self::Feasible(ledger) => Some(ledger),
            Self::Infeasible | Self::Unknown => None,
        }
    }

    /// Flag-and-ledger view of the outcome.
    #[must_use]
    pub fn into_pair(self) -> (bool, Option<Ledger>) {
        match self {
            Self::Feasible(ledger) => (true, Some(ledger)),
            Self::Infeasible | Self::Unknown => (false, None),
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Feasible(_) => "feasible",
            Self::Infeasible => "infeasible",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runs feasibility checks for one league configuration.
#[derive(Clone)]
pub struct FeasibilityService {
    solver: Arc<dyn MilpSolver>,
    league: League,
    options: ModelOptions,
    budget: SolveBudget,
}

impl FeasibilityService {
    pub fn new(
        solver: Arc<dyn MilpSolver>,
        league: League,
        options: ModelOptions,
        budget: SolveBudget,
    ) -> Self {
        Self {
            solver,
            league,
            options,
            budget,
        }
    }

    #[must_use]
    pub const fn league(&self) -> &League {
        &self.league
    }

    #[must_use]
    pub const fn options(&self) -> &ModelOptions {
        &self.options
    }

    #[must_use]
    pub const fn budget(&self) -> &SolveBudget {
        &self.budget
    }

    /// Decide whether `ledger` can be completed so that `ranking` holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger does not fit the league or the solver
    /// backend fails. Infeasibility and exhausted budgets are outcomes, not
    /// errors.
    pub fn check(&self, ledger: &Ledger, ranking: &DesiredRanking) -> Result<Outcome> {
        let model = StandingsModel::build(&self.league, ledger, ranking, &self.options)
            .map_err(|e| {
                warn!(error = %e, "Rejected malformed request");
                e
            })?;

        info!(
            solver = self.solver.name(),
            ranking = %ranking,
            variables = model.problem().num_vars(),
            constraints = model.problem().num_constraints(),
            "Checking ranking feasibility"
        );

        let started = Instant::now();
        let outcome = match self.solver.solve(model.problem(), &self.budget)? {
            MilpOutcome::Feasible(values) => {
                let Some(completion) = model.extract(&values) else {
                    warn!(
                        solver = self.solver.name(),
                        values = values.len(),
                        variables = model.problem().num_vars(),
                        "Solver returned an assignment of the wrong size"
                    );
                    return Ok(Outcome::Unknown);
                };
                let problems =
                    verify_completion(&self.league, ledger, &completion, ranking, &self.options);
                if problems.is_empty() {
                    Outcome::Feasible(completion)
                } else {
                    warn!(
                        problems = problems.len(),
                        first = %problems[0],
                        "Solver completion failed exact re-check"
                    );
                    Outcome::Unknown
                }
            }
            MilpOutcome::Infeasible => Outcome::Infeasible,
            MilpOutcome::Unknown => Outcome::Unknown,
        };

        info!(
            outcome = %outcome,
            elapsed_ms = started.elapsed().as_millis(),
            "Feasibility check finished"
        );
        Ok(outcome)
    }
}
