//! HiGHS solver implementation via good_lp.
//!
//! HiGHS is a high-performance open-source linear/mixed-integer programming solver.
//! This implementation wraps it using the good_lp crate for ergonomic Rust usage.

use std::time::Instant;

use good_lp::solvers::highs::highs;
use good_lp::{
    constraint, variable, variables, Expression, ResolutionError, Solution, SolverModel,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::{debug, info, warn};

use crate::domain::constraint::ConstraintSense;
use crate::error::{Error, Result};
use crate::port::{MilpOutcome, MilpProblem, MilpSolver, SolveBudget};

/// Slack allowed when checking the returned assignment against the model.
const FEASIBILITY_TOLERANCE: Decimal = dec!(0.000001);

/// HiGHS-based MILP solver.
#[derive(Debug, Default, Clone)]
pub struct HighsSolver;

impl HighsSolver {
    /// Create a new HiGHS solver instance.
    pub fn new() -> Self {
        Self
    }
}

impl MilpSolver for HighsSolver {
    fn name(&self) -> &'static str {
        "highs"
    }

    fn solve(&self, problem: &MilpProblem, budget: &SolveBudget) -> Result<MilpOutcome> {
        solve_with_good_lp(problem, budget)
    }
}

/// Internal solver implementation using good_lp.
fn solve_with_good_lp(problem: &MilpProblem, budget: &SolveBudget) -> Result<MilpOutcome> {
    let n = problem.num_vars();

    // Handle empty problem
    if n == 0 {
        return Ok(if problem.num_constraints() == 0 {
            MilpOutcome::Feasible(vec![])
        } else {
            trivial_outcome(problem)
        });
    }

    // Create variables
    let mut vars = variables!();
    let mut var_list = Vec::with_capacity(n);

    for def in problem.variables() {
        let mut v = variable().name(def.name.clone());

        // Apply bounds
        if let Some(lb) = def.bounds.lower {
            v = v.min(lb.to_f64().unwrap_or(0.0));
        }
        if let Some(ub) = def.bounds.upper {
            v = v.max(ub.to_f64().unwrap_or(f64::INFINITY));
        }

        // Mark as integer if needed
        if def.kind.is_integral() {
            v = v.integer();
        }

        var_list.push(vars.add(v));
    }

    // Any feasible point will do
    let mut model = vars
        .minimise(Expression::from(0.0))
        .using(highs)
        .set_time_limit(budget.time_limit.as_secs_f64())
        .set_option(
            "mip_max_improving_sols",
            i32::try_from(budget.solution_limit.max(1)).unwrap_or(i32::MAX),
        );
    if let Some(threads) = budget.threads {
        model = model.set_threads(threads);
    }

    // Add constraints
    for constr in problem.constraints() {
        let lhs: Expression = constr
            .lhs
            .terms()
            .iter()
            .map(|(v, c)| c.to_f64().unwrap_or(0.0) * var_list[v.index()])
            .sum();

        let rhs = constr.rhs.to_f64().unwrap_or(0.0);

        match constr.sense {
            ConstraintSense::GreaterEqual => {
                model = model.with(constraint!(lhs >= rhs));
            }
            ConstraintSense::LessEqual => {
                model = model.with(constraint!(lhs <= rhs));
            }
            ConstraintSense::Equal => {
                model = model.with(constraint!(lhs == rhs));
            }
        }
    }

    debug!(
        variables = n,
        integral = problem.num_integral(),
        constraints = problem.num_constraints(),
        time_limit_secs = budget.time_limit.as_secs_f64(),
        "Handing model to HiGHS"
    );

    // Solve
    let started = Instant::now();
    let solved = model.solve();
    let elapsed_ms = started.elapsed().as_millis();

    match solved {
        Ok(solution) => {
            let values: Vec<Decimal> = problem
                .variables()
                .iter()
                .zip(&var_list)
                .map(|(def, v)| {
                    let raw = Decimal::try_from(solution.value(*v)).unwrap_or(Decimal::ZERO);
                    if def.kind.is_integral() {
                        raw.round()
                    } else {
                        raw
                    }
                })
                .collect();

            // A time or solution limit can end the search without a usable
            // point, and good_lp reports that as success.
            let violations = problem.violations(&values, FEASIBILITY_TOLERANCE);
            if violations.is_empty() {
                info!(elapsed_ms, "HiGHS found a feasible solution");
                Ok(MilpOutcome::Feasible(values))
            } else {
                warn!(
                    elapsed_ms,
                    violations = violations.len(),
                    first = %violations[0],
                    "HiGHS stopped without a feasible solution"
                );
                Ok(MilpOutcome::Unknown)
            }
        }
        Err(ResolutionError::Infeasible) => {
            info!(elapsed_ms, "HiGHS proved the model infeasible");
            Ok(MilpOutcome::Infeasible)
        }
        Err(e) => Err(Error::Solver(e.to_string())),
    }
}

/// Outcome for a model with constraints but no variables.
fn trivial_outcome(problem: &MilpProblem) -> MilpOutcome {
    if problem.violations(&[], FEASIBILITY_TOLERANCE).is_empty() {
        MilpOutcome::Feasible(vec![])
    } else {
        MilpOutcome::Infeasible
    }
}
