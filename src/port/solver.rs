//! Solver port for mixed-integer linear programming.
//!
//! Defines the capability the standings model needs from an external
//! engine: accept a linear/integer constraint system plus a time and
//! solution budget, and report a feasible assignment, proven
//! infeasibility, or "unknown" when the budget ran out first.
//!
//! # Overview
//!
//! - [`MilpSolver`]: Solver backend interface
//! - [`MilpProblem`]: Variables and constraints of one model
//! - [`SolveBudget`]: Time and solution limits
//! - [`MilpOutcome`]: Normalized solver verdict

use std::time::Duration;

use rust_decimal::Decimal;

use crate::domain::constraint::{
    Constraint, LinearExpr, VarId, VarKind, VariableBounds, VariableDef,
};
use crate::error::Result;

/// Mixed-integer linear programming solver.
///
/// Implementations wrap a specific backend (HiGHS, CBC, ...) and must not
/// keep any state between calls: every call solves exactly the problem
/// it is given.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`) so a single solver
/// can serve concurrent requests.
pub trait MilpSolver: Send + Sync {
    /// Return the solver name for logging and configuration.
    fn name(&self) -> &'static str;

    /// Search for any assignment satisfying every constraint.
    ///
    /// The problem has no objective; the first feasible point is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error only when the backend itself fails. Infeasibility
    /// and exhausted budgets are reported through [`MilpOutcome`].
    fn solve(&self, problem: &MilpProblem, budget: &SolveBudget) -> Result<MilpOutcome>;
}

/// Decision variables and linear constraints of one model.
///
/// A problem is built from scratch for every request and owns its
/// variables; [`VarId`]s are only meaningful within the problem that
/// created them.
#[derive(Debug, Clone, Default)]
pub struct MilpProblem {
    variables: Vec<VariableDef>,
    constraints: Vec<Constraint>,
}

impl MilpProblem {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a variable and return its id.
    pub fn add_variable(
        &mut self,
        name: impl Into<String>,
        kind: VarKind,
        bounds: VariableBounds,
    ) -> VarId {
        let id = VarId::new(self.variables.len());
        self.variables.push(VariableDef {
            name: name.into(),
            kind,
            bounds,
        });
        id
    }

    /// Add a constraint over previously declared variables.
    pub fn add_constraint(&mut self, constraint: Constraint) {
        debug_assert!(
            constraint
                .lhs
                .terms()
                .iter()
                .all(|(var, _)| var.index() < self.variables.len()),
            "constraint references an undeclared variable"
        );
        self.constraints.push(constraint);
    }

    #[must_use]
    pub fn variables(&self) -> &[VariableDef] {
        &self.variables
    }

    #[must_use]
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    #[must_use]
    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Number of variables the solver must keep integral.
    #[must_use]
    pub fn num_integral(&self) -> usize {
        self.variables.iter().filter(|v| v.kind.is_integral()).count()
    }

    /// Names of the constraints and bounds an assignment violates.
    ///
    /// Integral variables must also be within `tolerance` of an integer.
    #[must_use]
    pub fn violations(&self, values: &[Decimal], tolerance: Decimal) -> Vec<String> {
        if values.len() != self.variables.len() {
            return vec![format!(
                "assignment has {} values for {} variables",
                values.len(),
                self.variables.len()
            )];
        }

        let mut violations = Vec::new();
        for (def, value) in self.variables.iter().zip(values) {
            if !def.bounds.contains(*value, tolerance) {
                violations.push(format!("{} = {value} is out of bounds", def.name));
            }
            if def.kind.is_integral() && (*value - value.round()).abs() > tolerance {
                violations.push(format!("{} = {value} is not integral", def.name));
            }
        }
        for (index, constraint) in self.constraints.iter().enumerate() {
            if !constraint.is_satisfied(values, tolerance) {
                violations.push(format!(
                    "constraint #{index} ({}) is violated",
                    describe(&constraint.lhs, self)
                ));
            }
        }
        violations
    }
}

fn describe(expr: &LinearExpr, problem: &MilpProblem) -> String {
    expr.terms()
        .iter()
        .map(|(var, coeff)| format!("{coeff}*{}", problem.variables[var.index()].name))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Time and solution limits handed to the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolveBudget {
    /// Wall-clock limit for one solve.
    pub time_limit: Duration,
    /// Stop after this many feasible solutions have been found.
    pub solution_limit: u32,
    /// Solver threads; `None` leaves the backend default.
    pub threads: Option<u32>,
}

impl Default for SolveBudget {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(10),
            solution_limit: 1,
            threads: None,
        }
    }
}

/// Solver verdict for one problem.
#[derive(Debug, Clone, PartialEq)]
pub enum MilpOutcome {
    /// A feasible assignment, one value per variable in declaration order.
    Feasible(Vec<Decimal>),
    /// The solver proved that no assignment exists.
    Infeasible,
    /// The budget ran out before a solution or a proof was found.
    Unknown,
}

impl MilpOutcome {
    /// Return `true` if the solver produced an assignment.
    #[must_use]
    pub fn is_feasible(&self) -> bool {
        matches!(self, Self::Feasible(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn two_var_problem() -> (MilpProblem, VarId, VarId) {
        let mut problem = MilpProblem::new();
        let x = problem.add_variable("x", VarKind::Integer, VariableBounds::non_negative());
        let y = problem.add_variable("y", VarKind::Binary, VariableBounds::binary());
        problem.add_constraint(Constraint::leq(LinearExpr::from(x) + y, dec!(3)));
        (problem, x, y)
    }

    #[test]
    fn add_variable_assigns_sequential_ids() {
        let (problem, x, y) = two_var_problem();
        assert_eq!(x.index(), 0);
        assert_eq!(y.index(), 1);
        assert_eq!(problem.num_vars(), 2);
        assert_eq!(problem.num_integral(), 2);
        assert_eq!(problem.num_constraints(), 1);
    }

    #[test]
    fn violations_empty_for_feasible_assignment() {
        let (problem, _, _) = two_var_problem();
        assert!(problem.violations(&[dec!(2), dec!(1)], dec!(0.000001)).is_empty());
    }

    #[test]
    fn violations_report_constraints_bounds_and_integrality() {
        let (problem, _, _) = two_var_problem();
        let violations = problem.violations(&[dec!(2.5), dec!(1)], dec!(0.000001));
        assert_eq!(violations.len(), 2);
        assert!(violations[0].contains("not integral"));
        assert!(violations[1].contains("1*x + 1*y"));

        let out_of_bounds = problem.violations(&[dec!(0), dec!(2)], dec!(0.000001));
        assert!(out_of_bounds.iter().any(|v| v.contains("y = 2 is out of bounds")));
    }

    #[test]
    fn violations_reject_wrong_length() {
        let (problem, _, _) = two_var_problem();
        assert_eq!(problem.violations(&[dec!(1)], dec!(0)).len(), 1);
    }

    #[test]
    fn default_budget_stops_at_first_solution() {
        let budget = SolveBudget::default();
        assert_eq!(budget.solution_limit, 1);
        assert_eq!(budget.time_limit, Duration::from_secs(10));
    }
}
