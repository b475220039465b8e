//! Linearization of a ratio whose denominator is an unknown integer.
//!
//! A ratio `numerator / denominator` cannot appear in a linear model. When
//! the denominator is known to take one of a small set of integer values,
//! the ratio can still be expressed exactly: one binary selector per
//! candidate denominator `j` (exactly one is true), and one continuous rate
//! variable per candidate that is forced to zero unless selected and to
//! `numerator / j` when selected. The ratio is then the sum of the rate
//! variables.
//!
//! For a selector `x` and candidate `j` the big-M constraints are:
//!
//! ```text
//! denominator <= j*x + M*(1 - x)      denominator >= j*x
//! rate        <= max_ratio * x
//! j*rate      >= numerator - M*(1 - x)
//! j*rate      <= numerator + M*(1 - x)
//! ```
//!
//! `M` must exceed every value the denominator and numerator can reach,
//! otherwise the relaxation for `x = 0` cuts off valid assignments.

use std::ops::RangeInclusive;

use rust_decimal::Decimal;

use crate::domain::constraint::{Constraint, LinearExpr, VarId, VarKind, VariableBounds};
use crate::port::MilpProblem;

/// Selector and rate variables for one linearized ratio.
#[derive(Debug, Clone)]
pub struct RatioVariables {
    candidates: RangeInclusive<u32>,
    selectors: Vec<VarId>,
    rates: Vec<VarId>,
}

impl RatioVariables {
    /// Declare one selector and one rate per candidate denominator.
    ///
    /// # Panics
    ///
    /// Panics if the candidate range is empty or includes zero.
    pub fn declare(
        problem: &mut MilpProblem,
        label: &str,
        candidates: RangeInclusive<u32>,
        max_ratio: Decimal,
    ) -> Self {
        assert!(
            !candidates.is_empty() && *candidates.start() > 0,
            "ratio candidates must be a non-empty range of positive denominators"
        );

        let selectors = candidates
            .clone()
            .map(|j| {
                problem.add_variable(
                    format!("{label}_selected_{j}"),
                    VarKind::Binary,
                    VariableBounds::binary(),
                )
            })
            .collect();
        let rates = candidates
            .clone()
            .map(|j| {
                problem.add_variable(
                    format!("{label}_{j}"),
                    VarKind::Continuous,
                    VariableBounds::bounded(Decimal::ZERO, max_ratio),
                )
            })
            .collect();

        Self {
            candidates,
            selectors,
            rates,
        }
    }

    /// Candidate denominators, in the order of [`selectors`](Self::selectors).
    pub fn candidates(&self) -> impl Iterator<Item = u32> {
        self.candidates.clone()
    }

    #[must_use]
    pub fn selectors(&self) -> &[VarId] {
        &self.selectors
    }

    #[must_use]
    pub fn rates(&self) -> &[VarId] {
        &self.rates
    }

    /// The ratio as a linear expression: the sum of the per-candidate rates.
    #[must_use]
    pub fn value(&self) -> LinearExpr {
        LinearExpr::sum(self.rates.iter().copied())
    }

    /// The denominator picked by a solved assignment, if exactly one is.
    #[must_use]
    pub fn selected(&self, values: &[Decimal]) -> Option<u32> {
        let mut picked = self
            .candidates()
            .zip(&self.selectors)
            .filter(|(_, x)| {
                values
                    .get(x.index())
                    .is_some_and(|v| *v >= Decimal::new(5, 1))
            })
            .map(|(j, _)| j);
        match (picked.next(), picked.next()) {
            (Some(j), None) => Some(j),
            _ => None,
        }
    }
}

/// Constrain `vars` so that its value equals `numerator / denominator`.
///
/// `denominator` must be an integral expression whose value lies in the
/// candidate range of `vars`; any other value makes the model infeasible.
pub fn linearize_ratio(
    problem: &mut MilpProblem,
    vars: &RatioVariables,
    numerator: &LinearExpr,
    denominator: &LinearExpr,
    big_m: Decimal,
) {
    let max_ratio = vars
        .rates
        .first()
        .and_then(|r| problem.variables()[r.index()].bounds.upper)
        .unwrap_or(Decimal::ONE);

    for ((j, &x), &rate) in vars.candidates().zip(&vars.selectors).zip(&vars.rates) {
        let j = Decimal::from(j);
        // M*(1 - x)
        let slack = LinearExpr::constant(big_m) - big_m * x;

        // x = 1  =>  denominator = j
        problem.add_constraint(Constraint::leq(
            denominator.clone(),
            j * x + slack.clone(),
        ));
        problem.add_constraint(Constraint::geq(denominator.clone(), j * x));

        // x = 0  =>  rate = 0
        problem.add_constraint(Constraint::leq(rate, max_ratio * x));

        // x = 1  =>  j * rate = numerator
        problem.add_constraint(Constraint::geq(
            j * rate,
            numerator.clone() - slack.clone(),
        ));
        problem.add_constraint(Constraint::leq(j * rate, numerator.clone() + slack));
    }

    // Exactly one candidate denominator holds.
    problem.add_constraint(Constraint::eq(
        LinearExpr::sum(vars.selectors.iter().copied()),
        Decimal::ONE,
    ));
}
