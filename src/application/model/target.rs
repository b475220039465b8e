//! Constraints pinning the desired ranking.

use rust_decimal::Decimal;

use super::variables::SeasonVariables;
use crate::domain::constraint::Constraint;
use crate::domain::{DesiredRanking, League, RankingClosure};
use crate::port::MilpProblem;

/// Force `outranks[above, below] = 1` for every pair the ranking requires.
///
/// Returns the number of pinned pairs.
pub fn add_target_constraints(
    problem: &mut MilpProblem,
    vars: &SeasonVariables,
    league: &League,
    ranking: &DesiredRanking,
    closure: RankingClosure,
) -> usize {
    let pairs = ranking.required_pairs(league, closure);
    for &(above, below) in &pairs {
        problem.add_constraint(Constraint::eq(
            vars.outranks(above.index(), below.index()),
            Decimal::ONE,
        ));
    }
    pairs.len()
}
