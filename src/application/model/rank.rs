//! Pairwise "ranks above" indicators.
//!
//! Two comparison indicators are tied to the season totals with big-M
//! implications, then combined into `outranks` according to the
//! [`TieBreak`] policy.

use rust_decimal::Decimal;

use super::variables::SeasonVariables;
use crate::domain::constraint::{Constraint, LinearExpr, VarId};
use crate::domain::TieBreak;
use crate::port::MilpProblem;

/// Add comparison and `outranks` constraints for every ordered pair of
/// distinct teams.
pub fn add_rank_constraints(
    problem: &mut MilpProblem,
    vars: &SeasonVariables,
    tie_break: TieBreak,
    min_margin: Decimal,
    big_m: Decimal,
) {
    let teams = vars.teams();
    for team in 0..teams {
        for other in 0..teams {
            if team == other {
                continue;
            }

            indicate_lead(
                problem,
                vars.beats_on_rate(team, other),
                vars.win_rate_expr(team) - vars.win_rate_expr(other),
                min_margin,
                big_m,
            );
            indicate_lead(
                problem,
                vars.beats_on_wins(team, other),
                LinearExpr::from(vars.total_wins(team)) - vars.total_wins(other),
                Decimal::ONE,
                big_m,
            );

            combine(problem, vars, team, other, tie_break);
        }
    }
}

/// `flag = 1` implies `diff >= margin`; `flag = 0` implies `diff <= 0`.
fn indicate_lead(
    problem: &mut MilpProblem,
    flag: VarId,
    diff: LinearExpr,
    margin: Decimal,
    big_m: Decimal,
) {
    // diff >= margin - M*(1 - flag)
    problem.add_constraint(Constraint::geq(
        diff.clone(),
        LinearExpr::constant(margin - big_m) + big_m * flag,
    ));
    // -diff >= -M*flag
    problem.add_constraint(Constraint::geq(-diff, -big_m * flag));
}

fn combine(
    problem: &mut MilpProblem,
    vars: &SeasonVariables,
    team: usize,
    other: usize,
    tie_break: TieBreak,
) {
    let outranks = vars.outranks(team, other);
    let rate = vars.beats_on_rate(team, other);
    let wins = vars.beats_on_wins(team, other);

    match tie_break {
        TieBreak::Disjunctive => {
            problem.add_constraint(Constraint::leq(outranks, LinearExpr::sum([rate, wins])));
            problem.add_constraint(Constraint::geq(outranks, rate));
            problem.add_constraint(Constraint::geq(outranks, wins));
        }
        TieBreak::WinRateFirst => {
            let trailing = vars.beats_on_rate(other, team);
            lexicographic(problem, outranks, rate, trailing, wins);
        }
        TieBreak::WinCountFirst => {
            let trailing = vars.beats_on_wins(other, team);
            lexicographic(problem, outranks, wins, trailing, rate);
        }
    }
}

/// `outranks = primary OR (primary tied AND secondary)`.
///
/// `primary` and `reverse` are the two directions of the deciding
/// comparison; both zero means a tie on it.
fn lexicographic(
    problem: &mut MilpProblem,
    outranks: VarId,
    primary: VarId,
    reverse: VarId,
    secondary: VarId,
) {
    problem.add_constraint(Constraint::geq(outranks, primary));
    problem.add_constraint(Constraint::geq(
        LinearExpr::from(outranks) + primary + reverse,
        secondary,
    ));
    problem.add_constraint(Constraint::leq(outranks, LinearExpr::sum([primary, secondary])));
    problem.add_constraint(Constraint::leq(
        LinearExpr::from(outranks) + reverse,
        Decimal::ONE,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::constraint::{VarKind, VariableBounds};
    use crate::domain::League;
    use rust_decimal_macros::dec;

    /// Values of `outranks(0, 1)` the combination rows admit for fixed indicators.
    fn admits(tie_break: TieBreak, rate: u8, reverse_rate: u8, wins: u8, reverse_wins: u8) -> Vec<u8> {
        let league = League::try_new(2, 4, 2, 1).unwrap();
        let mut problem = MilpProblem::new();
        let vars = SeasonVariables::declare(&mut problem, &league);
        let before = problem.num_constraints();
        combine(&mut problem, &vars, 0, 1, tie_break);
        let rows = &problem.constraints()[before..];

        let mut values = vec![Decimal::ZERO; problem.num_vars()];
        values[vars.beats_on_rate(0, 1).index()] = Decimal::from(rate);
        values[vars.beats_on_rate(1, 0).index()] = Decimal::from(reverse_rate);
        values[vars.beats_on_wins(0, 1).index()] = Decimal::from(wins);
        values[vars.beats_on_wins(1, 0).index()] = Decimal::from(reverse_wins);

        [0u8, 1]
            .into_iter()
            .filter(|&o| {
                values[vars.outranks(0, 1).index()] = Decimal::from(o);
                rows.iter().all(|c| c.is_satisfied(&values, dec!(0.000001)))
            })
            .collect()
    }

    #[test]
    fn disjunctive_is_logical_or() {
        assert_eq!(admits(TieBreak::Disjunctive, 0, 0, 0, 0), vec![0]);
        assert_eq!(admits(TieBreak::Disjunctive, 1, 0, 0, 1), vec![1]);
        assert_eq!(admits(TieBreak::Disjunctive, 0, 1, 1, 0), vec![1]);
        assert_eq!(admits(TieBreak::Disjunctive, 1, 0, 1, 0), vec![1]);
    }

    #[test]
    fn win_rate_first_ignores_wins_unless_tied() {
        assert_eq!(admits(TieBreak::WinRateFirst, 0, 1, 1, 0), vec![0]);
        assert_eq!(admits(TieBreak::WinRateFirst, 1, 0, 0, 1), vec![1]);
        assert_eq!(admits(TieBreak::WinRateFirst, 0, 0, 1, 0), vec![1]);
        assert_eq!(admits(TieBreak::WinRateFirst, 0, 0, 0, 1), vec![0]);
        assert_eq!(admits(TieBreak::WinRateFirst, 0, 0, 0, 0), vec![0]);
    }

    #[test]
    fn win_count_first_ignores_rate_unless_tied() {
        assert_eq!(admits(TieBreak::WinCountFirst, 1, 0, 0, 1), vec![0]);
        assert_eq!(admits(TieBreak::WinCountFirst, 0, 1, 1, 0), vec![1]);
        assert_eq!(admits(TieBreak::WinCountFirst, 1, 0, 0, 0), vec![1]);
        assert_eq!(admits(TieBreak::WinCountFirst, 0, 0, 0, 0), vec![0]);
    }

    #[test]
    fn lead_indicator_follows_difference() {
        let mut problem = MilpProblem::new();
        let a = problem.add_variable(
            "a",
            VarKind::Integer,
            VariableBounds::bounded(Decimal::ZERO, dec!(10)),
        );
        let b = problem.add_variable(
            "b",
            VarKind::Integer,
            VariableBounds::bounded(Decimal::ZERO, dec!(10)),
        );
        let flag = problem.add_variable(
            "flag",
            VarKind::Binary,
            VariableBounds::binary(),
        );
        indicate_lead(&mut problem, flag, LinearExpr::from(a) - b, Decimal::ONE, dec!(100));

        let ok = |values: &[Decimal]| problem.violations(values, dec!(0.000001)).is_empty();
        assert!(ok(&[dec!(5), dec!(3), dec!(1)]));
        assert!(!ok(&[dec!(5), dec!(3), dec!(0)]));
        assert!(ok(&[dec!(3), dec!(3), dec!(0)]));
        assert!(!ok(&[dec!(3), dec!(3), dec!(1)]));
        assert!(ok(&[dec!(2), dec!(3), dec!(0)]));
    }
}
