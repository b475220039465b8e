//! Constraints tying the final season to the results already played.

use rust_decimal::Decimal;

use super::variables::SeasonVariables;
use crate::domain::constraint::{Constraint, LinearExpr};
use crate::domain::{League, Ledger};
use crate::port::MilpProblem;

/// Add non-regression, schedule, symmetry and total constraints.
///
/// The ledger is assumed to have been validated against `league`.
pub fn add_season_constraints(
    problem: &mut MilpProblem,
    vars: &SeasonVariables,
    league: &League,
    ledger: &Ledger,
) {
    for team in 0..league.teams() {
        for opponent in 0..league.opponent_slots() {
            if team == opponent {
                continue;
            }
            let recorded = ledger.get(team, opponent);
            let wins = vars.num_wins(team, opponent);
            let loses = vars.num_loses(team, opponent);

            problem.add_constraint(Constraint::geq(wins, Decimal::from(recorded.win)));
            problem.add_constraint(Constraint::geq(loses, Decimal::from(recorded.lose)));

            // Recorded draws are final; every remaining game is decided or drawn.
            let open = league.scheduled(team, opponent).saturating_sub(recorded.draw);
            problem.add_constraint(Constraint::leq(
                LinearExpr::sum([wins, loses]),
                Decimal::from(open),
            ));

            // The interleague column has no mirrored row.
            if opponent < league.teams() {
                problem.add_constraint(Constraint::eq(wins, vars.num_loses(opponent, team)));
            }
        }

        let row = 0..league.opponent_slots();
        problem.add_constraint(Constraint::eq(
            vars.total_wins(team),
            LinearExpr::sum(row.clone().map(|opponent| vars.num_wins(team, opponent))),
        ));
        problem.add_constraint(Constraint::eq(
            vars.total_loses(team),
            LinearExpr::sum(row.map(|opponent| vars.num_loses(team, opponent))),
        ));
    }
}
