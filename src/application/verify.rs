//! Exact re-check of a completed season.
//!
//! The solver works in floating point; the completion it returns is checked
//! again here with integer counts and decimal win percentages before it is
//! reported as feasible.

use rust_decimal::Decimal;

use super::model::ModelOptions;
use crate::domain::{DesiredRanking, League, Ledger, Standings};

/// Problems found in `completion`, empty if it is a valid finish of
/// `original` in which `ranking` holds.
#[must_use]
pub fn verify_completion(
    league: &League,
    original: &Ledger,
    completion: &Ledger,
    ranking: &DesiredRanking,
    options: &ModelOptions,
) -> Vec<String> {
    if completion.teams() != league.teams() || original.teams() != league.teams() {
        return vec![format!(
            "completion has {} teams, original {}, league {}",
            completion.teams(),
            original.teams(),
            league.teams()
        )];
    }

    let mut problems = Vec::new();
    for team in 0..league.teams() {
        for opponent in 0..league.opponent_slots() {
            let done = completion.get(team, opponent);
            let label = league.opponent_label(opponent);

            if done.total() != league.scheduled(team, opponent) {
                problems.push(format!(
                    "team {team} vs {label}: {done} does not fill {} scheduled games",
                    league.scheduled(team, opponent)
                ));
            }
            let before = original.get(team, opponent);
            if !done.extends(&before) {
                problems.push(format!(
                    "team {team} vs {label}: {done} undoes recorded {before}"
                ));
            }
            if opponent < league.teams() && completion.get(opponent, team) != done.mirrored() {
                problems.push(format!(
                    "team {team} vs {label}: {done} is not mirrored by {}",
                    completion.get(opponent, team)
                ));
            }
        }

        let draws = completion.season_record(team).draw;
        if draws > league.max_draws() {
            problems.push(format!(
                "team {team} has {draws} draws, more than the {} allowed",
                league.max_draws()
            ));
        }
    }

    let standings = Standings::from_ledger(completion);
    let margin: Decimal = options.tuning.min_margin;
    for (above, below) in ranking.required_pairs(league, options.closure) {
        if !standings.outranks(above, below, options.tie_break, margin) {
            let (a, b) = (standings.get(above), standings.get(below));
            problems.push(format!(
                "team {above} ({} wins, {:.4}) does not rank above team {below} ({} wins, {:.4}) under {}",
                a.wins, a.win_rate, b.wins, b.win_rate, options.tie_break
            ));
        }
    }

    problems
}
