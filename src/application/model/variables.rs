//! Decision variables describing one complete season.

use rust_decimal::Decimal;

use super::ratio::RatioVariables;
use crate::domain::constraint::{LinearExpr, VarId, VarKind, VariableBounds};
use crate::domain::League;
use crate::port::MilpProblem;

/// Every decision variable of a standings model.
///
/// Pair-indexed vectors are row-major: `num_wins[team * slots + opponent]`
/// for the `slots = teams + 1` opponent columns, and
/// `outranks[team * teams + other]` for team comparisons.
#[derive(Debug, Clone)]
pub struct SeasonVariables {
    teams: usize,
    slots: usize,
    num_wins: Vec<VarId>,
    num_loses: Vec<VarId>,
    total_wins: Vec<VarId>,
    total_loses: Vec<VarId>,
    win_rates: Vec<RatioVariables>,
    beats_on_rate: Vec<VarId>,
    beats_on_wins: Vec<VarId>,
    outranks: Vec<VarId>,
}

impl SeasonVariables {
    /// Declare all variables of a season for `league` in `problem`.
    ///
    /// Self-play counts and self-comparison indicators are declared fixed
    /// at zero so indices stay dense.
    pub fn declare(problem: &mut MilpProblem, league: &League) -> Self {
        let teams = league.teams();
        let slots = league.opponent_slots();
        let season = Decimal::from(league.season_length());

        let mut pair_counts = |label: &str| -> Vec<VarId> {
            (0..teams)
                .flat_map(|i| (0..slots).map(move |j| (i, j)))
                .map(|(i, j)| {
                    let bounds = if i == j {
                        VariableBounds::fixed(Decimal::ZERO)
                    } else {
                        VariableBounds::bounded(Decimal::ZERO, Decimal::from(league.scheduled(i, j)))
                    };
                    problem.add_variable(format!("{label}_{i}_{j}"), VarKind::Integer, bounds)
                })
                .collect()
        };
        let num_wins = pair_counts("num_wins");
        let num_loses = pair_counts("num_loses");

        let mut team_totals = |label: &str| -> Vec<VarId> {
            (0..teams)
                .map(|i| {
                    problem.add_variable(
                        format!("{label}_{i}"),
                        VarKind::Integer,
                        VariableBounds::bounded(Decimal::ZERO, season),
                    )
                })
                .collect()
        };
        let total_wins = team_totals("total_wins");
        let total_loses = team_totals("total_loses");

        let win_rates = (0..teams)
            .map(|i| {
                RatioVariables::declare(
                    problem,
                    &format!("win_rate_{i}"),
                    league.min_decided()..=league.season_length(),
                    Decimal::ONE,
                )
            })
            .collect();

        let mut indicators = |label: &str| -> Vec<VarId> {
            (0..teams)
                .flat_map(|i| (0..teams).map(move |k| (i, k)))
                .map(|(i, k)| {
                    let bounds = if i == k {
                        VariableBounds::fixed(Decimal::ZERO)
                    } else {
                        VariableBounds::binary()
                    };
                    problem.add_variable(format!("{label}_{i}_{k}"), VarKind::Binary, bounds)
                })
                .collect()
        };
        let beats_on_rate = indicators("beats_on_rate");
        let beats_on_wins = indicators("beats_on_wins");
        let outranks = indicators("outranks");

        Self {
            teams,
            slots,
            num_wins,
            num_loses,
            total_wins,
            total_loses,
            win_rates,
            beats_on_rate,
            beats_on_wins,
            outranks,
        }
    }

    #[must_use]
    pub const fn teams(&self) -> usize {
        self.teams
    }

    #[must_use]
    pub const fn slots(&self) -> usize {
        self.slots
    }

    /// Final wins of `team` against the opponent in column `opponent`.
    #[must_use]
    pub fn num_wins(&self, team: usize, opponent: usize) -> VarId {
        self.num_wins[team * self.slots + opponent]
    }

    /// Final losses of `team` against the opponent in column `opponent`.
    #[must_use]
    pub fn num_loses(&self, team: usize, opponent: usize) -> VarId {
        self.num_loses[team * self.slots + opponent]
    }

    #[must_use]
    pub fn total_wins(&self, team: usize) -> VarId {
        self.total_wins[team]
    }

    #[must_use]
    pub fn total_loses(&self, team: usize) -> VarId {
        self.total_loses[team]
    }

    /// Selector and rate variables linearizing `team`'s win percentage.
    #[must_use]
    pub fn win_rate(&self, team: usize) -> &RatioVariables {
        &self.win_rates[team]
    }

    /// `team`'s win percentage as a linear expression.
    #[must_use]
    pub fn win_rate_expr(&self, team: usize) -> LinearExpr {
        self.win_rates[team].value()
    }

    #[must_use]
    pub fn beats_on_rate(&self, team: usize, other: usize) -> VarId {
        self.beats_on_rate[team * self.teams + other]
    }

    #[must_use]
    pub fn beats_on_wins(&self, team: usize, other: usize) -> VarId {
        self.beats_on_wins[team * self.teams + other]
    }

    #[must_use]
    pub fn outranks(&self, team: usize, other: usize) -> VarId {
        self.outranks[team * self.teams + other]
    }
}
