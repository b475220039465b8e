//! Integer-programming model of a season that must end in a given standing.
//!
//! The model is assembled in layers, each in its own module:
//!
//! - [`variables`]: every decision variable of the season
//! - [`season`]: results already played, schedule, symmetry, totals
//! - [`ratio`]: win percentage as a linear expression
//! - [`rank`]: pairwise "ranks above" indicators
//! - [`target`]: the desired ranking
//!
//! A [`StandingsModel`] is built fresh for every request and consumed by a
//! single solve.

pub mod ratio;
pub mod variables;

mod rank;
mod season;
mod target;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::constraint::{LinearExpr, VarId};
use crate::domain::error::DomainError;
use crate::domain::{DesiredRanking, League, Ledger, RankingClosure, Record, TieBreak};
use crate::port::MilpProblem;

pub use ratio::{linearize_ratio, RatioVariables};
pub use variables::SeasonVariables;

/// Smallest win-percentage difference that counts as a lead.
pub const DEFAULT_MIN_MARGIN: Decimal = dec!(0.00001);
/// Relaxation constant for conditional constraints.
pub const DEFAULT_BIG_M: Decimal = dec!(10000);

/// Numeric constants of the linearization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelTuning {
    /// Must stay below `1 / season_length²` so two distinct percentages
    /// always differ by at least this much.
    pub min_margin: Decimal,
    /// Must exceed every total a team can reach.
    pub big_m: Decimal,
}

impl ModelTuning {
    /// Check the constants against a league's season length `S`.
    ///
    /// `big_m` must be at least `S + 1`. `min_margin` must be positive and
    /// below `1 / S²`, the smallest gap between two distinct win
    /// percentages.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::UnsafeTuning`] naming the first bad constant.
    pub fn validate(&self, league: &League) -> Result<(), DomainError> {
        let season = Decimal::from(league.season_length());
        if self.big_m < season + Decimal::ONE {
            return Err(DomainError::UnsafeTuning {
                parameter: "big_m",
                reason: format!(
                    "must be at least {} for a {season}-game season",
                    season + Decimal::ONE
                ),
            });
        }
        let too_coarse = self
            .min_margin
            .checked_mul(season * season)
            .map_or(true, |spread| spread >= Decimal::ONE);
        if self.min_margin <= Decimal::ZERO || too_coarse {
            return Err(DomainError::UnsafeTuning {
                parameter: "min_margin",
                reason: format!(
                    "must be positive and below 1/{season}² for a {season}-game season"
                ),
            });
        }
        Ok(())
    }
}

impl Default for ModelTuning {
    fn default() -> Self {
        Self {
            min_margin: DEFAULT_MIN_MARGIN,
            big_m: DEFAULT_BIG_M,
        }
    }
}

/// Policies and constants that shape the model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelOptions {
    pub tie_break: TieBreak,
    pub closure: RankingClosure,
    pub tuning: ModelTuning,
}

/// A built model plus the handles needed to read a solution back.
#[derive(Debug, Clone)]
pub struct StandingsModel {
    league: League,
    problem: MilpProblem,
    vars: SeasonVariables,
    pinned_pairs: usize,
}

impl StandingsModel {
    /// Build the model for completing `ledger` so that `ranking` holds.
    ///
    /// # Errors
    ///
    /// Returns an error if the ledger does not fit the league's schedule or
    /// the tuning constants are unsafe for its season length.
    pub fn build(
        league: &League,
        ledger: &Ledger,
        ranking: &DesiredRanking,
        options: &ModelOptions,
    ) -> Result<Self, DomainError> {
        ledger.validate(league)?;
        options.tuning.validate(league)?;

        let ModelTuning { min_margin, big_m } = options.tuning;

        let mut problem = MilpProblem::new();
        let vars = SeasonVariables::declare(&mut problem, league);

        season::add_season_constraints(&mut problem, &vars, league, ledger);

        for team in 0..league.teams() {
            let wins = LinearExpr::from(vars.total_wins(team));
            let decided = LinearExpr::sum([
                vars.total_wins(team),
                vars.total_loses(team),
            ]);
            linearize_ratio(&mut problem, vars.win_rate(team), &wins, &decided, big_m);
        }

        rank::add_rank_constraints(&mut problem, &vars, options.tie_break, min_margin, big_m);
        let pinned_pairs =
            target::add_target_constraints(&mut problem, &vars, league, ranking, options.closure);

        debug!(
            teams = league.teams(),
            ranked = ranking.len(),
            pinned_pairs,
            variables = problem.num_vars(),
            constraints = problem.num_constraints(),
            tie_break = %options.tie_break,
            closure = %options.closure,
            "Built standings model"
        );

        Ok(Self {
            league: *league,
            problem,
            vars,
            pinned_pairs,
        })
    }

    #[must_use]
    pub fn problem(&self) -> &MilpProblem {
        &self.problem
    }

    #[must_use]
    pub fn variables(&self) -> &SeasonVariables {
        &self.vars
    }

    /// Number of `(above, below)` pairs the ranking pinned.
    #[must_use]
    pub const fn pinned_pairs(&self) -> usize {
        self.pinned_pairs
    }

    /// Rebuild the completed ledger from a solved assignment.
    ///
    /// Draws fill whatever part of each pair's schedule is not a win or a
    /// loss. Returns `None` unless `values` holds exactly one value per
    /// model variable.
    #[must_use]
    pub fn extract(&self, values: &[Decimal]) -> Option<Ledger> {
        if values.len() != self.problem.num_vars() {
            return None;
        }
        let count = |var: VarId| {
            values
                .get(var.index())
                .and_then(|v| v.round().to_u32())
                .unwrap_or(0)
        };

        let mut ledger = Ledger::empty(self.league.teams());
        for team in 0..self.league.teams() {
            for opponent in 0..self.league.opponent_slots() {
                if team == opponent {
                    continue;
                }
                let win = count(self.vars.num_wins(team, opponent));
                let lose = count(self.vars.num_loses(team, opponent));
                let draw = self
                    .league
                    .scheduled(team, opponent)
                    .saturating_sub(win.saturating_add(lose));
                ledger.set(team, opponent, Record::new(win, lose, draw));
            }
        }
        Some(ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_ledger_of_wrong_size() {
        let league = League::default();
        let err = StandingsModel::build(
            &league,
            &Ledger::empty(4),
            &DesiredRanking::default(),
            &ModelOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, DomainError::TeamCountMismatch { ledger: 4, league: 6 });
    }

    #[test]
    fn build_counts_pinned_pairs() {
        let league = League::default();
        let ranking = DesiredRanking::from_indices(&[0, 2, 1], &league).unwrap();
        let model = StandingsModel::build(
            &league,
            &Ledger::empty(6),
            &ranking,
            &ModelOptions::default(),
        )
        .unwrap();
        assert_eq!(model.pinned_pairs(), 11);
        assert!(model.problem().num_constraints() > 0);
    }

    #[test]
    fn extract_fills_draws_from_schedule() {
        let league = League::try_new(2, 4, 2, 1).unwrap();
        let model = StandingsModel::build(
            &league,
            &Ledger::empty(2),
            &DesiredRanking::default(),
            &ModelOptions::default(),
        )
        .unwrap();

        let vars = model.variables();
        let mut values = vec![Decimal::ZERO; model.problem().num_vars()];
        values[vars.num_wins(0, 1).index()] = dec!(3);
        values[vars.num_loses(1, 0).index()] = dec!(3);
        values[vars.num_wins(0, 2).index()] = dec!(1);
        values[vars.num_loses(0, 2).index()] = dec!(0.9999999);

        let ledger = model.extract(&values).unwrap();
        assert_eq!(ledger.get(0, 1), Record::new(3, 0, 1));
        assert_eq!(ledger.get(1, 0), Record::new(0, 3, 1));
        assert_eq!(ledger.get(0, 2), Record::new(1, 1, 0));
        assert_eq!(ledger.get(1, 2), Record::new(0, 0, 2));
        assert_eq!(ledger.get(0, 0), Record::ZERO);
    }

    #[test]
    fn extract_rejects_assignment_of_wrong_length() {
        let league = League::try_new(2, 4, 2, 1).unwrap();
        let model = StandingsModel::build(
            &league,
            &Ledger::empty(2),
            &DesiredRanking::default(),
            &ModelOptions::default(),
        )
        .unwrap();

        assert_eq!(model.extract(&[]), None);
        let too_long = vec![Decimal::ZERO; model.problem().num_vars() + 1];
        assert_eq!(model.extract(&too_long), None);
    }

    #[test]
    fn build_rejects_unsafe_tuning() {
        let league = League::default();
        let build = |tuning: ModelTuning| {
            StandingsModel::build(
                &league,
                &Ledger::empty(6),
                &DesiredRanking::default(),
                &ModelOptions {
                    tuning,
                    ..ModelOptions::default()
                },
            )
        };

        let small_m = build(ModelTuning {
            big_m: dec!(118),
            ..ModelTuning::default()
        });
        assert!(matches!(
            small_m,
            Err(DomainError::UnsafeTuning { parameter: "big_m", .. })
        ));

        let coarse_margin = build(ModelTuning {
            min_margin: dec!(0.0001),
            ..ModelTuning::default()
        });
        assert!(matches!(
            coarse_margin,
            Err(DomainError::UnsafeTuning { parameter: "min_margin", .. })
        ));

        let zero_margin = build(ModelTuning {
            min_margin: Decimal::ZERO,
            ..ModelTuning::default()
        });
        assert!(zero_margin.is_err());

        let huge_margin = build(ModelTuning {
            min_margin: Decimal::MAX,
            ..ModelTuning::default()
        });
        assert!(matches!(
            huge_margin,
            Err(DomainError::UnsafeTuning { parameter: "min_margin", .. })
        ));
    }

    #[test]
    fn tuning_bounds_are_inclusive_for_big_m() {
        let league = League::default();
        let tuning = ModelTuning {
            big_m: dec!(119),
            ..ModelTuning::default()
        };
        assert_eq!(tuning.validate(&league), Ok(()));
    }
}
