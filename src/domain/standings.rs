//! Season totals and pairwise standing comparisons computed from a ledger.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::Serialize;

use super::tie_break::Comparison;
use super::{Ledger, TeamId, TieBreak};

/// One team's season totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TeamStanding {
    pub team: TeamId,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    /// `wins / (wins + losses)`, zero before any decided game.
    pub win_rate: Decimal,
}

impl TeamStanding {
    /// Games that ended in a win or a loss.
    #[must_use]
    pub const fn decided(&self) -> u32 {
        self.wins + self.losses
    }

    #[must_use]
    pub const fn played(&self) -> u32 {
        self.wins + self.losses + self.draws
    }
}

/// Totals for every team of a ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standings {
    teams: Vec<TeamStanding>,
}

impl Standings {
    /// Sum each team's row of the ledger.
    #[must_use]
    pub fn from_ledger(ledger: &Ledger) -> Self {
        let teams = (0..ledger.teams())
            .map(|team| {
                let season = ledger.season_record(team);
                let win_rate = if season.decided() == 0 {
                    Decimal::ZERO
                } else {
                    Decimal::from(season.win) / Decimal::from(season.decided())
                };
                TeamStanding {
                    team: TeamId::new(team),
                    wins: season.win,
                    losses: season.lose,
                    draws: season.draw,
                    win_rate,
                }
            })
            .collect();
        Self { teams }
    }

    /// Standing of one team.
    ///
    /// # Panics
    ///
    /// Panics if `team` is not part of the ledger.
    #[must_use]
    pub fn get(&self, team: TeamId) -> &TeamStanding {
        &self.teams[team.index()]
    }

    /// All standings in team id order.
    #[must_use]
    pub fn teams(&self) -> &[TeamStanding] {
        &self.teams
    }

    /// Compare win percentages; differences below `margin` count as a tie.
    #[must_use]
    pub fn compare_rate(&self, a: TeamId, b: TeamId, margin: Decimal) -> Comparison {
        let diff = self.get(a).win_rate - self.get(b).win_rate;
        if diff >= margin {
            Comparison::Leads
        } else if -diff >= margin {
            Comparison::Trails
        } else {
            Comparison::Tied
        }
    }

    #[must_use]
    pub fn compare_wins(&self, a: TeamId, b: TeamId) -> Comparison {
        match self.get(a).wins.cmp(&self.get(b).wins) {
            Ordering::Greater => Comparison::Leads,
            Ordering::Equal => Comparison::Tied,
            Ordering::Less => Comparison::Trails,
        }
    }

    /// True if `a` ranks strictly above `b` under `tie_break`.
    #[must_use]
    pub fn outranks(&self, a: TeamId, b: TeamId, tie_break: TieBreak, margin: Decimal) -> bool {
        a != b
            && tie_break.ranks_above(self.compare_rate(a, b, margin), self.compare_wins(a, b))
    }

    /// Standings sorted for display: most teams outranked first, then by
    /// win percentage and wins.
    #[must_use]
    pub fn ordered(&self, tie_break: TieBreak, margin: Decimal) -> Vec<TeamStanding> {
        let beaten = |team: TeamId| {
            self.teams
                .iter()
                .filter(|other| self.outranks(team, other.team, tie_break, margin))
                .count()
        };

        let mut ordered = self.teams.clone();
        ordered.sort_by(|a, b| {
            beaten(b.team)
                .cmp(&beaten(a.team))
                .then_with(|| b.win_rate.cmp(&a.win_rate))
                .then_with(|| b.wins.cmp(&a.wins))
                .then_with(|| a.team.cmp(&b.team))
        });
        ordered
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Record;
    use rust_decimal_macros::dec;

    fn two_team_ledger(first: Record, first_interleague: Record, second_interleague: Record) -> Ledger {
        let mut ledger = Ledger::empty(2);
        ledger.set(0, 1, first);
        ledger.set(1, 0, first.mirrored());
        ledger.set(0, 2, first_interleague);
        ledger.set(1, 2, second_interleague);
        ledger
    }

    #[test]
    fn win_rate_ignores_draws() {
        let ledger = two_team_ledger(Record::new(3, 1, 4), Record::ZERO, Record::ZERO);
        let standings = Standings::from_ledger(&ledger);

        let first = standings.get(TeamId::new(0));
        assert_eq!(first.wins, 3);
        assert_eq!(first.draws, 4);
        assert_eq!(first.win_rate, dec!(0.75));
        assert_eq!(first.played(), 8);
    }

    #[test]
    fn win_rate_is_zero_without_decided_games() {
        let standings = Standings::from_ledger(&Ledger::empty(3));
        assert_eq!(standings.get(TeamId::new(2)).win_rate, Decimal::ZERO);
    }

    #[test]
    fn disjunctive_lets_more_wins_outrank_better_rate() {
        // Team 0: 6-4 (0.600). Team 1: 4-6 vs team 0 plus 3-0 interleague = 7-6 (0.538).
        let ledger = two_team_ledger(Record::new(6, 4, 0), Record::ZERO, Record::new(3, 0, 0));
        let standings = Standings::from_ledger(&ledger);
        let (a, b) = (TeamId::new(0), TeamId::new(1));

        assert!(standings.outranks(a, b, TieBreak::Disjunctive, dec!(0.00001)));
        assert!(standings.outranks(b, a, TieBreak::Disjunctive, dec!(0.00001)));
        assert!(standings.outranks(a, b, TieBreak::WinRateFirst, dec!(0.00001)));
        assert!(!standings.outranks(b, a, TieBreak::WinRateFirst, dec!(0.00001)));
        assert!(standings.outranks(b, a, TieBreak::WinCountFirst, dec!(0.00001)));
    }

    #[test]
    fn team_never_outranks_itself() {
        let ledger = two_team_ledger(Record::new(6, 4, 0), Record::ZERO, Record::ZERO);
        let standings = Standings::from_ledger(&ledger);
        assert!(!standings.outranks(TeamId::new(0), TeamId::new(0), TieBreak::Disjunctive, dec!(0)));
    }

    #[test]
    fn ordered_puts_leader_first() {
        let ledger = two_team_ledger(Record::new(2, 8, 0), Record::ZERO, Record::ZERO);
        let standings = Standings::from_ledger(&ledger);
        let ordered = standings.ordered(TieBreak::Disjunctive, dec!(0.00001));
        assert_eq!(ordered[0].team, TeamId::new(1));
    }
}
