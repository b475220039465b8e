//! Matrix of results already played between every pair of teams.

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::{League, Record, TeamId};

/// Results already on the books, one [`Record`] per team and opponent column.
///
/// The ledger has one row per team and `teams + 1` columns: columns
/// `0..teams` are league opponents, the last column is the aggregate
/// interleague opponent. The diagonal is always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "LedgerRows", into = "LedgerRows")]
pub struct Ledger {
    teams: usize,
    records: Vec<Record>,
}

/// Serialized ledger layout: `{"records": [[{"win": .., ..}, ..], ..]}`.
#[derive(Debug, Serialize, Deserialize)]
struct LedgerRows {
    records: Vec<Vec<Record>>,
}

impl Ledger {
    /// A ledger for `teams` teams with no games played yet.
    #[must_use]
    pub fn empty(teams: usize) -> Self {
        Self {
            teams,
            records: vec![Record::ZERO; teams * (teams + 1)],
        }
    }

    /// Build a ledger from rows of records.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows, a row does not have exactly
    /// `rows + 1` columns, or a team has results against itself.
    pub fn from_rows(rows: Vec<Vec<Record>>) -> Result<Self, DomainError> {
        let teams = rows.len();
        if teams == 0 {
            return Err(DomainError::EmptyLedger);
        }

        let mut records = Vec::with_capacity(teams * (teams + 1));
        for (row, columns) in rows.into_iter().enumerate() {
            if columns.len() != teams + 1 {
                return Err(DomainError::RaggedLedger {
                    row,
                    expected: teams + 1,
                    found: columns.len(),
                });
            }
            if !columns[row].is_empty() {
                return Err(DomainError::SelfPlay {
                    team: TeamId::new(row),
                });
            }
            records.extend(columns);
        }

        Ok(Self { teams, records })
    }

    #[must_use]
    pub const fn teams(&self) -> usize {
        self.teams
    }

    /// Record of `team` against the opponent in column `opponent`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[must_use]
    pub fn get(&self, team: usize, opponent: usize) -> Record {
        self.records[self.offset(team, opponent)]
    }

    /// Replace the record of `team` against `opponent`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn set(&mut self, team: usize, opponent: usize, record: Record) {
        let offset = self.offset(team, opponent);
        self.records[offset] = record;
    }

    /// One team's records against every opponent column.
    #[must_use]
    pub fn row(&self, team: usize) -> &[Record] {
        let start = team * (self.teams + 1);
        &self.records[start..start + self.teams + 1]
    }

    /// Iterate over rows in team order.
    pub fn rows(&self) -> impl Iterator<Item = &[Record]> {
        self.records.chunks(self.teams + 1)
    }

    /// Sum of a team's records over every opponent.
    #[must_use]
    pub fn season_record(&self, team: usize) -> Record {
        self.row(team)
            .iter()
            .fold(Record::ZERO, |acc, r| acc.combined(r))
    }

    /// Check that the ledger fits the league's schedule.
    ///
    /// # Errors
    ///
    /// Returns an error if the team count differs from the league or any
    /// pair already has more games recorded than are scheduled.
    pub fn validate(&self, league: &League) -> Result<(), DomainError> {
        if self.teams != league.teams() {
            return Err(DomainError::TeamCountMismatch {
                ledger: self.teams,
                league: league.teams(),
            });
        }

        for team in 0..self.teams {
            for opponent in 0..league.opponent_slots() {
                if team == opponent {
                    continue;
                }
                let played = self.get(team, opponent).total();
                let scheduled = league.scheduled(team, opponent);
                if played > scheduled {
                    return Err(DomainError::OverScheduled {
                        team: TeamId::new(team),
                        opponent: league.opponent_label(opponent),
                        played,
                        scheduled,
                    });
                }
            }
        }
        Ok(())
    }

    fn offset(&self, team: usize, opponent: usize) -> usize {
        assert!(team < self.teams, "team {team} out of range");
        assert!(opponent <= self.teams, "opponent {opponent} out of range");
        team * (self.teams + 1) + opponent
    }
}

impl TryFrom<LedgerRows> for Ledger {
    type Error = DomainError;

    fn try_from(rows: LedgerRows) -> Result<Self, Self::Error> {
        Self::from_rows(rows.records)
    }
}

impl From<Ledger> for LedgerRows {
    fn from(ledger: Ledger) -> Self {
        Self {
            records: ledger.rows().map(<[Record]>::to_vec).collect(),
        }
    }
}
