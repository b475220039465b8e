//! Domain validation errors for league inputs.
//!
//! These errors are returned by `try_new` constructors and the ledger
//! validation step. They mean the request is malformed and must be rejected
//! before any model is handed to the solver.
//!
//! # Examples
//!
//! ```
//! use pennant::domain::error::DomainError;
//! use pennant::domain::{DesiredRanking, League, TeamId};
//!
//! let league = League::default();
//! let result = DesiredRanking::try_new(vec![TeamId::new(0), TeamId::new(0)], &league);
//!
//! assert!(matches!(result, Err(DomainError::DuplicateTeam { .. })));
//! ```

use thiserror::Error;

use super::TeamId;

/// Errors that occur when league invariants are violated by the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A league needs at least two teams to play anything.
    #[error("a league needs at least 2 teams, got {teams}")]
    TooFewTeams { teams: usize },

    /// Every pairing inside the league must be scheduled at least once.
    #[error("games per pair must be positive")]
    NoScheduledGames,

    /// The draw budget must leave at least one decided game per team.
    #[error("draw budget {max_draws} leaves no decided games in a {season_length}-game season")]
    DrawBudgetTooLarge { max_draws: u32, season_length: u32 },

    /// The schedule does not fit in a `u32` game count.
    #[error(
        "{teams} teams playing {games_per_pair} games per pair plus {interleague_games} interleague games is too long a season"
    )]
    SeasonTooLong {
        teams: usize,
        games_per_pair: u32,
        interleague_games: u32,
    },

    /// The ledger has no rows.
    #[error("ledger is empty")]
    EmptyLedger,

    /// A ledger row has the wrong number of opponent columns.
    #[error("ledger row {row} has {found} columns, expected {expected}")]
    RaggedLedger {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The ledger describes a different number of teams than the league.
    #[error("ledger has {ledger} teams but the league has {league}")]
    TeamCountMismatch { ledger: usize, league: usize },

    /// A team has results recorded against itself.
    #[error("team {team} has results recorded against itself")]
    SelfPlay { team: TeamId },

    /// A pair already has more games recorded than the schedule allows.
    #[error(
        "team {team} has {played} games recorded against {opponent}, but only {scheduled} are scheduled"
    )]
    OverScheduled {
        team: TeamId,
        opponent: String,
        played: u32,
        scheduled: u32,
    },

    /// A numeric model constant is unsafe for the league's season length.
    #[error("{parameter} {reason}")]
    UnsafeTuning {
        parameter: &'static str,
        reason: String,
    },

    /// A ranking names a team outside the league.
    #[error("team {team} is not in a league of {teams} teams")]
    UnknownTeam { team: TeamId, teams: usize },

    /// A ranking names the same team twice.
    #[error("team {team} appears more than once in the ranking")]
    DuplicateTeam { team: TeamId },

    /// A ranking is longer than the league.
    #[error("ranking lists {len} teams but the league has only {teams}")]
    RankingTooLong { len: usize, teams: usize },
}
