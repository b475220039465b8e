//! Fixed shape of a league season.

use super::error::DomainError;
use super::TeamId;

/// Games every pair of league teams plays in a season.
pub const DEFAULT_GAMES_PER_PAIR: u32 = 20;
/// Games every team plays against the other division, in aggregate.
pub const DEFAULT_INTERLEAGUE_GAMES: u32 = 18;
/// Teams in the league.
pub const DEFAULT_TEAMS: usize = 6;
/// Draws a single team may have over a season.
pub const DEFAULT_MAX_DRAWS: u32 = 20;

/// The schedule of a single league configuration.
///
/// Each team plays `games_per_pair` games against every other league team
/// and `interleague_games` games against the other division, which is
/// treated as one aggregate opponent. Opponent columns are numbered
/// `0..teams` for league teams and `teams` for the interleague slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct League {
    teams: usize,
    games_per_pair: u32,
    interleague_games: u32,
    max_draws: u32,
}

impl League {
    /// Create a league, checking that the schedule can produce standings.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than two teams, no games per pair,
    /// a season too long to count in a `u32`, or a draw budget that could
    /// leave a team without a decided game.
    pub fn try_new(
        teams: usize,
        games_per_pair: u32,
        interleague_games: u32,
        max_draws: u32,
    ) -> Result<Self, DomainError> {
        if teams < 2 {
            return Err(DomainError::TooFewTeams { teams });
        }
        if games_per_pair == 0 {
            return Err(DomainError::NoScheduledGames);
        }
        u32::try_from(teams - 1)
            .ok()
            .and_then(|opponents| opponents.checked_mul(games_per_pair))
            .and_then(|league_games| league_games.checked_add(interleague_games))
            .ok_or(DomainError::SeasonTooLong {
                teams,
                games_per_pair,
                interleague_games,
            })?;

        let league = Self {
            teams,
            games_per_pair,
            interleague_games,
            max_draws,
        };
        if max_draws >= league.season_length() {
            return Err(DomainError::DrawBudgetTooLarge {
                max_draws,
                season_length: league.season_length(),
            });
        }
        Ok(league)
    }

    #[must_use]
    pub const fn teams(&self) -> usize {
        self.teams
    }

    #[must_use]
    pub const fn games_per_pair(&self) -> u32 {
        self.games_per_pair
    }

    #[must_use]
    pub const fn interleague_games(&self) -> u32 {
        self.interleague_games
    }

    #[must_use]
    pub const fn max_draws(&self) -> u32 {
        self.max_draws
    }

    /// Games a team plays over the whole season.
    ///
    /// Cannot overflow: `try_new` rejects schedules that do not fit.
    #[must_use]
    pub const fn season_length(&self) -> u32 {
        self.games_per_pair * (self.teams as u32 - 1) + self.interleague_games
    }

    /// Fewest decided games a team can finish with, given the draw budget.
    #[must_use]
    pub const fn min_decided(&self) -> u32 {
        self.season_length() - self.max_draws
    }

    /// Opponent columns per team: every league team plus the interleague slot.
    #[must_use]
    pub const fn opponent_slots(&self) -> usize {
        self.teams + 1
    }

    /// Column index of the aggregate interleague opponent.
    #[must_use]
    pub const fn interleague_slot(&self) -> usize {
        self.teams
    }

    /// Scheduled games between `team` and the opponent in column `opponent`.
    #[must_use]
    pub const fn scheduled(&self, team: usize, opponent: usize) -> u32 {
        if team == opponent {
            0
        } else if opponent < self.teams {
            self.games_per_pair
        } else {
            self.interleague_games
        }
    }

    /// Human-readable name of an opponent column.
    #[must_use]
    pub fn opponent_label(&self, opponent: usize) -> String {
        if opponent == self.interleague_slot() {
            "interleague".to_string()
        } else {
            format!("team {opponent}")
        }
    }

    /// Iterate over every team in the league.
    pub fn team_ids(&self) -> impl Iterator<Item = TeamId> {
        (0..self.teams).map(TeamId::new)
    }

    /// True if `team` names a team of this league.
    #[must_use]
    pub const fn contains(&self, team: TeamId) -> bool {
        team.index() < self.teams
    }
}

impl Default for League {
    fn default() -> Self {
        Self {
            teams: DEFAULT_TEAMS,
            games_per_pair: DEFAULT_GAMES_PER_PAIR,
            interleague_games: DEFAULT_INTERLEAGUE_GAMES,
            max_draws: DEFAULT_MAX_DRAWS,
        }
    }
}
