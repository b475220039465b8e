//! League shape and ranking policy configuration.

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::{
    League, RankingClosure, TeamId, TieBreak, DEFAULT_GAMES_PER_PAIR, DEFAULT_INTERLEAGUE_GAMES,
    DEFAULT_MAX_DRAWS, DEFAULT_TEAMS,
};

/// The `[league]` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeagueConfig {
    /// Teams in the league.
    #[serde(default = "default_teams")]
    pub teams: usize,
    /// Games between every pair of league teams.
    #[serde(default = "default_games_per_pair")]
    pub games_per_pair: u32,
    /// Games each team plays against the other division.
    #[serde(default = "default_interleague_games")]
    pub interleague_games: u32,
    /// Most draws a team may finish the season with.
    #[serde(default = "default_max_draws")]
    pub max_draws: u32,
    /// How win percentage and wins combine into a ranking.
    #[serde(default)]
    pub tie_break: TieBreak,
    /// Which ranked pairs are pinned.
    #[serde(default)]
    pub ranking_closure: RankingClosure,
    /// Optional display names, one per team in id order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub names: Vec<String>,
}

const fn default_teams() -> usize {
    DEFAULT_TEAMS
}

const fn default_games_per_pair() -> u32 {
    DEFAULT_GAMES_PER_PAIR
}

const fn default_interleague_games() -> u32 {
    DEFAULT_INTERLEAGUE_GAMES
}

const fn default_max_draws() -> u32 {
    DEFAULT_MAX_DRAWS
}

impl Default for LeagueConfig {
    fn default() -> Self {
        Self {
            teams: default_teams(),
            games_per_pair: default_games_per_pair(),
            interleague_games: default_interleague_games(),
            max_draws: default_max_draws(),
            tie_break: TieBreak::default(),
            ranking_closure: RankingClosure::default(),
            names: Vec::new(),
        }
    }
}

impl LeagueConfig {
    /// Build the validated league this table describes.
    ///
    /// # Errors
    ///
    /// Returns an error if the schedule cannot produce standings.
    pub fn league(&self) -> Result<League, DomainError> {
        League::try_new(
            self.teams,
            self.games_per_pair,
            self.interleague_games,
            self.max_draws,
        )
    }

    /// Display name of a team, falling back to its id.
    #[must_use]
    pub fn team_name(&self, team: TeamId) -> String {
        self.names
            .get(team.index())
            .cloned()
            .unwrap_or_else(|| format!("team {team}"))
    }

    /// Resolve a team given by id or by configured name (case-insensitive).
    #[must_use]
    pub fn resolve_team(&self, token: &str) -> Option<TeamId> {
        let token = token.trim();
        if let Ok(index) = token.parse::<usize>() {
            return Some(TeamId::new(index));
        }
        self.names
            .iter()
            .position(|name| name.eq_ignore_ascii_case(token))
            .map(TeamId::new)
    }
}
