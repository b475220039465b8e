//! Desired final standing requested by the caller.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::DomainError;
use super::{League, TeamId};

/// Which pairs among the explicitly ranked teams are pinned.
///
/// Ranked teams always dominate every unranked team. Among themselves,
/// [`RankingClosure::Adjacent`] only pins consecutive pairs (the league's
/// long-standing behavior, which lets transitivity emerge from the
/// results), while [`RankingClosure::Pairwise`] pins every earlier team
/// above every later one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RankingClosure {
    #[default]
    Adjacent,
    Pairwise,
}

impl RankingClosure {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Adjacent => "adjacent",
            Self::Pairwise => "pairwise",
        }
    }
}

impl fmt::Display for RankingClosure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RankingClosure {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "adjacent" => Ok(Self::Adjacent),
            "pairwise" => Ok(Self::Pairwise),
            _ => Err(format!(
                "unknown ranking closure '{s}' (expected adjacent or pairwise)"
            )),
        }
    }
}

/// An ordered prefix of the final standings: distinct, valid team ids.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesiredRanking {
    teams: Vec<TeamId>,
}

impl DesiredRanking {
    /// Validate a ranking against the league.
    ///
    /// # Errors
    ///
    /// Returns an error if the ranking is longer than the league, names a
    /// team outside the league, or names a team twice.
    pub fn try_new(teams: Vec<TeamId>, league: &League) -> Result<Self, DomainError> {
        if teams.len() > league.teams() {
            return Err(DomainError::RankingTooLong {
                len: teams.len(),
                teams: league.teams(),
            });
        }

        let mut seen = HashSet::with_capacity(teams.len());
        for &team in &teams {
            if !league.contains(team) {
                return Err(DomainError::UnknownTeam {
                    team,
                    teams: league.teams(),
                });
            }
            if !seen.insert(team) {
                return Err(DomainError::DuplicateTeam { team });
            }
        }

        Ok(Self { teams })
    }

    /// Validate a ranking given as plain indices.
    ///
    /// # Errors
    ///
    /// See [`DesiredRanking::try_new`].
    pub fn from_indices(indices: &[usize], league: &League) -> Result<Self, DomainError> {
        Self::try_new(indices.iter().copied().map(TeamId::new).collect(), league)
    }

    /// The ranked teams, best first.
    #[must_use]
    pub fn teams(&self) -> &[TeamId] {
        &self.teams
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    #[must_use]
    pub fn contains(&self, team: TeamId) -> bool {
        self.teams.contains(&team)
    }

    /// League teams not named in the ranking, in id order.
    #[must_use]
    pub fn unranked(&self, league: &League) -> Vec<TeamId> {
        league.team_ids().filter(|t| !self.contains(*t)).collect()
    }

    /// Every `(above, below)` pair the final standings must satisfy.
    #[must_use]
    pub fn required_pairs(&self, league: &League, closure: RankingClosure) -> Vec<(TeamId, TeamId)> {
        let unranked = self.unranked(league);
        let mut pairs = Vec::new();

        for (position, &team) in self.teams.iter().enumerate() {
            match closure {
                RankingClosure::Adjacent => {
                    if let Some(&next) = self.teams.get(position + 1) {
                        pairs.push((team, next));
                    }
                }
                RankingClosure::Pairwise => {
                    pairs.extend(self.teams[position + 1..].iter().map(|&later| (team, later)));
                }
            }
            pairs.extend(unranked.iter().map(|&low| (team, low)));
        }

        pairs
    }
}

impl fmt::Display for DesiredRanking {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ids: Vec<String> = self.teams.iter().map(ToString::to_string).collect();
        write!(f, "[{}]", ids.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[usize]) -> Vec<TeamId> {
        raw.iter().copied().map(TeamId::new).collect()
    }

    #[test]
    fn rejects_out_of_range_team() {
        let league = League::default();
        assert_eq!(
            DesiredRanking::from_indices(&[0, 6], &league),
            Err(DomainError::UnknownTeam {
                team: TeamId::new(6),
                teams: 6
            })
        );
    }

    #[test]
    fn rejects_duplicate_team() {
        let league = League::default();
        assert_eq!(
            DesiredRanking::from_indices(&[1, 2, 1], &league),
            Err(DomainError::DuplicateTeam {
                team: TeamId::new(1)
            })
        );
    }

    #[test]
    fn rejects_ranking_longer_than_league() {
        let league = League::try_new(2, 4, 0, 0).unwrap();
        assert_eq!(
            DesiredRanking::from_indices(&[0, 1, 0], &league),
            Err(DomainError::RankingTooLong { len: 3, teams: 2 })
        );
    }

    #[test]
    fn empty_ranking_requires_nothing() {
        let league = League::default();
        let ranking = DesiredRanking::default();
        assert!(ranking.required_pairs(&league, RankingClosure::Pairwise).is_empty());
    }

    #[test]
    fn adjacent_closure_pins_chain_and_unranked() {
        let league = League::default();
        let ranking = DesiredRanking::from_indices(&[0, 2, 1], &league).unwrap();
        let pairs = ranking.required_pairs(&league, RankingClosure::Adjacent);

        assert!(pairs.contains(&(TeamId::new(0), TeamId::new(2))));
        assert!(pairs.contains(&(TeamId::new(2), TeamId::new(1))));
        assert!(!pairs.contains(&(TeamId::new(0), TeamId::new(1))));
        for ranked in ids(&[0, 2, 1]) {
            for low in ids(&[3, 4, 5]) {
                assert!(pairs.contains(&(ranked, low)));
            }
        }
        assert_eq!(pairs.len(), 2 + 9);
    }

    #[test]
    fn pairwise_closure_adds_non_adjacent_pairs() {
        let league = League::default();
        let ranking = DesiredRanking::from_indices(&[0, 2, 1], &league).unwrap();
        let pairs = ranking.required_pairs(&league, RankingClosure::Pairwise);

        assert!(pairs.contains(&(TeamId::new(0), TeamId::new(1))));
        assert_eq!(pairs.len(), 3 + 9);
    }

    #[test]
    fn unranked_lists_remaining_teams() {
        let league = League::default();
        let ranking = DesiredRanking::from_indices(&[4, 1], &league).unwrap();
        assert_eq!(ranking.unranked(&league), ids(&[0, 2, 3, 5]));
    }

    #[test]
    fn closure_parses_from_str() {
        assert_eq!("Pairwise".parse::<RankingClosure>(), Ok(RankingClosure::Pairwise));
        assert!("transitive".parse::<RankingClosure>().is_err());
    }
}
