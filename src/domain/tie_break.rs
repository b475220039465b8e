//! Policies for ordering two teams in the standings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// How win percentage and win count combine into "ranks above".
///
/// The league's inherited rule is [`TieBreak::Disjunctive`]: a team ranks
/// above another if it leads on win percentage *or* on total wins. That
/// lets a team rank above a rival on wins alone while trailing on
/// percentage, so the lexicographic alternatives are offered as well.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Higher win percentage or more wins.
    #[default]
    Disjunctive,
    /// Higher win percentage; more wins only when percentages are equal.
    WinRateFirst,
    /// More wins; higher win percentage only when win totals are equal.
    WinCountFirst,
}

impl TieBreak {
    pub const ALL: [Self; 3] = [Self::Disjunctive, Self::WinRateFirst, Self::WinCountFirst];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Disjunctive => "disjunctive",
            Self::WinRateFirst => "win-rate-first",
            Self::WinCountFirst => "win-count-first",
        }
    }

    /// Decide "ranks above" from the two pairwise comparisons.
    ///
    /// `rate` and `wins` are the comparison of the first team against the
    /// second: `Leads` means the first team is ahead.
    #[must_use]
    pub fn ranks_above(self, rate: Comparison, wins: Comparison) -> bool {
        match self {
            Self::Disjunctive => rate.leads() || wins.leads(),
            Self::WinRateFirst => rate.leads() || (rate.is_tied() && wins.leads()),
            Self::WinCountFirst => wins.leads() || (wins.is_tied() && rate.leads()),
        }
    }
}

/// Outcome of comparing one statistic between two teams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Leads,
    Tied,
    Trails,
}

impl Comparison {
    #[must_use]
    pub const fn leads(self) -> bool {
        matches!(self, Self::Leads)
    }

    #[must_use]
    pub const fn is_tied(self) -> bool {
        matches!(self, Self::Tied)
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TieBreak {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|policy| policy.as_str() == normalized)
            .ok_or_else(|| {
                format!("unknown tie-break '{s}' (expected disjunctive, win-rate-first or win-count-first)")
            })
    }
}
