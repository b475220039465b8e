//! Head-to-head result tally for one ordered pair of teams.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Games already played between two teams, seen from the first team.
///
/// `Record { win: 3, lose: 1, draw: 2 }` in row `i`, column `j` means team
/// `i` beat team `j` three times, lost once, and drew twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub win: u32,
    #[serde(default)]
    pub lose: u32,
    #[serde(default)]
    pub draw: u32,
}

impl Record {
    /// The empty record (no games played).
    pub const ZERO: Self = Self::new(0, 0, 0);

    #[must_use]
    pub const fn new(win: u32, lose: u32, draw: u32) -> Self {
        Self { win, lose, draw }
    }

    /// Total games played, saturating at `u32::MAX`.
    ///
    /// Records come straight from user input, so a sum that does not fit
    /// must still compare as "too many games" rather than wrap.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.decided().saturating_add(self.draw)
    }

    /// Games that ended in a win or a loss, saturating at `u32::MAX`.
    #[must_use]
    pub const fn decided(&self) -> u32 {
        self.win.saturating_add(self.lose)
    }

    /// Pointwise sum of two records, saturating each count.
    #[must_use]
    pub const fn combined(&self, other: &Self) -> Self {
        Self::new(
            self.win.saturating_add(other.win),
            self.lose.saturating_add(other.lose),
            self.draw.saturating_add(other.draw),
        )
    }

    /// The same games seen from the opponent's side.
    #[must_use]
    pub const fn mirrored(&self) -> Self {
        Self::new(self.lose, self.win, self.draw)
    }

    /// True if every count is at least the corresponding count in `earlier`.
    #[must_use]
    pub const fn extends(&self, earlier: &Self) -> bool {
        self.win >= earlier.win && self.lose >= earlier.lose && self.draw >= earlier.draw
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}", self.win, self.lose, self.draw)
    }
}
