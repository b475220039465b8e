//! Domain identifier types.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Team identifier - index of the team in the league, newtype for type safety.
///
/// Teams are numbered `0..teams`. The inner index is private to keep
/// indices and other counts from being mixed up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamId(usize);

impl TeamId {
    /// Create a new `TeamId` from a zero-based index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Get the zero-based index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for TeamId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for TeamId {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}
