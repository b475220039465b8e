//! League domain: schedule shape, result ledgers, rankings, standings.
//!
//! Everything here is pure data plus validation. Nothing in this module
//! knows about the integer-programming model built from it.

pub mod constraint;
pub mod error;

mod ids;
mod league;
mod ledger;
mod ranking;
mod record;
mod standings;
mod tie_break;

pub use ids::TeamId;
pub use league::{
    League, DEFAULT_GAMES_PER_PAIR, DEFAULT_INTERLEAGUE_GAMES, DEFAULT_MAX_DRAWS, DEFAULT_TEAMS,
};
pub use ledger::Ledger;
pub use ranking::{DesiredRanking, RankingClosure};
pub use record::Record;
pub use standings::{Standings, TeamStanding};
pub use tie_break::{Comparison, TieBreak};
