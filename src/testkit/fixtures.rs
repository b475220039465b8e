//! Canned leagues and ledgers for tests.
//!
//! The default league is large enough that exact solves take a while, so
//! most fixtures here use [`small_league`]: three teams, four games per
//! pair, two interleague games, at most one draw.

use crate::domain::{League, Ledger, Record};

/// Three teams, 4 games per pair, 2 interleague games, 1 draw allowed.
/// Every team plays 10 games.
pub fn small_league() -> League {
    league(3, 4, 2, 1)
}

/// Build a league, panicking on an invalid shape.
pub fn league(teams: usize, games_per_pair: u32, interleague_games: u32, max_draws: u32) -> League {
    League::try_new(teams, games_per_pair, interleague_games, max_draws)
        .expect("fixture league shape is valid")
}

/// A ledger with the given head-to-head results.
///
/// League games are written on both sides; interleague results (opponent
/// column `teams`) only on the team's own row.
pub fn ledger_with(teams: usize, results: &[(usize, usize, Record)]) -> Ledger {
    let mut ledger = Ledger::empty(teams);
    for &(team, opponent, record) in results {
        ledger.set(team, opponent, record);
        if opponent < teams {
            ledger.set(opponent, team, record.mirrored());
        }
    }
    ledger
}

/// Team 0 has lost every game of its season and team 1 has won every
/// game of its season. Everything else is still to be played.
pub fn lopsided_ledger(league: &League) -> Ledger {
    let teams = league.teams();
    let mut ledger = Ledger::empty(teams);
    for opponent in 0..league.opponent_slots() {
        if opponent != 0 {
            let lost = Record::new(0, league.scheduled(0, opponent), 0);
            ledger.set(0, opponent, lost);
            if opponent < teams {
                ledger.set(opponent, 0, lost.mirrored());
            }
        }
        if opponent != 1 && opponent != 0 {
            let won = Record::new(league.scheduled(1, opponent), 0, 0);
            ledger.set(1, opponent, won);
            if opponent < teams {
                ledger.set(opponent, 1, won.mirrored());
            }
        }
    }
    ledger
}

/// A finished season in which lower-numbered teams beat higher-numbered
/// teams in every game and every interleague game is split.
pub fn finished_ledger(league: &League) -> Ledger {
    let teams = league.teams();
    let mut ledger = Ledger::empty(teams);
    for team in 0..teams {
        for opponent in (team + 1)..teams {
            let won = Record::new(league.scheduled(team, opponent), 0, 0);
            ledger.set(team, opponent, won);
            ledger.set(opponent, team, won.mirrored());
        }
        let interleague = league.interleague_games();
        let split = interleague / 2;
        ledger.set(
            team,
            league.interleague_slot(),
            Record::new(interleague - split, split, 0),
        );
    }
    ledger
}
