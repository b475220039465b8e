//! Handler for `pennant standings`, plus the table renderers shared with
//! `pennant solve`.

use rust_decimal::Decimal;
use serde_json::json;
use tabled::builder::Builder;
use tabled::{Table, Tabled};

use super::command::StandingsArgs;
use super::{input, load_config, output};
use crate::domain::{League, Ledger, Standings, TeamStanding};
use crate::error::Result;
use crate::infrastructure::config::Config;

#[derive(Tabled)]
struct StandingRow {
    #[tabled(rename = "#")]
    place: usize,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "W")]
    wins: u32,
    #[tabled(rename = "L")]
    losses: u32,
    #[tabled(rename = "D")]
    draws: u32,
    #[tabled(rename = "Pct")]
    win_rate: String,
}

/// Execute `standings`.
pub fn execute(args: &StandingsArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let league = config.league()?;
    let ledger = input::load_ledger(args.ledger.as_deref(), &league)?;
    ledger.validate(&league)?;

    let standings = Standings::from_ledger(&ledger);
    let ordered = ordered(&config, &standings);

    if output::is_json() {
        output::json_output(json!({
            "command": "standings",
            "tie_break": config.league.tie_break,
            "standings": standings_json(&config, &ordered),
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Standings");
    output::lines(&standings_table(&config, &ordered));
    output::note(&format!("ordered by {} tie-break", config.league.tie_break));
    Ok(())
}

pub(super) fn ordered(config: &Config, standings: &Standings) -> Vec<TeamStanding> {
    standings.ordered(config.league.tie_break, config.tuning.min_margin)
}

pub(super) fn standings_json(config: &Config, ordered: &[TeamStanding]) -> serde_json::Value {
    ordered
        .iter()
        .map(|s| {
            json!({
                "team": s.team,
                "name": config.league.team_name(s.team),
                "wins": s.wins,
                "losses": s.losses,
                "draws": s.draws,
                "win_rate": s.win_rate.round_dp(4),
            })
        })
        .collect()
}

pub(super) fn standings_table(config: &Config, ordered: &[TeamStanding]) -> String {
    let rows = ordered.iter().enumerate().map(|(i, s)| StandingRow {
        place: i + 1,
        team: config.league.team_name(s.team),
        wins: s.wins,
        losses: s.losses,
        draws: s.draws,
        win_rate: format_rate(s.win_rate),
    });
    Table::new(rows).to_string()
}

/// Pair matrix: one row per team, one `W-L-D` cell per opponent column.
pub(super) fn ledger_table(config: &Config, league: &League, ledger: &Ledger) -> String {
    let mut builder = Builder::default();

    let mut head = vec![String::new()];
    head.extend(league.team_ids().map(|t| config.league.team_name(t)));
    head.push("Interleague".to_string());
    builder.push_record(head);

    for (team, row) in league.team_ids().zip(ledger.rows()) {
        let mut cells = vec![config.league.team_name(team)];
        cells.extend(row.iter().enumerate().map(|(opponent, record)| {
            if opponent == team.index() {
                "-".to_string()
            } else {
                record.to_string()
            }
        }));
        builder.push_record(cells);
    }

    builder.build().to_string()
}

fn format_rate(rate: Decimal) -> String {
    format!("{:.3}", rate)
}
