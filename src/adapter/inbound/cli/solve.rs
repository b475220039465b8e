//! Handler for `pennant solve`.

use serde_json::json;
use tokio::signal;
use tracing::info;

use super::command::SolveArgs;
use super::standings::{ledger_table, ordered, standings_json, standings_table};
use super::{input, load_config, output};
use crate::application::{FeasibilityService, Outcome};
use crate::domain::{DesiredRanking, League, Ledger, Standings};
use crate::error::{Error, Result};
use crate::infrastructure::config::Config;
use crate::infrastructure::factory;

/// Execute `solve`.
///
/// The solve itself is blocking, so it runs on the blocking pool while
/// Ctrl-C is watched. An interrupted solve is reported as unknown.
pub async fn execute(args: &SolveArgs) -> Result<Outcome> {
    let mut config = load_config(args.config.as_deref())?;
    if let Some(tie_break) = args.tie_break {
        config.league.tie_break = tie_break;
    }
    if let Some(closure) = args.closure {
        config.league.ranking_closure = closure;
    }
    if let Some(secs) = args.time_limit {
        config.solver.time_limit_secs = secs;
    }
    config.validate()?;

    let league = config.league()?;
    let ledger = input::load_ledger(args.ledger.as_deref(), &league)?;
    let ranking = input::parse_ranking(&args.rank, &config.league, &league)?;
    let service = factory::build_feasibility_service(&config, factory::build_solver())?;

    print_request(&config, &ranking);

    let task = {
        let (ledger, ranking) = (ledger.clone(), ranking.clone());
        tokio::task::spawn_blocking(move || service.check(&ledger, &ranking))
    };

    let outcome = tokio::select! {
        joined = task => joined.map_err(|e| Error::Solver(format!("solver task failed: {e}")))??,
        _ = signal::ctrl_c() => {
            info!("Interrupted while solving");
            output::warning("Interrupted; no verdict reached");
            Outcome::Unknown
        }
    };

    print_outcome(&config, &league, &ledger, &ranking, &outcome);
    Ok(outcome)
}

fn print_request(config: &Config, ranking: &DesiredRanking) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Request");
    let names: Vec<String> = ranking
        .teams()
        .iter()
        .map(|&t| config.league.team_name(t))
        .collect();
    output::field(
        "Ranking",
        if names.is_empty() {
            output::muted("(none)")
        } else {
            names.join(" > ")
        },
    );
    output::field("Tie-break", config.league.tie_break);
    output::field("Closure", config.league.ranking_closure);
    output::field("Time limit", format!("{}s", config.solver.time_limit_secs));
}

fn print_outcome(
    config: &Config,
    league: &League,
    original: &Ledger,
    ranking: &DesiredRanking,
    outcome: &Outcome,
) {
    if output::is_json() {
        let completion = outcome.completion();
        output::json_output(json!({
            "command": "solve",
            "verdict": outcome.as_str(),
            "ranking": ranking.teams(),
            "tie_break": config.league.tie_break,
            "closure": config.league.ranking_closure,
            "completion": completion,
            "standings": completion.map(|ledger| {
                standings_json(config, &ordered(config, &Standings::from_ledger(ledger)))
            }),
        }));
        return;
    }

    output::section("Verdict");
    match outcome {
        Outcome::Feasible(completion) => {
            output::success(&format!("{} is reachable", output::highlight(ranking)));
            output::section("Final standings");
            output::lines(&standings_table(
                config,
                &ordered(config, &Standings::from_ledger(completion)),
            ));
            output::section("Completed results");
            output::lines(&ledger_table(config, league, completion));
            if completion == original {
                output::note("no games remain to be played");
            }
        }
        Outcome::Infeasible => {
            output::warning(&format!("{} cannot happen", output::highlight(ranking)));
            output::hint("try a shorter ranking or the win-count-first tie-break");
        }
        Outcome::Unknown => {
            output::warning("No verdict within the solver budget");
            output::hint("raise --time-limit and try again");
        }
    }
}
