//! Handler for the `config` command group.

use std::path::Path;

use serde_json::json;

use super::{load_config, output};
use crate::error::Result;

/// Execute `config show`.
pub fn execute_show(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let league = config.league()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.show",
            "config": config,
            "season_length": league.season_length(),
        }));
        return Ok(());
    }

    output::header(env!("CARGO_PKG_VERSION"));
    output::section("Effective Configuration");
    output::field(
        "Source",
        path.map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string()),
    );

    output::section("League");
    output::field("Teams", league.teams());
    output::field("Per pair", format!("{} games", league.games_per_pair()));
    output::field("Interleague", format!("{} games", league.interleague_games()));
    output::field("Season", format!("{} games", league.season_length()));
    output::field("Max draws", league.max_draws());
    output::field("Tie-break", config.league.tie_break);
    output::field("Closure", config.league.ranking_closure);
    if !config.league.names.is_empty() {
        output::field("Names", config.league.names.join(", "));
    }

    output::section("Solver");
    output::field("Time limit", format!("{}s", config.solver.time_limit_secs));
    output::field("Solutions", config.solver.solution_limit);
    output::field(
        "Threads",
        config
            .solver
            .threads
            .map_or_else(|| "auto".to_string(), |t| t.to_string()),
    );

    output::section("Tuning");
    output::field("Min margin", config.tuning.min_margin);
    output::field("Big M", config.tuning.big_m);

    output::section("Logging");
    output::field("Level", &config.logging.level);
    output::field("Format", &config.logging.format);
    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: Option<&Path>) -> Result<()> {
    let config = load_config(path)?;
    let league = config.league()?;

    if output::is_json() {
        output::json_output(json!({
            "command": "config.validate",
            "valid": true,
            "season_length": league.season_length(),
        }));
        return Ok(());
    }

    output::success("Configuration is valid");
    output::field("Season", format!("{} games", league.season_length()));
    output::field(
        "Decided",
        format!("at least {} games per team", league.min_decided()),
    );
    Ok(())
}
