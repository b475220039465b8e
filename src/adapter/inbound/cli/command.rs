//! Command-line interface definitions.
//!
//! Defines the CLI structure for the pennant application using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::domain::{RankingClosure, TieBreak};

/// Decide whether a league season can still end in a desired standing
#[derive(Parser, Debug)]
#[command(name = "pennant")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the pennant CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check whether a ranking can still happen and show one way it can
    Solve(SolveArgs),

    /// Show the current standings of a ledger
    Standings(StandingsArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `pennant config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Shared argument for commands that only read configuration.
#[derive(Parser, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file; built-in defaults when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `solve` subcommand.
#[derive(Parser, Debug)]
pub struct SolveArgs {
    /// Path to the configuration file; built-in defaults when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON ledger of results so far; an empty season when omitted.
    #[arg(short, long)]
    pub ledger: Option<PathBuf>,

    /// Desired standing, best first, as team ids or names (e.g. 0,2,1).
    #[arg(short, long, value_delimiter = ',')]
    pub rank: Vec<String>,

    /// Override the configured tie-break policy.
    #[arg(long)]
    pub tie_break: Option<TieBreak>,

    /// Override the configured ranking closure.
    #[arg(long)]
    pub closure: Option<RankingClosure>,

    /// Override the solver time limit in seconds.
    #[arg(long)]
    pub time_limit: Option<u64>,
}

/// Arguments for the `standings` subcommand.
#[derive(Parser, Debug)]
pub struct StandingsArgs {
    /// Path to the configuration file; built-in defaults when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// JSON ledger of results so far; an empty season when omitted.
    #[arg(short, long)]
    pub ledger: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_solve_defaults() {
        let cli = Cli::try_parse_from(["pennant", "solve"]).unwrap();
        let Commands::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert!(args.rank.is_empty());
        assert!(args.ledger.is_none());
        assert!(args.tie_break.is_none());
        assert!(!cli.json);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_rank_list() {
        let cli = Cli::try_parse_from(["pennant", "solve", "--rank", "0,2,1"]).unwrap();
        let Commands::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.rank, vec!["0", "2", "1"]);
    }

    #[test]
    fn test_parse_policy_overrides() {
        let cli = Cli::try_parse_from([
            "pennant",
            "solve",
            "--tie-break",
            "win-rate-first",
            "--closure",
            "pairwise",
            "--time-limit",
            "3",
        ])
        .unwrap();
        let Commands::Solve(args) = cli.command else {
            panic!("expected solve");
        };
        assert_eq!(args.tie_break, Some(TieBreak::WinRateFirst));
        assert_eq!(args.closure, Some(RankingClosure::Pairwise));
        assert_eq!(args.time_limit, Some(3));
    }

    #[test]
    fn test_parse_rejects_unknown_tie_break() {
        assert!(Cli::try_parse_from(["pennant", "solve", "--tie-break", "coin-flip"]).is_err());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pennant", "standings", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::Standings(_)));
    }

    #[test]
    fn test_parse_config_validate() {
        let cli =
            Cli::try_parse_from(["pennant", "config", "validate", "--config", "x.toml"]).unwrap();
        let Commands::Config(ConfigCommand::Validate(arg)) = cli.command else {
            panic!("expected config validate");
        };
        assert_eq!(arg.config, Some(PathBuf::from("x.toml")));
    }
}
