//! Reading ledgers and rankings from command-line input.

use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::domain::{DesiredRanking, League, Ledger, Record};
use crate::error::{ConfigError, Result};
use crate::infrastructure::config::league::LeagueConfig;

/// Accepted ledger file layouts.
#[derive(Deserialize)]
#[serde(untagged)]
enum LedgerFile {
    /// `{"records": [[..], ..]}`
    Wrapped(Ledger),
    /// `[[..], ..]`
    Rows(Vec<Vec<Record>>),
}

/// Parse a ledger from JSON text.
///
/// # Errors
///
/// Returns an error if the JSON is malformed or the rows do not form a
/// ledger.
pub fn parse_ledger(content: &str) -> Result<Ledger> {
    match serde_json::from_str(content)? {
        LedgerFile::Wrapped(ledger) => Ok(ledger),
        LedgerFile::Rows(rows) => Ok(Ledger::from_rows(rows)?),
    }
}

/// Load the ledger at `path`, or an empty season when there is none.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_ledger(path: Option<&Path>, league: &League) -> Result<Ledger> {
    let Some(path) = path else {
        return Ok(Ledger::empty(league.teams()));
    };
    if !path.exists() {
        warn!(path = %path.display(), "Ledger file not found, starting from an empty season");
        return Ok(Ledger::empty(league.teams()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_ledger(&content)
}

/// Resolve ranking tokens (ids or configured names) into a ranking.
///
/// # Errors
///
/// Returns an error if a token names no team, or the resulting ranking is
/// invalid for the league.
pub fn parse_ranking(tokens: &[String], names: &LeagueConfig, league: &League) -> Result<DesiredRanking> {
    let teams = tokens
        .iter()
        .filter(|token| !token.trim().is_empty())
        .map(|token| {
            names.resolve_team(token).ok_or_else(|| {
                ConfigError::InvalidValue {
                    field: "rank",
                    reason: format!("'{}' is neither a team id nor a configured name", token.trim()),
                }
                .into()
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(DesiredRanking::try_new(teams, league)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use crate::domain::TeamId;
    use crate::error::Error;

    #[test]
    fn parses_wrapped_and_bare_rows() {
        let wrapped = r#"{"records": [[{}, {"win": 2}, {}], [{"lose": 2}, {}, {"draw": 1}]]}"#;
        let bare = r#"[[{}, {"win": 2}, {}], [{"lose": 2}, {}, {"draw": 1}]]"#;
        let a = parse_ledger(wrapped).unwrap();
        let b = parse_ledger(bare).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.get(0, 1), Record::new(2, 0, 0));
        assert_eq!(a.get(1, 2), Record::new(0, 0, 1));
    }

    #[test]
    fn rejects_ragged_rows() {
        let ragged = r#"[[{}, {}], [{}, {}, {}]]"#;
        assert!(matches!(
            parse_ledger(ragged),
            Err(Error::Domain(DomainError::RaggedLedger { row: 0, .. }))
        ));
    }

    #[test]
    fn missing_ledger_is_empty_season() {
        let league = League::default();
        let ledger = load_ledger(Some(Path::new("/nonexistent/ledger.json")), &league).unwrap();
        assert_eq!(ledger, Ledger::empty(6));
        assert_eq!(load_ledger(None, &league).unwrap(), Ledger::empty(6));
    }

    #[test]
    fn ranking_accepts_names_and_ids() {
        let league = League::default();
        let names = LeagueConfig {
            names: ["A", "B", "C", "D", "E", "F"].map(String::from).to_vec(),
            ..LeagueConfig::default()
        };
        let tokens: Vec<String> = vec!["c".into(), "0".into(), " b ".into()];
        let ranking = parse_ranking(&tokens, &names, &league).unwrap();
        assert_eq!(
            ranking.teams(),
            &[TeamId::new(2), TeamId::new(0), TeamId::new(1)]
        );
    }

    #[test]
    fn ranking_rejects_unknown_name() {
        let league = League::default();
        let tokens = vec!["Lions".to_string()];
        let err = parse_ranking(&tokens, &LeagueConfig::default(), &league).unwrap_err();
        assert!(err.to_string().contains("Lions"));
    }
}
