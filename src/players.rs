use std::fmt;
use std::path::PathBuf;

use serde_json::Value;
use thiserror::Error;

use crate::source::Source;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerRecord {
    pub name: String,
    pub clubs: Vec<String>,
}

impl PlayerRecord {
    pub fn new(name: impl Into<String>, clubs: &[&str]) -> Self {
        Self {
            name: name.into(),
            clubs: clubs.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Built-in data set used whenever the external one is unusable.
pub fn demo_players() -> Vec<PlayerRecord> {
    vec![
        PlayerRecord::new("Player One", &["Club A", "Club B", "Club C"]),
        PlayerRecord::new("Player Two", &["Club X", "Club Y"]),
        PlayerRecord::new("Player Three", &["Club D", "Club E", "Club F", "Club G"]),
    ]
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Client(#[from] anyhow::Error),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("http {status}: {reason}")]
    Status { status: u16, reason: String },
    #[error("failed reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid data format: expected an array, got {0}")]
    NotAnArray(&'static str),
    #[error("no valid player entries found")]
    NoValidPlayers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueKind {
    NotAnObject,
    NameNotString,
    NameEmpty,
    ClubsNotArray,
    ClubNotString,
    NoValidClubs,
}

/// One validation problem found while sanitizing a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub index: usize,
    pub name: Option<String>,
    pub club: Option<usize>,
    pub kind: IssueKind,
}

impl Issue {
    /// Whether the whole entry was dropped (as opposed to a single club).
    pub fn drops_entry(&self) -> bool {
        self.kind != IssueKind::ClubNotString
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let index = self.index;
        let name = self.name.as_deref().unwrap_or_default();
        match self.kind {
            IssueKind::NotAnObject => {
                write!(f, "Invalid player entry at index {index}: expected an object")
            }
            IssueKind::NameNotString => {
                write!(f, "Invalid player name at index {index}: expected a string")
            }
            IssueKind::NameEmpty => {
                write!(f, "Invalid player name at index {index}: name is empty")
            }
            IssueKind::ClubsNotArray => write!(
                f,
                "Invalid clubs list for player \"{name}\" at index {index}: expected an array"
            ),
            IssueKind::ClubNotString => write!(
                f,
                "Invalid club entry for player \"{name}\" at index {index}, club #{}: expected a string",
                self.club.unwrap_or_default()
            ),
            IssueKind::NoValidClubs => write!(
                f,
                "Player \"{name}\" at index {index} has no valid club entries"
            ),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sanitized {
    pub players: Vec<PlayerRecord>,
    pub issues: Vec<Issue>,
}

/// Filters raw entries down to well-formed records, keeping input order.
///
/// A bad entry is skipped on its own; a bad club only drops that club.
pub fn sanitize_players(items: &[Value]) -> Sanitized {
    let mut out = Sanitized::default();

    for (index, entry) in items.iter().enumerate() {
        let Some(obj) = entry.as_object() else {
            out.issues.push(Issue {
                index,
                name: None,
                club: None,
                kind: IssueKind::NotAnObject,
            });
            continue;
        };

        let name = match obj.get("name") {
            Some(Value::String(name)) if name.is_empty() => {
                out.issues.push(Issue {
                    index,
                    name: None,
                    club: None,
                    kind: IssueKind::NameEmpty,
                });
                continue;
            }
            Some(Value::String(name)) => name.clone(),
            _ => {
                out.issues.push(Issue {
                    index,
                    name: None,
                    club: None,
                    kind: IssueKind::NameNotString,
                });
                continue;
            }
        };

        let Some(clubs) = obj.get("clubs").and_then(Value::as_array) else {
            out.issues.push(Issue {
                index,
                name: Some(name),
                club: None,
                kind: IssueKind::ClubsNotArray,
            });
            continue;
        };

        let mut club_names = Vec::with_capacity(clubs.len());
        for (club_index, club) in clubs.iter().enumerate() {
            match club.as_str() {
                Some(club) => club_names.push(club.to_string()),
                None => out.issues.push(Issue {
                    index,
                    name: Some(name.clone()),
                    club: Some(club_index),
                    kind: IssueKind::ClubNotString,
                }),
            }
        }

        if club_names.is_empty() {
            out.issues.push(Issue {
                index,
                name: Some(name),
                club: None,
                kind: IssueKind::NoValidClubs,
            });
            continue;
        }

        out.players.push(PlayerRecord {
            name,
            clubs: club_names,
        });
    }

    out
}

pub fn parse_players_json(raw: &str) -> Result<Sanitized, LoadError> {
    match serde_json::from_str::<Value>(raw)? {
        Value::Array(items) => Ok(sanitize_players(&items)),
        other => Err(LoadError::NotAnArray(json_kind(&other))),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataOrigin {
    Loaded { source: String },
    Fallback { reason: String },
}

/// Result of a load: always a non-empty data set, plus console lines.
#[derive(Debug, Clone)]
pub struct LoadOutcome {
    pub players: Vec<PlayerRecord>,
    pub origin: DataOrigin,
    pub log: Vec<String>,
}

impl LoadOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, DataOrigin::Fallback { .. })
    }
}

pub fn load_players(source: &Source) -> LoadOutcome {
    load_players_with(&source.to_string(), || source.fetch())
}

/// Runs the validation pipeline over whatever `fetch` returns. Never fails:
/// any error, or an empty result, yields the demo data set.
pub fn load_players_with<F>(label: &str, fetch: F) -> LoadOutcome
where
    F: FnOnce() -> Result<String, LoadError>,
{
    let mut log = Vec::new();

    let result = fetch().and_then(|raw| parse_players_json(&raw));
    let err = match result {
        Ok(sanitized) => {
            for issue in &sanitized.issues {
                log.push(format!("[WARN] {issue}"));
            }
            if !sanitized.players.is_empty() {
                log.push(format!(
                    "[INFO] Loaded {} players from {label}",
                    sanitized.players.len()
                ));
                return LoadOutcome {
                    players: sanitized.players,
                    origin: DataOrigin::Loaded {
                        source: label.to_string(),
                    },
                    log,
                };
            }
            LoadError::NoValidPlayers
        }
        Err(err) => err,
    };

    log.push(format!("[ERROR] Loading players from {label}: {err}"));
    log.push("[INFO] Using built-in demo players".to_string());
    LoadOutcome {
        players: demo_players(),
        origin: DataOrigin::Fallback {
            reason: err.to_string(),
        },
        log,
    }
}
