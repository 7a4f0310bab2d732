use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::http_client::{fetch_uncached, http_client};
use crate::players::LoadError;

pub const DEFAULT_SOURCE: &str = "data/players.json";

/// Where the player data set is read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Url(String),
    File(PathBuf),
}

impl Source {
    pub fn from_env() -> Self {
        let raw = std::env::var("PLAYERS_SOURCE").unwrap_or_default();
        if raw.trim().is_empty() {
            return Self::parse(DEFAULT_SOURCE);
        }
        Self::parse(&raw)
    }

    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            Self::Url(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Reads the raw body. Files are re-read every time and HTTP requests
    /// bypass caches, so there is nothing stale to invalidate.
    pub fn fetch(&self) -> Result<String, LoadError> {
        match self {
            Self::Url(url) => {
                let client = http_client()?;
                let resp = fetch_uncached(client, url)?;
                let status = resp.status();
                if !status.is_success() {
                    return Err(LoadError::Status {
                        status: status.as_u16(),
                        reason: status.canonical_reason().unwrap_or("unknown").to_string(),
                    });
                }
                Ok(resp.text()?)
            }
            Self::File(path) => fs::read_to_string(path).map_err(|source| LoadError::Io {
                path: path.clone(),
                source,
            }),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Url(url) => f.write_str(url),
            Self::File(path) => write!(f, "{}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_detects_urls() {
        assert_eq!(
            Source::parse(" HTTPS://example.com/players.json "),
            Source::Url("HTTPS://example.com/players.json".to_string())
        );
        assert_eq!(
            Source::parse("data/players.json"),
            Source::File(PathBuf::from("data/players.json"))
        );
    }

    #[test]
    fn missing_file_is_io_error() {
        let source = Source::File(PathBuf::from("definitely/not/here.json"));
        assert!(matches!(source.fetch(), Err(LoadError::Io { .. })));
    }
}
