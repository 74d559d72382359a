//! Participant session files
//!
//! A file holds either one `RsbData` object or an array of them, in the
//! dashboard's JSON export format.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use rsb_phonetics::RsbData;

#[derive(Deserialize)]
#[serde(untagged)]
enum SessionFile {
    Many(Vec<RsbData>),
    One(RsbData),
}

/// Parse the sessions of one JSON document
pub fn parse_sessions(json: &str) -> Result<Vec<RsbData>> {
    let file: SessionFile = serde_json::from_str(json)
        .context("Expected an RSB session object or an array of sessions")?;

    Ok(match file {
        SessionFile::Many(sessions) => sessions,
        SessionFile::One(session) => vec![session],
    })
}

/// Load the sessions of one file
pub fn load_sessions(path: &Path) -> Result<Vec<RsbData>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file {}", path.display()))?;

    let sessions = parse_sessions(&contents)
        .with_context(|| format!("Failed to parse input file {}", path.display()))?;

    if sessions.is_empty() {
        warn!("⚠️ {} contains no sessions", path.display());
    }
    debug!("Loaded {} session(s) from {}", sessions.len(), path.display());

    Ok(sessions)
}

/// Load and concatenate the sessions of several files, in order
pub fn load_all(paths: &[PathBuf]) -> Result<Vec<RsbData>> {
    let mut sessions = Vec::new();
    for path in paths {
        sessions.extend(load_sessions(path)?);
    }
    Ok(sessions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SESSION: &str = r#"{
        "file": "p01.csv",
        "wordTests": [
            {"target": "pain", "response": "bain", "isCorrect": false, "rsb": -6, "duration": 900}
        ]
    }"#;

    #[test]
    fn test_single_object() {
        let sessions = parse_sessions(SESSION).unwrap();
        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].file, "p01.csv");
    }

    #[test]
    fn test_array_of_sessions() {
        let json = format!("[{}, {}]", SESSION, SESSION.replace("p01", "p02"));
        let sessions = parse_sessions(&json).unwrap();
        assert_eq!(sessions.len(), 2);
        assert_eq!(sessions[1].file, "p02.csv");
    }

    #[test]
    fn test_invalid_document() {
        assert!(parse_sessions("{\"wordTests\": 3}").is_err());
        assert!(parse_sessions("not json").is_err());
    }

    #[test]
    fn test_load_all_keeps_order() {
        let dir = TempDir::new().unwrap();
        let first = dir.path().join("a.json");
        let second = dir.path().join("b.json");
        std::fs::write(&first, SESSION).unwrap();
        std::fs::write(&second, SESSION.replace("p01", "p02")).unwrap();

        let sessions = load_all(&[first, second]).unwrap();
        let names: Vec<&str> = sessions.iter().map(|s| s.file.as_str()).collect();
        assert_eq!(names, vec!["p01.csv", "p02.csv"]);
    }

    #[test]
    fn test_missing_file_mentions_path() {
        let err = load_sessions(Path::new("/nonexistent/session.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/session.json"));
    }
}
