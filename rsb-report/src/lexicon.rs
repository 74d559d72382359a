//! User lexicon files
//!
//! ```toml
//! [[entries]]
//! word = "maison"
//! phonemes = ["m", "ɛ", "z", "ɔ̃"]
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use rsb_phonetics::{Phoneme, PhoneticError, Transcriber};

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("Failed to read lexicon {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse lexicon {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Lexicon entry {word:?}: {source}")]
    Phoneme {
        word: String,
        #[source]
        source: PhoneticError,
    },

    #[error(transparent)]
    Entry(#[from] PhoneticError),
}

/// One user-provided transcription
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexiconEntry {
    pub word: String,
    /// IPA symbols, one per phoneme
    pub phonemes: Vec<String>,
}

/// TOML file structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LexiconFile {
    #[serde(default)]
    pub entries: Vec<LexiconEntry>,
}

impl LexiconFile {
    /// Entries with their symbols parsed
    pub fn phoneme_entries(&self) -> Result<Vec<(String, Vec<Phoneme>)>, LexiconError> {
        self.entries
            .iter()
            .map(|entry| {
                let phonemes = entry
                    .phonemes
                    .iter()
                    .map(|symbol| Phoneme::from_symbol(symbol))
                    .collect::<Result<Vec<_>, _>>()
                    .map_err(|source| LexiconError::Phoneme {
                        word: entry.word.clone(),
                        source,
                    })?;
                Ok((entry.word.clone(), phonemes))
            })
            .collect()
    }

    /// Transcriber over the built-in dictionary plus these entries
    pub fn into_transcriber(self) -> Result<Transcriber, LexiconError> {
        let entries = self.phoneme_entries()?;
        Ok(Transcriber::with_entries(entries)?)
    }
}

/// Load a lexicon file and build the transcriber it describes
pub fn load_lexicon(path: &Path) -> Result<Transcriber, LexiconError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let file: LexiconFile = toml::from_str(&contents).map_err(|source| LexiconError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let count = file.entries.len();
    let transcriber = file.into_transcriber()?;
    info!("📖 Loaded {} lexicon entries from {}", count, path.display());

    Ok(transcriber)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn write_lexicon(contents: &str) -> NamedTempFile {
        let file = NamedTempFile::new().unwrap();
        std::fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn test_load_valid_lexicon() {
        let file = write_lexicon(
            r#"
[[entries]]
word = "Zorglub"
phonemes = ["z", "ɔ", "ʁ", "g", "l", "y", "b"]

[[entries]]
word = "le chat"
phonemes = ["ʃ", "a", "t"]
"#,
        );

        let transcriber = load_lexicon(file.path()).unwrap();
        assert_eq!(transcriber.transcribe("zorglub").len(), 7);
        assert_eq!(
            transcriber.transcribe("chat"),
            vec![Phoneme::Sh, Phoneme::A, Phoneme::T]
        );
    }

    #[test]
    fn test_nasal_vowel_symbols() {
        let file = write_lexicon(
            "[[entries]]\nword = \"maison\"\nphonemes = [\"m\", \"ɛ\", \"z\", \"ɔ\u{303}\"]\n",
        );
        let transcriber = load_lexicon(file.path()).unwrap();
        assert_eq!(transcriber.transcribe("maison").last(), Some(&Phoneme::ONasal));
    }

    #[test]
    fn test_unknown_symbol_names_the_word() {
        let file = write_lexicon("[[entries]]\nword = \"chose\"\nphonemes = [\"ʃ\", \"th\"]\n");
        let err = load_lexicon(file.path()).unwrap_err();

        assert!(matches!(err, LexiconError::Phoneme { ref word, .. } if word == "chose"));
        assert!(err.to_string().contains("chose"));
    }

    #[test]
    fn test_empty_phonemes_rejected() {
        let file = write_lexicon("[[entries]]\nword = \"vide\"\nphonemes = []\n");
        let err = load_lexicon(file.path()).unwrap_err();
        assert!(matches!(
            err,
            LexiconError::Entry(PhoneticError::InvalidLexiconEntry { .. })
        ));
        assert!(err.to_string().contains("vide"));
    }

    #[test]
    fn test_missing_file() {
        let err = load_lexicon(Path::new("/nonexistent/lexique.toml")).unwrap_err();
        assert!(matches!(err, LexiconError::Io { .. }));
    }

    #[test]
    fn test_malformed_toml() {
        let file = write_lexicon("[[entries]\nword = ");
        assert!(matches!(
            load_lexicon(file.path()).unwrap_err(),
            LexiconError::Parse { .. }
        ));
    }

    #[test]
    fn test_empty_file_is_the_builtin_dictionary() {
        let file = write_lexicon("");
        let transcriber = load_lexicon(file.path()).unwrap();
        assert_eq!(transcriber.len(), Transcriber::french().len());
    }
}
