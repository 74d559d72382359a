//! Error types for phonetic analysis

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PhoneticError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneticError {
    #[error("Cannot aggregate an empty list of phonetic analyses")]
    EmptyAggregation,

    #[error("Unknown phoneme symbol: {0:?}")]
    UnknownPhoneme(String),

    #[error("Invalid lexicon entry {word:?}: {reason}")]
    InvalidLexiconEntry { word: String, reason: String },
}

impl PhoneticError {
    pub fn unknown_phoneme<S: Into<String>>(symbol: S) -> Self {
        Self::UnknownPhoneme(symbol.into())
    }

    pub fn invalid_entry<W: Into<String>, R: Into<String>>(word: W, reason: R) -> Self {
        Self::InvalidLexiconEntry {
            word: word.into(),
            reason: reason.into(),
        }
    }
}
