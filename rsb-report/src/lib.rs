//! RSB Phonetic Reports
//!
//! Command-line front end of the phonetic analysis engine: loads participant
//! session files exported by the dashboard, applies an optional user lexicon
//! and prints text or JSON reports.

pub mod commands;
pub mod config;
pub mod input;
pub mod lexicon;
pub mod report;

// Re-export main types
pub use commands::{execute, Cli, Command};
pub use config::{OutputFormat, ReportConfig};
pub use lexicon::{load_lexicon, LexiconEntry, LexiconError, LexiconFile};
