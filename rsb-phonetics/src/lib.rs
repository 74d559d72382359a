//! RSB Phonetic Error Analysis
//!
//! Phoneme-level scoring of French speech-in-noise (RSB) intelligibility tests.
//! Word responses are transcribed to phonemes, aligned against the target word,
//! and the resulting errors are classified by type, phonetic category, position
//! in the word and noise level.
//!
//! ## Features
//!
//! - Dictionary + rule-based French transcription, extensible with a user lexicon
//! - Edit-distance alignment with typed match/substitution/insertion/deletion steps
//! - Per-participant analysis, per-RSB breakdown and confusion matrices
//! - Phoneme-weighted aggregation, participant comparison and cohort statistics
//!
//! ## Quick Start
//!
//! ```
//! use rsb_phonetics::{analyze_person_phonetics, RsbData, WordTest};
//!
//! let data = RsbData {
//!     file: "participant_01".to_string(),
//!     word_tests: vec![WordTest::new("pain", "bain", -6.0)],
//! };
//!
//! let result = analyze_person_phonetics(&data);
//! assert_eq!(result.total_analysis.total_phonemes, 2);
//! assert_eq!(result.total_analysis.phonetic_accuracy, 50.0);
//! ```

pub mod aggregate;
pub mod alignment;
pub mod analysis;
pub mod compare;
mod dictionary;
pub mod error;
pub mod explanations;
pub mod normalize;
pub mod phonemes;
pub mod summary;
pub mod transcription;
pub mod types;

// Re-export main types
pub use aggregate::{aggregate_label, create_aggregate_phonetic_analysis};
pub use alignment::{align_phonemes, levenshtein_distance, AlignmentKind, AlignmentStep};
pub use analysis::{analyze_person_phonetics, analyze_word_phonetics, PhoneticAnalyzer, WordAnalysis};
pub use compare::{compare_phonetic_analysis, CategoryDifference, ConfusionDifference, PhoneticComparison};
pub use error::{PhoneticError, Result};
pub use explanations::{explanation_keys, phonetic_explanation, Explanation};
pub use normalize::normalize_word;
pub use phonemes::{format_phonemes, ErrorCategory, Phoneme, PhonemeCategory, PhonemeInfo, SubCategory};
pub use summary::{summarize_cohort, CohortSummary};
pub use transcription::{calculate_phonetic_distance, transcribe_to_phonemes, Transcriber};
pub use types::{
    CategoryBuckets, ErrorType, ErrorTypeCounts, PhonemeAnalysis, PhonemeConfusion, PhonemeError,
    PhoneticAnalysisResult, PositionBuckets, RsbData, RsbLevel, WordPosition, WordTest,
};
