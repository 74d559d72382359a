//! Input records and analysis results
//!
//! Field names serialize in camelCase so the dashboard can consume results
//! unchanged. Maps keyed by RSB level serialize with the level as a string
//! key (`"-6"`, `"-2.5"`).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::phonemes::{ErrorCategory, Phoneme};

/// Signal-to-noise ratio of a trial, in dB
///
/// Totally ordered so it can key a `BTreeMap`; `-0.0` is folded into `0.0`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct RsbLevel(f64);

impl RsbLevel {
    pub fn new(db: f64) -> Self {
        if db == 0.0 {
            Self(0.0)
        } else {
            Self(db)
        }
    }

    pub fn db(self) -> f64 {
        self.0
    }
}

impl From<f64> for RsbLevel {
    fn from(db: f64) -> Self {
        Self::new(db)
    }
}

impl From<RsbLevel> for f64 {
    fn from(level: RsbLevel) -> Self {
        level.0
    }
}

impl PartialEq for RsbLevel {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RsbLevel {}

impl PartialOrd for RsbLevel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RsbLevel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Hash for RsbLevel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl fmt::Display for RsbLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Serde adapter for `BTreeMap<RsbLevel, V>` with string keys
pub(crate) mod rsb_keyed {
    use super::RsbLevel;
    use serde::de::Error as _;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::collections::BTreeMap;

    pub fn serialize<V, S>(map: &BTreeMap<RsbLevel, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        V: Serialize,
        S: Serializer,
    {
        let mut out = serializer.serialize_map(Some(map.len()))?;
        for (level, value) in map {
            out.serialize_entry(&level.to_string(), value)?;
        }
        out.end()
    }

    pub fn deserialize<'de, V, D>(deserializer: D) -> Result<BTreeMap<RsbLevel, V>, D::Error>
    where
        V: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        let raw = BTreeMap::<String, V>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(key, value)| {
                key.trim()
                    .parse::<f64>()
                    .map(|db| (RsbLevel::new(db), value))
                    .map_err(|e| D::Error::custom(format!("invalid RSB level {:?}: {}", key, e)))
            })
            .collect()
    }
}

/// One trial of a speech-in-noise test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordTest {
    /// Expected word
    pub target: String,
    /// Recognized or typed answer
    pub response: String,
    /// Whole-word correctness as scored by the test
    #[serde(default)]
    pub is_correct: bool,
    pub rsb: RsbLevel,
    /// Response latency in ms
    #[serde(default)]
    pub duration: f64,
}

impl WordTest {
    pub fn new(target: &str, response: &str, rsb: f64) -> Self {
        Self {
            target: target.to_string(),
            response: response.to_string(),
            is_correct: target == response,
            rsb: RsbLevel::new(rsb),
            duration: 0.0,
        }
    }
}

/// One participant's session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RsbData {
    /// Participant or file identifier
    pub file: String,
    #[serde(default)]
    pub word_tests: Vec<WordTest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorType {
    Substitution,
    Insertion,
    Deletion,
}

/// Where in the target word an error falls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordPosition {
    Debut,
    Milieu,
    Fin,
}

impl WordPosition {
    pub const ALL: [WordPosition; 3] = [WordPosition::Debut, WordPosition::Milieu, WordPosition::Fin];

    /// Bucket for an alignment position within a target word of `word_length` phonemes
    pub fn classify(position: usize, word_length: usize) -> Self {
        if word_length == 0 {
            return WordPosition::Milieu;
        }

        let ratio = position as f64 / word_length as f64;
        if ratio < 0.33 {
            WordPosition::Debut
        } else if ratio > 0.66 {
            WordPosition::Fin
        } else {
            WordPosition::Milieu
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            WordPosition::Debut => "debut",
            WordPosition::Milieu => "milieu",
            WordPosition::Fin => "fin",
        }
    }
}

/// One misaligned phoneme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhonemeError {
    /// None for an insertion
    pub target: Option<Phoneme>,
    /// None for a deletion
    pub response: Option<Phoneme>,
    /// Alignment position
    pub position: usize,
    pub word_target: String,
    pub word_response: String,
    pub rsb: RsbLevel,
    pub error_type: ErrorType,
    /// Phoneme count of the target word
    pub word_length: usize,
}

impl PhonemeError {
    pub fn word_position(&self) -> WordPosition {
        WordPosition::classify(self.position, self.word_length)
    }

    /// Error buckets of the target phoneme (none for insertions)
    pub fn categories(&self) -> Vec<ErrorCategory> {
        self.target
            .map(|p| p.error_categories())
            .unwrap_or_default()
    }
}

/// Aggregated (target, response) substitution pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhonemeConfusion {
    pub target_phoneme: Phoneme,
    pub response_phoneme: Phoneme,
    pub count: usize,
    /// Share of the scope's total phonemes
    pub percentage: f64,
    pub avg_rsb: f64,
}

/// Errors bucketed by phonetic category (non-exclusive)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryBuckets {
    #[serde(rename = "voyelles")]
    pub vowels: Vec<PhonemeError>,
    #[serde(rename = "consonnes")]
    pub consonants: Vec<PhonemeError>,
    #[serde(rename = "nasales")]
    pub nasals: Vec<PhonemeError>,
    pub occlusives: Vec<PhonemeError>,
    pub fricatives: Vec<PhonemeError>,
}

impl CategoryBuckets {
    /// Bucket every error under each category of its target phoneme
    pub fn from_errors(errors: &[PhonemeError]) -> Self {
        let mut buckets = Self::default();
        for error in errors {
            for category in error.categories() {
                buckets.bucket_mut(category).push(error.clone());
            }
        }
        buckets
    }

    pub fn get(&self, category: ErrorCategory) -> &[PhonemeError] {
        match category {
            ErrorCategory::Vowels => &self.vowels,
            ErrorCategory::Consonants => &self.consonants,
            ErrorCategory::Nasals => &self.nasals,
            ErrorCategory::Occlusives => &self.occlusives,
            ErrorCategory::Fricatives => &self.fricatives,
        }
    }

    fn bucket_mut(&mut self, category: ErrorCategory) -> &mut Vec<PhonemeError> {
        match category {
            ErrorCategory::Vowels => &mut self.vowels,
            ErrorCategory::Consonants => &mut self.consonants,
            ErrorCategory::Nasals => &mut self.nasals,
            ErrorCategory::Occlusives => &mut self.occlusives,
            ErrorCategory::Fricatives => &mut self.fricatives,
        }
    }
}

/// Errors bucketed by position in the target word (a strict partition)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PositionBuckets {
    pub debut: Vec<PhonemeError>,
    pub milieu: Vec<PhonemeError>,
    pub fin: Vec<PhonemeError>,
}

impl PositionBuckets {
    pub fn from_errors(errors: &[PhonemeError]) -> Self {
        let mut buckets = Self::default();
        for error in errors {
            let bucket = match error.word_position() {
                WordPosition::Debut => &mut buckets.debut,
                WordPosition::Milieu => &mut buckets.milieu,
                WordPosition::Fin => &mut buckets.fin,
            };
            bucket.push(error.clone());
        }
        buckets
    }

    pub fn get(&self, position: WordPosition) -> &[PhonemeError] {
        match position {
            WordPosition::Debut => &self.debut,
            WordPosition::Milieu => &self.milieu,
            WordPosition::Fin => &self.fin,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorTypeCounts {
    pub substitutions: usize,
    pub insertions: usize,
    pub deletions: usize,
}

/// Statistics for one scope: a participant, an RSB level, or an aggregate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhonemeAnalysis {
    pub total_phonemes: usize,
    pub correct_phonemes: usize,
    pub errors: Vec<PhonemeError>,
    pub confusion_matrix: Vec<PhonemeConfusion>,
    #[serde(with = "rsb_keyed")]
    pub errors_by_rsb: BTreeMap<RsbLevel, Vec<PhonemeError>>,
    pub errors_by_category: CategoryBuckets,
    pub errors_by_position: PositionBuckets,
    /// Percentage of target phonemes correctly reproduced
    pub phonetic_accuracy: f64,
    /// Mean phoneme-level edit distance per word
    pub phonetic_distance_avg: f64,
}

impl PhonemeAnalysis {
    /// The `n` most frequent confusions, ties kept in matrix order
    pub fn top_confusions(&self, n: usize) -> Vec<&PhonemeConfusion> {
        let mut rows: Vec<&PhonemeConfusion> = self.confusion_matrix.iter().collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count));
        rows.truncate(n);
        rows
    }

    pub fn error_type_counts(&self) -> ErrorTypeCounts {
        let mut counts = ErrorTypeCounts::default();
        for error in &self.errors {
            match error.error_type {
                ErrorType::Substitution => counts.substitutions += 1,
                ErrorType::Insertion => counts.insertions += 1,
                ErrorType::Deletion => counts.deletions += 1,
            }
        }
        counts
    }

    /// Number of distinct (target, response) substitution pairs
    pub fn confusion_types(&self) -> usize {
        self.confusion_matrix.len()
    }
}

/// Analysis of one participant, or of an aggregate of participants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneticAnalysisResult {
    pub person_name: String,
    /// Strictly ascending
    pub rsb_levels: Vec<RsbLevel>,
    /// Parallel to `rsb_levels`
    pub phonetic_accuracy_by_rsb: Vec<f64>,
    pub total_analysis: PhonemeAnalysis,
    #[serde(with = "rsb_keyed")]
    pub analysis_by_rsb: BTreeMap<RsbLevel, PhonemeAnalysis>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(target: Option<Phoneme>, position: usize, word_length: usize) -> PhonemeError {
        PhonemeError {
            target,
            response: None,
            position,
            word_target: "mot".to_string(),
            word_response: "mo".to_string(),
            rsb: RsbLevel::new(-3.0),
            error_type: ErrorType::Deletion,
            word_length,
        }
    }

    #[test]
    fn test_rsb_level_ordering() {
        let mut levels = vec![RsbLevel::new(0.0), RsbLevel::new(-6.0), RsbLevel::new(-2.5)];
        levels.sort();
        assert_eq!(levels, vec![RsbLevel::new(-6.0), RsbLevel::new(-2.5), RsbLevel::new(0.0)]);
        assert_eq!(RsbLevel::new(-0.0), RsbLevel::new(0.0));
    }

    #[test]
    fn test_rsb_level_display() {
        assert_eq!(RsbLevel::new(-6.0).to_string(), "-6");
        assert_eq!(RsbLevel::new(-2.5).to_string(), "-2.5");
        assert_eq!(RsbLevel::new(-0.0).to_string(), "0");
    }

    #[test]
    fn test_rsb_keyed_map_round_trip() {
        let mut map = BTreeMap::new();
        map.insert(RsbLevel::new(-6.0), 1usize);
        map.insert(RsbLevel::new(2.5), 2usize);

        #[derive(Serialize, Deserialize)]
        struct Wrapper {
            #[serde(with = "rsb_keyed")]
            map: BTreeMap<RsbLevel, usize>,
        }

        let json = serde_json::to_string(&Wrapper { map: map.clone() }).unwrap();
        assert_eq!(json, r#"{"map":{"-6":1,"2.5":2}}"#);

        let back: Wrapper = serde_json::from_str(&json).unwrap();
        assert_eq!(back.map, map);
    }

    #[test]
    fn test_word_test_from_dashboard_json() {
        let json = r#"{
            "file": "participant_01.csv",
            "wordTests": [
                {"target": "pain", "response": "bain", "isCorrect": false, "rsb": -6, "duration": 900}
            ],
            "rsbPoints": [],
            "percentages": {}
        }"#;
        let data: RsbData = serde_json::from_str(json).unwrap();
        assert_eq!(data.file, "participant_01.csv");
        assert_eq!(data.word_tests.len(), 1);
        assert_eq!(data.word_tests[0].rsb, RsbLevel::new(-6.0));
        assert!(!data.word_tests[0].is_correct);
    }

    #[test]
    fn test_position_classification() {
        assert_eq!(WordPosition::classify(0, 3), WordPosition::Debut);
        assert_eq!(WordPosition::classify(1, 3), WordPosition::Milieu);
        assert_eq!(WordPosition::classify(2, 3), WordPosition::Fin);
        assert_eq!(WordPosition::classify(1, 2), WordPosition::Milieu);
        assert_eq!(WordPosition::classify(3, 2), WordPosition::Fin);
        assert_eq!(WordPosition::classify(0, 0), WordPosition::Milieu);
    }

    #[test]
    fn test_category_buckets_are_non_exclusive() {
        let errors = vec![
            error(Some(Phoneme::M), 0, 2),
            error(Some(Phoneme::ONasal), 1, 2),
            error(Some(Phoneme::P), 0, 1),
            error(None, 1, 1),
        ];
        let buckets = CategoryBuckets::from_errors(&errors);

        assert_eq!(buckets.consonants.len(), 2);
        assert_eq!(buckets.vowels.len(), 1);
        assert_eq!(buckets.nasals.len(), 1);
        assert_eq!(buckets.nasals[0].target, Some(Phoneme::M));
        assert_eq!(buckets.occlusives.len(), 1);
        assert!(buckets.get(ErrorCategory::Fricatives).is_empty());
    }

    #[test]
    fn test_position_buckets_partition() {
        let errors = vec![error(Some(Phoneme::P), 0, 3), error(Some(Phoneme::A), 2, 3)];
        let buckets = PositionBuckets::from_errors(&errors);
        let total: usize = WordPosition::ALL.iter().map(|p| buckets.get(*p).len()).sum();
        assert_eq!(total, errors.len());
        assert_eq!(buckets.fin.len(), 1);
    }

    #[test]
    fn test_error_serializes_camel_case() {
        let json = serde_json::to_value(error(Some(Phoneme::T), 0, 3)).unwrap();
        assert_eq!(json["target"], "t");
        assert_eq!(json["response"], serde_json::Value::Null);
        assert_eq!(json["wordTarget"], "mot");
        assert_eq!(json["errorType"], "deletion");
        assert_eq!(json["rsb"], -3.0);
    }
}
