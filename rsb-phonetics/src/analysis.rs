//! Word- and person-level phonetic error analysis

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::{debug, warn};

use crate::alignment::{align_phonemes, levenshtein_distance, AlignmentKind, AlignmentStep};
use crate::phonemes::Phoneme;
use crate::transcription::Transcriber;
use crate::types::{
    CategoryBuckets, ErrorType, PhonemeAnalysis, PhonemeConfusion, PhonemeError,
    PhoneticAnalysisResult, PositionBuckets, RsbData, RsbLevel, WordTest,
};

/// `100 * part / whole`, 0 when `whole` is 0
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

pub(crate) fn mean(sum: f64, count: usize) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Everything computed for one trial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordAnalysis {
    pub word_target: String,
    pub word_response: String,
    pub rsb: RsbLevel,
    pub is_correct: bool,
    pub target_phonemes: Vec<Phoneme>,
    pub response_phonemes: Vec<Phoneme>,
    pub alignment: Vec<AlignmentStep>,
    /// Phoneme-level edit distance
    pub distance: usize,
    /// Matches over the longer of the two sequences, in percent
    pub phonetic_accuracy: f64,
    pub errors: Vec<PhonemeError>,
}

impl WordAnalysis {
    /// Correctly reproduced target phonemes, never above the target length
    pub fn correct_phonemes(&self) -> usize {
        self.target_phonemes.len().saturating_sub(self.errors.len())
    }
}

/// Running totals for one scope (whole session or a single RSB level)
#[derive(Debug, Default)]
struct Tally {
    total_phonemes: usize,
    correct_phonemes: usize,
    distance_sum: usize,
    words: usize,
    errors: Vec<PhonemeError>,
}

impl Tally {
    fn add(&mut self, word: &WordAnalysis) {
        self.total_phonemes += word.target_phonemes.len();
        self.correct_phonemes += word.correct_phonemes();
        self.distance_sum += word.distance;
        self.words += 1;
        self.errors.extend(word.errors.iter().cloned());
    }

    fn into_analysis(self) -> PhonemeAnalysis {
        let distance_avg = mean(self.distance_sum as f64, self.words);
        build_analysis(
            self.errors,
            self.total_phonemes,
            self.correct_phonemes,
            distance_avg,
        )
    }
}

/// Confusion matrix from the substitutions of an error list
///
/// Pairs appear in the order their first substitution occurs.
pub(crate) fn confusion_matrix(errors: &[PhonemeError], total_phonemes: usize) -> Vec<PhonemeConfusion> {
    let mut index: HashMap<(Phoneme, Phoneme), usize> = HashMap::new();
    let mut rows: Vec<(Phoneme, Phoneme, usize, f64)> = Vec::new();

    for error in errors {
        if error.error_type != ErrorType::Substitution {
            continue;
        }
        let (Some(target), Some(response)) = (error.target, error.response) else {
            continue;
        };

        let row = *index.entry((target, response)).or_insert_with(|| {
            rows.push((target, response, 0, 0.0));
            rows.len() - 1
        });
        rows[row].2 += 1;
        rows[row].3 += error.rsb.db();
    }

    rows.into_iter()
        .map(|(target, response, count, rsb_sum)| PhonemeConfusion {
            target_phoneme: target,
            response_phoneme: response,
            count,
            percentage: percentage(count, total_phonemes),
            avg_rsb: mean(rsb_sum, count),
        })
        .collect()
}

/// Assemble the statistics bundle of one scope from its errors and counts
pub(crate) fn build_analysis(
    errors: Vec<PhonemeError>,
    total_phonemes: usize,
    correct_phonemes: usize,
    phonetic_distance_avg: f64,
) -> PhonemeAnalysis {
    let mut errors_by_rsb: BTreeMap<RsbLevel, Vec<PhonemeError>> = BTreeMap::new();
    for error in &errors {
        errors_by_rsb.entry(error.rsb).or_default().push(error.clone());
    }

    PhonemeAnalysis {
        total_phonemes,
        correct_phonemes,
        confusion_matrix: confusion_matrix(&errors, total_phonemes),
        errors_by_rsb,
        errors_by_category: CategoryBuckets::from_errors(&errors),
        errors_by_position: PositionBuckets::from_errors(&errors),
        phonetic_accuracy: percentage(correct_phonemes, total_phonemes),
        phonetic_distance_avg,
        errors,
    }
}

fn error_from_step(step: &AlignmentStep, test: &WordTest, word_length: usize) -> Option<PhonemeError> {
    let error_type = match step.kind {
        AlignmentKind::Match => return None,
        AlignmentKind::Insertion => ErrorType::Insertion,
        AlignmentKind::Deletion => ErrorType::Deletion,
        AlignmentKind::Substitution => ErrorType::Substitution,
    };

    Some(PhonemeError {
        target: step.target,
        response: step.response,
        position: step.position,
        word_target: test.target.clone(),
        word_response: test.response.clone(),
        rsb: test.rsb,
        error_type,
        word_length,
    })
}

/// Runs the transcribe → align → classify pipeline with a given lexicon
#[derive(Debug, Clone, Copy)]
pub struct PhoneticAnalyzer<'a> {
    transcriber: &'a Transcriber,
}

impl Default for PhoneticAnalyzer<'static> {
    fn default() -> Self {
        Self::new(Transcriber::french())
    }
}

impl<'a> PhoneticAnalyzer<'a> {
    pub fn new(transcriber: &'a Transcriber) -> Self {
        Self { transcriber }
    }

    pub fn transcriber(&self) -> &'a Transcriber {
        self.transcriber
    }

    /// Phoneme errors of one trial
    ///
    /// Independent of `is_correct`: a wrong word can be phonetically perfect
    /// (homophones) and the reverse.
    pub fn analyze_word(&self, test: &WordTest) -> Vec<PhonemeError> {
        self.analyze_word_detail(test).errors
    }

    pub fn analyze_word_detail(&self, test: &WordTest) -> WordAnalysis {
        let target_phonemes = self.transcriber.transcribe(&test.target);
        let response_phonemes = self.transcriber.transcribe(&test.response);

        let alignment = align_phonemes(&target_phonemes, &response_phonemes);
        let word_length = target_phonemes.len();

        let errors: Vec<PhonemeError> = alignment
            .iter()
            .filter_map(|step| error_from_step(step, test, word_length))
            .collect();

        let matches = alignment.iter().filter(|s| s.kind.is_match()).count();
        let longest = target_phonemes.len().max(response_phonemes.len());

        WordAnalysis {
            word_target: test.target.clone(),
            word_response: test.response.clone(),
            rsb: test.rsb,
            is_correct: test.is_correct,
            distance: levenshtein_distance(&target_phonemes, &response_phonemes),
            phonetic_accuracy: percentage(matches, longest),
            target_phonemes,
            response_phonemes,
            alignment,
            errors,
        }
    }

    /// Per-trial details of a whole session, in input order
    pub fn analyze_person_detail(&self, data: &RsbData) -> Vec<WordAnalysis> {
        data.word_tests
            .iter()
            .map(|test| self.analyze_word_detail(test))
            .collect()
    }

    /// Full phonetic profile of one participant
    pub fn analyze_person(&self, data: &RsbData) -> PhoneticAnalysisResult {
        if data.word_tests.is_empty() {
            warn!("Participant '{}' has no word tests", data.file);
        }

        let mut total = Tally::default();
        let mut by_rsb: BTreeMap<RsbLevel, Tally> = BTreeMap::new();

        for word in self.analyze_person_detail(data) {
            total.add(&word);
            by_rsb.entry(word.rsb).or_default().add(&word);
        }

        let total_analysis = total.into_analysis();
        let analysis_by_rsb: BTreeMap<RsbLevel, PhonemeAnalysis> = by_rsb
            .into_iter()
            .map(|(level, tally)| (level, tally.into_analysis()))
            .collect();

        let rsb_levels: Vec<RsbLevel> = analysis_by_rsb.keys().copied().collect();
        let phonetic_accuracy_by_rsb: Vec<f64> = analysis_by_rsb
            .values()
            .map(|analysis| analysis.phonetic_accuracy)
            .collect();

        debug!(
            "Analyzed '{}': {} phonemes, {} errors, {:.1}% accuracy over {} RSB level(s)",
            data.file,
            total_analysis.total_phonemes,
            total_analysis.errors.len(),
            total_analysis.phonetic_accuracy,
            rsb_levels.len()
        );

        PhoneticAnalysisResult {
            person_name: data.file.clone(),
            rsb_levels,
            phonetic_accuracy_by_rsb,
            total_analysis,
            analysis_by_rsb,
        }
    }
}

/// Phoneme errors of one trial, with the built-in French lexicon
pub fn analyze_word_phonetics(test: &WordTest) -> Vec<PhonemeError> {
    PhoneticAnalyzer::default().analyze_word(test)
}

/// Phonetic profile of one participant, with the built-in French lexicon
pub fn analyze_person_phonetics(data: &RsbData) -> PhoneticAnalysisResult {
    PhoneticAnalyzer::default().analyze_person(data)
}
