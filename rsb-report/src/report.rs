//! Text and JSON rendering of phonetic reports

use chrono::{DateTime, Utc};
use serde::Serialize;

use rsb_phonetics::{
    explanation_keys, format_phonemes, normalize_word, phonetic_explanation, CohortSummary,
    ErrorCategory, Phoneme, PhonemeAnalysis, PhoneticAnalysisResult, PhoneticComparison, Transcriber,
    WordAnalysis, WordPosition,
};

/// JSON report wrapper
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub generated_at: DateTime<Utc>,
    pub tool_version: &'static str,
    #[serde(flatten)]
    pub body: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(body: T) -> Self {
        Self {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION"),
            body,
        }
    }
}

/// Body of an `analyze` JSON report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeReport {
    pub participants: Vec<PhoneticAnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate: Option<PhoneticAnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cohort: Option<CohortSummary>,
}

/// Body of a `compare` JSON report
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareReport {
    pub person1: String,
    pub person2: String,
    pub comparison: PhoneticComparison,
}

pub fn render_transcriptions(transcriber: &Transcriber, words: &[String]) -> String {
    words
        .iter()
        .map(|word| {
            let source = if transcriber.lookup(word).is_some() {
                "dictionary"
            } else {
                "rules"
            };
            format!(
                "{:<16} {:<16} {}  ({})",
                word,
                normalize_word(word),
                format_phonemes(&transcriber.transcribe(word)),
                source
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_alignment(detail: &WordAnalysis) -> String {
    let mut lines = vec![
        format!(
            "{} {}  →  {} {}",
            detail.word_target,
            format_phonemes(&detail.target_phonemes),
            detail.word_response,
            format_phonemes(&detail.response_phonemes)
        ),
        format!("{:>4}  {:<8} {:<8} {}", "pos", "target", "response", "type"),
    ];

    let symbol = |p: Option<Phoneme>| p.map_or("-", |p| p.symbol());
    for step in &detail.alignment {
        lines.push(format!(
            "{:>4}  {:<8} {:<8} {:?}",
            step.position,
            symbol(step.target),
            symbol(step.response),
            step.kind
        ));
    }

    lines.push(format!(
        "Distance: {}   Phonetic accuracy: {:.1}%",
        detail.distance, detail.phonetic_accuracy
    ));
    lines.join("\n")
}

fn render_totals(analysis: &PhonemeAnalysis, lines: &mut Vec<String>) {
    let counts = analysis.error_type_counts();
    lines.push(format!(
        "  Phonemes: {} ({} correct)",
        analysis.total_phonemes, analysis.correct_phonemes
    ));
    lines.push(format!("  Phonetic accuracy: {:.1}%", analysis.phonetic_accuracy));
    lines.push(format!(
        "  Mean phonetic distance: {:.2}",
        analysis.phonetic_distance_avg
    ));
    lines.push(format!(
        "  Errors: {} (substitutions {}, insertions {}, deletions {}), {} confusion type(s)",
        analysis.errors.len(),
        counts.substitutions,
        counts.insertions,
        counts.deletions,
        analysis.confusion_types()
    ));
}

pub fn render_analysis(result: &PhoneticAnalysisResult, top: usize) -> String {
    let mut lines = vec![format!("👤 {}", result.person_name)];
    let total = &result.total_analysis;
    render_totals(total, &mut lines);

    if !result.rsb_levels.is_empty() {
        lines.push("  By RSB:".to_string());
        for (level, accuracy) in result.rsb_levels.iter().zip(&result.phonetic_accuracy_by_rsb) {
            let phonemes = result
                .analysis_by_rsb
                .get(level)
                .map_or(0, |a| a.total_phonemes);
            lines.push(format!(
                "    {:>6} dB  {:>5.1}%  ({} phonemes)",
                level.to_string(),
                accuracy,
                phonemes
            ));
        }
    }

    lines.push("  By category:".to_string());
    for category in ErrorCategory::ALL {
        lines.push(format!(
            "    {:<11} {}",
            category.name(),
            total.errors_by_category.get(category).len()
        ));
    }

    lines.push("  By position:".to_string());
    for position in WordPosition::ALL {
        lines.push(format!(
            "    {:<11} {}",
            position.name(),
            total.errors_by_position.get(position).len()
        ));
    }

    let confusions = total.top_confusions(top);
    if !confusions.is_empty() {
        lines.push("  Top confusions:".to_string());
        for row in confusions {
            lines.push(format!(
                "    {} → {}  {:>3}  ({:.1}%, mean RSB {:.1} dB)",
                row.target_phoneme, row.response_phoneme, row.count, row.percentage, row.avg_rsb
            ));
        }
    }

    lines.join("\n")
}

pub fn render_cohort(summary: &CohortSummary) -> String {
    [
        format!("📈 Cohort ({} participants)", summary.participants),
        format!(
            "  Accuracy: mean {:.1}%, median {:.1}%, sd {:.1}",
            summary.mean_accuracy, summary.median_accuracy, summary.accuracy_std_dev
        ),
        format!(
            "  Best {:.1}%, worst {:.1}%",
            summary.best_accuracy, summary.worst_accuracy
        ),
        format!("  Mean of participant distances: {:.2}", summary.mean_distance),
        format!("  Phonemes analysed: {}", summary.total_phonemes),
    ]
    .join("\n")
}

pub fn render_comparison(person1: &str, person2: &str, comparison: &PhoneticComparison) -> String {
    let mut lines = vec![format!("⚖️  {} vs {}", person1, person2)];

    lines.push("  Accuracy difference by RSB:".to_string());
    for (level, diff) in comparison.rsb_levels.iter().zip(&comparison.accuracy_difference) {
        lines.push(format!("    {:>6} dB  {:+.1}", level.to_string(), diff));
    }

    lines.push("  Category errors:".to_string());
    for row in &comparison.category_differences {
        lines.push(format!(
            "    {:<11} {:>4} {:>4}  {:+}",
            row.category.name(),
            row.person1_errors,
            row.person2_errors,
            row.difference
        ));
    }

    if !comparison.confusion_differences.is_empty() {
        lines.push("  Confusions by target phoneme:".to_string());
        for row in &comparison.confusion_differences {
            lines.push(format!(
                "    {:<4} {:>4} {:>4}  {:+}",
                row.phoneme.symbol(),
                row.person1_count,
                row.person2_count,
                row.difference
            ));
        }
    }

    lines.join("\n")
}

pub fn render_explanation(key: &str) -> String {
    let explanation = phonetic_explanation(key);
    format!("{}\n\n{}", explanation.title, explanation.explanation)
}

pub fn render_explanation_keys() -> String {
    explanation_keys()
        .map(|key| format!("{:<20} {}", key, phonetic_explanation(key).title))
        .collect::<Vec<_>>()
        .join("\n")
}
