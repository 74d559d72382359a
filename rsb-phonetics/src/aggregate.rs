//! Population-level aggregation of participant analyses
//!
//! Counts are pooled, not averaged: a participant with twice the phonemes
//! weighs twice as much in every accuracy and distance figure.

use std::collections::{BTreeMap, BTreeSet};
use tracing::info;

use crate::analysis::build_analysis;
use crate::error::{PhoneticError, Result};
use crate::types::{PhonemeAnalysis, PhonemeError, PhoneticAnalysisResult, RsbLevel};

/// Display label of an aggregate over `count` participants
pub fn aggregate_label(count: usize) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!("📊 Analyse Agrégée ({} participant{})", count, plural)
}

/// Pooled counts of several scopes
#[derive(Debug, Default)]
struct Pool {
    total_phonemes: usize,
    correct_phonemes: usize,
    weighted_distance: f64,
    errors: Vec<PhonemeError>,
}

impl Pool {
    fn add(&mut self, analysis: &PhonemeAnalysis) {
        self.total_phonemes += analysis.total_phonemes;
        self.correct_phonemes += analysis.correct_phonemes;
        self.weighted_distance += analysis.phonetic_distance_avg * analysis.total_phonemes as f64;
        self.errors.extend(analysis.errors.iter().cloned());
    }

    fn into_analysis(self) -> PhonemeAnalysis {
        let distance_avg = if self.total_phonemes == 0 {
            0.0
        } else {
            self.weighted_distance / self.total_phonemes as f64
        };
        build_analysis(
            self.errors,
            self.total_phonemes,
            self.correct_phonemes,
            distance_avg,
        )
    }
}

/// Combine several participant analyses into one population analysis
///
/// A single input is returned unchanged; an empty slice is an error.
pub fn create_aggregate_phonetic_analysis(
    results: &[PhoneticAnalysisResult],
) -> Result<PhoneticAnalysisResult> {
    match results {
        [] => return Err(PhoneticError::EmptyAggregation),
        [single] => return Ok(single.clone()),
        _ => {}
    }

    let levels: BTreeSet<RsbLevel> = results
        .iter()
        .flat_map(|r| r.rsb_levels.iter().copied())
        .collect();

    let mut total = Pool::default();
    for result in results {
        total.add(&result.total_analysis);
    }

    let mut analysis_by_rsb: BTreeMap<RsbLevel, PhonemeAnalysis> = BTreeMap::new();
    for level in &levels {
        let mut pool = Pool::default();
        for analysis in results.iter().filter_map(|r| r.analysis_by_rsb.get(level)) {
            pool.add(analysis);
        }
        analysis_by_rsb.insert(*level, pool.into_analysis());
    }

    let rsb_levels: Vec<RsbLevel> = analysis_by_rsb.keys().copied().collect();
    let phonetic_accuracy_by_rsb: Vec<f64> = analysis_by_rsb
        .values()
        .map(|analysis| analysis.phonetic_accuracy)
        .collect();

    let total_analysis = total.into_analysis();

    info!(
        "📊 Aggregated {} participants: {} phonemes, {:.1}% accuracy",
        results.len(),
        total_analysis.total_phonemes,
        total_analysis.phonetic_accuracy
    );

    Ok(PhoneticAnalysisResult {
        person_name: aggregate_label(results.len()),
        rsb_levels,
        phonetic_accuracy_by_rsb,
        total_analysis,
        analysis_by_rsb,
    })
}
