//! Descriptive statistics over a cohort of participants

use serde::{Deserialize, Serialize};

use crate::types::PhoneticAnalysisResult;

/// Spread of overall phonetic accuracy across participants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CohortSummary {
    pub participants: usize,
    pub mean_accuracy: f64,
    pub median_accuracy: f64,
    pub best_accuracy: f64,
    pub worst_accuracy: f64,
    /// Sample standard deviation, 0 below two participants
    pub accuracy_std_dev: f64,
    /// Unweighted mean of each participant's average distance, unlike the
    /// phoneme-weighted distance of an aggregate
    pub mean_distance: f64,
    pub total_phonemes: usize,
}

/// Summarize participant analyses; None for an empty cohort
pub fn summarize_cohort(results: &[PhoneticAnalysisResult]) -> Option<CohortSummary> {
    if results.is_empty() {
        return None;
    }

    let accuracies: Vec<f64> = results
        .iter()
        .map(|r| r.total_analysis.phonetic_accuracy)
        .collect();
    let distances: Vec<f64> = results
        .iter()
        .map(|r| r.total_analysis.phonetic_distance_avg)
        .collect();

    let best_accuracy = accuracies.iter().copied().fold(f64::MIN, f64::max);
    let worst_accuracy = accuracies.iter().copied().fold(f64::MAX, f64::min);

    let mean_accuracy = statistical::mean(&accuracies);
    let accuracy_std_dev = if accuracies.len() < 2 {
        0.0
    } else {
        statistical::standard_deviation(&accuracies, Some(mean_accuracy))
    };

    Some(CohortSummary {
        participants: results.len(),
        mean_accuracy,
        median_accuracy: statistical::median(&accuracies),
        best_accuracy,
        worst_accuracy,
        accuracy_std_dev,
        mean_distance: statistical::mean(&distances),
        total_phonemes: results.iter().map(|r| r.total_analysis.total_phonemes).sum(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_person_phonetics;
    use crate::types::{RsbData, WordTest};
    use approx::assert_relative_eq;

    fn person(name: &str, tests: &[(&str, &str)]) -> PhoneticAnalysisResult {
        analyze_person_phonetics(&RsbData {
            file: name.to_string(),
            word_tests: tests
                .iter()
                .map(|(target, response)| WordTest::new(target, response, -3.0))
                .collect(),
        })
    }

    #[test]
    fn test_empty_cohort() {
        assert!(summarize_cohort(&[]).is_none());
    }

    #[test]
    fn test_single_participant() {
        let summary = summarize_cohort(&[person("alice", &[("pain", "bain")])]).unwrap();
        assert_eq!(summary.participants, 1);
        assert_relative_eq!(summary.mean_accuracy, 50.0);
        assert_relative_eq!(summary.median_accuracy, 50.0);
        assert_eq!(summary.accuracy_std_dev, 0.0);
        assert_eq!(summary.total_phonemes, 2);
    }

    #[test]
    fn test_two_participants() {
        let cohort = [
            person("alice", &[("pain", "bain")]),
            person("bob", &[("pain", "pain")]),
        ];
        let summary = summarize_cohort(&cohort).unwrap();

        assert_relative_eq!(summary.mean_accuracy, 75.0);
        assert_relative_eq!(summary.best_accuracy, 100.0);
        assert_relative_eq!(summary.worst_accuracy, 50.0);
        assert_relative_eq!(summary.accuracy_std_dev, 1250.0_f64.sqrt(), epsilon = 1e-9);
        assert_relative_eq!(summary.mean_distance, 0.5);
        assert_eq!(summary.total_phonemes, 4);
    }
}
