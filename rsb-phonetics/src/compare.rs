//! Side-by-side comparison of two phonetic analyses
//!
//! The comparison is anchored on the first analysis: accuracy differences
//! pair the two per-level accuracy lists by index along the first analysis's
//! RSB levels, and an index the second list lacks counts as 0%.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::phonemes::{ErrorCategory, Phoneme};
use crate::types::{PhonemeAnalysis, PhoneticAnalysisResult, RsbLevel};

/// Confusion counts of one target phoneme in both analyses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfusionDifference {
    pub phoneme: Phoneme,
    pub person1_count: usize,
    pub person2_count: usize,
    pub difference: i64,
}

/// Raw error counts of one category in both analyses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDifference {
    pub category: ErrorCategory,
    pub person1_errors: usize,
    pub person2_errors: usize,
    pub difference: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneticComparison {
    /// Levels of the first analysis, parallel to `accuracy_difference`
    pub rsb_levels: Vec<RsbLevel>,
    pub accuracy_difference: Vec<f64>,
    pub confusion_differences: Vec<ConfusionDifference>,
    pub category_differences: Vec<CategoryDifference>,
}

fn signed_difference(a: usize, b: usize) -> i64 {
    a as i64 - b as i64
}

/// Substitution counts per target phoneme, in first-seen order
fn confusion_counts(analysis: &PhonemeAnalysis) -> Vec<(Phoneme, usize)> {
    let mut index: HashMap<Phoneme, usize> = HashMap::new();
    let mut counts: Vec<(Phoneme, usize)> = Vec::new();

    for row in &analysis.confusion_matrix {
        let slot = *index.entry(row.target_phoneme).or_insert_with(|| {
            counts.push((row.target_phoneme, 0));
            counts.len() - 1
        });
        counts[slot].1 += row.count;
    }

    counts
}

/// Compare two participants, or a participant with an aggregate
pub fn compare_phonetic_analysis(
    analysis1: &PhoneticAnalysisResult,
    analysis2: &PhoneticAnalysisResult,
) -> PhoneticComparison {
    let accuracy_difference: Vec<f64> = analysis1
        .phonetic_accuracy_by_rsb
        .iter()
        .enumerate()
        .map(|(i, acc1)| acc1 - analysis2.phonetic_accuracy_by_rsb.get(i).copied().unwrap_or(0.0))
        .collect();

    let counts1 = confusion_counts(&analysis1.total_analysis);
    let counts2 = confusion_counts(&analysis2.total_analysis);
    let lookup2: HashMap<Phoneme, usize> = counts2.iter().copied().collect();
    let lookup1: HashMap<Phoneme, usize> = counts1.iter().copied().collect();

    let mut confusion_differences: Vec<ConfusionDifference> = counts1
        .iter()
        .map(|&(phoneme, person1_count)| {
            let person2_count = lookup2.get(&phoneme).copied().unwrap_or(0);
            ConfusionDifference {
                phoneme,
                person1_count,
                person2_count,
                difference: signed_difference(person1_count, person2_count),
            }
        })
        .collect();

    confusion_differences.extend(
        counts2
            .iter()
            .filter(|(phoneme, _)| !lookup1.contains_key(phoneme))
            .map(|&(phoneme, person2_count)| ConfusionDifference {
                phoneme,
                person1_count: 0,
                person2_count,
                difference: signed_difference(0, person2_count),
            }),
    );

    let category_differences: Vec<CategoryDifference> = ErrorCategory::ALL
        .iter()
        .map(|&category| {
            let person1_errors = analysis1.total_analysis.errors_by_category.get(category).len();
            let person2_errors = analysis2.total_analysis.errors_by_category.get(category).len();
            CategoryDifference {
                category,
                person1_errors,
                person2_errors,
                difference: signed_difference(person1_errors, person2_errors),
            }
        })
        .collect();

    PhoneticComparison {
        rsb_levels: analysis1.rsb_levels.clone(),
        accuracy_difference,
        confusion_differences,
        category_differences,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze_person_phonetics;
    use crate::phonemes::Phoneme::*;
    use crate::types::{RsbData, WordTest};
    use approx::assert_relative_eq;

    fn person(name: &str, tests: &[(&str, &str, f64)]) -> PhoneticAnalysisResult {
        analyze_person_phonetics(&RsbData {
            file: name.to_string(),
            word_tests: tests
                .iter()
                .map(|(target, response, rsb)| WordTest::new(target, response, *rsb))
                .collect(),
        })
    }

    #[test]
    fn test_self_comparison_is_all_zero() {
        let a = person("alice", &[("pain", "bain", -6.0), ("chat", "sa", 0.0)]);
        let comparison = compare_phonetic_analysis(&a, &a);

        assert!(comparison.accuracy_difference.iter().all(|d| *d == 0.0));
        assert!(comparison.confusion_differences.iter().all(|d| d.difference == 0));
        assert!(comparison.category_differences.iter().all(|d| d.difference == 0));
    }

    #[test]
    fn test_accuracy_difference_anchored_on_first() {
        let a = person("alice", &[("pain", "bain", -6.0), ("chat", "chat", 0.0)]);
        let b = person("bob", &[("pain", "pain", -6.0)]);
        let comparison = compare_phonetic_analysis(&a, &b);

        assert_eq!(comparison.rsb_levels.len(), 2);
        assert_relative_eq!(comparison.accuracy_difference[0], -50.0);
        // Bob has no second level: compared against 0
        assert_relative_eq!(comparison.accuracy_difference[1], 100.0);
    }

    #[test]
    fn test_antisymmetry_with_matching_levels() {
        let a = person("alice", &[("pain", "bain", -6.0), ("train", "pain", 0.0)]);
        let b = person("bob", &[("chat", "sa", -6.0), ("pain", "pain", 0.0)]);

        let ab = compare_phonetic_analysis(&a, &b);
        let ba = compare_phonetic_analysis(&b, &a);
        for (x, y) in ab.accuracy_difference.iter().zip(&ba.accuracy_difference) {
            assert_relative_eq!(*x, -*y);
        }
        for (x, y) in ab.category_differences.iter().zip(&ba.category_differences) {
            assert_eq!(x.difference, -y.difference);
        }
    }

    #[test]
    fn test_confusion_keys_union() {
        let a = person("alice", &[("pain", "bain", -6.0), ("pain", "bain", -6.0)]);
        let b = person("bob", &[("chat", "sa", -6.0)]);
        let comparison = compare_phonetic_analysis(&a, &b);

        let rows = &comparison.confusion_differences;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].phoneme, P);
        assert_eq!((rows[0].person1_count, rows[0].person2_count, rows[0].difference), (2, 0, 2));
        assert_eq!(rows[1].phoneme, Sh);
        assert_eq!(rows[1].difference, -1);
    }

    #[test]
    fn test_counts_summed_across_responses() {
        // p confused with b once and with t once
        let a = person("alice", &[("pain", "bain", 0.0), ("pain", "teint", 0.0)]);
        let comparison = compare_phonetic_analysis(&a, &a);
        assert_eq!(comparison.confusion_differences.len(), 1);
        assert_eq!(comparison.confusion_differences[0].person1_count, 2);
    }

    #[test]
    fn test_all_categories_present() {
        let a = person("alice", &[]);
        let comparison = compare_phonetic_analysis(&a, &a);
        let categories: Vec<ErrorCategory> = comparison
            .category_differences
            .iter()
            .map(|d| d.category)
            .collect();
        assert_eq!(categories, ErrorCategory::ALL.to_vec());
    }
}
