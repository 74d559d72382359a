//! End-to-end scenarios over realistic RSB sessions
//!
//! Sessions are built from the dashboard's JSON shape so the serde layer is
//! exercised along with the analysis pipeline.

use approx::assert_relative_eq;
use rsb_phonetics::{
    analyze_person_phonetics, analyze_word_phonetics, calculate_phonetic_distance,
    compare_phonetic_analysis, create_aggregate_phonetic_analysis, normalize_word,
    summarize_cohort, transcribe_to_phonemes, ErrorCategory, ErrorType, Phoneme,
    PhoneticAnalysisResult, RsbData, RsbLevel, WordPosition, WordTest,
};

fn session_json(file: &str, trials: &[(&str, &str, f64)]) -> String {
    let tests: Vec<serde_json::Value> = trials
        .iter()
        .map(|(target, response, rsb)| {
            serde_json::json!({
                "target": target,
                "response": response,
                "isCorrect": target == response,
                "rsb": rsb,
                "duration": 850
            })
        })
        .collect();

    serde_json::json!({ "file": file, "wordTests": tests, "rsbPoints": [] }).to_string()
}

fn analyze(file: &str, trials: &[(&str, &str, f64)]) -> PhoneticAnalysisResult {
    let data: RsbData = serde_json::from_str(&session_json(file, trials)).unwrap();
    analyze_person_phonetics(&data)
}

const ALICE: &[(&str, &str, f64)] = &[
    ("pain", "bain", -9.0),
    ("chat", "sa", -9.0),
    ("train", "rain", -6.0),
    ("maison", "saison", -6.0),
    ("poisson", "poison", -3.0),
    ("bateau", "bateau", -3.0),
    ("le chat", "chat", 0.0),
    ("pain", "pain", 0.0),
];

const BOB: &[(&str, &str, f64)] = &[
    ("pain", "pain", -9.0),
    ("chat", "chats", -9.0),
    ("train", "train", -6.0),
    ("maison", "maison", -3.0),
    ("bateau", "gâteau", -3.0),
];

#[test]
fn test_normalization_feeds_transcription() {
    assert_eq!(normalize_word("le café"), normalize_word("cafe"));
    assert_eq!(transcribe_to_phonemes("Le Chat !"), transcribe_to_phonemes("chat"));
    assert_eq!(transcribe_to_phonemes("un pain"), vec![Phoneme::P, Phoneme::ENasal]);
}

#[test]
fn test_distance_properties() {
    assert_eq!(calculate_phonetic_distance("chat", "chat"), 0);
    assert_eq!(calculate_phonetic_distance("chat", "sat"), 1);
    for (a, b) in [("pain", "train"), ("maison", "saison"), ("bateau", "gâteau")] {
        assert_eq!(
            calculate_phonetic_distance(a, b),
            calculate_phonetic_distance(b, a)
        );
    }
}

#[test]
fn test_pain_bain_scenario() {
    let test: WordTest = serde_json::from_str(
        r#"{"target":"pain","response":"bain","isCorrect":false,"rsb":-6,"duration":900}"#,
    )
    .unwrap();
    let errors = analyze_word_phonetics(&test);

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].target, Some(Phoneme::P));
    assert_eq!(errors[0].response, Some(Phoneme::B));
    assert_eq!(errors[0].error_type, ErrorType::Substitution);
    assert_eq!(errors[0].position, 0);
    assert_eq!(errors[0].word_position(), WordPosition::Debut);
}

#[test]
fn test_person_invariants() {
    let result = analyze("alice.json", ALICE);
    let total = &result.total_analysis;

    assert!(total.correct_phonemes <= total.total_phonemes);
    assert_relative_eq!(
        total.phonetic_accuracy,
        100.0 * total.correct_phonemes as f64 / total.total_phonemes as f64
    );

    // Levels strictly ascending, accuracies parallel
    assert!(result.rsb_levels.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(result.rsb_levels.len(), result.phonetic_accuracy_by_rsb.len());
    for (level, accuracy) in result.rsb_levels.iter().zip(&result.phonetic_accuracy_by_rsb) {
        assert_eq!(result.analysis_by_rsb[level].phonetic_accuracy, *accuracy);
    }

    // Buckets only reference errors of the full list
    for category in ErrorCategory::ALL {
        for error in total.errors_by_category.get(category) {
            assert!(total.errors.contains(error));
        }
    }
    let bucketed: usize = WordPosition::ALL
        .iter()
        .map(|p| total.errors_by_position.get(*p).len())
        .sum();
    assert_eq!(bucketed, total.errors.len());

    // Per-level errors add up to the session's
    let per_level: usize = result.analysis_by_rsb.values().map(|a| a.errors.len()).sum();
    assert_eq!(per_level, total.errors.len());
}

#[test]
fn test_noise_degrades_accuracy() {
    let result = analyze("alice.json", ALICE);
    let hardest = result.phonetic_accuracy_by_rsb[0];
    let easiest = *result.phonetic_accuracy_by_rsb.last().unwrap();

    assert_eq!(result.rsb_levels[0], RsbLevel::new(-9.0));
    assert!(hardest < easiest);
    assert_relative_eq!(easiest, 100.0);
}

#[test]
fn test_aggregate_then_compare() {
    let alice = analyze("alice.json", ALICE);
    let bob = analyze("bob.json", BOB);

    let aggregate = create_aggregate_phonetic_analysis(&[alice.clone(), bob.clone()]).unwrap();
    assert_eq!(
        aggregate.total_analysis.total_phonemes,
        alice.total_analysis.total_phonemes + bob.total_analysis.total_phonemes
    );
    assert_eq!(aggregate.rsb_levels.len(), 4);

    let comparison = compare_phonetic_analysis(&alice, &aggregate);
    assert_eq!(comparison.accuracy_difference.len(), alice.rsb_levels.len());
    assert_eq!(comparison.category_differences.len(), 5);

    // Alice's confusions are a subset of the aggregate's
    for row in &comparison.confusion_differences {
        assert!(row.person2_count >= row.person1_count);
    }
}

#[test]
fn test_cohort_summary() {
    let cohort = [analyze("alice.json", ALICE), analyze("bob.json", BOB)];
    let summary = summarize_cohort(&cohort).unwrap();

    assert_eq!(summary.participants, 2);
    assert!(summary.worst_accuracy <= summary.mean_accuracy);
    assert!(summary.mean_accuracy <= summary.best_accuracy);
    assert_eq!(
        summary.total_phonemes,
        cohort.iter().map(|r| r.total_analysis.total_phonemes).sum::<usize>()
    );
}

#[test]
fn test_result_serializes_for_the_dashboard() {
    let result = analyze("alice.json", ALICE);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["personName"], "alice.json");
    assert!(json["analysisByRsb"]["-9"].is_object());
    assert!(json["totalAnalysis"]["errorsByCategory"]["voyelles"].is_array());
    assert!(json["totalAnalysis"]["errorsByPosition"]["fin"].is_array());

    let back: PhoneticAnalysisResult = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}
