//! Transcription and alignment throughput
//!
//! A participant session is ~100 trials; the dashboard re-runs the full
//! analysis on every selection change, so per-session latency matters more
//! than single-word speed.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rsb_phonetics::{
    align_phonemes, analyze_person_phonetics, transcribe_to_phonemes, RsbData, WordTest,
};

const WORDS: &[(&str, &str)] = &[
    ("pain", "bain"),
    ("chat", "sa"),
    ("maison", "saison"),
    ("poisson", "poison"),
    ("train", "rain"),
    ("bateau", "gâteau"),
    ("grenouille", "quenouille"),
    ("papillon", "pavillon"),
];

fn session(trials: usize) -> RsbData {
    let rsb_levels = [-9.0, -6.0, -3.0, 0.0];
    RsbData {
        file: "bench".to_string(),
        word_tests: (0..trials)
            .map(|i| {
                let (target, response) = WORDS[i % WORDS.len()];
                WordTest::new(target, response, rsb_levels[i % rsb_levels.len()])
            })
            .collect(),
    }
}

fn bench_transcription(c: &mut Criterion) {
    c.bench_function("transcribe_dictionary_hit", |b| {
        b.iter(|| transcribe_to_phonemes(black_box("maison")))
    });
    c.bench_function("transcribe_rule_fallback", |b| {
        b.iter(|| transcribe_to_phonemes(black_box("quenouillette")))
    });
}

fn bench_alignment(c: &mut Criterion) {
    let target = transcribe_to_phonemes("grenouille");
    let response = transcribe_to_phonemes("quenouille");

    c.bench_function("align_word_pair", |b| {
        b.iter(|| align_phonemes(black_box(&target), black_box(&response)))
    });
}

fn bench_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze_person");
    for trials in [25, 100, 400] {
        let data = session(trials);
        group.bench_with_input(BenchmarkId::from_parameter(trials), &data, |b, data| {
            b.iter(|| analyze_person_phonetics(black_box(data)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transcription, bench_alignment, bench_session);
criterion_main!(benches);
