// ===== makhraj/benches/scoring_bench.rs =====
use criterion::{criterion_group, criterion_main, Criterion};
use makhraj::scorer::Scorer;
use std::hint::black_box;

const REFERENCE: &str = "بِسْمِ اللَّهِ الرَّحْمَنِ الرَّحِيمِ. الْحَمْدُ لِلَّهِ رَبِّ الْعَالَمِينَ. \
الرَّحْمَنِ الرَّحِيمِ. مَالِكِ يَوْمِ الدِّينِ. إِيَّاكَ نَعْبُدُ وَإِيَّاكَ نَسْتَعِينُ.";

// A plausible transcript: no diacritics, one dropped word, two
// mispronunciations.
const RECOGNIZED: &str = "بسم الله الرحمن الرحيم الحمد لله رب العالمين الرحمن الرحيم \
ملك يوم الدين اياك نعبد واياك نستعين";

fn criterion_benchmark(c: &mut Criterion) {
    let scorer = Scorer::default();

    c.bench_function("similarity (word pair)", |b| {
        b.iter(|| scorer.similarity(black_box("الرحمن"), black_box("الرحيم")))
    });

    c.bench_function("score_live (passage)", |b| {
        b.iter(|| scorer.score_live(black_box(REFERENCE), black_box(RECOGNIZED)))
    });

    c.bench_function("score_final (passage)", |b| {
        b.iter(|| scorer.score_final(black_box(REFERENCE), black_box(RECOGNIZED)))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
