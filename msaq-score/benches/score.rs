use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use msaq_score::{
    score_all, Alignment, ContactMap, Entropy, PercentageOfNonGaps,
    PercentageOfTotallyConservedColumns, Score, Star, Strike, SubstitutionMatrix, SumOfPairs,
};

const AMINO_ACIDS: &[u8] = b"ARNDCQEGHILKMFPSTWYV";

/// Deterministic pseudo-random protein alignment with roughly 10% gaps.
fn random_alignment(rows: usize, width: usize) -> Alignment {
    let mut state: u64 = 42;
    let mut next = || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (state >> 33) as usize
    };
    let seqs: Vec<Vec<u8>> = (0..rows)
        .map(|_| {
            (0..width)
                .map(|_| {
                    if next() % 10 == 0 {
                        b'-'
                    } else {
                        AMINO_ACIDS[next() % AMINO_ACIDS.len()]
                    }
                })
                .collect()
        })
        .collect();
    Alignment::new(&seqs).unwrap()
}

/// Contacts between columns 4 to 12 apart, as in a helix-rich fold.
fn local_contacts(width: usize) -> ContactMap {
    let pairs = (0..width).flat_map(|i| (i + 4..(i + 12).min(width)).map(move |j| (i, j)));
    ContactMap::from_pairs(pairs).unwrap()
}

fn bench_pairwise_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("pairwise");
    let blosum = SubstitutionMatrix::blosum62();

    for &rows in &[10, 50] {
        let alignment = random_alignment(rows, 300);
        let sop = SumOfPairs::new(blosum);
        let star = Star::new(blosum);

        group.bench_with_input(BenchmarkId::new("sum_of_pairs", rows), &rows, |b, _| {
            b.iter(|| sop.evaluate(black_box(&alignment)))
        });

        group.bench_with_input(BenchmarkId::new("star", rows), &rows, |b, _| {
            b.iter(|| star.evaluate(black_box(&alignment)))
        });
    }

    group.finish();
}

fn bench_column_models(c: &mut Criterion) {
    let mut group = c.benchmark_group("column");
    let alignment = random_alignment(50, 1000);

    let entropy = Entropy::new();
    let non_gaps = PercentageOfNonGaps::default();
    let conserved = PercentageOfTotallyConservedColumns::default();

    group.bench_function("entropy", |b| b.iter(|| entropy.evaluate(black_box(&alignment))));
    group.bench_function("non_gaps", |b| b.iter(|| non_gaps.evaluate(black_box(&alignment))));
    group.bench_function("conserved", |b| b.iter(|| conserved.evaluate(black_box(&alignment))));

    group.finish();
}

fn bench_strike(c: &mut Criterion) {
    let mut group = c.benchmark_group("strike");

    for &width in &[300, 1000] {
        let alignment = random_alignment(20, width);
        let strike = Strike::new(SubstitutionMatrix::blosum62(), local_contacts(width));

        group.bench_with_input(BenchmarkId::new("contacts", width), &width, |b, _| {
            b.iter(|| strike.evaluate(black_box(&alignment)))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let alignment = random_alignment(20, 500);
    let blosum = SubstitutionMatrix::blosum62();
    let sop = SumOfPairs::new(blosum);
    let star = Star::new(blosum);
    let entropy = Entropy::new();
    let non_gaps = PercentageOfNonGaps::default();
    let conserved = PercentageOfTotallyConservedColumns::default();
    let models: [&dyn Score; 5] = [&sop, &star, &entropy, &non_gaps, &conserved];

    c.bench_function("score_all_5_models", |b| {
        b.iter(|| score_all(black_box(&alignment), &models))
    });
}

criterion_group!(
    benches,
    bench_pairwise_models,
    bench_column_models,
    bench_strike,
    bench_batch
);
criterion_main!(benches);
