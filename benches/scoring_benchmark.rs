use credit_engine::scoring::engine::CreditScoringEngine;
use credit_engine::simulation::history::{generate_random_history, HistoryConfig};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_score_single_loan(c: &mut Criterion) {
    let config = HistoryConfig {
        completed_loans: 1,
        active_loans: 0,
        ..Default::default()
    };
    let history = generate_random_history(&config);

    c.bench_function("score_single_loan", |b| {
        b.iter(|| CreditScoringEngine::score(black_box(&history)))
    });
}

fn bench_score_10_loans(c: &mut Criterion) {
    let config = HistoryConfig {
        completed_loans: 10,
        active_loans: 2,
        ..Default::default()
    };
    let history = generate_random_history(&config);

    c.bench_function("score_10_loans", |b| {
        b.iter(|| CreditScoringEngine::score(black_box(&history)))
    });
}

fn bench_score_50_loans(c: &mut Criterion) {
    let config = HistoryConfig {
        completed_loans: 50,
        active_loans: 5,
        max_duration_months: 24,
        ..Default::default()
    };
    let history = generate_random_history(&config);

    c.bench_function("score_50_loans", |b| {
        b.iter(|| CreditScoringEngine::score(black_box(&history)))
    });
}

criterion_group!(
    benches,
    bench_score_single_loan,
    bench_score_10_loans,
    bench_score_50_loans
);
criterion_main!(benches);
