// ABOUTME: Criterion benchmarks for the health calculator and duration model
// ABOUTME: Measures model training, per-profile metrics and time-to-goal estimation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Criterion benchmarks for the SmartWeight intelligence crate.
//!
//! Training runs once per process in production, while metrics and
//! estimates run for every analysis.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use smartweight::models::{ActivityLevel, Sex, UserProfile};
use smartweight_intelligence::{
    compute_metrics, estimate_duration, plan_meals, CalorieConfig, DurationModel, TrainerConfig,
};

fn bench_profile() -> UserProfile {
    UserProfile {
        name: "Bench".to_owned(),
        age: 30,
        sex: Sex::Female,
        weight_kg: 75.0,
        height_cm: 160.0,
        activity_level: ActivityLevel::LightlyActive,
        target_weight_kg: 65.0,
    }
}

/// Benchmark training on synthetic samples of increasing size
fn bench_model_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_training");
    group.sample_size(20);

    for samples in [250_usize, 1000, 4000] {
        let config = TrainerConfig {
            samples,
            ..TrainerConfig::default()
        };
        group.throughput(Throughput::Elements(samples as u64));
        group.bench_with_input(BenchmarkId::new("train_with", samples), &config, |b, config| {
            b.iter(|| DurationModel::train_with(black_box(config)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark the per-profile pipeline stages
fn bench_profile_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("profile_analysis");
    let profile = bench_profile();
    let config = CalorieConfig::default();
    let model = DurationModel::global().unwrap();
    let metrics = compute_metrics(&profile, &config);

    group.bench_function("compute_metrics", |b| {
        b.iter(|| compute_metrics(black_box(&profile), black_box(&config)));
    });

    group.bench_function("estimate_duration", |b| {
        b.iter(|| estimate_duration(black_box(&profile), black_box(&metrics), model));
    });

    group.bench_function("plan_meals", |b| {
        b.iter(|| plan_meals(black_box(&metrics)));
    });

    group.finish();
}

criterion_group!(benches, bench_model_training, bench_profile_analysis);
criterion_main!(benches);
