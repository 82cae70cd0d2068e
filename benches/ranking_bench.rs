//! Ranking, pagination and full-dashboard derivation throughput.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use scanlens::core::{ModuleMetric, ModuleMetricDto, ProjectSnapshot};
use scanlens::dashboard::{derive_dashboard, Settings};
use scanlens::pagination::{build_page_items, paginate, DEFAULT_PAGE_SIZE};
use scanlens::ranking::rank;
use scanlens::risk::compute_module_risks;
use std::hint::black_box;

fn metric(i: u32) -> ModuleMetric {
    ModuleMetric {
        module_name: format!("src/module_{i}.js"),
        language: Some("js".to_string()),
        bugs: i % 17,
        vulnerabilities: i % 5,
        code_smells: i % 23,
        coverage: f64::from(i % 101),
        duplication: f64::from(i % 13) / 2.0,
        complexity: Some(i % 40),
        lines_of_code: Some(u64::from(i) * 10),
    }
}

fn snapshot(count: u32) -> ProjectSnapshot {
    let mut snapshot = ProjectSnapshot::empty(1, "bench");
    snapshot.module_metrics = (0..count)
        .map(|i| ModuleMetricDto {
            module_name: format!("src/module_{i}.js"),
            qualifier: None,
            language: None,
            bugs: i % 17,
            vulnerabilities: i % 5,
            code_smells: i % 23,
            coverage: f64::from(i % 101),
            duplication: f64::from(i % 13) / 2.0,
            complexity: i % 40,
            lines_of_code: u64::from(i) * 10,
        })
        .collect();
    snapshot
}

fn bench_rank_and_paginate(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank_and_paginate");

    for size in [100u32, 1_000, 10_000] {
        let metrics: Vec<ModuleMetric> = (0..size).map(metric).collect();
        let risks = compute_module_risks(&metrics);

        group.bench_with_input(BenchmarkId::new("rank", size), &risks, |b, risks| {
            b.iter(|| rank(black_box(risks)))
        });

        let ranked = rank(&risks);
        let last_page = ranked.len().div_ceil(DEFAULT_PAGE_SIZE);
        group.bench_with_input(BenchmarkId::new("last_page", size), &ranked, |b, ranked| {
            b.iter(|| {
                let page = paginate(black_box(ranked), last_page, DEFAULT_PAGE_SIZE);
                black_box(page.map(|p| build_page_items(p.page, p.total_pages)))
            })
        });
    }

    group.finish();
}

fn bench_derive_dashboard(c: &mut Criterion) {
    let settings = Settings::default();
    let mut group = c.benchmark_group("derive_dashboard");

    for size in [50u32, 500] {
        let snapshot = snapshot(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &snapshot, |b, snapshot| {
            b.iter(|| derive_dashboard(black_box(snapshot), 2, &settings))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_rank_and_paginate, bench_derive_dashboard);
criterion_main!(benches);
