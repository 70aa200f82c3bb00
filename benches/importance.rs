//! Benchmarks for the exponential stages of the analysis.
//!
//! Structural importance enumerates `2^n` states, and minimal cut set reduction
//! is quadratic in the number of raw cut sets.
//!
//! Run with:
//! ```bash
//! cargo bench --bench importance
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use fta_rs::config::AnalysisConfig;
use fta_rs::cutset::{generate_cut_sets, CutSet};
use fta_rs::gate::Gate;
use fta_rs::minimal::minimal_cut_sets;
use fta_rs::structural::structural_importance;
use fta_rs::tree::{FaultTree, NodeSpec};
use fta_rs::types::Code;

/// Pairs `{2k, 2k+1}` joined by an OR: `n` events, `n / 2` cut sets.
fn paired_cut_sets(n: u32) -> Vec<CutSet> {
    (0..n / 2)
        .map(|k| CutSet::new(vec![Code::new(2 * k), Code::new(2 * k + 1)]))
        .collect()
}

/// Every pair `{i, j}` plus every triple `{i, j, i + j}` within `0..n`.
/// Most of the triples are supersets of some pair.
fn redundant_cut_sets(n: u32) -> Vec<CutSet> {
    let mut cut_sets = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            cut_sets.push(CutSet::new(vec![Code::new(i), Code::new(j), Code::new(n + i + j)]));
            cut_sets.push(CutSet::new(vec![Code::new(i), Code::new(j)]));
        }
    }
    cut_sets
}

/// OR of `width` AND gates, each over `width` basic events.
fn or_of_ands(width: u32) -> FaultTree {
    let mut specs = vec![NodeSpec::gate(0, Gate::Or, 1..=width)];
    let mut next = width + 1;
    for g in 1..=width {
        let children: Vec<u32> = (next..next + width).collect();
        next += width;
        for &c in &children {
            specs.push(NodeSpec::basic(c, 0.01));
        }
        specs.push(NodeSpec::gate(g, Gate::And, children));
    }
    FaultTree::build(specs).expect("well-formed tree")
}

// ============================================================================
// Benchmark: Structural importance
// ============================================================================

fn bench_structural(c: &mut Criterion) {
    let mut group = c.benchmark_group("structural");
    let config = AnalysisConfig::default();

    for n in [8, 12, 16] {
        let minimal = paired_cut_sets(n);
        group.throughput(Throughput::Elements(1 << n));
        group.bench_with_input(BenchmarkId::from_parameter(n), &minimal, |b, minimal| {
            b.iter(|| structural_importance(minimal, &config).expect("within capacity"))
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Minimal cut set reduction
// ============================================================================

fn bench_minimal(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimal");

    for n in [10, 20, 40] {
        let raw = redundant_cut_sets(n);
        group.throughput(Throughput::Elements(raw.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(raw.len()), &raw, |b, raw| {
            b.iter(|| minimal_cut_sets(raw))
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Cut set generation
// ============================================================================

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    let config = AnalysisConfig::default();

    for width in [4, 8, 16] {
        let tree = or_of_ands(width);
        group.bench_with_input(BenchmarkId::from_parameter(width), &tree, |b, tree| {
            b.iter(|| generate_cut_sets(tree, &config).expect("converges"))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_structural, bench_minimal, bench_generate);
criterion_main!(benches);
