//! Criterion benchmarks for the selection hot path.
//!
//! Benchmarks:
//! 1. Quality predicates over a full candidate collection
//! 2. Per-channel best-pair search at growing candidate multiplicity

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use dilepton_core::domain::{ElectronFields, EventRecord, MuonFields};
use dilepton_core::selection::{Channel, LeptonQuality, SelectionConfig};

// ── Helpers ──────────────────────────────────────────────────────────

/// Deterministic event with `n` electrons and `n` muons of alternating charge.
fn make_event(n: usize) -> EventRecord {
    let mut ev = EventRecord::new();
    for i in 0..n {
        let x = i as f64;
        let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
        ev.push_electron(ElectronFields {
            pt: sign * (20.0 + (x * 1.7).sin().abs() * 60.0),
            eta: (x * 0.9).sin() * 2.5,
            phi: (x * 2.3).sin() * std::f64::consts::PI,
            iso03: 0.02 + (x * 0.37).cos().abs() * 0.2,
            miss_hits: (i % 5 == 4) as u32,
            conversion: None,
        });
        ev.push_muon(MuonFields {
            pt: -sign * (20.0 + (x * 1.3).cos().abs() * 60.0),
            eta: (x * 0.7).cos() * 2.5,
            phi: (x * 1.9).cos() * std::f64::consts::PI,
            iso03: 0.02 + (x * 0.41).sin().abs() * 0.2,
            hits_valid: 10 + (i % 8) as u32,
            hits_pixel: 1 + (i % 4) as u32,
            dist_pv0: 0.005 + (i % 3) as f64 * 0.01,
            dist_pvz: 0.1,
            track_chi2_ndof: 1.0 + (i % 12) as f64,
        });
    }
    ev
}

// ── 1. Quality predicates ───────────────────────────────────────────

fn bench_quality(c: &mut Criterion) {
    let cfg = SelectionConfig::default();
    let ev = make_event(64);

    c.bench_function("electron_quality_64", |b| {
        b.iter(|| {
            (0..ev.electron_count())
                .filter(|&i| cfg.electron.passes(black_box(&ev), i))
                .count()
        })
    });

    c.bench_function("muon_quality_64", |b| {
        b.iter(|| {
            (0..ev.muon_count())
                .filter(|&i| cfg.muon.passes(black_box(&ev), i))
                .count()
        })
    });
}

// ── 2. Best-pair search ─────────────────────────────────────────────

fn bench_pair_selection(c: &mut Criterion) {
    let cfg = SelectionConfig::default();
    let mut group = c.benchmark_group("pair_selection");

    for n in [2usize, 4, 8, 16, 32] {
        let ev = make_event(n);
        for ch in Channel::ALL {
            group.bench_with_input(BenchmarkId::new(ch.name(), n), &ev, |b, ev| {
                b.iter(|| ch.select(black_box(ev), &cfg))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_quality, bench_pair_selection);
criterion_main!(benches);
