//! Criterion benches for the integer twist reduction (group "reduce").
//!
//! - Seeded random flag complexes up to dimension 3.
//! - Twist clearing on vs. off on the same complex.

use std::collections::HashMap;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use homcycle::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

/// Flag complex on `n` vertices with edge probability `p`, in filtration order.
fn flag_complex(seed: u64, n: usize, p: f64) -> Vec<Vec<usize>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut weight: HashMap<(usize, usize), f64> = HashMap::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(p) {
                weight.insert((i, j), rng.gen_range(0.0..1.0));
            }
        }
    }
    let w = |s: &[usize]| -> Option<f64> {
        let mut best = 0.0f64;
        for a in 0..s.len() {
            for b in (a + 1)..s.len() {
                best = best.max(*weight.get(&(s[a], s[b]))?);
            }
        }
        Some(best)
    };
    let mut out: Vec<(f64, Vec<usize>)> = (0..n).map(|i| (0.0, vec![i])).collect();
    for a in 0..n {
        for b in (a + 1)..n {
            let Some(wab) = w(&[a, b]) else { continue };
            out.push((wab, vec![a, b]));
            for c in (b + 1)..n {
                let Some(wabc) = w(&[a, b, c]) else { continue };
                out.push((wabc, vec![a, b, c]));
                for d in (c + 1)..n {
                    if let Some(x) = w(&[a, b, c, d]) {
                        out.push((x, vec![a, b, c, d]));
                    }
                }
            }
        }
    }
    out.sort_by(|x, y| {
        x.0.total_cmp(&y.0)
            .then(x.1.len().cmp(&y.1.len()))
            .then(x.1.cmp(&y.1))
    });
    out.into_iter().map(|(_, s)| s).collect()
}

fn build(simplices: &[Vec<usize>], cfg: ReduceCfg) -> BoundaryMatrix {
    let mut counts = vec![0usize; 4];
    for s in simplices {
        counts[s.len() - 1] += 1;
    }
    let mut m = BoundaryMatrix::new(3, &counts).unwrap().with_cfg(cfg);
    let mut ids: HashMap<&[usize], CellId> = HashMap::new();
    for s in simplices {
        let id = m.add_cell(s.len() - 1);
        if s.len() > 1 {
            let mut faces: Vec<(CellId, i64)> = (0..s.len())
                .map(|i| {
                    let f: Vec<usize> = s
                        .iter()
                        .enumerate()
                        .filter(|&(k, _)| k != i)
                        .map(|(_, &v)| v)
                        .collect();
                    (ids[f.as_slice()], if i % 2 == 0 { 1 } else { -1 })
                })
                .collect();
            faces.sort_by_key(|&(c, _)| c);
            for (row, v) in faces {
                m.add_boundary_coef(id, row, v);
            }
        }
        ids.insert(s.as_slice(), id);
    }
    m
}

fn bench_reduce_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    let simplices = flag_complex(42, 24, 0.5);
    group.throughput(Throughput::Elements(simplices.len() as u64));
    for (name, use_twist) in [("twist", true), ("standard", false)] {
        let cfg = ReduceCfg { use_twist };
        group.bench_function(name, |b| {
            b.iter_batched(
                || build(&simplices, cfg),
                |mut m| m.reduce_all(),
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduce");
    let simplices = flag_complex(7, 24, 0.5);
    group.throughput(Throughput::Elements(simplices.len() as u64));
    group.bench_function("build", |b| {
        b.iter(|| build(&simplices, ReduceCfg::default()).len())
    });
    group.finish();
}

criterion_group!(benches, bench_reduce_all, bench_build);
criterion_main!(benches);
