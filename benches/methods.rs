use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use expapprox::{
    comparison::{Comparison, BATCH_ORDERS, MAX_ORDER},
    error_curve::SampleGrid,
    method::{condition_number, interpolate, Method, NodeSet},
    nalgebra::DMatrix,
    target::TargetFunction,
};

fn bench_methods(c: &mut Criterion) {
    //
    // Each method on its own, across the batch orders
    for method in Method::ALL {
        let samples: Vec<_> = BATCH_ORDERS
            .iter()
            .map(|&n| CriterionTestEntry::new(&format!("n={n}"), n))
            .collect();

        test_criterion_group(c, &format!("approximate/{}", method.id()), &samples, |b, &n| {
            b.iter(|| method.approximate::<f64>(black_box(TargetFunction::Exp), black_box(n)));
        });
    }
}

fn bench_comparison(c: &mut Criterion) {
    let grid = SampleGrid::<f64>::default();
    let samples: Vec<_> = BATCH_ORDERS
        .iter()
        .map(|&n| CriterionTestEntry::new(&format!("n={n}"), n))
        .collect();

    test_criterion_group(c, "comparison", &samples, |b, &n| {
        b.iter(|| Comparison::new(TargetFunction::ExpNeg, black_box(n), &Method::ALL, &grid));
    });
}

fn bench_conditioning(c: &mut Criterion) {
    //
    // How the Vandermonde solve scales with order, for both node sets
    let samples: Vec<_> = (1..=MAX_ORDER)
        .map(|n| CriterionTestEntry::new(&format!("n={n}"), n))
        .collect();

    for nodes in [NodeSet::Chebyshev, NodeSet::Equidistant] {
        test_criterion_group(c, &format!("interpolate/{nodes:?}"), &samples, |b, &n| {
            b.iter(|| interpolate::<f64>(TargetFunction::Exp, black_box(n), nodes));
        });
    }

    let vandermonde = DMatrix::<f64>::from_fn(MAX_ORDER + 1, MAX_ORDER + 1, |i, j| {
        let x = -1.0 + 2.0 * i as f64 / MAX_ORDER as f64;
        x.powi(j as i32)
    });
    c.bench_function("condition_number", |b| {
        b.iter(|| condition_number(black_box(&vandermonde)));
    });
}

criterion_group!(benches, bench_methods, bench_comparison, bench_conditioning);
criterion_main!(benches);

struct CriterionTestEntry<V> {
    id: String,
    values: V,
}
impl<V> CriterionTestEntry<V> {
    pub fn new(id: &str, values: V) -> Self {
        Self {
            id: id.to_string(),
            values,
        }
    }
}

fn test_criterion_group<F, V>(c: &mut Criterion, id: &str, samples: &[CriterionTestEntry<V>], runner: F)
where
    for<'a, 'b, 'c> F: Fn(&'a mut criterion::Bencher<'b>, &'c V),
{
    let mut group = c.benchmark_group(id);
    for sample in samples {
        group.bench_with_input(&sample.id, &sample.values, &runner);
    }
    group.finish();
}
