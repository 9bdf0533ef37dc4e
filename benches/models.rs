//! Benchmarks for spark-models
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use serde_json::json;
use spark_models::{Collection, CollectionEvent, Model, ModelEvent, Observable};

// =============================================================================
// MODEL BENCHMARKS
// =============================================================================

fn bench_model_create(c: &mut Criterion) {
    c.bench_function("model_create", |b| b.iter(|| black_box(Model::new())));
}

fn bench_model_get(c: &mut Criterion) {
    let model = Model::from_value(json!({ "a": { "b": { "c": [1, 2, 3] } } })).unwrap();
    c.bench_function("model_get_nested", |b| {
        b.iter(|| black_box(model.get(black_box("a.b.c[2]"))))
    });
}

fn bench_model_set(c: &mut Criterion) {
    let model = Model::new();
    c.bench_function("model_set_no_listeners", |b| {
        b.iter(|| {
            model.set(black_box("a.b.c"), black_box(42));
        })
    });
}

fn bench_model_set_with_listeners(c: &mut Criterion) {
    let mut group = c.benchmark_group("model_set_listeners");

    for count in [1, 10, 100] {
        let model = Model::new();
        for _ in 0..count {
            model.subscribe("change", |event: &ModelEvent| {
                black_box(event);
            });
        }

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                model.set("x", black_box(1));
            })
        });
    }

    group.finish();
}

// =============================================================================
// COLLECTION BENCHMARKS
// =============================================================================

fn bench_collection_push_remove(c: &mut Criterion) {
    let collection = Collection::new();
    c.bench_function("collection_push_remove", |b| {
        b.iter(|| {
            let model = Model::new();
            collection.push(&model);
            collection.remove(&model);
        })
    });
}

fn bench_collection_forward(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection_forward");

    for size in [1, 100, 1000] {
        let collection = Collection::from_items((0..size).map(|_| Model::new()));
        collection.subscribe("change", |event: &CollectionEvent| {
            black_box(event);
        });
        let Some(last) = collection.at(size - 1) else {
            continue;
        };

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                last.set("x", black_box(1));
            })
        });
    }

    group.finish();
}

fn bench_collection_lookup(c: &mut Criterion) {
    let collection = Collection::from_items((0..1000).map(|_| Model::new()));
    let id = collection.at(999).map(|m| m.id().clone()).unwrap();
    c.bench_function("collection_has_last_of_1000", |b| {
        b.iter(|| black_box(collection.has(black_box(&id))))
    });
}

criterion_group!(
    benches,
    bench_model_create,
    bench_model_get,
    bench_model_set,
    bench_model_set_with_listeners,
    bench_collection_push_remove,
    bench_collection_forward,
    bench_collection_lookup,
);
criterion_main!(benches);
