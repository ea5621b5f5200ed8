//! # Bricks Codec Benchmarks
//!
//! Throughput of the hot paths on the particle family (stride 24 bytes):
//!
//! | Group | Operation |
//! |-------|-----------|
//! | serializer | `encode` / `decode` of mixed banks with gaps |
//! | iterator | filtered walk and `size()` over a decoded bank |

use bricks_iterator::{AbstractIterator, Predicate};
use bricks_registry::AbstractHandle;
use bricks_serializer::{IndirectSerializer, ObjectSerializer};
use bricks_tests::fixtures::{particle_family, random_bank, Particle};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

const BANK_SIZES: [usize; 4] = [100, 1_000, 10_000, 100_000];

// ============================================================================
// SERIALIZER
// ============================================================================

fn bench_serializer(c: &mut Criterion) {
    let mut group = c.benchmark_group("serializer");
    let serializer = IndirectSerializer::new(particle_family());

    for size in BANK_SIZES {
        let bank = random_bank(size, &mut StdRng::seed_from_u64(size as u64));
        let mut out = vec![0u8; serializer.required_bytes(size)];
        group.throughput(Throughput::Bytes(out.len() as u64));

        group.bench_with_input(BenchmarkId::new("encode", size), &bank, |b, bank| {
            b.iter(|| serializer.encode(black_box(bank), &mut out).is_ok())
        });

        let bytes = serializer.encode_to_vec(&bank).unwrap_or_default();
        let mut target: Vec<AbstractHandle<dyn Particle>> =
            (0..size).map(|_| AbstractHandle::empty()).collect();
        group.bench_with_input(BenchmarkId::new("decode", size), &bytes, |b, bytes| {
            b.iter(|| serializer.decode(black_box(bytes), &mut target).is_ok())
        });
    }

    group.finish();
}

// ============================================================================
// ITERATOR
// ============================================================================

fn bench_iterator(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterator");

    let bound = Predicate::new(|h: &AbstractHandle<dyn Particle>| h.has_implementation());
    let hot = Predicate::new(|h: &AbstractHandle<dyn Particle>| {
        h.get().is_some_and(|p| p.energy() > 10.0)
    });
    let filter = bound.and(&hot);

    for size in BANK_SIZES {
        let bank = random_bank(size, &mut StdRng::seed_from_u64(size as u64));
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("filtered_walk", size), &bank, |b, bank| {
            b.iter(|| {
                AbstractIterator::with_predicate(bank, filter.clone())
                    .map(|h| h.get().map_or(0.0, |p| p.energy()))
                    .sum::<f64>()
            })
        });

        group.bench_with_input(BenchmarkId::new("size", size), &bank, |b, bank| {
            b.iter(|| AbstractIterator::with_predicate(bank, filter.clone()).size())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_serializer, bench_iterator);
criterion_main!(benches);
