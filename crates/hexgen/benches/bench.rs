use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use hexgen::{GenerationRequest, ParallelWriter, append_hex, encode_hex};
use std::io;

// Records generated per benchmark iteration.
const TOTAL_RECORDS: u64 = 10_000;
const DIGITS: usize = 16;

fn writer(workers: usize) -> ParallelWriter {
    let request = GenerationRequest::new(TOTAL_RECORDS, workers).unwrap();
    ParallelWriter::new(request).unwrap()
}

/// Full pipeline into a discarding sink, so only generation, encoding and
/// locking are measured.
fn bench_discard(c: &mut Criterion) {
    let mut group = c.benchmark_group("discard");
    group.throughput(Throughput::Elements(TOTAL_RECORDS));

    for workers in [1, 4, 50] {
        let writer = writer(workers);
        group.bench_function(format!("workers/{workers}"), |b| {
            b.iter(|| writer.run(&mut io::sink()).unwrap());
        });
    }

    group.finish();
}

/// Full pipeline into a growing in-memory buffer.
fn bench_memory(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory");
    group.throughput(Throughput::Bytes(TOTAL_RECORDS * 17));

    let writer = writer(1);
    group.bench_function("workers/1", |b| {
        b.iter(|| {
            let mut out = Vec::new();
            writer.run(&mut out).unwrap();
            black_box(out);
        });
    });

    group.finish();
}

/// Encoder variants over the same 20k values.
fn bench_encode(c: &mut Criterion) {
    const VALUES: u64 = 20_000;

    let mut group = c.benchmark_group("encode");
    group.throughput(Throughput::Elements(VALUES));

    group.bench_function("encode_hex", |b| {
        b.iter(|| {
            for k in 0..VALUES {
                black_box(encode_hex(k * 17, DIGITS));
            }
        });
    });

    group.bench_function("append_hex", |b| {
        let mut buf = Vec::with_capacity(1024 * 1024);
        b.iter(|| {
            for k in 0..VALUES {
                buf.clear();
                append_hex(k * 17, DIGITS, &mut buf);
                black_box(&buf);
            }
        });
    });

    group.bench_function("write_fmt", |b| {
        use std::io::Write;
        let mut buf = Vec::with_capacity(1024 * 1024);
        b.iter(|| {
            for k in 0..VALUES {
                buf.clear();
                write!(buf, "{:016x}", k * 17).unwrap();
                black_box(&buf);
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_discard, bench_memory, bench_encode);
criterion_main!(benches);
