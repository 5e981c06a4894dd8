//! Wire codec throughput.
//!
//! Everything here is client-side byte shuffling; no engine process is
//! involved. Run with `cargo bench --bench codec_benchmarks`.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use std::io::Cursor;

use mooring::batch::VectorBatch;
use mooring::pipe::codec::{read_response_frame, write_batch, write_query_frame};

fn query_frame_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_frame_encode");
    for dim in [32usize, 128, 768] {
        let vector: Vec<f32> = (0..dim).map(|i| (i as f32).sin()).collect();
        group.throughput(Throughput::Bytes((8 + dim * 4) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(dim), &vector, |b, vector| {
            let mut buf = Vec::with_capacity(8 + vector.len() * 4);
            b.iter(|| {
                buf.clear();
                write_query_frame(&mut buf, black_box(64), black_box(10), black_box(vector))
                    .unwrap();
                black_box(buf.len())
            });
        });
    }
    group.finish();
}

fn batch_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_encode");
    for rows in [100usize, 10_000] {
        let dim = 128;
        let data: Vec<f32> = (0..rows * dim).map(|i| (i as f32).cos()).collect();
        let batch = VectorBatch::from_flat(dim, data).unwrap();
        group.throughput(Throughput::Bytes(batch.wire_len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &batch, |b, batch| {
            let mut buf = Vec::with_capacity(batch.wire_len());
            b.iter(|| {
                buf.clear();
                write_batch(&mut buf, black_box(batch)).unwrap();
                black_box(buf.len())
            });
        });
    }
    group.finish();
}

fn response_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("response_decode");
    for count in [10usize, 100] {
        let mut encoded = Vec::with_capacity(4 + count * 4);
        encoded.extend_from_slice(&(count as i32).to_le_bytes());
        for i in 0..count {
            encoded.extend_from_slice(&(i as i32).to_le_bytes());
        }
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &encoded, |b, encoded| {
            b.iter(|| {
                let indices =
                    read_response_frame(&mut Cursor::new(black_box(encoded)), count).unwrap();
                black_box(indices)
            });
        });
    }
    group.finish();
}

criterion_group!(codec, query_frame_encode, batch_encode, response_decode);
criterion_main!(codec);
