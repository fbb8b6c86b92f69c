//! Criterion benchmarks for board snapshots and hashing.

use std::hint::black_box;

use blob_bench::reference_profile;
use blob_snapshot::{board_hash, decode_board, encode_board};
use criterion::{criterion_group, criterion_main, Criterion};

fn bench_codec(c: &mut Criterion) {
    let mut colony = reference_profile(7).unwrap();
    for _ in 0..100 {
        colony.step();
    }
    let board = colony.board().clone();
    let text = encode_board(&board);

    c.bench_function("encode_board_10k", |b| {
        b.iter(|| black_box(encode_board(&board)));
    });
    c.bench_function("decode_board_10k", |b| {
        b.iter(|| black_box(decode_board(&text).unwrap()));
    });
    c.bench_function("board_hash_10k", |b| {
        b.iter(|| black_box(board_hash(&board)));
    });
}

criterion_group!(benches, bench_codec);
criterion_main!(benches);
