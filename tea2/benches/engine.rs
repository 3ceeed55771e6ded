//! Benchmarks for single-block TEA2 encryption and decryption.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use tea2::{decrypt, encrypt, Block, BlockCipher, Key, Tea2, BLOCK_SIZE};

const KEY: Key = Key::new(
    0x0123_4567_89AB_CDEF,
    0xFEDC_BA98_7654_3210,
    0x0F1E_2D3C_4B5A_6978,
    0x8796_A5B4_C3D2_E1F0,
);

/// Benchmarks the word-level transforms.
fn bench_engine(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_single_block");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    let block = Block::new(0x0011_2233_4455_6677, 0x8899_AABB_CCDD_EEFF);
    group.bench_function("encrypt", |b| {
        b.iter(|| encrypt(black_box(block), black_box(&KEY)));
    });
    group.bench_function("decrypt", |b| {
        b.iter(|| decrypt(black_box(block), black_box(&KEY)));
    });

    group.finish();
}

/// Benchmarks the byte-slice adapter, including length checks and conversion.
fn bench_bytes(c: &mut Criterion) {
    let mut group = c.benchmark_group("bytes_single_block");
    group.throughput(Throughput::Bytes(BLOCK_SIZE as u64));

    let key = KEY.to_bytes();
    let block = [0xA5u8; BLOCK_SIZE];
    group.bench_function("encrypt", |b| {
        b.iter(|| Tea2.encrypt(black_box(&key), black_box(&block)));
    });

    group.finish();
}

criterion_group!(benches, bench_engine, bench_bytes);
criterion_main!(benches);
