//! Performance benchmarks for lztext-lzss.
//!
//! This suite evaluates:
//! - Compression/decompression speed across data patterns
//! - Behaviour on ASCII vs multi-byte text
//! - Scaling across input sizes

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use lztext_lzss::{compress, decompress};
use std::hint::black_box;

/// Generate test data patterns for benchmarking
mod test_data {
    /// Uniform data - a single repeated unit (best compression)
    pub fn uniform(size: usize) -> Vec<u16> {
        vec![b'x' as u16; size]
    }

    /// Repetitive phrase - realistic highly compressible text
    pub fn repetitive(size: usize) -> Vec<u16> {
        "to be or not to be, that is the question. "
            .encode_utf16()
            .cycle()
            .take(size)
            .collect()
    }

    /// Pseudo-random printable ASCII - close to worst case
    pub fn random_ascii(size: usize) -> Vec<u16> {
        let mut data = Vec::with_capacity(size);
        let mut seed: u64 = 0x123456789ABCDEF0;
        for _ in 0..size {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            data.push(0x20 + ((seed >> 33) % 0x5F) as u16);
        }
        data
    }

    /// Japanese text - exercises the Unicode literal pages
    pub fn japanese(size: usize) -> Vec<u16> {
        "\u{65e5}\u{672c}\u{8a9e}\u{306e}\u{30c6}\u{30ad}\u{30b9}\u{30c8}\u{3092}\u{5727}\u{7e2e}\u{3059}\u{308b}\u{3002}"
            .encode_utf16()
            .cycle()
            .take(size)
            .collect()
    }
}

fn bench_compress(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzss_compress");
    let patterns: [(&str, fn(usize) -> Vec<u16>); 4] = [
        ("uniform", test_data::uniform),
        ("repetitive", test_data::repetitive),
        ("random_ascii", test_data::random_ascii),
        ("japanese", test_data::japanese),
    ];

    for (name, generator) in patterns {
        for size in [1 << 10, 1 << 14] {
            let data = generator(size);
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &data, |b, data| {
                b.iter(|| compress(black_box(data), None).unwrap());
            });
        }
    }
    group.finish();
}

fn bench_decompress(c: &mut Criterion) {
    let mut group = c.benchmark_group("lzss_decompress");
    let patterns: [(&str, fn(usize) -> Vec<u16>); 3] = [
        ("repetitive", test_data::repetitive),
        ("random_ascii", test_data::random_ascii),
        ("japanese", test_data::japanese),
    ];

    for (name, generator) in patterns {
        for size in [1 << 10, 1 << 14] {
            let data = generator(size);
            let compressed: Vec<u16> = compress(&data, None).unwrap().encode_utf16().collect();
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(BenchmarkId::new(name, size), &compressed, |b, payload| {
                b.iter(|| decompress(black_box(payload)));
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_compress, bench_decompress);
criterion_main!(benches);
