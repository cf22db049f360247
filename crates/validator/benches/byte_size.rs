//! Benchmarks for byte-size measurement
//!
//! Measures:
//! - Encoded length per charset (arithmetic vs streaming encoders)
//! - Impact of input length on streaming encoders
//! - Validator construction, which resolves the encoding label

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use gauge_validator::prelude::*;

const SAMPLE: &str = "ByteSize あいうえお 漢字 café";

fn byte_len_by_charset(c: &mut Criterion) {
    let mut group = c.benchmark_group("byte_size/charset");

    for label in ["utf-8", "utf-16", "utf-32", "shift_jis", "euc-jp", "windows-1252"] {
        let charset = Charset::for_label(label).unwrap();
        group.bench_function(label, |b| {
            b.iter(|| black_box(charset.byte_len(black_box(SAMPLE))));
        });
    }

    group.finish();
}

fn shift_jis_input_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("byte_size/shift_jis_length");
    let validator = byte_size(0, 1 << 20, Some("shift_jis")).unwrap();

    for repeat in [1usize, 16, 256, 4096] {
        let input = SAMPLE.repeat(repeat);
        group.bench_with_input(BenchmarkId::from_parameter(input.len()), &input, |b, input| {
            b.iter(|| black_box(validator.is_valid(input)));
        });
    }

    group.finish();
}

fn construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("byte_size/construction");

    group.bench_function("utf-8", |b| {
        b.iter(|| black_box(byte_size(3, 6, None)));
    });

    group.bench_function("shift_jis", |b| {
        b.iter(|| black_box(byte_size(3, 6, Some("Shift-JIS"))));
    });

    group.bench_function("rejected", |b| {
        b.iter(|| black_box(byte_size(3, 6, Some("illegal-charset"))));
    });

    group.finish();
}

criterion_group!(benches, byte_len_by_charset, shift_jis_input_length, construction);
criterion_main!(benches);
