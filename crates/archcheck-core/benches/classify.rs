//! Classification and native verification benchmarks for archcheck.
//!
//! Measures:
//! - Name classification throughput over large file listings
//! - In-memory ZIP entry testing

#![allow(clippy::unwrap_used, clippy::cast_possible_truncation, missing_docs)]

use archcheck_core::classify;
use archcheck_core::formats::IntegrityCheck;
use archcheck_core::formats::ZipChecker;
use archcheck_core::test_utils::create_test_zip;
use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use std::hint::black_box;
use std::io::Cursor;
use std::path::PathBuf;

/// Builds a listing mixing single archives, split sets and unrelated files.
fn listing(count: usize) -> Vec<PathBuf> {
    (0..count)
        .map(|i| match i % 5 {
            0 => PathBuf::from(format!("dir{}/single{i}.zip", i % 7)),
            1 => PathBuf::from(format!("dir{}/set{}.7z.{:03}", i % 7, i / 50, i % 50 + 1)),
            2 => PathBuf::from(format!("dir{}/backup{}.z{:02}", i % 7, i / 20, i % 20 + 1)),
            3 => PathBuf::from(format!("dir{}/photo{i}.7z", i % 7)),
            _ => PathBuf::from(format!("dir{}/notes{i}.txt", i % 7)),
        })
        .collect()
}

fn benchmark_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");

    for count in [100usize, 1_000, 10_000] {
        let paths = listing(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("files", count), &paths, |b, paths| {
            b.iter(|| classify(black_box(paths.iter().cloned())));
        });
    }

    group.finish();
}

fn benchmark_zip_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("zip_test_entries");

    for entries in [10usize, 100] {
        let payload = vec![0x5Au8; 4096];
        let names: Vec<String> = (0..entries).map(|i| format!("file{i}.bin")).collect();
        let listing_entries: Vec<(&str, &[u8])> = names
            .iter()
            .map(|n| (n.as_str(), payload.as_slice()))
            .collect();
        let data = create_test_zip(&listing_entries);

        group.throughput(Throughput::Bytes((entries * payload.len()) as u64));
        group.bench_with_input(BenchmarkId::new("entries", entries), &data, |b, data| {
            b.iter(|| {
                let mut archive = ZipChecker::new(Cursor::new(data.as_slice())).unwrap();
                black_box(archive.test_entries().unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_classify, benchmark_zip_test);
criterion_main!(benches);
