//! Benchmarks for dispatch
//!
//! Single-file parsing per strategy, batch dispatch and chapter ordering.

use bindery::{ChapterOrderingUnit, LibraryType, Options, ScanEntry, dispatch, dispatch_all, order};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const ROOT: &str = "E:/Manga/";

/// (path, folder) pairs covering the common shapes of a manga library.
fn sample_files() -> Vec<(&'static str, &'static str)> {
    vec![
        ("E:/Manga/Mujaki no Rakuen/Mujaki no Rakuen Vol12 ch76.cbz", "E:/Manga/Mujaki no Rakuen/"),
        ("E:/Manga/Beelzebub/Beelzebub_01_[Noodles].zip", "E:/Manga/Beelzebub/"),
        ("E:/Manga/Air Gear/Air Gear Omnibus v01 (2016) (Digital) (Shadowcat-Empire).cbz", "E:/Manga/Air Gear/"),
        ("E:/Manga/Record of Ragnarok/Record of Ragnarok SP11.cbz", "E:/Manga/Record of Ragnarok/"),
        ("E:/Manga/Vagabond/Vol 1/Chapter 7/001.jpg", "E:/Manga/Vagabond/Vol 1/Chapter 7/"),
        ("E:/Manga/Kimi/Specials/Kimi Omake 3.cbz", "E:/Manga/Kimi/Specials/"),
        ("E:/Manga/Beelzebub/cover.png", "E:/Manga/Beelzebub/"),
    ]
}

fn bench_single_file(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_single");

    for (path, folder) in sample_files() {
        let name = path.rsplit('/').next().unwrap_or(path);
        group.bench_with_input(BenchmarkId::from_parameter(name), &(path, folder), |b, (path, folder)| {
            b.iter(|| dispatch(black_box(path), black_box(folder), ROOT, LibraryType::Manga))
        });
    }

    group.finish();
}

fn bench_library_types(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_library_type");
    let path = "E:/Library/Series/Series Vol 3 Ch 12 (Deluxe Edition).cbz";

    for library in LibraryType::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(library), &library, |b, &library| {
            b.iter(|| dispatch(black_box(path), "E:/Library/Series/", "E:/Library/", library))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_all");

    for size in [100usize, 1_000, 10_000] {
        let files = sample_files();
        let entries: Vec<ScanEntry> = (0..size)
            .map(|i| {
                let (path, folder) = files[i % files.len()];
                ScanEntry::new(path, folder, ROOT, LibraryType::Manga)
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &entries, |b, entries| {
            b.iter(|| dispatch_all(black_box(entries), &Options::default()))
        });
    }

    group.finish();
}

fn bench_ordering(c: &mut Criterion) {
    let units: Vec<ChapterOrderingUnit> = (0..1_000)
        .map(|i| match i % 3 {
            0 => ChapterOrderingUnit::new((i % 40) as f32, false, i as i64),
            1 => ChapterOrderingUnit::new(-100_000.0, false, i as i64),
            _ => ChapterOrderingUnit::new(100_000.0, true, i as i64),
        })
        .collect();

    c.bench_function("order_1000", |b| b.iter(|| order(black_box(&units))));
}

criterion_group!(benches, bench_single_file, bench_library_types, bench_batch, bench_ordering);
criterion_main!(benches);
