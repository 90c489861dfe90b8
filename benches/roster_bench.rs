//! Benchmarks for rosterdb store and persistence operations

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use rosterdb::{parse_grades, persist, RosterStore, StudentRecord};

fn populated_store(count: usize) -> RosterStore {
    let mut store = RosterStore::new();
    for i in 0..count {
        store
            .add(StudentRecord::new(
                format!("s{:05}", i),
                format!("Student {}", i),
                18 + (i % 10) as u32,
                vec![70.0, 80.5, 90.0],
            ))
            .unwrap();
    }
    store
}

fn roster_benchmarks(c: &mut Criterion) {
    c.bench_function("store_add_1k", |b| {
        b.iter_batched(
            RosterStore::new,
            |mut store| {
                for i in 0..1_000 {
                    store
                        .add(StudentRecord::new(
                            format!("s{:05}", i),
                            "Student",
                            20,
                            vec![80.0],
                        ))
                        .unwrap();
                }
                store
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("parse_grades_mixed", |b| {
        b.iter(|| parse_grades("[80, 90.5; 85, seventy, 100]"))
    });

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bench.csv");
    let store = populated_store(1_000);

    c.bench_function("save_1k", |b| {
        b.iter(|| persist::save(store.iter(), &path).unwrap())
    });

    persist::save(store.iter(), &path).unwrap();
    c.bench_function("load_1k", |b| b.iter(|| persist::load(&path).unwrap()));
}

criterion_group!(benches, roster_benchmarks);
criterion_main!(benches);
