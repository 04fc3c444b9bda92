/*!
 * Discipline Benchmarks
 *
 * Compare RCU and reader/writer lock sections, uncontended and under short
 * fixed-iteration harness runs
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use lockperf::harness::run;
use lockperf::{Discipline, Ledger, RcuLock, ReadSection, RunConfig, RunMode, RwCell, WriteSection};

fn write_once<D: Discipline<Ledger>>(discipline: &D) {
    let retired = {
        let mut section = discipline.write_lock();
        let next = section.current().map_or(1, |v| v + 1);
        section.publish(Box::new(next))
    };
    if let Some(old) = retired {
        discipline.synchronize(old);
    }
}

fn bench_uncontended_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncontended_read");

    let rcu = RcuLock::with_ledger(Ledger::default());
    write_once(&rcu);
    group.bench_function("rculock", |b| {
        b.iter(|| black_box(rcu.read_lock().current()));
    });

    let rw = RwCell::with_ledger(Ledger::default());
    write_once(&rw);
    group.bench_function("rwlock", |b| {
        b.iter(|| black_box(rw.read_lock().current()));
    });

    group.finish();
}

fn bench_uncontended_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("uncontended_write");

    let rcu = RcuLock::with_ledger(Ledger::default());
    group.bench_function("rculock", |b| b.iter(|| write_once(&rcu)));

    let rw = RwCell::with_ledger(Ledger::default());
    group.bench_function("rwlock", |b| b.iter(|| write_once(&rw)));

    group.finish();
}

fn bench_fixed_runs(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_run");
    group.sample_size(10);

    for threads in [2usize, 4, 8] {
        let config = RunConfig::new(threads, threads / 2, RunMode::Fixed { iterations: 1_000 })
            .expect("valid benchmark config");

        group.bench_with_input(BenchmarkId::new("rculock", threads), &config, |b, config| {
            b.iter(|| run::<RcuLock<Ledger>>(config).expect("rcu run"));
        });

        group.bench_with_input(BenchmarkId::new("rwlock", threads), &config, |b, config| {
            b.iter(|| run::<RwCell<Ledger>>(config).expect("rwlock run"));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_uncontended_read,
    bench_uncontended_write,
    bench_fixed_runs
);
criterion_main!(benches);
