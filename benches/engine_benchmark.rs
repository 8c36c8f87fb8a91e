/*!
 * Scheduler Engine Benchmarks
 *
 * Measures dispatch cost per algorithm as the snapshot grows. SRJF and LRJF
 * step one time unit at a time, so their cost tracks total burst time.
 */

use cpu_sched_sim::{Algorithm, ProcessRecord, SchedulerEngine, TimeQuantum};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Deterministic snapshot with staggered arrivals and mixed bursts
fn snapshot(n: u32) -> Vec<ProcessRecord> {
    (1..=n)
        .map(|pid| {
            let i = u64::from(pid);
            ProcessRecord::new(pid, (i * 7) % 23, 1 + (i * 13) % 17, (pid % 5) as i32)
        })
        .collect()
}

/// Benchmark: every algorithm over growing snapshots
fn bench_algorithms(c: &mut Criterion) {
    let engine = SchedulerEngine::new().with_quantum(TimeQuantum::new(4).unwrap());

    for algorithm in Algorithm::ALL {
        let mut group = c.benchmark_group(format!("engine/{}", algorithm.as_str()));

        for size in [8u32, 64, 256].iter() {
            let processes = snapshot(*size);
            group.bench_with_input(BenchmarkId::from_parameter(size), &processes, |b, p| {
                b.iter(|| black_box(engine.simulate(black_box(p), algorithm)))
            });
        }

        group.finish();
    }
}

/// Benchmark: Round Robin cost against quantum size
fn bench_round_robin_quantum(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine/round_robin_quantum");
    let processes = snapshot(128);

    for quantum in [1i64, 2, 8, 32].iter() {
        let engine = SchedulerEngine::new().with_quantum(TimeQuantum::new(*quantum).unwrap());
        group.bench_with_input(BenchmarkId::from_parameter(quantum), &processes, |b, p| {
            b.iter(|| black_box(engine.simulate(black_box(p), Algorithm::RoundRobin)))
        });
    }

    group.finish();
}

/// Benchmark: simulate + metrics for all algorithms at once
fn bench_compare(c: &mut Criterion) {
    let engine = SchedulerEngine::new().with_quantum(TimeQuantum::new(4).unwrap());
    let processes = snapshot(64);

    c.bench_function("engine/compare_all", |b| {
        b.iter(|| black_box(engine.compare(black_box(&processes))))
    });
}

criterion_group!(
    benches,
    bench_algorithms,
    bench_round_robin_quantum,
    bench_compare
);
criterion_main!(benches);
