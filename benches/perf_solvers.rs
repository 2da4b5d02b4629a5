use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use rodcut_dp::{PriceTable, RodInstance, RodSolver, SolverKind};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_instance(rng: &mut StdRng, len: usize) -> RodInstance {
    let prices: Vec<u64> = (1..=len as u64)
        .map(|i| i * 2 + rng.gen_range(0..=i))
        .collect();
    RodInstance::from_parts(len, PriceTable::new(prices)).expect("valid instance")
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = sys.process(get_current_pid().unwrap()) {
        p.memory() / 1024
    } else {
        0
    }
}

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("rod_cutting");
    for &len in &[64usize, 256, 1_024] {
        for kind in SolverKind::ALL {
            let solver = kind.solver();
            group.bench_with_input(BenchmarkId::new(kind.as_str(), len), &len, |b, &len| {
                b.iter_batched(
                    || random_instance(&mut StdRng::seed_from_u64(42), len),
                    |instance| {
                        let result = solver.solve_instance(&instance).expect("solve");
                        criterion::black_box(result.max_profit);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_memory(c: &mut Criterion) {
    let mut group = c.benchmark_group("rod_cutting_rss");
    group.sample_size(10);
    let len = 4_096usize;
    for kind in SolverKind::ALL {
        let solver = kind.solver();
        group.bench_function(format!("{kind}_len_{len}"), |b| {
            b.iter_batched(
                || random_instance(&mut StdRng::seed_from_u64(7), len),
                |instance| {
                    let before = rss_kib();
                    let result = solver.solve_instance(&instance).expect("solve");
                    let after = rss_kib();
                    criterion::black_box(result.max_profit);
                    // record memory delta to stderr to avoid criterion noise
                    eprintln!(
                        "RSS KiB delta ({kind} {len}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solvers, bench_memory);
criterion_main!(benches);
