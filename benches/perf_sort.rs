use algo_drills::bubble_sort;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn random_values(rng: &mut StdRng, len: usize) -> Vec<i32> {
    (0..len).map(|_| rng.gen_range(-10_000..10_000)).collect()
}

fn rss_kib() -> u64 {
    let mut sys = System::new();
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(p) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        p.memory() / 1024
    } else {
        0
    }
}

fn bench_bubble_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("bubble_sort");
    for &len in &[100usize, 500, 2_000] {
        group.bench_function(format!("random_{len}"), |b| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(42);
                    random_values(&mut rng, len)
                },
                |mut v| {
                    let before = rss_kib();
                    let report = bubble_sort(&mut v);
                    let after = rss_kib();
                    criterion::black_box(report);
                    // in-place sort; report RSS delta on stderr to keep criterion output clean
                    eprintln!(
                        "RSS KiB delta (bubble {len}): {}",
                        after.saturating_sub(before)
                    );
                },
                BatchSize::PerIteration,
            )
        });
        group.bench_function(format!("presorted_{len}"), |b| {
            b.iter_batched(
                || (0..len as i32).collect::<Vec<_>>(),
                |mut v| criterion::black_box(bubble_sort(&mut v)),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_bubble_sort);
criterion_main!(benches);
