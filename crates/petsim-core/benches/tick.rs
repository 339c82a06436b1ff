use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use petsim_core::prelude::*;
use petsim_logic::needs::passive_tick;

const DAY_MS: u64 = 24 * 60 * 60 * 1000;

fn bench_passive_tick(c: &mut Criterion) {
    c.bench_function("passive_tick", |b| {
        let mut stats = Stats {
            hunger: 65.0,
            sleepiness: 75.0,
            hygiene: 35.0,
            health: 55.0,
            ..Stats::default()
        };
        b.iter(|| passive_tick(black_box(&mut stats), black_box(PetState::Idle)))
    });
}

fn bench_simulated_day(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine");
    group.sample_size(20);

    // 8640 ticks plus 480 refill checks through the full engine path.
    group.bench_function("one_day_of_ticks", |b| {
        b.iter_batched(
            || {
                let clock = ManualClock::new(0);
                let mut sim = PetSimulation::new(SimConfig::default(), clock.clone(), MemoryStore::new())
                    .with_random(SeededRandom::new(0xBEEF));
                sim.start();
                (sim, clock)
            },
            |(mut sim, clock)| {
                clock.advance(DAY_MS);
                sim.update();
                black_box(sim.stats())
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_passive_tick, bench_simulated_day);
criterion_main!(benches);
