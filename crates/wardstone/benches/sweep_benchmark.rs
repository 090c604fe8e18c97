//! # Sweep Performance Benchmark
//!
//! The sweep visits every protected player each run; on a crowded spawn
//! (mass login after a restart) that can be hundreds of records inside
//! one tick budget.
//!
//! Run with: `cargo bench --package wardstone`

// Benchmarks don't need docs
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use wardstone::host::MockWorld;
use wardstone::shared::{PlayerId, Vec3};
use wardstone::{ProtectionConfig, SpawnProtection};

/// Mass-login scale: everyone spawned at once.
const PLAYER_COUNT: u64 = 1_000;

/// A world and service with every player baselined and motionless.
fn populated() -> (SpawnProtection, MockWorld) {
    let mut service = SpawnProtection::new(ProtectionConfig::default());
    let mut world = MockWorld::new();

    for i in 0..PLAYER_COUNT {
        let player = PlayerId(i);
        let position = Vec3::new(i as f32 * 2.0, 65.0, 0.0);
        world.add_player(player, position, Vec3::new(0.0, 0.0, 1.0));
        service.capture_baseline(&world, player, i % 2 == 0, 4);
    }

    (service, world)
}

/// Steady state: nobody moves, every sweep refreshes every record.
fn bench_sweep_motionless(c: &mut Criterion) {
    c.bench_function("sweep_1000_motionless", |b| {
        let (mut service, mut world) = populated();
        let mut now = 4;
        b.iter(|| {
            now += 4;
            service.sweep(&mut world, black_box(now));
            service.protected_count()
        });
    });
}

/// Worst case for verdicts: every record is past its window and every
/// player is sneaking, so one sweep evicts the entire registry.
fn bench_sweep_mass_eviction(c: &mut Criterion) {
    c.bench_function("sweep_1000_mass_eviction", |b| {
        b.iter_batched(
            || {
                let (service, mut world) = populated();
                for i in 0..PLAYER_COUNT {
                    world.player_mut(PlayerId(i)).unwrap().sneaking = true;
                }
                (service, world)
            },
            |(mut service, mut world)| {
                service.sweep(&mut world, black_box(10_000));
                service.protected_count()
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_sweep_motionless, bench_sweep_mass_eviction);
criterion_main!(benches);
