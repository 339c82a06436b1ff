//! PetSim Headless Simulation Harness
//!
//! Drives the engine on a manual clock with seeded randomness and checks
//! its rules end to end. Runs entirely in-process: no wall-clock waits, no
//! rendering.
//!
//! Usage:
//!   cargo run -p petsim-simtest
//!   cargo run -p petsim-simtest -- --seed 7 --hours 48 -v

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use log::{debug, info};
use petsim_core::persistence::{decode_snapshot, FileStore};
use petsim_core::prelude::*;
use petsim_logic::mood::evaluate_mood;
use petsim_logic::stats::Stat;
use petsim_logic::travel::{arrival_delay_ms, travel_duration_ms, Location};

const START: u64 = 1_700_000_000_000;
const MINUTE_MS: u64 = 60 * 1000;
const HOUR_MS: u64 = 60 * MINUTE_MS;

#[derive(Parser)]
#[command(name = "petsim-simtest")]
#[command(about = "Headless validation harness for the PetSim engine")]
#[command(version)]
struct Cli {
    /// Seed for random events in the long runs
    #[arg(short, long, default_value_t = 42)]
    seed: u64,

    /// Simulated hours for the long runs
    #[arg(long, default_value_t = 24)]
    hours: u64,

    /// Snapshot file for the persistence checks (removed afterwards)
    #[arg(long)]
    save: Option<PathBuf>,

    /// Show every result and raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

impl TestResult {
    fn check(name: &str, passed: bool, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            passed,
            detail: detail.into(),
        }
    }
}

fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(level);
    builder.format_timestamp(None);
    let _ = builder.try_init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let verbose = cli.verbose > 0;
    println!("=== PetSim Simulation Harness ===\n");

    let save_path = cli.save.clone().unwrap_or_else(|| {
        std::env::temp_dir().join(format!("petsim-simtest-{}.json", std::process::id()))
    });
    if let Some(parent) = save_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }

    let mut results = Vec::new();

    // 1. Stat store and mood table
    results.extend(validate_stat_rules());

    // 2. Action guards
    results.extend(validate_guards());

    // 3. Travel and holds
    results.extend(validate_travel());

    // 4. Tick schedule, auto-wake, auto-refill
    results.extend(validate_schedule());

    // 5. Persistence through a real file
    results.extend(validate_persistence(&save_path));

    // 6. Long runs with seeded events
    results.extend(validate_long_runs(cli.seed, cli.hours));

    let _ = std::fs::remove_file(&save_path);

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}

// ── Helpers ─────────────────────────────────────────────────────────────

fn new_sim(clock: &ManualClock, store: impl SnapshotStore + 'static, rng: impl RandomSource + 'static) -> PetSimulation {
    let mut sim = PetSimulation::new(SimConfig::default(), clock.clone(), store).with_random(rng);
    sim.start();
    sim
}

fn quiet_sim(clock: &ManualClock) -> PetSimulation {
    new_sim(clock, MemoryStore::new(), ScriptedRandom::new())
}

fn edit_stats(sim: &mut PetSimulation, f: impl FnOnce(&mut Stats)) {
    let mut stats = sim.stats();
    f(&mut stats);
    sim.set_stats(stats);
}

fn advance(sim: &mut PetSimulation, clock: &ManualClock, ms: u64) {
    clock.advance(ms);
    sim.update();
}

// ── 1. Stat rules ───────────────────────────────────────────────────────

fn validate_stat_rules() -> Vec<TestResult> {
    println!("--- Stat Rules ---");
    let mut results = Vec::new();

    let mut stats = Stats::default();
    for stat in Stat::ALL {
        stats.apply_delta(stat, 1_000.0);
    }
    let all_max = Stat::ALL.iter().all(|s| stats.get(*s) == 100.0);
    for stat in Stat::ALL {
        stats.apply_delta(stat, -1_000.0);
    }
    let all_min = Stat::ALL.iter().all(|s| stats.get(*s) == 0.0);
    results.push(TestResult::check(
        "clamp_extremes",
        all_max && all_min,
        "±1000 deltas clamp to [0, 100]",
    ));

    let mut stats = Stats::default();
    stats.apply_delta(Stat::Happiness, f32::NAN);
    results.push(TestResult::check(
        "clamp_nan",
        stats.in_bounds(),
        format!("NaN delta leaves happiness at {}", stats.happiness),
    ));

    let mood_cases = [
        (PetState::Sleeping, 100.0, 10.0, Mood::Sleeping),
        (PetState::Idle, 100.0, 49.0, Mood::Sick),
        (PetState::Idle, 85.0, 100.0, Mood::VeryHappy),
        (PetState::Idle, 70.0, 100.0, Mood::Happy),
        (PetState::Idle, 50.0, 100.0, Mood::Content),
        (PetState::Idle, 30.0, 100.0, Mood::Sad),
        (PetState::Idle, 15.0, 100.0, Mood::VerySad),
        (PetState::Idle, 14.9, 100.0, Mood::Depressed),
    ];
    let mut mismatches = Vec::new();
    for (state, happiness, health, expected) in mood_cases {
        let stats = Stats {
            happiness,
            health,
            ..Stats::default()
        };
        let got = evaluate_mood(state, &stats);
        if got != expected {
            mismatches.push(format!("{}/{}/{}: {} != {}", state, happiness, health, got, expected));
        }
    }
    results.push(TestResult::check(
        "mood_priority_table",
        mismatches.is_empty(),
        if mismatches.is_empty() {
            format!("{} boundary cases", mood_cases.len())
        } else {
            mismatches.join("; ")
        },
    ));

    results
}

// ── 2. Guards ───────────────────────────────────────────────────────────

fn validate_guards() -> Vec<TestResult> {
    println!("--- Action Guards ---");
    let mut results = Vec::new();
    let clock = ManualClock::new(START);

    let mut sim = quiet_sim(&clock);
    edit_stats(&mut sim, |s| s.hunger = 10.0);
    let before = sim.stats();
    let outcome = sim.feed();
    results.push(TestResult::check(
        "feed_not_hungry",
        outcome == ActionOutcome::Rejected(Rejection::NotHungry) && sim.stats() == before,
        format!("{:?}", outcome),
    ));

    let mut sim = quiet_sim(&clock);
    edit_stats(&mut sim, |s| s.energy = 20.0);
    let outcome = sim.play();
    results.push(TestResult::check(
        "play_too_tired",
        outcome == ActionOutcome::Rejected(Rejection::TooTired),
        format!("{:?}", outcome),
    ));

    let mut sim = quiet_sim(&clock);
    let outcome = sim.medicine();
    results.push(TestResult::check(
        "medicine_not_sick",
        outcome == ActionOutcome::Rejected(Rejection::NotSick),
        format!("{:?}", outcome),
    ));

    let outcome = sim.refill_food_bowl();
    results.push(TestResult::check(
        "refill_already_full",
        outcome == ActionOutcome::Rejected(Rejection::BowlAlreadyFull)
            && sim.last_notice() == Some(Notice::BowlAlreadyFull),
        format!("{:?}", outcome),
    ));

    let notices: Vec<_> = [
        Rejection::Sleeping,
        Rejection::BowlEmpty,
        Rejection::NotHungry,
        Rejection::TooTired,
        Rejection::NotSick,
        Rejection::BowlAlreadyFull,
    ]
    .iter()
    .filter_map(|r| r.notice())
    .map(|n| n.message())
    .collect();
    let mut unique = notices.clone();
    unique.sort_unstable();
    unique.dedup();
    results.push(TestResult::check(
        "rejection_notices_distinct",
        unique.len() == 6 && Rejection::Busy.notice().is_none(),
        format!("{} distinct rejection notices, busy is silent", unique.len()),
    ));

    results
}

// ── 3. Travel ───────────────────────────────────────────────────────────

fn validate_travel() -> Vec<TestResult> {
    println!("--- Travel ---");
    let mut results = Vec::new();

    let cap = travel_duration_ms(0.0, 100.0);
    let to_toy = arrival_delay_ms(Location::Center.position(), Location::Toy.position());
    results.push(TestResult::check(
        "travel_timing",
        cap == 2_000 && to_toy == 1_125,
        format!("cap {}ms, center→toy {}ms", cap, to_toy),
    ));

    let clock = ManualClock::new(START);
    let mut sim = quiet_sim(&clock);
    edit_stats(&mut sim, |s| s.hunger = 50.0);
    let started = sim.feed().travel().is_some();
    let busy = sim.play() == ActionOutcome::Rejected(Rejection::Busy);
    advance(&mut sim, &clock, 500);
    let ate = sim.state() == PetState::Eating && sim.stats().hunger == 20.0 && !sim.food_bowl_full();
    advance(&mut sim, &clock, 2_000);
    let idle = sim.state() == PetState::Idle && !sim.is_busy();
    results.push(TestResult::check(
        "feed_cycle",
        started && busy && ate && idle,
        format!("started={} busy={} ate={} idle={}", started, busy, ate, idle),
    ));

    let mut sim = quiet_sim(&clock);
    edit_stats(&mut sim, |s| {
        s.energy = 60.0;
        s.happiness = 50.0;
    });
    sim.play();
    let mid = sim.position();
    clock.advance(1_125);
    let completed = sim.complete_travel();
    let s = sim.stats();
    results.push(TestResult::check(
        "play_cycle",
        completed == Some(Errand::Play) && s.energy == 40.0 && s.happiness == 75.0,
        format!(
            "start pos {:.1}, energy {:.1}, happiness {:.1}",
            mid, s.energy, s.happiness
        ),
    ));

    results
}

// ── 4. Schedule ─────────────────────────────────────────────────────────

fn validate_schedule() -> Vec<TestResult> {
    println!("--- Schedule ---");
    let mut results = Vec::new();

    let clock = ManualClock::new(START);
    let mut sim = quiet_sim(&clock);
    advance(&mut sim, &clock, HOUR_MS);
    results.push(TestResult::check(
        "ticks_per_hour",
        sim.ticks_run() == 360,
        format!("{} ticks in one hour", sim.ticks_run()),
    ));

    let clock = ManualClock::new(START);
    let mut sim = quiet_sim(&clock);
    let handle = sim.sleep_toggle().travel();
    if let Some(h) = handle {
        clock.set(h.arrives_at);
        sim.update();
    }
    edit_stats(&mut sim, |s| {
        s.energy = 86.0;
        s.sleepiness = 31.0;
    });
    clock.set(START + 10_000);
    sim.update();
    results.push(TestResult::check(
        "auto_wake_threshold",
        sim.state() == PetState::Idle && sim.last_notice() == Some(Notice::WokeUp),
        format!("state after rested tick: {}", sim.state()),
    ));

    let clock = ManualClock::new(START);
    let mut sim = quiet_sim(&clock);
    edit_stats(&mut sim, |s| s.hunger = 50.0);
    sim.feed();
    advance(&mut sim, &clock, 2_500);
    let emptied = !sim.food_bowl_full();
    clock.set(START + 180_000);
    sim.update();
    results.push(TestResult::check(
        "auto_refill",
        emptied && sim.food_bowl_full(),
        "empty bowl refilled at the 3 minute mark",
    ));

    results
}

// ── 5. Persistence ──────────────────────────────────────────────────────

fn validate_persistence(path: &Path) -> Vec<TestResult> {
    println!("--- Persistence ---");
    let mut results = Vec::new();
    let _ = std::fs::remove_file(path);

    let clock = ManualClock::new(START);
    let mut first = new_sim(&clock, FileStore::new(path), ScriptedRandom::new());
    edit_stats(&mut first, |s| {
        s.hunger = 60.0;
        s.happiness = 42.0;
    });
    first.feed();
    advance(&mut first, &clock, 2_500);
    let saved = first.snapshot();
    drop(first);

    let written = std::fs::read_to_string(path)
        .ok()
        .and_then(|doc| decode_snapshot(&doc).ok());
    results.push(TestResult::check(
        "snapshot_written",
        written.is_some(),
        format!("{}", path.display()),
    ));
    if let Some(doc) = &written {
        debug!("saved document: {}", serde_json::to_string(doc).unwrap_or_default());
    }

    clock.advance(23 * HOUR_MS);
    let second = new_sim(&clock, FileStore::new(path), ScriptedRandom::new());
    let restored = second.stats() == saved.stats && second.food_bowl_full() == saved.food_bowl_full_or_default();
    results.push(TestResult::check(
        "restore_within_day",
        restored,
        format!("hunger {:.1}, bowl full {}", second.stats().hunger, second.food_bowl_full()),
    ));
    drop(second);

    clock.advance(25 * HOUR_MS);
    let mut third = new_sim(&clock, FileStore::new(path), ScriptedRandom::new());
    results.push(TestResult::check(
        "stale_snapshot_ignored",
        third.stats() == Stats::default(),
        "a day-old save starts a fresh pet",
    ));

    third.reset();
    results.push(TestResult::check(
        "reset_clears_file",
        !path.exists(),
        "snapshot file removed",
    ));

    results
}

// ── 6. Long runs ────────────────────────────────────────────────────────

/// One caretaker decision per simulated minute.
fn care_for(sim: &mut PetSimulation) -> Option<ActionOutcome> {
    if sim.is_busy() || sim.state() == PetState::Sleeping {
        return None;
    }
    let s = sim.stats();
    let action = if !sim.food_bowl_full() {
        Action::RefillFoodBowl
    } else if s.health <= 80.0 {
        Action::Medicine
    } else if s.hunger >= 40.0 {
        Action::Feed
    } else if s.sleepiness >= 70.0 || s.energy < 25.0 {
        Action::SleepToggle
    } else if s.hygiene < 50.0 {
        Action::Clean
    } else if s.happiness < 60.0 {
        if s.energy >= 40.0 {
            Action::Play
        } else {
            Action::Pet
        }
    } else {
        return None;
    };
    Some(sim.perform(action))
}

struct RunSummary {
    stats: Stats,
    mood: Mood,
    out_of_bounds: usize,
    actions: usize,
    rejected: usize,
}

fn run_for(seed: u64, hours: u64, caretaker: bool) -> RunSummary {
    let clock = ManualClock::new(START);
    let mut sim = new_sim(&clock, MemoryStore::new(), SeededRandom::new(seed));
    let mut summary = RunSummary {
        stats: sim.stats(),
        mood: sim.mood(),
        out_of_bounds: 0,
        actions: 0,
        rejected: 0,
    };

    for _ in 0..hours * 60 {
        advance(&mut sim, &clock, MINUTE_MS);
        if !sim.stats().in_bounds() {
            summary.out_of_bounds += 1;
        }
        if caretaker {
            if let Some(outcome) = care_for(&mut sim) {
                summary.actions += 1;
                if outcome.is_rejected() {
                    summary.rejected += 1;
                }
            }
        }
    }

    summary.stats = sim.stats();
    summary.mood = sim.mood();
    info!(
        "{} run: {} ticks, mood {}, {} actions",
        if caretaker { "cared" } else { "neglected" },
        sim.ticks_run(),
        summary.mood,
        summary.actions
    );
    summary
}

fn validate_long_runs(seed: u64, hours: u64) -> Vec<TestResult> {
    println!("--- Long Runs ({}h, seed {}) ---", hours, seed);
    let mut results = Vec::new();

    let cared = run_for(seed, hours, true);
    let neglected = run_for(seed, hours, false);

    results.push(TestResult::check(
        "bounds_hold_over_run",
        cared.out_of_bounds == 0 && neglected.out_of_bounds == 0,
        format!(
            "{} + {} out-of-bounds samples",
            cared.out_of_bounds, neglected.out_of_bounds
        ),
    ));

    results.push(TestResult::check(
        "care_beats_neglect",
        hours == 0
            || (cared.stats.health > neglected.stats.health
                && cared.stats.happiness > neglected.stats.happiness),
        format!(
            "cared {} (hap {:.0}, hea {:.0}, {} actions, {} rejected) vs neglected {} (hap {:.0}, hea {:.0})",
            cared.mood,
            cared.stats.happiness,
            cared.stats.health,
            cared.actions,
            cared.rejected,
            neglected.mood,
            neglected.stats.happiness,
            neglected.stats.health
        ),
    ));

    let again = run_for(seed, hours, true);
    results.push(TestResult::check(
        "seed_reproducible",
        again.stats == cared.stats && again.actions == cared.actions,
        "same seed, same pet",
    ));

    results
}
