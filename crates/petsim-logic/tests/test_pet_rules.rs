//! Integration tests for the pure pet rules.
//!
//! Exercises: plan_action → Stats::apply → passive_tick → evaluate_mood
//!
//! All tests are pure logic: no clock, no world, no storage.

use petsim_logic::actions::{plan_action, wake_effect, Action, ActionPlan, Errand, GuardContext, Rejection};
use petsim_logic::appearance::{pet_image, PetImage};
use petsim_logic::events::{resolve_event, EventContext, EventOutcome, CATALOG};
use petsim_logic::mood::{evaluate_mood, Mood};
use petsim_logic::needs::passive_tick;
use petsim_logic::state::PetState;
use petsim_logic::stats::Stats;

// ── Helpers ────────────────────────────────────────────────────────────

fn ctx(state: PetState, stats: Stats) -> GuardContext {
    GuardContext {
        state,
        stats,
        bowl_full: true,
        in_flight: false,
    }
}

/// Carry out an action the way the engine would, skipping travel time.
fn act(state: &mut PetState, stats: &mut Stats, action: Action) -> Result<(), Rejection> {
    match plan_action(action, &ctx(*state, *stats))? {
        ActionPlan::Travel(errand) => {
            stats.apply(&errand.effect().delta);
            *state = match errand {
                Errand::Sleep => PetState::Sleeping,
                _ => PetState::Idle,
            };
        }
        ActionPlan::Wake => {
            stats.apply(&wake_effect().delta);
            *state = PetState::Idle;
        }
        ActionPlan::Immediate(effect) => stats.apply(&effect.delta),
        ActionPlan::RefillBowl => {}
    }
    Ok(())
}

// ── Day in the life ────────────────────────────────────────────────────

#[test]
fn an_hour_of_neglect_then_recovery() {
    let mut state = PetState::Idle;
    let mut stats = Stats::default();

    for _ in 0..360 {
        passive_tick(&mut stats, state);
    }
    assert!(stats.in_bounds());
    assert!(stats.hunger > 70.0);
    assert!(matches!(evaluate_mood(state, &stats), Mood::Sick | Mood::Depressed));

    act(&mut state, &mut stats, Action::Feed).unwrap();
    act(&mut state, &mut stats, Action::Feed).unwrap();
    act(&mut state, &mut stats, Action::Clean).unwrap();
    act(&mut state, &mut stats, Action::Clean).unwrap();
    while stats.health <= 80.0 {
        act(&mut state, &mut stats, Action::Medicine).unwrap();
    }
    for _ in 0..5 {
        act(&mut state, &mut stats, Action::Treat).unwrap();
    }

    assert!(stats.in_bounds());
    assert!(stats.health > 80.0);
    assert_eq!(evaluate_mood(state, &stats), Mood::VeryHappy);
    assert_eq!(pet_image(state, stats.happiness), PetImage::Happy);
}

#[test]
fn a_night_of_sleep_ends_in_auto_wake() {
    let mut state = PetState::Idle;
    let mut stats = Stats {
        energy: 20.0,
        sleepiness: 90.0,
        ..Stats::default()
    };

    act(&mut state, &mut stats, Action::SleepToggle).unwrap();
    assert_eq!(state, PetState::Sleeping);
    assert_eq!(
        act(&mut state, &mut stats, Action::Pet),
        Err(Rejection::Sleeping)
    );

    let mut ticks = 0;
    loop {
        ticks += 1;
        let report = passive_tick(&mut stats, state);
        if report.should_wake {
            stats.apply(&wake_effect().delta);
            state = PetState::Idle;
            break;
        }
        assert!(ticks < 100, "never woke: {:?}", stats);
    }

    // energy climbs 9.2 per tick from 20, so it takes nine ticks to reach 95.
    assert_eq!(ticks, 9);
    assert_eq!(state, PetState::Idle);
    assert_eq!(stats.energy, 100.0);
}

// ── Random events against every state ──────────────────────────────────

#[test]
fn only_affection_and_energy_reach_a_sleeping_pet() {
    let asleep = EventContext {
        state: PetState::Sleeping,
        energy: 80.0,
        bowl_full: false,
    };
    let fired: Vec<_> = CATALOG
        .iter()
        .filter(|e| resolve_event(**e, &asleep, true) != EventOutcome::Nothing)
        .collect();
    assert_eq!(fired.len(), 2);
}

#[test]
fn every_event_can_fire_for_an_awake_pet() {
    let awake = EventContext {
        state: PetState::Idle,
        energy: 80.0,
        bowl_full: false,
    };
    for event in CATALOG {
        assert_ne!(resolve_event(event, &awake, true), EventOutcome::Nothing, "{:?}", event);
    }
}
