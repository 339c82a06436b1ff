//! Simulation engine - main entry point for running the pet

use hecs::{Entity, World};
use log::{debug, info};
use petsim_logic::actions::{plan_action, wake_effect, Action, ActionEffect, ActionPlan, Errand, GuardContext, Rejection};
use petsim_logic::appearance::{pet_image, time_of_day};
use petsim_logic::events::{EventContext, EventOutcome};
use petsim_logic::mood::{evaluate_mood, Mood};
use petsim_logic::notice::{Cue, Notice};
use petsim_logic::travel::Location;

use crate::clock::Clock;
use crate::components::{PetState, Stats};
use crate::config::SimConfig;
use crate::persistence::{clear_snapshot, load_snapshot, save_snapshot, PersistedSnapshot, SnapshotStore};
use crate::presenter::{Frame, NullPresenter, Presenter};
use crate::rng::{RandomSource, SeededRandom};
use crate::scheduler::{earliest_due, Job, RepeatingTask};
use crate::systems::*;

/// A travel-bearing action that has started but not yet arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TravelHandle {
    pub errand: Errand,
    pub destination: Location,
    /// Clock time at which the errand's effect phase runs
    pub arrives_at: u64,
}

/// Result of invoking an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Effects applied immediately
    Applied,
    /// Travel started; effects apply on arrival
    Started(TravelHandle),
    /// A guard failed; nothing changed
    Rejected(Rejection),
}

impl ActionOutcome {
    pub fn is_rejected(&self) -> bool {
        matches!(self, ActionOutcome::Rejected(_))
    }

    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            ActionOutcome::Rejected(r) => Some(*r),
            _ => None,
        }
    }

    pub fn travel(&self) -> Option<TravelHandle> {
        match self {
            ActionOutcome::Started(h) => Some(*h),
            _ => None,
        }
    }
}

/// Main simulation engine
///
/// Owns the ECS world (pet and food bowl entities), the repeating tasks,
/// and the injected clock, random source, snapshot store and presenter.
/// Nothing happens on its own: call [`update`](Self::update) to process
/// whatever has fallen due on the clock.
pub struct PetSimulation {
    /// ECS world containing the pet and the food bowl
    pub world: World,
    pet: Entity,
    bowl: Entity,
    config: SimConfig,
    clock: Box<dyn Clock>,
    rng: Box<dyn RandomSource>,
    store: Box<dyn SnapshotStore>,
    presenter: Box<dyn Presenter>,
    tick: RepeatingTask,
    auto_refill: RepeatingTask,
    ticks_run: u64,
    last_notice: Option<Notice>,
}

impl PetSimulation {
    /// Create a simulation with a fresh pet.
    ///
    /// Randomness is seeded from entropy and nothing is presented until
    /// [`with_random`](Self::with_random) / [`with_presenter`](Self::with_presenter)
    /// replace the defaults.
    pub fn new(config: SimConfig, clock: impl Clock + 'static, store: impl SnapshotStore + 'static) -> Self {
        let now = clock.now_ms();
        let mut world = World::new();
        let pet = spawn_pet(&mut world, now);
        let bowl = spawn_food_bowl(&mut world);

        Self {
            world,
            pet,
            bowl,
            tick: RepeatingTask::new(config.tick_period_ms, now),
            auto_refill: RepeatingTask::new(config.auto_refill_period_ms, now),
            config,
            clock: Box::new(clock),
            rng: Box::new(SeededRandom::from_entropy()),
            store: Box::new(store),
            presenter: Box::new(NullPresenter),
            ticks_run: 0,
            last_notice: None,
        }
    }

    pub fn with_random(mut self, rng: impl RandomSource + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn with_presenter(mut self, presenter: impl Presenter + 'static) -> Self {
        self.presenter = Box::new(presenter);
        self
    }

    /// Restore the saved pet if it is fresh, render, greet the player and
    /// schedule the repeating tasks from now.
    pub fn start(&mut self) {
        let now = self.clock.now_ms();
        match load_snapshot(self.store.as_ref(), now, self.config.snapshot_max_age_ms) {
            Some(snapshot) => {
                self.restore(&snapshot);
                info!("restored saved pet ({}, {})", self.state(), self.mood());
            }
            None => info!("starting with a new pet"),
        }

        self.tick = RepeatingTask::new(self.config.tick_period_ms, now);
        self.auto_refill = RepeatingTask::new(self.config.auto_refill_period_ms, now);

        self.refresh();
        self.surface(Notice::Welcome);
    }

    /// Load entrypoint: overwrite live state from a snapshot.
    ///
    /// Eating, playing and walking cannot resume without their deadlines,
    /// so they come back as idle. Does not render or persist.
    pub fn restore(&mut self, snapshot: &PersistedSnapshot) {
        let now = self.clock.now_ms();
        reset_pet(&mut self.world, self.pet, now);
        replace_stats(&mut self.world, self.pet, snapshot.stats);
        set_state(&mut self.world, self.pet, snapshot.state.resumable(), now);
        set_position(&mut self.world, self.pet, snapshot.position_or_default());
        set_bowl(&mut self.world, self.bowl, snapshot.food_bowl_full_or_default());
    }

    // ========================================================================
    // Time
    // ========================================================================

    /// Process everything that has fallen due on the clock.
    pub fn update(&mut self) {
        let now = self.clock.now_ms();
        self.process_until(now);
    }

    /// Run due jobs in time order, up to and including `limit_ms`.
    fn process_until(&mut self, limit_ms: u64) {
        while let Some((at, job)) = earliest_due(self.deadlines(), limit_ms) {
            match job {
                Job::TravelArrival => self.run_arrival(at),
                Job::HoldEnd => self.run_hold_end(at),
                Job::Tick => {
                    self.tick.advance();
                    self.run_tick(at);
                }
                Job::AutoRefill => {
                    self.auto_refill.advance();
                    self.run_auto_refill();
                }
            }
        }
    }

    fn deadlines(&self) -> Vec<(u64, Job)> {
        let mut deadlines = vec![
            (self.tick.next_due_ms(), Job::Tick),
            (self.auto_refill.next_due_ms(), Job::AutoRefill),
        ];
        if let Some(travel) = pending_travel(&self.world, self.pet) {
            deadlines.push((travel.arrives_at, Job::TravelArrival));
        }
        if let Some(hold) = pending_hold(&self.world, self.pet) {
            deadlines.push((hold.ends_at, Job::HoldEnd));
        }
        deadlines
    }

    /// Apply the pending errand if its arrival time has passed.
    ///
    /// Work due before the arrival runs first. Returns the completed errand.
    pub fn complete_travel(&mut self) -> Option<Errand> {
        let travel = pending_travel(&self.world, self.pet)?;
        if travel.arrives_at > self.clock.now_ms() {
            return None;
        }
        self.process_until(travel.arrives_at);
        Some(travel.errand)
    }

    fn run_tick(&mut self, at: u64) {
        self.ticks_run += 1;

        let reports = needs_system(&mut self.world);
        for (_, report) in &reports {
            debug!("tick {} at {}: {:?}", self.ticks_run, at, report);
        }
        if reports.iter().any(|(_, r)| r.should_wake) {
            info!("pet is fully rested and wakes up");
            self.wake_transition(at);
        }

        let stats = self.stats();
        let ctx = EventContext {
            state: self.state(),
            energy: stats.energy,
            bowl_full: self.food_bowl_full(),
        };
        if let Some((_, outcome)) =
            roll_random_event(self.rng.as_mut(), self.config.random_event_probability, &ctx)
        {
            match outcome {
                EventOutcome::Nothing => {}
                EventOutcome::Stats { delta, notice } => {
                    apply_stat_delta(&mut self.world, self.pet, &delta);
                    self.surface(notice);
                }
                EventOutcome::RefillBowl { notice } => {
                    self.refill_bowl();
                    self.surface(notice);
                }
            }
        }

        self.refresh();
    }

    fn run_auto_refill(&mut self) {
        if self.food_bowl_full() {
            return;
        }
        debug!("auto-refilling the food bowl");
        self.refill_bowl();
        self.refresh();
    }

    fn run_arrival(&mut self, at: u64) {
        if let Some(arrival) = complete_arrival(&mut self.world, self.pet, self.bowl, at) {
            debug!("arrived for {:?} at {}", arrival.errand, at);
            self.present_effect(&arrival.effect);
            self.refresh();
        }
    }

    fn run_hold_end(&mut self, at: u64) {
        if let Some(errand) = end_hold(&mut self.world, self.pet, at) {
            debug!("finished {:?} at {}", errand, at);
            self.refresh();
        }
    }

    // ========================================================================
    // Actions
    // ========================================================================

    pub fn feed(&mut self) -> ActionOutcome {
        self.perform(Action::Feed)
    }

    pub fn play(&mut self) -> ActionOutcome {
        self.perform(Action::Play)
    }

    /// Walk to bed, or wake up if already asleep.
    pub fn sleep_toggle(&mut self) -> ActionOutcome {
        self.perform(Action::SleepToggle)
    }

    pub fn pet(&mut self) -> ActionOutcome {
        self.perform(Action::Pet)
    }

    pub fn clean(&mut self) -> ActionOutcome {
        self.perform(Action::Clean)
    }

    pub fn treat(&mut self) -> ActionOutcome {
        self.perform(Action::Treat)
    }

    pub fn medicine(&mut self) -> ActionOutcome {
        self.perform(Action::Medicine)
    }

    pub fn refill_food_bowl(&mut self) -> ActionOutcome {
        self.perform(Action::RefillFoodBowl)
    }

    /// Evaluate an action's guards at the current clock time and carry it out.
    pub fn perform(&mut self, action: Action) -> ActionOutcome {
        self.update();
        let now = self.clock.now_ms();

        let ctx = GuardContext {
            state: self.state(),
            stats: self.stats(),
            bowl_full: self.food_bowl_full(),
            in_flight: self.is_busy(),
        };

        let plan = match plan_action(action, &ctx) {
            Ok(plan) => plan,
            Err(rejection) => {
                debug!("{} rejected: {:?}", action.name(), rejection);
                if let Some(notice) = rejection.notice() {
                    self.surface(notice);
                }
                return ActionOutcome::Rejected(rejection);
            }
        };

        let outcome = match plan {
            ActionPlan::Travel(errand) => match begin_travel(&mut self.world, self.pet, errand, now) {
                Some(travel) => {
                    debug!("{} started: walking to {:?}", action.name(), errand.destination());
                    ActionOutcome::Started(TravelHandle {
                        errand,
                        destination: errand.destination(),
                        arrives_at: travel.arrives_at,
                    })
                }
                None => return ActionOutcome::Rejected(Rejection::Busy),
            },
            ActionPlan::Wake => {
                self.wake_transition(now);
                ActionOutcome::Applied
            }
            ActionPlan::Immediate(effect) => {
                apply_stat_delta(&mut self.world, self.pet, &effect.delta);
                self.present_effect(&effect);
                ActionOutcome::Applied
            }
            ActionPlan::RefillBowl => {
                self.refill_bowl();
                ActionOutcome::Applied
            }
        };

        self.refresh();
        outcome
    }

    /// Wake the pet if it is asleep. Safe to call at any time.
    pub fn wake(&mut self) -> bool {
        self.update();
        let now = self.clock.now_ms();
        let woke = self.wake_transition(now);
        if woke {
            self.refresh();
        }
        woke
    }

    /// Restore construction-time defaults and delete the saved snapshot.
    ///
    /// Pending travel and holds are dropped; the repeating tasks keep their
    /// schedule.
    pub fn reset(&mut self) {
        let now = self.clock.now_ms();
        reset_pet(&mut self.world, self.pet, now);
        set_bowl(&mut self.world, self.bowl, true);
        info!("pet reset to defaults");

        self.surface(Notice::FreshStart);
        let frame = self.frame();
        self.presenter.render(&frame);
        clear_snapshot(self.store.as_ref());
    }

    fn wake_transition(&mut self, at: u64) -> bool {
        let woke = wake_pet(&mut self.world, self.pet, at);
        if woke {
            self.surface(wake_effect().notice);
        }
        woke
    }

    fn refill_bowl(&mut self) {
        if set_bowl(&mut self.world, self.bowl, true) {
            self.presenter.cue(Cue::Refilling);
            self.surface(Notice::BowlRefilled);
        }
    }

    fn present_effect(&mut self, effect: &ActionEffect) {
        self.surface(effect.notice);
        if let Some(cue) = effect.cue {
            self.presenter.cue(cue);
        }
    }

    fn surface(&mut self, notice: Notice) {
        self.last_notice = Some(notice);
        self.presenter.surface(notice, notice.duration_ms());
    }

    /// Render and persist the current state.
    fn refresh(&mut self) {
        let frame = self.frame();
        self.presenter.render(&frame);
        save_snapshot(self.store.as_ref(), &self.snapshot());
    }

    // ========================================================================
    // Queries
    // ========================================================================

    pub fn stats(&self) -> Stats {
        pet_stats(&self.world, self.pet)
    }

    pub fn state(&self) -> PetState {
        pet_state(&self.world, self.pet)
    }

    pub fn mood(&self) -> Mood {
        evaluate_mood(self.state(), &self.stats())
    }

    pub fn food_bowl_full(&self) -> bool {
        bowl_is_full(&self.world, self.bowl)
    }

    /// Current horizontal position, interpolated while walking
    pub fn position(&self) -> f32 {
        match pending_travel(&self.world, self.pet) {
            Some(travel) => travel.position_at(self.clock.now_ms()),
            None => resting_position(&self.world, self.pet),
        }
    }

    /// A travel or hold phase is pending
    pub fn is_busy(&self) -> bool {
        is_in_flight(&self.world, self.pet)
    }

    pub fn pending_travel(&self) -> Option<TravelHandle> {
        pending_travel(&self.world, self.pet).map(|t| TravelHandle {
            errand: t.errand,
            destination: t.errand.destination(),
            arrives_at: t.arrives_at,
        })
    }

    /// Copy of the state that gets persisted
    pub fn snapshot(&self) -> PersistedSnapshot {
        let position = match pending_travel(&self.world, self.pet) {
            Some(travel) => travel.to,
            None => resting_position(&self.world, self.pet),
        };
        PersistedSnapshot {
            stats: self.stats(),
            state: self.state(),
            mood: Some(self.mood()),
            position: Some(position),
            food_bowl_full: Some(self.food_bowl_full()),
            timestamp: Some(self.clock.now_ms()),
        }
    }

    pub fn frame(&self) -> Frame {
        let stats = self.stats();
        let state = self.state();
        Frame {
            stats,
            state,
            mood: evaluate_mood(state, &stats),
            food_bowl_full: self.food_bowl_full(),
            position: self.position(),
            image: pet_image(state, stats.happiness),
            time_of_day: time_of_day(self.clock.hour_of_day()),
        }
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.last_notice
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Number of passive ticks processed so far
    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }

    pub fn next_tick_ms(&self) -> u64 {
        self.tick.next_due_ms()
    }

    /// Overwrite stats directly (clamped). For scenario setup.
    pub fn set_stats(&mut self, stats: Stats) {
        replace_stats(&mut self.world, self.pet, stats);
    }
}
