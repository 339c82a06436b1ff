//! PetSim Core - Virtual Pet Simulation Engine
//!
//! An ECS-based simulation of a single virtual pet whose needs decay over
//! time and who responds to player actions.
//!
//! # Architecture
//!
//! The simulation uses an Entity Component System (ECS) architecture via `hecs`:
//! - **Entities**: The pet and its food bowl
//! - **Components**: Pure data attached to entities (Stats, Activity, Position, Travel, ...)
//! - **Systems**: Logic that queries and updates components
//!
//! Rules that need no world (guards, mood, decay, events) live in
//! `petsim-logic`. Time, randomness, storage and presentation are injected,
//! so the whole engine runs deterministically under test.
//!
//! # Example
//!
//! ```rust,no_run
//! use petsim_core::prelude::*;
//!
//! let mut sim = PetSimulation::new(
//!     SimConfig::default(),
//!     SystemClock,
//!     FileStore::new("pet.json"),
//! );
//! sim.start();
//! sim.feed();
//!
//! loop {
//!     sim.update();
//!     std::thread::sleep(std::time::Duration::from_millis(100));
//! }
//! ```

pub mod clock;
pub mod components;
pub mod config;
pub mod engine;
pub mod persistence;
pub mod presenter;
pub mod rng;
pub mod scheduler;
pub mod systems;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::clock::{Clock, ManualClock, SystemClock};
    pub use crate::components::{PetState, Stats};
    pub use crate::config::SimConfig;
    pub use crate::engine::{ActionOutcome, PetSimulation, TravelHandle};
    pub use crate::persistence::{FileStore, MemoryStore, PersistedSnapshot, SnapshotStore};
    pub use crate::presenter::{Frame, NullPresenter, Presenter, RecordingPresenter};
    pub use crate::rng::{RandomSource, ScriptedRandom, SeededRandom};
    pub use petsim_logic::actions::{Action, Errand, Rejection};
    pub use petsim_logic::mood::Mood;
    pub use petsim_logic::notice::{Cue, Notice};
}
