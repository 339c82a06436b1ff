//! Pure simulation logic for PetSim.
//!
//! This crate contains the pet rules that do not depend on a clock or on
//! storage. Functions take plain data and return results, so the engine and
//! the headless harness share them and they are unit-testable on their own.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`actions`] | Player actions, guard table, stat effects |
//! | [`appearance`] | Pet image and time-of-day lookups for presentation |
//! | [`constants`] | Fixed design parameters (periods, holds, decay rates) |
//! | [`events`] | Random event catalog and per-event gates |
//! | [`mood`] | Priority-ordered mood evaluation |
//! | [`needs`] | Passive per-tick decay, penalties, and sleep recovery |
//! | [`notice`] | Text shown to the player after actions and events |
//! | [`state`] | Discrete simulation states |
//! | [`stats`] | Six bounded stats and clamped deltas |
//! | [`travel`] | Named locations and travel timing |

pub mod actions;
pub mod appearance;
pub mod constants;
pub mod events;
pub mod mood;
pub mod needs;
pub mod notice;
pub mod state;
pub mod stats;
pub mod travel;
