//! Presentation hook.
//!
//! The engine calls [`Presenter::render`] after every mutation round and
//! [`Presenter::surface`] for every notice. Front ends implement the trait;
//! the engine never draws anything itself.

use std::cell::RefCell;
use std::rc::Rc;

use petsim_logic::appearance::{PetImage, TimeOfDay};
use petsim_logic::mood::Mood;
use petsim_logic::notice::{Cue, Notice};
use serde::Serialize;

use crate::components::{PetState, Stats};

/// Everything a front end needs to draw the pet.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub stats: Stats,
    pub state: PetState,
    pub mood: Mood,
    pub food_bowl_full: bool,
    pub position: f32,
    pub image: PetImage,
    pub time_of_day: TimeOfDay,
}

pub trait Presenter {
    fn render(&mut self, frame: &Frame);
    fn surface(&mut self, notice: Notice, duration_ms: u64);
    fn cue(&mut self, _cue: Cue) {}
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn render(&mut self, _frame: &Frame) {}
    fn surface(&mut self, _notice: Notice, _duration_ms: u64) {}
}

#[derive(Debug, Clone, Default)]
pub struct Recording {
    pub frames: Vec<Frame>,
    pub notices: Vec<Notice>,
    pub cues: Vec<Cue>,
}

/// Records calls for inspection. Clones share one recording.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    inner: Rc<RefCell<Recording>>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render_count(&self) -> usize {
        self.inner.borrow().frames.len()
    }

    pub fn last_frame(&self) -> Option<Frame> {
        self.inner.borrow().frames.last().copied()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.inner.borrow().notices.clone()
    }

    pub fn cues(&self) -> Vec<Cue> {
        self.inner.borrow().cues.clone()
    }

    /// Drain recorded notices.
    pub fn take_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut self.inner.borrow_mut().notices)
    }
}

impl Presenter for RecordingPresenter {
    fn render(&mut self, frame: &Frame) {
        self.inner.borrow_mut().frames.push(*frame);
    }

    fn surface(&mut self, notice: Notice, _duration_ms: u64) {
        self.inner.borrow_mut().notices.push(notice);
    }

    fn cue(&mut self, cue: Cue) {
        self.inner.borrow_mut().cues.push(cue);
    }
}
