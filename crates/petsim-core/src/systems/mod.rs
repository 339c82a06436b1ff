//! Systems - logic that operates on components

mod events;
mod needs;
mod pet;
mod travel;

pub use events::*;
pub use needs::*;
pub use pet::*;
pub use travel::*;
