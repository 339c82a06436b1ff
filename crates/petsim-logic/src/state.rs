//! Discrete simulation states.

use serde::{Deserialize, Serialize};

/// What the pet is doing right now. Exactly one at a time.
///
/// Sad and sick are moods derived from stats, not states.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetState {
    #[default]
    Idle,
    Walking,
    Eating,
    Playing,
    Sleeping,
}

impl PetState {
    pub fn name(self) -> &'static str {
        match self {
            PetState::Idle => "idle",
            PetState::Walking => "walking",
            PetState::Eating => "eating",
            PetState::Playing => "playing",
            PetState::Sleeping => "sleeping",
        }
    }

    pub fn is_sleeping(self) -> bool {
        self == PetState::Sleeping
    }

    /// States that only exist while a travel or hold deadline is pending.
    /// They cannot be resumed from a saved snapshot.
    pub fn is_transient(self) -> bool {
        matches!(self, PetState::Walking | PetState::Eating | PetState::Playing)
    }

    /// The state a restored snapshot should start in.
    pub fn resumable(self) -> Self {
        if self.is_transient() {
            PetState::Idle
        } else {
            self
        }
    }
}

impl std::fmt::Display for PetState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(PetState::default(), PetState::Idle);
    }

    #[test]
    fn test_resumable() {
        assert_eq!(PetState::Walking.resumable(), PetState::Idle);
        assert_eq!(PetState::Eating.resumable(), PetState::Idle);
        assert_eq!(PetState::Playing.resumable(), PetState::Idle);
        assert_eq!(PetState::Sleeping.resumable(), PetState::Sleeping);
        assert_eq!(PetState::Idle.resumable(), PetState::Idle);
    }

    #[test]
    fn test_serialized_names() {
        let json = serde_json::to_string(&PetState::Sleeping).unwrap();
        assert_eq!(json, "\"sleeping\"");
        let back: PetState = serde_json::from_str("\"walking\"").unwrap();
        assert_eq!(back, PetState::Walking);
    }
}
