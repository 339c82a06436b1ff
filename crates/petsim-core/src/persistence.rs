//! Save/Load functionality for persisting the pet between sessions
//!
//! Uses serde_json for a small self-describing document:
//! `{stats, state, mood, position, foodBowlFull, timestamp}`.
//! Every field falls back to its default on its own, so an old or partial
//! document restores whatever it still has. Failures never reach gameplay:
//! the adapter functions log them and carry on.

use std::cell::RefCell;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{debug, info, warn};
use petsim_logic::mood::Mood;
use petsim_logic::travel::Location;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::components::{PetState, Stats};

/// Serializable snapshot of the simulation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersistedSnapshot {
    #[serde(deserialize_with = "lenient")]
    pub stats: Stats,
    #[serde(deserialize_with = "lenient")]
    pub state: PetState,
    /// Informational; the live mood is recomputed from stats and state.
    #[serde(deserialize_with = "lenient")]
    pub mood: Option<Mood>,
    /// Horizontal position hint in percent
    #[serde(deserialize_with = "lenient")]
    pub position: Option<f32>,
    #[serde(deserialize_with = "lenient")]
    pub food_bowl_full: Option<bool>,
    /// Epoch milliseconds at save time
    #[serde(deserialize_with = "lenient")]
    pub timestamp: Option<u64>,
}

impl PersistedSnapshot {
    pub fn position_or_default(&self) -> f32 {
        self.position
            .filter(|p| p.is_finite())
            .unwrap_or_else(|| Location::Center.position())
    }

    pub fn food_bowl_full_or_default(&self) -> bool {
        self.food_bowl_full.unwrap_or(true)
    }
}

/// A field that fails to parse takes its default instead of failing the document.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

/// Errors that can occur during save/load
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where snapshot documents live.
pub trait SnapshotStore {
    /// The stored document, or `None` if nothing has been saved.
    fn read(&self) -> Result<Option<String>, PersistError>;
    fn write(&self, document: &str) -> Result<(), PersistError>;
    /// Remove the stored document. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), PersistError>;
}

/// One JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for FileStore {
    fn read(&self) -> Result<Option<String>, PersistError> {
        match fs::read_to_string(&self.path) {
            Ok(doc) => Ok(Some(doc)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, document: &str) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        // Write beside the target then rename so a crash never leaves half a document.
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, document)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory slot. Clones share the slot.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a document.
    pub fn with_document(document: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(document.into()))),
        }
    }

    pub fn document(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.slot.borrow().is_none()
    }
}

impl SnapshotStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, PersistError> {
        Ok(self.slot.borrow().clone())
    }

    fn write(&self, document: &str) -> Result<(), PersistError> {
        *self.slot.borrow_mut() = Some(document.to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), PersistError> {
        *self.slot.borrow_mut() = None;
        Ok(())
    }
}

/// Serialize a snapshot to its document form.
pub fn encode_snapshot(snapshot: &PersistedSnapshot) -> Result<String, PersistError> {
    Ok(serde_json::to_string(snapshot)?)
}

/// Parse a snapshot document.
pub fn decode_snapshot(document: &str) -> Result<PersistedSnapshot, PersistError> {
    Ok(serde_json::from_str(document)?)
}

/// Save a snapshot, logging and swallowing any failure.
pub fn save_snapshot(store: &dyn SnapshotStore, snapshot: &PersistedSnapshot) {
    let result = encode_snapshot(snapshot).and_then(|doc| store.write(&doc));
    if let Err(e) = result {
        warn!("could not save pet: {}", e);
    }
}

/// Load a snapshot if one exists and is younger than `max_age_ms`.
///
/// Absent, undated, stale and unreadable snapshots all yield `None`.
pub fn load_snapshot(
    store: &dyn SnapshotStore,
    now_ms: u64,
    max_age_ms: u64,
) -> Option<PersistedSnapshot> {
    let document = match store.read() {
        Ok(Some(doc)) => doc,
        Ok(None) => {
            debug!("no saved pet");
            return None;
        }
        Err(e) => {
            warn!("could not read saved pet: {}", e);
            return None;
        }
    };

    let snapshot = match decode_snapshot(&document) {
        Ok(s) => s,
        Err(e) => {
            warn!("could not parse saved pet: {}", e);
            return None;
        }
    };

    let Some(saved_at) = snapshot.timestamp else {
        info!("saved pet has no timestamp; starting fresh");
        return None;
    };

    let age_ms = now_ms.saturating_sub(saved_at);
    if age_ms >= max_age_ms {
        info!("saved pet is {} hours old; starting fresh", age_ms / 3_600_000);
        return None;
    }

    Some(snapshot)
}

/// Delete the stored snapshot, logging any failure.
pub fn clear_snapshot(store: &dyn SnapshotStore) {
    if let Err(e) = store.clear() {
        warn!("could not clear saved pet: {}", e);
    }
}
