use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::model::task::Task;

/// Error type for storage gateway operations
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("could not access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse stored tasks: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// The persisted key-value snapshot: tasks, archived tasks, and the
/// first-use flag, using the browser-extension storage keys this tool
/// grew out of.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_tasks: Option<Vec<Task>>,
    /// Set once the store has written data at least once. Distinguishes
    /// "first run" from "user deleted every task".
    #[serde(default)]
    pub initialized: bool,
}

/// Explicit three-way reading of a [`Snapshot`]. The two "no tasks key"
/// cases must not collapse: an unset first-use flag means first run and
/// triggers sample seeding, while a set flag with no tasks means the
/// user genuinely has zero tasks.
#[derive(Debug)]
pub enum StoredState {
    /// Never written: seed samples
    FirstRun,
    /// Written before, currently empty
    Empty,
    /// Written before, with data
    Data {
        tasks: Vec<Task>,
        archived: Vec<Task>,
    },
}

impl Snapshot {
    pub fn state(self) -> StoredState {
        match (self.tasks, self.initialized) {
            (Some(tasks), _) => StoredState::Data {
                tasks,
                archived: self.archived_tasks.unwrap_or_default(),
            },
            (None, true) => StoredState::Empty,
            (None, false) => StoredState::FirstRun,
        }
    }
}

/// Async-in-spirit key-value persistence seam. The store mutates memory
/// and notifies listeners first; a save that fails is not propagated
/// back into the mutation path.
pub trait StorageGateway {
    fn load(&self) -> Result<Snapshot, GatewayError>;
    fn store(&mut self, snapshot: &Snapshot) -> Result<(), GatewayError>;
}

/// Gateway backed by a pretty-printed JSON file. A missing file loads
/// as the default (uninitialized) snapshot.
#[derive(Debug)]
pub struct JsonFileGateway {
    path: PathBuf,
}

impl JsonFileGateway {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileGateway { path: path.into() }
    }
}

impl StorageGateway for JsonFileGateway {
    fn load(&self) -> Result<Snapshot, GatewayError> {
        if !self.path.exists() {
            return Ok(Snapshot::default());
        }
        let content = fs::read_to_string(&self.path).map_err(|e| GatewayError::Io {
            path: self.path.clone(),
            source: e,
        })?;
        Ok(serde_json::from_str(&content)?)
    }

    fn store(&mut self, snapshot: &Snapshot) -> Result<(), GatewayError> {
        let content = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, content).map_err(|e| GatewayError::Io {
            path: self.path.clone(),
            source: e,
        })
    }
}

/// In-memory gateway for tests and ephemeral embedding.
#[derive(Debug, Default)]
pub struct MemoryGateway {
    snapshot: Snapshot,
}

impl StorageGateway for MemoryGateway {
    fn load(&self) -> Result<Snapshot, GatewayError> {
        Ok(self.snapshot.clone())
    }

    fn store(&mut self, snapshot: &Snapshot) -> Result<(), GatewayError> {
        self.snapshot = snapshot.clone();
        Ok(())
    }
}
