use serde::{Deserialize, Serialize};
use serde_json::Value;
use time::OffsetDateTime;

/// Client-defined game state
///
/// Both fields are opaque JSON and stored exactly as received. A field
/// missing from the request body decodes as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    /// Current game state
    #[serde(default)]
    pub instance: Value,
    /// Action log, usually a list
    #[serde(default)]
    pub actions: Value,
}

impl GameData {
    /// Create a payload from its two fields
    pub fn new(instance: Value, actions: Value) -> Self {
        Self { instance, actions }
    }

    /// Apply a partial update field by field
    ///
    /// # Arguments
    ///
    /// * `update` - Incoming payload; `null` fields leave the stored value untouched
    pub fn merge(&mut self, update: GameData) {
        if !update.instance.is_null() {
            self.instance = update.instance;
        }
        if !update.actions.is_null() {
            self.actions = update.actions;
        }
    }
}

/// A stored game record
#[derive(Debug, Clone)]
pub struct Game {
    id: String,
    created_at: OffsetDateTime,
    data: GameData,
}

impl Game {
    /// Create a new game stamped with the current time
    pub fn new(id: String, data: GameData) -> Self {
        Self {
            id,
            created_at: OffsetDateTime::now_utc(),
            data,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> OffsetDateTime {
        self.created_at
    }

    pub fn data(&self) -> &GameData {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut GameData {
        &mut self.data
    }
}
