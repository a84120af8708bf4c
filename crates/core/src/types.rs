//! Core types shared across Rolodex: the user record as served by the remote
//! directory, runtime configuration, and the load status of the view.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ---------------------------------------------------------------------------
// User records
// ---------------------------------------------------------------------------

/// One entry of the remote user collection.
///
/// The record is kept verbatim as a JSON object. Only `name` matters for
/// filtering; the other accessors exist for rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecord {
    fields: Map<String, Value>,
}

impl UserRecord {
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build a record carrying only a `name`.
    pub fn named(name: &str) -> Self {
        let mut fields = Map::new();
        fields.insert("name".to_string(), Value::String(name.to_string()));
        Self { fields }
    }

    /// Attach an extra field, builder style.
    pub fn with_field(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    /// The `name` field, if present and textual.
    pub fn name(&self) -> Option<&str> {
        self.fields.get("name").and_then(Value::as_str)
    }

    pub fn id(&self) -> Option<u64> {
        self.fields.get("id").and_then(Value::as_u64)
    }

    pub fn email(&self) -> Option<&str> {
        self.fields.get("email").and_then(Value::as_str)
    }

    pub fn username(&self) -> Option<&str> {
        self.fields.get("username").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Default remote endpoint serving the user collection.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Runtime configuration. Loaded from `.rolodex.toml` or defaults.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RolodexConfig {
    /// URL of the user collection.
    pub endpoint: String,
    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout_secs: Option<u64>,
    pub search_placeholder: String,
    pub title_placeholder: String,
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: None,
            search_placeholder: "Search monsters".to_string(),
            title_placeholder: "Set title".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Load status
// ---------------------------------------------------------------------------

/// Where the one-shot fetch of the source collection stands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    /// View not activated yet.
    #[default]
    Idle,
    Loading,
    /// Fetch succeeded with this many records.
    Loaded(usize),
    /// Fetch failed; the source collection stays empty.
    Failed(String),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            LoadStatus::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}
