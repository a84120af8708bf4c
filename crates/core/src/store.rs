//! View state for the directory: search text, title text, source collection,
//! and the filtered collection derived from the first and third.

use tracing::{debug, warn};

use crate::error::FetchError;
use crate::filter::{normalize_input, recompute};
use crate::source::UserSource;
use crate::types::{LoadStatus, UserRecord};

/// State owned by one directory view for its lifetime.
///
/// `filtered` has no setter: every write to `search_text` or `source` funnels
/// through [`DirectoryState::refresh_filtered`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DirectoryState {
    search_text: String,
    title_text: String,
    source: Vec<UserRecord>,
    filtered: Vec<UserRecord>,
    status: LoadStatus,
    initialized: bool,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_search_text(&mut self, raw: &str) {
        self.search_text = normalize_input(raw);
        self.refresh_filtered();
    }

    pub fn set_title_text(&mut self, raw: &str) {
        self.title_text = normalize_input(raw);
    }

    /// Replace the whole source collection.
    pub fn set_source_collection(&mut self, records: Vec<UserRecord>) {
        self.source = records;
        self.refresh_filtered();
    }

    fn refresh_filtered(&mut self) {
        self.filtered = recompute(&self.source, &self.search_text);
        debug!(
            search = self.search_text.as_str(),
            source = self.source.len(),
            filtered = self.filtered.len(),
            "Filter recomputed"
        );
    }

    // -----------------------------------------------------------------------
    // One-shot activation
    // -----------------------------------------------------------------------

    /// Fetch the source collection from `source`, once per state lifetime.
    ///
    /// Returns `false` without touching `source` if activation already happened.
    pub async fn initialize(&mut self, source: &dyn UserSource) -> bool {
        if !self.begin_initialize() {
            return false;
        }
        debug!(source = %source.describe(), "Activating directory");
        let result = source.fetch_users().await;
        self.finish_initialize(result)
    }

    /// Claim the one-shot activation. `true` exactly once.
    ///
    /// For callers that cannot hold the state across the fetch; pair with
    /// [`DirectoryState::finish_initialize`].
    pub fn begin_initialize(&mut self) -> bool {
        if self.initialized {
            return false;
        }
        self.initialized = true;
        self.status = LoadStatus::Loading;
        true
    }

    /// Store the outcome of the activation fetch.
    ///
    /// Ignored unless [`DirectoryState::begin_initialize`] claimed the
    /// activation and no outcome was stored yet. Returns whether it was stored.
    pub fn finish_initialize(&mut self, result: Result<Vec<UserRecord>, FetchError>) -> bool {
        if !self.status.is_loading() {
            warn!(status = ?self.status, "Activation result without a pending activation, ignoring");
            return false;
        }
        match result {
            Ok(records) => {
                self.status = LoadStatus::Loaded(records.len());
                self.set_source_collection(records);
            }
            Err(e) => {
                warn!(error = %e, "Could not load user collection");
                self.status = LoadStatus::Failed(e.to_string());
            }
        }
        true
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn title_text(&self) -> &str {
        &self.title_text
    }

    pub fn source(&self) -> &[UserRecord] {
        &self.source
    }

    pub fn filtered(&self) -> &[UserRecord] {
        &self.filtered
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}
