//! Global view state using Dioxus signals.

use dioxus::prelude::*;
use rolodex_core::source::{HttpUserSource, UserSource};
use rolodex_core::{DirectoryState, RolodexConfig};

use crate::INITIAL_CONFIG;

fn initial_config() -> RolodexConfig {
    INITIAL_CONFIG.lock().ok().and_then(|mut slot| slot.take()).unwrap_or_default()
}

/// Configuration — set once at startup
pub static CONFIG: GlobalSignal<RolodexConfig> = Signal::global(initial_config);

/// Search text, title text, source and filtered collections
pub static DIRECTORY: GlobalSignal<DirectoryState> = Signal::global(DirectoryState::new);

/// Run the one-shot activation fetch.
///
/// The write guard is never held across the await.
pub async fn activate_directory() {
    if !DIRECTORY.write().begin_initialize() {
        return;
    }
    let config = CONFIG.read().clone();
    let result = match HttpUserSource::from_config(&config) {
        Ok(source) => source.fetch_users().await,
        Err(e) => Err(e),
    };
    DIRECTORY.write().finish_initialize(result);
}
