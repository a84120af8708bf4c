//! Rolodex — searchable user directory.
//!
//! Fetches a user collection from a remote endpoint once per view, filters it
//! by name as the user types, and carries a user-set title alongside.
//!
//! # Modules
//!
//! - [`types`] — User records, configuration, load status
//! - [`filter`] — Case-folded substring filter over the source collection
//! - [`store`] — View state with a one-shot activation fetch
//! - [`source`] — `UserSource` trait, HTTP and static implementations
//! - [`boundary`] — Search box and card list contracts
//! - [`error`] — Fetch errors

pub mod boundary;
pub mod error;
pub mod filter;
pub mod source;
pub mod store;
pub mod types;

pub use error::FetchError;
pub use store::DirectoryState;
pub use types::{LoadStatus, RolodexConfig, UserRecord};

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

// ---------------------------------------------------------------------------
// Cross-platform path helpers
// ---------------------------------------------------------------------------

/// Platform-aware home directory: `HOME` on Unix, `USERPROFILE` on Windows.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").or_else(|_| std::env::var("USERPROFILE")).ok().map(PathBuf::from)
}

/// Platform-aware config directory: `$XDG_CONFIG_HOME/rolodex` or `~/.config/rolodex` on Unix,
/// `%APPDATA%/rolodex` on Windows.
pub fn config_dir() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var("APPDATA").ok().map(|a| PathBuf::from(a).join("rolodex"))
    } else {
        std::env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| home_dir().map(|h| h.join(".config")))
            .map(|c| c.join("rolodex"))
    }
}

// ---------------------------------------------------------------------------
// .rolodex.toml config loading
// ---------------------------------------------------------------------------

/// Known keys in `.rolodex.toml` for config validation.
const KNOWN_CONFIG_KEYS: &[&str] =
    &["endpoint", "timeout_secs", "search_placeholder", "title_placeholder"];

/// Simple Levenshtein edit distance for typo suggestions.
fn edit_distance(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// Closest known config key to `key`, if it is near enough to be a typo.
pub fn suggest_config_key(key: &str) -> Option<&'static str> {
    KNOWN_CONFIG_KEYS
        .iter()
        .copied()
        .min_by_key(|k| edit_distance(key, k))
        .filter(|k| edit_distance(key, k) <= 3)
}

/// Find the config file to use: `.rolodex.toml` in `dir`, else `config.toml`
/// in the platform config directory.
pub fn find_config_file(dir: &Path) -> Option<PathBuf> {
    let local = dir.join(".rolodex.toml");
    if local.exists() {
        return Some(local);
    }
    config_dir().map(|d| d.join("config.toml")).filter(|p| p.exists())
}

/// Load configuration for a view started in `dir`.
///
/// Missing or unparsable files fall back to defaults with a warning.
pub fn load_rolodex_config(dir: &Path) -> RolodexConfig {
    match find_config_file(dir) {
        Some(path) => load_config_file(&path),
        None => RolodexConfig::default(),
    }
}

/// Load configuration from a specific file, merging over defaults.
/// Unknown keys trigger a warning with a typo suggestion.
pub fn load_config_file(path: &Path) -> RolodexConfig {
    let mut config = RolodexConfig::default();

    debug!(path = %path.display(), "Loading config");
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Could not read config file");
            return config;
        }
    };
    let table = match content.parse::<toml::Table>() {
        Ok(t) => t,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to parse config file");
            return config;
        }
    };

    // Validate keys — warn on unknown
    for key in table.keys() {
        if !KNOWN_CONFIG_KEYS.contains(&key.as_str()) {
            if let Some(suggestion) = suggest_config_key(key) {
                warn!(
                    key = key.as_str(),
                    suggestion,
                    "Unknown key in config — did you mean '{suggestion}'?"
                );
            } else {
                warn!(
                    key = key.as_str(),
                    "Unknown key in config (known keys: {})",
                    KNOWN_CONFIG_KEYS.join(", ")
                );
            }
        }
    }

    if let Some(endpoint) = table.get("endpoint").and_then(|v| v.as_str()) {
        config.endpoint = endpoint.to_string();
    }

    match table.get("timeout_secs").map(|v| v.as_integer()) {
        Some(Some(secs)) if secs > 0 => config.timeout_secs = Some(secs as u64),
        Some(_) => warn!("timeout_secs must be a positive integer, ignoring"),
        None => {}
    }

    if let Some(p) = table.get("search_placeholder").and_then(|v| v.as_str()) {
        config.search_placeholder = p.to_string();
    }

    if let Some(p) = table.get("title_placeholder").and_then(|v| v.as_str()) {
        config.title_placeholder = p.to_string();
    }

    config
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> PathBuf {
        let path = dir.path().join(".rolodex.toml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn edit_distance_basics() {
        assert_eq!(edit_distance("endpoint", "endpoint"), 0);
        assert_eq!(edit_distance("endpont", "endpoint"), 1);
        assert_eq!(edit_distance("", "abc"), 3);
    }

    #[test]
    fn config_file_overrides_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(
            &dir,
            r#"
endpoint = "http://localhost:3000/users"
timeout_secs = 5
search_placeholder = "Find"
"#,
        );
        let config = load_config_file(&path);
        assert_eq!(config.endpoint, "http://localhost:3000/users");
        assert_eq!(config.timeout_secs, Some(5));
        assert_eq!(config.search_placeholder, "Find");
        assert_eq!(config.title_placeholder, "Set title");
    }

    #[test]
    fn typo_keys_get_a_suggestion() {
        assert_eq!(suggest_config_key("endpont"), Some("endpoint"));
        assert_eq!(suggest_config_key("timeout_sec"), Some("timeout_secs"));
        assert_eq!(suggest_config_key("title_placeholdr"), Some("title_placeholder"));
        assert_eq!(suggest_config_key("colour_scheme"), None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "endpont = \"http://typo\"\n");
        assert_eq!(load_config_file(&path), RolodexConfig::default());
    }

    #[test]
    fn unparsable_file_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "endpoint = [unterminated");
        assert_eq!(load_config_file(&path), RolodexConfig::default());
    }

    #[test]
    fn non_positive_timeout_is_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "timeout_secs = 0\n");
        assert_eq!(load_config_file(&path).timeout_secs, None);

        let path = write_config(&dir, "timeout_secs = \"ten\"\n");
        assert_eq!(load_config_file(&path).timeout_secs, None);
    }

    #[test]
    fn local_file_is_found_first() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "endpoint = \"http://local/users\"\n");
        assert_eq!(find_config_file(dir.path()), Some(path));
        assert_eq!(load_rolodex_config(dir.path()).endpoint, "http://local/users");
    }

    #[test]
    fn missing_file_reads_as_defaults() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load_config_file(&dir.path().join("nope.toml")), RolodexConfig::default());
    }
}
