//! Rolodex Desktop — Dioxus-powered user directory.

use std::sync::Mutex;

use dioxus::prelude::*;
use rolodex_core::RolodexConfig;

mod app;
mod card_list;
mod search_box;
mod state;

use app::App;

/// Pre-runtime storage — loaded before Dioxus launches, consumed on first render.
pub static INITIAL_CONFIG: Mutex<Option<RolodexConfig>> = Mutex::new(None);

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("rolodex=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cwd = std::env::current_dir().unwrap_or_else(|_| std::path::PathBuf::from("."));
    let config = rolodex_core::load_rolodex_config(&cwd);
    tracing::info!(endpoint = %config.endpoint, "Starting Rolodex");
    if let Ok(mut slot) = INITIAL_CONFIG.lock() {
        *slot = Some(config);
    }

    #[cfg(feature = "desktop")]
    {
        use dioxus::desktop::{Config, LogicalSize, WindowBuilder};

        LaunchBuilder::new()
            .with_cfg(
                Config::default()
                    .with_menu(None)
                    .with_window(
                        WindowBuilder::new()
                            .with_title("Rolodex")
                            .with_inner_size(LogicalSize::new(1000.0, 800.0))
                            .with_resizable(true),
                    ),
            )
            .launch(App);
    }

    #[cfg(not(feature = "desktop"))]
    {
        dioxus::launch(App);
    }
}
