//! Root application component — title, two search boxes, card list.

use dioxus::prelude::*;
use rolodex_core::boundary::{search_boxes, TextField};
use rolodex_core::LoadStatus;

use crate::card_list::CardList;
use crate::search_box::SearchBox;
use crate::state::*;

#[component]
pub fn App() -> Element {
    // Activation: runs once per view lifetime
    use_future(activate_directory);

    let config = CONFIG.read();
    let directory = DIRECTORY.read();
    let [search_spec, title_spec] = search_boxes(&config);

    rsx! {
        div {
            class: "App",

            h1 { class: "app-title", "{directory.title_text()}" }

            SearchBox {
                class: search_spec.classifier.to_string(),
                placeholder: search_spec.placeholder.clone(),
                on_change: move |raw: String| DIRECTORY.write().apply_input(TextField::Search, &raw),
            }
            br {}
            SearchBox {
                class: title_spec.classifier.to_string(),
                placeholder: title_spec.placeholder.clone(),
                on_change: move |raw: String| DIRECTORY.write().apply_input(TextField::Title, &raw),
            }

            LoadBanner { status: directory.load_status().clone() }

            CardList { monsters: directory.filtered().to_vec() }
        }
    }
}

/// Shown while loading and when the fetch failed.
#[component]
fn LoadBanner(status: LoadStatus) -> Element {
    match status {
        LoadStatus::Loading => rsx! {
            div { class: "load-banner", "Loading\u{2026}" }
        },
        LoadStatus::Failed(reason) => rsx! {
            div { class: "load-banner error", "Could not load the directory: {reason}" }
        },
        LoadStatus::Idle | LoadStatus::Loaded(_) => rsx! {},
    }
}
