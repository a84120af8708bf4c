//! Text input that reports every change as raw text.

use dioxus::prelude::*;

#[component]
pub fn SearchBox(placeholder: String, class: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        input {
            class: "search-box {class}",
            r#type: "search",
            placeholder: "{placeholder}",
            oninput: move |e: Event<FormData>| on_change.call(e.value()),
        }
    }
}
