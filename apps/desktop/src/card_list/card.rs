use dioxus::prelude::*;
use rolodex_core::boundary::CardView;

#[component]
pub fn Card(card: CardView) -> Element {
    rsx! {
        div {
            class: "card-container",
            if let Some(url) = &card.avatar_url {
                img { alt: "monster {card.name}", src: "{url}" }
            }
            h2 { "{card.name}" }
            if let Some(email) = &card.email {
                p { "{email}" }
            }
        }
    }
}
