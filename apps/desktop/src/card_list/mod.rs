//! Card list — one card per record of the filtered collection.

mod card;

use dioxus::prelude::*;
use rolodex_core::boundary::card_views;
use rolodex_core::UserRecord;

use card::Card;

#[component]
pub fn CardList(monsters: Vec<UserRecord>) -> Element {
    let cards = card_views(&monsters);

    rsx! {
        div {
            class: "card-list",
            for card in cards {
                Card { key: "{card.key}", card: card.clone() }
            }
        }
    }
}
