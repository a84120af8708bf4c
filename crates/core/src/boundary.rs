//! Presentation boundary: what the view hands to its search boxes and card list.

use serde::Serialize;

use crate::store::DirectoryState;
use crate::types::{RolodexConfig, UserRecord};

/// Which piece of view state a search box writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    /// Filters the card list.
    Search,
    /// Sets the displayed title.
    Title,
}

/// Inputs for one search box instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBoxSpec {
    pub field: TextField,
    pub placeholder: String,
    pub classifier: &'static str,
}

/// The two search boxes of the directory view, filter first.
pub fn search_boxes(config: &RolodexConfig) -> [SearchBoxSpec; 2] {
    [
        SearchBoxSpec {
            field: TextField::Search,
            placeholder: config.search_placeholder.clone(),
            classifier: "monsters-search-box",
        },
        SearchBoxSpec {
            field: TextField::Title,
            placeholder: config.title_placeholder.clone(),
            classifier: "title-search-box",
        },
    ]
}

impl DirectoryState {
    /// Route raw input from a search box to its mutator.
    pub fn apply_input(&mut self, field: TextField, raw: &str) {
        match field {
            TextField::Search => self.set_search_text(raw),
            TextField::Title => self.set_title_text(raw),
        }
    }
}

/// What a card shows for one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub key: String,
    pub name: String,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

impl CardView {
    pub fn from_record(record: &UserRecord, index: usize) -> Self {
        let key = match record.id() {
            Some(id) => id.to_string(),
            None => format!("#{index}"),
        };
        CardView {
            key,
            name: record.name().unwrap_or_default().to_string(),
            email: record.email().map(str::to_string),
            avatar_url: record
                .id()
                .map(|id| format!("https://robohash.org/{id}?set=set2&size=180x180")),
        }
    }
}

/// Card views for the filtered collection, in order.
pub fn card_views(monsters: &[UserRecord]) -> Vec<CardView> {
    monsters.iter().enumerate().map(|(i, r)| CardView::from_record(r, i)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_boxes_are_bound_to_distinct_fields() {
        let [search, title] = search_boxes(&RolodexConfig::default());
        assert_eq!(search.field, TextField::Search);
        assert_eq!(search.placeholder, "Search monsters");
        assert_eq!(search.classifier, "monsters-search-box");
        assert_eq!(title.field, TextField::Title);
        assert_eq!(title.placeholder, "Set title");
        assert_eq!(title.classifier, "title-search-box");
    }

    #[test]
    fn placeholders_follow_config() {
        let config = RolodexConfig {
            search_placeholder: "Find someone".into(),
            title_placeholder: "Heading".into(),
            ..RolodexConfig::default()
        };
        let [search, title] = search_boxes(&config);
        assert_eq!(search.placeholder, "Find someone");
        assert_eq!(title.placeholder, "Heading");
    }

    #[test]
    fn apply_input_routes_to_matching_mutator() {
        let mut state = DirectoryState::new();
        state.set_source_collection(vec![
            UserRecord::named("Leanne Graham"),
            UserRecord::named("Ervin Howell"),
        ]);

        state.apply_input(TextField::Search, "HOW");
        assert_eq!(state.search_text(), "how");
        assert_eq!(state.filtered().len(), 1);

        state.apply_input(TextField::Title, "Acme Inc");
        assert_eq!(state.title_text(), "acme inc");
        assert_eq!(state.search_text(), "how");
        assert_eq!(state.filtered().len(), 1);
    }

    #[test]
    fn card_view_uses_id_for_key_and_avatar() {
        let record = UserRecord::named("Leanne Graham")
            .with_field("id", 1)
            .with_field("email", "Sincere@april.biz");
        let card = CardView::from_record(&record, 0);
        assert_eq!(card.key, "1");
        assert_eq!(card.name, "Leanne Graham");
        assert_eq!(card.email.as_deref(), Some("Sincere@april.biz"));
        assert_eq!(
            card.avatar_url.as_deref(),
            Some("https://robohash.org/1?set=set2&size=180x180")
        );
    }

    #[test]
    fn card_view_without_id_falls_back_to_position() {
        let cards = card_views(&[UserRecord::named("A"), UserRecord::default()]);
        assert_eq!(cards[0].key, "#0");
        assert_eq!(cards[1].key, "#1");
        assert_eq!(cards[1].name, "");
        assert_eq!(cards[1].avatar_url, None);
    }
}
