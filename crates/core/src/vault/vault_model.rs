//! Application state snapshot.

use serde::{Deserialize, Serialize};

use crate::categories::{CategoryRef, CategoryRegistry, CustomCategory};
use crate::items::Item;

/// Everything the vault persists: the items and the user's custom categories.
///
/// The presentation layer owns the long-lived instance; the engines only
/// ever read a snapshot, and mutating operations hand back a new one for the
/// storage collaborator to persist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultState {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub custom_categories: Vec<CustomCategory>,
}

impl VaultState {
    pub fn new(items: Vec<Item>, custom_categories: Vec<CustomCategory>) -> Self {
        Self {
            items,
            custom_categories,
        }
    }

    pub fn registry(&self) -> CategoryRegistry<'_> {
        CategoryRegistry::new(&self.custom_categories)
    }

    pub fn find_item(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items filed under `category`.
    pub fn items_in_category<'a>(&'a self, category: &'a CategoryRef) -> impl Iterator<Item = &'a Item> + 'a {
        self.items.iter().filter(move |item| &item.category == category)
    }

    pub fn usage_count(&self, category: &CategoryRef) -> usize {
        self.items_in_category(category).count()
    }
}
