//! Owned items, their receipts and the form validation that creates them.

mod items_model;
mod items_service;

#[cfg(test)]
pub(crate) mod fixtures;

#[cfg(test)]
mod items_model_tests;

pub use items_model::{DocumentKind, Item, ItemCondition, NewItem, ReceiptDocument};
pub use items_service::{
    add_item, attach_documents, delete_item, filter_by_category, remove_document, update_item,
    ItemChange,
};
