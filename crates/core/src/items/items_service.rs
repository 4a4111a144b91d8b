//! Item mutations over a vault snapshot.

use chrono::NaiveDate;
use log::info;
use uuid::Uuid;

use crate::categories::CategoryRef;
use crate::errors::{Error, Result, ValidationError};
use crate::vault::VaultState;

use super::{Item, NewItem, ReceiptDocument};

/// Result of an item mutation: the new snapshot and the affected item.
#[derive(Debug, Clone)]
pub struct ItemChange {
    pub state: VaultState,
    pub item: Item,
}

fn item_index(state: &VaultState, id: &str) -> Result<usize> {
    state
        .items
        .iter()
        .position(|item| item.id == id)
        .ok_or_else(|| Error::ItemNotFound(id.to_string()))
}

/// Validates and appends a new item. All field problems are reported at once.
pub fn add_item(state: &VaultState, new_item: NewItem, today: NaiveDate) -> Result<ItemChange> {
    let id = new_item
        .id
        .clone()
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    if state.find_item(&id).is_some() {
        return Err(Error::Validation(
            ValidationError::InvalidInput(format!("Item id '{}' is already in use", id)),
        ));
    }

    let item = new_item.into_item(id, &state.registry(), today)?;

    let mut state = state.clone();
    state.items.push(item.clone());
    info!("Item added: {} - {}", item.name, item.price);
    Ok(ItemChange { state, item })
}

/// Replaces the editable fields of an item.
///
/// The id is kept; receipts from the form are appended to the stored ones,
/// and the product image is only replaced when a new one is supplied.
pub fn update_item(
    state: &VaultState,
    id: &str,
    mut update: NewItem,
    today: NaiveDate,
) -> Result<ItemChange> {
    let index = item_index(state, id)?;
    let existing = &state.items[index];

    let mut documents = existing.receipt_documents.clone();
    documents.append(&mut update.receipt_documents);
    update.receipt_documents = documents;
    if update.product_image.is_none() {
        update.product_image = existing.product_image.clone();
    }

    let item = update.into_item(id.to_string(), &state.registry(), today)?;

    let mut state = state.clone();
    state.items[index] = item.clone();
    info!("Item updated: {} - {}", item.name, item.price);
    Ok(ItemChange { state, item })
}

pub fn delete_item(state: &VaultState, id: &str) -> Result<ItemChange> {
    let index = item_index(state, id)?;
    let mut state = state.clone();
    let item = state.items.remove(index);
    info!("Item deleted: {}", item.name);
    Ok(ItemChange { state, item })
}

/// Appends ingested receipts to an item.
pub fn attach_documents(
    state: &VaultState,
    id: &str,
    documents: Vec<ReceiptDocument>,
) -> Result<ItemChange> {
    let index = item_index(state, id)?;
    let mut state = state.clone();
    state.items[index].attach_documents(documents);
    let item = state.items[index].clone();
    Ok(ItemChange { state, item })
}

/// Removes one receipt from an item by position.
pub fn remove_document(state: &VaultState, id: &str, document_index: usize) -> Result<ItemChange> {
    let index = item_index(state, id)?;
    let mut state = state.clone();
    let removed = state.items[index].remove_document(document_index);
    if removed.is_none() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            format!("Item {} has no receipt at position {}", id, document_index),
        )));
    }
    let item = state.items[index].clone();
    Ok(ItemChange { state, item })
}

/// Items filed under `category`, or all items when `None`.
pub fn filter_by_category<'a>(items: &'a [Item], category: Option<&CategoryRef>) -> Vec<&'a Item> {
    items
        .iter()
        .filter(|item| category.map_or(true, |c| &item.category == c))
        .collect()
}
