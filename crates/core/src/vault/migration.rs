//! Loading stored records, upgrading older shapes on the way in.
//!
//! Records written by earlier versions of the vault may carry a single
//! `receiptImage` payload, numeric ids, no condition, or a category that was
//! deleted since. Each record is repaired where possible and skipped (with a
//! warning) where not, so a single bad record never blocks the whole vault.

use chrono::NaiveDate;
use log::{debug, warn};
use serde_json::{Map, Value};

use crate::categories::{CategoryRef, CategoryRegistry, CustomCategory};
use crate::constants::LEGACY_RECEIPT_NAME;
use crate::errors::Result;
use crate::items::Item;

use super::VaultState;

impl VaultState {
    /// Builds a state snapshot from the two stored JSON documents.
    ///
    /// An empty document is read as an empty list. A document that is not a
    /// JSON array at all is a storage error; individual records that cannot
    /// be repaired are dropped.
    pub fn from_json(items_json: &str, categories_json: &str) -> Result<VaultState> {
        let custom_categories = load_custom_categories(parse_records(categories_json)?);
        let registry = CategoryRegistry::new(&custom_categories);
        let items = parse_records(items_json)?
            .into_iter()
            .filter_map(|record| migrate_item(record, &registry))
            .collect();

        Ok(VaultState::new(items, custom_categories))
    }

    pub fn items_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.items)?)
    }

    pub fn categories_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.custom_categories)?)
    }
}

fn parse_records(json: &str) -> Result<Vec<Value>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(json)?)
}

fn load_custom_categories(records: Vec<Value>) -> Vec<CustomCategory> {
    let mut categories: Vec<CustomCategory> = Vec::with_capacity(records.len());
    for record in records {
        let category = match serde_json::from_value::<CustomCategory>(record) {
            Ok(category) => category,
            Err(e) => {
                warn!("Skipping unreadable custom category: {}", e);
                continue;
            }
        };
        if !matches!(category.id.parse::<CategoryRef>(), Ok(CategoryRef::Custom(_))) {
            warn!("Skipping custom category with invalid id '{}'", category.id);
            continue;
        }
        if categories.iter().any(|c| c.id == category.id) {
            warn!("Skipping duplicate custom category '{}'", category.id);
            continue;
        }
        categories.push(category);
    }
    categories
}

fn migrate_item(record: Value, registry: &CategoryRegistry<'_>) -> Option<Item> {
    let Value::Object(mut fields) = record else {
        warn!("Skipping stored item that is not an object");
        return None;
    };

    let id = match fields.get("id") {
        Some(Value::String(id)) if !id.is_empty() => id.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => {
            warn!("Skipping stored item without an id");
            return None;
        }
    };
    fields.insert("id".to_string(), Value::String(id.clone()));

    migrate_receipt_image(&id, &mut fields);
    migrate_category(&id, &mut fields, registry);

    match serde_json::from_value::<Item>(Value::Object(fields)) {
        Ok(item) => Some(item),
        Err(e) => {
            warn!("Skipping stored item {}: {}", id, e);
            None
        }
    }
}

/// Turns a legacy single `receiptImage` into a one-element document list.
fn migrate_receipt_image(id: &str, fields: &mut Map<String, Value>) {
    let legacy = fields.remove("receiptImage");
    if fields.contains_key("receiptDocuments") {
        return;
    }
    let Some(Value::String(data)) = legacy.filter(|v| v.as_str().is_some_and(|s| !s.is_empty()))
    else {
        return;
    };

    let added_at = fields
        .get("purchaseDate")
        .and_then(Value::as_str)
        .and_then(|s| s.parse::<NaiveDate>().ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc());
    let Some(added_at) = added_at else {
        // Without a usable purchase date the record is rejected later anyway.
        return;
    };

    debug!("Converting legacy receipt image of item {}", id);
    fields.insert(
        "receiptDocuments".to_string(),
        serde_json::json!([{
            "id": format!("{}-receipt", id),
            "type": "image",
            "name": LEGACY_RECEIPT_NAME,
            "data": data,
            "addedAt": added_at,
        }]),
    );
}

/// Points items with an unknown or deleted category at `other`.
fn migrate_category(id: &str, fields: &mut Map<String, Value>, registry: &CategoryRegistry<'_>) {
    let resolvable = fields
        .get("category")
        .and_then(Value::as_str)
        .and_then(|key| key.parse::<CategoryRef>().ok())
        .is_some_and(|category| registry.is_resolvable(&category));
    if !resolvable {
        warn!(
            "Item {} has unresolvable category {:?}, moving it to 'other'",
            id,
            fields.get("category")
        );
        fields.insert(
            "category".to_string(),
            Value::String(CategoryRef::other().key().to_string()),
        );
    }
}
