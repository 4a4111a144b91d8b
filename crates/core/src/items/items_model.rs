//! Item domain models.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::categories::{CategoryRef, CategoryRegistry};
use crate::constants::{
    MAX_ITEM_PRICE, MAX_PURCHASE_AGE_YEARS, MAX_WARRANTY_MONTHS, MIN_ITEM_NAME_LEN,
};
use crate::errors::{FieldError, Result};
use crate::utils::time_utils::subtract_years;

/// Physical condition recorded at purchase time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ItemCondition {
    New,
    Excellent,
    #[default]
    Good,
    Fair,
}

impl ItemCondition {
    pub fn label(&self) -> &'static str {
        match self {
            ItemCondition::New => "New",
            ItemCondition::Excellent => "Excellent",
            ItemCondition::Good => "Good",
            ItemCondition::Fair => "Fair",
        }
    }
}

/// Kind of an attached receipt document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Image,
    Pdf,
}

/// A receipt attached to an item. `data` is an opaque payload produced by
/// the ingestion layer (typically a data URL); the engine never looks inside.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceiptDocument {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    pub name: String,
    pub data: String,
    pub added_at: DateTime<Utc>,
}

/// Domain model representing a purchased item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: String,
    pub name: String,
    pub category: CategoryRef,
    pub purchase_date: NaiveDate,
    pub price: Decimal,
    pub warranty_months: u32,
    #[serde(default)]
    pub condition: ItemCondition,
    #[serde(default)]
    pub receipt_documents: Vec<ReceiptDocument>,
    #[serde(default)]
    pub product_image: Option<String>,
}

impl Item {
    /// Appends newly ingested receipts after the existing ones.
    pub fn attach_documents(&mut self, documents: impl IntoIterator<Item = ReceiptDocument>) {
        self.receipt_documents.extend(documents);
    }

    /// Removes the receipt at `index`, if there is one.
    pub fn remove_document(&mut self, index: usize) -> Option<ReceiptDocument> {
        if index < self.receipt_documents.len() {
            Some(self.receipt_documents.remove(index))
        } else {
            None
        }
    }

    pub fn clear_documents(&mut self) -> Vec<ReceiptDocument> {
        std::mem::take(&mut self.receipt_documents)
    }
}

/// Input model for creating or editing an item, as entered in the form.
///
/// Fields are optional or loosely typed so that every problem can be
/// reported at once instead of failing on the first bad field.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    /// Generated when absent
    pub id: Option<String>,
    pub name: String,
    /// Raw category key from the picker
    pub category: String,
    pub purchase_date: Option<NaiveDate>,
    pub price: Option<Decimal>,
    pub warranty_months: Option<i32>,
    #[serde(default)]
    pub condition: ItemCondition,
    /// Receipts ingested while the form was open
    #[serde(default)]
    pub receipt_documents: Vec<ReceiptDocument>,
    /// Replacement product image; `None` keeps the current one on edit
    #[serde(default)]
    pub product_image: Option<String>,
}

/// Parsed form fields plus the problems found while parsing them.
struct CheckedFields {
    errors: Vec<FieldError>,
    name: String,
    category: Option<CategoryRef>,
    purchase_date: Option<NaiveDate>,
    price: Option<Decimal>,
    warranty_months: Option<u32>,
}

impl NewItem {
    /// Every field problem, in form order. Empty when the input is valid.
    pub fn field_errors(&self, registry: &CategoryRegistry<'_>, today: NaiveDate) -> Vec<FieldError> {
        self.check(registry, today).errors
    }

    /// Validates the new item data.
    pub fn validate(&self, registry: &CategoryRegistry<'_>, today: NaiveDate) -> Result<()> {
        let errors = self.field_errors(registry, today);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }

    /// Builds the stored item, or returns all field errors.
    pub fn into_item(
        self,
        id: String,
        registry: &CategoryRegistry<'_>,
        today: NaiveDate,
    ) -> Result<Item> {
        let checked = self.check(registry, today);
        match (
            checked.category,
            checked.purchase_date,
            checked.price,
            checked.warranty_months,
        ) {
            (Some(category), Some(purchase_date), Some(price), Some(warranty_months))
                if checked.errors.is_empty() =>
            {
                Ok(Item {
                    id,
                    name: checked.name,
                    category,
                    purchase_date,
                    price,
                    warranty_months,
                    condition: self.condition,
                    receipt_documents: self.receipt_documents,
                    product_image: self.product_image,
                })
            }
            _ => Err(checked.errors.into()),
        }
    }

    fn check(&self, registry: &CategoryRegistry<'_>, today: NaiveDate) -> CheckedFields {
        let mut errors = Vec::new();

        let name = self.name.trim().to_string();
        if name.is_empty() {
            errors.push(FieldError::new("name", "Name is required"));
        } else if name.chars().count() < MIN_ITEM_NAME_LEN {
            errors.push(FieldError::new(
                "name",
                format!("Name must be at least {} characters", MIN_ITEM_NAME_LEN),
            ));
        }

        let category = if self.category.trim().is_empty() {
            errors.push(FieldError::new("category", "Select a category"));
            None
        } else {
            match self.category.parse::<CategoryRef>() {
                Ok(category) if registry.is_resolvable(&category) => Some(category),
                Ok(_) => {
                    errors.push(FieldError::new("category", "This category no longer exists"));
                    None
                }
                Err(_) => {
                    errors.push(FieldError::new("category", "Select a valid category"));
                    None
                }
            }
        };

        let purchase_date = match self.purchase_date {
            None => {
                errors.push(FieldError::new("purchaseDate", "Purchase date is required"));
                None
            }
            Some(date) if date > today => {
                errors.push(FieldError::new(
                    "purchaseDate",
                    "Purchase date cannot be in the future",
                ));
                None
            }
            Some(date)
                if subtract_years(today, MAX_PURCHASE_AGE_YEARS)
                    .is_some_and(|oldest| date < oldest) =>
            {
                errors.push(FieldError::new("purchaseDate", "Purchase date looks too old"));
                None
            }
            Some(date) => Some(date),
        };

        let price = match self.price {
            Some(price) if price <= Decimal::ZERO => {
                errors.push(FieldError::new("price", "Price must be greater than 0"));
                None
            }
            None => {
                errors.push(FieldError::new("price", "Price must be greater than 0"));
                None
            }
            Some(price) if price > Decimal::from(MAX_ITEM_PRICE) => {
                errors.push(FieldError::new("price", "Price looks too high, please check it"));
                None
            }
            Some(price) => Some(price),
        };

        let warranty_months = match self.warranty_months {
            Some(months) if (0..=MAX_WARRANTY_MONTHS).contains(&months) => u32::try_from(months).ok(),
            Some(months) if months > MAX_WARRANTY_MONTHS => {
                errors.push(FieldError::new(
                    "warrantyMonths",
                    "Warranty looks too long (max 10 years)",
                ));
                None
            }
            _ => {
                errors.push(FieldError::new(
                    "warrantyMonths",
                    "Warranty must be 0 or more months",
                ));
                None
            }
        };

        CheckedFields {
            errors,
            name,
            category,
            purchase_date,
            price,
            warranty_months,
        }
    }
}
