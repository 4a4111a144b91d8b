//! Test builders shared by the unit tests of several modules.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::categories::CategoryRef;

use super::{Item, ItemCondition};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn item(id: &str, category: &str, purchase_date: NaiveDate, price: Decimal) -> Item {
    Item {
        id: id.to_string(),
        name: format!("Item {}", id),
        category: category.parse::<CategoryRef>().unwrap(),
        purchase_date,
        price,
        warranty_months: 24,
        condition: ItemCondition::New,
        receipt_documents: Vec::new(),
        product_image: None,
    }
}
