use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

use crate::categories::{BuiltinCategory, CategoryRef, CategoryRegistry, CustomCategory};
use crate::items::fixtures::{date, item};
use crate::items::{DocumentKind, Item, ItemCondition, NewItem, ReceiptDocument};
use crate::valuation::DepreciationCurve;

fn form() -> NewItem {
    NewItem {
        id: None,
        name: "Washing machine".to_string(),
        category: "appliances".to_string(),
        purchase_date: Some(date(2023, 9, 10)),
        price: Some(dec!(549)),
        warranty_months: Some(24),
        condition: ItemCondition::Good,
        receipt_documents: Vec::new(),
        product_image: None,
    }
}

fn messages_for(new_item: &NewItem, field: &str) -> Vec<String> {
    let today = date(2024, 6, 1);
    new_item
        .field_errors(&CategoryRegistry::new(&[]), today)
        .into_iter()
        .filter(|e| e.field == field)
        .map(|e| e.message)
        .collect()
}

#[test]
fn test_valid_form_has_no_errors() {
    let today = date(2024, 6, 1);
    let registry = CategoryRegistry::new(&[]);
    assert!(form().field_errors(&registry, today).is_empty());
    assert!(form().validate(&registry, today).is_ok());
}

#[test]
fn test_name_rules() {
    let blank = NewItem {
        name: "   ".to_string(),
        ..form()
    };
    assert_eq!(messages_for(&blank, "name"), vec!["Name is required"]);

    let short = NewItem {
        name: " A ".to_string(),
        ..form()
    };
    assert_eq!(
        messages_for(&short, "name"),
        vec!["Name must be at least 2 characters"]
    );

    let two = NewItem {
        name: "TV".to_string(),
        ..form()
    };
    assert!(messages_for(&two, "name").is_empty());
}

#[test]
fn test_price_boundaries() {
    let at_max = NewItem {
        price: Some(dec!(1000000)),
        ..form()
    };
    assert!(messages_for(&at_max, "price").is_empty());

    let over_max = NewItem {
        price: Some(dec!(1000000.01)),
        ..form()
    };
    assert_eq!(messages_for(&over_max, "price").len(), 1);

    for price in [None, Some(dec!(0)), Some(dec!(-3))] {
        let bad = NewItem { price, ..form() };
        assert_eq!(
            messages_for(&bad, "price"),
            vec!["Price must be greater than 0"]
        );
    }
}

#[test]
fn test_warranty_boundaries() {
    for months in [0, 120] {
        let ok = NewItem {
            warranty_months: Some(months),
            ..form()
        };
        assert!(messages_for(&ok, "warrantyMonths").is_empty(), "{}", months);
    }
    for months in [Some(121), Some(-1), None] {
        let bad = NewItem {
            warranty_months: months,
            ..form()
        };
        assert_eq!(messages_for(&bad, "warrantyMonths").len(), 1, "{:?}", months);
    }
}

#[test]
fn test_purchase_date_rules() {
    let future = NewItem {
        purchase_date: Some(date(2024, 6, 2)),
        ..form()
    };
    assert_eq!(
        messages_for(&future, "purchaseDate"),
        vec!["Purchase date cannot be in the future"]
    );

    let today_ok = NewItem {
        purchase_date: Some(date(2024, 6, 1)),
        ..form()
    };
    assert!(messages_for(&today_ok, "purchaseDate").is_empty());

    let ancient = NewItem {
        purchase_date: Some(date(1974, 5, 31)),
        ..form()
    };
    assert_eq!(messages_for(&ancient, "purchaseDate").len(), 1);

    let missing = NewItem {
        purchase_date: None,
        ..form()
    };
    assert_eq!(
        messages_for(&missing, "purchaseDate"),
        vec!["Purchase date is required"]
    );
}

#[test]
fn test_category_must_resolve() {
    let today = date(2024, 6, 1);
    let custom = vec![CustomCategory {
        id: "custom_bikes".to_string(),
        name: "Bikes".to_string(),
        depreciation_curve: DepreciationCurve::Vehicles,
    }];

    let bikes = NewItem {
        category: "custom_bikes".to_string(),
        ..form()
    };
    assert!(bikes
        .field_errors(&CategoryRegistry::new(&custom), today)
        .is_empty());
    assert_eq!(
        messages_for(&bikes, "category"),
        vec!["This category no longer exists"]
    );

    let unknown = NewItem {
        category: "furniture".to_string(),
        ..form()
    };
    assert_eq!(messages_for(&unknown, "category").len(), 1);

    let empty = NewItem {
        category: String::new(),
        ..form()
    };
    assert_eq!(messages_for(&empty, "category"), vec!["Select a category"]);
}

#[test]
fn test_into_item_builds_item() {
    let today = date(2024, 6, 1);
    let item = form()
        .into_item("w1".to_string(), &CategoryRegistry::new(&[]), today)
        .unwrap();
    assert_eq!(item.id, "w1");
    assert_eq!(item.category, CategoryRef::Builtin(BuiltinCategory::Appliances));
    assert_eq!(item.warranty_months, 24);
    assert_eq!(item.condition, ItemCondition::Good);
}

#[test]
fn test_item_serializes_camel_case() {
    let mut stored = item("a", "custom_bikes", date(2024, 1, 15), dec!(1200.50));
    stored.receipt_documents.push(ReceiptDocument {
        id: "r1".to_string(),
        kind: DocumentKind::Image,
        name: "receipt.jpg".to_string(),
        data: "data:image/jpeg;base64,AAAA".to_string(),
        added_at: Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap(),
    });

    let json = serde_json::to_value(&stored).unwrap();
    assert_eq!(json["category"], "custom_bikes");
    assert_eq!(json["purchaseDate"], "2024-01-15");
    assert_eq!(json["warrantyMonths"], 24);
    assert_eq!(json["receiptDocuments"][0]["type"], "image");

    let back: Item = serde_json::from_value(json).unwrap();
    assert_eq!(back, stored);
}
