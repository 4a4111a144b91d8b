use crate::categories::{
    create_custom_category, delete_custom_category, update_custom_category, CategoryRef,
    CustomCategory, CustomCategoryUpdate, NewCustomCategory,
};
use crate::errors::{CategoryError, Error, ValidationError};
use crate::items::fixtures::{date, item};
use crate::valuation::DepreciationCurve;
use crate::vault::VaultState;
use rust_decimal_macros::dec;

fn state_with_bikes() -> VaultState {
    VaultState::new(
        vec![
            item("1", "custom_bikes", date(2023, 1, 10), dec!(1200)),
            item("2", "electronics", date(2023, 5, 1), dec!(900)),
            item("3", "custom_bikes", date(2024, 2, 3), dec!(300)),
        ],
        vec![CustomCategory {
            id: "custom_bikes".to_string(),
            name: "Bikes".to_string(),
            depreciation_curve: DepreciationCurve::Vehicles,
        }],
    )
}

#[test]
fn test_create_generates_prefixed_id() {
    let created = create_custom_category(
        &VaultState::default(),
        NewCustomCategory {
            name: "  Watches ".to_string(),
            depreciation_curve: DepreciationCurve::None,
            ..Default::default()
        },
    )
    .unwrap();

    assert!(created.category.id.starts_with("custom_"));
    assert_eq!(created.category.name, "Watches");
    assert_eq!(created.state.custom_categories, vec![created.category.clone()]);
}

#[test]
fn test_create_defaults_to_generic_curve() {
    let new_category: NewCustomCategory = serde_json::from_str(r#"{"name":"Tools"}"#).unwrap();
    let created = create_custom_category(&VaultState::default(), new_category).unwrap();
    assert_eq!(created.category.depreciation_curve, DepreciationCurve::Generic);
}

#[test]
fn test_create_rejects_duplicate_name_case_insensitively() {
    let result = create_custom_category(
        &state_with_bikes(),
        NewCustomCategory {
            name: "BIKES".to_string(),
            ..Default::default()
        },
    );
    assert!(matches!(
        result,
        Err(Error::Category(CategoryError::DuplicateName(_)))
    ));
}

#[test]
fn test_create_rejects_bad_names() {
    let too_long = "a".repeat(31);
    for name in ["", " ", "X", too_long.as_str()] {
        let result = create_custom_category(
            &VaultState::default(),
            NewCustomCategory {
                name: name.to_string(),
                ..Default::default()
            },
        );
        match result {
            Err(Error::Validation(ValidationError::Fields(errors))) => {
                assert_eq!(errors[0].field, "name", "name {:?}", name)
            }
            other => panic!("expected field error for {:?}, got {:?}", name, other),
        }
    }
}

#[test]
fn test_create_rejects_supplied_id_without_prefix_or_taken() {
    let state = state_with_bikes();
    let unprefixed = create_custom_category(
        &state,
        NewCustomCategory {
            id: Some("bikes".to_string()),
            name: "Scooters".to_string(),
            ..Default::default()
        },
    );
    assert!(matches!(
        unprefixed,
        Err(Error::Category(CategoryError::UnknownKey(_)))
    ));

    let taken = create_custom_category(
        &state,
        NewCustomCategory {
            id: Some("custom_bikes".to_string()),
            name: "Scooters".to_string(),
            ..Default::default()
        },
    );
    assert!(matches!(
        taken,
        Err(Error::Category(CategoryError::DuplicateId(_)))
    ));
}

#[test]
fn test_rename_preserves_id_curve_and_links() {
    let state = state_with_bikes();
    let updated = update_custom_category(
        &state,
        "custom_bikes",
        CustomCategoryUpdate {
            name: "Bicycles".to_string(),
            depreciation_curve: DepreciationCurve::Vehicles,
        },
    )
    .unwrap();

    assert_eq!(updated.category.id, "custom_bikes");
    assert_eq!(updated.category.depreciation_curve, DepreciationCurve::Vehicles);
    assert!(!updated.curve_changed());

    let registry = updated.state.registry();
    let linked = CategoryRef::Custom("custom_bikes".to_string());
    assert_eq!(registry.label(&linked), "Bicycles");
    assert_eq!(updated.state.usage_count(&linked), 2);
    assert_eq!(updated.state.items, state.items);
}

#[test]
fn test_rename_to_own_name_with_different_case_is_allowed() {
    let updated = update_custom_category(
        &state_with_bikes(),
        "custom_bikes",
        CustomCategoryUpdate {
            name: "BIKES".to_string(),
            depreciation_curve: DepreciationCurve::None,
        },
    )
    .unwrap();
    assert_eq!(updated.category.name, "BIKES");
    assert!(updated.curve_changed());
}

#[test]
fn test_update_unknown_category() {
    let result = update_custom_category(
        &state_with_bikes(),
        "custom_nope",
        CustomCategoryUpdate {
            name: "Whatever".to_string(),
            depreciation_curve: DepreciationCurve::Generic,
        },
    );
    assert!(matches!(result, Err(Error::Category(CategoryError::NotFound(_)))));
}

#[test]
fn test_delete_reassigns_items_to_other() {
    let state = state_with_bikes();
    let deleted = delete_custom_category(&state, "custom_bikes").unwrap();

    assert_eq!(deleted.removed.name, "Bikes");
    assert_eq!(deleted.reassigned_item_ids, vec!["1", "3"]);
    assert!(deleted.state.custom_categories.is_empty());
    assert!(deleted
        .state
        .items
        .iter()
        .all(|i| !i.category.is_custom()));
    assert_eq!(deleted.state.usage_count(&CategoryRef::other()), 2);
    // Input snapshot untouched
    assert_eq!(state.custom_categories.len(), 1);
}

#[test]
fn test_delete_unknown_category() {
    let result = delete_custom_category(&VaultState::default(), "custom_nope");
    assert!(matches!(result, Err(Error::Category(CategoryError::NotFound(_)))));
}
