//! Custom category lifecycle: create, rename / change curve, delete.
//!
//! Each operation takes the current snapshot and returns the updated one;
//! nothing is written anywhere.

use log::{debug, info};
use uuid::Uuid;

use crate::constants::{CUSTOM_CATEGORY_PREFIX, MAX_CATEGORY_NAME_LEN, MIN_CATEGORY_NAME_LEN};
use crate::errors::{CategoryError, FieldError, Result};
use crate::vault::VaultState;

use super::{CategoryRef, CustomCategory, CustomCategoryUpdate, NewCustomCategory};

/// Result of creating a custom category.
#[derive(Debug, Clone)]
pub struct CategoryCreated {
    pub state: VaultState,
    pub category: CustomCategory,
}

/// Result of updating a custom category.
#[derive(Debug, Clone)]
pub struct CategoryUpdated {
    pub state: VaultState,
    pub previous: CustomCategory,
    pub category: CustomCategory,
}

impl CategoryUpdated {
    /// Valuations of the linked items must be recomputed when this is true.
    pub fn curve_changed(&self) -> bool {
        self.previous.depreciation_curve != self.category.depreciation_curve
    }
}

/// Result of deleting a custom category.
#[derive(Debug, Clone)]
pub struct CategoryDeleted {
    pub state: VaultState,
    pub removed: CustomCategory,
    /// Items moved to the "other" bucket
    pub reassigned_item_ids: Vec<String>,
}

fn generate_category_id() -> String {
    format!("{}{}", CUSTOM_CATEGORY_PREFIX, Uuid::new_v4().simple())
}

/// Checks a custom category name against the naming rules. `exclude_id`
/// skips the category being renamed in the uniqueness check.
pub fn validate_category_name(
    name: &str,
    existing: &[CustomCategory],
    exclude_id: Option<&str>,
) -> Result<String> {
    let name = name.trim();
    let length = name.chars().count();

    let message = if name.is_empty() {
        Some("Category name cannot be empty".to_string())
    } else if length < MIN_CATEGORY_NAME_LEN {
        Some(format!(
            "Category name must be at least {} characters",
            MIN_CATEGORY_NAME_LEN
        ))
    } else if length > MAX_CATEGORY_NAME_LEN {
        Some(format!(
            "Category name must be at most {} characters",
            MAX_CATEGORY_NAME_LEN
        ))
    } else {
        None
    };
    if let Some(message) = message {
        return Err(vec![FieldError::new("name", message)].into());
    }

    let lowered = name.to_lowercase();
    let taken = existing
        .iter()
        .filter(|c| Some(c.id.as_str()) != exclude_id)
        .any(|c| c.name.to_lowercase() == lowered);
    if taken {
        return Err(CategoryError::DuplicateName(name.to_string()).into());
    }

    Ok(name.to_string())
}

pub fn create_custom_category(
    state: &VaultState,
    new_category: NewCustomCategory,
) -> Result<CategoryCreated> {
    let name = validate_category_name(&new_category.name, &state.custom_categories, None)?;

    let id = match new_category.id {
        Some(id) => {
            if !matches!(id.parse::<CategoryRef>(), Ok(CategoryRef::Custom(_))) {
                return Err(CategoryError::UnknownKey(id).into());
            }
            if state.custom_categories.iter().any(|c| c.id == id) {
                return Err(CategoryError::DuplicateId(id).into());
            }
            id
        }
        None => generate_category_id(),
    };

    let category = CustomCategory {
        id,
        name,
        depreciation_curve: new_category.depreciation_curve,
    };

    let mut state = state.clone();
    state.custom_categories.push(category.clone());

    info!(
        "Custom category created: {} ({})",
        category.name,
        category.depreciation_curve.label()
    );
    Ok(CategoryCreated { state, category })
}

/// Renames a custom category and/or changes its curve. The id is kept, so
/// every item referencing it stays linked.
pub fn update_custom_category(
    state: &VaultState,
    id: &str,
    update: CustomCategoryUpdate,
) -> Result<CategoryUpdated> {
    let previous = state
        .custom_categories
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .ok_or_else(|| CategoryError::NotFound(id.to_string()))?;

    let name = validate_category_name(&update.name, &state.custom_categories, Some(id))?;

    let category = CustomCategory {
        id: previous.id.clone(),
        name,
        depreciation_curve: update.depreciation_curve,
    };

    let mut state = state.clone();
    if let Some(slot) = state.custom_categories.iter_mut().find(|c| c.id == id) {
        *slot = category.clone();
    }

    let updated = CategoryUpdated {
        state,
        previous,
        category,
    };
    if updated.curve_changed() {
        info!(
            "Custom category updated: {} -> {}, curve: {}",
            updated.previous.name,
            updated.category.name,
            updated.category.depreciation_curve.label()
        );
    } else {
        info!(
            "Custom category renamed: {} -> {}",
            updated.previous.name, updated.category.name
        );
    }
    Ok(updated)
}

/// Deletes a custom category and moves its items to "other". Not undoable.
pub fn delete_custom_category(state: &VaultState, id: &str) -> Result<CategoryDeleted> {
    let removed = state
        .custom_categories
        .iter()
        .find(|c| c.id == id)
        .cloned()
        .ok_or_else(|| CategoryError::NotFound(id.to_string()))?;

    let mut state = state.clone();
    state.custom_categories.retain(|c| c.id != id);

    let mut reassigned_item_ids = Vec::new();
    for item in state.items.iter_mut() {
        if item.category.custom_id() == Some(id) {
            item.category = CategoryRef::other();
            reassigned_item_ids.push(item.id.clone());
        }
    }

    debug!(
        "Reassigned {} item(s) from {} to other",
        reassigned_item_ids.len(),
        removed.id
    );
    info!("Custom category deleted: {}", removed.name);
    Ok(CategoryDeleted {
        state,
        removed,
        reassigned_item_ids,
    })
}
