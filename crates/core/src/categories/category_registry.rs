//! Read-only category resolution over a snapshot of custom categories.

use crate::valuation::DepreciationCurve;

use super::{BuiltinCategory, CategoryOption, CategoryRef, CustomCategory};

/// Resolves category references to curves and labels.
///
/// Lookups never fail: a reference to a deleted custom category resolves to
/// the generic curve and the "Other" label.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRegistry<'a> {
    custom_categories: &'a [CustomCategory],
}

impl<'a> CategoryRegistry<'a> {
    pub fn new(custom_categories: &'a [CustomCategory]) -> Self {
        Self { custom_categories }
    }

    pub fn custom_categories(&self) -> &'a [CustomCategory] {
        self.custom_categories
    }

    pub fn find_custom(&self, id: &str) -> Option<&'a CustomCategory> {
        self.custom_categories.iter().find(|c| c.id == id)
    }

    /// Whether the reference points at a built-in or an existing custom category.
    pub fn is_resolvable(&self, category: &CategoryRef) -> bool {
        match category {
            CategoryRef::Builtin(_) => true,
            CategoryRef::Custom(id) => self.find_custom(id).is_some(),
        }
    }

    pub fn resolve_curve(&self, category: &CategoryRef) -> DepreciationCurve {
        match category {
            CategoryRef::Builtin(builtin) => builtin.curve(),
            CategoryRef::Custom(id) => self
                .find_custom(id)
                .map(|custom| custom.depreciation_curve)
                .unwrap_or(DepreciationCurve::Generic),
        }
    }

    pub fn label(&self, category: &CategoryRef) -> String {
        match category {
            CategoryRef::Builtin(builtin) => builtin.label().to_string(),
            CategoryRef::Custom(id) => self
                .find_custom(id)
                .map(|custom| custom.name.clone())
                .unwrap_or_else(|| BuiltinCategory::Other.label().to_string()),
        }
    }

    /// Label for a raw stored key, e.g. a statistics bucket key.
    pub fn label_for_key(&self, key: &str) -> String {
        key.parse::<CategoryRef>()
            .map(|category| self.label(&category))
            .unwrap_or_else(|_| BuiltinCategory::Other.label().to_string())
    }

    /// Picker entries: built-ins in fixed order, then custom categories in
    /// creation order.
    pub fn options(&self) -> Vec<CategoryOption> {
        let builtins = BuiltinCategory::ALL.iter().map(|builtin| CategoryOption {
            key: builtin.as_str().to_string(),
            label: builtin.label().to_string(),
            curve: builtin.curve(),
            is_custom: false,
        });
        let customs = self.custom_categories.iter().map(|custom| CategoryOption {
            key: custom.id.clone(),
            label: custom.name.clone(),
            curve: custom.depreciation_curve,
            is_custom: true,
        });
        builtins.chain(customs).collect()
    }
}
