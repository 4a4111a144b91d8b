//! Category domain models.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::CUSTOM_CATEGORY_PREFIX;
use crate::errors::CategoryError;
use crate::valuation::DepreciationCurve;

/// The fixed categories every vault starts with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BuiltinCategory {
    Electronics,
    Appliances,
    Vehicles,
    #[default]
    Other,
}

impl BuiltinCategory {
    pub const ALL: [BuiltinCategory; 4] = [
        BuiltinCategory::Electronics,
        BuiltinCategory::Appliances,
        BuiltinCategory::Vehicles,
        BuiltinCategory::Other,
    ];

    /// Stored key of this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            BuiltinCategory::Electronics => "electronics",
            BuiltinCategory::Appliances => "appliances",
            BuiltinCategory::Vehicles => "vehicles",
            BuiltinCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BuiltinCategory::Electronics => "Electronics",
            BuiltinCategory::Appliances => "Appliances",
            BuiltinCategory::Vehicles => "Vehicles",
            BuiltinCategory::Other => "Other",
        }
    }

    /// Fixed curve mapping. `Other` depreciates on the generic curve.
    pub fn curve(&self) -> DepreciationCurve {
        match self {
            BuiltinCategory::Electronics => DepreciationCurve::Electronics,
            BuiltinCategory::Appliances => DepreciationCurve::Appliances,
            BuiltinCategory::Vehicles => DepreciationCurve::Vehicles,
            BuiltinCategory::Other => DepreciationCurve::Generic,
        }
    }
}

/// Reference from an item to its category.
///
/// Stored as the raw key (`"electronics"`, `"custom_<suffix>"`) and parsed
/// once at the boundary, so use sites never re-inspect prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryRef {
    Builtin(BuiltinCategory),
    Custom(String),
}

impl CategoryRef {
    /// The fallback bucket for items whose custom category disappeared.
    pub fn other() -> Self {
        CategoryRef::Builtin(BuiltinCategory::Other)
    }

    /// Raw key, also used as the statistics category key.
    pub fn key(&self) -> &str {
        match self {
            CategoryRef::Builtin(builtin) => builtin.as_str(),
            CategoryRef::Custom(id) => id,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, CategoryRef::Custom(_))
    }

    pub fn custom_id(&self) -> Option<&str> {
        match self {
            CategoryRef::Custom(id) => Some(id),
            CategoryRef::Builtin(_) => None,
        }
    }
}

impl Default for CategoryRef {
    fn default() -> Self {
        CategoryRef::other()
    }
}

impl From<BuiltinCategory> for CategoryRef {
    fn from(builtin: BuiltinCategory) -> Self {
        CategoryRef::Builtin(builtin)
    }
}

impl FromStr for CategoryRef {
    type Err = CategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if let Some(builtin) = BuiltinCategory::ALL.iter().find(|b| b.as_str() == key) {
            return Ok(CategoryRef::Builtin(*builtin));
        }
        match key.strip_prefix(CUSTOM_CATEGORY_PREFIX) {
            Some(suffix) if !suffix.is_empty() => Ok(CategoryRef::Custom(key.to_string())),
            _ => Err(CategoryError::UnknownKey(s.to_string())),
        }
    }
}

impl TryFrom<String> for CategoryRef {
    type Error = CategoryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryRef> for String {
    fn from(category: CategoryRef) -> Self {
        category.key().to_string()
    }
}

impl fmt::Display for CategoryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A user-defined category with its own depreciation curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCategory {
    /// Prefixed id, e.g. `custom_5f0c...`
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub depreciation_curve: DepreciationCurve,
}

impl CustomCategory {
    pub fn category_ref(&self) -> CategoryRef {
        CategoryRef::Custom(self.id.clone())
    }
}

/// Input model for creating a custom category.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewCustomCategory {
    /// Generated when absent
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub depreciation_curve: DepreciationCurve,
}

/// Input model for renaming a custom category and/or changing its curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCategoryUpdate {
    pub name: String,
    pub depreciation_curve: DepreciationCurve,
}

/// One entry of the category picker: built-ins first, then custom ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryOption {
    pub key: String,
    pub label: String,
    pub curve: DepreciationCurve,
    pub is_custom: bool,
}
