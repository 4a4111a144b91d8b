//! Categories module - built-in and custom categories, resolution, lifecycle.

mod categories_model;
mod categories_service;
mod category_registry;

#[cfg(test)]
mod categories_service_tests;

pub use categories_model::{
    BuiltinCategory, CategoryOption, CategoryRef, CustomCategory, CustomCategoryUpdate,
    NewCustomCategory,
};
pub use categories_service::{
    create_custom_category, delete_custom_category, update_custom_category,
    validate_category_name, CategoryCreated, CategoryDeleted, CategoryUpdated,
};
pub use category_registry::CategoryRegistry;
