//! Dashboard - headline spend, value, warranty and resale figures.

mod dashboard_model;
mod dashboard_service;

pub use dashboard_model::{DashboardSummary, YearFilter};
pub use dashboard_service::dashboard_summary;
