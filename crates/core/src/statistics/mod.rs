//! Statistics aggregator - spend by month, year and category.

mod statistics_model;
mod statistics_service;

pub use statistics_model::{PurchaseStatistics, StatisticsBucket};
pub use statistics_service::{aggregate, fill_months};
