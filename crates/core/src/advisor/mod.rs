//! Sell advisor - decides whether an item sits in its resale sweet spot.

mod advisor_model;
mod sell_advisor;

pub use advisor_model::{SellCandidate, SellRecommendation, Urgency};
pub use sell_advisor::{analyze_item, evaluate_sell_window, items_to_sell};
