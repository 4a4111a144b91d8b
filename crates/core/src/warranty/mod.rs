//! Warranty tracker - expiry state machine, reminders and checklists.

mod inspection_checklist;
mod warranty_model;
mod warranty_tracker;

pub use inspection_checklist::inspection_checklist;
pub use warranty_model::{
    InspectionCheck, InspectionChecklist, WarrantyAlert, WarrantyState, WarrantyStatus,
};
pub use warranty_tracker::{warranty_status, WarrantyTracker};
