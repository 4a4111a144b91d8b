/// Decimal precision for valuation calculations
pub const DECIMAL_PRECISION: u32 = 6;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Ownership durations are measured in simplified 30-day months
pub const DAYS_PER_MONTH: i64 = 30;

/// Prefix that marks a category id as user-defined
pub const CUSTOM_CATEGORY_PREFIX: &str = "custom_";

/// Item name must be at least this many characters once trimmed
pub const MIN_ITEM_NAME_LEN: usize = 2;

/// Highest accepted purchase price
pub const MAX_ITEM_PRICE: i64 = 1_000_000;

/// Longest accepted warranty, in months (10 years)
pub const MAX_WARRANTY_MONTHS: i32 = 120;

/// Purchases older than this many years are rejected as typos
pub const MAX_PURCHASE_AGE_YEARS: i32 = 50;

/// Custom category names are 2 to 30 characters
pub const MIN_CATEGORY_NAME_LEN: usize = 2;
pub const MAX_CATEGORY_NAME_LEN: usize = 30;

/// Default days-before-expiry window in which a warranty counts as expiring
pub const DEFAULT_EXPIRING_WINDOW_DAYS: i64 = 30;

/// Default lead time for the "warranty expires soon" reminder
pub const DEFAULT_REMINDER_DAYS: i64 = 7;

/// File name given to receipts migrated from the single-image record layout
pub const LEGACY_RECEIPT_NAME: &str = "receipt.jpg";
