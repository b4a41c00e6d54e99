// Application log actions
pub const TRANSACTION_CREATED: &str = "TRANSACTION_CREATED";
pub const TRANSACTION_UPDATED: &str = "TRANSACTION_UPDATED";
pub const TRANSACTION_RECALCULATED: &str = "TRANSACTION_RECALCULATED";
pub const TRANSACTION_DELETED: &str = "TRANSACTION_DELETED";

// Default processor fees, in percentage points
pub const DEFAULT_DEBIT_FEE_RATE: f64 = 1.61;
pub const DEFAULT_CREDIT_FEE_RATE: f64 = 3.51;

// Default split, in percentage points
pub const DEFAULT_STUDIO_RATE: f64 = 60.0;
pub const DEFAULT_PROFESSIONAL_RATE: f64 = 40.0;
pub const DEFAULT_ASSISTANT_RATE: f64 = 10.0;

/// Upper bound accepted for any single payment-method amount.
pub const MAX_PAYMENT_AMOUNT: f64 = 1_000_000.0;

/// One cent.
pub const RECONCILIATION_TOLERANCE: f64 = 0.01;

pub const MAX_DESCRIPTION_LENGTH: usize = 255;
pub const MIN_REFERENCE_YEAR: i32 = 2000;
pub const MAX_REFERENCE_YEAR: i32 = 2100;

pub const DEFAULT_SUMMARY_CACHE_TTL_SECS: u64 = 300;
pub const MAX_SUMMARY_CACHE_TTL_SECS: u64 = 86_400;
