//! Constants used throughout the BiteRight core crate.
//!
//! Seed figures mirror the clinic's launch plan; amounts are in rupees.

/// Default listen address for the REST server.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Promoter equity.
pub const SEED_EQUITY: f64 = 600_000.0;

/// Bank loan principal.
pub const SEED_LOAN: f64 = 1_100_000.0;

/// PMEGP subsidy as a percentage of total project cost.
pub const SEED_SUBSIDY_PERCENT: f64 = 25.0;

pub const SEED_ORTHO_PER_MONTH: u32 = 1;
pub const SEED_GENERAL_PER_DAY: u32 = 1;

/// Annual interest rate of the bank loan, in percent.
pub const SEED_LOAN_RATE_PERCENT: f64 = 9.0;

/// Loan tenure in months (five years).
pub const SEED_LOAN_MONTHS: u32 = 60;

/// Projected monthly revenue once the clinic is operating.
pub const PROJECTED_MONTHLY_REVENUE: f64 = 120_000.0;

/// Projected monthly operating expenses.
pub const PROJECTED_MONTHLY_EXPENSES: f64 = 85_000.0;

/// Stage the dashboard starts on.
pub const FIRST_STAGE_ID: u32 = 1;

pub const MISSING_TRANSACTION_FIELDS: &str =
    "Missing required fields: type, category, description, amount, date";
pub const INVALID_TRANSACTION_TYPE: &str = "Type must be \"income\" or \"expense\"";
pub const MISSING_PATIENT_FIELDS: &str = "Missing required fields: name, phone, treatment, amount";
