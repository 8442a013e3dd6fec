//! # BiteRight Core
//!
//! Core business logic for the BiteRight HQ clinic dashboard.
//!
//! This crate holds the in-memory state and the rules applied to it:
//! - Stage progression: four sequential stages gated by their checklists
//! - Finances: an append-only transaction ledger with a derived P&L summary
//! - Patients: treatment records with EMI payment plans
//! - Loan and break-even projections for the Commander view
//!
//! **No API concerns**: HTTP routing, JSON error bodies and CORS belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod finances;
pub mod loan;
pub mod patients;
pub mod seed;
pub mod stages;
pub mod store;
pub mod validation;

pub use config::CoreConfig;
pub use error::{DashboardError, DashboardResult};
pub use loan::{BreakEven, CapitalStructure, EmiSchedule, LoanTerms};
pub use stages::{StageBoard, StageStatus};
pub use store::DashboardStore;

/// Generates an identifier for a new transaction or patient record.
///
/// Identifiers are 32 lowercase hex characters (a v4 UUID without hyphens).
pub(crate) fn new_record_id() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}
