//! # API Shared
//!
//! Shared wire definitions for the BiteRight HQ APIs.
//!
//! Contains:
//! - Dashboard resource types (`Stage`, `Transaction`, `Patient`, ...) in their JSON shape
//! - Request and response bodies for every REST endpoint
//! - Shared services like `HealthService`
//!
//! Used by `biteright-core`, `api-rest` and the CLI so every surface speaks the same JSON.

pub mod dashboard;
pub mod health;

pub use dashboard::*;
pub use health::{HealthRes, HealthService};
