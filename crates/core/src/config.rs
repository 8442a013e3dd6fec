//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the
//! [`DashboardStore`](crate::DashboardStore). Request handling never reads environment
//! variables.

use crate::constants::{
    SEED_EQUITY, SEED_GENERAL_PER_DAY, SEED_LOAN, SEED_LOAN_MONTHS, SEED_LOAN_RATE_PERCENT,
    SEED_ORTHO_PER_MONTH, SEED_SUBSIDY_PERCENT,
};
use crate::loan::LoanTerms;
use crate::{DashboardError, DashboardResult};
use api_shared::{Funding, Targets};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    funding: Funding,
    targets: Targets,
    loan_terms: LoanTerms,
}

impl CoreConfig {
    /// Create a new `CoreConfig` from the clinic's capital plan.
    ///
    /// The subsidy amount is derived as a percentage of total project cost
    /// (equity plus loan).
    pub fn new(equity: f64, loan: f64, subsidy_percent: f64) -> DashboardResult<Self> {
        for (name, value) in [("equity", equity), ("loan", loan)] {
            if !value.is_finite() || value < 0.0 {
                return Err(DashboardError::InvalidConfig(format!(
                    "{name} must be a non-negative amount"
                )));
            }
        }
        if !(0.0..=100.0).contains(&subsidy_percent) {
            return Err(DashboardError::InvalidConfig(
                "subsidy percent must be between 0 and 100".into(),
            ));
        }

        Ok(Self {
            funding: Funding {
                equity,
                loan,
                subsidy_percent,
                subsidy_amount: (equity + loan) * subsidy_percent / 100.0,
            },
            targets: Targets {
                ortho_per_month: SEED_ORTHO_PER_MONTH,
                general_per_day: SEED_GENERAL_PER_DAY,
            },
            loan_terms: LoanTerms {
                principal: loan,
                annual_rate_percent: SEED_LOAN_RATE_PERCENT,
                months: SEED_LOAN_MONTHS,
            },
        })
    }

    /// Builds the configuration from optional raw environment values.
    ///
    /// `None` or blank values fall back to the seed plan.
    pub fn from_env_values(
        equity: Option<String>,
        loan: Option<String>,
        subsidy_percent: Option<String>,
    ) -> DashboardResult<Self> {
        Self::new(
            amount_from_env_value("BITERIGHT_EQUITY", equity, SEED_EQUITY)?,
            amount_from_env_value("BITERIGHT_LOAN", loan, SEED_LOAN)?,
            amount_from_env_value(
                "BITERIGHT_SUBSIDY_PERCENT",
                subsidy_percent,
                SEED_SUBSIDY_PERCENT,
            )?,
        )
    }

    pub fn funding(&self) -> &Funding {
        &self.funding
    }

    pub fn targets(&self) -> &Targets {
        &self.targets
    }

    pub fn loan_terms(&self) -> &LoanTerms {
        &self.loan_terms
    }

    /// Equity plus loan.
    pub fn total_capital(&self) -> f64 {
        self.funding.equity + self.funding.loan
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            funding: Funding {
                equity: SEED_EQUITY,
                loan: SEED_LOAN,
                subsidy_percent: SEED_SUBSIDY_PERCENT,
                subsidy_amount: (SEED_EQUITY + SEED_LOAN) * SEED_SUBSIDY_PERCENT / 100.0,
            },
            targets: Targets {
                ortho_per_month: SEED_ORTHO_PER_MONTH,
                general_per_day: SEED_GENERAL_PER_DAY,
            },
            loan_terms: LoanTerms {
                principal: SEED_LOAN,
                annual_rate_percent: SEED_LOAN_RATE_PERCENT,
                months: SEED_LOAN_MONTHS,
            },
        }
    }
}

/// Parse an amount from an optional environment value.
pub fn amount_from_env_value(
    name: &str,
    value: Option<String>,
    default: f64,
) -> DashboardResult<f64> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    match value {
        None => Ok(default),
        Some(v) => v
            .parse::<f64>()
            .map_err(|_| DashboardError::InvalidConfig(format!("{name} is not a number: {v}"))),
    }
}
