//! Loan repayment and break-even projections for the Commander view.
//!
//! These are display figures only. Nothing here moves money.

use api_shared::Funding;

/// Terms of an amortising bank loan.
#[derive(Debug, Clone, PartialEq)]
pub struct LoanTerms {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub months: u32,
}

/// Repayment figures for a [`LoanTerms`], rounded to whole rupees.
#[derive(Debug, Clone, PartialEq)]
pub struct EmiSchedule {
    pub monthly_emi: f64,
    pub total_repayment: f64,
    pub total_interest: f64,
}

impl LoanTerms {
    /// Equated monthly instalment: `P·r·(1+r)^n / ((1+r)^n − 1)` with `r` the monthly rate.
    ///
    /// A zero rate repays the principal in equal parts. A zero tenure has no instalment.
    pub fn monthly_emi(&self) -> f64 {
        if self.months == 0 {
            return 0.0;
        }
        let n = f64::from(self.months);
        let r = self.annual_rate_percent / 12.0 / 100.0;
        if r == 0.0 {
            return (self.principal / n).round();
        }
        let growth = (1.0 + r).powf(n);
        (self.principal * r * growth / (growth - 1.0)).round()
    }

    pub fn schedule(&self) -> EmiSchedule {
        let monthly_emi = self.monthly_emi();
        let total_repayment = monthly_emi * f64::from(self.months);
        EmiSchedule {
            monthly_emi,
            total_repayment,
            total_interest: total_repayment - self.principal,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakEven {
    pub months: u32,
}

impl BreakEven {
    /// Months needed to earn back `total_capital` from the monthly margin.
    ///
    /// The margin is taken as an absolute value and a zero margin counts as one rupee, so the
    /// estimate is always finite.
    pub fn estimate(total_capital: f64, monthly_revenue: f64, monthly_expenses: f64) -> Self {
        let margin = (monthly_revenue - monthly_expenses).abs();
        let margin = if margin == 0.0 { 1.0 } else { margin };
        let months = (total_capital / margin).ceil();
        Self {
            months: if months.is_finite() && months > 0.0 {
                months.min(f64::from(u32::MAX)) as u32
            } else {
                0
            },
        }
    }

    pub fn years(&self) -> u32 {
        self.months / 12
    }

    pub fn remaining_months(&self) -> u32 {
        self.months % 12
    }
}

/// Share of each funding source in the total capital, in percent.
#[derive(Debug, Clone, PartialEq)]
pub struct CapitalStructure {
    pub total_capital: f64,
    pub equity_percent: f64,
    pub loan_percent: f64,
    pub subsidy_percent_of_capital: f64,
}

impl CapitalStructure {
    pub fn of(funding: &Funding) -> Self {
        let total_capital = funding.equity + funding.loan;
        let share = |part: f64| {
            if total_capital > 0.0 {
                part / total_capital * 100.0
            } else {
                0.0
            }
        };
        Self {
            total_capital,
            equity_percent: share(funding.equity),
            loan_percent: share(funding.loan),
            subsidy_percent_of_capital: share(funding.subsidy_amount),
        }
    }
}
