//! Append-only transaction ledger and its profit and loss summary.

use api_shared::{FinanceData, FinanceSummary, Transaction, TransactionKind};

use crate::validation::NewTransaction;

#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sums the full ledger. Nothing is cached, so this is always in step with the list.
    pub fn summary(&self) -> FinanceSummary {
        let total = |kind: TransactionKind| -> f64 {
            self.transactions
                .iter()
                .filter(|t| t.kind == kind)
                .map(|t| t.amount)
                .sum()
        };
        let total_income = total(TransactionKind::Income);
        let total_expenses = total(TransactionKind::Expense);

        FinanceSummary {
            total_income,
            total_expenses,
            profit: total_income - total_expenses,
        }
    }

    pub fn snapshot(&self) -> FinanceData {
        FinanceData {
            transactions: self.transactions.clone(),
            summary: self.summary(),
        }
    }

    /// Appends a validated transaction under a fresh id.
    pub fn record(&mut self, new: NewTransaction) -> &Transaction {
        let transaction = Transaction {
            id: crate::new_record_id(),
            date: new.date.into_string(),
            kind: new.kind,
            category: new.category.into_string(),
            description: new.description.into_string(),
            amount: new.amount,
            patient_id: new.patient_id,
        };
        tracing::info!(
            "recorded {} of {} ({})",
            transaction.kind.as_str(),
            transaction.amount,
            transaction.category
        );

        self.transactions.push(transaction);
        &self.transactions[self.transactions.len() - 1]
    }
}
