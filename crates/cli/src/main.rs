use std::sync::Arc;

use biteright_core::constants::{PROJECTED_MONTHLY_EXPENSES, PROJECTED_MONTHLY_REVENUE};
use biteright_core::{
    BreakEven, CapitalStructure, CoreConfig, DashboardStore, LoanTerms, StageStatus,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "biteright")]
#[command(about = "BiteRight HQ clinic planning CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the launch roadmap and each stage's status
    Stages,
    /// Show the capital structure of the funding plan
    Capital,
    /// Calculate the monthly EMI of a loan
    Emi {
        /// Loan principal in rupees (defaults to the planned bank loan)
        #[arg(long)]
        principal: Option<f64>,
        /// Annual interest rate in percent
        #[arg(long)]
        rate: Option<f64>,
        /// Tenure in months
        #[arg(long)]
        months: Option<u32>,
    },
    /// Estimate months until the invested capital is earned back
    BreakEven {
        /// Total capital in rupees (defaults to equity plus loan)
        #[arg(long)]
        capital: Option<f64>,
        /// Monthly revenue in rupees
        #[arg(long, default_value_t = PROJECTED_MONTHLY_REVENUE)]
        revenue: f64,
        /// Monthly expenses in rupees
        #[arg(long, default_value_t = PROJECTED_MONTHLY_EXPENSES)]
        expenses: f64,
    },
    /// Print the initial dashboard state as JSON
    State,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let cfg = CoreConfig::default();

    match cli.command {
        Some(Commands::Stages) => {
            let store = DashboardStore::new(Arc::new(cfg));
            for stage in store.stages() {
                println!(
                    "Stage {}: {} ({}) [{}]",
                    stage.id,
                    stage.name,
                    stage.description,
                    StageStatus::of(&stage).label()
                );
                println!("  Unlocks after: {}", stage.unlock_requirement);
                for item in &stage.checklist {
                    let mark = if item.completed { "x" } else { " " };
                    println!("  [{}] {} {}", mark, item.id, item.text);
                }
            }
        }
        Some(Commands::Capital) => {
            let funding = cfg.funding();
            let structure = CapitalStructure::of(funding);
            println!("Total capital: {}", format_inr(structure.total_capital));
            println!(
                "Equity:        {} ({:.1}%)",
                format_inr(funding.equity),
                structure.equity_percent
            );
            println!(
                "Loan:          {} ({:.1}%)",
                format_inr(funding.loan),
                structure.loan_percent
            );
            println!(
                "PMEGP subsidy: {} ({}% of project cost)",
                format_inr(funding.subsidy_amount),
                funding.subsidy_percent
            );
        }
        Some(Commands::Emi {
            principal,
            rate,
            months,
        }) => {
            let defaults = cfg.loan_terms();
            let terms = LoanTerms {
                principal: principal.unwrap_or(defaults.principal),
                annual_rate_percent: rate.unwrap_or(defaults.annual_rate_percent),
                months: months.unwrap_or(defaults.months),
            };
            let schedule = terms.schedule();
            println!(
                "Loan of {} at {}% for {} months",
                format_inr(terms.principal),
                terms.annual_rate_percent,
                terms.months
            );
            println!("Monthly EMI:     {}", format_inr(schedule.monthly_emi));
            println!("Total interest:  {}", format_inr(schedule.total_interest));
            println!("Total repayment: {}", format_inr(schedule.total_repayment));
        }
        Some(Commands::BreakEven {
            capital,
            revenue,
            expenses,
        }) => {
            let capital = capital.unwrap_or_else(|| cfg.total_capital());
            let estimate = BreakEven::estimate(capital, revenue, expenses);
            println!(
                "Monthly profit: {}  Burn rate: {}",
                format_inr(revenue - expenses),
                format_inr(expenses)
            );
            println!(
                "Break-even in {} months ({} years, {} months)",
                estimate.months,
                estimate.years(),
                estimate.remaining_months()
            );
        }
        Some(Commands::State) => {
            let store = DashboardStore::new(Arc::new(cfg));
            println!("{}", serde_json::to_string_pretty(&store.global_state())?);
        }
        None => {
            println!("Use 'biteright --help' for commands");
        }
    }

    Ok(())
}

/// Formats whole rupees with Indian digit grouping, e.g. `₹11,00,000`.
fn format_inr(amount: f64) -> String {
    let rounded = amount.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let grouped = if digits.len() <= 3 {
        digits
    } else {
        let (head, tail) = digits.split_at(digits.len() - 3);
        let mut groups: Vec<&str> = Vec::new();
        let mut end = head.len();
        while end > 2 {
            groups.push(&head[end - 2..end]);
            end -= 2;
        }
        groups.push(&head[..end]);
        groups.reverse();
        format!("{},{}", groups.join(","), tail)
    };

    format!("{sign}₹{grouped}")
}
