use crate::application::solver::Solution;
use crate::domain::loan::Money;
use crate::domain::schedule::Statement;
use crate::error::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::fmt::Write as _;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[derive(Serialize)]
struct PaymentReport<'a> {
    lowest_payment: Money,
    #[serde(flatten)]
    solution: &'a Solution,
}

/// Renders a converged search, e.g. `Lowest Payment: 29157.09`.
pub fn render_solution(solution: &Solution, format: OutputFormat) -> Result<String> {
    let lowest_payment = solution.lowest_payment()?;
    match format {
        OutputFormat::Text => Ok(format!("Lowest Payment: {lowest_payment}")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&PaymentReport {
            lowest_payment,
            solution,
        })?),
    }
}

pub fn render_statement(statement: &Statement, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => {
            let mut out = String::new();
            for month in &statement.months {
                // Writing into a String cannot fail.
                let _ = writeln!(out, "Month: {}", month.month);
                let _ = writeln!(out, "Minimum monthly payment: {}", month.minimum_payment);
                let _ = writeln!(out, "Remaining balance: {}", month.remaining_balance);
            }
            let _ = writeln!(out, "Total paid: {}", statement.total_paid);
            let _ = write!(out, "Remaining balance: {}", statement.remaining_balance);
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(statement)?),
    }
}
