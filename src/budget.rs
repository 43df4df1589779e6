//! Comparing total spending against a budget.

use crate::model::{Amount, Transaction};
use crate::Result;
use anyhow::Context;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Whether spending went over the budget, and by how much, or how much is left.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BudgetStatus {
    /// Spending exceeded the budget by this non-negative amount.
    Over(Amount),
    /// Spending did not exceed the budget; this much remains.
    Within(Amount),
}

/// The outcome of evaluating a set of debits against a budget.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct BudgetReport {
    budget: Amount,
    total: Amount,
    status: BudgetStatus,
}

impl BudgetReport {
    /// Sums `transactions` and compares the sum with `budget`. Spending exactly equal to the
    /// budget is within budget with nothing remaining.
    ///
    /// # Errors
    /// - Returns an error if the total, or its difference from `budget`, cannot be represented.
    pub fn evaluate(transactions: &[Transaction], budget: Amount) -> Result<Self> {
        let total = transactions
            .iter()
            .try_fold(Amount::default(), |sum, t| sum.checked_add(t.amount()))
            .context("Total expenses are too large to add up")?;
        let status = if total > budget {
            BudgetStatus::Over(
                total
                    .checked_sub(budget)
                    .context("The amount over budget is too large to represent")?,
            )
        } else {
            BudgetStatus::Within(
                budget
                    .checked_sub(total)
                    .context("The remaining budget is too large to represent")?,
            )
        };
        Ok(Self {
            budget,
            total,
            status,
        })
    }

    pub fn budget(&self) -> Amount {
        self.budget
    }

    pub fn total(&self) -> Amount {
        self.total
    }

    pub fn status(&self) -> BudgetStatus {
        self.status
    }
}

impl Display for BudgetReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total Expenses: {}", self.total)?;
        match self.status {
            BudgetStatus::Over(by) => write!(f, "You have exceeded your budget by {by}"),
            BudgetStatus::Within(remaining) => write!(
                f,
                "You are within your budget. Remaining budget: {remaining}"
            ),
        }
    }
}
