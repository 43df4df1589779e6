//! Per-category spending totals and the spending summary report.

use crate::model::{Amount, Transaction};
use crate::statement::Statement;
use crate::Result;
use anyhow::Context;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Cumulative debit totals keyed by category, kept in the order categories were first seen.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CategoryTotals {
    totals: Vec<CategoryTotal>,
}

/// One category and the sum of its debits.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CategoryTotal {
    category: String,
    total: Amount,
}

impl CategoryTotal {
    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn total(&self) -> Amount {
        self.total
    }
}

impl CategoryTotals {
    pub fn new() -> Self {
        Self::default()
    }

    /// Totals the debits in `transactions` by category.
    pub fn from_transactions(transactions: &[Transaction]) -> Result<Self> {
        let mut totals = CategoryTotals::new();
        for t in transactions {
            totals.add(t.category(), t.amount())?;
        }
        Ok(totals)
    }

    /// Adds `amount` to `category`, appending the category if it has not been seen.
    ///
    /// # Errors
    /// - Returns an error if the category total overflows. The totals are left unchanged.
    pub fn add(&mut self, category: &str, amount: Amount) -> Result<()> {
        match self.totals.iter_mut().find(|t| t.category == category) {
            Some(existing) => {
                existing.total = existing
                    .total
                    .checked_add(amount)
                    .with_context(|| format!("The total for '{category}' overflowed"))?
            }
            None => self.totals.push(CategoryTotal {
                category: category.to_string(),
                total: amount,
            }),
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryTotal> {
        self.totals.iter()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// The sum of all category totals.
    pub fn grand_total(&self) -> Result<Amount> {
        self.totals
            .iter()
            .try_fold(Amount::default(), |sum, t| sum.checked_add(t.total))
            .context("Total expenses overflowed")
    }

    /// The category with the largest total. On a tie the earliest category wins.
    pub fn highest(&self) -> Option<&CategoryTotal> {
        self.totals.iter().reduce(|best, t| {
            if t.total.value() > best.total.value() {
                t
            } else {
                best
            }
        })
    }

    /// The category with the smallest total. On a tie the earliest category wins.
    pub fn lowest(&self) -> Option<&CategoryTotal> {
        self.totals.iter().reduce(|best, t| {
            if t.total.value() < best.total.value() {
                t
            } else {
                best
            }
        })
    }
}

/// Everything printed by the spending summary.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct SpendingSummary {
    totals: CategoryTotals,
    total_expenses: Amount,
    credited: Amount,
}

impl SpendingSummary {
    pub fn new(statement: &Statement) -> Result<Self> {
        let totals = CategoryTotals::from_transactions(statement.transactions())?;
        let total_expenses = totals.grand_total()?;
        Ok(Self {
            totals,
            total_expenses,
            credited: statement.credited(),
        })
    }

    pub fn totals(&self) -> &CategoryTotals {
        &self.totals
    }

    pub fn total_expenses(&self) -> Amount {
        self.total_expenses
    }

    pub fn credited(&self) -> Amount {
        self.credited
    }
}

impl Display for SpendingSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Spending Summary:")?;
        for t in self.totals.iter() {
            writeln!(f, "  - {}: {}", t.category, t.total)?;
        }
        writeln!(f, "Total Expenses: {}", self.total_expenses)?;
        if let (Some(high), Some(low)) = (self.totals.highest(), self.totals.lowest()) {
            writeln!(f, "Highest Spending: {} - {}", high.category, high.total)?;
            writeln!(f, "Lowest Spending: {} - {}", low.category, low.total)?;
        }
        write!(f, "Total Credited Amount: {}", self.credited)
    }
}
