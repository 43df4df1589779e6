//! Loading a bank statement CSV into categorized debits and a credited total.
//!
//! The file needs a header row naming at least `Description` and `Amount`. Other columns are
//! ignored and column order does not matter. A negative amount is a debit and becomes a
//! [`Transaction`] carrying the absolute value; anything else adds to the credited total.

use crate::error::Notice;
use crate::model::{Amount, CategoryRules, StatementRow, Transaction};
use crate::{utils, Result};
use anyhow::{ensure, Context};
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, trace, warn};

const DESCRIPTION_HEADER: &str = "Description";
const AMOUNT_HEADER: &str = "Amount";

/// The result of reading one statement file.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Statement {
    transactions: Vec<Transaction>,
    credited: Amount,
}

impl Statement {
    /// Reads and categorizes the statement at `path`. The first failure is returned with context.
    pub fn load(path: impl AsRef<Path>, rules: &CategoryRules) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Unable to open statement file {}", path.display()))?;
        let statement = Self::from_reader(BufReader::new(file), rules)
            .with_context(|| format!("Unable to load statement file {}", path.display()))?;
        debug!(
            "Loaded {} debits and {} in credits from {}",
            statement.transactions.len(),
            statement.credited,
            path.display()
        );
        Ok(statement)
    }

    /// Like [`Statement::load`] but never fails: on error it returns an empty statement along with
    /// a notice describing what went wrong.
    pub fn load_or_notice(path: impl AsRef<Path>, rules: &CategoryRules) -> (Self, Option<Notice>) {
        match Self::load(path, rules) {
            Ok(statement) => (statement, None),
            Err(e) => {
                warn!("{e:#}");
                (Self::default(), Some(Notice::from_error(&e)))
            }
        }
    }

    /// Parses CSV statement data from `reader`.
    pub fn from_reader<R: Read>(reader: R, rules: &CategoryRules) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().context("Unable to read the header row")?;
        for required in [DESCRIPTION_HEADER, AMOUNT_HEADER] {
            ensure!(
                headers.iter().any(|h| h == required),
                "The header row is missing the '{required}' column"
            );
        }

        let mut transactions = Vec::new();
        // Checked so that the budget and summary totals of a loaded statement cannot overflow.
        let mut debited = Amount::default();
        let mut credited = Amount::default();
        for (ix, result) in rdr.deserialize::<StatementRow>().enumerate() {
            // Row 1 is the header.
            let line = ix + 2;
            let row = result.with_context(|| format!("Unable to parse row {line}"))?;
            if row.is_debit() {
                debited = debited
                    .checked_add(row.amount.abs())
                    .with_context(|| format!("Total debits overflowed at row {line}"))?;
                let category = rules.categorize(&row.description);
                trace!("'{}' -> {category}", row.description);
                transactions.push(Transaction::new(category, row.amount));
            } else {
                credited = credited
                    .checked_add(row.amount)
                    .with_context(|| format!("Total credits overflowed at row {line}"))?;
            }
        }

        Ok(Self {
            transactions,
            credited,
        })
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// The sum of all non-negative amounts.
    pub fn credited(&self) -> Amount {
        self.credited
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty() && self.credited.is_zero()
    }

}

/// Reads the raw text of the statement file.
pub fn read_raw(path: impl AsRef<Path>) -> Result<String> {
    utils::read_to_string(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorType;
    use crate::test::TestStatement;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_debit_and_credit() {
        let file = TestStatement::new("Description,Amount\nStarbucks Coffee,-4.50\nPaycheck,1500.00\n");
        let statement = Statement::load(file.path(), &CategoryRules::default()).unwrap();
        assert_eq!(
            statement.transactions(),
            &[Transaction::new("Food & Beverages", Amount::new(dec("4.50")))]
        );
        assert_eq!(statement.credited().value(), dec("1500.00"));
    }

    #[test]
    fn test_extra_columns_and_order() {
        let file = TestStatement::new(
            "Amount,Date,Description\n-20.00,2024-03-01,UBER TRIP\n-9.99,2024-03-02,Spotify\n\
             -3.00,2024-03-03,Corner Store\n0.00,2024-03-04,Adjustment\n",
        );
        let statement = Statement::load(file.path(), &CategoryRules::default()).unwrap();
        let categories: Vec<&str> = statement.transactions().iter().map(|t| t.category()).collect();
        assert_eq!(categories, vec!["Transportation", "Subscriptions", "Other"]);
        assert!(statement.credited().is_zero());
    }

    #[test]
    fn test_quoted_fields() {
        let file = TestStatement::new(
            "Description,Amount\n\"Best Buy, Store #4\",\"-1,299.99\"\n",
        );
        let statement = Statement::load(file.path(), &CategoryRules::default()).unwrap();
        assert_eq!(statement.transactions()[0].category(), "Electronics");
        assert_eq!(statement.transactions()[0].amount().value(), dec("1299.99"));
    }

    #[test]
    fn test_header_only() {
        let file = TestStatement::new("Description,Amount\n");
        let statement = Statement::load(file.path(), &CategoryRules::default()).unwrap();
        assert!(statement.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nope.csv");
        let (statement, notice) = Statement::load_or_notice(&path, &CategoryRules::default());
        assert!(statement.transactions().is_empty());
        let notice = notice.unwrap();
        assert_eq!(notice.error_type(), ErrorType::NotFound);
        assert_eq!(notice.message(), "Bank statement file not found!");
    }

    #[test]
    fn test_bad_encoding() {
        let file = TestStatement::from_bytes(b"Description,Amount\nCaf\xe9 Rouge,-3.00\n");
        let (statement, notice) = Statement::load_or_notice(file.path(), &CategoryRules::default());
        assert!(statement.is_empty());
        let notice = notice.unwrap();
        assert_eq!(notice.error_type(), ErrorType::Encoding);
        assert!(notice.message().starts_with("Error reading file: "));
    }

    #[test]
    fn test_bad_amount() {
        let file = TestStatement::new("Description,Amount\nStarbucks,-4.50\nShell,twelve\n");
        let (statement, notice) = Statement::load_or_notice(file.path(), &CategoryRules::default());
        assert!(statement.is_empty());
        let notice = notice.unwrap();
        assert_eq!(notice.error_type(), ErrorType::Unexpected);
        assert!(notice.message().starts_with("An unexpected error occurred: "));
    }

    #[test]
    fn test_blank_amount() {
        for data in [
            "Description,Amount\nStarbucks,-4.50\nMystery,\n",
            "Description,Amount\nStarbucks,-4.50\nMystery,   \n",
        ] {
            let file = TestStatement::new(data);
            let (statement, notice) =
                Statement::load_or_notice(file.path(), &CategoryRules::default());
            assert!(statement.is_empty());
            let notice = notice.unwrap();
            assert_eq!(notice.error_type(), ErrorType::Unexpected);
            assert!(notice.message().starts_with("An unexpected error occurred: "));
        }
    }

    #[test]
    fn test_credit_total_overflow() {
        let file = TestStatement::new("Description,Amount\nA,79228162514264337593543950335\nB,1\n");
        let (statement, notice) = Statement::load_or_notice(file.path(), &CategoryRules::default());
        assert!(statement.is_empty());
        assert_eq!(
            notice.unwrap().message(),
            "An unexpected error occurred: Total credits overflowed at row 3"
        );
    }

    #[test]
    fn test_debit_total_overflow() {
        let file = TestStatement::new(
            "Description,Amount\nShell,-79228162514264337593543950335\nUber,-0.50\n",
        );
        let (statement, notice) = Statement::load_or_notice(file.path(), &CategoryRules::default());
        assert!(statement.is_empty());
        assert_eq!(
            notice.unwrap().message(),
            "An unexpected error occurred: Total debits overflowed at row 3"
        );
    }

    #[test]
    fn test_large_amounts_within_range() {
        let data = "Description,Amount\nA,79228162514264337593543950334\nB,1\nC,-5\n";
        let statement = Statement::from_reader(data.as_bytes(), &CategoryRules::default()).unwrap();
        assert_eq!(statement.credited().value(), Decimal::MAX);
        assert_eq!(statement.transactions().len(), 1);
    }

    #[test]
    fn test_missing_column() {
        let file = TestStatement::new("Memo,Amount\nStarbucks,-4.50\n");
        let err = Statement::load(file.path(), &CategoryRules::default()).unwrap_err();
        assert!(format!("{err:#}").contains("missing the 'Description' column"));
        assert_eq!(ErrorType::classify(&err), ErrorType::Unexpected);
    }

    #[test]
    fn test_read_raw() {
        let content = "Description,Amount\nNetflix,-15.49\n";
        let file = TestStatement::new(content);
        assert_eq!(read_raw(file.path()).unwrap(), content);
    }
}
