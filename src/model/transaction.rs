use crate::model::Amount;
use serde::{Deserialize, Serialize};

/// A debited transaction after categorization. The amount is the absolute value of the debit.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Transaction {
    category: String,
    amount: Amount,
}

impl Transaction {
    /// The sign of `amount` is dropped.
    pub fn new(category: impl Into<String>, amount: Amount) -> Self {
        Self {
            category: category.into(),
            amount: amount.abs(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }
}

/// The columns of a statement row that are read; any other columns are ignored.
// "Date","Description","Amount",...
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub(crate) struct StatementRow {
    #[serde(rename = "Description")]
    pub(crate) description: String,
    #[serde(rename = "Amount")]
    pub(crate) amount: Amount,
}

impl StatementRow {
    /// A negative amount is a debit. Zero counts as a credit.
    pub(crate) fn is_debit(&self) -> bool {
        self.amount.is_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_transaction_amount_is_absolute() {
        let t = Transaction::new("Gas", Amount::from_str("-40.10").unwrap());
        assert_eq!(t.category(), "Gas");
        assert_eq!(t.amount().value(), Decimal::from_str("40.10").unwrap());
    }

    #[test]
    fn test_row_is_debit() {
        let row = |amount: &str| StatementRow {
            description: "x".to_string(),
            amount: Amount::from_str(amount).unwrap(),
        };
        assert!(row("-0.01").is_debit());
        assert!(!row("0").is_debit());
        assert!(!row("-0.00").is_debit());
        assert!(!row("12.00").is_debit());
    }

    #[test]
    fn test_row_deserialize_ignores_other_columns() {
        let data = "Date,Description,Amount,Balance\n2024-01-02,Starbucks Coffee,-4.50,100.00\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let rows: Vec<StatementRow> = rdr.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].description, "Starbucks Coffee");
        assert_eq!(rows[0].amount.value(), Decimal::from_str("-4.50").unwrap());
    }

    #[test]
    fn test_row_deserialize_rejects_blank_amount() {
        let data = "Description,Amount\nMystery,\n";
        let mut rdr = csv::Reader::from_reader(data.as_bytes());
        let rows: Result<Vec<StatementRow>, _> = rdr.deserialize().collect();
        assert!(rows.is_err());
    }
}
