//! Defines the core data models for transactions.

use std::{fmt::Display, str::FromStr};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{Error, category::Category};

/// Identifier for a transaction, unique within a [TransactionStore](crate::transaction::TransactionStore).
pub type TransactionId = i64;

/// Whether money was spent or earned.
///
/// The amount of a transaction is always positive, the type carries the sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[default]
    Expense,
    Income,
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransactionType::Expense => write!(f, "expense"),
            TransactionType::Income => write!(f, "income"),
        }
    }
}

/// A validated, strictly positive amount of money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// Create an amount.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::InvalidAmount] if `value` is zero or negative.
    pub fn new(value: Decimal) -> Result<Self, Error> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(Error::InvalidAmount(value.to_string()))
        }
    }

    pub fn value(self) -> Decimal {
        self.0
    }
}

impl FromStr for Amount {
    type Err = Error;

    /// Parse a decimal number such as "850" or "12.50".
    ///
    /// Surrounding whitespace is ignored. Empty text, text that is not a
    /// number and numbers that are not positive are rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = Decimal::from_str(s.trim()).map_err(|_| Error::InvalidAmount(s.to_owned()))?;

        Amount::new(value).map_err(|_| Error::InvalidAmount(s.to_owned()))
    }
}

/// A validated, non-empty transaction description.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Description(String);

impl Description {
    /// Create a description.
    ///
    /// # Errors
    ///
    /// This function will return an [Error::EmptyDescription] if `text` is
    /// empty or only whitespace.
    pub fn new(text: &str) -> Result<Self, Error> {
        let text = text.trim();

        if text.is_empty() {
            Err(Error::EmptyDescription)
        } else {
            Ok(Self(text.to_owned()))
        }
    }
}

impl AsRef<str> for Description {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Description {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An expense or income, i.e. an event where money was either spent or earned.
///
/// Transactions are created by [TransactionStore::add](crate::transaction::TransactionStore::add)
/// which assigns the ID. Use [Transaction::build] to describe a new one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transaction {
    pub id: TransactionId,
    pub amount: Amount,
    pub category: Category,
    pub description: Description,
    /// The day the transaction is attributed to.
    pub date: Date,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

impl Transaction {
    /// Describe a new transaction.
    ///
    /// The category defaults to [Category::Food] and the type to
    /// [TransactionType::Expense].
    pub fn build(amount: Amount, date: Date, description: Description) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            category: Category::default(),
            description,
            date,
            transaction_type: TransactionType::default(),
        }
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    pub fn is_income(&self) -> bool {
        self.transaction_type == TransactionType::Income
    }
}

/// A transaction that has not been given an ID yet.
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    pub amount: Amount,
    pub category: Category,
    pub description: Description,
    pub date: Date,
    pub transaction_type: TransactionType,
}

impl TransactionBuilder {
    /// Set the category for the transaction.
    pub fn category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }

    /// Set whether the transaction is an expense or income.
    pub fn transaction_type(mut self, transaction_type: TransactionType) -> Self {
        self.transaction_type = transaction_type;
        self
    }

    pub(super) fn finalize(self, id: TransactionId) -> Transaction {
        Transaction {
            id,
            amount: self.amount,
            category: self.category,
            description: self.description,
            date: self.date,
            transaction_type: self.transaction_type,
        }
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::{
        Error,
        transaction::core::{Amount, Description},
    };

    #[test]
    fn parses_positive_amounts() {
        assert_eq!("850".parse(), Amount::new(Decimal::from(850)));
        assert_eq!(" 12.50 ".parse(), Amount::new(Decimal::new(1250, 2)));
    }

    #[test]
    fn rejects_unparseable_amount() {
        assert_eq!(
            "abc".parse::<Amount>(),
            Err(Error::InvalidAmount("abc".to_owned()))
        );
    }

    #[test]
    fn rejects_empty_amount() {
        assert_eq!(
            "".parse::<Amount>(),
            Err(Error::InvalidAmount(String::new()))
        );
    }

    #[test]
    fn rejects_zero_and_negative_amounts() {
        assert_eq!(
            "0".parse::<Amount>(),
            Err(Error::InvalidAmount("0".to_owned()))
        );
        assert_eq!(
            "-5".parse::<Amount>(),
            Err(Error::InvalidAmount("-5".to_owned()))
        );
    }

    #[test]
    fn description_is_trimmed() {
        let description = Description::new("  Chai  ").unwrap();

        assert_eq!(description.as_ref(), "Chai");
    }

    #[test]
    fn rejects_blank_description() {
        assert_eq!(Description::new(""), Err(Error::EmptyDescription));
        assert_eq!(Description::new("   "), Err(Error::EmptyDescription));
    }
}
