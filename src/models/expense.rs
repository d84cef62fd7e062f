//! Expense model and the expense form
//!
//! An [`Expense`] is immutable once recorded. New expenses are built from an
//! [`ExpenseForm`], which validates every field at once and reports all
//! failures together.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::ExpenseId;
use super::money::{Money, MoneyParseError};

/// Date format used by the form and on disk
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A single recorded spend event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Amount spent (always positive for form-created expenses)
    pub amount: Money,

    /// Calendar date of the expense
    pub date: NaiveDate,

    /// Category key; may be absent from the registry
    pub category: String,
}

impl Expense {
    /// Create an expense with a freshly generated id
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self::with_id(ExpenseId::generate(), description, amount, date, category)
    }

    pub fn with_id(
        id: ExpenseId,
        description: impl Into<String>,
        amount: Money,
        date: NaiveDate,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            amount,
            date,
            category: category.into(),
        }
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.description, self.date, self.amount)
    }
}

/// Raw user input for a new expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub date: String,
    pub category: String,
}

impl ExpenseForm {
    /// Validate every field and build the expense
    ///
    /// All failing fields are reported together; nothing is built unless every
    /// field passes.
    pub fn submit(&self) -> Result<Expense, ExpenseFormErrors> {
        let mut errors = ExpenseFormErrors::default();

        let description = self.description.trim();
        if description.is_empty() {
            errors.description = Some("Description is required.".into());
        }

        let amount = match Money::parse(&self.amount) {
            Ok(amount) if amount.is_positive() => Some(amount),
            Ok(_) => {
                errors.amount = Some("Amount must be greater than 0.".into());
                None
            }
            Err(MoneyParseError::TooManyDecimals) => {
                errors.amount = Some("Amount must have at most two decimal places.".into());
                None
            }
            Err(MoneyParseError::OutOfRange) => {
                errors.amount = Some(format!("Amount must not exceed {}.", Money::MAX));
                None
            }
            Err(MoneyParseError::InvalidFormat(_)) => {
                errors.amount = Some("Amount must be a number.".into());
                None
            }
        };

        let date = self.date.trim();
        let date = if date.is_empty() {
            errors.date = Some("Date is required.".into());
            None
        } else {
            match NaiveDate::parse_from_str(date, DATE_FORMAT) {
                Ok(date) => Some(date),
                Err(_) => {
                    errors.date = Some("Date must be in YYYY-MM-DD format.".into());
                    None
                }
            }
        };

        let category = self.category.trim();
        if category.is_empty() {
            errors.category = Some("Category is required.".into());
        }

        match (amount, date) {
            (Some(amount), Some(date)) if errors.is_empty() => {
                Ok(Expense::new(description, amount, date, category))
            }
            _ => Err(errors),
        }
    }
}

/// Field-scoped validation messages for [`ExpenseForm`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseFormErrors {
    pub description: Option<String>,
    pub amount: Option<String>,
    pub date: Option<String>,
    pub category: Option<String>,
}

impl ExpenseFormErrors {
    pub fn is_empty(&self) -> bool {
        self.fields().next().is_none()
    }

    /// Failing fields with their messages, in form order
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("description", &self.description),
            ("amount", &self.amount),
            ("date", &self.date),
            ("category", &self.category),
        ]
        .into_iter()
        .filter_map(|(field, message)| message.as_deref().map(|m| (field, m)))
    }
}

impl fmt::Display for ExpenseFormErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<&str> = self.fields().map(|(_, message)| message).collect();
        write!(f, "{}", messages.join(" "))
    }
}

impl std::error::Error for ExpenseFormErrors {}
