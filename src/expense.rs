//! Expense types and caller-side validation
//!
//! Raw form input is held in an [`ExpenseInput`] and turned into a
//! [`NewExpense`] by [`ExpenseInput::validate`]. Only validated expenses
//! reach the store; persisted rows come back as [`ExpenseEntry`].

use crate::{Error, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Storage and display format for expense dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Categories offered to the user. The first is the default suggestion.
///
/// Storage accepts any non-empty category; this list is only a hint.
pub const SUGGESTED_CATEGORIES: &[&str] = &[
    "Food",
    "Travel",
    "Rent",
    "Shopping",
    "Education",
    "Entertainment",
    "Others",
];

/// Check whether a category is one of the suggested ones (case-insensitive)
pub fn is_suggested_category(category: &str) -> bool {
    SUGGESTED_CATEGORIES
        .iter()
        .any(|c| c.eq_ignore_ascii_case(category.trim()))
}

/// A persisted expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Surrogate key assigned by the store
    pub id: i64,
    /// Owning profile
    pub username: String,
    /// `yyyy-mm-dd`
    pub date: String,
    pub category: String,
    pub amount: f64,
    /// Free text, may be empty
    pub description: String,
}

/// A validated expense, ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub username: String,
    pub date: NaiveDate,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl NewExpense {
    /// Create a new expense from already-typed values.
    ///
    /// Applies the same presence and type rules as [`ExpenseInput::validate`].
    pub fn new(
        username: impl Into<String>,
        date: NaiveDate,
        category: impl Into<String>,
        amount: f64,
        description: impl Into<String>,
    ) -> Result<Self> {
        let username = require("username", &username.into())?;
        let category = require("category", &category.into())?;
        check_amount(amount)?;

        Ok(Self {
            username,
            date,
            category,
            amount,
            description: description.into().trim().to_string(),
        })
    }

    /// Date in storage format
    pub fn date_string(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}

/// Raw expense form input, exactly as collected from the user.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpenseInput {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

impl ExpenseInput {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount: amount.into(),
            description: description.into(),
        }
    }

    /// Validate the input for the given profile.
    ///
    /// Date, category and amount are required. The amount must be a finite,
    /// non-negative number and the date a `yyyy-mm-dd` calendar date.
    pub fn validate(&self, username: &str) -> Result<NewExpense> {
        let date = require("date", &self.date)?;
        let category = require("category", &self.category)?;
        let amount = require("amount", &self.amount)?;

        let date = parse_date(&date)?;
        let amount: f64 = amount
            .parse()
            .map_err(|_| Error::Validation(format!("amount is not a number: {}", amount)))?;

        NewExpense::new(username, date, category, amount, self.description.as_str())
    }
}

/// Parse a `yyyy-mm-dd` date
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT)
        .map_err(|_| Error::Validation(format!("date must be yyyy-mm-dd: {}", s.trim())))
}

fn require(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

fn check_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(Error::Validation(format!("amount is not a number: {}", amount)));
    }
    if amount < 0.0 {
        return Err(Error::Validation(format!("amount cannot be negative: {}", amount)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_complete_input() {
        let input = ExpenseInput::new("2024-03-15", "Food", "12.50", "  lunch ");
        let expense = input.validate("alice").unwrap();

        assert_eq!(expense.username, "alice");
        assert_eq!(expense.date_string(), "2024-03-15");
        assert_eq!(expense.category, "Food");
        assert!((expense.amount - 12.5).abs() < f64::EPSILON);
        assert_eq!(expense.description, "lunch");
    }

    #[test]
    fn test_validate_rejects_missing_fields() {
        let cases = [
            ExpenseInput::new("", "Food", "10", ""),
            ExpenseInput::new("2024-01-01", "  ", "10", ""),
            ExpenseInput::new("2024-01-01", "Food", "", ""),
        ];
        for input in cases {
            assert!(matches!(input.validate("alice"), Err(Error::Validation(_))));
        }
    }

    #[test]
    fn test_validate_rejects_non_numeric_amount() {
        let input = ExpenseInput::new("2024-01-01", "Food", "ten", "");
        assert!(matches!(input.validate("alice"), Err(Error::Validation(_))));

        let input = ExpenseInput::new("2024-01-01", "Food", "NaN", "");
        assert!(matches!(input.validate("alice"), Err(Error::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_negative_amount() {
        let input = ExpenseInput::new("2024-01-01", "Food", "-5", "");
        assert!(matches!(input.validate("alice"), Err(Error::Validation(_))));
    }

    #[test]
    fn test_validate_rejects_bad_date_and_empty_user() {
        let input = ExpenseInput::new("15/03/2024", "Food", "5", "");
        assert!(matches!(input.validate("alice"), Err(Error::Validation(_))));

        let input = ExpenseInput::new("2024-02-30", "Food", "5", "");
        assert!(matches!(input.validate("alice"), Err(Error::Validation(_))));

        let input = ExpenseInput::new("2024-03-15", "Food", "5", "");
        assert!(matches!(input.validate(" "), Err(Error::Validation(_))));
    }

    #[test]
    fn test_custom_category_is_accepted() {
        let input = ExpenseInput::new("2024-03-15", "Gifts", "5", "");
        let expense = input.validate("alice").unwrap();
        assert_eq!(expense.category, "Gifts");
        assert!(!is_suggested_category("Gifts"));
        assert!(is_suggested_category("food"));
    }
}
