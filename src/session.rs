//! Session context for one active profile
//!
//! Replaces process-wide "current user" state: the presentation layer keeps
//! a [`Session`] and passes it (with the store) to every action.

use serde::Serialize;

use crate::budget::{is_over_budget, BudgetSummary};
use crate::expense::ExpenseInput;
use crate::storage::SqliteStore;
use crate::{Error, Result};

/// The active profile and its budget, if one has been set.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub username: String,
    pub budget: Option<f64>,
}

/// Result of adding an expense through a session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AddOutcome {
    pub id: i64,
    /// Running total after the insert
    pub total: f64,
    pub over_budget: bool,
}

impl Session {
    /// Start a session for `username`, loading its stored budget.
    pub fn start(store: &SqliteStore, username: &str) -> Result<Self> {
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::Validation("Enter your name".to_string()));
        }

        let budget = store.get_budget(username)?;
        tracing::debug!("Session started for {} (budget: {:?})", username, budget);

        Ok(Self {
            username: username.to_string(),
            budget,
        })
    }

    /// True until a budget has been stored for this profile
    pub fn needs_budget(&self) -> bool {
        self.budget.is_none()
    }

    /// Store the profile's budget. Only the first call succeeds.
    pub fn set_budget(&mut self, store: &SqliteStore, budget: f64) -> Result<()> {
        store.set_budget(&self.username, budget)?;
        self.budget = Some(budget);
        Ok(())
    }

    /// Validate and record an expense, then re-evaluate the budget alert.
    pub fn add_expense(&self, store: &SqliteStore, input: &ExpenseInput) -> Result<AddOutcome> {
        let expense = input.validate(&self.username)?;
        let id = store.insert_expense(&expense)?;
        let total = store.total_for_user(&self.username)?;
        let over_budget = is_over_budget(total, self.budget);

        if over_budget {
            tracing::info!("{} is over budget ({:.2} spent)", self.username, total);
        }

        Ok(AddOutcome {
            id,
            total,
            over_budget,
        })
    }

    /// Running total and budget status
    pub fn summary(&self, store: &SqliteStore) -> Result<BudgetSummary> {
        let total = store.total_for_user(&self.username)?;
        Ok(BudgetSummary::new(total, self.budget))
    }
}
