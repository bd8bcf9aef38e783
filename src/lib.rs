//! # Spendlog - Personal Expense Log
//!
//! Per-profile expense tracking backed by a single SQLite file.
//!
//! Spendlog provides:
//! - Durable expense entries and one budget per profile
//! - Running totals and the over-budget check
//! - Category and month aggregation for chart summaries
//! - An explicit session context for presentation layers

pub mod budget;
pub mod config;
pub mod expense;
pub mod output;
pub mod report;
pub mod session;
pub mod storage;
pub mod ui;

// Re-exports for convenient access
pub use budget::{is_over_budget, BudgetSummary};
pub use expense::{ExpenseEntry, ExpenseInput, NewExpense, SUGGESTED_CATEGORIES};
pub use session::{AddOutcome, Session};
pub use storage::SqliteStore;

/// Result type alias for Spendlog operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Spendlog operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(#[from] rusqlite::Error),

    #[error("Budget already set for {0}")]
    DuplicateBudget(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),
}
