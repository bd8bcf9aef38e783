//! SQLite storage implementation

use std::collections::BTreeMap;
use std::path::Path;

use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use super::schema;
use crate::expense::{ExpenseEntry, NewExpense};
use crate::{Error, Result};

/// SQLite-backed storage for expense entries and budgets.
///
/// Holds one connection for its whole lifetime. Every operation is a single
/// statement, so a failed call leaves earlier data untouched.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        tracing::debug!("Opened expense store at {}", path.display());
        Ok(store)
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Create both tables if they are missing. Safe to call repeatedly.
    pub fn initialize(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        tracing::debug!("Expense schema ready");
        Ok(())
    }

    // ========== Expense Operations ==========

    /// Append an expense entry and return its assigned id
    pub fn insert_expense(&self, expense: &NewExpense) -> Result<i64> {
        self.conn.execute(
            r#"
            INSERT INTO expenses (username, date, category, amount, description)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                expense.username,
                expense.date_string(),
                expense.category,
                expense.amount,
                expense.description,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        tracing::debug!(
            "Inserted expense {} for {} ({} {:.2})",
            id,
            expense.username,
            expense.category,
            expense.amount
        );
        Ok(id)
    }

    /// Sum of all amounts for a user; 0 when the user has no entries
    pub fn total_for_user(&self, username: &str) -> Result<f64> {
        let total: f64 = self.conn.query_row(
            "SELECT COALESCE(SUM(amount), 0.0) FROM expenses WHERE username = ?1",
            [username],
            |row| row.get(0),
        )?;
        Ok(total)
    }

    /// All entries for a user, in insertion order
    pub fn list_expenses(&self, username: &str) -> Result<Vec<ExpenseEntry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, username, date, category, amount, description FROM expenses WHERE username = ?1 ORDER BY id",
        )?;

        let entries = stmt
            .query_map([username], |row| self.row_to_entry(row))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(entries)
    }

    /// Summed amount per category; only categories with entries appear
    pub fn category_totals(&self, username: &str) -> Result<BTreeMap<String, f64>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT COALESCE(category, '') AS cat, COALESCE(SUM(amount), 0.0)
            FROM expenses
            WHERE username = ?1
            GROUP BY cat
            "#,
        )?;

        let totals = stmt
            .query_map([username], |row| {
                Ok((row.get::<_, String>(0)?, row.get::<_, f64>(1)?))
            })?
            .collect::<rusqlite::Result<BTreeMap<_, _>>>()?;

        Ok(totals)
    }

    /// Summed amount per month number (1-12), keyed by the month of `date`.
    ///
    /// Rows whose date SQLite cannot read as `yyyy-mm-dd` have no month and are
    /// left out, so the monthly sum can fall short of [`Self::total_for_user`].
    pub fn monthly_totals(&self, username: &str) -> Result<BTreeMap<u32, f64>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT CAST(strftime('%m', date) AS INTEGER) AS month, COALESCE(SUM(amount), 0.0)
            FROM expenses
            WHERE username = ?1 AND strftime('%m', date) IS NOT NULL
            GROUP BY month
            "#,
        )?;

        let totals = stmt
            .query_map([username], |row| {
                Ok((row.get::<_, u32>(0)?, row.get::<_, f64>(1)?))
            })?
            .collect::<rusqlite::Result<BTreeMap<_, _>>>()?;

        Ok(totals)
    }

    /// Count all expense entries
    pub fn count_expenses(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Helper to convert a row to an ExpenseEntry
    fn row_to_entry(&self, row: &rusqlite::Row) -> rusqlite::Result<ExpenseEntry> {
        Ok(ExpenseEntry {
            id: row.get(0)?,
            username: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            date: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
            category: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
            amount: row.get::<_, Option<f64>>(4)?.unwrap_or_default(),
            description: row.get::<_, Option<String>>(5)?.unwrap_or_default(),
        })
    }

    // ========== Budget Operations ==========

    /// Stored budget for a user, or `None` if none was ever set
    pub fn get_budget(&self, username: &str) -> Result<Option<f64>> {
        let budget: Option<Option<f64>> = self
            .conn
            .query_row(
                "SELECT budget FROM user_settings WHERE username = ?1",
                [username],
                |row| row.get(0),
            )
            .optional()?;
        // A row with a NULL budget still counts as "set"; treat it as no limit.
        Ok(budget.map(|b| b.unwrap_or(0.0)))
    }

    /// Create the one budget row for a user.
    ///
    /// Fails with [`Error::DuplicateBudget`] if the user already has one; the
    /// stored value is left unchanged.
    pub fn set_budget(&self, username: &str, budget: f64) -> Result<()> {
        if username.trim().is_empty() {
            return Err(Error::Validation("username is required".to_string()));
        }
        if !budget.is_finite() || budget < 0.0 {
            return Err(Error::Validation(format!(
                "budget must be a non-negative number: {}",
                budget
            )));
        }

        let result = self.conn.execute(
            "INSERT INTO user_settings (username, budget) VALUES (?1, ?2)",
            params![username, budget],
        );

        match result {
            Ok(_) => {
                tracing::info!("Budget for {} set to {:.2}", username, budget);
                Ok(())
            }
            Err(rusqlite::Error::SqliteFailure(err, _))
                if err.code == ErrorCode::ConstraintViolation =>
            {
                tracing::warn!("Rejected second budget for {}", username);
                Err(Error::DuplicateBudget(username.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    // ========== Profile Operations ==========

    /// Every known profile name, sorted
    pub fn list_users(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT username FROM user_settings WHERE username IS NOT NULL
            UNION
            SELECT username FROM expenses WHERE username IS NOT NULL
            ORDER BY 1
            "#,
        )?;

        let users = stmt
            .query_map([], |row| row.get(0))?
            .collect::<rusqlite::Result<Vec<String>>>()?;

        Ok(users)
    }

    /// Get database statistics
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            entries: self.count_expenses()?,
            users: self.list_users()?.len(),
        })
    }
}

/// Database statistics
#[derive(Debug, Clone, serde::Serialize)]
pub struct DbStats {
    pub entries: usize,
    pub users: usize,
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        writeln!(f, "  Entries: {}", self.entries)?;
        writeln!(f, "  Profiles: {}", self.users)
    }
}
