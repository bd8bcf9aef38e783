//! Database schema definitions
//!
//! Column types stay loose (no NOT NULL) so files written by earlier
//! versions of the tracker open unchanged.

/// SQL to create the expenses table
pub const CREATE_EXPENSES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS expenses (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT,
    date TEXT,
    category TEXT,
    amount REAL,
    description TEXT
)
"#;

/// SQL to create the per-user settings table (one budget per username)
pub const CREATE_USER_SETTINGS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS user_settings (
    username TEXT PRIMARY KEY,
    budget REAL
)
"#;

/// SQL to create indexes
pub const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS idx_expenses_username ON expenses(username)",
];

/// All schema creation statements
pub fn all_schema_statements() -> Vec<&'static str> {
    let mut stmts = vec![CREATE_EXPENSES_TABLE, CREATE_USER_SETTINGS_TABLE];
    stmts.extend(CREATE_INDEXES.iter().copied());
    stmts
}
