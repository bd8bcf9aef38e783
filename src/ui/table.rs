use tabled::{settings::Style, Table, Tabled};

use crate::expense::ExpenseEntry;
use crate::report::{CategoryShare, MonthBar};
use crate::storage::DbStats;

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<&ExpenseEntry> for ExpenseRow {
    fn from(entry: &ExpenseEntry) -> Self {
        Self {
            date: entry.date.clone(),
            category: entry.category.clone(),
            amount: format!("{:.2}", entry.amount),
            description: entry.description.clone(),
        }
    }
}

#[derive(Tabled)]
struct ShareRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    percent: String,
}

#[derive(Tabled)]
struct MonthRow {
    #[tabled(rename = "Month")]
    month: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Date / Category / Amount / Description listing; empty string for no entries
pub fn expense_table(entries: &[ExpenseEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let rows: Vec<ExpenseRow> = entries.iter().map(ExpenseRow::from).collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Category / Amount / Share table for the pie chart data
pub fn category_table(shares: &[CategoryShare]) -> String {
    if shares.is_empty() {
        return String::new();
    }

    let rows: Vec<ShareRow> = shares
        .iter()
        .map(|s| ShareRow {
            category: s.category.clone(),
            amount: format!("{:.2}", s.amount),
            percent: format!("{:.1}%", s.percent),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

/// Month / Amount table for the bar chart data
pub fn monthly_table(bars: &[MonthBar]) -> String {
    if bars.is_empty() {
        return String::new();
    }

    let rows: Vec<MonthRow> = bars
        .iter()
        .map(|b| MonthRow {
            month: b.label.clone(),
            amount: format!("{:.2}", b.amount),
        })
        .collect();
    Table::new(rows).with(Style::rounded()).to_string()
}

pub fn stats_table(stats: &DbStats) -> String {
    let mut builder = TableBuilder::new();
    builder.add_row("Entries", &stats.entries.to_string());
    builder.add_row("Profiles", &stats.users.to_string());
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_table_lists_columns() {
        let entries = vec![ExpenseEntry {
            id: 1,
            username: "alice".into(),
            date: "2024-01-05".into(),
            category: "Food".into(),
            amount: 120.0,
            description: "groceries".into(),
        }];

        let table = expense_table(&entries);
        for needle in ["Date", "Category", "Amount", "Description", "2024-01-05", "120.00", "groceries"] {
            assert!(table.contains(needle), "missing {}", needle);
        }
    }

    #[test]
    fn test_chart_data_tables() {
        let shares = vec![CategoryShare {
            category: "Travel".into(),
            amount: 300.0,
            percent: 60.0,
        }];
        let table = category_table(&shares);
        for needle in ["Category", "Share", "Travel", "300.00", "60.0%"] {
            assert!(table.contains(needle), "missing {}", needle);
        }

        let bars = vec![MonthBar {
            month: 2,
            label: "02".into(),
            amount: 80.0,
        }];
        let table = monthly_table(&bars);
        for needle in ["Month", "02", "80.00"] {
            assert!(table.contains(needle), "missing {}", needle);
        }
    }

    #[test]
    fn test_empty_tables() {
        assert!(expense_table(&[]).is_empty());
        assert!(category_table(&[]).is_empty());
        assert!(monthly_table(&[]).is_empty());
        assert!(TableBuilder::new().build().is_empty());
    }
}
