//! Chart data derived from the grouping queries
//!
//! The store groups and sums; this module shapes the result for a renderer.
//! Nothing here draws anything.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::storage::SqliteStore;
use crate::Result;

/// One slice of the category pie chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryShare {
    pub category: String,
    pub amount: f64,
    /// Share of the user's total, 0-100
    pub percent: f64,
}

/// One bar of the monthly chart
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthBar {
    /// 1-12
    pub month: u32,
    /// Two-digit month, e.g. "03"
    pub label: String,
    pub amount: f64,
}

/// Two-digit label for a month number
pub fn month_label(month: u32) -> String {
    format!("{:02}", month)
}

/// Pie slices from category totals, in category order
pub fn category_shares(totals: &BTreeMap<String, f64>) -> Vec<CategoryShare> {
    let sum: f64 = totals.values().sum();

    totals
        .iter()
        .map(|(category, amount)| CategoryShare {
            category: category.clone(),
            amount: *amount,
            percent: if sum > 0.0 { amount / sum * 100.0 } else { 0.0 },
        })
        .collect()
}

/// Bars from monthly totals, in month order
pub fn month_bars(totals: &BTreeMap<u32, f64>) -> Vec<MonthBar> {
    totals
        .iter()
        .map(|(month, amount)| MonthBar {
            month: *month,
            label: month_label(*month),
            amount: *amount,
        })
        .collect()
}

/// Load pie chart data for a user
pub fn category_report(store: &SqliteStore, username: &str) -> Result<Vec<CategoryShare>> {
    Ok(category_shares(&store.category_totals(username)?))
}

/// Load bar chart data for a user
pub fn monthly_report(store: &SqliteStore, username: &str) -> Result<Vec<MonthBar>> {
    Ok(month_bars(&store.monthly_totals(username)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shares_sum_to_hundred() {
        let mut totals = BTreeMap::new();
        totals.insert("Food".to_string(), 200.0);
        totals.insert("Travel".to_string(), 300.0);

        let shares = category_shares(&totals);
        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].category, "Food");
        assert!((shares[0].percent - 40.0).abs() < 1e-9);
        assert!((shares[1].percent - 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_all_zero_amounts_give_zero_percent() {
        let mut totals = BTreeMap::new();
        totals.insert("Food".to_string(), 0.0);

        let shares = category_shares(&totals);
        assert_eq!(shares[0].percent, 0.0);
    }

    #[test]
    fn test_month_labels_are_two_digits() {
        let mut totals = BTreeMap::new();
        totals.insert(3, 15.0);
        totals.insert(11, 2.0);

        let bars = month_bars(&totals);
        assert_eq!(bars[0].label, "03");
        assert_eq!(bars[1].label, "11");
    }

    #[test]
    fn test_empty_user_has_no_chart_data() {
        let store = SqliteStore::open_in_memory().unwrap();
        assert!(category_report(&store, "alice").unwrap().is_empty());
        assert!(monthly_report(&store, "alice").unwrap().is_empty());
    }
}
