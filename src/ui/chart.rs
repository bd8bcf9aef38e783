//! Text renditions of the category pie chart and the monthly bar chart

use owo_colors::OwoColorize;

use crate::report::{CategoryShare, MonthBar};
use crate::ui::theme;

/// Width of the longest bar, in cells
pub const BAR_WIDTH: usize = 40;

fn bar(amount: f64, max: f64) -> String {
    if max <= 0.0 || amount <= 0.0 {
        return String::new();
    }
    let cells = ((amount / max) * BAR_WIDTH as f64).round().max(1.0) as usize;
    "█".repeat(cells.min(BAR_WIDTH))
}

fn max_amount(amounts: impl Iterator<Item = f64>) -> f64 {
    amounts.fold(0.0, f64::max)
}

/// One line per category: name, share bar, amount and percentage.
/// Empty string when there is nothing to chart.
pub fn category_chart(shares: &[CategoryShare]) -> String {
    let width = shares.iter().map(|s| s.category.chars().count()).max().unwrap_or(0);
    let max = max_amount(shares.iter().map(|s| s.amount));

    shares
        .iter()
        .map(|s| {
            format!(
                "{:<width$}  {:>10.2}  {:>5.1}%  {}",
                s.category,
                s.amount,
                s.percent,
                bar(s.amount, max).style(theme().bar.clone()),
                width = width
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// One line per month: two-digit label, bar and amount.
pub fn monthly_chart(bars: &[MonthBar]) -> String {
    let max = max_amount(bars.iter().map(|b| b.amount));

    bars.iter()
        .map(|b| {
            format!(
                "{}  {:>10.2}  {}",
                b.label,
                b.amount,
                bar(b.amount, max).style(theme().bar.clone())
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_scales_to_max() {
        assert_eq!(bar(10.0, 10.0).chars().count(), BAR_WIDTH);
        assert_eq!(bar(5.0, 10.0).chars().count(), BAR_WIDTH / 2);
        assert_eq!(bar(0.001, 10.0).chars().count(), 1);
        assert!(bar(0.0, 10.0).is_empty());
        assert!(bar(1.0, 0.0).is_empty());
    }

    #[test]
    fn test_monthly_chart_lines() {
        let bars = vec![
            MonthBar { month: 1, label: "01".into(), amount: 420.0 },
            MonthBar { month: 2, label: "02".into(), amount: 80.0 },
        ];
        let chart = monthly_chart(&bars);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("01"));
        assert!(lines[1].contains("80.00"));
    }

    #[test]
    fn test_empty_charts() {
        assert!(category_chart(&[]).is_empty());
        assert!(monthly_chart(&[]).is_empty());
    }
}
