//! Budget evaluation over store results

use serde::Serialize;

/// Whether a running total exceeds the budget.
///
/// A budget of zero or no budget at all means "no limit" and never alerts.
pub fn is_over_budget(total: f64, budget: Option<f64>) -> bool {
    match budget {
        Some(limit) => limit > 0.0 && total > limit,
        None => false,
    }
}

/// Parse budget input from the user.
///
/// Anything that is not a finite, non-negative number becomes 0 (no limit).
pub fn parse_budget(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => value,
        _ => 0.0,
    }
}

/// True when [`parse_budget`] keeps the input as typed
pub fn is_exact_budget(raw: &str) -> bool {
    raw.trim()
        .parse::<f64>()
        .map(|value| value == parse_budget(raw))
        .unwrap_or(false)
}

/// Running total and budget status for one profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub total: f64,
    pub budget: Option<f64>,
    /// Budget left; absent when there is no positive budget
    pub remaining: Option<f64>,
    pub over_budget: bool,
}

impl BudgetSummary {
    pub fn new(total: f64, budget: Option<f64>) -> Self {
        let remaining = budget.filter(|b| *b > 0.0).map(|b| b - total);
        Self {
            total,
            budget,
            remaining,
            over_budget: is_over_budget(total, budget),
        }
    }

    /// True when a positive budget is in effect
    pub fn has_limit(&self) -> bool {
        self.remaining.is_some()
    }
}

impl std::fmt::Display for BudgetSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total spent: {:.2}", self.total)?;
        if !self.has_limit() {
            return write!(f, "Budget: no limit");
        }
        writeln!(f, "Budget: {:.2}", self.budget.unwrap_or_default())?;
        write!(f, "Remaining: {:.2}", self.remaining.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alert_requires_positive_budget() {
        assert!(!is_over_budget(1000.0, None));
        assert!(!is_over_budget(1000.0, Some(0.0)));
        assert!(is_over_budget(1000.0, Some(500.0)));
    }

    #[test]
    fn test_alert_is_strictly_greater() {
        assert!(!is_over_budget(500.0, Some(500.0)));
        assert!(is_over_budget(500.01, Some(500.0)));
    }

    #[test]
    fn test_parse_budget_falls_back_to_zero() {
        assert_eq!(parse_budget("750"), 750.0);
        assert_eq!(parse_budget(" 12.5 "), 12.5);
        assert_eq!(parse_budget("lots"), 0.0);
        assert_eq!(parse_budget(""), 0.0);
        assert_eq!(parse_budget("-20"), 0.0);
        assert_eq!(parse_budget("inf"), 0.0);
    }

    #[test]
    fn test_exact_budget_detects_coercion() {
        assert!(is_exact_budget("500"));
        assert!(is_exact_budget(" 0 "));
        assert!(!is_exact_budget("-20"));
        assert!(!is_exact_budget("lots"));
        assert!(!is_exact_budget("NaN"));
        assert!(!is_exact_budget("inf"));
    }

    #[test]
    fn test_summary_display() {
        let text = BudgetSummary::new(120.0, Some(500.0)).to_string();
        assert!(text.contains("Remaining: 380.00"));

        let text = BudgetSummary::new(120.0, Some(0.0)).to_string();
        assert!(text.ends_with("Budget: no limit"));
    }

    #[test]
    fn test_summary_remaining() {
        let summary = BudgetSummary::new(300.0, Some(500.0));
        assert_eq!(summary.remaining, Some(200.0));
        assert!(!summary.over_budget);

        let summary = BudgetSummary::new(300.0, Some(0.0));
        assert_eq!(summary.remaining, None);
        assert!(!summary.has_limit());

        let summary = BudgetSummary::new(600.0, Some(500.0));
        assert!(summary.over_budget);
        assert_eq!(summary.remaining, Some(-100.0));
    }
}
