use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single expense as returned by `GET /get_expenses/{date}`.
///
/// Records are never built client-side except through the expense form; the
/// rendered list for a date is replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub name: String,
    pub cost: f64,
    pub category: String,
}

/// Sum of `cost` across the listed expenses, computed client-side.
pub fn total_cost(expenses: &[ExpenseRecord]) -> f64 {
    expenses.iter().map(|e| e.cost).sum()
}

/// Format an amount for display, e.g. "₹15.00".
pub fn format_currency(amount: f64) -> String {
    format!("₹{:.2}", amount)
}

/// Budget configuration for one month as returned by
/// `GET /get_budget/{month}/{year}`.
///
/// Every field is absent when no budget has been set for that month, so the
/// whole payload deserializes either way.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BudgetSummary {
    #[serde(default)]
    pub income: Option<f64>,
    #[serde(default)]
    pub spending_percentage: Option<f64>,
    #[serde(default)]
    pub total_spending: Option<f64>,
}

impl BudgetSummary {
    /// Figures ready for display, or `None` when the payload is missing
    /// income or the spending percentage. Partial payloads must not
    /// overwrite previously rendered figures.
    pub fn figures(&self) -> Option<BudgetFigures> {
        let income = self.income?;
        let percentage = self.spending_percentage?;
        Some(BudgetFigures {
            income,
            limit: income * percentage / 100.0,
            total_spending: self.total_spending.unwrap_or(0.0),
        })
    }
}

/// Derived budget numbers for the summary card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BudgetFigures {
    pub income: f64,
    pub limit: f64,
    pub total_spending: f64,
}

impl BudgetFigures {
    /// The spending alert shows only when spending strictly exceeds the limit.
    pub fn over_limit(&self) -> bool {
        self.total_spending > self.limit
    }
}

/// Category name to aggregated cost for one month, as returned by
/// `GET /monthly_report/{month}/{year}`. Ordered so slice order and colors
/// stay stable across renders.
pub type MonthlyReport = BTreeMap<String, f64>;

/// Body of the three mutating endpoints. The backend reports logical
/// failures through `error` on an otherwise successful HTTP exchange.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl MutationResponse {
    /// An `error` field always wins, even next to a `message`.
    pub fn into_result(self) -> Result<String, String> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.message.unwrap_or_else(|| "Done.".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expense_list_parses_and_totals() {
        let json = r#"[
            {"name": "Coffee", "cost": 10.5, "category": "Food"},
            {"name": "Bus", "cost": 4.25, "category": "Travel"},
            {"name": "Gum", "cost": 0.25, "category": "Food"}
        ]"#;
        let expenses: Vec<ExpenseRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(expenses.len(), 3);
        assert_eq!(total_cost(&expenses), 15.0);
        assert_eq!(format_currency(total_cost(&expenses)), "₹15.00");
    }

    #[test]
    fn empty_expense_list_totals_zero() {
        assert_eq!(total_cost(&[]), 0.0);
        assert_eq!(format_currency(0.0), "₹0.00");
    }

    #[test]
    fn budget_figures_require_income_and_percentage() {
        let no_data: BudgetSummary = serde_json::from_str("{}").unwrap();
        assert!(no_data.figures().is_none());

        let partial: BudgetSummary = serde_json::from_str(r#"{"income": 1000.0}"#).unwrap();
        assert!(partial.figures().is_none());

        let full: BudgetSummary = serde_json::from_str(
            r#"{"income": 1000.0, "spending_percentage": 50.0, "total_spending": 600.0}"#,
        )
        .unwrap();
        let figures = full.figures().unwrap();
        assert_eq!(figures.limit, 500.0);
        assert_eq!(figures.total_spending, 600.0);
    }

    #[test]
    fn alert_shows_only_above_limit() {
        let over = BudgetFigures {
            income: 1000.0,
            limit: 500.0,
            total_spending: 600.0,
        };
        assert!(over.over_limit());

        let under = BudgetFigures {
            total_spending: 400.0,
            ..over
        };
        assert!(!under.over_limit());

        // Exactly at the limit is not over it.
        let at = BudgetFigures {
            total_spending: 500.0,
            ..over
        };
        assert!(!at.over_limit());
    }

    #[test]
    fn empty_report_parses_as_empty_map() {
        let report: MonthlyReport = serde_json::from_str("{}").unwrap();
        assert!(report.is_empty());
    }

    #[test]
    fn report_preserves_category_totals() {
        let report: MonthlyReport =
            serde_json::from_str(r#"{"Food": 120.5, "Travel": 60.0}"#).unwrap();
        assert_eq!(report.get("Food"), Some(&120.5));
        assert_eq!(report.get("Travel"), Some(&60.0));
    }

    #[test]
    fn mutation_error_wins_over_message() {
        let body: MutationResponse =
            serde_json::from_str(r#"{"message": "ok", "error": "invalid cost"}"#).unwrap();
        assert_eq!(body.into_result(), Err("invalid cost".to_string()));

        let ok: MutationResponse =
            serde_json::from_str(r#"{"message": "Expense added successfully!"}"#).unwrap();
        assert_eq!(
            ok.into_result(),
            Ok("Expense added successfully!".to_string())
        );
    }
}
