use gloo::net::http::Request;
use thiserror::Error;
use web_sys::FormData;

use crate::models::{BudgetSummary, ExpenseRecord, MonthlyReport, MutationResponse};

/// Why a backend call failed. The UI needs to tell a dead network apart from
/// a request the server understood and rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("{0}")]
    Backend(String),
}

/// API client for the expense tracker backend.
#[derive(Clone, Default)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Client against the page's own origin.
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    /// Client against a custom base URL (dev servers, tests).
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    fn expenses_url(&self, date: &str) -> String {
        format!("{}/get_expenses/{}", self.base_url, date)
    }

    fn budget_url(&self, month: u32, year: i32) -> String {
        format!("{}/get_budget/{}/{}", self.base_url, month, year)
    }

    /// An unselected month is sent as `all`; the backend matches it against
    /// nothing and answers with an empty report.
    fn report_url(&self, month: &str, year: &str) -> String {
        let month = if month.is_empty() { "all" } else { month };
        format!("{}/monthly_report/{}/{}", self.base_url, month, year)
    }

    /// Fetch the expenses recorded on one date (ISO `YYYY-MM-DD`).
    pub async fn get_expenses(&self, date: &str) -> Result<Vec<ExpenseRecord>, ApiError> {
        let response = Request::get(&self.expenses_url(date))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        response
            .json::<Vec<ExpenseRecord>>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetch the budget summary for one month. Fields are absent when no
    /// budget exists, which still decodes cleanly.
    pub async fn get_budget(&self, month: u32, year: i32) -> Result<BudgetSummary, ApiError> {
        let response = Request::get(&self.budget_url(month, year))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        response
            .json::<BudgetSummary>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Fetch the per-category cost aggregation for one month. An empty month
    /// selector is allowed and yields an empty mapping.
    pub async fn monthly_report(&self, month: &str, year: &str) -> Result<MonthlyReport, ApiError> {
        let response = Request::get(&self.report_url(month, year))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        response
            .json::<MonthlyReport>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Create an expense from the submitted form (plus the attached date).
    pub async fn add_expense(&self, form: FormData) -> Result<String, ApiError> {
        self.post_form("/add_expense", form).await
    }

    /// Create a category from the submitted form.
    pub async fn add_category(&self, form: FormData) -> Result<String, ApiError> {
        self.post_form("/add_category", form).await
    }

    /// Configure the budget for the month/year named in the form.
    pub async fn set_budget(&self, form: FormData) -> Result<String, ApiError> {
        self.post_form("/set_budget", form).await
    }

    async fn post_form(&self, path: &str, form: FormData) -> Result<String, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        // Error bodies come back with non-2xx statuses but the same JSON
        // shape, so decode before looking at the status.
        match response.json::<MutationResponse>().await {
            Ok(body) => body.into_result().map_err(ApiError::Backend),
            Err(_) if !response.ok() => Err(ApiError::Backend(format!(
                "server error {}",
                response.status()
            ))),
            Err(e) => Err(ApiError::Decode(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_the_backend_contract() {
        let api = ApiClient::new();
        assert_eq!(api.expenses_url("2025-03-09"), "/get_expenses/2025-03-09");
        assert_eq!(api.budget_url(3, 2025), "/get_budget/3/2025");
        assert_eq!(api.report_url("03", "2025"), "/monthly_report/03/2025");
    }

    #[test]
    fn missing_report_month_is_sent_as_all() {
        let api = ApiClient::new();
        assert_eq!(api.report_url("", "2024"), "/monthly_report/all/2024");
    }

    #[test]
    fn base_url_prefixes_every_path() {
        let api = ApiClient::with_base_url("http://localhost:5000".to_string());
        assert_eq!(
            api.expenses_url("2025-01-01"),
            "http://localhost:5000/get_expenses/2025-01-01"
        );
        assert_eq!(
            api.report_url("", "2025"),
            "http://localhost:5000/monthly_report/all/2025"
        );
    }
}
