//! Public budget simulator endpoint.

use axum::{Json, Router, routing::post};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::{AppState, extract::ApiJson};
use kodestudio_core::estimate::{BudgetEstimator, EstimateBreakdown, EstimationInput};

/// Creates the estimate route.
pub fn routes() -> Router<AppState> {
    Router::new().route("/estimate", post(estimate))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Simulator form as posted by the website. Every field is optional and
/// lenient: bad values fall back rather than fail.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EstimateRequest {
    /// Project type label.
    pub project_type: Value,
    /// Priority label.
    pub priority: Value,
    /// Count of technical requirements, as a number or numeric string.
    pub technical_requirements: Value,
    /// `YYYY-MM-DD`.
    pub start_date: Value,
    /// `YYYY-MM-DD`.
    pub end_date: Value,
}

/// Estimate response.
#[derive(Debug, Serialize)]
pub struct EstimateResponse {
    /// Rounded budget.
    pub budget: Decimal,
    /// Budget for display, e.g. `S/ 2800.00`.
    pub formatted: String,
    /// How the budget was reached.
    pub breakdown: EstimateBreakdown,
}

impl EstimateRequest {
    /// Reads the form out of any JSON value. Anything that is not an object
    /// is treated as an empty form.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or_default()
    }

    fn into_input(self) -> EstimationInput {
        EstimationInput::from_form(
            text(&self.project_type),
            text(&self.priority),
            requirement_count(&self.technical_requirements),
            parse_date(&self.start_date),
            parse_date(&self.end_date),
        )
    }
}

fn text(value: &Value) -> &str {
    value.as_str().unwrap_or_default()
}

fn requirement_count(value: &Value) -> i64 {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn parse_date(value: &Value) -> Option<NaiveDate> {
    value
        .as_str()
        .and_then(|s| NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok())
}

/// Formats an amount the way the simulator shows it.
#[must_use]
pub fn format_soles(amount: Decimal) -> String {
    format!("S/ {amount:.2}")
}

// ============================================================================
// Route Handlers
// ============================================================================

/// POST `/estimate` - Price a project.
async fn estimate(ApiJson(payload): ApiJson<Value>) -> Json<EstimateResponse> {
    let input = EstimateRequest::from_value(payload).into_input();
    let result = BudgetEstimator::estimate(&input);

    debug!(
        project_type = %input.project_type,
        priority = %input.priority,
        budget = %result.budget,
        "estimate computed"
    );

    Json(EstimateResponse {
        formatted: format_soles(result.budget),
        budget: result.budget,
        breakdown: result.breakdown,
    })
}
