//! Series preview endpoint

use axum::{Json, Router, routing::post};
use chrono::{NaiveDate, Utc};
use glowbook_core::pricing;
use glowbook_core::recurrence::{RecurrenceRequest, expand};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/series/preview", post(preview_series))
}

#[derive(Deserialize)]
pub struct PreviewRequest {
    #[serde(flatten)]
    pub recurrence: RecurrenceRequest,

    /// Per-session price; omit to skip cost projection.
    pub unit_price: Option<Decimal>,
}

#[derive(Serialize)]
pub struct PreviewResponse {
    pub dates: Vec<NaiveDate>,
    pub count: usize,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<Decimal>,
}

/// POST /series/preview - expand a recurrence request and project its cost
async fn preview_series(
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    request.recurrence.validate(Utc::now().date_naive())?;

    let series = expand(&request.recurrence);
    let total = request
        .unit_price
        .map(|price| pricing::project(&series, price));

    Ok(Json(PreviewResponse {
        count: series.len(),
        dates: series.dates,
        total,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn preview_expands_and_projects() {
        let start = Utc::now().date_naive() + Duration::days(7);
        let mut recurrence =
            RecurrenceRequest::new(start, glowbook_core::recurrence::Frequency::Weekly);
        recurrence.occurrences = 4;

        let Json(response) = preview_series(Json(PreviewRequest {
            recurrence,
            unit_price: Some(dec!(49.99)),
        }))
        .await
        .unwrap();

        assert_eq!(response.count, 4);
        assert_eq!(response.dates.len(), 4);
        assert_eq!(response.total, Some(dec!(199.96)));
    }

    #[tokio::test]
    async fn preview_rejects_past_start_date() {
        let start = Utc::now().date_naive() - Duration::days(1);
        let recurrence =
            RecurrenceRequest::new(start, glowbook_core::recurrence::Frequency::Weekly);

        let result = preview_series(Json(PreviewRequest {
            recurrence,
            unit_price: None,
        }))
        .await;

        assert!(result.is_err());
    }
}
