pub mod jobs;
pub mod notifications;
pub mod series;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use glowbook_core::GlowbookError;
use serde::Serialize;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert errors to HTTP responses, mapping domain errors to proper
/// status codes and everything else to 500.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl AppError {
    fn status(&self) -> StatusCode {
        match self.0.downcast_ref::<GlowbookError>() {
            Some(GlowbookError::JobNotFound(_)) | Some(GlowbookError::BidNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            Some(GlowbookError::DuplicateBid(_)) | Some(GlowbookError::InvalidTransition(_, _)) => {
                StatusCode::CONFLICT
            }
            Some(GlowbookError::NotJobOwner) => StatusCode::FORBIDDEN,
            Some(GlowbookError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_status_codes() {
        let not_found: AppError = GlowbookError::JobNotFound("x".into()).into();
        assert_eq!(not_found.status(), StatusCode::NOT_FOUND);

        let conflict: AppError = GlowbookError::DuplicateBid("p".into()).into();
        assert_eq!(conflict.status(), StatusCode::CONFLICT);

        let forbidden: AppError = GlowbookError::NotJobOwner.into();
        assert_eq!(forbidden.status(), StatusCode::FORBIDDEN);

        let invalid: AppError = GlowbookError::Validation("bad".into()).into();
        assert_eq!(invalid.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let other: AppError = anyhow::anyhow!("boom").into();
        assert_eq!(other.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
