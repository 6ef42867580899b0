//! Notification template endpoints

use std::collections::HashMap;

use axum::{
    Json, Router,
    routing::{get, post},
};
use glowbook_core::GlowbookError;
use glowbook_core::notify::{Notification, NotificationTemplate, builtin_templates};
use serde::Deserialize;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/templates", get(list_templates))
        .route("/notifications/render", post(render_notification))
}

/// GET /templates - the built-in booking-flow templates
async fn list_templates() -> Json<Vec<NotificationTemplate>> {
    Json(builtin_templates())
}

#[derive(Deserialize)]
pub struct RenderRequest {
    pub template_id: String,
    #[serde(default)]
    pub vars: HashMap<String, String>,
}

/// POST /notifications/render - substitute variables into a template
async fn render_notification(
    Json(request): Json<RenderRequest>,
) -> Result<Json<Notification>, AppError> {
    let template = builtin_templates()
        .into_iter()
        .find(|t| t.id == request.template_id)
        .ok_or_else(|| {
            GlowbookError::Validation(format!("Unknown template '{}'", request.template_id))
        })?;

    Ok(Json(template.render(&request.vars)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn renders_builtin_template() {
        let vars: HashMap<String, String> = [
            ("provider_name", "Bea"),
            ("amount", "$250"),
            ("job_title", "Wedding updo"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let Json(rendered) = render_notification(Json(RenderRequest {
            template_id: "bid-received".to_string(),
            vars,
        }))
        .await
        .unwrap();

        assert_eq!(rendered.body, "Bea bid $250 on \"Wedding updo\".");
    }

    #[tokio::test]
    async fn unknown_template_is_an_error() {
        let result = render_notification(Json(RenderRequest {
            template_id: "nope".to_string(),
            vars: HashMap::new(),
        }))
        .await;
        assert!(result.is_err());
    }
}
