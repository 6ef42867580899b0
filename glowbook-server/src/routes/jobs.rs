//! Job posting and bidding endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use glowbook_core::GlowbookError;
use glowbook_core::jobs::{Bid, Job};
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/jobs", post(create_job))
        .route("/jobs", get(list_jobs))
        .route("/jobs/{id}", get(get_job))
        .route("/jobs/{id}/bids", post(submit_bid))
        .route("/jobs/{id}/award", post(award_bid))
        .route("/jobs/{id}/complete", post(complete_job))
        .route("/jobs/{id}/cancel", post(cancel_job))
}

#[derive(Deserialize)]
pub struct CreateJobRequest {
    pub client_id: String,
    pub title: String,
    pub description: Option<String>,
    pub budget: Option<Decimal>,
}

#[derive(Deserialize)]
pub struct SubmitBidRequest {
    pub provider_id: String,
    pub amount: Decimal,
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct AwardBidRequest {
    pub client_id: String,
    pub bid_id: Uuid,
}

/// POST /jobs - post a new job request
async fn create_job(
    State(state): State<AppState>,
    Json(request): Json<CreateJobRequest>,
) -> Result<Json<Job>, AppError> {
    if request.title.trim().is_empty() {
        return Err(GlowbookError::Validation("Job title is required".into()).into());
    }

    let job = Job::post(
        request.client_id,
        request.title,
        request.description,
        request.budget,
    );
    state.insert_job(job.clone()).await;

    Ok(Json(job))
}

/// GET /jobs - list all jobs, newest first
async fn list_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    Json(state.list_jobs().await)
}

/// GET /jobs/:id
async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Job>, AppError> {
    Ok(Json(state.get_job(id).await?))
}

/// POST /jobs/:id/bids - submit a bid (one per provider per job)
async fn submit_bid(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<SubmitBidRequest>,
) -> Result<Json<Bid>, AppError> {
    let job = state
        .update_job(id, |job| {
            job.submit_bid(request.provider_id.clone(), request.amount, request.message.clone())
                .map(|_| ())
        })
        .await?;

    // One bid per provider per job, so this lookup is unambiguous
    let bid = job
        .bids
        .iter()
        .find(|b| b.provider_id == request.provider_id)
        .cloned()
        .ok_or_else(|| GlowbookError::BidNotFound(id.to_string()))?;

    Ok(Json(bid))
}

/// POST /jobs/:id/award - the posting client awards one bid
async fn award_bid(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<AwardBidRequest>,
) -> Result<Json<Job>, AppError> {
    let job = state
        .update_job(id, |job| job.award(&request.client_id, request.bid_id))
        .await?;

    Ok(Json(job))
}

/// POST /jobs/:id/complete
async fn complete_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Job>, AppError> {
    let job = state.update_job(id, |job| job.complete()).await?;
    Ok(Json(job))
}

/// POST /jobs/:id/cancel
async fn cancel_job(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Job>, AppError> {
    let job = state.update_job(id, |job| job.cancel()).await?;
    Ok(Json(job))
}
