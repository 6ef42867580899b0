use std::collections::HashMap;
use std::sync::Arc;

use glowbook_core::GlowbookError;
use glowbook_core::jobs::Job;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Shared application state: the in-memory job board.
///
/// Persistence is an external collaborator; this store lives for the
/// process. Each handler takes the lock for the duration of one request.
#[derive(Clone, Default)]
pub struct AppState {
    jobs: Arc<RwLock<HashMap<Uuid, Job>>>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_job(&self, job: Job) {
        self.jobs.write().await.insert(job.id, job);
    }

    /// All jobs, newest first.
    pub async fn list_jobs(&self) -> Vec<Job> {
        let mut jobs: Vec<Job> = self.jobs.read().await.values().cloned().collect();
        jobs.sort_by(|a, b| b.posted_at.cmp(&a.posted_at));
        jobs
    }

    pub async fn get_job(&self, id: Uuid) -> Result<Job, GlowbookError> {
        self.jobs
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or_else(|| GlowbookError::JobNotFound(id.to_string()))
    }

    /// Run a mutation against one job under the write lock and return the
    /// updated job.
    pub async fn update_job<F>(&self, id: Uuid, mutate: F) -> Result<Job, GlowbookError>
    where
        F: FnOnce(&mut Job) -> Result<(), GlowbookError>,
    {
        let mut jobs = self.jobs.write().await;
        let job = jobs
            .get_mut(&id)
            .ok_or_else(|| GlowbookError::JobNotFound(id.to_string()))?;

        mutate(job)?;
        Ok(job.clone())
    }
}
