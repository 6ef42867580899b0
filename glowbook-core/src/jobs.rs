//! Job postings and the bidding state machine.
//!
//! Clients post jobs, providers submit bids, the posting client awards one.
//! Transitions: Posted -> Awarded -> Completed, with Cancelled reachable from
//! Posted or Awarded.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{GlowbookError, GlowbookResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Posted,
    Awarded,
    Completed,
    Cancelled,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Posted => "posted",
            JobStatus::Awarded => "awarded",
            JobStatus::Completed => "completed",
            JobStatus::Cancelled => "cancelled",
        }
    }
}

/// A provider's proposed price and terms for a posted job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bid {
    pub id: Uuid,
    pub provider_id: String,
    pub amount: Decimal,
    pub message: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

/// A client's posted job request with its bids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub client_id: String,
    pub title: String,
    pub description: Option<String>,
    pub budget: Option<Decimal>,
    pub status: JobStatus,
    pub bids: Vec<Bid>,
    /// Set once the client awards; the other bids are left as submitted.
    pub awarded_bid: Option<Uuid>,
    pub posted_at: DateTime<Utc>,
}

impl Job {
    pub fn post(
        client_id: String,
        title: String,
        description: Option<String>,
        budget: Option<Decimal>,
    ) -> Self {
        Job {
            id: Uuid::new_v4(),
            client_id,
            title,
            description,
            budget,
            status: JobStatus::Posted,
            bids: Vec::new(),
            awarded_bid: None,
            posted_at: Utc::now(),
        }
    }

    /// Submit a bid. One bid per provider per job.
    pub fn submit_bid(
        &mut self,
        provider_id: String,
        amount: Decimal,
        message: Option<String>,
    ) -> GlowbookResult<&Bid> {
        if self.status != JobStatus::Posted {
            return Err(self.invalid_transition("accept bids"));
        }

        if self.bids.iter().any(|b| b.provider_id == provider_id) {
            return Err(GlowbookError::DuplicateBid(provider_id));
        }

        self.bids.push(Bid {
            id: Uuid::new_v4(),
            provider_id,
            amount,
            message,
            submitted_at: Utc::now(),
        });

        Ok(self.bids.last().unwrap())
    }

    /// Award a bid. Only the posting client may award, and only while the
    /// job is still posted. Competing bids are not rejected.
    pub fn award(&mut self, client_id: &str, bid_id: Uuid) -> GlowbookResult<()> {
        if self.client_id != client_id {
            return Err(GlowbookError::NotJobOwner);
        }
        if self.status != JobStatus::Posted {
            return Err(self.invalid_transition("award"));
        }
        if !self.bids.iter().any(|b| b.id == bid_id) {
            return Err(GlowbookError::BidNotFound(bid_id.to_string()));
        }

        self.awarded_bid = Some(bid_id);
        self.status = JobStatus::Awarded;
        Ok(())
    }

    pub fn complete(&mut self) -> GlowbookResult<()> {
        if self.status != JobStatus::Awarded {
            return Err(self.invalid_transition("complete"));
        }
        self.status = JobStatus::Completed;
        Ok(())
    }

    /// Cancel the job. Allowed from Posted or Awarded.
    pub fn cancel(&mut self) -> GlowbookResult<()> {
        match self.status {
            JobStatus::Posted | JobStatus::Awarded => {
                self.status = JobStatus::Cancelled;
                Ok(())
            }
            _ => Err(self.invalid_transition("cancel")),
        }
    }

    fn invalid_transition(&self, action: &str) -> GlowbookError {
        GlowbookError::InvalidTransition(self.status.as_str().to_string(), action.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn posted_job() -> Job {
        Job::post(
            "client-1".to_string(),
            "Braiding for wedding party".to_string(),
            None,
            Some(dec!(300)),
        )
    }

    #[test]
    fn bid_then_award_then_complete() {
        let mut job = posted_job();

        let bid_id = job
            .submit_bid("provider-1".to_string(), dec!(250), None)
            .unwrap()
            .id;

        job.award("client-1", bid_id).unwrap();
        assert_eq!(job.status, JobStatus::Awarded);
        assert_eq!(job.awarded_bid, Some(bid_id));

        job.complete().unwrap();
        assert_eq!(job.status, JobStatus::Completed);
    }

    #[test]
    fn duplicate_bid_from_same_provider_is_rejected() {
        let mut job = posted_job();

        job.submit_bid("provider-1".to_string(), dec!(250), None)
            .unwrap();
        let err = job
            .submit_bid("provider-1".to_string(), dec!(200), None)
            .unwrap_err();

        assert!(matches!(err, GlowbookError::DuplicateBid(_)));
        assert_eq!(job.bids.len(), 1);
    }

    #[test]
    fn awarding_leaves_competing_bids_untouched() {
        let mut job = posted_job();

        let first = job
            .submit_bid("provider-1".to_string(), dec!(250), None)
            .unwrap()
            .id;
        job.submit_bid("provider-2".to_string(), dec!(220), None)
            .unwrap();

        job.award("client-1", first).unwrap();

        assert_eq!(job.bids.len(), 2);
        assert_eq!(job.awarded_bid, Some(first));
    }

    #[test]
    fn only_posting_client_may_award() {
        let mut job = posted_job();
        let bid_id = job
            .submit_bid("provider-1".to_string(), dec!(250), None)
            .unwrap()
            .id;

        let err = job.award("someone-else", bid_id).unwrap_err();
        assert!(matches!(err, GlowbookError::NotJobOwner));
        assert_eq!(job.status, JobStatus::Posted);
    }

    #[test]
    fn no_bids_after_award() {
        let mut job = posted_job();
        let bid_id = job
            .submit_bid("provider-1".to_string(), dec!(250), None)
            .unwrap()
            .id;
        job.award("client-1", bid_id).unwrap();

        let err = job
            .submit_bid("provider-2".to_string(), dec!(100), None)
            .unwrap_err();
        assert!(matches!(err, GlowbookError::InvalidTransition(_, _)));
    }

    #[test]
    fn cancel_allowed_from_posted_and_awarded_only() {
        let mut job = posted_job();
        job.cancel().unwrap();
        assert_eq!(job.status, JobStatus::Cancelled);
        assert!(job.cancel().is_err());

        let mut job = posted_job();
        let bid_id = job
            .submit_bid("provider-1".to_string(), dec!(250), None)
            .unwrap()
            .id;
        job.award("client-1", bid_id).unwrap();
        job.cancel().unwrap();

        let mut job = posted_job();
        let bid_id = job
            .submit_bid("provider-1".to_string(), dec!(250), None)
            .unwrap()
            .id;
        job.award("client-1", bid_id).unwrap();
        job.complete().unwrap();
        assert!(job.cancel().is_err());
    }

    #[test]
    fn awarding_unknown_bid_fails() {
        let mut job = posted_job();
        let err = job.award("client-1", Uuid::new_v4()).unwrap_err();
        assert!(matches!(err, GlowbookError::BidNotFound(_)));
    }
}
