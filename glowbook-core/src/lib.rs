//! Core types and logic for the glowbook ecosystem.
//!
//! This crate provides the pieces shared by glowbook-cli and glowbook-server:
//! - `recurrence` and `pricing` for recurring booking series
//! - `jobs` for the posting/bidding state machine
//! - `notify` for booking-flow notification templates
//! - `ics` for exporting a series to calendar format

pub mod config;
pub mod error;
pub mod ics;
pub mod jobs;
pub mod notify;
pub mod pricing;
pub mod recurrence;

pub use error::{GlowbookError, GlowbookResult};
