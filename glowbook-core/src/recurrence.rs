//! Recurring booking series expansion.
//!
//! Turns a repeat-pattern description (start date, frequency, end condition,
//! skip dates) into the ordered list of concrete appointment dates. Runs on
//! every form edit, so it never errors: bad input degrades to an empty series.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::GlowbookError;

/// Occurrence count used when the client does not pick one.
pub const DEFAULT_OCCURRENCES: u32 = 12;

/// Upper bound on the occurrence cap a client may request.
pub const MAX_OCCURRENCES: u32 = 52;

/// Hard ceiling on slots considered in a single expansion. Bounds the
/// end-date path against far-future dates during live recomputation.
const MAX_SLOTS: u32 = 365;

/// How often the series repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Biweekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = GlowbookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "weekly" => Ok(Frequency::Weekly),
            "biweekly" => Ok(Frequency::Biweekly),
            "monthly" => Ok(Frequency::Monthly),
            other => Err(GlowbookError::Validation(format!(
                "Unknown frequency '{other}'. Expected weekly, biweekly or monthly"
            ))),
        }
    }
}

fn default_occurrences() -> u32 {
    DEFAULT_OCCURRENCES
}

/// Parameters for a recurring booking series, built fresh from form state
/// on every edit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurrenceRequest {
    pub start_date: NaiveDate,
    pub frequency: Frequency,

    /// Occurrence cap. Counts attempted slots, including skipped ones.
    #[serde(default = "default_occurrences")]
    pub occurrences: u32,

    /// When set, governs termination instead of the occurrence cap.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,

    /// Calendar days excluded from the series (matched by day, not time).
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub skip_dates: BTreeSet<NaiveDate>,

    /// Opaque time-of-day label, carried through unchanged.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub time_slot: String,
}

impl RecurrenceRequest {
    pub fn new(start_date: NaiveDate, frequency: Frequency) -> Self {
        RecurrenceRequest {
            start_date,
            frequency,
            occurrences: DEFAULT_OCCURRENCES,
            end_date: None,
            skip_dates: BTreeSet::new(),
            time_slot: String::new(),
        }
    }

    /// Submission-time validation. The expander itself stays lenient; this
    /// is what the server and CLI check before accepting a request.
    pub fn validate(&self, today: NaiveDate) -> Result<(), GlowbookError> {
        if self.start_date < today {
            return Err(GlowbookError::Validation(format!(
                "Start date {} is in the past",
                self.start_date
            )));
        }
        if self.end_date.is_none() && !(1..=MAX_OCCURRENCES).contains(&self.occurrences) {
            return Err(GlowbookError::Validation(format!(
                "Occurrence count must be between 1 and {MAX_OCCURRENCES}"
            )));
        }
        if let Some(end) = self.end_date {
            if end <= self.start_date {
                return Err(GlowbookError::Validation(format!(
                    "End date {} is not after start date {}",
                    end, self.start_date
                )));
            }
        }
        Ok(())
    }
}

/// The expanded series. Ephemeral: recomputed on every parameter change and
/// replaced wholesale, never persisted as a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratedSeries {
    /// Strictly increasing, skip dates removed, bounded by the end condition.
    pub dates: Vec<NaiveDate>,
}

impl GeneratedSeries {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Expand a recurrence request into concrete appointment dates.
///
/// Slot n is computed from the start date (start + n weeks / fortnights /
/// calendar months), so monthly series stay anchored to the start's
/// day-of-month and clamp to the end of shorter months (Jan 31 -> Feb 28).
///
/// A skip date consumes its slot: the cap counts attempted occurrences, and
/// the series is not extended to compensate.
pub fn expand(request: &RecurrenceRequest) -> GeneratedSeries {
    let slots = match request.end_date {
        Some(_) => MAX_SLOTS,
        None => request.occurrences.min(MAX_OCCURRENCES),
    };

    let mut dates = Vec::new();

    for slot in 0..slots {
        let Some(date) = nth_occurrence(request.start_date, request.frequency, slot) else {
            break;
        };

        if let Some(end) = request.end_date {
            if date > end {
                break;
            }
        }

        if !request.skip_dates.contains(&date) {
            dates.push(date);
        }
    }

    GeneratedSeries { dates }
}

/// Date of the nth slot (0-based), or None past chrono's date range.
fn nth_occurrence(start: NaiveDate, frequency: Frequency, n: u32) -> Option<NaiveDate> {
    match frequency {
        Frequency::Weekly => start.checked_add_signed(Duration::weeks(n as i64)),
        Frequency::Biweekly => start.checked_add_signed(Duration::weeks(2 * n as i64)),
        Frequency::Monthly => start.checked_add_months(Months::new(n)),
    }
}
