pub mod config;
pub mod export;
pub mod preview;

use anyhow::Result;
use chrono::NaiveDate;
use dialoguer::Input;
use glowbook_core::config::GlowbookConfig;
use glowbook_core::recurrence::{Frequency, RecurrenceRequest};
use owo_colors::OwoColorize;

use crate::SeriesArgs;

/// Build a recurrence request from CLI flags, prompting interactively for
/// anything essential that was omitted.
pub fn build_request(args: &SeriesArgs, config: &GlowbookConfig) -> Result<RecurrenceRequest> {
    let start = match &args.start {
        Some(s) => parse_date(s)?,
        None => prompt_with_retry("  First appointment (YYYY-MM-DD)?", parse_date)?,
    };

    let frequency = match &args.frequency {
        Some(f) => f.parse::<Frequency>()?,
        None if args.start.is_some() => Frequency::Weekly,
        None => prompt_with_retry("  How often? (weekly/biweekly/monthly)", |s| {
            Ok(s.parse::<Frequency>()?)
        })?,
    };

    let mut request = RecurrenceRequest::new(start, frequency);
    request.occurrences = args.occurrences.unwrap_or(config.default_occurrences);

    if let Some(end) = &args.end {
        request.end_date = Some(parse_date(end)?);
    }

    for skip in &args.skip {
        request.skip_dates.insert(parse_date(skip)?);
    }

    if let Some(slot) = &args.time_slot {
        request.time_slot = slot.clone();
    }

    Ok(request)
}

/// Parse YYYY-MM-DD.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date '{}'. Expected YYYY-MM-DD", s.trim()))
}

/// Prompt the user with retry on parse errors.
fn prompt_with_retry<T, F>(prompt: &str, parse: F) -> Result<T>
where
    F: Fn(&str) -> Result<T>,
{
    loop {
        let input: String = Input::new().with_prompt(prompt).interact_text()?;
        match parse(&input) {
            Ok(result) => return Ok(result),
            Err(e) => {
                eprintln!("  {}", e.to_string().red());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_date_accepts_iso_format() {
        let date = parse_date("2025-01-15").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 15).unwrap());
    }

    #[test]
    fn parse_date_trims_whitespace() {
        assert!(parse_date(" 2025-01-15 ").is_ok());
    }

    #[test]
    fn parse_date_rejects_other_formats() {
        assert!(parse_date("15/01/2025").is_err());
        assert!(parse_date("Jan 15").is_err());
        assert!(parse_date("2025-13-40").is_err());
    }
}
