//! ICS export for generated booking series.
//!
//! Renders a series as one all-day VEVENT per appointment date so clients
//! can import the whole series into their own calendar.

use chrono::Duration;
use icalendar::{Calendar, Component, Property, ValueType};
use uuid::Uuid;

use crate::error::{GlowbookError, GlowbookResult};
use crate::recurrence::{GeneratedSeries, RecurrenceRequest};

/// Generate .ics content for an expanded series.
pub fn generate_series_ics(
    request: &RecurrenceRequest,
    series: &GeneratedSeries,
    title: &str,
) -> GlowbookResult<String> {
    if series.is_empty() {
        return Err(GlowbookError::IcsGenerate(
            "Series expanded to no dates".to_string(),
        ));
    }

    let mut cal = Calendar::new();
    let dtstamp = chrono::Utc::now().format("%Y%m%dT%H%M%SZ").to_string();

    for date in &series.dates {
        let mut event = icalendar::Event::new();
        event.uid(&format!("{}@glowbook", Uuid::new_v4()));
        event.summary(title);
        event.add_property("DTSTAMP", &dtstamp);

        add_date_property(&mut event, "DTSTART", *date);
        // All-day events end on the following day per RFC 5545
        add_date_property(&mut event, "DTEND", *date + Duration::days(1));

        if !request.time_slot.is_empty() {
            event.add_property("DESCRIPTION", format!("Time slot: {}", request.time_slot));
        }

        cal.push(event.done());
    }

    let cal = cal.done();
    Ok(strip_ics_bloat(&cal.to_string()))
}

fn add_date_property(event: &mut icalendar::Event, name: &str, date: chrono::NaiveDate) {
    let mut prop = Property::new(name, date.format("%Y%m%d").to_string());
    prop.append_parameter(ValueType::Date);
    event.append_property(prop);
}

/// Clean up ICS output from the icalendar crate: stable PRODID, and no
/// CALSCALE:GREGORIAN line (it is the default).
fn strip_ics_bloat(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:GLOWBOOK\r\n");
            continue;
        }
        if line == "CALSCALE:GREGORIAN" {
            continue;
        }
        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}
