//! Notification templates for the booking flow.
//!
//! Templates carry `{{variable}}` placeholders; rendering substitutes known
//! variables and leaves unknown placeholders verbatim. Delivery (SMS, email,
//! push) is an external collaborator; this module only produces content.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Sms,
    Push,
}

/// A reusable message template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationTemplate {
    pub id: String,
    pub channel: Channel,
    /// Subject line; unused for SMS.
    pub subject: String,
    pub body: String,
}

/// A rendered, ready-to-deliver message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub channel: Channel,
    pub subject: String,
    pub body: String,
}

impl NotificationTemplate {
    pub fn render(&self, vars: &HashMap<String, String>) -> Notification {
        Notification {
            channel: self.channel,
            subject: substitute(&self.subject, vars),
            body: substitute(&self.body, vars),
        }
    }
}

/// Replace each `{{name}}` with its value from `vars`. Unknown placeholders
/// and unterminated braces pass through unchanged.
fn substitute(text: &str, vars: &HashMap<String, String>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find("{{") {
        out.push_str(&rest[..open]);
        let after_open = &rest[open + 2..];

        match after_open.find("}}") {
            Some(close) => {
                let name = &after_open[..close];
                match vars.get(name.trim()) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push_str("{{");
                        out.push_str(name);
                        out.push_str("}}");
                    }
                }
                rest = &after_open[close + 2..];
            }
            None => {
                out.push_str(&rest[open..]);
                rest = "";
            }
        }
    }

    out.push_str(rest);
    out
}

/// Built-in templates for the booking and bidding flow.
pub fn builtin_templates() -> Vec<NotificationTemplate> {
    vec![
        NotificationTemplate {
            id: "booking-confirmed".to_string(),
            channel: Channel::Email,
            subject: "Your booking with {{provider_name}} is confirmed".to_string(),
            body: "Hi {{client_name}}, your {{service}} appointment on {{date}} at \
                   {{time_slot}} is confirmed. Total for the series: {{total}}."
                .to_string(),
        },
        NotificationTemplate {
            id: "booking-reminder".to_string(),
            channel: Channel::Sms,
            subject: String::new(),
            body: "Reminder: {{service}} with {{provider_name}} on {{date}} at {{time_slot}}."
                .to_string(),
        },
        NotificationTemplate {
            id: "bid-received".to_string(),
            channel: Channel::Push,
            subject: "New bid on your job".to_string(),
            body: "{{provider_name}} bid {{amount}} on \"{{job_title}}\".".to_string(),
        },
        NotificationTemplate {
            id: "bid-awarded".to_string(),
            channel: Channel::Email,
            subject: "Your bid was accepted".to_string(),
            body: "Hi {{provider_name}}, {{client_name}} accepted your bid of {{amount}} \
                   for \"{{job_title}}\"."
                .to_string(),
        },
    ]
}
