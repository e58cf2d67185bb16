mod credentials;
mod health;
mod outcome;
mod request;
mod token;

pub use self::{
    credentials::{ApplicationCredentials, MailCredentials},
    health::HealthStatus,
    outcome::Outcome,
    request::{NotificationRequest, TemplateData},
    token::BearerToken,
};
use crate::error::{Error, Result};

/// Rejects blank input. The value itself is kept exactly as given.
fn required(field: &'static str, value: impl Into<String>) -> Result<String> {
    let value = value.into();
    if value.trim().is_empty() {
        return Err(Error::Validation { field, reason: "is required".to_string() });
    }
    Ok(value)
}

/// Validates a mailbox such as `jane@example.com` or
/// `Jane Doe <jane@example.com>`.
fn mailbox(field: &'static str, value: impl Into<String>) -> Result<String> {
    let value = required(field, value)?;
    let _mailbox = value.trim().parse::<lettre::message::Mailbox>().map_err(|err| {
        let reason = format!("`{value}` is not a valid email address, {err}");
        Error::Validation { field, reason }
    })?;
    Ok(value)
}

/// Optional free-text fields: blank means absent.
fn optional(value: impl Into<String>) -> Option<String> {
    let value = value.into();
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else if trimmed.len() == value.len() {
        Some(value)
    } else {
        Some(trimmed.to_string())
    }
}
