//! Request body and submission for the `/notify` endpoint.

use reqwest::Url;
use serde::Serialize;
use snafu::ResultExt;

use crate::{
    error::{Result, TransportSnafu},
    model::{BearerToken, MailCredentials, NotificationRequest, Outcome, TemplateData},
};

/// Body of a `/notify` call: the sender's relay credentials merged with the
/// notification fields. Absent optional fields are omitted, never `null`.
///
/// Intentionally not `Debug`: it carries the relay password in clear.
#[derive(Serialize)]
pub struct NotifyPayload<'a> {
    smtp_host: &'a str,
    smtp_port: u16,
    smtp_username: &'a str,
    smtp_password: &'a str,
    smtp_sender: &'a str,
    recipient_email: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    recipient_name: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    app_name: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    template: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    template_data: Option<&'a TemplateData>,
}

impl<'a> NotifyPayload<'a> {
    #[must_use]
    pub fn compose(mail: &'a MailCredentials, request: &'a NotificationRequest) -> Self {
        Self {
            smtp_host: mail.host(),
            smtp_port: mail.port(),
            smtp_username: mail.username(),
            smtp_password: mail.password(),
            smtp_sender: mail.sender(),
            recipient_email: request.recipient_email(),
            recipient_name: request.recipient_name(),
            app_name: request.app_name(),
            template: request.template(),
            template_data: request.template_data(),
        }
    }

    #[must_use]
    pub const fn recipient_email(&self) -> &'a str { self.recipient_email }
}

/// POSTs `payload` to `endpoint` with the bearer token and classifies the
/// response.
///
/// # Errors
///
/// Returns [`Error::Transport`](crate::Error::Transport) if no response was
/// received. Any HTTP status is an [`Outcome`], not an error.
pub async fn submit(
    http: &reqwest::Client,
    endpoint: &Url,
    token: &BearerToken,
    payload: &NotifyPayload<'_>,
) -> Result<Outcome> {
    tracing::debug!(recipient = %payload.recipient_email(), "Submitting notification");

    let response = http
        .post(endpoint.clone())
        .bearer_auth(token.secret())
        .json(payload)
        .send()
        .await
        .context(TransportSnafu { endpoint: endpoint.as_str() })?;

    let status = response.status();
    let body = response.text().await.context(TransportSnafu { endpoint: endpoint.as_str() })?;

    let outcome = Outcome::from_response(status, body);
    match &outcome {
        Outcome::Success => {
            tracing::info!(recipient = %payload.recipient_email(), "Notification accepted");
        }
        Outcome::Failure { status, body } => {
            tracing::warn!(
                recipient = %payload.recipient_email(),
                %status,
                %body,
                "Notification service refused the request"
            );
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn mail() -> MailCredentials {
        MailCredentials::new("smtp.example.com", 587, "u", "p", "u@example.com").unwrap()
    }

    #[test]
    fn test_compose_minimal_body() {
        let mail = mail();
        let request = NotificationRequest::new("r@example.com").unwrap();

        let body = serde_json::to_value(NotifyPayload::compose(&mail, &request)).unwrap();

        assert_eq!(
            body,
            json!({
                "smtp_host": "smtp.example.com",
                "smtp_port": 587,
                "smtp_username": "u",
                "smtp_password": "p",
                "smtp_sender": "u@example.com",
                "recipient_email": "r@example.com",
            })
        );
        for absent in ["recipient_name", "app_name", "template", "template_data"] {
            assert!(body.get(absent).is_none(), "`{absent}` must be omitted");
        }
    }

    #[test]
    fn test_compose_full_body() {
        let mail = mail();
        let serde_json::Value::Object(data) = json!({ "code": 1234, "links": ["a", "b"] }) else {
            unreachable!("literal is an object")
        };
        let request = NotificationRequest::new("r@example.com")
            .unwrap()
            .with_recipient_name("Jane Doe")
            .with_app_name("PingMailer Demo")
            .with_template("<p>{{.Name}}</p>")
            .with_template_data(data);

        let body = serde_json::to_value(NotifyPayload::compose(&mail, &request)).unwrap();

        assert_eq!(body["recipient_name"], "Jane Doe");
        assert_eq!(body["app_name"], "PingMailer Demo");
        assert_eq!(body["template"], "<p>{{.Name}}</p>");
        assert_eq!(body["template_data"], json!({ "code": 1234, "links": ["a", "b"] }));
        assert_eq!(body["smtp_port"], 587);
    }

    #[test]
    fn test_compose_keeps_credentials_verbatim() {
        let mail = MailCredentials::new(
            "smtp.example.com",
            587,
            " relay-user ",
            "p",
            "PingMailer <noreply@example.com>",
        )
        .unwrap();
        let request = NotificationRequest::new("Jane Doe <r@example.com>").unwrap();

        let body = serde_json::to_value(NotifyPayload::compose(&mail, &request)).unwrap();

        assert_eq!(body["smtp_sender"], "PingMailer <noreply@example.com>");
        assert_eq!(body["smtp_username"], " relay-user ");
        assert_eq!(body["recipient_email"], "Jane Doe <r@example.com>");
    }
}
