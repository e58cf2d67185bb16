//! Example: check service health, then send one notification with dual
//! authentication.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p pingmailer-client --example send_notification
//! ```
//!
//! Adjust the endpoints and credentials below before running.

use pingmailer_client::{
    ApplicationCredentials, Client, ClientConfig, MailCredentials, NotificationRequest, Outcome,
    TlsVerification,
};

#[tokio::main]
async fn main() -> Result<(), pingmailer_client::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let credentials = ApplicationCredentials::new(
        "https://localhost:8090/oauth2/token",
        "your-client-id",
        "your-client-secret",
    )?;

    // The local development stack uses self-signed certificates.
    let config = ClientConfig::default().with_tls(TlsVerification::AcceptInvalidCertificates);
    let client = Client::with_config("https://localhost:8080", credentials, &config)?;

    let health = client.check_health().await;
    if health.reachable {
        tracing::info!(payload = %health.payload, "Server is healthy");
    } else {
        tracing::warn!("Server health check failed, but continuing");
    }

    let mail = MailCredentials::new(
        "smtp.gmail.com",
        587,
        "user@gmail.com",
        "user-app-password",
        "user@gmail.com",
    )?;
    let request = NotificationRequest::new("recipient@example.com")?
        .with_recipient_name("Jane Doe")
        .with_app_name("PingMailer Rust Demo");

    match client.send(&mail, &request).await? {
        Outcome::Success => tracing::info!("Email notification queued successfully"),
        Outcome::Failure { status, body } => {
            tracing::error!(%status, %body, "Failed to send notification");
        }
    }

    Ok(())
}
