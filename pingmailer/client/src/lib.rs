//! # PingMailer client
//!
//! Client for a notification service that requires two independent
//! credentials on every email notification:
//!
//! - an `OAuth2` client-credentials bearer token that authenticates the calling
//!   application, and
//! - the outbound relay credentials (host, port, username, password, sender)
//!   that authenticate the account the mail is sent from.
//!
//! ## Example
//!
//! ```no_run
//! use pingmailer_client::{ApplicationCredentials, Client, MailCredentials, NotificationRequest};
//!
//! # async fn example() -> Result<(), pingmailer_client::Error> {
//! let credentials = ApplicationCredentials::new(
//!     "https://auth.example.com/oauth2/token",
//!     "my-client-id",
//!     "my-client-secret",
//! )?;
//! let client = Client::new("https://mail.example.com", credentials)?;
//!
//! let mail =
//!     MailCredentials::new("smtp.example.com", 587, "me", "app-password", "me@example.com")?;
//! let request = NotificationRequest::new("jane@example.com")?.with_recipient_name("Jane Doe");
//!
//! if !client.check_health().await.reachable {
//!     tracing::warn!("health check failed, continuing anyway");
//! }
//! let outcome = client.send(&mail, &request).await?;
//! assert!(outcome.is_success());
//! # Ok(())
//! # }
//! ```

mod client;
pub mod config;
mod endpoint;
mod error;
pub mod health;
pub mod model;
pub mod notify;
pub mod token;

pub use self::{
    client::Client,
    config::{ClientConfig, TlsVerification, UnauthorizedPolicy},
    error::{Error, Result},
    health::HealthProber,
    model::{
        ApplicationCredentials, BearerToken, HealthStatus, MailCredentials, NotificationRequest,
        Outcome, TemplateData,
    },
    token::TokenAcquirer,
};

pub const NOTIFY_PATH: &str = "notify";

pub const HEALTH_PATH: &str = "health";
