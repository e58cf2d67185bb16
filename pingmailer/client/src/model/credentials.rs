use std::fmt;

use reqwest::Url;
use secrecy::{ExposeSecret, SecretString};

use super::{mailbox, required};
use crate::{
    endpoint::parse_http_url,
    error::{Error, Result},
};

/// Identity of the calling application at the `OAuth2` token endpoint.
///
/// The resulting bearer token authorizes the application to use the API; it
/// says nothing about who is allowed to send mail.
#[derive(Debug)]
pub struct ApplicationCredentials {
    token_url: Url,
    client_id: String,
    client_secret: SecretString,
}

impl ApplicationCredentials {
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the token URL is not an absolute
    /// `http`/`https` URL or the client identifier or secret is blank.
    pub fn new(
        token_url: &str,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        let token_url = parse_http_url("token_url", token_url)?;
        let client_id = required("client_id", client_id)?;
        let client_secret = client_secret.into();
        if client_secret.is_empty() {
            return Err(Error::Validation {
                field: "client_secret",
                reason: "is required".to_string(),
            });
        }

        Ok(Self { token_url, client_id, client_secret: SecretString::from(client_secret) })
    }

    #[must_use]
    pub const fn token_url(&self) -> &Url { &self.token_url }

    #[must_use]
    pub fn client_id(&self) -> &str { &self.client_id }

    pub(crate) fn client_secret(&self) -> &str { self.client_secret.expose_secret() }
}

/// Outbound relay account used to actually deliver the message.
///
/// These credentials travel in the body of every notification call next to
/// the bearer token. They identify a real mail account, so `Debug` output
/// shows the port only.
pub struct MailCredentials {
    host: String,
    port: u16,
    username: String,
    password: SecretString,
    sender: String,
}

impl MailCredentials {
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if the host, username or password is
    /// blank, the port is `0`, or the sender is not a valid email address.
    pub fn new(
        host: impl Into<String>,
        port: u16,
        username: impl Into<String>,
        password: impl Into<String>,
        sender: impl Into<String>,
    ) -> Result<Self> {
        let host = required("smtp_host", host)?;
        if host.contains(char::is_whitespace) {
            return Err(Error::Validation {
                field: "smtp_host",
                reason: format!("`{host}` contains whitespace"),
            });
        }
        if port == 0 {
            return Err(Error::Validation {
                field: "smtp_port",
                reason: "must be in range 1-65535".to_string(),
            });
        }
        let username = required("smtp_username", username)?;
        let password = password.into();
        if password.is_empty() {
            return Err(Error::Validation {
                field: "smtp_password",
                reason: "is required".to_string(),
            });
        }
        let sender = mailbox("smtp_sender", sender)?;

        Ok(Self { host, port, username, password: SecretString::from(password), sender })
    }

    #[must_use]
    pub fn host(&self) -> &str { &self.host }

    #[must_use]
    pub const fn port(&self) -> u16 { self.port }

    #[must_use]
    pub fn username(&self) -> &str { &self.username }

    #[must_use]
    pub fn sender(&self) -> &str { &self.sender }

    pub(crate) fn password(&self) -> &str { self.password.expose_secret() }
}

impl fmt::Debug for MailCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MailCredentials")
            .field("host", &"[REDACTED]")
            .field("port", &self.port)
            .field("username", &"[REDACTED]")
            .field("password", &"[REDACTED]")
            .field("sender", &"[REDACTED]")
            .finish()
    }
}
