use pingmailer_client::MailCredentials;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use super::{error, Error};

/// Relay account the notification is sent through.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct SmtpConfig {
    #[serde(default = "SmtpConfig::default_host")]
    pub host: String,

    #[serde(default = "SmtpConfig::default_port")]
    pub port: u16,

    #[serde(default = "SmtpConfig::default_username")]
    pub username: String,

    #[serde(default = "SmtpConfig::default_password")]
    pub password: String,

    #[serde(default = "SmtpConfig::default_sender")]
    pub sender: String,
}

impl SmtpConfig {
    #[inline]
    pub fn default_host() -> String { "smtp.gmail.com".to_string() }

    #[inline]
    pub const fn default_port() -> u16 { 587 }

    #[inline]
    pub fn default_username() -> String { "user@gmail.com".to_string() }

    #[inline]
    pub fn default_password() -> String { "changeme".to_string() }

    #[inline]
    pub fn default_sender() -> String { "user@gmail.com".to_string() }

    pub fn credentials(&self) -> Result<MailCredentials, Error> {
        MailCredentials::new(
            self.host.as_str(),
            self.port,
            self.username.as_str(),
            self.password.as_str(),
            self.sender.as_str(),
        )
        .context(error::InvalidSectionSnafu { section: "smtp" })
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
            username: Self::default_username(),
            password: Self::default_password(),
            sender: Self::default_sender(),
        }
    }
}
