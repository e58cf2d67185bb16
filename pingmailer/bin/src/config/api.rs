use std::time::Duration;

use pingmailer_client::{ClientConfig, TlsVerification, UnauthorizedPolicy};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DurationSeconds};

#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the notification service (e.g., <https://localhost:8080>)
    #[serde(default = "ApiConfig::default_url")]
    pub url: String,

    /// Request timeout in seconds
    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "ApiConfig::default_timeout")]
    pub timeout: Duration,

    #[serde_as(as = "DurationSeconds<u64>")]
    #[serde(default = "ApiConfig::default_connect_timeout")]
    pub connect_timeout: Duration,

    /// Enable TLS certificate verification, applies to the token endpoint too
    #[serde(default = "ApiConfig::default_verify_ssl")]
    pub verify_ssl: bool,

    /// Acquire a new token and resend once when `/notify` answers 401
    #[serde(default = "ApiConfig::default_refresh_on_unauthorized")]
    pub refresh_on_unauthorized: bool,
}

impl ApiConfig {
    #[inline]
    pub fn default_url() -> String { "https://localhost:8080".to_string() }

    #[inline]
    pub const fn default_timeout() -> Duration { pingmailer_client::config::DEFAULT_TIMEOUT }

    #[inline]
    pub const fn default_connect_timeout() -> Duration {
        pingmailer_client::config::DEFAULT_CONNECT_TIMEOUT
    }

    #[inline]
    pub const fn default_verify_ssl() -> bool { true }

    #[inline]
    pub const fn default_refresh_on_unauthorized() -> bool { false }

    pub fn client_config(&self) -> ClientConfig {
        let tls = if self.verify_ssl {
            TlsVerification::Strict
        } else {
            TlsVerification::AcceptInvalidCertificates
        };
        let unauthorized_policy = if self.refresh_on_unauthorized {
            UnauthorizedPolicy::RefreshAndRetryOnce
        } else {
            UnauthorizedPolicy::Surface
        };

        ClientConfig::default()
            .with_timeout(self.timeout)
            .with_connect_timeout(self.connect_timeout)
            .with_tls(tls)
            .with_unauthorized_policy(unauthorized_policy)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: Self::default_url(),
            timeout: Self::default_timeout(),
            connect_timeout: Self::default_connect_timeout(),
            verify_ssl: Self::default_verify_ssl(),
            refresh_on_unauthorized: Self::default_refresh_on_unauthorized(),
        }
    }
}
