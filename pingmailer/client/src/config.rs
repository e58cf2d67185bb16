use std::time::Duration;

use snafu::ResultExt;

use crate::error::{BuildHttpClientSnafu, Result};

/// Upper bound for a single request, including reading the response body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub const DEFAULT_USER_AGENT: &str = concat!("pingmailer-client/", env!("CARGO_PKG_VERSION"));

/// TLS certificate validation mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// Standard certificate validation.
    #[default]
    Strict,

    /// Accept any certificate, including self-signed ones.
    ///
    /// Development only. Never enable this against production endpoints.
    AcceptInvalidCertificates,
}

/// What `send` does when `/notify` answers `401 Unauthorized`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnauthorizedPolicy {
    /// Report the 401 as a failed outcome and keep the cached token.
    #[default]
    Surface,

    /// Drop the cached token, acquire a fresh one and resend exactly once.
    RefreshAndRetryOnce,
}

#[derive(Clone, Debug)]
pub struct ClientConfig {
    pub timeout: Duration,

    pub connect_timeout: Duration,

    pub tls: TlsVerification,

    pub unauthorized_policy: UnauthorizedPolicy,

    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            tls: TlsVerification::default(),
            unauthorized_policy: UnauthorizedPolicy::default(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub const fn with_connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.connect_timeout = connect_timeout;
        self
    }

    #[must_use]
    pub const fn with_tls(mut self, tls: TlsVerification) -> Self {
        self.tls = tls;
        self
    }

    #[must_use]
    pub const fn with_unauthorized_policy(mut self, policy: UnauthorizedPolicy) -> Self {
        self.unauthorized_policy = policy;
        self
    }

    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds the HTTP client shared by every call of a
    /// [`Client`](crate::Client).
    ///
    /// # Errors
    ///
    /// Returns an error if the TLS backend cannot be initialized.
    pub fn build_http_client(&self) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder()
            .timeout(self.timeout)
            .connect_timeout(self.connect_timeout)
            .user_agent(self.user_agent.as_str());

        if self.tls == TlsVerification::AcceptInvalidCertificates {
            tracing::warn!(
                "TLS certificate validation is disabled, only use this against development \
                 endpoints"
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        builder.build().context(BuildHttpClientSnafu)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_strict_and_bounded() {
        let config = ClientConfig::default();
        assert_eq!(config.tls, TlsVerification::Strict);
        assert_eq!(config.unauthorized_policy, UnauthorizedPolicy::Surface);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.user_agent.starts_with("pingmailer-client/"));
        assert!(config.build_http_client().is_ok());
    }

    #[test]
    fn test_setters() {
        let config = ClientConfig::default()
            .with_timeout(Duration::from_secs(5))
            .with_connect_timeout(Duration::from_secs(1))
            .with_tls(TlsVerification::AcceptInvalidCertificates)
            .with_unauthorized_policy(UnauthorizedPolicy::RefreshAndRetryOnce)
            .with_user_agent("demo/1.0");

        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(1));
        assert_eq!(config.tls, TlsVerification::AcceptInvalidCertificates);
        assert_eq!(config.unauthorized_policy, UnauthorizedPolicy::RefreshAndRetryOnce);
        assert_eq!(config.user_agent, "demo/1.0");
        assert!(config.build_http_client().is_ok());
    }
}
