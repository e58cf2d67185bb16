use std::{fmt, time::Duration};

use secrecy::{ExposeSecret, SecretString};

/// Bearer token issued by the token endpoint.
///
/// The declared lifetime is kept for diagnostics only; staleness is detected
/// by the service rejecting the token, not by a local clock.
pub struct BearerToken {
    access_token: SecretString,
    expires_in: Option<Duration>,
}

impl BearerToken {
    #[must_use]
    pub fn new(access_token: impl Into<String>, expires_in: Option<Duration>) -> Self {
        Self { access_token: SecretString::from(access_token.into()), expires_in }
    }

    /// The raw token value, for the `Authorization` header only.
    #[must_use]
    pub fn secret(&self) -> &str { self.access_token.expose_secret() }

    /// Lifetime declared by the token endpoint, if it sent one.
    #[must_use]
    pub const fn expires_in(&self) -> Option<Duration> { self.expires_in }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BearerToken")
            .field("access_token", &"[REDACTED]")
            .field("expires_in", &self.expires_in)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_token() {
        let token = BearerToken::new("eyJhbGciOi.secret", Some(Duration::from_secs(3600)));
        let debug = format!("{token:?}");
        assert!(!debug.contains("eyJhbGciOi"));
        assert!(debug.contains("3600"));
        assert_eq!(token.secret(), "eyJhbGciOi.secret");
        assert_eq!(token.expires_in(), Some(Duration::from_secs(3600)));
    }
}
