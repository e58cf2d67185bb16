use std::sync::Arc;

use reqwest::{StatusCode, Url};
use tokio::sync::Mutex;

use crate::{
    config::{ClientConfig, UnauthorizedPolicy},
    endpoint::{normalize_base_url, service_endpoint},
    error::Result,
    health::HealthProber,
    model::{
        ApplicationCredentials, BearerToken, HealthStatus, MailCredentials, NotificationRequest,
        Outcome,
    },
    notify::{self, NotifyPayload},
    token::TokenAcquirer,
    NOTIFY_PATH,
};

/// Client for the notification service.
///
/// Every `/notify` call carries two independent credentials: a bearer token
/// proving the *application* may use the API, and the relay credentials
/// proving the *sender* may send mail. The bearer token is fetched lazily on
/// the first [`send`](Self::send) and reused for the lifetime of the
/// instance.
///
/// The token slot is guarded by an async mutex held across the token
/// exchange, so concurrent callers racing on an empty slot trigger a single
/// request and all reuse its result.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
    notify_url: Url,
    credentials: ApplicationCredentials,
    acquirer: TokenAcquirer,
    prober: HealthProber,
    unauthorized_policy: UnauthorizedPolicy,
    token: Mutex<Option<Arc<BearerToken>>>,
}

impl Client {
    /// Creates a client with [`ClientConfig::default`].
    ///
    /// # Errors
    ///
    /// Returns an error if `base_url` is not an `http`/`https` URL or the HTTP
    /// client cannot be built.
    pub fn new(base_url: &str, credentials: ApplicationCredentials) -> Result<Self> {
        Self::with_config(base_url, credentials, &ClientConfig::default())
    }

    /// # Errors
    ///
    /// Returns an error if `base_url` is not an `http`/`https` URL or the HTTP
    /// client cannot be built.
    pub fn with_config(
        base_url: &str,
        credentials: ApplicationCredentials,
        config: &ClientConfig,
    ) -> Result<Self> {
        let base_url = normalize_base_url(base_url)?;
        let notify_url = service_endpoint(&base_url, NOTIFY_PATH)?;
        let http = config.build_http_client()?;

        Ok(Self {
            acquirer: TokenAcquirer::new(http.clone()),
            prober: HealthProber::new(http.clone()),
            http,
            base_url,
            notify_url,
            credentials,
            unauthorized_policy: config.unauthorized_policy,
            token: Mutex::new(None),
        })
    }

    /// Service base URL without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str { &self.base_url }

    /// Sends one notification through the sender's relay.
    ///
    /// Acquires the application token first if none is cached. Any HTTP
    /// status from `/notify` is reported as an [`Outcome`]; only `200 OK` is
    /// [`Outcome::Success`].
    ///
    /// # Errors
    ///
    /// Returns an error if the token exchange fails or either endpoint cannot
    /// be reached.
    pub async fn send(
        &self,
        mail: &MailCredentials,
        request: &NotificationRequest,
    ) -> Result<Outcome> {
        let payload = NotifyPayload::compose(mail, request);

        let token = self.bearer_token().await?;
        let outcome = notify::submit(&self.http, &self.notify_url, &token, &payload).await?;

        match outcome {
            Outcome::Failure { status, .. }
                if status == StatusCode::UNAUTHORIZED
                    && self.unauthorized_policy == UnauthorizedPolicy::RefreshAndRetryOnce =>
            {
                tracing::info!("Bearer token rejected by the notification service, refreshing it");
                self.discard_token(&token).await;

                let token = self.bearer_token().await?;
                notify::submit(&self.http, &self.notify_url, &token, &payload).await
            }
            outcome => Ok(outcome),
        }
    }

    /// Probes `<base_url>/health`. Never fails, see [`HealthProber::check`].
    pub async fn check_health(&self) -> HealthStatus { self.prober.check(&self.base_url).await }

    /// Whether a bearer token is currently cached.
    pub async fn has_token(&self) -> bool { self.token.lock().await.is_some() }

    /// Forgets the cached bearer token so the next [`send`](Self::send)
    /// acquires a new one.
    pub async fn clear_token(&self) {
        if self.token.lock().await.take().is_some() {
            tracing::debug!("Cached bearer token cleared");
        }
    }

    /// Returns the cached token, acquiring it while holding the slot if empty.
    async fn bearer_token(&self) -> Result<Arc<BearerToken>> {
        let mut slot = self.token.lock().await;
        if let Some(token) = slot.as_ref() {
            return Ok(Arc::clone(token));
        }

        let token = Arc::new(self.acquirer.acquire(&self.credentials).await?);
        *slot = Some(Arc::clone(&token));
        drop(slot);

        Ok(token)
    }

    /// Empties the slot only if it still holds `stale`; another caller may
    /// already have replaced it.
    async fn discard_token(&self, stale: &Arc<BearerToken>) {
        let mut slot = self.token.lock().await;
        if slot.as_ref().is_some_and(|current| Arc::ptr_eq(current, stale)) {
            *slot = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> ApplicationCredentials {
        ApplicationCredentials::new("https://localhost:8090/oauth2/token", "id", "secret").unwrap()
    }

    #[test]
    fn test_base_url_is_normalized() {
        let client = Client::new("https://localhost:8080/", credentials()).unwrap();
        assert_eq!(client.base_url(), "https://localhost:8080");
        assert_eq!(client.notify_url.as_str(), "https://localhost:8080/notify");
    }

    #[test]
    fn test_invalid_base_url() {
        let err = Client::new("localhost:8080", credentials()).unwrap_err();
        assert!(err.is_validation(), "got: {err}");
    }

    #[tokio::test]
    async fn test_starts_without_token() {
        let client = Client::new("https://localhost:8080", credentials()).unwrap();
        assert!(!client.has_token().await);
        client.clear_token().await;
        assert!(!client.has_token().await);
    }
}
