//! Unauthenticated liveness probe.
//!
//! Health checks are advisory: [`HealthProber::check`] never fails, it folds
//! every problem into an unreachable [`HealthStatus`].

use reqwest::StatusCode;
use serde_json::Value;
use snafu::ResultExt;

use crate::{
    endpoint::service_endpoint,
    error::{DecodeResponseSnafu, Result, TransportSnafu, UnexpectedStatusSnafu},
    model::HealthStatus,
    HEALTH_PATH,
};

#[derive(Clone, Debug)]
pub struct HealthProber {
    http: reqwest::Client,
}

impl HealthProber {
    #[must_use]
    pub const fn new(http: reqwest::Client) -> Self { Self { http } }

    /// Issues `GET <base_url>/health`.
    pub async fn check(&self, base_url: &str) -> HealthStatus {
        match self.probe(base_url).await {
            Ok(payload) => {
                tracing::debug!(%payload, "Notification service is healthy");
                HealthStatus::reachable(payload)
            }
            Err(error) => {
                tracing::warn!(%error, "Notification service health check failed");
                HealthStatus::unreachable(error.to_string())
            }
        }
    }

    async fn probe(&self, base_url: &str) -> Result<Value> {
        let endpoint = service_endpoint(base_url, HEALTH_PATH)?;
        let endpoint_str = endpoint.as_str();

        let response = self
            .http
            .get(endpoint.clone())
            .send()
            .await
            .context(TransportSnafu { endpoint: endpoint_str })?;

        let status = response.status();
        if status != StatusCode::OK {
            return UnexpectedStatusSnafu { endpoint: endpoint_str, status }.fail();
        }

        let body = response.bytes().await.context(TransportSnafu { endpoint: endpoint_str })?;
        serde_json::from_slice(&body).context(DecodeResponseSnafu { endpoint: endpoint_str })
    }
}

#[cfg(test)]
mod tests {
    use httpmock::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::config::ClientConfig;

    fn prober() -> HealthProber {
        HealthProber::new(ClientConfig::default().build_http_client().unwrap())
    }

    #[tokio::test]
    async fn test_check_healthy() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/health").header_missing("authorization");
            then.status(200).json_body(json!({ "status": "ok", "version": "1.0.0" }));
        });

        let health = prober().check(&server.base_url()).await;

        assert!(health.reachable);
        assert_eq!(health.payload, json!({ "status": "ok", "version": "1.0.0" }));
        assert_eq!(health.status(), Some("ok"));
        mock.assert();
    }

    #[tokio::test]
    async fn test_check_service_unavailable() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(503).body("maintenance");
        });

        let health = prober().check(&server.base_url()).await;

        assert!(!health.reachable);
        assert!(health.diagnostic().is_some_and(|d| d.contains("503")));
        mock.assert();
    }

    #[tokio::test]
    async fn test_check_unparseable_body() {
        let server = MockServer::start_async().await;
        let _mock = server.mock(|when, then| {
            when.method(GET).path("/health");
            then.status(200).body("OK");
        });

        let health = prober().check(&server.base_url()).await;

        assert!(!health.reachable);
    }

    #[tokio::test]
    async fn test_check_unreachable_and_invalid_url() {
        assert!(!prober().check("http://127.0.0.1:1").await.reachable);
        assert!(!prober().check("not a url").await.reachable);
    }
}
