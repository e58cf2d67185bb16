use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of probing the service's `/health` endpoint.
///
/// The payload is whatever JSON the service returned; when the service is
/// unreachable it holds `{"error": "<diagnostic>"}` instead.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub struct HealthStatus {
    pub reachable: bool,

    pub payload: Value,
}

impl HealthStatus {
    #[must_use]
    pub const fn reachable(payload: Value) -> Self { Self { reachable: true, payload } }

    #[must_use]
    pub fn unreachable(diagnostic: impl Into<String>) -> Self {
        Self { reachable: false, payload: serde_json::json!({ "error": diagnostic.into() }) }
    }

    /// The `status` field reported by the service, e.g. `"ok"`.
    #[must_use]
    pub fn status(&self) -> Option<&str> { self.field("status") }

    #[must_use]
    pub fn version(&self) -> Option<&str> { self.field("version") }

    #[must_use]
    pub fn diagnostic(&self) -> Option<&str> {
        if self.reachable {
            None
        } else {
            self.field("error")
        }
    }

    fn field(&self, key: &str) -> Option<&str> { self.payload.get(key).and_then(Value::as_str) }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_reachable_fields() {
        let health = HealthStatus::reachable(json!({ "status": "ok", "version": "1.0.0" }));
        assert!(health.reachable);
        assert_eq!(health.status(), Some("ok"));
        assert_eq!(health.version(), Some("1.0.0"));
        assert_eq!(health.diagnostic(), None);
    }

    #[test]
    fn test_unreachable_diagnostic() {
        let health = HealthStatus::unreachable("connection refused");
        assert!(!health.reachable);
        assert_eq!(health.status(), None);
        assert_eq!(health.diagnostic(), Some("connection refused"));
    }
}
