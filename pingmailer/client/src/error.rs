use reqwest::StatusCode;
use snafu::Snafu;

/// Result type alias for the client library.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors that can occur while talking to the notification service.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    /// A credential or request model was built from malformed input.
    #[snafu(display("Invalid `{field}`: {reason}"))]
    Validation { field: &'static str, reason: String },

    /// The token endpoint rejected the client-credentials exchange.
    #[snafu(display(
        "Token endpoint {endpoint} rejected the client credentials with status {status}: {body}"
    ))]
    Authentication { endpoint: String, status: StatusCode, body: String },

    /// A collaborator answered with a shape this client does not understand.
    #[snafu(display("Malformed response from {endpoint}: {message}"))]
    Protocol { endpoint: String, message: String },

    /// A collaborator answered with a body that is not valid JSON.
    #[snafu(display("Could not decode response from {endpoint}, error: {source}"))]
    DecodeResponse { endpoint: String, source: serde_json::Error },

    /// A collaborator answered with a status the operation does not accept.
    #[snafu(display("Unexpected status {status} from {endpoint}"))]
    UnexpectedStatus { endpoint: String, status: StatusCode },

    /// The request never produced a response (timeout, refused, TLS failure).
    #[snafu(display("Failed to reach {endpoint}, error: {source}"))]
    Transport { endpoint: String, source: reqwest::Error },

    #[snafu(display("Failed to build HTTP client, error: {source}"))]
    BuildHttpClient { source: reqwest::Error },
}

impl Error {
    /// Input was rejected before any network activity.
    #[must_use]
    pub const fn is_validation(&self) -> bool { matches!(self, Self::Validation { .. }) }

    #[must_use]
    pub const fn is_authentication(&self) -> bool { matches!(self, Self::Authentication { .. }) }

    /// The remote service broke its response contract.
    #[must_use]
    pub const fn is_protocol(&self) -> bool {
        matches!(self, Self::Protocol { .. } | Self::DecodeResponse { .. })
    }

    #[must_use]
    pub const fn is_transport(&self) -> bool { matches!(self, Self::Transport { .. }) }

    /// HTTP status carried by the error, if the remote side produced one.
    #[must_use]
    pub const fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Authentication { status, .. } | Self::UnexpectedStatus { status, .. } => {
                Some(*status)
            }
            _ => None,
        }
    }
}
