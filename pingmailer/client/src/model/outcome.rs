use reqwest::StatusCode;

/// How the notification service answered a `/notify` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The service answered `200 OK`.
    Success,

    /// Any other status, together with the response body.
    Failure { status: StatusCode, body: String },
}

impl Outcome {
    #[must_use]
    pub const fn is_success(&self) -> bool { matches!(self, Self::Success) }

    /// Classifies a `/notify` response. Only `200 OK` counts as delivered.
    #[must_use]
    pub fn from_response(status: StatusCode, body: impl Into<String>) -> Self {
        if status == StatusCode::OK {
            Self::Success
        } else {
            Self::Failure { status, body: body.into() }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_ok_is_success() {
        assert_eq!(Outcome::from_response(StatusCode::OK, "{}"), Outcome::Success);

        for status in [
            StatusCode::ACCEPTED,
            StatusCode::BAD_REQUEST,
            StatusCode::UNAUTHORIZED,
            StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let outcome = Outcome::from_response(status, "nope");
            assert!(!outcome.is_success());
            assert_eq!(outcome, Outcome::Failure { status, body: "nope".to_string() });
        }
    }
}
