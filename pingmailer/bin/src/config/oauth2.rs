use pingmailer_client::ApplicationCredentials;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

use super::{error, Error};

/// Application identity used for the client-credentials grant.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct OAuth2Config {
    #[serde(default = "OAuth2Config::default_token_url")]
    pub token_url: String,

    #[serde(default = "OAuth2Config::default_client_id")]
    pub client_id: String,

    #[serde(default = "OAuth2Config::default_client_secret")]
    pub client_secret: String,
}

impl OAuth2Config {
    #[inline]
    pub fn default_token_url() -> String { "https://localhost:8090/oauth2/token".to_string() }

    #[inline]
    pub fn default_client_id() -> String { "your-client-id".to_string() }

    #[inline]
    pub fn default_client_secret() -> String { "changeme".to_string() }

    pub fn credentials(&self) -> Result<ApplicationCredentials, Error> {
        ApplicationCredentials::new(&self.token_url, &self.client_id, &self.client_secret)
            .context(error::InvalidSectionSnafu { section: "oauth2" })
    }
}

impl Default for OAuth2Config {
    fn default() -> Self {
        Self {
            token_url: Self::default_token_url(),
            client_id: Self::default_client_id(),
            client_secret: Self::default_client_secret(),
        }
    }
}
