mod api;
mod error;
mod oauth2;
mod smtp;

use std::path::{Path, PathBuf};

use pingmailer_cli_common::config::{LogConfig, LogOutput};
use resolve_path::PathResolveExt;
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

pub use self::{api::ApiConfig, error::Error, oauth2::OAuth2Config, smtp::SmtpConfig};
use crate::constants::{CONFIG_NAME, PROJECT_CONFIG_DIR};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub log: LogConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub oauth2: OAuth2Config,

    #[serde(default)]
    pub smtp: SmtpConfig,
}

impl Config {
    #[inline]
    pub fn default_path() -> PathBuf { PROJECT_CONFIG_DIR.join(CONFIG_NAME) }

    #[inline]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let data = std::fs::read_to_string(&path)
            .context(error::OpenConfigSnafu { filename: path.as_ref().to_path_buf() })?;

        Self::from_yaml(&data, path.as_ref())
    }

    fn from_yaml(data: &str, filename: &Path) -> Result<Self, Error> {
        let mut config: Self = serde_yaml::from_str(data)
            .context(error::ParseConfigSnafu { filename: filename.to_path_buf() })?;

        if let LogOutput::File { ref mut path } = config.log.output {
            let resolved = path
                .try_resolve()
                .map(|resolved| resolved.to_path_buf())
                .with_context(|_| error::ResolveFilePathSnafu { file_path: path.clone() })?;
            *path = resolved;
        }

        Ok(config)
    }
}
