use std::io::{self, Write};

use pingmailer_client::TokenAcquirer;
use snafu::ResultExt;

use super::execute;
use crate::{
    config::Config,
    error::{self, Result},
};

/// Run the client-credentials exchange once. The token itself is never
/// printed.
#[allow(clippy::result_large_err)]
pub fn run_token(config: Config) -> Result<()> {
    execute(config, |config| async move {
        let credentials = config.oauth2.credentials()?;
        let http = config.api.client_config().build_http_client()?;

        let token = TokenAcquirer::new(http).acquire(&credentials).await?;

        let lifetime = token
            .expires_in()
            .map_or_else(|| "unknown".to_string(), |lifetime| lifetime.as_secs().to_string());
        writeln!(io::stdout(), "Access token obtained (expires in {lifetime} seconds)")
            .context(error::WriteStdoutSnafu)
    })
}
