use std::io::{self, Write};

use pingmailer_client::{HealthProber, HealthStatus};
use snafu::ResultExt;

use super::execute;
use crate::{
    config::Config,
    error::{self, Result},
};

/// Probe the service and print the health payload.
#[allow(clippy::result_large_err)]
pub fn run_health(config: Config) -> Result<()> {
    execute(config, |config| async move {
        let http = config.api.client_config().build_http_client()?;
        let health = HealthProber::new(http).check(&config.api.url).await;

        print_health(&health)?;

        if health.reachable {
            Ok(())
        } else {
            error::ServiceUnreachableSnafu { url: config.api.url }.fail()
        }
    })
}

fn print_health(health: &HealthStatus) -> Result<()> {
    let text = serde_json::to_string_pretty(health).expect("`HealthStatus` is serializable");
    writeln!(io::stdout(), "{text}").context(error::WriteStdoutSnafu)
}
