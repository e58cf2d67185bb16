mod health;
mod notify;
mod token;

use std::{future::Future, process};

use snafu::ResultExt;
use tokio::runtime::Runtime;

pub use self::{health::run_health, notify::run_notify, token::run_token};
use crate::{
    config::Config,
    constants::PROGRAM_NAME,
    error::{self, Result},
};

/// Installs logging, then drives `task` to completion on a fresh runtime.
#[allow(clippy::result_large_err)]
fn execute<F, Fut>(config: Config, task: F) -> Result<()>
where
    F: FnOnce(Config) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    config.log.init().context(error::InitializeLoggerSnafu)?;

    tracing::debug!("{PROGRAM_NAME} is starting, pid: {}", process::id());

    let exit_status = match Runtime::new().context(error::InitializeTokioRuntimeSnafu) {
        Ok(runtime) => runtime.block_on(task(config)),
        Err(err) => Err(err),
    };

    if let Err(ref error) = exit_status {
        tracing::error!(%error);
    }

    exit_status
}
