use std::path::PathBuf;

use pingmailer_cli_common::config::LogError;
use snafu::Snafu;

use crate::config;

/// Result type alias for the CLI.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Error type for the CLI.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("{source}"))]
    Config { source: config::Error },

    #[snafu(display("Could not initialize logger, error: {source}"))]
    InitializeLogger { source: LogError },

    #[snafu(display("Could not initialize tokio runtime, error: {source}"))]
    InitializeTokioRuntime { source: std::io::Error },

    #[snafu(display("{source}"))]
    Client { source: pingmailer_client::Error },

    #[snafu(display("Notification service refused the request with status {status}: {body}"))]
    NotificationRefused { status: reqwest::StatusCode, body: String },

    #[snafu(display("Notification service at {url} is not reachable"))]
    ServiceUnreachable { url: String },

    #[snafu(display("Could not read template from {}, error: {source}", path.display()))]
    ReadTemplate { path: PathBuf, source: std::io::Error },

    #[snafu(display("Template data must be a JSON object, error: {source}"))]
    ParseTemplateData { source: serde_json::Error },

    #[snafu(display("Could not write to stdout, error: {source}"))]
    WriteStdout { source: std::io::Error },
}

impl From<config::Error> for Error {
    fn from(source: config::Error) -> Self { Self::Config { source } }
}

impl From<pingmailer_client::Error> for Error {
    fn from(source: pingmailer_client::Error) -> Self { Self::Client { source } }
}

pub trait CommandError {
    fn exit_code(&self) -> exitcode::ExitCode;
}

impl CommandError for Error {
    fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::Config { .. } | Self::InitializeLogger { .. } => exitcode::CONFIG,
            Self::InitializeTokioRuntime { .. } | Self::WriteStdout { .. } => exitcode::IOERR,
            Self::Client { source } => {
                if source.is_validation() {
                    exitcode::DATAERR
                } else if source.is_authentication() {
                    exitcode::NOPERM
                } else if source.is_protocol() {
                    exitcode::PROTOCOL
                } else if source.is_transport() {
                    exitcode::UNAVAILABLE
                } else {
                    exitcode::SOFTWARE
                }
            }
            Self::NotificationRefused { .. } | Self::ServiceUnreachable { .. } => {
                exitcode::UNAVAILABLE
            }
            Self::ReadTemplate { .. } => exitcode::NOINPUT,
            Self::ParseTemplateData { .. } => exitcode::DATAERR,
        }
    }
}
