use std::{
    convert::Infallible,
    fmt::{self, Display, Formatter},
    fs::OpenOptions,
    path::PathBuf,
    str::FromStr,
};

use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DisplayFromStr};
use snafu::{ResultExt, Snafu};
use tracing_subscriber::{
    layer::SubscriberExt, registry::LookupSpan, util::SubscriberInitExt, EnvFilter, Layer,
};

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Invalid log filter directives `{filters}`, error: {source}"))]
    ParseFilters { filters: String, source: tracing_subscriber::filter::ParseError },

    #[snafu(display("Could not open log file {}, error: {source}", path.display()))]
    OpenLogFile { path: PathBuf, source: std::io::Error },

    #[snafu(display("Could not connect to journald, error: {source}"))]
    ConnectJournald { source: std::io::Error },

    #[snafu(display("A global logger is already installed, error: {source}"))]
    InstallLogger { source: tracing_subscriber::util::TryInitError },
}

/// Where log lines go.
///
/// Command output is written to stdout, so logs default to stderr.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LogOutput {
    #[default]
    Stderr,

    Stdout,

    Journald,

    File { path: PathBuf },
}

#[serde_as]
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct LogConfig {
    #[serde(default = "LogConfig::default_log_filters")]
    pub log_filters: String,

    #[serde(default = "LogConfig::default_log_formatter")]
    #[serde_as(as = "DisplayFromStr")]
    pub formatter: LogFormatter,

    #[serde(default)]
    pub output: LogOutput,

    // Include target module paths in every line
    #[serde(default = "LogConfig::default_with_target")]
    pub with_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_filters: Self::default_log_filters(),
            formatter: Self::default_log_formatter(),
            output: LogOutput::default(),
            with_target: Self::default_with_target(),
        }
    }
}

impl LogConfig {
    #[inline]
    #[must_use]
    pub fn default_log_filters() -> String {
        "warn,pingmailer=info,pingmailer_client=info".to_string()
    }

    #[inline]
    #[must_use]
    pub const fn default_log_formatter() -> LogFormatter { LogFormatter::Pretty }

    #[inline]
    #[must_use]
    pub const fn default_with_target() -> bool { false }

    /// Installs the global `tracing` subscriber described by this config.
    ///
    /// # Errors
    ///
    /// Returns an error if the filter directives do not parse, the log sink
    /// cannot be opened, or a subscriber is already installed.
    pub fn init(&self) -> Result<(), Error> {
        let filter = EnvFilter::try_new(self.log_filters.as_str())
            .context(ParseFiltersSnafu { filters: self.log_filters.clone() })?;

        tracing_subscriber::registry()
            .with(filter)
            .with(self.layer()?)
            .try_init()
            .context(InstallLoggerSnafu)
    }

    fn layer<S>(&self) -> Result<Box<dyn Layer<S> + Send + Sync + 'static>, Error>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        let fmt = tracing_subscriber::fmt::layer().with_target(self.with_target);
        let json = self.formatter == LogFormatter::Json;

        let layer = match &self.output {
            LogOutput::Journald => {
                tracing_journald::layer().context(ConnectJournaldSnafu)?.boxed()
            }
            LogOutput::Stderr if json => {
                fmt.with_writer(std::io::stderr).json().flatten_event(true).boxed()
            }
            LogOutput::Stderr => fmt.with_writer(std::io::stderr).boxed(),
            LogOutput::Stdout if json => {
                fmt.with_writer(std::io::stdout).json().flatten_event(true).boxed()
            }
            LogOutput::Stdout => fmt.with_writer(std::io::stdout).boxed(),
            LogOutput::File { path } => {
                let file = OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(path)
                    .context(OpenLogFileSnafu { path: path.clone() })?;
                if json {
                    fmt.with_writer(file).with_ansi(false).json().flatten_event(true).boxed()
                } else {
                    fmt.with_writer(file).with_ansi(false).boxed()
                }
            }
        };

        Ok(layer)
    }
}

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum LogFormatter {
    Pretty,
    Json,
}

impl FromStr for LogFormatter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            _ => Ok(Self::Pretty),
        }
    }
}

impl Display for LogFormatter {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}
