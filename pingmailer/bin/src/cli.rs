use std::{io, io::Write, path::PathBuf};

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use crate::{
    command::{run_health, run_notify, run_token},
    config::Config,
    error,
};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(
        long = "config",
        short = 'c',
        env = "PINGMAILER_CONFIG_FILE_PATH",
        help = "Specify a configuration file"
    )]
    config_file_path: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    #[clap(about = "Print version information")]
    Version,

    #[clap(about = "Output shell completion code for the specified shell (bash, zsh, fish)")]
    Completion { shell: Shell },

    #[clap(about = "Output default configuration")]
    DefaultConfig,

    #[clap(about = "Check whether the notification service is reachable")]
    Health,

    #[clap(about = "Acquire an application access token to verify OAuth2 credentials")]
    Token,

    #[clap(about = "Send an email notification")]
    #[command(visible_alias = "send")]
    Notify(NotifyArgs),
}

#[derive(Args, Clone, Debug)]
pub struct NotifyArgs {
    #[arg(help = "Recipient email address")]
    pub recipient: String,

    #[arg(long = "name", help = "Recipient display name")]
    pub recipient_name: Option<String>,

    #[arg(long = "app-name", help = "Name of the application sending the notification")]
    pub app_name: Option<String>,

    #[arg(long = "template", help = "File with custom template content")]
    pub template_path: Option<PathBuf>,

    #[arg(long = "template-data", help = "Template data as a JSON object")]
    pub template_data: Option<String>,

    #[arg(long, help = "Do not probe the service health before sending")]
    pub skip_health_check: bool,
}

impl Cli {
    pub fn run(self) -> Result<(), Box<error::Error>> {
        match self.command {
            Command::Version => {
                io::stdout()
                    .write_all(Self::command().render_long_version().as_bytes())
                    .expect("failed to write to stdout");
            }
            Command::Completion { shell } => {
                let mut command = Self::command();
                let bin_name = command.get_name().to_string();
                clap_complete::generate(shell, &mut command, bin_name, &mut io::stdout());
            }
            Command::DefaultConfig => {
                let config_text =
                    serde_yaml::to_string(&Config::default()).expect("`Config` is serializable");
                io::stdout().write_all(config_text.as_bytes()).expect("failed to write to stdout");
            }
            Command::Health => run_health(self.load_config()?)?,
            Command::Token => run_token(self.load_config()?)?,
            Command::Notify(ref args) => run_notify(self.load_config()?, args.clone())?,
        }

        Ok(())
    }

    #[allow(clippy::result_large_err)]
    fn load_config(&self) -> Result<Config, error::Error> {
        let config_file_path = &self.config_file_path.clone().unwrap_or_else(Config::default_path);
        Ok(Config::load(config_file_path)?)
    }
}
