use std::io::{self, Write};

use pingmailer_client::{Client, NotificationRequest, Outcome, TemplateData};
use snafu::ResultExt;

use super::execute;
use crate::{
    cli::NotifyArgs,
    config::Config,
    error::{self, Result},
};

/// Send one notification using the configured application and relay
/// credentials.
#[allow(clippy::result_large_err)]
pub fn run_notify(config: Config, args: NotifyArgs) -> Result<()> {
    execute(config, |config| async move {
        // Validate everything before touching the network.
        let request = build_request(&args)?;
        let mail = config.smtp.credentials()?;
        let credentials = config.oauth2.credentials()?;

        let client =
            Client::with_config(&config.api.url, credentials, &config.api.client_config())?;

        if !args.skip_health_check {
            let health = client.check_health().await;
            if !health.reachable {
                tracing::warn!(
                    diagnostic = health.diagnostic().unwrap_or_default(),
                    "Health check failed, continuing anyway"
                );
            }
        }

        tracing::info!(recipient = %request.recipient_email(), "Sending notification");

        match client.send(&mail, &request).await? {
            Outcome::Success => writeln!(io::stdout(), "Email notification queued successfully")
                .context(error::WriteStdoutSnafu),
            Outcome::Failure { status, body } => {
                error::NotificationRefusedSnafu { status, body }.fail()
            }
        }
    })
}

fn build_request(args: &NotifyArgs) -> Result<NotificationRequest> {
    let mut request = NotificationRequest::new(args.recipient.as_str())?;

    if let Some(ref name) = args.recipient_name {
        request = request.with_recipient_name(name.as_str());
    }
    if let Some(ref app_name) = args.app_name {
        request = request.with_app_name(app_name.as_str());
    }
    if let Some(ref path) = args.template_path {
        let template = std::fs::read_to_string(path)
            .context(error::ReadTemplateSnafu { path: path.clone() })?;
        request = request.with_template(template);
    }
    if let Some(ref data) = args.template_data {
        let data: TemplateData =
            serde_json::from_str(data).context(error::ParseTemplateDataSnafu)?;
        request = request.with_template_data(data);
    }

    Ok(request)
}
