use anyhow::{Context, Result};
use clap::Args;

use autoshield_common::alert::WebhookAlert;
use autoshield_monitor::client::AlertStore;

use super::helpers;
use crate::output::{print_info, print_json, print_success, OutputMode};

#[derive(Args)]
pub struct InjectArgs {
    #[arg(long, default_value = "SSH_BRUTE_FORCE")]
    pub event_type: String,

    #[arg(long, default_value = "CRITICAL")]
    pub severity: String,

    #[arg(long)]
    pub source_ip: String,

    #[arg(long, default_value = "TEST: injected alert")]
    pub description: String,
}

pub async fn execute(args: InjectArgs, mode: OutputMode, backend: Option<String>) -> Result<()> {
    let store = helpers::backend_client(backend.as_deref());

    let payload = WebhookAlert {
        event_type: args.event_type.clone(),
        severity: args.severity.clone(),
        source_ip: args.source_ip.clone(),
        description: args.description.clone(),
    };
    store
        .post_webhook(&payload)
        .await
        .context("webhook request failed")?;

    // The webhook returns no body; fetch the newest record to show what was
    // created.
    let recent = store
        .recent_alerts(1)
        .await
        .context("fetching recent alerts failed")?;
    let created = recent
        .iter()
        .find(|a| a.alert_type == args.event_type && a.source_ip == args.source_ip);

    match mode {
        OutputMode::Json => print_json(&serde_json::json!({
            "created": created,
        }))?,
        OutputMode::Human => match created {
            Some(alert) => {
                print_success(&format!("Alert #{} created", alert.id));
                print_info("Type", &alert.alert_type);
                print_info("Severity", &alert.severity);
                print_info("Status", &format!("{:?}", alert.status));
            }
            None => {
                print_success("Alert accepted by webhook");
                print_info("Note", "created record not visible in the recent window yet");
            }
        },
    }

    Ok(())
}
