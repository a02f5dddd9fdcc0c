use anyhow::{Context, Result};
use clap::Args;

use autoshield_common::alert::{AlertStatus, StatusUpdate};
use autoshield_common::analysis::{AlertMetadata, AnalyzeRequest};
use autoshield_common::summary;
use autoshield_monitor::client::{AlertStore, ThreatAnalyzer};

use super::helpers;
use crate::output::{print_info, print_json, print_success, OutputMode};

#[derive(Args)]
pub struct RespondArgs {
    #[arg(long)]
    pub alert_id: i64,

    #[arg(long)]
    pub event_type: String,

    #[arg(long)]
    pub source_ip: String,

    #[arg(long, default_value = "HIGH")]
    pub severity: String,

    #[arg(long, default_value = "")]
    pub details: String,
}

pub async fn execute(
    args: RespondArgs,
    mode: OutputMode,
    backend: Option<String>,
    analysis: Option<String>,
) -> Result<()> {
    let analyzer = helpers::analysis_client(analysis.as_deref());
    let store = helpers::backend_client(backend.as_deref());

    let request = AnalyzeRequest {
        event_type: args.event_type.to_lowercase(),
        source_ip: args.source_ip.clone(),
        metadata: AlertMetadata {
            alert_id: args.alert_id,
            severity: args.severity.clone(),
            details: args.details.clone(),
            auto_response: false,
        },
    };
    let response = analyzer
        .analyze(&request)
        .await
        .context("analysis request failed")?;

    let action_summary = summary::action_summary(&response);
    let update = StatusUpdate {
        status: AlertStatus::Resolved,
        notes: summary::resolution_notes(&action_summary),
    };
    let updated = store
        .update_status(args.alert_id, &update)
        .await
        .context("status update failed")?;

    match mode {
        OutputMode::Json => print_json(&serde_json::json!({
            "alert_id": args.alert_id,
            "threat_level": response.threat_level,
            "threat_score": response.threat_score,
            "action_taken": response.action_taken,
            "recommendations": response.recommendations,
            "status": updated.status,
            "notes": update.notes,
        }))?,
        OutputMode::Human => {
            print_info("Threat level", &response.threat_level.to_uppercase());
            print_info("Threat score", &format!("{}/100", response.threat_score));
            print_info("Action", &response.action_taken.to_uppercase());
            for (i, rec) in response.recommendations.iter().enumerate() {
                print_info(&format!("Recommendation {}", i + 1), rec);
            }
            print_success(&format!(
                "Alert #{} resolved: {action_summary}",
                args.alert_id
            ));
        }
    }

    Ok(())
}
