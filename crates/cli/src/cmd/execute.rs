use anyhow::{Context, Result};
use clap::Args;

use autoshield_common::alert::{AlertStatus, StatusUpdate};
use autoshield_common::analysis::ExecutionStatus;
use autoshield_common::summary;
use autoshield_monitor::client::{AlertStore, ThreatAnalyzer};

use super::helpers;
use crate::output::{print_info, print_json, print_success, print_warn, OutputMode};

#[derive(Args)]
pub struct ExecuteArgs {
    #[arg(long)]
    pub alert_id: i64,

    #[arg(long)]
    pub event_type: String,

    #[arg(long)]
    pub source_ip: String,

    /// Override the service-side approval requirement for this alert
    #[arg(long)]
    pub force: bool,

    /// Do not resolve the alert in the backend afterwards
    #[arg(long)]
    pub skip_update: bool,
}

pub async fn execute(
    args: ExecuteArgs,
    mode: OutputMode,
    backend: Option<String>,
    analysis: Option<String>,
) -> Result<()> {
    let analyzer = helpers::analysis_client(analysis.as_deref());

    let metadata = serde_json::json!({
        "alert_id": args.alert_id,
        "force_execute": args.force,
    });
    let response = analyzer
        .threat_response(&args.event_type.to_lowercase(), &args.source_ip, &metadata)
        .await
        .context("threat-response request failed")?;

    let decision = &response.response.ai_decision;
    let plan = &decision.execution_plan;
    let result = &response.response.execution_result;
    let plan_summary = summary::plan_summary(plan);

    let notes = if args.skip_update {
        None
    } else {
        let store = helpers::backend_client(backend.as_deref());
        let update = StatusUpdate {
            status: AlertStatus::Resolved,
            notes: summary::resolution_notes(&plan_summary),
        };
        store
            .update_status(args.alert_id, &update)
            .await
            .context("status update failed")?;
        Some(update.notes)
    };

    if mode == OutputMode::Json {
        return print_json(&serde_json::json!({
            "alert_id": args.alert_id,
            "confidence": decision.threat_assessment.confidence,
            "steps": plan.steps.iter().map(|s| serde_json::json!({
                "action": s.action,
                "priority": s.priority,
                "description": s.description,
                "commands": s.commands,
            })).collect::<Vec<_>>(),
            "execution_status": format!("{:?}", result.status),
            "message": result.message,
            "notes": notes,
        }));
    }

    print_info(
        "Confidence",
        &format!("{:.0}%", decision.threat_assessment.confidence * 100.0),
    );
    print_info("Steps", &plan.steps.len().to_string());
    print_info(
        "Estimated time",
        &format!("{}s", plan.estimated_duration),
    );
    for (i, step) in plan.steps.iter().enumerate() {
        print_info(
            &format!("Step {}", i + 1),
            &format!(
                "{} [{}] {}",
                step.action.to_uppercase(),
                step.priority,
                step.description
            ),
        );
        for command in &step.commands {
            print_info("  Command", command);
        }
    }

    match result.status {
        ExecutionStatus::Executed => {
            print_success(&format!("Actions executed on hypervisor: {}", result.message));
        }
        ExecutionStatus::DryRun => {
            print_warn("Dry run: commands simulated but not executed");
            print_warn("Set DRY_RUN_MODE=false on the analysis service to execute for real");
        }
        ExecutionStatus::PendingApproval => {
            print_warn(&format!("Pending manual approval: {}", result.message));
            print_warn("Set AUTO_EXECUTE_THREATS=true on the analysis service to auto-execute");
        }
        ExecutionStatus::Unknown => {
            print_warn("Execution status not reported by the analysis service");
        }
    }

    if let Some(rollback) = &decision.rollback_plan {
        print_info("Rollback strategy", &rollback.strategy);
        print_info("Rollback timeout", &format!("{}h", rollback.timeout_hours));
        print_info(
            "Rollback approval",
            if rollback.requires_approval { "required" } else { "automatic" },
        );
    }

    if notes.is_some() {
        print_success(&format!("Alert #{} resolved: {plan_summary}", args.alert_id));
    }

    Ok(())
}
