use serde::{Deserialize, Serialize};

use crate::alert::Alert;

/// Request body for `POST /api/v1/analyze-threat`.
#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    pub event_type: String,
    pub source_ip: String,
    pub metadata: AlertMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlertMetadata {
    pub alert_id: i64,
    pub severity: String,
    pub details: String,
    pub auto_response: bool,
}

impl AnalyzeRequest {
    /// The analysis service expects lower-cased event types; the backend
    /// stores them upper-cased.
    pub fn from_alert(alert: &Alert) -> Self {
        Self {
            event_type: alert.alert_type.to_lowercase(),
            source_ip: alert.source_ip.clone(),
            metadata: AlertMetadata {
                alert_id: alert.id,
                severity: alert.severity.clone(),
                details: alert.details.clone(),
                auto_response: true,
            },
        }
    }
}

/// Response of `POST /api/v1/analyze-threat`. Every field defaults so a
/// partial response never fails decoding.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default = "unknown_level")]
    pub threat_level: String,
    #[serde(default)]
    pub threat_score: u32,
    #[serde(default = "monitored")]
    pub action_taken: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
    #[serde(default)]
    pub details: serde_json::Value,
}

fn unknown_level() -> String {
    "unknown".to_string()
}

fn monitored() -> String {
    "monitored".to_string()
}

/// Response envelope of `POST /api/v1/ai/threat-response`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThreatResponse {
    #[serde(default)]
    pub response: ResponseBody,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResponseBody {
    #[serde(default)]
    pub ai_decision: AiDecision,
    #[serde(default)]
    pub execution_result: ExecutionResult,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AiDecision {
    #[serde(default)]
    pub threat_assessment: ThreatAssessment,
    #[serde(default)]
    pub execution_plan: ExecutionPlan,
    #[serde(default)]
    pub rollback_plan: Option<RollbackPlan>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ThreatAssessment {
    #[serde(default)]
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecutionPlan {
    #[serde(default)]
    pub steps: Vec<PlanStep>,
    #[serde(default)]
    pub estimated_duration: u64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanStep {
    #[serde(default = "unknown_action")]
    pub action: String,
    #[serde(default)]
    pub priority: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub commands: Vec<String>,
}

fn unknown_action() -> String {
    "unknown".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RollbackPlan {
    #[serde(default)]
    pub strategy: String,
    #[serde(default)]
    pub timeout_hours: u32,
    #[serde(default = "yes")]
    pub requires_approval: bool,
}

fn yes() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExecutionResult {
    #[serde(default)]
    pub status: ExecutionStatus,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecutionStatus {
    Executed,
    DryRun,
    PendingApproval,
    #[default]
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::AlertStatus;

    fn sample_alert() -> Alert {
        Alert {
            id: 108,
            alert_type: "MALICIOUS_PROCESS".into(),
            severity: "CRITICAL".into(),
            source_ip: "192.168.100.64".into(),
            details: "crypto miner activity".into(),
            status: AlertStatus::Active,
            action_taken: None,
            timestamp: "2025-12-01 02:43:44".into(),
        }
    }

    #[test]
    fn request_lowercases_event_type() {
        let req = AnalyzeRequest::from_alert(&sample_alert());
        assert_eq!(req.event_type, "malicious_process");
        assert_eq!(req.metadata.alert_id, 108);
        assert!(req.metadata.auto_response);
    }

    #[test]
    fn request_wire_format() {
        let req = AnalyzeRequest::from_alert(&sample_alert());
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["event_type"], "malicious_process");
        assert_eq!(json["source_ip"], "192.168.100.64");
        assert_eq!(json["metadata"]["severity"], "CRITICAL");
    }

    #[test]
    fn response_defaults_when_fields_missing() {
        let resp: AnalyzeResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(resp.threat_level, "unknown");
        assert_eq!(resp.threat_score, 0);
        assert_eq!(resp.action_taken, "monitored");
        assert!(resp.recommendations.is_empty());
    }

    #[test]
    fn threat_response_full_decode() {
        let json = r#"{
            "response": {
                "ai_decision": {
                    "threat_assessment": {"confidence": 0.92},
                    "execution_plan": {
                        "estimated_duration": 30,
                        "steps": [{
                            "action": "block_ip",
                            "priority": "high",
                            "description": "Drop traffic from source",
                            "commands": ["iptables -I INPUT -s 1.2.3.4 -j DROP"]
                        }]
                    },
                    "rollback_plan": {
                        "strategy": "remove_rule",
                        "timeout_hours": 24,
                        "requires_approval": false
                    }
                },
                "execution_result": {"status": "dry_run", "message": "simulated"}
            }
        }"#;
        let resp: ThreatResponse = serde_json::from_str(json).unwrap();
        let decision = &resp.response.ai_decision;
        assert_eq!(decision.threat_assessment.confidence, 0.92);
        assert_eq!(decision.execution_plan.steps.len(), 1);
        assert_eq!(decision.execution_plan.steps[0].action, "block_ip");
        assert_eq!(decision.execution_plan.steps[0].commands.len(), 1);
        let rollback = decision.rollback_plan.as_ref().unwrap();
        assert_eq!(rollback.strategy, "remove_rule");
        assert!(!rollback.requires_approval);
        assert_eq!(resp.response.execution_result.status, ExecutionStatus::DryRun);
    }

    #[test]
    fn unrecognized_execution_status_maps_to_unknown() {
        let json = r#"{"response": {"execution_result": {"status": "queued"}}}"#;
        let resp: ThreatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(
            resp.response.execution_result.status,
            ExecutionStatus::Unknown
        );
    }

    #[test]
    fn empty_envelope_decodes() {
        let resp: ThreatResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.response.ai_decision.execution_plan.steps.is_empty());
        assert!(resp.response.ai_decision.rollback_plan.is_none());
    }
}
