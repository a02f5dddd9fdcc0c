use crate::analysis::{AnalyzeResponse, ExecutionPlan};

const SEPARATOR: &str = " | ";
const MAX_RECOMMENDATIONS: usize = 3;

/// Condense an analysis response into a one-line action summary: the first
/// three recommendations, or a templated sentence when none came back.
pub fn action_summary(response: &AnalyzeResponse) -> String {
    if response.recommendations.is_empty() {
        return format!(
            "AI analyzed: {} threat (score: {})",
            response.threat_level, response.threat_score
        );
    }
    response
        .recommendations
        .iter()
        .take(MAX_RECOMMENDATIONS)
        .cloned()
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Condense an execution plan into a one-line summary of its steps.
pub fn plan_summary(plan: &ExecutionPlan) -> String {
    if plan.steps.is_empty() {
        return "AI analysis performed".to_string();
    }
    plan.steps
        .iter()
        .map(|step| format!("{}: {}", step.action, step.description))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

/// Notes written back to the backend when resolving an alert.
pub fn resolution_notes(summary: &str) -> String {
    format!("AI Automated Response: {summary}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PlanStep;

    fn response_with(recommendations: Vec<&str>) -> AnalyzeResponse {
        serde_json::from_value(serde_json::json!({
            "threat_level": "high",
            "threat_score": 42,
            "action_taken": "blocked",
            "recommendations": recommendations,
        }))
        .unwrap()
    }

    #[test]
    fn summary_keeps_first_three_recommendations() {
        let resp = response_with(vec!["a", "b", "c", "d"]);
        assert_eq!(action_summary(&resp), "a | b | c");
    }

    #[test]
    fn summary_with_fewer_than_three() {
        let resp = response_with(vec!["only one"]);
        assert_eq!(action_summary(&resp), "only one");
    }

    #[test]
    fn fallback_names_level_and_score() {
        let resp = response_with(vec![]);
        let summary = action_summary(&resp);
        assert!(summary.contains("high"));
        assert!(summary.contains("42"));
    }

    #[test]
    fn plan_summary_joins_steps() {
        let plan = ExecutionPlan {
            steps: vec![
                PlanStep {
                    action: "block_ip".into(),
                    description: "IP blocked via iptables".into(),
                    ..Default::default()
                },
                PlanStep {
                    action: "rate_limit".into(),
                    description: "SSH rate limited".into(),
                    ..Default::default()
                },
            ],
            estimated_duration: 0,
        };
        assert_eq!(
            plan_summary(&plan),
            "block_ip: IP blocked via iptables | rate_limit: SSH rate limited"
        );
    }

    #[test]
    fn plan_summary_fallback_when_empty() {
        let plan = ExecutionPlan::default();
        assert_eq!(plan_summary(&plan), "AI analysis performed");
    }

    #[test]
    fn resolution_notes_prefixed() {
        assert_eq!(
            resolution_notes("a | b"),
            "AI Automated Response: a | b"
        );
    }
}
