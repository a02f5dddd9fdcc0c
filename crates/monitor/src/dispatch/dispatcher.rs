use std::sync::Arc;
use std::time::Duration;

use autoshield_common::alert::{Alert, AlertStatus, StatusUpdate};
use autoshield_common::analysis::AnalyzeRequest;
use autoshield_common::summary;

use super::dedup::DedupStore;
use crate::client::{AlertStore, ThreatAnalyzer};

/// Forwards unseen active alerts to the analysis service and resolves them
/// in the backend. An id is marked processed only after both round trips
/// succeed, so a failed alert stays eligible for the next cycle.
pub struct Dispatcher {
    store: Arc<dyn AlertStore>,
    analyzer: Arc<dyn ThreatAnalyzer>,
    processed: Arc<dyn DedupStore>,
    dispatch_pause: Duration,
}

impl Dispatcher {
    pub fn new(
        store: Arc<dyn AlertStore>,
        analyzer: Arc<dyn ThreatAnalyzer>,
        processed: Arc<dyn DedupStore>,
        dispatch_pause: Duration,
    ) -> Self {
        Self {
            store,
            analyzer,
            processed,
            dispatch_pause,
        }
    }

    pub async fn dispatch(&self, alert: &Alert) -> bool {
        if !alert.is_active() {
            tracing::debug!(alert_id = alert.id, status = ?alert.status, "skipping non-active alert");
            return false;
        }
        if self.processed.contains(alert.id) {
            tracing::debug!(alert_id = alert.id, "already processed, skipping");
            return false;
        }

        let request = AnalyzeRequest::from_alert(alert);
        let response = match self.analyzer.analyze(&request).await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(alert_id = alert.id, error = %e, "analysis failed, alert left active");
                return false;
            }
        };

        tracing::info!(
            alert_id = alert.id,
            threat_level = %response.threat_level,
            threat_score = response.threat_score,
            action = %response.action_taken,
            "analysis complete"
        );

        let update = StatusUpdate {
            status: AlertStatus::Resolved,
            notes: summary::resolution_notes(&summary::action_summary(&response)),
        };
        match self.store.update_status(alert.id, &update).await {
            Ok(updated) => {
                tracing::info!(alert_id = alert.id, status = ?updated.status, "alert resolved");
            }
            Err(e) => {
                tracing::warn!(alert_id = alert.id, error = %e, "status update failed, alert left active");
                return false;
            }
        }

        self.processed.mark(alert.id);
        true
    }

    /// Dispatch a batch sequentially, pausing between successful dispatches
    /// so the analysis endpoint is not burst. Returns the dispatched count.
    pub async fn dispatch_batch(&self, alerts: &[Alert]) -> usize {
        let mut dispatched = 0;
        for alert in alerts {
            if self.dispatch(alert).await {
                dispatched += 1;
                if !self.dispatch_pause.is_zero() {
                    tokio::time::sleep(self.dispatch_pause).await;
                }
            }
        }
        dispatched
    }
}
