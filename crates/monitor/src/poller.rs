use std::sync::Arc;

use autoshield_common::alert::Alert;

use crate::client::AlertStore;

/// Fetches the recent window from the backend and keeps only `ACTIVE`
/// alerts. Transport or protocol failures are logged and yield an empty
/// batch; nothing raises past this boundary.
pub struct Poller {
    store: Arc<dyn AlertStore>,
    window_hours: u32,
}

impl Poller {
    pub fn new(store: Arc<dyn AlertStore>, window_hours: u32) -> Self {
        Self {
            store,
            window_hours,
        }
    }

    pub async fn poll(&self) -> Vec<Alert> {
        match self.store.recent_alerts(self.window_hours).await {
            Ok(alerts) => alerts.into_iter().filter(|a| a.is_active()).collect(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to fetch alerts");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientError;
    use autoshield_common::alert::{AlertStatus, StatusUpdate};

    struct FakeStore {
        result: Result<Vec<Alert>, ()>,
    }

    fn alert(id: i64, status: AlertStatus) -> Alert {
        Alert {
            id,
            alert_type: "PORT_SCAN".into(),
            severity: "LOW".into(),
            source_ip: "10.0.0.1".into(),
            details: String::new(),
            status,
            action_taken: None,
            timestamp: String::new(),
        }
    }

    #[async_trait::async_trait]
    impl AlertStore for FakeStore {
        async fn recent_alerts(&self, _hours: u32) -> Result<Vec<Alert>, ClientError> {
            match &self.result {
                Ok(alerts) => Ok(alerts.clone()),
                Err(()) => Err(ClientError::Transport("connection refused".into())),
            }
        }

        async fn update_status(
            &self,
            _id: i64,
            _update: &StatusUpdate,
        ) -> Result<Alert, ClientError> {
            unreachable!("poller never updates status")
        }
    }

    #[tokio::test]
    async fn keeps_only_active() {
        let store = FakeStore {
            result: Ok(vec![
                alert(1, AlertStatus::Active),
                alert(2, AlertStatus::Resolved),
                alert(3, AlertStatus::Unknown),
                alert(4, AlertStatus::Active),
            ]),
        };
        let poller = Poller::new(Arc::new(store), 24);
        let batch = poller.poll().await;
        let ids: Vec<i64> = batch.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[tokio::test]
    async fn transport_failure_yields_empty_batch() {
        let store = FakeStore { result: Err(()) };
        let poller = Poller::new(Arc::new(store), 24);
        assert!(poller.poll().await.is_empty());
    }
}
