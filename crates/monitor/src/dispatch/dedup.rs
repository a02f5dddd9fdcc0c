use std::sync::Arc;

use dashmap::DashMap;

/// Process-local memory of alert ids already dispatched. Grows for the life
/// of the process and is never persisted; a restart retries everything.
pub trait DedupStore: Send + Sync {
    fn contains(&self, alert_id: i64) -> bool;
    fn mark(&self, alert_id: i64);
    fn processed_ids(&self) -> Vec<i64>;
}

#[derive(Clone, Default)]
pub struct InMemoryDedup {
    seen: Arc<DashMap<i64, i64>>,
}

impl InMemoryDedup {
    pub fn new() -> Self {
        Self {
            seen: Arc::new(DashMap::new()),
        }
    }
}

impl DedupStore for InMemoryDedup {
    fn contains(&self, alert_id: i64) -> bool {
        self.seen.contains_key(&alert_id)
    }

    fn mark(&self, alert_id: i64) {
        let now_ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as i64;
        self.seen.insert(alert_id, now_ms);
    }

    fn processed_ids(&self) -> Vec<i64> {
        let mut ids: Vec<i64> = self.seen.iter().map(|entry| *entry.key()).collect();
        ids.sort_unstable();
        ids
    }
}
