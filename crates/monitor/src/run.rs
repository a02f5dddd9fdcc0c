use std::sync::Arc;
use std::time::Duration;

use crate::client::{AnalysisClient, BackendClient};
use crate::config::MonitorConfig;
use crate::dispatch::{DedupStore, Dispatcher, InMemoryDedup};
use crate::poller::Poller;
use crate::shutdown::{self, ShutdownToken};

fn build(cfg: &MonitorConfig) -> (Poller, Dispatcher, InMemoryDedup) {
    let backend = Arc::new(BackendClient::new(
        &cfg.backend.url,
        cfg.backend.username.clone(),
        cfg.backend.resolve_password(),
        Duration::from_secs(cfg.backend.timeout_seconds),
    ));
    let analysis = Arc::new(AnalysisClient::new(
        &cfg.analysis.url,
        Duration::from_secs(cfg.analysis.timeout_seconds),
    ));
    let processed = InMemoryDedup::new();

    let poller = Poller::new(backend.clone(), cfg.poll.window_hours);
    let dispatcher = Dispatcher::new(
        backend,
        analysis,
        Arc::new(processed.clone()),
        Duration::from_millis(cfg.poll.dispatch_pause_ms),
    );
    (poller, dispatcher, processed)
}

/// Process the current backlog of active alerts and return the dispatched
/// count. Nothing carries over between invocations.
pub async fn run_once(cfg: &MonitorConfig) -> usize {
    let (poller, dispatcher, _) = build(cfg);

    let alerts = poller.poll().await;
    if alerts.is_empty() {
        tracing::info!("no active alerts");
        return 0;
    }
    tracing::info!(count = alerts.len(), "active alerts found");
    dispatcher.dispatch_batch(&alerts).await
}

pub async fn run_forever(cfg: &MonitorConfig) {
    run_until_shutdown(cfg, shutdown::from_signals()).await
}

pub async fn run_until_shutdown(cfg: &MonitorConfig, mut token: ShutdownToken) {
    tracing::info!(
        backend = %cfg.backend.url,
        analysis = %cfg.analysis.url,
        interval_s = cfg.poll.interval_seconds,
        window_h = cfg.poll.window_hours,
        "monitor configured"
    );

    let (poller, dispatcher, processed) = build(cfg);

    let alerts = poller.poll().await;
    let initial = dispatcher.dispatch_batch(&alerts).await;
    tracing::info!(processed = initial, "initial sweep complete");

    let mut ticker = tokio::time::interval(Duration::from_secs(cfg.poll.interval_seconds));
    ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
    ticker.tick().await; // first tick is immediate

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let alerts = poller.poll().await;
                let unseen: Vec<_> = alerts
                    .into_iter()
                    .filter(|a| !processed.contains(a.id))
                    .collect();
                if unseen.is_empty() {
                    continue;
                }
                tracing::info!(count = unseen.len(), "new alerts detected");
                let dispatched = dispatcher.dispatch_batch(&unseen).await;
                tracing::info!(
                    dispatched,
                    total = processed.processed_ids().len(),
                    "batch complete"
                );
            }
            _ = token.cancelled() => break,
        }
    }

    let ids = processed.processed_ids();
    tracing::info!(total = ids.len(), ids = ?ids, "monitor stopped");
}
