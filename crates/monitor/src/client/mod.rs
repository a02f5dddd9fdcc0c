mod analysis;
mod backend;

pub use analysis::AnalysisClient;
pub use backend::BackendClient;

use autoshield_common::alert::{Alert, StatusUpdate};
use autoshield_common::analysis::{AnalyzeRequest, AnalyzeResponse, ThreatResponse};

#[derive(Debug)]
pub enum ClientError {
    Transport(String),
    Rejected(u16),
    Decode(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(e) => write!(f, "transport: {e}"),
            Self::Rejected(code) => write!(f, "rejected with status {code}"),
            Self::Decode(e) => write!(f, "decode: {e}"),
        }
    }
}

impl std::error::Error for ClientError {}

/// The alert backend as seen by the dispatch loop.
#[async_trait::async_trait]
pub trait AlertStore: Send + Sync {
    async fn recent_alerts(&self, hours: u32) -> Result<Vec<Alert>, ClientError>;
    async fn update_status(&self, id: i64, update: &StatusUpdate) -> Result<Alert, ClientError>;
}

/// The AI analysis service as seen by the dispatch loop.
#[async_trait::async_trait]
pub trait ThreatAnalyzer: Send + Sync {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, ClientError>;
    async fn threat_response(
        &self,
        event_type: &str,
        source_ip: &str,
        metadata: &serde_json::Value,
    ) -> Result<ThreatResponse, ClientError>;
}
