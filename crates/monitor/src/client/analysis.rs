use std::time::Duration;

use autoshield_common::analysis::{AnalyzeRequest, AnalyzeResponse, ThreatResponse};

use super::{ClientError, ThreatAnalyzer};

pub struct AnalysisClient {
    base_url: String,
    http: reqwest::Client,
}

impl AnalysisClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }
}

#[async_trait::async_trait]
impl ThreatAnalyzer for AnalysisClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/v1/analyze-threat", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(ClientError::Rejected(status));
        }
        resp.json().await.map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn threat_response(
        &self,
        event_type: &str,
        source_ip: &str,
        metadata: &serde_json::Value,
    ) -> Result<ThreatResponse, ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/v1/ai/threat-response", self.base_url))
            .query(&[("event_type", event_type), ("source_ip", source_ip)])
            .json(metadata)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status().as_u16();
        if !(200..300).contains(&status) {
            return Err(ClientError::Rejected(status));
        }
        resp.json().await.map_err(|e| ClientError::Decode(e.to_string()))
    }
}
