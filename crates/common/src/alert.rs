use serde::{Deserialize, Serialize};

/// An alert record as serialized by the backend. The backend owns the
/// lifecycle; callers only hold a transient copy per fetch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub id: i64,
    #[serde(rename = "type")]
    pub alert_type: String,
    pub severity: String,
    #[serde(rename = "sourceIp")]
    pub source_ip: String,
    #[serde(default)]
    pub details: String,
    pub status: AlertStatus,
    #[serde(rename = "actionTaken", default)]
    pub action_taken: Option<String>,
    #[serde(default)]
    pub timestamp: String,
}

impl Alert {
    pub fn is_active(&self) -> bool {
        self.status == AlertStatus::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertStatus {
    Active,
    Resolved,
    #[serde(other)]
    Unknown,
}

/// Body of `PATCH /api/v1/alerts/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: AlertStatus,
    pub notes: String,
}

/// Body of `POST /api/v1/webhook/python`, used to create alerts.
#[derive(Debug, Clone, Serialize)]
pub struct WebhookAlert {
    #[serde(rename = "eventType")]
    pub event_type: String,
    pub severity: String,
    #[serde(rename = "sourceIp")]
    pub source_ip: String,
    pub description: String,
}
