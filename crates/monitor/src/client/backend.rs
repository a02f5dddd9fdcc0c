use std::time::Duration;

use autoshield_common::alert::{Alert, StatusUpdate, WebhookAlert};

use super::{AlertStore, ClientError};

pub struct BackendClient {
    base_url: String,
    username: String,
    password: String,
    http: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: &str, username: String, password: String, timeout: Duration) -> Self {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .expect("reqwest client");
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username,
            password,
            http,
        }
    }

    /// Create an alert through the ingest webhook. Unlike the alert
    /// endpoints, the webhook is unauthenticated.
    pub async fn post_webhook(&self, payload: &WebhookAlert) -> Result<(), ClientError> {
        let resp = self
            .http
            .post(format!("{}/api/v1/webhook/python", self.base_url))
            .json(payload)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        check_status(resp.status().as_u16())?;
        Ok(())
    }
}

fn check_status(status: u16) -> Result<(), ClientError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(ClientError::Rejected(status))
    }
}

#[async_trait::async_trait]
impl AlertStore for BackendClient {
    async fn recent_alerts(&self, hours: u32) -> Result<Vec<Alert>, ClientError> {
        let resp = self
            .http
            .get(format!("{}/api/v1/alerts/recent", self.base_url))
            .query(&[("hours", hours)])
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        check_status(resp.status().as_u16())?;
        resp.json().await.map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn update_status(&self, id: i64, update: &StatusUpdate) -> Result<Alert, ClientError> {
        let resp = self
            .http
            .patch(format!("{}/api/v1/alerts/{id}/status", self.base_url))
            .basic_auth(&self.username, Some(&self.password))
            .json(update)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        check_status(resp.status().as_u16())?;
        resp.json().await.map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slash_trimmed() {
        let client = BackendClient::new(
            "http://localhost:8080/",
            "admin".into(),
            "secret".into(),
            Duration::from_secs(5),
        );
        assert_eq!(client.base_url, "http://localhost:8080");
    }

    #[test]
    fn non_2xx_is_rejected() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        let err = check_status(401).unwrap_err();
        assert!(err.to_string().contains("401"));
    }
}
