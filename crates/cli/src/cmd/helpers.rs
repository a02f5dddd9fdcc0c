use std::time::Duration;

use autoshield_monitor::client::{AnalysisClient, BackendClient};

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
pub const DEFAULT_ANALYSIS_URL: &str = "http://localhost:8000";

const BACKEND_TIMEOUT: Duration = Duration::from_secs(5);
const ANALYSIS_TIMEOUT: Duration = Duration::from_secs(30);

pub fn resolve_backend_url(flag: Option<&str>) -> String {
    resolve_url(flag, "AUTOSHIELD_BACKEND_URL", DEFAULT_BACKEND_URL)
}

pub fn resolve_analysis_url(flag: Option<&str>) -> String {
    resolve_url(flag, "AUTOSHIELD_ANALYSIS_URL", DEFAULT_ANALYSIS_URL)
}

fn resolve_url(flag: Option<&str>, env_var: &str, default: &str) -> String {
    if let Some(url) = flag {
        return url.to_string();
    }
    std::env::var(env_var).unwrap_or_else(|_| default.to_string())
}

pub fn backend_credentials() -> (String, String) {
    let username = std::env::var("AUTOSHIELD_BACKEND_USER").unwrap_or_else(|_| "admin".into());
    let password = std::env::var("AUTOSHIELD_BACKEND_PASSWORD").unwrap_or_default();
    (username, password)
}

pub fn backend_client(flag: Option<&str>) -> BackendClient {
    let (username, password) = backend_credentials();
    BackendClient::new(
        &resolve_backend_url(flag),
        username,
        password,
        BACKEND_TIMEOUT,
    )
}

pub fn analysis_client(flag: Option<&str>) -> AnalysisClient {
    AnalysisClient::new(&resolve_analysis_url(flag), ANALYSIS_TIMEOUT)
}
