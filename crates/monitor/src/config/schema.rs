use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct MonitorConfig {
    pub backend: BackendConfig,
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub poll: PollConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BackendConfig {
    pub url: String,
    pub username: String,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default = "default_backend_timeout")]
    pub timeout_seconds: u64,
}

impl BackendConfig {
    pub fn resolve_password(&self) -> String {
        if let Some(ref password) = self.password {
            return password.clone();
        }
        if let Ok(val) = std::env::var("AUTOSHIELD_BACKEND_PASSWORD") {
            return val;
        }
        tracing::warn!("no backend password configured, requests will use empty credentials");
        String::new()
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AnalysisConfig {
    pub url: String,
    #[serde(default = "default_analysis_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PollConfig {
    #[serde(default = "default_interval")]
    pub interval_seconds: u64,
    #[serde(default = "default_window")]
    pub window_hours: u32,
    #[serde(default = "default_pause")]
    pub dispatch_pause_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_seconds: default_interval(),
            window_hours: default_window(),
            dispatch_pause_ms: default_pause(),
        }
    }
}

fn default_backend_timeout() -> u64 {
    5
}

fn default_analysis_timeout() -> u64 {
    30
}

fn default_interval() -> u64 {
    5
}

fn default_window() -> u32 {
    24
}

fn default_pause() -> u64 {
    1000
}
