use std::path::Path;

use super::schema::MonitorConfig;

#[derive(Debug)]
pub enum LoadError {
    Io(std::io::Error),
    Parse(serde_yaml::Error),
    Validation(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Parse(e) => write!(f, "parse: {e}"),
            Self::Validation(msg) => write!(f, "validation: {msg}"),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<std::io::Error> for LoadError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_yaml::Error> for LoadError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e)
    }
}

pub fn load_from_file(path: &Path) -> Result<MonitorConfig, LoadError> {
    let contents = std::fs::read_to_string(path)?;
    load_from_str(&contents)
}

pub fn load_from_str(yaml: &str) -> Result<MonitorConfig, LoadError> {
    let cfg: MonitorConfig = serde_yaml::from_str(yaml)?;
    validate(&cfg)?;
    Ok(cfg)
}

fn validate(cfg: &MonitorConfig) -> Result<(), LoadError> {
    if cfg.backend.url.is_empty() {
        return Err(LoadError::Validation("backend.url must not be empty".into()));
    }
    if cfg.analysis.url.is_empty() {
        return Err(LoadError::Validation(
            "analysis.url must not be empty".into(),
        ));
    }
    if cfg.poll.interval_seconds == 0 {
        return Err(LoadError::Validation(
            "poll.interval_seconds must be > 0".into(),
        ));
    }
    if cfg.poll.window_hours == 0 {
        return Err(LoadError::Validation("poll.window_hours must be > 0".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config() {
        let yaml = r#"
backend:
  url: http://localhost:8080
  username: admin
analysis:
  url: http://localhost:8000
poll:
  interval_seconds: 5
"#;
        let cfg = load_from_str(yaml).unwrap();
        assert_eq!(cfg.backend.url, "http://localhost:8080");
        assert_eq!(cfg.poll.interval_seconds, 5);
    }

    #[test]
    fn empty_backend_url_rejected() {
        let yaml = r#"
backend:
  url: ""
  username: admin
analysis:
  url: http://localhost:8000
"#;
        let err = load_from_str(yaml).unwrap_err();
        assert!(err.to_string().contains("backend.url"));
    }

    #[test]
    fn zero_interval_rejected() {
        let yaml = r#"
backend:
  url: http://localhost:8080
  username: admin
analysis:
  url: http://localhost:8000
poll:
  interval_seconds: 0
"#;
        let err = load_from_str(yaml).unwrap_err();
        assert!(err.to_string().contains("interval_seconds"));
    }

    #[test]
    fn zero_window_rejected() {
        let yaml = r#"
backend:
  url: http://localhost:8080
  username: admin
analysis:
  url: http://localhost:8000
poll:
  window_hours: 0
"#;
        let err = load_from_str(yaml).unwrap_err();
        assert!(err.to_string().contains("window_hours"));
    }

    #[test]
    fn load_from_file_works() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monitor.yml");
        std::fs::write(
            &path,
            "backend:\n  url: http://b\n  username: admin\nanalysis:\n  url: http://a\n",
        )
        .unwrap();
        let cfg = load_from_file(&path).unwrap();
        assert_eq!(cfg.backend.url, "http://b");
        assert_eq!(cfg.analysis.url, "http://a");
    }
}
