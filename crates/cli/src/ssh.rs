use std::io::Read;
use std::net::TcpStream;
use std::time::Duration;

use ssh2::Session;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct SshConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
}

impl SshConfig {
    /// Hypervisor credentials come from the environment, matching the
    /// analysis service's own configuration.
    pub fn from_env() -> Result<Self, SshError> {
        let host = require_var("PROXMOX_HOST")?;
        let username = require_var("PROXMOX_USER")?;
        let password = require_var("PROXMOX_PASSWORD")?;
        let port = std::env::var("PROXMOX_PORT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(22);
        Ok(Self {
            host,
            port,
            username,
            password,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn require_var(name: &str) -> Result<String, SshError> {
    std::env::var(name).map_err(|_| SshError::Env(format!("{name} is not set")))
}

#[derive(Debug)]
pub enum SshError {
    Env(String),
    Connect(String),
    Auth(String),
    Exec(String),
}

impl std::fmt::Display for SshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Env(msg) => write!(f, "env: {msg}"),
            Self::Connect(e) => write!(f, "connect: {e}"),
            Self::Auth(e) => write!(f, "auth: {e}"),
            Self::Exec(e) => write!(f, "exec: {e}"),
        }
    }
}

impl std::error::Error for SshError {}

pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub exit_status: i32,
}

/// Password-authenticated SSH session against the hypervisor host.
pub struct SshSession {
    session: Session,
}

impl SshSession {
    pub fn connect(cfg: &SshConfig) -> Result<Self, SshError> {
        let tcp = TcpStream::connect((cfg.host.as_str(), cfg.port))
            .map_err(|e| SshError::Connect(e.to_string()))?;
        let _ = tcp.set_read_timeout(Some(CONNECT_TIMEOUT));

        let mut session = Session::new().map_err(|e| SshError::Connect(e.to_string()))?;
        session.set_tcp_stream(tcp);
        session
            .handshake()
            .map_err(|e| SshError::Connect(e.to_string()))?;
        session
            .userauth_password(&cfg.username, &cfg.password)
            .map_err(|e| SshError::Auth(e.to_string()))?;

        Ok(Self { session })
    }

    pub fn exec(&self, command: &str) -> Result<CommandOutput, SshError> {
        let mut channel = self
            .session
            .channel_session()
            .map_err(|e| SshError::Exec(e.to_string()))?;
        channel
            .exec(command)
            .map_err(|e| SshError::Exec(e.to_string()))?;

        let mut stdout = String::new();
        channel
            .read_to_string(&mut stdout)
            .map_err(|e| SshError::Exec(e.to_string()))?;
        let mut stderr = String::new();
        channel
            .stderr()
            .read_to_string(&mut stderr)
            .map_err(|e| SshError::Exec(e.to_string()))?;

        let _ = channel.wait_close();
        let exit_status = channel.exit_status().unwrap_or(-1);

        Ok(CommandOutput {
            stdout,
            stderr,
            exit_status,
        })
    }
}
