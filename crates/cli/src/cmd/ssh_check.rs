use anyhow::{Context, Result};
use clap::Args;

use crate::ssh::{CommandOutput, SshConfig, SshError, SshSession};
use crate::output::{print_error, print_info, print_json, print_success, OutputMode};

#[derive(Args)]
pub struct SshCheckArgs;

pub async fn execute(_args: SshCheckArgs, mode: OutputMode) -> Result<()> {
    let cfg = SshConfig::from_env().context("hypervisor SSH configuration incomplete")?;
    let addr = cfg.addr();
    let user = cfg.username.clone();

    let (host_info, iptables) = tokio::task::spawn_blocking(
        move || -> Result<(CommandOutput, CommandOutput), SshError> {
            let session = SshSession::connect(&cfg)?;
            let host_info = session.exec("hostname && uname -a")?;
            let iptables = session.exec("iptables -L -n | head -5")?;
            Ok((host_info, iptables))
        },
    )
    .await?
    .context("ssh check failed")?;

    let iptables_ok = iptables.exit_status == 0 && !iptables.stdout.is_empty();

    match mode {
        OutputMode::Json => print_json(&serde_json::json!({
            "host": addr,
            "user": user,
            "connected": true,
            "host_info": host_info.stdout.trim(),
            "iptables_accessible": iptables_ok,
        }))?,
        OutputMode::Human => {
            print_info("Host", &addr);
            print_info("User", &user);
            print_success("SSH connection established");
            print_info("Host info", host_info.stdout.trim());
            if iptables_ok {
                print_success("iptables accessible");
            } else {
                print_error(&format!(
                    "iptables not accessible: {}",
                    iptables.stderr.trim()
                ));
            }
        }
    }

    Ok(())
}
