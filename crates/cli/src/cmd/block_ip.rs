use std::net::IpAddr;

use anyhow::{Context, Result};
use clap::Args;

use crate::ssh::{SshConfig, SshError, SshSession};
use crate::output::{print_error, print_info, print_json, print_success, print_warn, OutputMode};

#[derive(Args)]
pub struct BlockIpArgs {
    /// Source IP to drop on the hypervisor
    #[arg(long)]
    pub ip: String,

    /// Run the commands instead of printing the plan
    #[arg(long)]
    pub execute: bool,
}

pub fn block_commands(ip: IpAddr) -> Vec<String> {
    vec![
        format!("iptables -I INPUT -s {ip} -j DROP"),
        "iptables-save > /etc/iptables/rules.v4".to_string(),
    ]
}

pub fn verify_command(ip: IpAddr) -> String {
    format!("iptables -L INPUT -n | grep {ip}")
}

pub async fn execute(args: BlockIpArgs, mode: OutputMode) -> Result<()> {
    // Parse before interpolating into a remote command line.
    let ip: IpAddr = args.ip.parse().context("invalid IP address")?;
    let commands = block_commands(ip);

    if !args.execute {
        match mode {
            OutputMode::Json => print_json(&serde_json::json!({
                "ip": ip.to_string(),
                "executed": false,
                "commands": commands,
            }))?,
            OutputMode::Human => {
                for (i, command) in commands.iter().enumerate() {
                    print_info(&format!("Step {}", i + 1), command);
                }
                print_warn("Dry run: pass --execute to apply on the hypervisor");
            }
        }
        return Ok(());
    }

    let cfg = SshConfig::from_env().context("hypervisor SSH configuration incomplete")?;
    let verify = verify_command(ip);
    let exec_commands = commands.clone();

    let verified = tokio::task::spawn_blocking(move || -> Result<bool, SshError> {
        let session = SshSession::connect(&cfg)?;
        for command in &exec_commands {
            let output = session.exec(command)?;
            if output.exit_status != 0 {
                return Err(SshError::Exec(format!(
                    "'{command}' exited with {}: {}",
                    output.exit_status,
                    output.stderr.trim()
                )));
            }
        }
        let check = session.exec(&verify)?;
        Ok(!check.stdout.trim().is_empty())
    })
    .await?
    .context("remediation failed")?;

    match mode {
        OutputMode::Json => print_json(&serde_json::json!({
            "ip": ip.to_string(),
            "executed": true,
            "commands": commands,
            "rule_verified": verified,
        }))?,
        OutputMode::Human => {
            print_success(&format!("{ip} blocked on the hypervisor"));
            if verified {
                print_success("iptables rule verified");
            } else {
                print_error("rule not found in iptables after execution");
            }
        }
    }

    Ok(())
}
