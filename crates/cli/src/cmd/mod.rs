mod block_ip;
mod execute;
pub(crate) mod helpers;
mod inject;
mod respond;
mod ssh_check;
mod version;

use anyhow::Result;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single alert and resolve it in the backend
    Respond(respond::RespondArgs),
    /// Run the extended threat-response flow for a single alert
    Execute(execute::ExecuteArgs),
    /// Create a test alert through the backend webhook
    Inject(inject::InjectArgs),
    /// Verify SSH connectivity to the hypervisor
    SshCheck(ssh_check::SshCheckArgs),
    /// Block a source IP on the hypervisor via iptables
    BlockIp(block_ip::BlockIpArgs),
    Version,
}

pub async fn run(opts: crate::Opts) -> Result<()> {
    let mode = opts.output_mode();
    match opts.cmd {
        Commands::Respond(args) => respond::execute(args, mode, opts.backend, opts.analysis).await,
        Commands::Execute(args) => execute::execute(args, mode, opts.backend, opts.analysis).await,
        Commands::Inject(args) => inject::execute(args, mode, opts.backend).await,
        Commands::SshCheck(args) => ssh_check::execute(args, mode).await,
        Commands::BlockIp(args) => block_ip::execute(args, mode).await,
        Commands::Version => {
            version::execute(mode);
            Ok(())
        }
    }
}
