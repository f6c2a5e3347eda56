//! Definitions of CLI arguments and commands for deploy scripts

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::info;

use crate::{
    commands::{deploy_wave, show_deployments},
    constants::{
        DEFAULT_ARTIFACTS_DIR, DEFAULT_CONFIG_PATH, DEFAULT_GAS_PRICE_GWEI, DEFAULT_OUTPUT_PATH,
    },
    errors::ScriptError,
};

/// Scripts for deploying the Boost treasury, governance & reward pools
#[derive(Parser)]
pub struct Cli {
    /// Private key of the deployer
    #[arg(short, long, env = "PRIVATE_KEY", hide_env_values = true)]
    pub priv_key: Option<String>,

    /// Network RPC URL
    #[arg(short, long, env = "RPC_URL")]
    pub rpc_url: Option<String>,

    /// The command to run
    #[command(subcommand)]
    pub command: Command,
}

/// The possible CLI commands
#[derive(Subcommand)]
pub enum Command {
    /// Deploy the treasury, the governance and every reward pool of the wave
    DeployWave(DeployWaveArgs),
    /// Print the deployment record of a previous run
    ShowDeployments(ShowDeploymentsArgs),
}

impl Command {
    /// Run the command
    pub async fn run(self, priv_key: Option<&str>, rpc_url: Option<&str>) -> Result<(), ScriptError> {
        match self {
            Command::DeployWave(args) => {
                info!("Deploying wave...");
                let summary = deploy_wave(args, priv_key, rpc_url).await?;
                info!(
                    "Deployed treasury {}, governance {} and {} pools",
                    summary.treasury,
                    summary.governance,
                    summary.pools.len()
                );

                Ok(())
            }
            Command::ShowDeployments(args) => show_deployments(args),
        }
    }
}

/// Deploy the wave
#[derive(Args)]
pub struct DeployWaveArgs {
    /// Network specific deployment settings
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Directory holding the `Treasury`, `BoostGovV2` and `BoostRewardsV2` artifacts
    #[arg(short, long, default_value = DEFAULT_ARTIFACTS_DIR)]
    pub artifacts: PathBuf,

    /// File recording the deployed addresses and sent transactions
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Gas price of every transaction, in gwei
    #[arg(long, default_value_t = DEFAULT_GAS_PRICE_GWEI)]
    pub gas_price_gwei: u64,
}

/// Show a deployment record
#[derive(Args)]
pub struct ShowDeploymentsArgs {
    /// File written by `deploy-wave`
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Only print the entry of this contract (`treasury`, `governance`, `<name>_pool`)
    #[arg(long)]
    pub contract: Option<String>,

    /// With `--contract`, print the hash of this method call instead of the address
    #[arg(long, requires = "contract")]
    pub tx: Option<String>,
}
