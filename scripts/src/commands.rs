//! Implementations of the deploy scripts commands

use tracing::info;

use crate::{
    artifacts::ContractArtifacts,
    checkpoint::OperatorCheckpoint,
    cli::{DeployWaveArgs, ShowDeploymentsArgs},
    config::load_config,
    constants::WEI_PER_GWEI,
    deploy::orchestrator::{DeploymentSummary, WaveDeployer},
    errors::ScriptError,
    output_writer::{dump_output_file, read_output_file, OutputKeys},
    tx::{client::create_rpc_provider, sender::RpcExecutor},
};

/// Deploy the Boost wave contracts, asking the operator before each step
pub async fn deploy_wave(
    args: DeployWaveArgs,
    priv_key: Option<&str>,
    rpc_url: Option<&str>,
) -> Result<DeploymentSummary, ScriptError> {
    // Everything local is loaded before the first RPC call
    let config = load_config(&args.config)?;
    info!(
        "Loaded {} token pools and LP pool {} from {}",
        config.tokens.len(),
        config.uniswap_lp.name,
        args.config.display()
    );
    let artifacts = ContractArtifacts::load(&args.artifacts)?;

    let priv_key = priv_key.ok_or_else(|| {
        ScriptError::ClientInitialization(String::from("no deployer private key given"))
    })?;
    let rpc_url = rpc_url
        .ok_or_else(|| ScriptError::ClientInitialization(String::from("no RPC url given")))?;

    // Build our RPC client with signer
    let client = create_rpc_provider(priv_key, rpc_url).await?;

    let gas_price = u128::from(args.gas_price_gwei) * WEI_PER_GWEI;
    let executor = RpcExecutor::new(client, artifacts, gas_price);

    let mut deployer =
        WaveDeployer::new(executor, OperatorCheckpoint::stdin()).with_output(args.output);
    let summary = deployer.run(&config).await?;

    for pool in &summary.pools {
        info!("{} pool: {}", pool.name, pool.address);
    }

    Ok(summary)
}

/// Print the deployment record, or a single entry of it
pub fn show_deployments(args: ShowDeploymentsArgs) -> Result<(), ScriptError> {
    println!("{}", lookup_deployments(&args)?);
    Ok(())
}

/// The part of the record selected by `args`
fn lookup_deployments(args: &ShowDeploymentsArgs) -> Result<String, ScriptError> {
    let Some(key) = args.contract.as_deref() else {
        return dump_output_file(&args.output);
    };

    let output_key = match args.tx.as_deref() {
        Some(tx_key) => OutputKeys::Tx { key, tx_key },
        None => OutputKeys::Deployment { key },
    };
    read_output_file(&args.output, output_key)
}
