//! Sequencing of the wave deployment

use std::{fmt::LowerHex, path::PathBuf};

use alloy::primitives::{Address, U256};
use tracing::info;

use crate::{
    checkpoint::Checkpoint,
    config::{DeploymentConfig, PoolDescriptor},
    constants::{
        INTERNAL_POOL_BOOST_AMOUNT, REWARDS_POOL_BOOST_AMOUNT, TREASURY_KEY, UNISWAP_ROUTER,
    },
    deploy::steps::{PoolParams, Step, StepOutcome},
    errors::ScriptError,
    output_writer::{reset_output_file, write_output_file, OutputKeys},
};

/// Sends a step on chain and waits for it to be mined.
///
/// Implementations must only return once the transaction is confirmed, and
/// must return the created address for deployments.
#[allow(async_fn_in_trait)]
pub trait StepExecutor {
    /// Execute the given step
    async fn execute(&mut self, step: &Step) -> Result<StepOutcome, ScriptError>;
}

impl<E: StepExecutor> StepExecutor for &mut E {
    async fn execute(&mut self, step: &Step) -> Result<StepOutcome, ScriptError> {
        (**self).execute(step).await
    }
}

/// A deployed rewards pool
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeployedPool {
    /// Name of the staked token
    pub name: String,
    /// Pool address
    pub address: Address,
}

/// Addresses produced by a complete run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeploymentSummary {
    /// The treasury
    pub treasury: Address,
    /// The governance contract
    pub governance: Address,
    /// Every pool, listed tokens first and the LP pool last
    pub pools: Vec<DeployedPool>,
}

/// Runs the wave deployment one step at a time, waiting on the checkpoint
/// after each of them
pub struct WaveDeployer<E, C> {
    /// Sends the transactions
    executor: E,
    /// Operator gate
    checkpoint: C,
    /// Deployment record, if any
    output: Option<PathBuf>,
}

impl<E: StepExecutor, C: Checkpoint> WaveDeployer<E, C> {
    /// Build a deployer without deployment record
    pub fn new(executor: E, checkpoint: C) -> Self {
        Self {
            executor,
            checkpoint,
            output: None,
        }
    }

    /// Record every confirmed step into the given file, replacing its content
    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = Some(output);
        self
    }

    /// Deploy the treasury, governance and every pool of the wave
    pub async fn run(&mut self, config: &DeploymentConfig) -> Result<DeploymentSummary, ScriptError> {
        // The record only ever describes the current run
        if let Some(path) = &self.output {
            reset_output_file(path)?;
        }

        let treasury = self
            .deploy(Step::DeployTreasury {
                router: UNISWAP_ROUTER,
                stablecoin: config.stablecoin,
                multisig: config.multisig,
            })
            .await?;

        let governance = self
            .deploy(Step::DeployGovernance {
                boost_token: config.boost_token,
                treasury,
                router: UNISWAP_ROUTER,
            })
            .await?;

        self.execute(Step::SetGovernance {
            treasury,
            governance,
        })
        .await?;

        self.execute(Step::TransferOwnership {
            key: String::from(TREASURY_KEY),
            contract: treasury,
            new_owner: config.multisig,
        })
        .await?;

        let mut pools = Vec::with_capacity(config.tokens.len() + 1);
        for token in &config.tokens {
            let pool = self
                .deploy_pool(config, treasury, token, REWARDS_POOL_BOOST_AMOUNT)
                .await?;
            pools.push(pool);
        }

        let lp_pool = self
            .deploy_pool(config, treasury, &config.uniswap_lp, INTERNAL_POOL_BOOST_AMOUNT)
            .await?;
        pools.push(lp_pool);

        Ok(DeploymentSummary {
            treasury,
            governance,
            pools,
        })
    }

    /// Deploy a pool for `token`, fund it with `reward` and hand it to the multisig
    async fn deploy_pool(
        &mut self,
        config: &DeploymentConfig,
        treasury: Address,
        token: &PoolDescriptor,
        reward: U256,
    ) -> Result<DeployedPool, ScriptError> {
        let key = token.pool_key();

        let pool = self
            .deploy(Step::DeployRewardsPool {
                key: key.clone(),
                params: PoolParams {
                    cap: token.cap,
                    token: token.address,
                    boost_token: config.boost_token,
                    treasury,
                    router: UNISWAP_ROUTER,
                    start_time: config.start_time,
                    duration: config.duration,
                },
            })
            .await?;

        self.execute(Step::NotifyRewardAmount {
            key: key.clone(),
            pool,
            amount: reward,
        })
        .await?;

        self.execute(Step::TransferOwnership {
            key,
            contract: pool,
            new_owner: config.multisig,
        })
        .await?;

        Ok(DeployedPool {
            name: token.name.clone(),
            address: pool,
        })
    }

    /// Execute a deployment step, returning the created contract
    async fn deploy(&mut self, step: Step) -> Result<Address, ScriptError> {
        let outcome = self.execute(step).await?;

        // `execute` rejects deployments without address
        outcome.contract_address.ok_or_else(|| {
            ScriptError::ContractDeployment(String::from("no contract address in receipt"))
        })
    }

    /// Execute a step, log and record its result, then wait on the checkpoint
    async fn execute(&mut self, step: Step) -> Result<StepOutcome, ScriptError> {
        info!("{step}");
        let outcome = self.executor.execute(&step).await?;

        match (step.method(), outcome.contract_address) {
            (None, Some(address)) => {
                info!("{} address: {address}", step.key());
                self.record(OutputKeys::Deployment { key: step.key() }, address)?;
            }
            (None, None) => {
                return Err(ScriptError::ContractDeployment(format!(
                    "no contract address in receipt of {}",
                    outcome.tx_hash
                )))
            }
            (Some(method), _) => {
                info!("{}.{method} done in tx {}", step.key(), outcome.tx_hash);
                self.record(
                    OutputKeys::Tx {
                        key: step.key(),
                        tx_key: method,
                    },
                    outcome.tx_hash,
                )?;
            }
        }

        self.checkpoint.confirm().await?;

        Ok(outcome)
    }

    /// Write a value in the deployment record, when there is one
    fn record<T: LowerHex>(&self, key: OutputKeys, value: T) -> Result<(), ScriptError> {
        match &self.output {
            Some(path) => write_output_file(path, key, value),
            None => Ok(()),
        }
    }
}
