//! The individual on-chain operations of a wave deployment

use std::fmt::{self, Display, Formatter};

use alloy::{
    primitives::{Address, TxHash, U256},
    sol_types::{SolCall, SolValue},
};

use crate::{
    artifacts::ContractKind,
    constants::{GOVERNANCE_KEY, TREASURY_KEY},
    tx::abi::{notifyRewardAmountCall, setGovCall, transferOwnershipCall},
};

/// Constructor arguments of a rewards pool
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolParams {
    /// Staking cap
    pub cap: U256,
    /// Staked token
    pub token: Address,
    /// The BOOST token
    pub boost_token: Address,
    /// The deployed treasury
    pub treasury: Address,
    /// The uniswap router
    pub router: Address,
    /// Reward window start timestamp
    pub start_time: u64,
    /// Reward window length, in seconds
    pub duration: u64,
}

/// One on-chain operation, in the order the orchestrator issues them
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    /// Create `Treasury(router, stablecoin, multisig)`
    DeployTreasury {
        /// Uniswap router
        router: Address,
        /// Stablecoin
        stablecoin: Address,
        /// Multisig
        multisig: Address,
    },
    /// Create `BoostGovV2(boostToken, treasury, router)`
    DeployGovernance {
        /// The BOOST token
        boost_token: Address,
        /// The deployed treasury
        treasury: Address,
        /// Uniswap router
        router: Address,
    },
    /// `treasury.setGov(governance)`
    SetGovernance {
        /// The deployed treasury
        treasury: Address,
        /// The deployed governance contract
        governance: Address,
    },
    /// `contract.transferOwnership(newOwner)`
    TransferOwnership {
        /// Record key of the contract
        key: String,
        /// Contract changing hands
        contract: Address,
        /// New owner
        new_owner: Address,
    },
    /// Create a `BoostRewardsV2` pool
    DeployRewardsPool {
        /// Record key of the pool
        key: String,
        /// Constructor arguments
        params: PoolParams,
    },
    /// `pool.notifyRewardAmount(amount)`
    NotifyRewardAmount {
        /// Record key of the pool
        key: String,
        /// The deployed pool
        pool: Address,
        /// Reward for the window
        amount: U256,
    },
}

/// The transaction a step translates to
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transaction {
    /// Contract creation, the constructor arguments are appended to the artifact bytecode
    Create {
        /// Created contract
        contract: ContractKind,
        /// ABI encoded constructor arguments
        constructor_args: Vec<u8>,
    },
    /// Method call
    Call {
        /// Called contract
        to: Address,
        /// ABI encoded call
        calldata: Vec<u8>,
    },
}

/// Result of a confirmed step
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    /// Hash of the mined transaction
    pub tx_hash: TxHash,
    /// Created contract, for deployments
    pub contract_address: Option<Address>,
}

impl Step {
    /// Deployment record key of the contract this step creates or targets
    pub fn key(&self) -> &str {
        match self {
            Step::DeployTreasury { .. } | Step::SetGovernance { .. } => TREASURY_KEY,
            Step::DeployGovernance { .. } => GOVERNANCE_KEY,
            Step::TransferOwnership { key, .. }
            | Step::DeployRewardsPool { key, .. }
            | Step::NotifyRewardAmount { key, .. } => key,
        }
    }

    /// Name of the called method, `None` for deployments
    pub fn method(&self) -> Option<&'static str> {
        match self {
            Step::DeployTreasury { .. }
            | Step::DeployGovernance { .. }
            | Step::DeployRewardsPool { .. } => None,
            Step::SetGovernance { .. } => Some("setGov"),
            Step::TransferOwnership { .. } => Some("transferOwnership"),
            Step::NotifyRewardAmount { .. } => Some("notifyRewardAmount"),
        }
    }

    /// Whether this step creates a contract
    pub fn is_deployment(&self) -> bool {
        self.method().is_none()
    }

    /// Encode the step into its transaction
    pub fn transaction(&self) -> Transaction {
        match self {
            Step::DeployTreasury {
                router,
                stablecoin,
                multisig,
            } => Transaction::Create {
                contract: ContractKind::Treasury,
                constructor_args: (*router, *stablecoin, *multisig).abi_encode_params(),
            },
            Step::DeployGovernance {
                boost_token,
                treasury,
                router,
            } => Transaction::Create {
                contract: ContractKind::Governance,
                constructor_args: (*boost_token, *treasury, *router).abi_encode_params(),
            },
            Step::DeployRewardsPool { params, .. } => Transaction::Create {
                contract: ContractKind::RewardsPool,
                constructor_args: (
                    params.cap,
                    params.token,
                    params.boost_token,
                    params.treasury,
                    params.router,
                    U256::from(params.start_time),
                    U256::from(params.duration),
                )
                    .abi_encode_params(),
            },
            Step::SetGovernance {
                treasury,
                governance,
            } => Transaction::Call {
                to: *treasury,
                calldata: setGovCall { gov: *governance }.abi_encode(),
            },
            Step::TransferOwnership {
                contract,
                new_owner,
                ..
            } => Transaction::Call {
                to: *contract,
                calldata: transferOwnershipCall {
                    newOwner: *new_owner,
                }
                .abi_encode(),
            },
            Step::NotifyRewardAmount { pool, amount, .. } => Transaction::Call {
                to: *pool,
                calldata: notifyRewardAmountCall { reward: *amount }.abi_encode(),
            },
        }
    }
}

impl Display for Step {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Step::DeployTreasury { .. } => write!(f, "Deploying treasury"),
            Step::DeployGovernance { .. } => write!(f, "Deploying governance"),
            Step::SetGovernance { governance, .. } => {
                write!(f, "Setting governance {governance} in treasury")
            }
            Step::TransferOwnership { key, new_owner, .. } => {
                write!(f, "Transferring ownership of {key} to {new_owner}")
            }
            Step::DeployRewardsPool { key, params } => {
                write!(f, "Deploying {key} for token {}", params.token)
            }
            Step::NotifyRewardAmount { key, amount, .. } => {
                write!(f, "Notifying reward amt {amount} to {key}")
            }
        }
    }
}
