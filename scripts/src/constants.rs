//! Constants used in the deploy scripts

use alloy::primitives::{address, uint, Address, U256};

/// The Uniswap V2 router wired into the treasury, governance and every pool
pub const UNISWAP_ROUTER: Address = address!("7a250d5630b4cf539739df2c5dacb4c659f2488d");

/// Reward notified to the uniswap LP pool (15,000 BOOST)
pub const INTERNAL_POOL_BOOST_AMOUNT: U256 = uint!(15000000000000000000000_U256);

/// Reward notified to each of the listed token pools (3,750 BOOST)
pub const REWARDS_POOL_BOOST_AMOUNT: U256 = uint!(3750000000000000000000_U256);

/// Default gas price for every transaction, in gwei
pub const DEFAULT_GAS_PRICE_GWEI: u64 = 20;

/// Number of wei in one gwei
pub const WEI_PER_GWEI: u128 = 1_000_000_000;

/// Default location of the deployment settings
pub const DEFAULT_CONFIG_PATH: &str = "mainnet_settings.json";

/// Default directory holding the compiled contract artifacts
pub const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

/// Default location of the deployment record
pub const DEFAULT_OUTPUT_PATH: &str = "deployed.json";

/// Artifact name of the treasury contract
pub const TREASURY_ARTIFACT: &str = "Treasury";

/// Artifact name of the governance contract
pub const GOVERNANCE_ARTIFACT: &str = "BoostGovV2";

/// Artifact name of the rewards pool contract
pub const REWARDS_POOL_ARTIFACT: &str = "BoostRewardsV2";

/// Deployment record key of the treasury
pub const TREASURY_KEY: &str = "treasury";

/// Deployment record key of the governance contract
pub const GOVERNANCE_KEY: &str = "governance";

/// Prompt printed when waiting on the operator
pub const CHECKPOINT_PROMPT: &str = "Checkpoint... Press enter to continue!";

/// ETX byte, sent by Ctrl-C when the terminal is in raw mode
pub const ETX_BYTE: u8 = 0x03;
