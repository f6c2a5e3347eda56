//! Loading of the network specific deployment settings

use std::{collections::HashSet, fs, path::Path, str::FromStr};

use alloy::primitives::{Address, U256};
use serde::{Deserialize, Deserializer};

use crate::errors::ScriptError;

/// Settings of a wave deployment, read once before the first transaction
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    /// Timestamp at which every pool starts distributing rewards
    #[serde(rename = "starttime")]
    pub start_time: u64,
    /// Length of the reward window, in seconds
    pub duration: u64,
    /// Final owner of the treasury and of every pool
    pub multisig: Address,
    /// Stablecoin the treasury swaps into
    pub stablecoin: Address,
    /// The BOOST token
    pub boost_token: Address,
    /// The uniswap LP pool, deployed after the listed tokens
    #[serde(rename = "uniswapLP")]
    pub uniswap_lp: PoolDescriptor,
    /// Tokens receiving a rewards pool, in deployment order
    pub tokens: Vec<PoolDescriptor>,
}

/// A staking token for which a rewards pool is deployed
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct PoolDescriptor {
    /// Human readable name, used in logs and as the deployment record key
    pub name: String,
    /// Address of the staked token
    pub address: Address,
    /// Staking cap forwarded to the pool constructor
    #[serde(deserialize_with = "deserialize_amount")]
    pub cap: U256,
}

impl PoolDescriptor {
    /// The deployment record key of this pool
    pub fn pool_key(&self) -> String {
        format!("{}_pool", self.name)
    }
}

/// Reads and parses the deployment settings at the given path
pub fn load_config(path: &Path) -> Result<DeploymentConfig, ScriptError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ScriptError::ConfigLoading(format!("{}: {}", path.display(), e)))?;

    parse_config(&contents)
}

/// Parses deployment settings from their JSON representation
pub fn parse_config(contents: &str) -> Result<DeploymentConfig, ScriptError> {
    let config: DeploymentConfig =
        serde_json::from_str(contents).map_err(|e| ScriptError::ConfigLoading(e.to_string()))?;

    // Pool names key the deployment record, the LP pool included
    let mut names = HashSet::new();
    for pool in config.tokens.iter().chain([&config.uniswap_lp]) {
        if !names.insert(pool.name.as_str()) {
            return Err(ScriptError::ConfigLoading(format!(
                "duplicate pool name `{}`",
                pool.name
            )));
        }
    }

    Ok(config)
}

/// An amount given either as a JSON number or as a decimal / `0x` hex string
#[derive(Deserialize)]
#[serde(untagged)]
enum RawAmount {
    /// Plain JSON number
    Number(u64),
    /// String encoded amount, for values past `u64`
    Text(String),
}

/// Deserializes a [`RawAmount`] into a `U256`
fn deserialize_amount<'de, D>(deserializer: D) -> Result<U256, D::Error>
where
    D: Deserializer<'de>,
{
    match RawAmount::deserialize(deserializer)? {
        RawAmount::Number(n) => Ok(U256::from(n)),
        RawAmount::Text(s) => U256::from_str(s.trim()).map_err(serde::de::Error::custom),
    }
}
