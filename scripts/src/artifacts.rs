//! Compiled contract artifacts, providing the creation bytecode of each deployed contract

use std::{fs, path::Path};

use alloy::{hex, primitives::Bytes};
use serde::Deserialize;

use crate::{
    constants::{GOVERNANCE_ARTIFACT, REWARDS_POOL_ARTIFACT, TREASURY_ARTIFACT},
    errors::ScriptError,
};

/// The contracts created by a wave deployment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContractKind {
    /// The treasury
    Treasury,
    /// The governance contract
    Governance,
    /// A rewards pool
    RewardsPool,
}

impl ContractKind {
    /// Name of the compiled artifact for this contract
    pub fn artifact_name(&self) -> &'static str {
        match self {
            ContractKind::Treasury => TREASURY_ARTIFACT,
            ContractKind::Governance => GOVERNANCE_ARTIFACT,
            ContractKind::RewardsPool => REWARDS_POOL_ARTIFACT,
        }
    }
}

/// The subset of a hardhat / buidler artifact we care about
#[derive(Deserialize)]
struct Artifact {
    /// Hex encoded creation bytecode
    bytecode: String,
}

/// Creation bytecode of every contract the deployment needs
#[derive(Clone, Debug)]
pub struct ContractArtifacts {
    /// Treasury bytecode
    treasury: Bytes,
    /// Governance bytecode
    governance: Bytes,
    /// Rewards pool bytecode
    rewards_pool: Bytes,
}

impl ContractArtifacts {
    /// Load `<dir>/<ArtifactName>.json` for every deployed contract
    pub fn load(dir: &Path) -> Result<Self, ScriptError> {
        Ok(Self {
            treasury: read_artifact(dir, ContractKind::Treasury)?,
            governance: read_artifact(dir, ContractKind::Governance)?,
            rewards_pool: read_artifact(dir, ContractKind::RewardsPool)?,
        })
    }

    /// Creation bytecode of the given contract
    pub fn bytecode(&self, contract: ContractKind) -> &Bytes {
        match contract {
            ContractKind::Treasury => &self.treasury,
            ContractKind::Governance => &self.governance,
            ContractKind::RewardsPool => &self.rewards_pool,
        }
    }
}

/// Reads the artifact of `contract` from `dir`
fn read_artifact(dir: &Path, contract: ContractKind) -> Result<Bytes, ScriptError> {
    let path = dir.join(format!("{}.json", contract.artifact_name()));
    let contents = fs::read_to_string(&path)
        .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))?;

    parse_artifact(&contents)
        .map_err(|e| ScriptError::ArtifactParsing(format!("{}: {}", path.display(), e)))
}

/// Extracts the creation bytecode from an artifact's JSON
pub fn parse_artifact(contents: &str) -> Result<Bytes, ScriptError> {
    let artifact: Artifact =
        serde_json::from_str(contents).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    let bytecode =
        hex::decode(artifact.bytecode).map_err(|e| ScriptError::ArtifactParsing(e.to_string()))?;

    // Interfaces and abstract contracts compile to an empty bytecode
    if bytecode.is_empty() {
        return Err(ScriptError::ArtifactParsing(String::from(
            "artifact has no creation bytecode",
        )));
    }

    Ok(Bytes::from(bytecode))
}
