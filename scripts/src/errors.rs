//! Definitions of errors that can occur during the execution of the deployment scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the deployment scripts
#[derive(Debug, PartialEq, Eq)]
pub enum ScriptError {
    /// Error reading or parsing the deployment settings file
    ConfigLoading(String),
    /// Error reading or parsing a compiled contract artifact
    ArtifactParsing(String),
    /// Error when building output file
    JsonOutputError(String),
    /// Error when creating the client
    ClientInitialization(String),
    /// Error deploying a contract
    ContractDeployment(String),
    /// Error calling a contract method
    ContractInteraction(String),
    /// Error reading the operator input at a checkpoint
    Checkpoint(String),
    /// The operator interrupted the deployment
    Interrupted,
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::ConfigLoading(s) => write!(f, "error loading deployment config: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::JsonOutputError(s) => write!(f, "error writing json output: {}", s),
            ScriptError::ClientInitialization(s) => write!(f, "error during client init: {}", s),
            ScriptError::ContractDeployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::ContractInteraction(s) => {
                write!(f, "error interacting with contract: {}", s)
            }
            ScriptError::Checkpoint(s) => write!(f, "error waiting at checkpoint: {}", s),
            ScriptError::Interrupted => write!(f, "deployment interrupted by operator"),
        }
    }
}

impl Error for ScriptError {}
