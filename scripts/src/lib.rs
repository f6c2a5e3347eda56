//! Scripts for deploying and wiring the Boost wave contracts: the treasury,
//! its governance and the reward pools of every listed token.

#![deny(clippy::missing_docs_in_private_items)]

pub mod artifacts;
pub mod checkpoint;
pub mod cli;
pub mod commands;
pub mod config;
pub mod constants;
pub mod errors;

/// Our deploy utils
pub mod deploy;

// Our output utils
pub mod output_writer;

pub mod tx;
