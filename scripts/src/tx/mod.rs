//! Chain access: RPC client, call signatures and transaction sending

/// Solidity signatures of the called methods
pub mod abi;
/// The signing RPC provider
pub mod client;
/// Transaction sending for the deployment steps
pub mod sender;
