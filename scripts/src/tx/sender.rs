use alloy::{
    network::TransactionBuilder,
    primitives::Bytes,
    providers::Provider,
    rpc::types::eth::{TransactionReceipt, TransactionRequest},
};
use tracing::info;

use crate::{
    artifacts::ContractArtifacts,
    deploy::{
        orchestrator::StepExecutor,
        steps::{Step, StepOutcome, Transaction},
    },
    errors::ScriptError,
    tx::client::RpcProvider,
};

/// Sends the deployment steps through the RPC provider, one confirmed
/// transaction at a time
pub struct RpcExecutor {
    /// Signing client
    client: RpcProvider,
    /// Bytecode of the created contracts
    artifacts: ContractArtifacts,
    /// Gas price of every transaction, in wei
    gas_price: u128,
}

impl RpcExecutor {
    /// Build a new executor
    pub fn new(client: RpcProvider, artifacts: ContractArtifacts, gas_price: u128) -> Self {
        Self {
            client,
            artifacts,
            gas_price,
        }
    }
}

impl StepExecutor for RpcExecutor {
    async fn execute(&mut self, step: &Step) -> Result<StepOutcome, ScriptError> {
        let tx_request = build_request(&self.artifacts, step, self.gas_price);

        if step.is_deployment() {
            let receipt = send_and_confirm(&self.client, tx_request, step)
                .await
                .map_err(ScriptError::ContractDeployment)?;
            let contract_address = receipt.contract_address.ok_or_else(|| {
                ScriptError::ContractDeployment(format!(
                    "no contract address in receipt of {}",
                    receipt.transaction_hash
                ))
            })?;

            Ok(StepOutcome {
                tx_hash: receipt.transaction_hash,
                contract_address: Some(contract_address),
            })
        } else {
            let receipt = send_and_confirm(&self.client, tx_request, step)
                .await
                .map_err(ScriptError::ContractInteraction)?;

            Ok(StepOutcome {
                tx_hash: receipt.transaction_hash,
                contract_address: None,
            })
        }
    }
}

/// Build the transaction request of a step, pinned at `gas_price`
fn build_request(
    artifacts: &ContractArtifacts,
    step: &Step,
    gas_price: u128,
) -> TransactionRequest {
    let tx_request = match step.transaction() {
        Transaction::Create {
            contract,
            constructor_args,
        } => {
            let mut code = artifacts.bytecode(contract).to_vec();
            code.extend_from_slice(&constructor_args);
            TransactionRequest::default().with_deploy_code(Bytes::from(code))
        }
        Transaction::Call { to, calldata } => TransactionRequest::default()
            .to(to)
            .with_input(Bytes::from(calldata)),
    };

    tx_request.with_gas_price(gas_price)
}

/// Send a transaction and wait for its successful receipt
async fn send_and_confirm(
    client: &RpcProvider,
    tx_request: TransactionRequest,
    step: &Step,
) -> Result<TransactionReceipt, String> {
    // Send it
    let pending_tx = client
        .send_transaction(tx_request)
        .await
        .map_err(|e| e.to_string())?;
    info!("Pending {} transaction... {}", step.key(), pending_tx.tx_hash());

    // Wait for the transaction to be included.
    let receipt = pending_tx.get_receipt().await.map_err(|e| e.to_string())?;
    if !receipt.status() {
        return Err(format!("transaction {} reverted", receipt.transaction_hash));
    }

    info!(
        "{} tx done on block: {}",
        step.key(),
        receipt
            .block_number
            .map_or_else(|| String::from("pending"), |block| block.to_string())
    );

    Ok(receipt)
}
