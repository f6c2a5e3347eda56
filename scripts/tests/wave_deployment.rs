use alloy::primitives::{Address, TxHash, U256};
use boost_scripts::{
    checkpoint::{AutoApprove, Checkpoint},
    config::{parse_config, DeploymentConfig},
    constants::{INTERNAL_POOL_BOOST_AMOUNT, REWARDS_POOL_BOOST_AMOUNT, UNISWAP_ROUTER},
    deploy::{
        orchestrator::{StepExecutor, WaveDeployer},
        steps::{Step, StepOutcome},
    },
    errors::ScriptError,
    output_writer::{read_output_file, OutputKeys},
};

/// Records every step and fakes its confirmation
#[derive(Default)]
struct RecordingExecutor {
    steps: Vec<Step>,
    /// Index of the step to fail, if any
    fail_at: Option<usize>,
}

impl RecordingExecutor {
    fn failing_at(index: usize) -> Self {
        Self {
            steps: Vec::new(),
            fail_at: Some(index),
        }
    }

    fn labels(&self) -> Vec<String> {
        self.steps
            .iter()
            .map(|step| match step.method() {
                Some(method) => format!("{}.{method}", step.key()),
                None => format!("deploy {}", step.key()),
            })
            .collect()
    }
}

impl StepExecutor for RecordingExecutor {
    async fn execute(&mut self, step: &Step) -> Result<StepOutcome, ScriptError> {
        let index = self.steps.len();
        self.steps.push(step.clone());

        if self.fail_at == Some(index) {
            return Err(ScriptError::ContractInteraction(String::from("execution reverted")));
        }

        // Deterministic addresses: the n-th step creates 0x..n
        let nonce = index as u8 + 1;
        Ok(StepOutcome {
            tx_hash: TxHash::repeat_byte(nonce),
            contract_address: step.is_deployment().then(|| Address::with_last_byte(nonce)),
        })
    }
}

/// Approves a fixed number of checkpoints, then interrupts
struct ScriptedCheckpoint {
    approvals_left: usize,
    seen: usize,
}

impl Checkpoint for ScriptedCheckpoint {
    async fn confirm(&mut self) -> Result<(), ScriptError> {
        self.seen += 1;
        if self.approvals_left == 0 {
            return Err(ScriptError::Interrupted);
        }
        self.approvals_left -= 1;
        Ok(())
    }
}

fn config(tokens: &[(&str, u64)]) -> DeploymentConfig {
    let tokens = tokens
        .iter()
        .enumerate()
        .map(|(i, (name, cap))| {
            format!(
                r#"{{ "name": "{name}", "address": "{:#x}", "cap": {cap} }}"#,
                Address::with_last_byte(0xa0 + i as u8)
            )
        })
        .collect::<Vec<_>>()
        .join(",");

    parse_config(&format!(
        r#"{{
            "starttime": 1603983600,
            "duration": 604800,
            "multisig": "0x1111111111111111111111111111111111111111",
            "stablecoin": "0x2222222222222222222222222222222222222222",
            "boostToken": "0x3333333333333333333333333333333333333333",
            "uniswapLP": {{ "name": "LP", "address": "0x4444444444444444444444444444444444444444", "cap": "0xffff" }},
            "tokens": [{tokens}]
        }}"#
    ))
    .unwrap()
}

#[tokio::test]
async fn issues_every_step_in_order() {
    let config = config(&[("A", 10), ("B", 20)]);
    let mut executor = RecordingExecutor::default();

    let summary = WaveDeployer::new(&mut executor, AutoApprove)
        .run(&config)
        .await
        .unwrap();

    assert_eq!(
        executor.labels(),
        [
            "deploy treasury",
            "deploy governance",
            "treasury.setGov",
            "treasury.transferOwnership",
            "deploy A_pool",
            "A_pool.notifyRewardAmount",
            "A_pool.transferOwnership",
            "deploy B_pool",
            "B_pool.notifyRewardAmount",
            "B_pool.transferOwnership",
            "deploy LP_pool",
            "LP_pool.notifyRewardAmount",
            "LP_pool.transferOwnership",
        ]
    );

    assert_eq!(summary.treasury, Address::with_last_byte(1));
    assert_eq!(summary.governance, Address::with_last_byte(2));
    let pools: Vec<_> = summary
        .pools
        .iter()
        .map(|pool| (pool.name.as_str(), pool.address))
        .collect();
    assert_eq!(
        pools,
        [
            ("A", Address::with_last_byte(5)),
            ("B", Address::with_last_byte(8)),
            ("LP", Address::with_last_byte(11)),
        ]
    );
}

#[tokio::test]
async fn step_count_follows_the_token_list() {
    for token_count in 0..4 {
        let names: Vec<String> = (0..token_count).map(|i| format!("T{i}")).collect();
        let tokens: Vec<(&str, u64)> = names.iter().map(|name| (name.as_str(), 1)).collect();

        let mut executor = RecordingExecutor::default();
        WaveDeployer::new(&mut executor, AutoApprove)
            .run(&config(&tokens))
            .await
            .unwrap();

        assert_eq!(executor.steps.len(), 4 + 3 * token_count + 3);
    }
}

#[tokio::test]
async fn contracts_are_wired_together() {
    let config = config(&[("A", 10)]);
    let mut executor = RecordingExecutor::default();
    WaveDeployer::new(&mut executor, AutoApprove)
        .run(&config)
        .await
        .unwrap();
    let steps = executor.steps;

    let treasury = Address::with_last_byte(1);
    let governance = Address::with_last_byte(2);
    assert_eq!(
        steps[0],
        Step::DeployTreasury {
            router: UNISWAP_ROUTER,
            stablecoin: config.stablecoin,
            multisig: config.multisig,
        }
    );
    assert_eq!(
        steps[1],
        Step::DeployGovernance {
            boost_token: config.boost_token,
            treasury,
            router: UNISWAP_ROUTER,
        }
    );
    assert_eq!(
        steps[2],
        Step::SetGovernance {
            treasury,
            governance
        }
    );

    let Step::DeployRewardsPool { params, .. } = &steps[4] else {
        panic!("expected a pool deployment, got {:?}", steps[4]);
    };
    assert_eq!(params.cap, U256::from(10u64));
    assert_eq!(params.token, config.tokens[0].address);
    assert_eq!(params.treasury, treasury);
    assert_eq!(params.start_time, config.start_time);
    assert_eq!(params.duration, config.duration);

    // Every ownership goes to the multisig
    for step in &steps {
        if let Step::TransferOwnership { new_owner, .. } = step {
            assert_eq!(*new_owner, config.multisig);
        }
    }
}

#[tokio::test]
async fn reward_amounts_ignore_the_cap() {
    let config = config(&[("A", 1), ("B", u64::MAX)]);
    let mut executor = RecordingExecutor::default();
    WaveDeployer::new(&mut executor, AutoApprove)
        .run(&config)
        .await
        .unwrap();

    let rewards: Vec<(String, U256)> = executor
        .steps
        .into_iter()
        .filter_map(|step| match step {
            Step::NotifyRewardAmount { key, amount, .. } => Some((key, amount)),
            _ => None,
        })
        .collect();

    assert_eq!(
        rewards,
        [
            (String::from("A_pool"), REWARDS_POOL_BOOST_AMOUNT),
            (String::from("B_pool"), REWARDS_POOL_BOOST_AMOUNT),
            (String::from("LP_pool"), INTERNAL_POOL_BOOST_AMOUNT),
        ]
    );
}

#[tokio::test]
async fn failed_step_stops_the_sequence() {
    let config = config(&[("A", 10), ("B", 20)]);
    // A_pool.notifyRewardAmount reverts
    let mut executor = RecordingExecutor::failing_at(5);

    let err = WaveDeployer::new(&mut executor, AutoApprove)
        .run(&config)
        .await
        .unwrap_err();

    assert!(matches!(err, ScriptError::ContractInteraction(_)));
    assert_eq!(executor.steps.len(), 6);
    assert_eq!(executor.labels().last().unwrap(), "A_pool.notifyRewardAmount");
}

#[tokio::test]
async fn interrupt_stops_the_sequence() {
    let config = config(&[("A", 10)]);
    let checkpoint = ScriptedCheckpoint {
        approvals_left: 2,
        seen: 0,
    };
    let mut executor = RecordingExecutor::default();

    let err = WaveDeployer::new(&mut executor, checkpoint)
        .run(&config)
        .await
        .unwrap_err();

    // Treasury and governance confirmed, interrupted after setGov
    assert_eq!(err, ScriptError::Interrupted);
    assert_eq!(
        executor.labels(),
        ["deploy treasury", "deploy governance", "treasury.setGov"]
    );
}

#[tokio::test]
async fn checkpoint_follows_every_step() {
    let config = config(&[("A", 10), ("B", 20)]);
    let mut checkpoint = ScriptedCheckpoint {
        approvals_left: usize::MAX,
        seen: 0,
    };

    WaveDeployer::new(RecordingExecutor::default(), &mut checkpoint)
        .run(&config)
        .await
        .unwrap();

    assert_eq!(checkpoint.seen, 13);
}

#[tokio::test]
async fn confirmed_steps_are_recorded() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("deployed.json");
    let config = config(&[("A", 10)]);

    WaveDeployer::new(RecordingExecutor::default(), AutoApprove)
        .with_output(output.clone())
        .run(&config)
        .await
        .unwrap();

    assert_eq!(
        read_output_file(&output, OutputKeys::Deployment { key: "treasury" }).unwrap(),
        format!("{:#x}", Address::with_last_byte(1))
    );
    assert_eq!(
        read_output_file(&output, OutputKeys::Deployment { key: "A_pool" }).unwrap(),
        format!("{:#x}", Address::with_last_byte(5))
    );
    assert_eq!(
        read_output_file(
            &output,
            OutputKeys::Tx {
                key: "LP_pool",
                tx_key: "transferOwnership"
            }
        )
        .unwrap(),
        format!("{:#x}", TxHash::repeat_byte(10))
    );
}

#[tokio::test]
async fn rerun_replaces_the_record() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("deployed.json");

    WaveDeployer::new(RecordingExecutor::default(), AutoApprove)
        .with_output(output.clone())
        .run(&config(&[("OLD", 10)]))
        .await
        .unwrap();
    assert!(read_output_file(&output, OutputKeys::Deployment { key: "OLD_pool" }).is_ok());

    // Second run stops right after the treasury
    let mut executor = RecordingExecutor::failing_at(1);
    WaveDeployer::new(&mut executor, AutoApprove)
        .with_output(output.clone())
        .run(&config(&[]))
        .await
        .unwrap_err();

    assert!(read_output_file(&output, OutputKeys::Deployment { key: "OLD_pool" }).is_err());
    assert!(read_output_file(&output, OutputKeys::Deployment { key: "LP_pool" }).is_err());
    assert!(read_output_file(
        &output,
        OutputKeys::Tx {
            key: "treasury",
            tx_key: "transferOwnership"
        }
    )
    .is_err());
    assert_eq!(
        read_output_file(&output, OutputKeys::Deployment { key: "treasury" }).unwrap(),
        format!("{:#x}", Address::with_last_byte(1))
    );
}
