//! Manual checkpoints between deployment steps

use tokio::io::{self, AsyncBufRead, AsyncBufReadExt, BufReader, Stdin};

use crate::{
    constants::{CHECKPOINT_PROMPT, ETX_BYTE},
    errors::ScriptError,
};

/// A gate the orchestrator waits on after every confirmed step.
///
/// Returning [`ScriptError::Interrupted`] aborts the deployment, no further
/// step is sent.
#[allow(async_fn_in_trait)]
pub trait Checkpoint {
    /// Block until the operator lets the deployment continue
    async fn confirm(&mut self) -> Result<(), ScriptError>;
}

impl<C: Checkpoint> Checkpoint for &mut C {
    async fn confirm(&mut self) -> Result<(), ScriptError> {
        (**self).confirm().await
    }
}

/// Lets every step through
#[derive(Clone, Copy, Debug, Default)]
pub struct AutoApprove;

impl Checkpoint for AutoApprove {
    async fn confirm(&mut self) -> Result<(), ScriptError> {
        Ok(())
    }
}

/// Waits for the operator to press enter
pub struct OperatorCheckpoint<R> {
    /// Operator input
    input: R,
}

impl OperatorCheckpoint<BufReader<Stdin>> {
    /// Checkpoint reading from the process stdin
    pub fn stdin() -> Self {
        Self::new(BufReader::new(io::stdin()))
    }
}

impl<R: AsyncBufRead + Unpin> OperatorCheckpoint<R> {
    /// Checkpoint reading from the given input
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl<R: AsyncBufRead + Unpin> Checkpoint for OperatorCheckpoint<R> {
    async fn confirm(&mut self) -> Result<(), ScriptError> {
        println!("{CHECKPOINT_PROMPT}");

        let mut line = Vec::new();
        let read = self
            .input
            .read_until(b'\n', &mut line)
            .await
            .map_err(|e| ScriptError::Checkpoint(e.to_string()))?;

        // A closed input can never confirm, treat it like ^C
        if read == 0 || line.first() == Some(&ETX_BYTE) {
            return Err(ScriptError::Interrupted);
        }

        Ok(())
    }
}
