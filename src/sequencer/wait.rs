// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Caller-side waiting for a commitment to mature

use crate::caller::ContractCaller;
use crate::error::{Error, Result};
use crate::sequencer::RegistrationSequencer;
use std::time::Duration;

/// Poll the pending commitment every `poll_interval` until it is ready,
/// giving up after `deadline`. Never submits a transaction, so dropping
/// or timing out the wait is always safe.
pub async fn wait_until_ready<C: ContractCaller + ?Sized>(
    sequencer: &mut RegistrationSequencer<'_, C>,
    poll_interval: Duration,
    deadline: Duration,
) -> Result<()> {
    if sequencer.pending_commitment().is_none() {
        return Err(Error::NotCommitted(*sequencer.state()));
    }

    match tokio::time::timeout(deadline, poll_until_ready(sequencer, poll_interval)).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!("Commitment did not mature within {:?}", deadline);
            Err(Error::DeadlineElapsed(deadline))
        }
    }
}

async fn poll_until_ready<C: ContractCaller + ?Sized>(
    sequencer: &mut RegistrationSequencer<'_, C>,
    poll_interval: Duration,
) -> Result<()> {
    loop {
        if sequencer.poll_ready().await? {
            return Ok(());
        }
        tracing::debug!("Commitment not ready, checking again in {:?}", poll_interval);
        tokio::time::sleep(poll_interval).await;
    }
}
