// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Error types for name service operations

use crate::caller::CallerError;
use crate::config::ContractKind;
use crate::sequencer::SequencerState;
use std::time::Duration;
use thiserror::Error;

/// Common result type for library operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Name failed normalization; never reaches the network
    #[error("invalid name '{name}': {source}")]
    InvalidName {
        name: String,
        #[source]
        source: NameError,
    },

    #[error("invalid commitment input: {0}")]
    InvalidCommitmentInput(String),

    /// A write was refused, either by the ledger or locally before sending
    #[error("{method} was not submitted: {reason}")]
    Submission {
        method: &'static str,
        reason: SubmissionReason,
    },

    /// A read query failed; the queried value is absent
    #[error("{method} query failed: {source}")]
    Call {
        method: &'static str,
        #[source]
        source: CallerError,
    },

    #[error("name '{0}' is not available")]
    Unavailable(String),

    #[error("no commitment is pending while the sequencer is {0}")]
    NotCommitted(SequencerState),

    #[error("no {kind} contract configured for network {network_id}")]
    UnsetAddress { network_id: u64, kind: ContractKind },

    #[error("commitment did not mature within {0:?}")]
    DeadlineElapsed(Duration),
}

impl Error {
    pub(crate) fn invalid_name(name: &str, source: NameError) -> Self {
        Error::InvalidName {
            name: name.to_string(),
            source,
        }
    }

    /// True if the ledger (not this library) refused the write.
    ///
    /// Transport failures do not count: the write may still have been mined.
    pub fn is_remote_rejection(&self) -> bool {
        matches!(
            self,
            Error::Submission {
                reason: SubmissionReason::Rejected(CallerError::Reverted(_)),
                ..
            }
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("name is empty")]
    Empty,

    #[error("empty label at position {0}")]
    EmptyLabel(usize),

    #[error("label contains a '.' separator")]
    ContainsSeparator,

    #[error("character {0:?} is not allowed")]
    InvalidCharacter(char),
}

#[derive(Debug, Error)]
pub enum SubmissionReason {
    #[error("rejected by the ledger: {0}")]
    Rejected(#[source] CallerError),

    #[error("not allowed while the sequencer is {0}")]
    OutOfOrder(SequencerState),

    #[error("arguments do not match the pending commitment")]
    CommitmentMismatch,

    #[error("commitment is {age:?} old, needs {min_age:?}")]
    CommitmentTooNew { age: Duration, min_age: Duration },
}
