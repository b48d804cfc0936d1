// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Commit-reveal registration
//!
//! Registering a name is a two-phase exchange with the controller:
//!
//! 1. [`commit`](RegistrationSequencer::commit) a blinded [`Commitment`];
//! 2. wait until the recorded commitment is at least `min_age` old
//!    (poll [`is_ready`](RegistrationSequencer::is_ready), or use
//!    [`wait_until_ready`]);
//! 3. [`register`](RegistrationSequencer::register) with the same name,
//!    registrant and secret, paying at least the freshly quoted price.
//!
//! The sequencer never sleeps or retries on its own. Dropping a future
//! before it submits is harmless; once a transaction has been sent it
//! cannot be taken back, so a cancelled `commit` or `register` may still
//! be mined.

pub mod commitment;
pub mod cost;
pub mod wait;

pub use commitment::{compute_commitment, Commitment, Secret};
pub use cost::{RegisterOptions, RegistrationCost};
pub use wait::wait_until_ready;

use crate::caller::{ContractCaller, SendOptions, TransactionHandle};
use crate::config::{AddressBook, ContractKind};
use crate::constants::DEFAULT_MIN_COMMITMENT_AGE;
use crate::contracts::RegistrarController;
use crate::error::{Error, Result, SubmissionReason};
use crate::names::normalize_label;
use alloy_primitives::{Address, U256};
use std::fmt;
use std::time::Duration;

const COMMIT: &str = "commit";
const REGISTER: &str = "registerWithConfig";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerState {
    Idle,
    Committed {
        commitment: Commitment,
        handle: TransactionHandle,
    },
    Ready {
        commitment: Commitment,
    },
    Registered {
        handle: TransactionHandle,
    },
    /// The name was taken before the commitment could be revealed
    Failed,
}

impl SequencerState {
    pub fn pending_commitment(&self) -> Option<Commitment> {
        match self {
            SequencerState::Committed { commitment, .. } | SequencerState::Ready { commitment } => {
                Some(*commitment)
            }
            _ => None,
        }
    }
}

impl fmt::Display for SequencerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SequencerState::Idle => "idle",
            SequencerState::Committed { .. } => "committed",
            SequencerState::Ready { .. } => "ready",
            SequencerState::Registered { .. } => "registered",
            SequencerState::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Drives one registration attempt through commit, wait and reveal.
///
/// Mutating operations take `&mut self`, so a single instance cannot have
/// two of them in flight. Independent instances may share a caller.
pub struct RegistrationSequencer<'a, C: ?Sized> {
    caller: &'a C,
    controller: RegistrarController<'a, C>,
    resolver: Address,
    min_age: Duration,
    state: SequencerState,
}

impl<'a, C: ContractCaller + ?Sized> RegistrationSequencer<'a, C> {
    pub fn new(caller: &'a C, controller: Address, resolver: Address) -> Self {
        Self {
            caller,
            controller: RegistrarController::at(caller, controller),
            resolver,
            min_age: DEFAULT_MIN_COMMITMENT_AGE,
            state: SequencerState::Idle,
        }
    }

    /// Sequencer for the controller and public resolver deployed on `network_id`
    pub fn for_network(caller: &'a C, book: &AddressBook, network_id: u64) -> Result<Self> {
        let controller = book.require(network_id, ContractKind::Controller)?;
        let resolver = book.require(network_id, ContractKind::Resolver)?;
        Ok(Self::new(caller, controller, resolver))
    }

    pub fn with_min_age(mut self, min_age: Duration) -> Self {
        self.min_age = min_age;
        self
    }

    /// Use the minimum commitment age configured on the controller
    pub async fn with_remote_min_age(mut self) -> Result<Self> {
        self.min_age = self.controller.min_commitment_age().await?;
        tracing::debug!("Controller minimum commitment age is {:?}", self.min_age);
        Ok(self)
    }

    pub fn state(&self) -> &SequencerState {
        &self.state
    }

    pub fn min_age(&self) -> Duration {
        self.min_age
    }

    pub fn resolver(&self) -> Address {
        self.resolver
    }

    pub fn controller(&self) -> &RegistrarController<'a, C> {
        &self.controller
    }

    pub fn pending_commitment(&self) -> Option<Commitment> {
        self.state.pending_commitment()
    }

    /// Commitment for `name` owned by and resolving to `registrant`,
    /// using this sequencer's resolver
    pub fn commitment_for(
        &self,
        name: &str,
        registrant: Address,
        secret: &Secret,
    ) -> Result<Commitment> {
        compute_commitment(name, registrant, secret, self.resolver, registrant)
    }

    /// Submit `commitment` from `from`. Only valid while idle.
    pub async fn commit(
        &mut self,
        commitment: Commitment,
        from: Address,
    ) -> Result<TransactionHandle> {
        if self.state != SequencerState::Idle {
            tracing::warn!("Refusing to commit while sequencer is {}", self.state);
            return Err(Error::Submission {
                method: COMMIT,
                reason: SubmissionReason::OutOfOrder(self.state),
            });
        }

        let handle = self.controller.commit(&commitment, from, None).await?;

        tracing::info!(
            "Commitment {} recorded in block {}",
            commitment,
            handle.block_number
        );
        self.state = SequencerState::Committed { commitment, handle };
        Ok(handle)
    }

    /// Time since the ledger recorded `commitment`; zero if it has not
    pub async fn commitment_age(&self, commitment: &Commitment) -> Result<Duration> {
        Ok(self.recorded_age(commitment).await?.unwrap_or(Duration::ZERO))
    }

    /// Whether `commitment` is recorded and at least `min_age` old
    pub async fn is_ready(&self, commitment: &Commitment, min_age: Duration) -> Result<bool> {
        Ok(matches!(self.recorded_age(commitment).await?, Some(age) if age >= min_age))
    }

    /// Check the pending commitment against the configured minimum age,
    /// moving to `Ready` once it has matured
    pub async fn poll_ready(&mut self) -> Result<bool> {
        match self.state {
            SequencerState::Ready { .. } => Ok(true),
            SequencerState::Committed { commitment, .. } => {
                if self.is_ready(&commitment, self.min_age).await? {
                    tracing::info!("Commitment {} is ready", commitment);
                    self.state = SequencerState::Ready { commitment };
                    Ok(true)
                } else {
                    Ok(false)
                }
            }
            state => Err(Error::NotCommitted(state)),
        }
    }

    /// Current price for holding `name` over `duration`; never cached
    pub async fn quote_cost(&self, name: &str, duration: Duration) -> Result<RegistrationCost> {
        let value = self.controller.rent_price(name, duration).await?;
        tracing::debug!("Quoted {} for '{}' over {:?}", value, name, duration);
        Ok(RegistrationCost { value, duration })
    }

    /// Reveal the pending commitment and register `name` to `registrant`,
    /// sending `payment` along.
    ///
    /// The arguments must reproduce the pending commitment. Nothing is sent
    /// unless the commitment has reached the minimum age. If the ledger
    /// refuses the reveal because the name was taken in the meantime, the
    /// sequencer fails with [`Error::Unavailable`]; it never re-commits.
    pub async fn register(
        &mut self,
        name: &str,
        registrant: Address,
        secret: &Secret,
        payment: U256,
        options: RegisterOptions,
    ) -> Result<TransactionHandle> {
        let label = normalize_label(name)?;
        let commitment = compute_commitment(&label, registrant, secret, self.resolver, registrant)?;

        let Some(pending) = self.state.pending_commitment() else {
            return Err(self.reject_without_commitment(&label).await);
        };

        if pending != commitment {
            tracing::warn!("Registration arguments for '{}' do not match commitment {}", label, pending);
            return Err(Error::Submission {
                method: REGISTER,
                reason: SubmissionReason::CommitmentMismatch,
            });
        }

        if let SequencerState::Committed { .. } = self.state {
            let age = self.commitment_age(&commitment).await?;
            if age < self.min_age {
                tracing::warn!(
                    "Commitment {} is only {:?} old, needs {:?}",
                    commitment,
                    age,
                    self.min_age
                );
                return Err(Error::Submission {
                    method: REGISTER,
                    reason: SubmissionReason::CommitmentTooNew {
                        age,
                        min_age: self.min_age,
                    },
                });
            }
            self.state = SequencerState::Ready { commitment };
        }

        let send = SendOptions::sender(registrant)
            .with_value(payment)
            .with_gas_hint(options.gas_price);

        let result = self
            .controller
            .register_with_config(
                &label,
                registrant,
                options.duration,
                secret,
                self.resolver,
                registrant,
                send,
            )
            .await;

        match result {
            Ok(handle) => {
                tracing::info!("Name '{}' registered to {}", label, registrant);
                self.state = SequencerState::Registered { handle };
                Ok(handle)
            }
            Err(e) if e.is_remote_rejection() => Err(self.classify_rejection(&label, e).await),
            // The reveal may have been mined; leave the outcome to the caller
            Err(e) => Err(e),
        }
    }

    async fn recorded_age(&self, commitment: &Commitment) -> Result<Option<Duration>> {
        let recorded = self.controller.commitment_timestamp(commitment).await?;
        if recorded == 0 {
            return Ok(None);
        }

        let now = self
            .caller
            .latest_block_timestamp()
            .await
            .map_err(|source| {
                tracing::warn!("Error reading latest block timestamp: {}", source);
                Error::Call {
                    method: "latestBlockTimestamp",
                    source,
                }
            })?;

        Ok(Some(Duration::from_secs(now.saturating_sub(recorded))))
    }

    /// Register was called with nothing pending; no transaction is sent
    async fn reject_without_commitment(&self, label: &str) -> Error {
        let available = self.controller.available(label).await;
        match available {
            Ok(false) => {
                tracing::warn!("Name '{}' is not available", label);
                return Error::Unavailable(label.to_string());
            }
            Ok(true) => {}
            Err(e) => {
                tracing::debug!("Could not check availability of '{}': {}", label, e);
            }
        }

        tracing::warn!("No pending commitment while sequencer is {}", self.state);
        Error::Submission {
            method: REGISTER,
            reason: SubmissionReason::OutOfOrder(self.state),
        }
    }

    /// The ledger refused the reveal; tell a lost race apart from other rejections
    async fn classify_rejection(&mut self, label: &str, rejection: Error) -> Error {
        let available = self.controller.available(label).await;
        match available {
            Ok(false) => {
                tracing::warn!("Name '{}' was taken before it could be registered", label);
                self.state = SequencerState::Failed;
                Error::Unavailable(label.to_string())
            }
            Ok(true) => rejection,
            Err(e) => {
                tracing::debug!("Could not re-check availability of '{}': {}", label, e);
                rejection
            }
        }
    }
}
