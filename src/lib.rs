// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! ThetaNS - Theta Name Service client
//!
//! Typed access to the name service contracts (registrar, registry,
//! controller, public resolver, reverse registrar) and the commit-reveal
//! sequence used to register new names. Transport is supplied by the
//! caller through [`ContractCaller`].

pub mod caller;
pub mod config;
pub mod constants;
pub mod contracts;
pub mod error;
pub mod names;
pub mod sequencer;

#[cfg(test)]
mod testing;

pub use constants::*;

// Re-export commonly used types
pub use caller::{AbiValue, CallerError, ContractCaller, SendOptions, TransactionHandle};
pub use config::{AddressBook, ContractKind, NetworkAddresses};
pub use contracts::{BaseRegistrar, PublicResolver, RegistrarController, Registry, ReverseRegistrar};
pub use error::{Error, NameError, Result, SubmissionReason};
pub use names::{labelhash, namehash, normalize_domain, normalize_label, reverse_node};
pub use sequencer::{
    compute_commitment, wait_until_ready, Commitment, RegisterOptions, RegistrationCost,
    RegistrationSequencer, Secret, SequencerState,
};
