// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! The ledger-facing collaborator
//!
//! Everything that reaches the network goes through [`ContractCaller`].
//! Implementations own the transport (JSON-RPC, a signer, an in-process
//! simulator); this crate only encodes which method to invoke with which
//! arguments and interprets the decoded result.

use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// A decoded contract argument or return value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiValue {
    Address(Address),
    Bytes32(B256),
    Uint(U256),
    Bool(bool),
    String(String),
}

impl AbiValue {
    pub fn into_address(self) -> Result<Address, CallerError> {
        match self {
            AbiValue::Address(a) => Ok(a),
            other => Err(CallerError::unexpected("address", &other)),
        }
    }

    pub fn into_bytes32(self) -> Result<B256, CallerError> {
        match self {
            AbiValue::Bytes32(b) => Ok(b),
            other => Err(CallerError::unexpected("bytes32", &other)),
        }
    }

    pub fn into_uint(self) -> Result<U256, CallerError> {
        match self {
            AbiValue::Uint(u) => Ok(u),
            other => Err(CallerError::unexpected("uint256", &other)),
        }
    }

    pub fn into_bool(self) -> Result<bool, CallerError> {
        match self {
            AbiValue::Bool(b) => Ok(b),
            other => Err(CallerError::unexpected("bool", &other)),
        }
    }

    pub fn into_string(self) -> Result<String, CallerError> {
        match self {
            AbiValue::String(s) => Ok(s),
            other => Err(CallerError::unexpected("string", &other)),
        }
    }
}

impl From<Address> for AbiValue {
    fn from(value: Address) -> Self {
        AbiValue::Address(value)
    }
}

impl From<B256> for AbiValue {
    fn from(value: B256) -> Self {
        AbiValue::Bytes32(value)
    }
}

impl From<U256> for AbiValue {
    fn from(value: U256) -> Self {
        AbiValue::Uint(value)
    }
}

impl From<u64> for AbiValue {
    fn from(value: u64) -> Self {
        AbiValue::Uint(U256::from(value))
    }
}

impl From<bool> for AbiValue {
    fn from(value: bool) -> Self {
        AbiValue::Bool(value)
    }
}

impl From<&str> for AbiValue {
    fn from(value: &str) -> Self {
        AbiValue::String(value.to_string())
    }
}

impl From<String> for AbiValue {
    fn from(value: String) -> Self {
        AbiValue::String(value)
    }
}

/// Options attached to a state-mutating call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SendOptions {
    /// Native value transferred with the call
    pub value: U256,
    pub gas_hint: Option<U256>,
    pub from: Address,
}

impl SendOptions {
    pub fn sender(from: Address) -> Self {
        Self {
            value: U256::ZERO,
            gas_hint: None,
            from,
        }
    }

    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }

    pub fn with_gas_hint(mut self, gas_hint: Option<U256>) -> Self {
        self.gas_hint = gas_hint;
        self
    }
}

/// A mined transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionHandle {
    pub transaction_id: B256,
    pub block_number: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CallerError {
    /// The ledger executed the call and refused it
    #[error("reverted: {0}")]
    Reverted(String),

    #[error("transport failure: {0}")]
    Transport(String),

    #[error("could not decode result: {0}")]
    Decode(String),
}

impl CallerError {
    fn unexpected(expected: &str, got: &AbiValue) -> Self {
        CallerError::Decode(format!("expected {}, got {:?}", expected, got))
    }
}

/// Executes read and write calls against deployed contracts
#[async_trait]
pub trait ContractCaller: Send + Sync {
    /// Read-only query
    async fn call(
        &self,
        contract: Address,
        method: &str,
        args: Vec<AbiValue>,
    ) -> Result<AbiValue, CallerError>;

    /// State-mutating call; resolves once the transaction is mined
    async fn send(
        &self,
        contract: Address,
        method: &str,
        args: Vec<AbiValue>,
        options: SendOptions,
    ) -> Result<TransactionHandle, CallerError>;

    /// Timestamp (seconds) of the latest mined block
    async fn latest_block_timestamp(&self) -> Result<u64, CallerError>;
}

#[async_trait]
impl<T: ContractCaller + ?Sized> ContractCaller for Arc<T> {
    async fn call(
        &self,
        contract: Address,
        method: &str,
        args: Vec<AbiValue>,
    ) -> Result<AbiValue, CallerError> {
        (**self).call(contract, method, args).await
    }

    async fn send(
        &self,
        contract: Address,
        method: &str,
        args: Vec<AbiValue>,
        options: SendOptions,
    ) -> Result<TransactionHandle, CallerError> {
        (**self).send(contract, method, args, options).await
    }

    async fn latest_block_timestamp(&self) -> Result<u64, CallerError> {
        (**self).latest_block_timestamp().await
    }
}
