// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Registrar controller: pricing, availability and commit-reveal registration

use crate::caller::{AbiValue, ContractCaller, SendOptions, TransactionHandle};
use crate::config::{AddressBook, ContractKind};
use crate::contracts::Contract;
use crate::error::Result;
use crate::names::normalize_label;
use crate::sequencer::{Commitment, Secret};
use alloy_primitives::{Address, U256};
use std::time::Duration;

pub struct RegistrarController<'a, C: ?Sized> {
    contract: Contract<'a, C>,
}

impl<'a, C: ContractCaller + ?Sized> RegistrarController<'a, C> {
    pub fn at(caller: &'a C, address: Address) -> Self {
        Self {
            contract: Contract::new(caller, address, ContractKind::Controller),
        }
    }

    pub fn for_network(caller: &'a C, book: &AddressBook, network_id: u64) -> Result<Self> {
        Ok(Self::at(caller, book.require(network_id, ContractKind::Controller)?))
    }

    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Whether `label` can currently be registered
    pub async fn available(&self, label: &str) -> Result<bool> {
        let label = normalize_label(label)?;
        self.contract
            .query("available", vec![label.into()], AbiValue::into_bool)
            .await
    }

    /// Administrative owner of the controller itself
    pub async fn owner(&self) -> Result<Address> {
        self.contract
            .query("owner", Vec::new(), AbiValue::into_address)
            .await
    }

    /// Price of holding `label` for `duration`
    pub async fn rent_price(&self, label: &str, duration: Duration) -> Result<U256> {
        let label = normalize_label(label)?;
        self.contract
            .query(
                "rentPrice",
                vec![label.into(), duration.as_secs().into()],
                AbiValue::into_uint,
            )
            .await
    }

    pub async fn min_commitment_age(&self) -> Result<Duration> {
        self.age_setting("minCommitmentAge").await
    }

    /// Age after which an unrevealed commitment expires
    pub async fn max_commitment_age(&self) -> Result<Duration> {
        self.age_setting("maxCommitmentAge").await
    }

    async fn age_setting(&self, method: &'static str) -> Result<Duration> {
        let secs = self
            .contract
            .query(method, Vec::new(), AbiValue::into_uint)
            .await?;
        Ok(Duration::from_secs(secs.saturating_to::<u64>()))
    }

    pub async fn commit(
        &self,
        commitment: &Commitment,
        from: Address,
        gas_price: Option<U256>,
    ) -> Result<TransactionHandle> {
        self.contract
            .submit(
                "commit",
                vec![commitment.as_b256().into()],
                SendOptions::sender(from).with_gas_hint(gas_price),
            )
            .await
    }

    /// Block timestamp at which `commitment` was recorded, 0 if never
    pub async fn commitment_timestamp(&self, commitment: &Commitment) -> Result<u64> {
        let ts = self
            .contract
            .query(
                "commitments",
                vec![commitment.as_b256().into()],
                AbiValue::into_uint,
            )
            .await?;
        Ok(ts.saturating_to::<u64>())
    }

    /// Reveal a commitment and pay for `label`. `options.value` carries the payment.
    #[allow(clippy::too_many_arguments)]
    pub async fn register_with_config(
        &self,
        label: &str,
        owner: Address,
        duration: Duration,
        secret: &Secret,
        resolver: Address,
        addr: Address,
        options: SendOptions,
    ) -> Result<TransactionHandle> {
        let label = normalize_label(label)?;
        self.contract
            .submit(
                "registerWithConfig",
                vec![
                    label.into(),
                    owner.into(),
                    duration.as_secs().into(),
                    secret.as_b256().into(),
                    resolver.into(),
                    addr.into(),
                ],
                options,
            )
            .await
    }
}
