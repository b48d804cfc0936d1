// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Base registrar: ownership of second-level names as tokens

use crate::caller::{AbiValue, ContractCaller, SendOptions, TransactionHandle};
use crate::config::{AddressBook, ContractKind};
use crate::contracts::Contract;
use crate::error::Result;
use crate::names::labelhash;
use alloy_primitives::{Address, U256};

pub struct BaseRegistrar<'a, C: ?Sized> {
    contract: Contract<'a, C>,
}

impl<'a, C: ContractCaller + ?Sized> BaseRegistrar<'a, C> {
    pub fn at(caller: &'a C, address: Address) -> Self {
        Self {
            contract: Contract::new(caller, address, ContractKind::Registrar),
        }
    }

    pub fn for_network(caller: &'a C, book: &AddressBook, network_id: u64) -> Result<Self> {
        Ok(Self::at(caller, book.require(network_id, ContractKind::Registrar)?))
    }

    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Current token owner of `label`
    pub async fn owner_of(&self, label: &str) -> Result<Address> {
        let token_id = token_id(label)?;
        self.contract
            .query("ownerOf", vec![token_id.into()], AbiValue::into_address)
            .await
    }

    /// Transfer the token for `label` from `from` to `to`
    pub async fn transfer_from(
        &self,
        from: Address,
        to: Address,
        label: &str,
        gas_price: Option<U256>,
    ) -> Result<TransactionHandle> {
        let token_id = token_id(label)?;
        tracing::info!("Transferring '{}' from {} to {}", label, from, to);

        self.contract
            .submit(
                "transferFrom",
                vec![from.into(), to.into(), token_id.into()],
                SendOptions::sender(from).with_gas_hint(gas_price),
            )
            .await
    }

    /// Set the registry owner of `label` back to `owner` (the token holder)
    pub async fn reclaim(
        &self,
        label: &str,
        owner: Address,
        gas_price: Option<U256>,
    ) -> Result<TransactionHandle> {
        let token_id = token_id(label)?;
        tracing::info!("Reclaiming '{}' for {}", label, owner);

        self.contract
            .submit(
                "reclaim",
                vec![token_id.into(), owner.into()],
                SendOptions::sender(owner).with_gas_hint(gas_price),
            )
            .await
    }
}

/// Token id is the label hash read as an integer
fn token_id(label: &str) -> Result<U256> {
    Ok(U256::from_be_bytes(labelhash(label)?.0))
}
