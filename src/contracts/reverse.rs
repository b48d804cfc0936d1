// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

use crate::caller::{ContractCaller, SendOptions, TransactionHandle};
use crate::config::{AddressBook, ContractKind};
use crate::contracts::Contract;
use crate::error::Result;
use crate::names::normalize_domain;
use alloy_primitives::{Address, U256};

/// Reverse registrar: lets an account claim the name it resolves back to
pub struct ReverseRegistrar<'a, C: ?Sized> {
    contract: Contract<'a, C>,
}

impl<'a, C: ContractCaller + ?Sized> ReverseRegistrar<'a, C> {
    pub fn at(caller: &'a C, address: Address) -> Self {
        Self {
            contract: Contract::new(caller, address, ContractKind::ReverseRegistrar),
        }
    }

    pub fn for_network(caller: &'a C, book: &AddressBook, network_id: u64) -> Result<Self> {
        Ok(Self::at(
            caller,
            book.require(network_id, ContractKind::ReverseRegistrar)?,
        ))
    }

    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Point the reverse record of `account` at `domain`
    pub async fn set_name(
        &self,
        domain: &str,
        account: Address,
        gas_price: Option<U256>,
    ) -> Result<TransactionHandle> {
        let domain = normalize_domain(domain)?;
        tracing::info!("Setting reverse name of {} to '{}'", account, domain);

        self.contract
            .submit(
                "setName",
                vec![domain.into()],
                SendOptions::sender(account).with_gas_hint(gas_price),
            )
            .await
    }
}
