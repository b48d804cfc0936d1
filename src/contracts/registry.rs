// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

use crate::caller::{AbiValue, ContractCaller};
use crate::config::{AddressBook, ContractKind};
use crate::contracts::Contract;
use crate::error::Result;
use crate::names::namehash;
use alloy_primitives::Address;

/// Root registry mapping nodes to owners
pub struct Registry<'a, C: ?Sized> {
    contract: Contract<'a, C>,
}

impl<'a, C: ContractCaller + ?Sized> Registry<'a, C> {
    pub fn at(caller: &'a C, address: Address) -> Self {
        Self {
            contract: Contract::new(caller, address, ContractKind::Registry),
        }
    }

    pub fn for_network(caller: &'a C, book: &AddressBook, network_id: u64) -> Result<Self> {
        Ok(Self::at(caller, book.require(network_id, ContractKind::Registry)?))
    }

    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Owner of a full domain, e.g. "newname.theta"
    pub async fn owner(&self, domain: &str) -> Result<Address> {
        let node = namehash(domain)?;
        self.contract
            .query("owner", vec![node.into()], AbiValue::into_address)
            .await
    }
}
