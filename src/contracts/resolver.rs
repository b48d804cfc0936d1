// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Forward and reverse resolution

use crate::caller::{AbiValue, ContractCaller};
use crate::config::{AddressBook, ContractKind};
use crate::contracts::Contract;
use crate::error::Result;
use crate::names::{namehash, reverse_node};
use alloy_primitives::Address;

pub struct PublicResolver<'a, C: ?Sized> {
    contract: Contract<'a, C>,
}

impl<'a, C: ContractCaller + ?Sized> PublicResolver<'a, C> {
    pub fn at(caller: &'a C, address: Address) -> Self {
        Self {
            contract: Contract::new(caller, address, ContractKind::Resolver),
        }
    }

    pub fn for_network(caller: &'a C, book: &AddressBook, network_id: u64) -> Result<Self> {
        Ok(Self::at(caller, book.require(network_id, ContractKind::Resolver)?))
    }

    pub fn address(&self) -> Address {
        self.contract.address()
    }

    /// Address a full domain resolves to (zero if no record is set)
    pub async fn addr(&self, domain: &str) -> Result<Address> {
        let node = namehash(domain)?;
        self.contract
            .query("addr", vec![node.into()], AbiValue::into_address)
            .await
    }

    /// Name recorded for `address` under the reverse suffix (empty if none)
    pub async fn name_for_address(&self, address: &Address) -> Result<String> {
        let node = reverse_node(address);
        self.contract
            .query("name", vec![node.into()], AbiValue::into_string)
            .await
    }
}
