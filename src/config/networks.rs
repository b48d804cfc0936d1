// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Address tables for known networks

use crate::config::ContractKind;
use crate::constants::{EMPTY_ADDRESS, NETWORK_LOCAL, NETWORK_MAINNET, NETWORK_TESTNET};
use crate::error::{Error, Result};
use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Deployed contract addresses on one network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NetworkAddresses {
    #[serde(default)]
    pub registrar: Address,
    #[serde(default)]
    pub registry: Address,
    #[serde(default)]
    pub controller: Address,
    #[serde(default)]
    pub resolver: Address,
    #[serde(default)]
    pub reverse_registrar: Address,
}

impl NetworkAddresses {
    pub fn get(&self, kind: ContractKind) -> Address {
        match kind {
            ContractKind::Registrar => self.registrar,
            ContractKind::Registry => self.registry,
            ContractKind::Controller => self.controller,
            ContractKind::Resolver => self.resolver,
            ContractKind::ReverseRegistrar => self.reverse_registrar,
        }
    }

    /// Copy every address `other` sets; sentinel fields leave ours alone
    pub fn overlay(&mut self, other: &NetworkAddresses) {
        let fields = [
            (&mut self.registrar, other.registrar),
            (&mut self.registry, other.registry),
            (&mut self.controller, other.controller),
            (&mut self.resolver, other.resolver),
            (&mut self.reverse_registrar, other.reverse_registrar),
        ];
        for (ours, theirs) in fields {
            if theirs != EMPTY_ADDRESS {
                *ours = theirs;
            }
        }
    }

    /// Kinds that still point at the sentinel address
    pub fn unset_kinds(&self) -> Vec<ContractKind> {
        ContractKind::ALL
            .into_iter()
            .filter(|kind| self.get(*kind) == EMPTY_ADDRESS)
            .collect()
    }
}

/// Lookup table from network id to deployed contract addresses
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AddressBook {
    networks: BTreeMap<u64, NetworkAddresses>,
}

impl AddressBook {
    /// Empty book; every lookup yields the sentinel
    pub fn new() -> Self {
        Self::default()
    }

    /// Deployments shipped with the library
    pub fn builtin() -> Self {
        let mut book = Self::new();

        book.insert(NETWORK_MAINNET, NetworkAddresses::default());
        book.insert(
            NETWORK_TESTNET,
            NetworkAddresses {
                registrar: address!("6aB24eD1a4136fA1bC00b1367e0c911C528FE6b5"),
                registry: address!("C0CF8Cf458F411c4E192760123347B3776AE9aBc"),
                controller: address!("090aeFe8de61b7634DA1FbbB33e0cD81590dB932"),
                resolver: address!("805f0f3b08A807B8F1f6BB1247665DE51885Ebd0"),
                reverse_registrar: address!("CfC0B6A22a38C0AE908683F2aa7e389602BE5C2B"),
            },
        );
        book.insert(
            NETWORK_LOCAL,
            NetworkAddresses {
                registrar: address!("42AD14F243A790F98C934a958c140c1f6d453E9a"),
                registry: address!("AC0a2200c55F4215F5C3F4e8116a7b948C75F870"),
                controller: address!("45c20EaB9fc8BEB6920387Ac142ff9DFd48660c1"),
                resolver: address!("E714A91bADB081bE43BCF265Cd715e7Dc4eAf617"),
                reverse_registrar: address!("256f4207239E543B8af70f6A5865086ED40BD009"),
            },
        );

        book
    }

    pub fn insert(&mut self, network_id: u64, addresses: NetworkAddresses) {
        self.networks.insert(network_id, addresses);
    }

    /// Overlay another book field by field; its non-sentinel addresses win
    pub fn merge(&mut self, other: AddressBook) {
        for (network_id, addresses) in other.networks {
            self.networks
                .entry(network_id)
                .and_modify(|existing| existing.overlay(&addresses))
                .or_insert(addresses);
        }
    }

    pub fn network(&self, network_id: u64) -> Option<&NetworkAddresses> {
        self.networks.get(&network_id)
    }

    pub fn network_ids(&self) -> impl Iterator<Item = u64> + '_ {
        self.networks.keys().copied()
    }

    /// Address of `kind` on `network_id`, or the sentinel if unknown
    pub fn resolve(&self, network_id: u64, kind: ContractKind) -> Address {
        self.networks
            .get(&network_id)
            .map(|addrs| addrs.get(kind))
            .unwrap_or(EMPTY_ADDRESS)
    }

    /// Like [`resolve`](Self::resolve) but fails on the sentinel
    pub fn require(&self, network_id: u64, kind: ContractKind) -> Result<Address> {
        let address = self.resolve(network_id, kind);
        if address == EMPTY_ADDRESS {
            tracing::warn!("No {} contract configured for network {}", kind, network_id);
            return Err(Error::UnsetAddress { network_id, kind });
        }
        Ok(address)
    }
}
