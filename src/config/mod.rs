// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Per-network contract addresses

pub mod local;
pub mod networks;

pub use local::default_config_path;
pub use networks::{AddressBook, NetworkAddresses};

use serde::{Deserialize, Serialize};
use std::fmt;

/// The deployed contracts a network provides
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractKind {
    Registrar,
    Registry,
    Controller,
    Resolver,
    ReverseRegistrar,
}

impl ContractKind {
    pub const ALL: [ContractKind; 5] = [
        ContractKind::Registrar,
        ContractKind::Registry,
        ContractKind::Controller,
        ContractKind::Resolver,
        ContractKind::ReverseRegistrar,
    ];
}

impl fmt::Display for ContractKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ContractKind::Registrar => "registrar",
            ContractKind::Registry => "registry",
            ContractKind::Controller => "controller",
            ContractKind::Resolver => "resolver",
            ContractKind::ReverseRegistrar => "reverse registrar",
        };
        f.write_str(name)
    }
}
