// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Deployed contract address commands

use anyhow::Result;
use clap::Subcommand;
use std::path::PathBuf;
use thetans::ContractKind;

#[derive(Subcommand)]
pub enum NetworkCommands {
    /// Show contract addresses for one network
    Show {
        /// Network id
        #[arg(long, default_value_t = thetans::NETWORK_TESTNET)]
        network: u64,
    },
    /// List known network ids
    List,
}

pub fn execute(command: NetworkCommands, config: Option<PathBuf>) -> Result<()> {
    let book = super::load_address_book(config)?;

    match command {
        NetworkCommands::Show { network } => {
            let Some(addresses) = book.network(network) else {
                println!("✗ Unknown network: {}", network);
                println!("Every contract resolves to {}.", thetans::EMPTY_ADDRESS);
                return Ok(());
            };

            println!("Contracts on network {}:\n", network);
            for kind in ContractKind::ALL {
                println!("  {:<18} {}", kind.to_string(), addresses.get(kind));
            }

            let unset = addresses.unset_kinds();
            if !unset.is_empty() {
                println!("\n⚠️  Not deployed: {}", join(&unset));
                println!("Calls to these contracts will fail.");
            }
        }
        NetworkCommands::List => {
            println!("Known networks:\n");
            for id in book.network_ids() {
                println!("  • {}", id);
            }
        }
    }

    Ok(())
}

fn join(kinds: &[ContractKind]) -> String {
    kinds
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
