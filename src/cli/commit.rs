// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Commit-reveal helper commands

use alloy_primitives::Address;
use anyhow::{Context, Result};
use clap::Subcommand;
use std::path::PathBuf;
use thetans::{ContractKind, Secret};

#[derive(Subcommand)]
pub enum CommitCommands {
    /// Generate a random 32-byte secret
    Secret,
    /// Compute the commitment the controller expects for a registration
    Compute {
        /// Name to register (label only, e.g., newname66)
        #[arg(long)]
        name: String,
        /// Owner of the new name
        #[arg(long)]
        owner: Address,
        /// Secret (0x-prefixed hex, 32 bytes)
        #[arg(long)]
        secret: String,
        /// Resolver address; taken from --network when omitted
        #[arg(long)]
        resolver: Option<Address>,
        /// Address the name resolves to; defaults to the owner
        #[arg(long)]
        registrant: Option<Address>,
        /// Network id used to look up the public resolver
        #[arg(long, default_value_t = thetans::NETWORK_TESTNET)]
        network: u64,
    },
}

pub fn execute(command: CommitCommands, config: Option<PathBuf>) -> Result<()> {
    match command {
        CommitCommands::Secret => secret_command(),
        CommitCommands::Compute {
            name,
            owner,
            secret,
            resolver,
            registrant,
            network,
        } => compute_command(name, owner, secret, resolver, registrant, network, config),
    }
}

fn secret_command() -> Result<()> {
    let secret = Secret::random();
    println!("{}", secret.to_hex());
    println!("\n⚠️  Keep this secret until the registration is revealed.");
    println!("Use a fresh secret for every commitment.");
    Ok(())
}

fn compute_command(
    name: String,
    owner: Address,
    secret: String,
    resolver: Option<Address>,
    registrant: Option<Address>,
    network: u64,
    config: Option<PathBuf>,
) -> Result<()> {
    let secret: Secret = secret.parse().context("Invalid secret, expected 32 bytes of hex")?;

    let resolver = match resolver {
        Some(resolver) => resolver,
        None => {
            let book = super::load_address_book(config)?;
            book.require(network, ContractKind::Resolver)
                .context("No resolver known for this network, pass --resolver")?
        }
    };
    let registrant = registrant.unwrap_or(owner);

    let commitment = thetans::compute_commitment(&name, owner, &secret, resolver, registrant)
        .context("Failed to compute commitment")?;

    println!("Name:       {}", thetans::normalize_label(&name)?);
    println!("Owner:      {}", owner);
    println!("Resolver:   {}", resolver);
    println!("Registrant: {}", registrant);
    println!("Commitment: {}", commitment);

    Ok(())
}
