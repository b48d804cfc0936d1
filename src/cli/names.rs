// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Name normalization and hashing commands

use alloy_primitives::Address;
use anyhow::{Context, Result};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum NamesCommands {
    /// Show the normalized form of a domain
    Normalize {
        /// Domain or label (e.g., NewName.theta)
        domain: String,
    },
    /// Hash a single label
    Labelhash {
        /// Label (e.g., newname66)
        label: String,
    },
    /// Compute the node hash of a full domain
    Namehash {
        /// Domain (e.g., newname66.theta)
        domain: String,
    },
    /// Compute the reverse-resolution node of an address
    ReverseNode {
        /// Account address (0x...)
        address: String,
    },
}

pub fn execute(command: NamesCommands) -> Result<()> {
    match command {
        NamesCommands::Normalize { domain } => normalize_command(domain),
        NamesCommands::Labelhash { label } => labelhash_command(label),
        NamesCommands::Namehash { domain } => namehash_command(domain),
        NamesCommands::ReverseNode { address } => reverse_node_command(address),
    }
}

fn normalize_command(domain: String) -> Result<()> {
    let normalized = thetans::normalize_domain(&domain).context("Failed to normalize domain")?;

    if normalized != domain {
        println!("{} -> {}", domain, normalized);
    } else {
        println!("{}", normalized);
    }

    Ok(())
}

fn labelhash_command(label: String) -> Result<()> {
    let hash = thetans::labelhash(&label).context("Failed to hash label")?;
    println!("{}", hash);
    Ok(())
}

fn namehash_command(domain: String) -> Result<()> {
    let node = thetans::namehash(&domain).context("Failed to hash domain")?;
    println!("{}", node);
    Ok(())
}

fn reverse_node_command(address: String) -> Result<()> {
    let address: Address = address
        .parse()
        .with_context(|| format!("Invalid address '{}'", address))?;

    println!("Reverse name: {}.{}", hex::encode(address.as_slice()), thetans::REVERSE_SUFFIX);
    println!("Node:         {}", thetans::reverse_node(&address));
    Ok(())
}
