// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Label hash, name hash and reverse node derivation

use crate::constants::REVERSE_SUFFIX;
use crate::error::Result;
use crate::names::normalize::{normalize_domain, normalize_label};
use alloy_primitives::{keccak256, Address, B256};

/// keccak256 of the normalized label
pub fn labelhash(label: &str) -> Result<B256> {
    let label = normalize_label(label)?;
    Ok(keccak256(label.as_bytes()))
}

/// Recursive name hash of a full domain (e.g. "newname.theta").
/// The empty string hashes to the zero node.
pub fn namehash(domain: &str) -> Result<B256> {
    if domain.is_empty() {
        return Ok(B256::ZERO);
    }

    let domain = normalize_domain(domain)?;
    let node = fold_labels(&domain);

    tracing::debug!("namehash({}) = {}", domain, node);
    Ok(node)
}

/// Node under which the reverse record for `address` is stored
pub fn reverse_node(address: &Address) -> B256 {
    // Lowercase hex and the suffix are already normalized
    fold_labels(&format!("{}.{}", hex::encode(address.as_slice()), REVERSE_SUFFIX))
}

/// Name hash of an already-normalized domain
fn fold_labels(domain: &str) -> B256 {
    let mut node = B256::ZERO;
    for label in domain.rsplit('.') {
        let mut buf = [0u8; 64];
        buf[..32].copy_from_slice(node.as_slice());
        buf[32..].copy_from_slice(keccak256(label.as_bytes()).as_slice());
        node = keccak256(buf);
    }
    node
}
