// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Blinded registration intents

use crate::error::{Error, Result};
use crate::names::normalize_label;
use alloy_primitives::{keccak256, Address, B256};
use rand::RngCore;
use std::fmt;
use std::str::FromStr;

/// Caller-chosen random value that blinds a commitment.
/// Never stored by this crate; do not reuse one across commitments for the same name.
#[derive(Clone, PartialEq, Eq)]
pub struct Secret([u8; 32]);

impl Secret {
    pub fn random() -> Self {
        let mut bytes = [0u8; 32];
        rand::rngs::OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    pub fn as_b256(&self) -> B256 {
        B256::from(self.0)
    }

    /// 0x-prefixed hex
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl FromStr for Secret {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let bytes = hex::decode(s.strip_prefix("0x").unwrap_or(s))?;
        let bytes: [u8; 32] = bytes
            .try_into()
            .map_err(|_| hex::FromHexError::InvalidStringLength)?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Secret(..)")
    }
}

/// Hash binding a name, its owner, resolver configuration and a secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Commitment(B256);

impl Commitment {
    pub fn from_b256(hash: B256) -> Self {
        Self(hash)
    }

    pub fn as_b256(&self) -> B256 {
        self.0
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Compute the commitment the controller will check on reveal.
///
/// Packed layout: `labelhash ++ owner ++ resolver ++ registrant ++ secret`.
/// With no resolver and no registrant the shorter
/// `labelhash ++ owner ++ secret` form is used instead.
pub fn compute_commitment(
    name: &str,
    owner: Address,
    secret: &Secret,
    resolver: Address,
    registrant: Address,
) -> Result<Commitment> {
    let label = normalize_label(name)?;
    let label_hash = keccak256(label.as_bytes());

    let mut packed = Vec::with_capacity(124);
    packed.extend_from_slice(label_hash.as_slice());
    packed.extend_from_slice(owner.as_slice());

    if resolver == Address::ZERO {
        if registrant != Address::ZERO {
            return Err(Error::InvalidCommitmentInput(
                "an address record requires a resolver".to_string(),
            ));
        }
    } else {
        packed.extend_from_slice(resolver.as_slice());
        packed.extend_from_slice(registrant.as_slice());
    }
    packed.extend_from_slice(&secret.0);

    let commitment = Commitment(keccak256(&packed));
    tracing::debug!("Commitment for '{}' is {}", label, commitment);
    Ok(commitment)
}
