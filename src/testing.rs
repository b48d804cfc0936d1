// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! In-memory ledger used by the unit tests

use crate::caller::{AbiValue, CallerError, ContractCaller, SendOptions, TransactionHandle};
use crate::config::{AddressBook, NetworkAddresses};
use crate::constants::DEFAULT_TLD;
use crate::names::{labelhash, namehash, reverse_node};
use crate::sequencer::{compute_commitment, Secret};
use alloy_primitives::{keccak256, Address, B256, U256};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

pub const NETWORK: u64 = 4242;
pub const PRICE_PER_SECOND: u64 = 1_000;
pub const MIN_AGE: u64 = 60;
pub const MAX_AGE: u64 = 86_400;
pub const GENESIS_TIME: u64 = 1_700_000_000;

pub fn addresses() -> NetworkAddresses {
    NetworkAddresses {
        registrar: Address::repeat_byte(0xa1),
        registry: Address::repeat_byte(0xa2),
        controller: Address::repeat_byte(0xa3),
        resolver: Address::repeat_byte(0xa4),
        reverse_registrar: Address::repeat_byte(0xa5),
    }
}

pub fn address_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.insert(NETWORK, addresses());
    book
}

pub fn account(n: u8) -> Address {
    Address::repeat_byte(n)
}

#[derive(Default)]
struct LedgerState {
    now: u64,
    auto_advance: u64,
    block: u64,
    tx_count: u64,
    controller_owner: Address,
    balances: HashMap<Address, U256>,
    commitments: HashMap<B256, u64>,
    names: HashMap<String, Address>,
    tokens: HashMap<U256, Address>,
    registry_owners: HashMap<B256, Address>,
    addr_records: HashMap<B256, Address>,
    reverse_names: HashMap<B256, String>,
    fail_reads: bool,
    lose_receipts: bool,
    sent: Vec<String>,
}

pub struct MockLedger {
    state: Mutex<LedgerState>,
}

impl MockLedger {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(LedgerState {
                now: GENESIS_TIME,
                block: 1,
                controller_owner: account(0xee),
                ..Default::default()
            }),
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, LedgerState> {
        self.state.lock().unwrap()
    }

    pub fn advance(&self, secs: u64) {
        self.lock().now += secs;
    }

    /// Move the clock forward by `secs` every time it is read
    pub fn set_auto_advance(&self, secs: u64) {
        self.lock().auto_advance = secs;
    }

    pub fn fund(&self, who: Address, amount: u64) {
        *self.lock().balances.entry(who).or_default() += U256::from(amount);
    }

    pub fn balance(&self, who: Address) -> U256 {
        self.lock().balances.get(&who).copied().unwrap_or_default()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.lock().fail_reads = fail;
    }

    /// Apply sent transactions but report a transport failure to the sender
    pub fn set_lose_receipts(&self, lose: bool) {
        self.lock().lose_receipts = lose;
    }

    /// Methods sent so far, in order
    pub fn sent(&self) -> Vec<String> {
        self.lock().sent.clone()
    }

    pub fn commitment_timestamp(&self, commitment: B256) -> u64 {
        self.lock().commitments.get(&commitment).copied().unwrap_or(0)
    }

    pub fn now(&self) -> u64 {
        self.lock().now
    }
}

fn reverted(reason: &str) -> CallerError {
    CallerError::Reverted(reason.to_string())
}

fn arg(args: &[AbiValue], index: usize) -> Result<AbiValue, CallerError> {
    args.get(index)
        .cloned()
        .ok_or_else(|| CallerError::Decode(format!("missing argument {}", index)))
}

impl LedgerState {
    fn mine(&mut self, method: &str) -> TransactionHandle {
        self.block += 1;
        self.tx_count += 1;
        self.sent.push(method.to_string());
        TransactionHandle {
            transaction_id: keccak256(self.tx_count.to_be_bytes()),
            block_number: self.block,
        }
    }

    fn charge(&mut self, from: Address, amount: U256) -> Result<(), CallerError> {
        let balance = self.balances.entry(from).or_default();
        if balance.is_zero() || *balance < amount {
            return Err(reverted("insufficient funds"));
        }
        *balance -= amount;
        Ok(())
    }

    fn available(&self, label: &str) -> bool {
        label.chars().count() >= 3 && !self.names.contains_key(label)
    }

    fn register(&mut self, args: &[AbiValue], options: &SendOptions) -> Result<(), CallerError> {
        let label = arg(args, 0)?.into_string()?;
        let owner = arg(args, 1)?.into_address()?;
        let duration = arg(args, 2)?.into_uint()?;
        let secret = Secret::from_bytes(arg(args, 3)?.into_bytes32()?.0);
        let resolver = arg(args, 4)?.into_address()?;
        let addr = arg(args, 5)?.into_address()?;

        let commitment = compute_commitment(&label, owner, &secret, resolver, addr)
            .map_err(|e| reverted(&e.to_string()))?
            .as_b256();

        let recorded = self.commitments.get(&commitment).copied().unwrap_or(0);
        if recorded + MIN_AGE > self.now {
            return Err(reverted("commitment too new"));
        }
        if recorded + MAX_AGE <= self.now {
            return Err(reverted("commitment too old"));
        }
        if !self.available(&label) {
            return Err(reverted("name is unavailable"));
        }

        let price = duration.saturating_mul(U256::from(PRICE_PER_SECOND));
        if options.value < price {
            return Err(reverted("not enough value provided"));
        }
        // Excess is refunded, only the price leaves the account
        self.charge(options.from, price)?;
        self.commitments.remove(&commitment);

        let token = U256::from_be_bytes(keccak256(label.as_bytes()).0);
        let domain = format!("{}.{}", label, DEFAULT_TLD);
        let node = namehash(&domain).map_err(|e| reverted(&e.to_string()))?;

        self.names.insert(label, owner);
        self.tokens.insert(token, owner);
        self.registry_owners.insert(node, owner);
        if resolver != Address::ZERO {
            self.addr_records.insert(node, addr);
        }
        Ok(())
    }
}

#[async_trait]
impl ContractCaller for MockLedger {
    async fn call(
        &self,
        contract: Address,
        method: &str,
        args: Vec<AbiValue>,
    ) -> Result<AbiValue, CallerError> {
        let state = self.lock();
        if state.fail_reads {
            return Err(CallerError::Transport("connection refused".to_string()));
        }
        if contract == Address::ZERO {
            return Err(reverted(""));
        }

        match method {
            "available" => {
                let label = arg(&args, 0)?.into_string()?;
                Ok(state.available(&label).into())
            }
            "owner" if args.is_empty() => Ok(state.controller_owner.into()),
            "owner" => {
                let node = arg(&args, 0)?.into_bytes32()?;
                Ok(state.registry_owners.get(&node).copied().unwrap_or_default().into())
            }
            "rentPrice" => {
                let duration = arg(&args, 1)?.into_uint()?;
                Ok(duration.saturating_mul(U256::from(PRICE_PER_SECOND)).into())
            }
            "minCommitmentAge" => Ok(MIN_AGE.into()),
            "maxCommitmentAge" => Ok(MAX_AGE.into()),
            "commitments" => {
                let c = arg(&args, 0)?.into_bytes32()?;
                Ok(state.commitments.get(&c).copied().unwrap_or(0).into())
            }
            "ownerOf" => {
                let token = arg(&args, 0)?.into_uint()?;
                state
                    .tokens
                    .get(&token)
                    .copied()
                    .map(AbiValue::from)
                    .ok_or_else(|| reverted("nonexistent token"))
            }
            "addr" => {
                let node = arg(&args, 0)?.into_bytes32()?;
                Ok(state.addr_records.get(&node).copied().unwrap_or_default().into())
            }
            "name" => {
                let node = arg(&args, 0)?.into_bytes32()?;
                Ok(state.reverse_names.get(&node).cloned().unwrap_or_default().into())
            }
            other => Err(reverted(&format!("unknown method {}", other))),
        }
    }

    async fn send(
        &self,
        contract: Address,
        method: &str,
        args: Vec<AbiValue>,
        options: SendOptions,
    ) -> Result<TransactionHandle, CallerError> {
        let mut state = self.lock();
        if contract == Address::ZERO {
            return Err(reverted(""));
        }

        match method {
            "commit" => {
                let c = arg(&args, 0)?.into_bytes32()?;
                let existing = state.commitments.get(&c).copied().unwrap_or(0);
                if existing + MAX_AGE > state.now {
                    return Err(reverted("commitment already exists"));
                }
                state.charge(options.from, U256::ZERO)?;
                let now = state.now;
                state.commitments.insert(c, now);
            }
            "registerWithConfig" => state.register(&args, &options)?,
            "transferFrom" => {
                let from = arg(&args, 0)?.into_address()?;
                let to = arg(&args, 1)?.into_address()?;
                let token = arg(&args, 2)?.into_uint()?;
                if options.from != from || state.tokens.get(&token) != Some(&from) {
                    return Err(reverted("caller is not owner"));
                }
                state.tokens.insert(token, to);
            }
            "reclaim" => {
                let token = arg(&args, 0)?.into_uint()?;
                let owner = arg(&args, 1)?.into_address()?;
                if state.tokens.get(&token) != Some(&options.from) {
                    return Err(reverted("caller is not owner"));
                }
                let label = state
                    .names
                    .keys()
                    .find(|l| labelhash(l).map(|h| U256::from_be_bytes(h.0)).ok() == Some(token))
                    .cloned()
                    .ok_or_else(|| reverted("unknown token"))?;
                let node = namehash(&format!("{}.{}", label, DEFAULT_TLD))
                    .map_err(|e| reverted(&e.to_string()))?;
                state.registry_owners.insert(node, owner);
            }
            "setName" => {
                let name = arg(&args, 0)?.into_string()?;
                state.reverse_names.insert(reverse_node(&options.from), name);
            }
            other => return Err(reverted(&format!("unknown method {}", other))),
        }

        let handle = state.mine(method);
        if state.lose_receipts {
            return Err(CallerError::Transport("receipt timed out".to_string()));
        }
        Ok(handle)
    }

    async fn latest_block_timestamp(&self) -> Result<u64, CallerError> {
        let mut state = self.lock();
        if state.fail_reads {
            return Err(CallerError::Transport("connection refused".to_string()));
        }
        let now = state.now;
        state.now += state.auto_advance;
        Ok(now)
    }
}
