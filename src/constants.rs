// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

use alloy_primitives::Address;
use std::time::Duration;

/// Address returned for contracts that are not deployed on a network.
/// Calls against it fail remotely without a useful message, so check first.
pub const EMPTY_ADDRESS: Address = Address::ZERO;

/// Minimum age a commitment must reach before the controller accepts the reveal
pub const DEFAULT_MIN_COMMITMENT_AGE: Duration = Duration::from_secs(60);

/// Default registration period (one year)
pub const DEFAULT_REGISTRATION_PERIOD: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Suffix under which reverse records live
pub const REVERSE_SUFFIX: &str = "addr.reverse";

/// Top-level domain served by the registrar
pub const DEFAULT_TLD: &str = "theta";

/// Theta mainnet (no deployment yet, every address is unset)
pub const NETWORK_MAINNET: u64 = 363;

/// Theta testnet
pub const NETWORK_TESTNET: u64 = 365;

/// Local development chain
pub const NETWORK_LOCAL: u64 = 1337;
