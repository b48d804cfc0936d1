// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

use crate::constants::DEFAULT_REGISTRATION_PERIOD;
use alloy_primitives::U256;
use std::time::Duration;

/// Price quote for holding a name over `duration`.
/// Prices can move between quote and purchase, so quote right before paying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistrationCost {
    pub value: U256,
    pub duration: Duration,
}

impl RegistrationCost {
    /// Quoted value escalated by `basis_points` (100 = 1%).
    /// What happens to the excess is up to the controller.
    pub fn with_margin(&self, basis_points: u32) -> U256 {
        let extra = self.value.saturating_mul(U256::from(basis_points)) / U256::from(10_000u64);
        self.value.saturating_add(extra)
    }
}

/// Registration parameters besides the payment itself
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterOptions {
    pub duration: Duration,
    pub gas_price: Option<U256>,
}

impl Default for RegisterOptions {
    fn default() -> Self {
        Self {
            duration: DEFAULT_REGISTRATION_PERIOD,
            gas_price: None,
        }
    }
}
