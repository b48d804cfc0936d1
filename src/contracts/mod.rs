// Copyright 2025 ThetaNS Contributors
// Licensed under GPL-3.0

//! Typed wrappers over the deployed name service contracts

pub mod controller;
pub mod registrar;
pub mod registry;
pub mod resolver;
pub mod reverse;

pub use controller::RegistrarController;
pub use registrar::BaseRegistrar;
pub use registry::Registry;
pub use resolver::PublicResolver;
pub use reverse::ReverseRegistrar;

use crate::caller::{AbiValue, CallerError, ContractCaller, SendOptions, TransactionHandle};
use crate::config::ContractKind;
use crate::error::{Error, Result, SubmissionReason};
use alloy_primitives::Address;

/// A contract at a fixed address reached through a caller
pub(crate) struct Contract<'a, C: ?Sized> {
    caller: &'a C,
    address: Address,
    kind: ContractKind,
}

impl<'a, C: ContractCaller + ?Sized> Contract<'a, C> {
    pub(crate) fn new(caller: &'a C, address: Address, kind: ContractKind) -> Self {
        Self {
            caller,
            address,
            kind,
        }
    }

    pub(crate) fn address(&self) -> Address {
        self.address
    }

    pub(crate) async fn query<T>(
        &self,
        method: &'static str,
        args: Vec<AbiValue>,
        decode: impl FnOnce(AbiValue) -> std::result::Result<T, CallerError>,
    ) -> Result<T> {
        tracing::debug!("Calling {}.{} at {}", self.kind, method, self.address);

        self.caller
            .call(self.address, method, args)
            .await
            .and_then(decode)
            .map_err(|source| {
                tracing::warn!("Error {} for {}: {}", method, self.kind, source);
                Error::Call { method, source }
            })
    }

    pub(crate) async fn submit(
        &self,
        method: &'static str,
        args: Vec<AbiValue>,
        options: SendOptions,
    ) -> Result<TransactionHandle> {
        match self.caller.send(self.address, method, args, options).await {
            Ok(handle) => {
                tracing::info!(
                    "{}.{} mined in block {} (tx {})",
                    self.kind,
                    method,
                    handle.block_number,
                    handle.transaction_id
                );
                Ok(handle)
            }
            Err(e) => {
                tracing::warn!("Error {} for {}: {}", method, self.kind, e);
                Err(Error::Submission {
                    method,
                    reason: SubmissionReason::Rejected(e),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_REGISTRATION_PERIOD;
    use crate::sequencer::{RegisterOptions, RegistrationSequencer, Secret};
    use crate::testing::{self, account, MockLedger, MIN_AGE};
    use alloy_primitives::U256;
    use std::time::Duration;

    const FUNDS: u64 = 1_000_000_000_000_000;

    async fn register(ledger: &MockLedger, label: &str, owner: Address) {
        ledger.fund(owner, FUNDS);
        let secret = Secret::random();
        let mut seq =
            RegistrationSequencer::for_network(ledger, &testing::address_book(), testing::NETWORK)
                .unwrap()
                .with_min_age(Duration::from_secs(MIN_AGE));

        let commitment = seq.commitment_for(label, owner, &secret).unwrap();
        seq.commit(commitment, owner).await.unwrap();
        ledger.advance(MIN_AGE);

        let cost = seq.quote_cost(label, DEFAULT_REGISTRATION_PERIOD).await.unwrap();
        seq.register(label, owner, &secret, cost.value, RegisterOptions::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_controller_queries() {
        let ledger = MockLedger::new();
        let book = testing::address_book();
        let controller =
            RegistrarController::for_network(&ledger, &book, testing::NETWORK).unwrap();

        assert_eq!(controller.owner().await.unwrap(), account(0xee));
        assert!(controller.available("newname66").await.unwrap());
        assert!(!controller.available("ab").await.unwrap());
        assert_eq!(
            controller.min_commitment_age().await.unwrap(),
            Duration::from_secs(MIN_AGE)
        );
        assert!(controller.max_commitment_age().await.unwrap() > Duration::from_secs(MIN_AGE));
        assert_eq!(
            controller
                .rent_price("newn", Duration::from_secs(10))
                .await
                .unwrap(),
            U256::from(10 * testing::PRICE_PER_SECOND)
        );

        register(&ledger, "newname66", account(0x01)).await;
        assert!(!controller.available("NewName66").await.unwrap());
    }

    #[tokio::test]
    async fn test_ownership_after_registration() {
        let ledger = MockLedger::new();
        let book = testing::address_book();
        let owner = account(0x01);
        register(&ledger, "newname66", owner).await;

        let registry = Registry::for_network(&ledger, &book, testing::NETWORK).unwrap();
        let registrar = BaseRegistrar::for_network(&ledger, &book, testing::NETWORK).unwrap();

        assert_eq!(registry.owner("newname66.theta").await.unwrap(), owner);
        assert_eq!(registry.owner("other.theta").await.unwrap(), Address::ZERO);
        assert_eq!(registrar.owner_of("newname66").await.unwrap(), owner);
    }

    #[tokio::test]
    async fn test_transfer_and_reclaim() {
        let ledger = MockLedger::new();
        let book = testing::address_book();
        let owner = account(0x01);
        let buyer = account(0x02);
        register(&ledger, "newname66", owner).await;
        ledger.fund(buyer, FUNDS);

        let registrar = BaseRegistrar::for_network(&ledger, &book, testing::NETWORK).unwrap();
        let registry = Registry::for_network(&ledger, &book, testing::NETWORK).unwrap();

        // Only the holder can transfer
        let err = registrar
            .transfer_from(buyer, buyer, "newname66", None)
            .await
            .unwrap_err();
        assert!(err.is_remote_rejection());

        registrar
            .transfer_from(owner, buyer, "newname66", Some(U256::ZERO))
            .await
            .unwrap();
        assert_eq!(registrar.owner_of("newname66").await.unwrap(), buyer);
        // Registry ownership follows only after a reclaim
        assert_eq!(registry.owner("newname66.theta").await.unwrap(), owner);

        registrar.reclaim("newname66", buyer, None).await.unwrap();
        assert_eq!(registry.owner("newname66.theta").await.unwrap(), buyer);
    }

    #[tokio::test]
    async fn test_forward_and_reverse_resolution() {
        let ledger = MockLedger::new();
        let book = testing::address_book();
        let owner = account(0x01);
        register(&ledger, "newname66", owner).await;

        let resolver = PublicResolver::for_network(&ledger, &book, testing::NETWORK).unwrap();
        let reverse = ReverseRegistrar::for_network(&ledger, &book, testing::NETWORK).unwrap();

        assert_eq!(resolver.addr("newname66.theta").await.unwrap(), owner);
        assert_eq!(resolver.name_for_address(&owner).await.unwrap(), "");

        reverse.set_name("NewName66.theta", owner, None).await.unwrap();
        assert_eq!(
            resolver.name_for_address(&owner).await.unwrap(),
            "newname66.theta"
        );
    }

    #[tokio::test]
    async fn test_sentinel_address_fails() {
        let ledger = MockLedger::new();
        let resolver = PublicResolver::at(&ledger, Address::ZERO);

        let err = resolver.addr("newname66.theta").await.unwrap_err();
        assert!(matches!(err, Error::Call { method: "addr", .. }));

        let book = testing::address_book();
        assert!(matches!(
            Registry::for_network(&ledger, &book, 1),
            Err(Error::UnsetAddress { kind: ContractKind::Registry, .. })
        ));
    }

    #[tokio::test]
    async fn test_unknown_token() {
        let ledger = MockLedger::new();
        let registrar = BaseRegistrar::at(&ledger, testing::addresses().registrar);
        assert!(matches!(
            registrar.owner_of("nobody").await,
            Err(Error::Call { method: "ownerOf", .. })
        ));
    }
}
