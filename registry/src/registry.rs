// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use ahash::HashMap;
use bls_validators_types::api::Verifier;
use bls_validators_types::{
    BitField, PubKey, Signature, Slot, Stake, Validator, ValidatorIndex, ValidatorSet, Zero,
    is_strong_quorum,
};
use keccak_hash::H256;
use parking_lot::{RwLock, RwLockUpgradableReadGuard};
use tracing::{info, warn};

use crate::commitment::commitment;
use crate::{RegistryConfig, RegistryError, RegistryEvent, Receipt, Result};

/// Committed registry state. Only ever replaced under the write lock.
#[derive(Default)]
struct RegistryState {
    validators: HashMap<ValidatorIndex, Validator>,
    /// Reverse lookup, so one key cannot occupy two slots
    key_index: HashMap<PubKey, ValidatorIndex>,
    total_stake: Stake,
    events: Vec<RegistryEvent>,
}

/// Validator registry admitting validators on a verified proof of possession
///
/// Admissions are serialized: at most one `add_validator` call is between its
/// checks and its commit at any time. Reads are never blocked by a pending
/// pairing check and always observe the latest committed state.
pub struct Registry<V> {
    config: RegistryConfig,
    verifier: V,
    state: RwLock<RegistryState>,
}

impl<V: Verifier> Registry<V> {
    pub fn new(config: RegistryConfig, verifier: V) -> Self {
        Self {
            config,
            verifier,
            state: RwLock::new(RegistryState::default()),
        }
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn verifier(&self) -> &V {
        &self.verifier
    }

    /// Admits a validator at `index`.
    ///
    /// Either the validator becomes active, its stake is recorded and an event is
    /// appended, or the call fails and nothing changes.
    pub fn add_validator(
        &self,
        index: ValidatorIndex,
        pub_key: PubKey,
        signature: &Signature,
        stake_payment: Stake,
    ) -> Result<Receipt> {
        let result = self.try_add_validator(index, pub_key, signature, stake_payment);
        match &result {
            Ok(receipt) => info!(
                index,
                sequence = receipt.sequence,
                "validator admitted"
            ),
            Err(error) => warn!(index, %error, "validator admission rejected"),
        }
        result
    }

    fn try_add_validator(
        &self,
        index: ValidatorIndex,
        pub_key: PubKey,
        signature: &Signature,
        stake_payment: Stake,
    ) -> Result<Receipt> {
        if stake_payment < self.config.min_stake {
            return Err(RegistryError::InsufficientStake {
                index,
                stake: stake_payment,
                minimum: self.config.min_stake.clone(),
            });
        }

        // Excludes other admissions until this one commits or fails; readers proceed.
        let state = self.state.upgradable_read();

        if state.validators.contains_key(&index) {
            return Err(RegistryError::SlotOccupied { index });
        }
        if let Some(capacity) = self.config.max_validators {
            if state.validators.len() >= capacity {
                return Err(RegistryError::RegistryFull { capacity });
            }
        }
        if let Some(&existing) = state.key_index.get(&pub_key) {
            return Err(RegistryError::DuplicateKey { index, existing });
        }

        self.verifier
            .verify_proof_of_possession(&pub_key, signature)
            .map_err(|e| RegistryError::from_pop(index, e))?;

        let mut state = RwLockUpgradableReadGuard::upgrade(state);
        let event = RegistryEvent::ValidatorAdded {
            index,
            pub_key: pub_key.clone(),
            stake: stake_payment.clone(),
        };
        let sequence = state.events.len() as u64;

        state.total_stake += &stake_payment;
        state.key_index.insert(pub_key.clone(), index);
        state.validators.insert(
            index,
            Validator {
                index,
                pub_key,
                stake: stake_payment,
            },
        );
        state.events.push(event.clone());

        Ok(Receipt { sequence, event })
    }

    /// Returns the slot at `index`. Pure read.
    pub fn get_validator(&self, index: ValidatorIndex) -> Slot {
        self.state.read().validators.get(&index).cloned().into()
    }

    /// Snapshot of all active validators, heaviest stake first.
    pub fn validators(&self) -> ValidatorSet {
        self.state.read().validators.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.state.read().validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn total_stake(&self) -> Stake {
        self.state.read().total_stake.clone()
    }

    /// The event log, oldest first.
    pub fn events(&self) -> Vec<RegistryEvent> {
        self.state.read().events.clone()
    }

    /// Keccak-256 merkle root of the active validators, ordered by index.
    pub fn commitment(&self) -> H256 {
        commitment(self.state.read().validators.values())
    }

    /// Verifies that the validators in `signers` signed `payload` and hold a strong
    /// quorum (more than two thirds) of the total stake.
    ///
    /// Returns the stake behind the signature.
    pub fn verify_quorum(
        &self,
        payload: &[u8],
        signers: &BitField,
        signature: &Signature,
    ) -> Result<Stake> {
        let (signer_keys, signing_stake, total_stake) = {
            let state = self.state.read();
            let mut keys = Vec::new();
            let mut signing_stake = Stake::zero();
            for index in signers.iter() {
                let validator = state
                    .validators
                    .get(&index)
                    .ok_or(RegistryError::UnknownSigner(index))?;
                keys.push(validator.pub_key.clone());
                signing_stake += &validator.stake;
            }
            (keys, signing_stake, state.total_stake.clone())
        };

        if signer_keys.is_empty() {
            return Err(RegistryError::NoSigners);
        }

        self.verifier
            .verify_aggregate(payload, signature, &signer_keys)
            .map_err(RegistryError::from_aggregate)?;

        if !is_strong_quorum(&signing_stake, &total_stake) {
            return Err(RegistryError::InsufficientQuorum {
                signing: signing_stake,
                total: total_stake,
            });
        }

        Ok(signing_stake)
    }
}
