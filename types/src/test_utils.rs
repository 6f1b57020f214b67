// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use num_bigint::BigUint;

use crate::api::Verifier;
use crate::{PubKey, Signature, SignatureError, Validator, ValidatorIndex, ValidatorSet};

/// Deterministic, non-zero key encoding. Not a curve point.
pub fn pub_key_from_seed(seed: u64) -> PubKey {
    PubKey([
        BigUint::from(seed) + 1u32,
        BigUint::from(seed) + 2u32,
        BigUint::from(seed) + 3u32,
        BigUint::from(seed) + 4u32,
    ])
}

/// Deterministic, non-zero signature encoding. Not a curve point.
pub fn signature_from_seed(seed: u64) -> Signature {
    Signature([BigUint::from(seed) + 1u32, BigUint::from(seed) + 2u32])
}

pub fn create_validator_set(stakes: &[u64]) -> ValidatorSet {
    stakes
        .iter()
        .enumerate()
        .map(|(i, stake)| Validator {
            index: i as ValidatorIndex,
            pub_key: pub_key_from_seed(i as u64),
            stake: (*stake).into(),
        })
        .collect()
}

/// Verifier that accepts or rejects everything, counting the calls it sees.
#[derive(Debug)]
pub struct MockVerifier {
    accept: AtomicBool,
    calls: AtomicUsize,
}

impl Default for MockVerifier {
    fn default() -> Self {
        Self::accepting()
    }
}

impl MockVerifier {
    pub fn accepting() -> Self {
        Self {
            accept: AtomicBool::new(true),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            accept: AtomicBool::new(false),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn set_accept(&self, accept: bool) {
        self.accept.store(accept, Ordering::SeqCst);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn outcome(&self) -> Result<(), SignatureError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.accept.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(SignatureError::VerificationFailed)
        }
    }
}

impl Verifier for MockVerifier {
    fn verify_proof_of_possession(
        &self,
        _pub_key: &PubKey,
        _sig: &Signature,
    ) -> Result<(), SignatureError> {
        self.outcome()
    }

    fn verify(&self, _pub_key: &PubKey, _msg: &[u8], _sig: &Signature) -> Result<(), SignatureError> {
        self.outcome()
    }

    fn aggregate(&self, sigs: &[Signature]) -> Result<Signature, SignatureError> {
        sigs.first().cloned().ok_or(SignatureError::EmptySignatures)
    }

    fn verify_aggregate(
        &self,
        _payload: &[u8],
        _agg_sig: &Signature,
        signers: &[PubKey],
    ) -> Result<(), SignatureError> {
        if signers.is_empty() {
            return Err(SignatureError::EmptyPublicKeys);
        }
        self.outcome()
    }
}
