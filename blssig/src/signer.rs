// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Client-side key generation and signing.
//!
//! The registry itself only verifies; validators use this module to produce
//! their keys and proofs of possession.

use std::fmt;

use bls_validators_types::{PubKey, Signature, SignatureError};
use bls12_381::{G1Affine, G2Affine, Scalar};
use ff::Field;
use rand::RngCore;

use crate::curve::{encode_g1, encode_g2};
use crate::hash::{POP_DST, SIG_DST, hash_to_g1, pop_message};

/// BLS secret key, a non-zero scalar
#[derive(Clone)]
pub struct SecretKey(Scalar);

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretKey(..)")
    }
}

/// Generates a fresh key pair.
pub fn keygen<R: RngCore>(rng: &mut R) -> (SecretKey, PubKey) {
    let sk = SecretKey::generate(rng);
    let pk = sk.public_key();
    (sk, pk)
}

impl SecretKey {
    pub fn generate<R: RngCore>(rng: &mut R) -> Self {
        loop {
            let scalar = Scalar::random(&mut *rng);
            if !bool::from(scalar.is_zero()) {
                return Self(scalar);
            }
        }
    }

    /// Parses a little-endian scalar. Zero and non-canonical values are rejected.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<Self, SignatureError> {
        let scalar: Option<Scalar> = Scalar::from_bytes(bytes).into();
        match scalar {
            Some(s) if !bool::from(s.is_zero()) => Ok(Self(s)),
            _ => Err(SignatureError::InvalidSecretKey),
        }
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    pub(crate) fn public_key_point(&self) -> G2Affine {
        G2Affine::from(G2Affine::generator() * self.0)
    }

    pub fn public_key(&self) -> PubKey {
        encode_g2(&self.public_key_point())
    }

    /// Signs `msg` under the message domain.
    pub fn sign(&self, msg: &[u8]) -> Signature {
        encode_g1(&G1Affine::from(hash_to_g1(msg, SIG_DST) * self.0))
    }

    /// Signs the encoding of this key's own public key under the proof-of-possession domain.
    pub fn prove_possession(&self) -> Signature {
        let msg = pop_message(&self.public_key_point());
        encode_g1(&G1Affine::from(hash_to_g1(&msg, POP_DST) * self.0))
    }
}
