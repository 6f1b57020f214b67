// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use bls_validators_types::api::Verifier;
use bls_validators_types::{PubKey, Signature, SignatureError};
use bls12_381::{G1Affine, G2Affine};
use hashlink::LruCache;
use parking_lot::RwLock;
use tracing::debug;

use crate::aggregation::{Aggregation, aggregate_sigs};
use crate::curve::{decode_pub_key, decode_signature, encode_g1, pairing_product_is_identity};
use crate::hash::{POP_DST, SIG_DST, hash_to_g1, pop_message};


/// BLS signature verifier over BLS12-381
///
/// - G2 for public keys, G1 for signatures
/// - proofs of possession and message signatures use distinct hash-to-curve domains
/// - same-message aggregation by summation, sound for keys with a verified proof of possession
pub struct BLSVerifier {
    /// Cache for decoded, subgroup-checked public key points
    point_cache: RwLock<LruCache<PubKey, G2Affine>>,
}

impl Default for BLSVerifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Maximum number of cached public key points to prevent excessive memory usage
const MAX_POINT_CACHE_SIZE: usize = 10_000;

impl BLSVerifier {
    pub fn new() -> Self {
        Self::with_cache_size(MAX_POINT_CACHE_SIZE)
    }

    pub fn with_cache_size(capacity: usize) -> Self {
        Self {
            point_cache: RwLock::new(LruCache::new(capacity)),
        }
    }

    /// Checks `e(sig, g2) == e(H(msg), pub_key)`
    fn verify_point(
        &self,
        pub_key: &G2Affine,
        msg: &[u8],
        dst: &[u8],
        sig: &G1Affine,
    ) -> Result<(), SignatureError> {
        let hashed = hash_to_g1(msg, dst);
        // e(-sig, g2) * e(H(m), pk) == 1
        match pairing_product_is_identity(&[(-sig, G2Affine::generator()), (hashed, *pub_key)]) {
            true => Ok(()),
            false => Err(SignatureError::VerificationFailed),
        }
    }

    /// Gets a cached public key or decodes and caches it
    fn get_or_cache_public_key(&self, pub_key: &PubKey) -> Result<G2Affine, SignatureError> {
        // Check cache first
        if let Some(cached) = self.point_cache.write().get(pub_key) {
            debug!(%pub_key, "public key cache hit");
            return Ok(*cached);
        }

        // Decode and cache; invalid keys are never cached
        let point = decode_pub_key(pub_key)?;
        debug!(%pub_key, "public key cache miss");
        self.point_cache.write().insert(pub_key.clone(), point);
        Ok(point)
    }

    pub fn cached_keys(&self) -> usize {
        self.point_cache.read().len()
    }
}

impl Verifier for BLSVerifier {
    fn verify_proof_of_possession(
        &self,
        pub_key: &PubKey,
        sig: &Signature,
    ) -> Result<(), SignatureError> {
        let pub_key = self.get_or_cache_public_key(pub_key)?;
        let sig = decode_signature(sig)?;
        self.verify_point(&pub_key, &pop_message(&pub_key), POP_DST, &sig)
    }

    fn verify(&self, pub_key: &PubKey, msg: &[u8], sig: &Signature) -> Result<(), SignatureError> {
        let pub_key = self.get_or_cache_public_key(pub_key)?;
        let sig = decode_signature(sig)?;
        self.verify_point(&pub_key, msg, SIG_DST, &sig)
    }

    fn aggregate(&self, sigs: &[Signature]) -> Result<Signature, SignatureError> {
        let typed_sigs = sigs
            .iter()
            .map(decode_signature)
            .collect::<Result<Vec<_>, _>>()?;

        let agg_sig = aggregate_sigs(&typed_sigs)?;
        Ok(encode_g1(&agg_sig))
    }

    fn verify_aggregate(
        &self,
        payload: &[u8],
        agg_sig: &Signature,
        signers: &[PubKey],
    ) -> Result<(), SignatureError> {
        if signers.is_empty() {
            return Err(SignatureError::EmptyPublicKeys);
        }

        let typed_pub_keys = signers
            .iter()
            .map(|pub_key| self.get_or_cache_public_key(pub_key))
            .collect::<Result<Vec<_>, _>>()?;

        let agg_pub_key = Aggregation::new(typed_pub_keys)?.aggregate_pub_keys();
        // Keys that cancel out must not turn the check into a trivial one.
        if bool::from(agg_pub_key.is_identity()) {
            return Err(SignatureError::VerificationFailed);
        }

        let agg_sig = decode_signature(agg_sig)?;
        self.verify_point(&agg_pub_key, payload, SIG_DST, &agg_sig)
    }
}
