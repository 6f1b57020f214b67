// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Same-message signature and public key aggregation.
//!
//! Plain summation is only sound when every key has a verified proof of
//! possession, which the registry enforces at admission.
use bls_validators_types::SignatureError;
use bls12_381::{G1Affine, G1Projective, G2Affine, G2Projective};

/// Aggregation context over the public keys of a signer set
pub struct Aggregation {
    pub_keys: Vec<G2Affine>,
}

impl Aggregation {
    pub fn new(pub_keys: Vec<G2Affine>) -> Result<Self, SignatureError> {
        if pub_keys.is_empty() {
            return Err(SignatureError::EmptyPublicKeys);
        }

        Ok(Self { pub_keys })
    }

    /// Sums the signer keys into the single key the aggregate signature verifies against
    pub fn aggregate_pub_keys(&self) -> G2Affine {
        let aggregated_point = self
            .pub_keys
            .iter()
            .fold(G2Projective::identity(), |acc, pk| acc + G2Projective::from(*pk));

        G2Affine::from(aggregated_point)
    }
}

/// Sums signatures over the same message
pub fn aggregate_sigs(sigs: &[G1Affine]) -> Result<G1Affine, SignatureError> {
    if sigs.is_empty() {
        return Err(SignatureError::EmptySignatures);
    }

    let mut aggregated_point = G1Projective::identity();
    for sig in sigs {
        aggregated_point += G1Projective::from(*sig);
    }

    Ok(G1Affine::from(aggregated_point))
}
