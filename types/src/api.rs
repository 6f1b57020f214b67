// Copyright 2019-2024 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::{PubKey, Signature, SignatureError};

/// Verifier trait for the signature checks the validator registry relies on
///
/// Implementations must be safe for concurrent use: the registry calls into
/// the verifier while readers keep observing its state.
pub trait Verifier {
    /// Verifies that `sig` proves possession of the secret key behind `pub_key`
    ///
    /// The proof is a signature over the public key's own encoding, under a
    /// domain separation tag reserved for proofs of possession.
    ///
    /// # Returns
    /// `Ok(())` iff the pairing equation holds. Malformed points fail with
    /// [`SignatureError::InvalidPoint`], a well-formed but wrong proof with
    /// [`SignatureError::VerificationFailed`].
    fn verify_proof_of_possession(
        &self,
        pub_key: &PubKey,
        sig: &Signature,
    ) -> Result<(), SignatureError>;

    /// Verifies a signature over `msg` for the given public key
    ///
    /// # Arguments
    /// * `pub_key` - The public key to verify against
    /// * `msg` - The message that was signed
    /// * `sig` - The signature to verify
    fn verify(&self, pub_key: &PubKey, msg: &[u8], sig: &Signature) -> Result<(), SignatureError>;

    /// Aggregates signatures from participants
    ///
    /// # Arguments
    /// * `sigs` - The signatures to aggregate
    ///
    /// # Returns
    /// A Result containing the aggregated signature
    fn aggregate(&self, sigs: &[Signature]) -> Result<Signature, SignatureError>;

    /// Verifies an aggregate signature
    ///
    /// All signers must have signed the same `payload`. Callers are expected
    /// to only pass keys whose proof of possession has been checked.
    ///
    /// # Arguments
    /// * `payload` - The payload that was signed
    /// * `agg_sig` - The aggregate signature to verify
    /// * `signers` - The public keys of the signers
    fn verify_aggregate(
        &self,
        payload: &[u8],
        agg_sig: &Signature,
        signers: &[PubKey],
    ) -> Result<(), SignatureError>;
}
